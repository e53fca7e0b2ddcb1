use std::collections::{HashMap, HashSet};

use futures_util::stream::{self, StreamExt};
use tracing::debug;

use crate::constants::{MAX_FETCH_WORKERS, MIN_FETCH_WORKERS};

use super::fetcher::ContentFetcher;

/// Fans URL fetches out over a bounded number of in-flight requests.
#[derive(Debug, Clone)]
pub struct ContentEnricher<F> {
    fetcher: F,
    workers: usize,
}

impl<F: ContentFetcher> ContentEnricher<F> {
    /// `workers` is clamped to `[1, 16]`.
    pub fn new(fetcher: F, workers: usize) -> Self {
        Self {
            fetcher,
            workers: workers.clamp(MIN_FETCH_WORKERS, MAX_FETCH_WORKERS),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetches each distinct, non-blank URL once and returns `url -> text` for the ones
    /// that produced usable content.
    pub async fn enrich<'a, I>(&self, urls: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let unique: Vec<&str> = urls
            .into_iter()
            .map(str::trim)
            .filter(|u| !u.is_empty() && seen.insert(*u))
            .collect();

        if unique.is_empty() {
            return HashMap::new();
        }

        debug!(
            urls = unique.len(),
            workers = self.workers,
            "Fetching candidate content"
        );

        let fetcher = &self.fetcher;
        let results: Vec<_> = stream::iter(unique.into_iter().map(|url| async move {
            let result = fetcher.fetch_text(url).await;
            (url, result)
        }))
        .buffer_unordered(self.workers)
        .collect()
        .await;

        let mut contents = HashMap::with_capacity(results.len());
        for (url, result) in results {
            match result {
                Ok(text) => {
                    contents.insert(url.to_string(), text);
                }
                Err(e) => debug!(url, error = %e, "No content for URL"),
            }
        }

        debug!(fetched = contents.len(), "Content enrichment complete");
        contents
    }
}
