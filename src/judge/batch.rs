use std::collections::{HashMap, HashSet};
use std::ops::Range;

use tracing::{debug, info};

use crate::candidate::CandidateItem;
use crate::enrich::{ContentEnricher, ContentFetcher};

use super::client::JudgeClient;
use super::error::JudgeResult;
use super::parse::parse_decisions;
use super::prompt::EVALUATION_CRITERIA;
use super::types::{DecisionMap, JudgeItem, JudgeRequest};

/// Contiguous index ranges of at most `batch_size` items. `batch_size == 0` yields one range.
pub fn batch_ranges(len: usize, batch_size: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let size = if batch_size == 0 { len } else { batch_size };
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

/// Sends candidates to the judge one batch at a time.
pub struct BatchJudge<'a, C, F> {
    client: &'a C,
    enricher: Option<&'a ContentEnricher<F>>,
    batch_size: usize,
    brief_rules: &'a str,
    debug: bool,
}

impl<'a, C, F> BatchJudge<'a, C, F>
where
    C: JudgeClient,
    F: ContentFetcher,
{
    pub fn new(client: &'a C, batch_size: usize) -> Self {
        Self {
            client,
            enricher: None,
            batch_size,
            brief_rules: "",
            debug: false,
        }
    }

    /// Fetches page text for each batch's URLs before judging it.
    pub fn with_enricher(mut self, enricher: Option<&'a ContentEnricher<F>>) -> Self {
        self.enricher = enricher;
        self
    }

    pub fn with_brief_rules(mut self, brief_rules: &'a str) -> Self {
        self.brief_rules = brief_rules;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Judges every item, batch by batch.
    ///
    /// The first failing batch ends the pass: its error is returned and no further batches
    /// are sent. Decisions for ids outside the batch that produced them are ignored.
    pub async fn judge(&self, items: &[CandidateItem], mode: &str) -> JudgeResult<DecisionMap> {
        let ranges = batch_ranges(items.len(), self.batch_size);
        let mut decisions = DecisionMap::new();

        for (index, range) in ranges.iter().enumerate() {
            let chunk = &items[range.clone()];
            let batch = self.judge_batch(chunk, mode).await?;
            debug!(
                batch = index,
                size = chunk.len(),
                decided = batch.len(),
                "Judge batch complete"
            );
            decisions.extend(batch);
        }

        Ok(decisions)
    }

    async fn judge_batch(&self, chunk: &[CandidateItem], mode: &str) -> JudgeResult<DecisionMap> {
        let contents = match self.enricher {
            Some(enricher) => enricher.enrich(chunk.iter().map(|it| it.url.as_str())).await,
            None => HashMap::new(),
        };

        let request = JudgeRequest {
            criteria: EVALUATION_CRITERIA.to_string(),
            brief_rules: self.brief_rules.to_string(),
            mode: mode.to_string(),
            items: chunk
                .iter()
                .map(|it| JudgeItem {
                    id: it.id.clone(),
                    title: it.title.clone(),
                    source: it.source_name.clone(),
                    group: it.group.clone(),
                    url: it.url.clone(),
                    content: contents.get(it.url.trim()).cloned().unwrap_or_default(),
                })
                .collect(),
        };

        if self.debug {
            info!(items = request.items.len(), "Sending items to judge");
        }

        let raw = self.client.judge(&request).await?;
        let mut decisions = parse_decisions(&raw)?;

        let ids: HashSet<&str> = request.item_ids().collect();
        decisions.retain(|id, _| {
            let known = ids.contains(id.as_str());
            if !known {
                debug!(id = %id, "Ignoring decision for id outside batch");
            }
            known
        });

        Ok(decisions)
    }
}
