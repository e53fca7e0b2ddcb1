use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::candidate::collect_candidates;
use crate::config::GateConfig;
use crate::enrich::{ContentEnricher, ContentFetcher, HttpContentFetcher};
use crate::judge::{BatchJudge, GenaiJudgeClient, JudgeClient};
use crate::merge::{compute_kept_ids, evaluation_window};
use crate::report::Collections;
use crate::rewrite::rewrite_collections;

use super::error::GateError;
use super::stats::EvaluationStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Result of one gate run: the (possibly filtered) collections plus stats.
pub struct GateOutcome {
    pub collections: Collections,
    pub stats: EvaluationStats,
}

impl GateOutcome {
    fn passthrough(collections: &Collections, stats: EvaluationStats) -> Self {
        Self {
            collections: collections.clone(),
            stats,
        }
    }
}

/// Pre-delivery filter over the four content collections.
pub struct QualityGate<C, F> {
    config: GateConfig,
    brief_rules: String,
    client: C,
    enricher: Option<ContentEnricher<F>>,
}

impl QualityGate<GenaiJudgeClient, HttpContentFetcher> {
    /// Production wiring: `genai` judge, reqwest fetcher when `use_content` is set.
    pub fn from_config(config: GateConfig) -> Self {
        let client = GenaiJudgeClient::from_config(&config);
        let enricher = config.use_content.then(|| {
            ContentEnricher::new(
                HttpContentFetcher::new(config.content_fetch_timeout, config.max_content_chars),
                config.fetch_workers(),
            )
        });

        let mut gate = Self::new(config, client);
        gate.enricher = enricher;
        gate
    }
}

impl<C, F> QualityGate<C, F>
where
    C: JudgeClient,
    F: ContentFetcher,
{
    /// Creates a gate without enrichment. Brief rules are read from the configured file.
    pub fn new(config: GateConfig, client: C) -> Self {
        let brief_rules = config.load_brief_prompt();
        Self {
            config,
            brief_rules,
            client,
            enricher: None,
        }
    }

    /// Enables content enrichment (only consulted when `use_content` is set).
    pub fn with_enricher(mut self, enricher: ContentEnricher<F>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    pub fn with_brief_rules(mut self, brief_rules: impl Into<String>) -> Self {
        self.brief_rules = brief_rules.into();
        self
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Filters `collections` before delivery. Never fails; see the module docs.
    pub async fn filter_before_send(&self, collections: &Collections, mode: &str) -> GateOutcome {
        if !self.config.enabled {
            return GateOutcome::passthrough(collections, EvaluationStats::default());
        }

        let span = info_span!("quality_gate", run_id = %Uuid::new_v4(), mode);
        self.run(collections, mode).instrument(span).await
    }

    async fn run(&self, collections: &Collections, mode: &str) -> GateOutcome {
        let mut stats = EvaluationStats::default();

        if self.config.credential().is_none() {
            let err = GateError::MissingCredential;
            warn!("{}", err);
            stats.error = Some(err.to_string());
            return GateOutcome::passthrough(collections, stats);
        }

        let (items, pointers) = collect_candidates(collections);
        stats.total_items = items.len();
        if items.is_empty() {
            debug!("No candidates to evaluate");
            return GateOutcome::passthrough(collections, stats);
        }

        let evaluated = evaluation_window(&items, self.config.max_items);
        stats.evaluated_items = evaluated.len();

        let enricher = if self.config.use_content {
            self.enricher.as_ref()
        } else {
            None
        };
        let judge = BatchJudge::new(&self.client, self.config.batch_size)
            .with_enricher(enricher)
            .with_brief_rules(&self.brief_rules)
            .with_debug(self.config.debug);

        let decisions = match judge.judge(evaluated, mode).await.map_err(GateError::from) {
            Ok(decisions) => decisions,
            Err(e) => {
                warn!(error = %e, "Quality gate evaluation failed; delivering unfiltered");
                stats.error = Some(e.to_string());
                return GateOutcome::passthrough(collections, stats);
            }
        };

        let kept = compute_kept_ids(&items, evaluated, &decisions, self.config.min_score);
        let filtered = rewrite_collections(collections, &kept, &pointers, &decisions);
        stats.record_kept(kept.len());

        info!(
            total = stats.total_items,
            evaluated = stats.evaluated_items,
            kept = stats.kept_items,
            dropped = stats.dropped_items,
            "Quality gate complete"
        );

        GateOutcome {
            collections: filtered,
            stats,
        }
    }
}
