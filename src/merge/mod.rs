//! Decision merging: turn judge verdicts into the set of surviving candidate ids.
//!
//! The policy favours recall. Anything the judge did not get to see (past the evaluation
//! cap) or silently skipped is kept; only an explicit, sufficiently scored verdict can keep
//! an evaluated item, and only an explicit verdict can drop one.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tracing::debug;

use crate::candidate::CandidateItem;
use crate::judge::DecisionMap;

/// Ids that survive filtering.
pub type KeptIds = HashSet<String>;

/// Leading slice of `items` that is sent for judgment. `max_items == 0` means all of them.
pub fn evaluation_window(items: &[CandidateItem], max_items: usize) -> &[CandidateItem] {
    if max_items == 0 {
        items
    } else {
        &items[..max_items.min(items.len())]
    }
}

/// Computes the kept-id set.
///
/// - ids outside `evaluated` are kept;
/// - evaluated ids without a decision are kept;
/// - evaluated ids with a decision are kept iff `keep && score >= min_score`.
pub fn compute_kept_ids(
    items: &[CandidateItem],
    evaluated: &[CandidateItem],
    decisions: &DecisionMap,
    min_score: u8,
) -> KeptIds {
    let evaluated: HashSet<&str> = evaluated.iter().map(|it| it.id.as_str()).collect();
    let mut unanswered = 0usize;

    let kept: KeptIds = items
        .iter()
        .filter(|it| {
            if !evaluated.contains(it.id.as_str()) {
                return true;
            }
            match decisions.get(&it.id) {
                Some(decision) => decision.passes(min_score),
                None => {
                    unanswered += 1;
                    true
                }
            }
        })
        .map(|it| it.id.clone())
        .collect();

    if unanswered > 0 {
        debug!(unanswered, "Judge omitted evaluated items; keeping them");
    }

    kept
}
