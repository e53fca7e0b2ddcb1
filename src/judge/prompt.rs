//! Prompt assembly for the judge.

use super::error::JudgeResult;
use super::types::JudgeRequest;

/// Keep/drop rules and scoring rubric sent with every batch.
pub const EVALUATION_CRITERIA: &str = "\
You are a pre-delivery quality gate for a news digest. Re-screen each candidate headline \
quickly and keep only high signal-to-noise items.

[Hard rules: an item must satisfy at least one]
A) Clearly about AI technology or products: model releases, evaluations, agent toolchains, \
multimodal, reasoning, safety, on-device inference, AI chips.
B) Clearly about wearable/XR product execution: mass production, supply chain, compliance, \
channels, pricing. A wearable/XR context must be explicit (glasses, earbuds, watches, rings, \
AR/VR/XR, a named brand).

[Always drop]
- Pure social news, entertainment gossip, generic gold/stock prices, general politics and \
diplomacy, celebrity events.
- Items that only matched generic words such as cost, channel or price with no AI or wearable \
context.
- Discounts, promotions and shopping guides, unless a key launch, regulatory or \
mass-production event strongly tied to wearables/XR.

[Scoring]
- 0-40: clearly irrelevant or low value (drop)
- 41-70: weakly related, not worth an interruption (drop by default)
- 71-85: relevant and valuable (keep)
- 86-100: strong signal (keep first)";

/// Brief rules used when no prompt file is configured.
pub const DEFAULT_BRIEF_RULES: &str = "\
- One sentence, at most 40 characters, stating what changed and what it means.
- Do not restate the title. When information is thin stay conservative and do not invent.";

/// System message: criteria plus brief rules (falls back to [`DEFAULT_BRIEF_RULES`]).
pub fn system_prompt(criteria: &str, brief_rules: &str) -> String {
    let rules = match brief_rules.trim() {
        "" => DEFAULT_BRIEF_RULES,
        custom => custom,
    };
    format!("{criteria}\n\n[Brief annotation rules]\n{rules}\n")
}

/// User message: delivery mode, output contract and the JSON-encoded items.
pub fn user_prompt(request: &JudgeRequest) -> JudgeResult<String> {
    let items = serde_json::to_string(&request.items)?;
    Ok(format!(
        "Judge every candidate below: is it worth delivering?\n\
         - Delivery mode: {mode}\n\n\
         Output must be a JSON array. Each object contains:\n\
         - \"id\": identical to the input id\n\
         - \"keep\": true/false (deliver or not)\n\
         - \"score\": 0-100 (value/relevance, higher is more worth delivering)\n\
         - \"reason\": short reason (at most 20 words)\n\
         - \"brief\": one-sentence key update (follow the brief annotation rules)\n\n\
         Output only JSON, no extra explanation.\n\n\
         Input: {items}",
        mode = request.mode,
    ))
}
