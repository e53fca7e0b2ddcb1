use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::{MAX_BRIEF_CHARS, MAX_SCORE};
use crate::text::{flatten_newlines, truncate_chars};

use super::error::{JudgeError, JudgeResult};
use super::types::{Decision, DecisionMap};

/// Pulls the JSON payload out of model output that may be fenced or wrapped in prose.
///
/// Prefers the outermost `[...]` span and falls back to the outermost `{...}` span.
pub fn extract_json(text: &str) -> Option<&str> {
    let mut s = text.trim();
    if s.is_empty() {
        return None;
    }

    if s.starts_with("```") {
        s = s.trim_matches('`').trim();
        if let Some((first, rest)) = s.split_once('\n')
            && matches!(first.trim().to_lowercase().as_str(), "json" | "javascript")
        {
            s = rest.trim();
        }
    }

    span(s, '[', ']').or_else(|| span(s, '{', '}'))
}

fn span(s: &str, open: char, close: char) -> Option<&str> {
    let l = s.find(open)?;
    let r = s.rfind(close)?;
    (r > l).then(|| s[l..=r].trim())
}

/// Parses judge output into decisions keyed by candidate id.
///
/// Rows that are not objects or lack an id are skipped. Missing `keep` means drop,
/// missing `score` means 0.
pub fn parse_decisions(raw: &str) -> JudgeResult<DecisionMap> {
    let extracted = extract_json(raw).ok_or(JudgeError::NoJson)?;
    let data: Value = serde_json::from_str(extracted)?;
    let Value::Array(rows) = data else {
        return Err(JudgeError::NotArray);
    };

    let mut decisions = DecisionMap::with_capacity(rows.len());
    for row in rows {
        let Value::Object(row) = row else {
            debug!("Skipping non-object judge row");
            continue;
        };

        let id = text_field(&row, "id");
        if id.is_empty() {
            debug!("Skipping judge row without id");
            continue;
        }

        let decision = Decision {
            keep: keep_field(&row),
            score: score_field(&row, &id)?,
            reason: text_field(&row, "reason"),
            brief: normalize_brief(&text_field(&row, "brief")),
        };
        decisions.insert(id, decision);
    }

    Ok(decisions)
}

/// Collapses newlines, trims and caps to [`MAX_BRIEF_CHARS`] characters.
pub fn normalize_brief(brief: &str) -> String {
    let flat = flatten_newlines(brief);
    truncate_chars(flat.trim(), MAX_BRIEF_CHARS)
        .trim_end()
        .to_string()
}

fn text_field(row: &Map<String, Value>, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

fn keep_field(row: &Map<String, Value>) -> bool {
    match row.get("keep") {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}

fn score_field(row: &Map<String, Value>, id: &str) -> JudgeResult<u8> {
    let invalid = |value: &Value| JudgeError::InvalidField {
        id: id.to_string(),
        field: "score",
        value: value.to_string(),
    };

    let score = match row.get("score") {
        None | Some(Value::Null) => 0.0,
        Some(v @ Value::Number(n)) => n.as_f64().ok_or_else(|| invalid(v))?,
        Some(v @ Value::String(s)) => match s.trim() {
            "" => 0.0,
            t => t.parse::<f64>().map_err(|_| invalid(v))?,
        },
        Some(v) => return Err(invalid(v)),
    };

    if !score.is_finite() {
        return Err(JudgeError::InvalidField {
            id: id.to_string(),
            field: "score",
            value: score.to_string(),
        });
    }

    Ok(score.trunc().clamp(0.0, f64::from(MAX_SCORE)) as u8)
}
