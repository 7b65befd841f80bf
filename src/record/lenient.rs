//! Forgiving field deserializers.
//!
//! The analysis backend makes no promises about field presence or type.
//! Every helper here accepts any JSON value and yields `None` / empty when
//! the value has the wrong shape, so deserializing a record object can
//! never fail because of one bad field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::types::ScoreEntry;

/// Coerce a JSON value to a finite number. Numeric strings are accepted.
pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// JavaScript-style truthiness, used when counting signal flags.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Non-empty string. Numbers and booleans are rendered as text.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Verification suggestions arrive either as plain strings or as
/// `{ "step": "..." }` objects.
pub(crate) fn steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Object(map) => match map.get("step") {
                    Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    _ => None,
                },
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Score mapping in source order. Non-numeric values keep their key with a
/// score of 0 so the entry count always matches the key count.
pub(crate) fn score_map<'de, D>(deserializer: D) -> Result<Option<Vec<ScoreEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => Some(
            map.into_iter()
                .map(|(key, score)| ScoreEntry {
                    score: value_as_f64(&score).unwrap_or(0.0),
                    key,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Nested object, or `None` if it is absent or does not fit `T`.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Length of an array; anything else counts as zero.
pub(crate) fn array_len<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    })
}

/// Number of truthy values in an object; anything else counts as zero.
pub(crate) fn truthy_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => map.values().filter(|v| is_truthy(v)).count(),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        n: Option<f64>,
        #[serde(default, deserialize_with = "string")]
        s: Option<String>,
        #[serde(default, deserialize_with = "steps")]
        steps: Vec<String>,
        #[serde(default, deserialize_with = "score_map")]
        scores: Option<Vec<ScoreEntry>>,
        #[serde(default, deserialize_with = "truthy_count")]
        signals: usize,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).expect("lenient probe must always deserialize")
    }

    #[test]
    fn test_number_accepts_numeric_strings_and_rejects_garbage() {
        assert_eq!(probe(json!({"n": 42})).n, Some(42.0));
        assert_eq!(probe(json!({"n": "17.5"})).n, Some(17.5));
        assert_eq!(probe(json!({"n": "high"})).n, None);
        assert_eq!(probe(json!({"n": null})).n, None);
        assert_eq!(probe(json!({"n": [1, 2]})).n, None);
        assert_eq!(probe(json!({})).n, None);
    }

    #[test]
    fn test_string_treats_empty_as_missing() {
        assert_eq!(probe(json!({"s": ""})).s, None);
        assert_eq!(probe(json!({"s": "HIGH"})).s, Some("HIGH".to_string()));
        assert_eq!(probe(json!({"s": 3})).s, Some("3".to_string()));
        assert_eq!(probe(json!({"s": {"a": 1}})).s, None);
    }

    #[test]
    fn test_steps_accepts_strings_and_step_objects() {
        let p = probe(json!({"steps": ["Check source", {"step": "Search claim"}, {"other": 1}, 7]}));
        assert_eq!(p.steps, vec!["Check source", "Search claim"]);
    }

    #[test]
    fn test_score_map_preserves_order_and_key_count() {
        let p = probe(json!({"scores": {"zeta": 10, "alpha": "x", "mid": 55.5}}));
        let scores = p.scores.unwrap();
        let keys: Vec<_> = scores.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(scores[1].score, 0.0);
        assert_eq!(scores[2].score, 55.5);
    }

    #[test]
    fn test_truthy_count() {
        let p = probe(json!({"signals": {"a": true, "b": false, "c": 0, "d": "yes", "e": null}}));
        assert_eq!(p.signals, 2);
    }
}
