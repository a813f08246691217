use serde_json::Value;
use std::collections::HashMap;

/// Matching rule applied when comparing a query value against the stored
/// field of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatcher {
    /// Exact string equality. Non-string stored values never match.
    Exact,
    /// Both sides lower-cased before comparison. Used for email.
    CaseInsensitive,
    /// Exact equality after phone normalization of the query value.
    /// Stored values are assumed to already be in normalized form.
    Phone,
}

/// One recognized query parameter, paired with its matching rule.
/// The parameter name doubles as the record field name.
#[derive(Debug, Clone, Copy)]
pub struct LookupKey {
    pub name: &'static str,
    pub matcher: KeyMatcher,
}

/// Recovers `+`-prefixed international numbers from transit systems that
/// turn `+` into a space: every whitespace character becomes `+`, then the
/// result is trimmed. Idempotent, since `+` is not whitespace.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

impl KeyMatcher {
    fn matches(&self, stored: Option<&Value>, query: &str) -> bool {
        match self {
            KeyMatcher::Exact | KeyMatcher::Phone => {
                stored.and_then(Value::as_str) == Some(query)
            }
            KeyMatcher::CaseInsensitive => {
                let stored = stored.and_then(Value::as_str).unwrap_or("");
                stored.to_lowercase() == query.to_lowercase()
            }
        }
    }
}

/// Selects at most one active lookup key from the incoming query parameters.
///
/// Keys are tried in the order given (priority order); the first one present
/// with a non-empty value wins. An empty value falls through to the next key,
/// matching the original endpoints' behavior when multiple keys are supplied.
/// Phone values are normalized here so the same value is used for both
/// resolution and matching.
pub fn resolve_key<'a>(
    keys: &'a [LookupKey],
    params: &HashMap<String, String>,
) -> Option<(&'a LookupKey, String)> {
    for key in keys {
        if let Some(raw) = params.get(key.name) {
            if raw.is_empty() {
                continue;
            }
            let value = match key.matcher {
                KeyMatcher::Phone => normalize_phone(raw),
                _ => raw.clone(),
            };
            return Some((key, value));
        }
    }
    None
}

/// Stable single-key filter over the dataset: keeps records whose stored
/// field matches the resolved value, preserving dataset order.
pub fn filter<'a>(records: &'a [Value], key: &LookupKey, value: &str) -> Vec<&'a Value> {
    records
        .iter()
        .filter(|record| key.matcher.matches(record.get(key.name), value))
        .collect()
}
