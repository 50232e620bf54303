use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a backend record.
///
/// SQL rows come back with numeric auto-increment ids, while some callers
/// (and the signature/workflow targets) use textual ids such as `"doc-7"`.
/// Both JSON forms deserialize; equality is strict per variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(i64),
    Text(String),
}

impl RecordId {
    /// Parse a form value: integers become `Num`, anything else `Text`.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => RecordId::Num(n),
            Err(_) => RecordId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Num(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_and_text_ids() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "doc-7"]"#).unwrap();
        assert_eq!(ids, vec![RecordId::Num(7), RecordId::from("doc-7")]);
    }

    #[test]
    fn serializes_back_to_raw_json() {
        let json = serde_json::to_string(&vec![RecordId::Num(1), RecordId::from("a")]).unwrap();
        assert_eq!(json, r#"[1,"a"]"#);
    }

    #[test]
    fn parse_prefers_numbers() {
        assert_eq!(RecordId::parse(" 42 "), RecordId::Num(42));
        assert_eq!(RecordId::parse("doc-7"), RecordId::from("doc-7"));
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(RecordId::Num(3).to_string(), "3");
        assert_eq!(RecordId::from("exp-9").to_string(), "exp-9");
    }
}
