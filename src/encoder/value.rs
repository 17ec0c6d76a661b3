//! Value tree for the variables grammar.
//!
//! Builders produce a [`Value`]; [`super::writer`] turns it into text.

use crate::error::EncodingError;

/// `[A-Za-z0-9_.~:-]+`: neither grammar punctuation nor URL delimiters.
pub fn is_bare_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '~' | ':' | '-'))
}

/// A node in the variables grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Written verbatim: enum-like tokens such as `FACETED_SEARCH` or `F`.
    Bare(String),
    /// Free text from the caller. The only leaf that gets percent-encoded.
    Text(String),
    Int(i64),
    Bool(bool),
    /// `List(a,b,c)`
    List(Vec<Value>),
    /// `(key:value,key2:value2)`
    Record(Record),
}

impl Value {
    pub fn bare(s: impl Into<String>) -> Self {
        Value::Bare(s.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// List of bare tokens known to be safe, written unchecked.
    pub fn bare_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::Bare(s.into())).collect())
    }

    /// Bare token from caller input. Rejected unless it can be spliced
    /// into a query string as is.
    pub fn token(field: &str, s: &str) -> Result<Self, EncodingError> {
        if is_bare_token(s) {
            Ok(Value::Bare(s.to_string()))
        } else {
            Err(EncodingError::InvalidToken {
                field: field.to_string(),
                token: s.to_string(),
            })
        }
    }

    /// List of bare tokens, each checked with [`Value::token`].
    pub fn token_list<S: AsRef<str>>(field: &str, items: &[S]) -> Result<Self, EncodingError> {
        items
            .iter()
            .map(|s| Value::token(field, s.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }

    /// Whether this value is an empty list or record.
    ///
    /// Empty collections are never written: the key carrying them is dropped.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Value::List(items) => items.is_empty(),
            Value::Record(record) => record.is_empty(),
            _ => false,
        }
    }
}

/// Ordered `key:value` pairs. Order is write order, never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Empty lists and records are skipped.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        if !value.is_empty_collection() {
            self.fields.push((key.into(), value));
        }
        self
    }

    /// Append a field only when `value` is present.
    pub fn field_opt(self, key: impl Into<String>, value: Option<Value>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_insertion_order() {
        let record = Record::new()
            .field("zeta", Value::Int(1))
            .field("alpha", Value::Int(2))
            .field("mid", Value::Int(3));

        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_record_drops_empty_collections() {
        let record = Record::new()
            .field("empty_list", Value::List(vec![]))
            .field("empty_record", Record::new().into())
            .field("kept", Value::bare_list(["A"]));

        assert_eq!(record.len(), 1);
        assert!(record.get("kept").is_some());
        assert!(record.get("empty_list").is_none());
    }

    #[test]
    fn test_token_charset() {
        assert!(is_bare_token("urn:li:fsd_geo:103644278"));
        assert!(is_bare_token("FACETED_SEARCH"));
        for bad in ["", "O P", "F&queryId=evil", "a,b", "(x)", "a#b", "é"] {
            assert!(!is_bare_token(bad), "{:?} accepted", bad);
        }
    }

    #[test]
    fn test_token_list_rejects_first_bad_value() {
        assert_eq!(
            Value::token_list("network", &["F", "O P"]),
            Err(EncodingError::InvalidToken {
                field: "network".into(),
                token: "O P".into(),
            })
        );
        assert_eq!(
            Value::token_list("network", &["F", "O"]),
            Ok(Value::bare_list(["F", "O"]))
        );
    }

    #[test]
    fn test_field_opt() {
        let record = Record::new()
            .field_opt("count", None)
            .field_opt("start", Some(Value::Int(0)));

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("start"), Some(&Value::Int(0)));
    }
}
