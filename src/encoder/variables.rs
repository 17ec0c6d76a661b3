//! Endpoint-specific variable builders.
//!
//! Each builder writes keys in the order the target endpoint's schema
//! expects. Optional arguments are omitted, never defaulted to empty
//! collections.

use serde::{Deserialize, Serialize};

use super::value::{Record, Value};
use super::writer::encode;
use crate::error::EncodingError;

pub const DEFAULT_ORIGIN: &str = "FACETED_SEARCH";
pub const DEFAULT_SEARCH_INTENT: &str = "SEARCH_SRP";
const RESULT_TYPE_KEY: &str = "resultType";
const RESULT_TYPE_PEOPLE: &str = "PEOPLE";

/// How named filters are laid out under `queryParameters`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterLayout {
    /// `(network:List(F,O),resultType:List(PEOPLE))`
    #[default]
    Named,
    /// `List((key:network,value:List(F,O)),(key:resultType,value:List(PEOPLE)))`
    KeyValue,
}

/// Arguments for a people search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchArgs {
    pub keywords: Option<String>,
    /// Named filters in encounter order.
    pub filters: Vec<(String, Vec<String>)>,
    pub start: Option<u32>,
    pub count: Option<u32>,
    pub origin: Option<String>,
    pub search_intent: Option<String>,
    pub layout: FilterLayout,
}

impl SearchArgs {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: Some(keywords.into()),
            ..Default::default()
        }
    }

    /// Add values under a filter key. A repeated key extends the existing
    /// entry in place so encounter order is kept.
    pub fn filter<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let values = values.into_iter().map(Into::into);
        match self.filters.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.extend(values),
            None => self.filters.push((key, values.collect())),
        }
        self
    }

    pub fn network<I, S>(self, degrees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter("network", degrees)
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn layout(mut self, layout: FilterLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Values for `key`, if the filter is set.
    pub fn filter_values(&self, key: &str) -> Option<&[String]> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Caller filters plus the implicit `resultType:PEOPLE`, empty ones dropped.
    fn effective_filters(&self) -> Vec<(String, Vec<String>)> {
        let mut filters: Vec<(String, Vec<String>)> = self
            .filters
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .cloned()
            .collect();

        if self.filter_values(RESULT_TYPE_KEY).map_or(true, <[_]>::is_empty) {
            filters.push((RESULT_TYPE_KEY.to_string(), vec![RESULT_TYPE_PEOPLE.to_string()]));
        }
        filters
    }
}

/// Build the value tree for a people search.
///
/// Fails when `keywords` is absent or blank, or when a filter key, filter
/// value, origin or search intent is not a bare token.
pub fn search_value(args: &SearchArgs) -> Result<Value, EncodingError> {
    let keywords = args
        .keywords
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(EncodingError::MissingField("keywords"))?;

    let query = Record::new()
        .field("keywords", Value::text(keywords))
        .field(
            "flagshipSearchIntent",
            Value::token(
                "flagshipSearchIntent",
                args.search_intent.as_deref().unwrap_or(DEFAULT_SEARCH_INTENT),
            )?,
        )
        .field("queryParameters", filters_value(args)?)
        .field("includeFiltersInResponse", Value::Bool(false));

    let root = Record::new()
        .field("start", Value::Int(i64::from(args.start.unwrap_or(0))))
        .field_opt("count", args.count.map(|c| Value::Int(i64::from(c))))
        .field(
            "origin",
            Value::token("origin", args.origin.as_deref().unwrap_or(DEFAULT_ORIGIN))?,
        )
        .field("query", query.into());

    Ok(root.into())
}

fn filters_value(args: &SearchArgs) -> Result<Value, EncodingError> {
    let filters = args.effective_filters();

    Ok(match args.layout {
        FilterLayout::Named => {
            let mut record = Record::new();
            for (key, values) in &filters {
                Value::token("queryParameters", key)?;
                record = record.field(key.as_str(), Value::token_list(key, values)?);
            }
            record.into()
        }
        FilterLayout::KeyValue => Value::List(
            filters
                .iter()
                .map(|(key, values)| -> Result<Value, EncodingError> {
                    Ok(Record::new()
                        .field("key", Value::token("queryParameters", key)?)
                        .field("value", Value::token_list(key, values)?)
                        .into())
                })
                .collect::<Result<Vec<Value>, EncodingError>>()?,
        ),
    })
}

/// Textual variables fragment for a people search.
pub fn search_variables(args: &SearchArgs) -> Result<String, EncodingError> {
    search_value(args).map(|v| encode(&v))
}

/// Value tree for a profile lookup by public identifier.
pub fn profile_value(public_identifier: &str) -> Result<Value, EncodingError> {
    if public_identifier.trim().is_empty() {
        return Err(EncodingError::MissingField("publicIdentifier"));
    }
    Ok(Record::new()
        .field("memberIdentity", Value::text(public_identifier))
        .into())
}

/// Textual variables fragment for a profile lookup.
pub fn profile_variables(public_identifier: &str) -> Result<String, EncodingError> {
    profile_value(public_identifier).map(|v| encode(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_scenario() {
        let args = SearchArgs::new("data scientist").network(["F", "O"]).start(0);
        let fragment = search_variables(&args).unwrap();

        assert!(fragment.contains("keywords:data%20scientist"));
        assert!(fragment.contains("network:List(F,O)"));
        assert!(fragment.contains("start:0"));
    }

    #[test]
    fn test_full_named_layout() {
        let args = SearchArgs::new("investor").network(["F", "O"]).count(10);
        assert_eq!(
            search_variables(&args).unwrap(),
            "(start:0,count:10,origin:FACETED_SEARCH,query:(keywords:investor,\
             flagshipSearchIntent:SEARCH_SRP,queryParameters:(network:List(F,O),\
             resultType:List(PEOPLE)),includeFiltersInResponse:false))"
        );
    }

    #[test]
    fn test_full_key_value_layout() {
        let args = SearchArgs::new("investor")
            .network(["F", "O"])
            .count(1)
            .layout(FilterLayout::KeyValue);
        assert_eq!(
            search_variables(&args).unwrap(),
            "(start:0,count:1,origin:FACETED_SEARCH,query:(keywords:investor,\
             flagshipSearchIntent:SEARCH_SRP,queryParameters:List((key:network,value:List(F,O)),\
             (key:resultType,value:List(PEOPLE))),includeFiltersInResponse:false))"
        );
    }

    #[test]
    fn test_missing_keywords() {
        assert_eq!(
            search_variables(&SearchArgs::default()),
            Err(EncodingError::MissingField("keywords"))
        );
        assert_eq!(
            search_variables(&SearchArgs::new("   ")),
            Err(EncodingError::MissingField("keywords"))
        );
    }

    #[test]
    fn test_empty_filter_is_omitted() {
        let args = SearchArgs::new("rust").filter("network", Vec::<String>::new());
        let fragment = search_variables(&args).unwrap();

        assert!(!fragment.contains("network"));
        assert!(!fragment.contains("List()"));
        assert!(fragment.contains("resultType:List(PEOPLE)"));
    }

    #[test]
    fn test_count_omitted_when_absent() {
        let fragment = search_variables(&SearchArgs::new("rust")).unwrap();
        assert!(fragment.starts_with("(start:0,origin:"));
        assert!(!fragment.contains("count:"));
    }

    #[test]
    fn test_filter_encounter_order_and_merge() {
        let args = SearchArgs::new("x")
            .filter("geoUrn", ["103644278"])
            .network(["F"])
            .filter("geoUrn", ["90000084"]);
        let fragment = search_variables(&args).unwrap();

        assert!(fragment.contains(
            "queryParameters:(geoUrn:List(103644278,90000084),network:List(F),resultType:List(PEOPLE))"
        ));
    }

    #[test]
    fn test_explicit_result_type_wins() {
        let args = SearchArgs::new("x").filter("resultType", ["COMPANIES"]);
        let fragment = search_variables(&args).unwrap();

        assert!(fragment.contains("resultType:List(COMPANIES)"));
        assert!(!fragment.contains("PEOPLE"));
    }

    #[test]
    fn test_empty_result_type_falls_back_to_people() {
        let args = SearchArgs::new("x").filter("resultType", Vec::<String>::new());
        let fragment = search_variables(&args).unwrap();
        assert!(fragment.contains("queryParameters:(resultType:List(PEOPLE))"));
    }

    #[test]
    fn test_unsafe_filter_tokens_rejected() {
        for layout in [FilterLayout::Named, FilterLayout::KeyValue] {
            let args = SearchArgs::new("x")
                .network(["F&queryId=evil", "O P"])
                .layout(layout);
            assert_eq!(
                search_variables(&args),
                Err(EncodingError::InvalidToken {
                    field: "network".into(),
                    token: "F&queryId=evil".into(),
                })
            );
        }

        let args = SearchArgs::new("x").filter("geo(Urn)", ["1"]);
        assert!(matches!(
            search_variables(&args),
            Err(EncodingError::InvalidToken { field, .. }) if field == "queryParameters"
        ));

        let mut args = SearchArgs::new("x");
        args.origin = Some("GLOBAL SEARCH".into());
        assert!(matches!(
            search_variables(&args),
            Err(EncodingError::InvalidToken { field, .. }) if field == "origin"
        ));
    }

    #[test]
    fn test_profile_variables() {
        assert_eq!(profile_variables("jane-doe").unwrap(), "(memberIdentity:jane-doe)");
        assert_eq!(
            profile_variables("josé m"),
            Ok("(memberIdentity:jos%C3%A9%20m)".to_string())
        );
        assert_eq!(
            profile_variables(""),
            Err(EncodingError::MissingField("publicIdentifier"))
        );
    }
}
