//! Grammar properties of the variables encoder.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use voyager::{search_variables, EncodingError, FilterLayout, SearchArgs};

fn filter_value() -> impl Strategy<Value = String> {
    "[A-Z]{1,6}"
}

proptest! {
    #[test]
    fn list_has_one_entry_per_value_in_order(values in prop::collection::vec(filter_value(), 1..8)) {
        let args = SearchArgs::new("investor").filter("industry", values.clone());
        let fragment = search_variables(&args).unwrap();

        let expected = format!("industry:List({})", values.join(","));
        prop_assert!(fragment.contains(&expected), "{} not in {}", expected, fragment);
    }

    #[test]
    fn empty_filter_is_omitted(keywords in "[a-z]{1,5}( [a-z]{1,5})?") {
        let args = SearchArgs::new(keywords).filter("industry", Vec::<String>::new());
        let fragment = search_variables(&args).unwrap();

        prop_assert!(!fragment.contains("industry"));
        prop_assert!(!fragment.contains("List()"));
        prop_assert!(!fragment.contains(' '));
    }

    #[test]
    fn key_value_layout_keeps_arity(values in prop::collection::vec(filter_value(), 1..8)) {
        let args = SearchArgs::new("investor")
            .filter("industry", values.clone())
            .layout(FilterLayout::KeyValue);
        let fragment = search_variables(&args).unwrap();

        let expected = format!("(key:industry,value:List({}))", values.join(","));
        prop_assert!(fragment.contains(&expected));
    }

    #[test]
    fn filter_value_with_delimiter_is_rejected(
        head in filter_value(),
        delimiter in prop::sample::select(vec![" ", "&", "=", ",", "(", ")", "#", "?", "%"]),
        tail in filter_value(),
    ) {
        let value = format!("{}{}{}", head, delimiter, tail);
        let args = SearchArgs::new("investor").network(["F".to_string(), value.clone()]);
        let expected = EncodingError::InvalidToken { field: "network".into(), token: value };
        prop_assert_eq!(search_variables(&args), Err(expected));
    }
}

#[test]
fn test_filters_keep_encounter_order() {
    let args = SearchArgs::new("investor")
        .filter("currentCompany", ["1035"])
        .network(["F"])
        .filter("currentCompany", ["1441"])
        .network(["O"]);
    let fragment = search_variables(&args).unwrap();

    assert!(fragment.contains(
        "queryParameters:(currentCompany:List(1035,1441),network:List(F,O),resultType:List(PEOPLE))"
    ));
}

#[test]
fn test_free_text_escaped_grammar_not() {
    let args = SearchArgs::new("R&D (lead), ML:ops").network(["F"]);
    let fragment = search_variables(&args).unwrap();

    assert!(fragment.contains("keywords:R%26D%20%28lead%29%2C%20ML%3Aops,"));
    assert!(fragment.starts_with("(start:0,origin:FACETED_SEARCH,query:("));
    assert!(fragment.ends_with(",includeFiltersInResponse:false))"));
}

#[test]
fn test_paging_and_explicit_result_type() {
    let args = SearchArgs::new("cto")
        .start(20)
        .count(10)
        .filter("resultType", ["COMPANIES"]);
    assert_eq!(
        search_variables(&args).unwrap(),
        "(start:20,count:10,origin:FACETED_SEARCH,query:(keywords:cto,flagshipSearchIntent:SEARCH_SRP,queryParameters:(resultType:List(COMPANIES)),includeFiltersInResponse:false))"
    );
}
