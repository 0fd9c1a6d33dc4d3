//! Integration tests for case-folding options.

use cssel_selector::{AttributeAction, ParseOptions, Selector, parse, parse_with_options};

#[test]
fn test_tags_folded_by_default() {
    assert_eq!(parse("DIV").unwrap(), vec![vec![Selector::tag("div")]]);
}

#[test]
fn test_xml_mode_keeps_case() {
    let options = ParseOptions::xml();
    assert_eq!(
        parse_with_options("DIV[Attr]", &options).unwrap(),
        vec![vec![
            Selector::tag("DIV"),
            Selector::attribute("Attr", AttributeAction::Exists, "", false),
        ]]
    );
}

#[test]
fn test_explicit_override_in_xml_mode() {
    let options = ParseOptions::xml().with_lower_case_tags(true);
    assert_eq!(
        parse_with_options("DIV[Attr]", &options).unwrap(),
        vec![vec![
            Selector::tag("div"),
            Selector::attribute("Attr", AttributeAction::Exists, "", false),
        ]]
    );
}

#[test]
fn test_disable_folding_outside_xml_mode() {
    let options = ParseOptions::default()
        .with_lower_case_tags(false)
        .with_lower_case_attribute_names(false);
    assert_eq!(
        parse_with_options("Svg[viewBox]", &options).unwrap(),
        vec![vec![
            Selector::tag("Svg"),
            Selector::attribute("viewBox", AttributeAction::Exists, "", false),
        ]]
    );
}

#[test]
fn test_pseudo_names_always_folded() {
    assert_eq!(
        parse_with_options(":HOVER::AFTER", &ParseOptions::xml()).unwrap(),
        vec![vec![
            Selector::pseudo("hover", None),
            Selector::pseudo_element("after"),
        ]]
    );
}

#[test]
fn test_options_from_json() {
    let options: ParseOptions = serde_json::from_str(r#"{"xmlMode": true}"#).unwrap();
    assert_eq!(options, ParseOptions::xml());
    assert!(!options.folds_tags());

    let options: ParseOptions =
        serde_json::from_str(r#"{"lowerCaseAttributeNames": false}"#).unwrap();
    assert!(options.folds_tags());
    assert!(!options.folds_attribute_names());
}
