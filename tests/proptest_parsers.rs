//! Property-based tests for the document parser and builder.
//!
//! Ensures parsing and building never panic on arbitrary input, including
//! random strings, YAML-like fragments and JSON-like fragments.

use oas_tools::config::BuildConfig;
use oas_tools::parsers::{detect_spec_version, parse_document_str};
use oas_tools::pipeline::build_document_str;
use proptest::prelude::*;

proptest! {
    // Parser tests only assert no-panic, not result correctness.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_document_str_doesnt_panic(s in "\\PC{0,2000}") {
        if let Ok(root) = parse_document_str(&s) {
            let _ = detect_spec_version(&root);
        }
    }

    #[test]
    fn build_document_str_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = build_document_str(&s, &BuildConfig::default());
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{[^\}]{0,500}\}"#).unwrap()
    ) {
        let _ = parse_document_str(&s);
    }

    #[test]
    fn openapi_like_input_doesnt_panic(
        minor in 0u8..3,
        key in "[a-z/{}~$]{1,20}",
        value in "\\PC{0,100}",
    ) {
        let input = format!("openapi: 3.{minor}.0\npaths:\n  {key}: {value}\n");
        let _ = build_document_str(&input, &BuildConfig::default());
        let relaxed = BuildConfig::builder().allow_circular_references(true).build();
        let _ = build_document_str(&input, &relaxed);
    }

    #[test]
    fn reference_like_input_doesnt_panic(pointer in "[#a-z/~0-9%.]{0,40}") {
        let input = format!(
            "openapi: 3.1.0\npaths:\n  /a:\n    $ref: '{pointer}'\n  /b:\n    $ref: '#/paths/~1a'\n"
        );
        let relaxed = BuildConfig::builder().allow_circular_references(true).build();
        let _ = build_document_str(&input, &relaxed);
    }

    #[test]
    fn empty_and_whitespace_is_rejected(s in "[ \n]{0,100}") {
        prop_assert!(parse_document_str(&s).is_err());
    }
}
