//! Property-based tests for the diff engine.

use oas_tools::config::BuildConfig;
use oas_tools::diff::{compare_documents, compare_extensions, compare_info, Changed};
use oas_tools::index::SpecIndex;
use oas_tools::model::base::Info;
use oas_tools::model::v3::Document;
use oas_tools::model::{build_object, extract_extensions};
use oas_tools::parsers::parse_document_str;
use proptest::prelude::*;
use std::sync::Arc;

fn info(yaml: &str) -> Info {
    let root = parse_document_str(yaml).unwrap();
    let index = SpecIndex::new(Arc::clone(&root), &BuildConfig::default());
    build_object(&root, &index).unwrap()
}

fn document(paths: &[String]) -> Document {
    let mut yaml = String::from("openapi: 3.1.0\npaths:\n");
    for path in paths {
        yaml.push_str(&format!("  /{path}:\n    get:\n      operationId: op_{path}\n"));
    }
    if paths.is_empty() {
        yaml.push_str("  {}\n");
    }
    Document::build_from_root(parse_document_str(&yaml).unwrap(), &BuildConfig::default())
        .unwrap()
}

fn info_yaml(title: &str, version: &str, license: Option<&str>) -> String {
    let mut yaml = format!("title: {title}\nversion: v{version}\n");
    if let Some(name) = license {
        yaml.push_str(&format!("license:\n  name: {name}\n"));
    }
    yaml
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn comparing_a_rebuild_finds_nothing(
        title in "[a-z]{1,12}",
        version in "[0-9]\\.[0-9]",
        license in prop::option::of("[A-Z]{2,6}"),
    ) {
        let yaml = info_yaml(&title, &version, license.as_deref());
        prop_assert!(compare_info(&info(&yaml), &info(&yaml)).is_none());
    }

    #[test]
    fn info_changes_never_break(
        left in ("[a-z]{1,12}", "[0-9]\\.[0-9]", prop::option::of("[A-Z]{2,6}")),
        right in ("[a-z]{1,12}", "[0-9]\\.[0-9]", prop::option::of("[A-Z]{2,6}")),
    ) {
        let l = info(&info_yaml(&left.0, &left.1, left.2.as_deref()));
        let r = info(&info_yaml(&right.0, &right.1, right.2.as_deref()));
        let report = compare_info(&l, &r);
        prop_assert_eq!(report.total_breaking_changes(), 0);
        prop_assert_eq!(report.is_some(), left != right);
    }

    #[test]
    fn path_additions_mirror_removals(
        common in prop::collection::btree_set("[a-z]{1,8}", 0..6),
        extra in prop::collection::btree_set("[0-9]{1,4}", 1..4),
    ) {
        let small: Vec<String> = common.iter().cloned().collect();
        let big: Vec<String> = common.iter().chain(extra.iter()).cloned().collect();
        let (small, big) = (document(&small), document(&big));

        let removed = compare_documents(&big, &small).unwrap();
        let added = compare_documents(&small, &big).unwrap();
        prop_assert_eq!(removed.total_changes(), extra.len());
        prop_assert_eq!(added.total_changes(), extra.len());
        prop_assert_eq!(removed.total_breaking_changes(), extra.len());
        prop_assert_eq!(added.total_breaking_changes(), 0);
    }

    #[test]
    fn extension_case_never_matters(key in "[a-z]{1,10}", value in "[a-z0-9]{1,10}") {
        let lower = format!("x-{key}: {value}\n");
        let upper = format!("X-{}: {value}\n", key.to_uppercase());
        let l = extract_extensions(&parse_document_str(&lower).unwrap());
        let r = extract_extensions(&parse_document_str(&upper).unwrap());
        prop_assert!(compare_extensions(&l, &r).is_none());
    }
}
