//! Semantic diff integration tests.
//!
//! Scenarios compare objects built from inline YAML, the same way a caller
//! holding two versions of a document would.

use oas_tools::config::BuildConfig;
use oas_tools::diff::{
    compare_discriminator, compare_documents, compare_extensions, compare_info, ChangeType,
    Changed,
};
use oas_tools::index::SpecIndex;
use oas_tools::model::base::{Discriminator, Info};
use oas_tools::model::v3::Document;
use oas_tools::model::{build_object, extract_extensions, Buildable};
use oas_tools::parsers::parse_document_str;
use std::sync::Arc;

fn build<T: Buildable>(yaml: &str) -> T {
    let root = parse_document_str(yaml).unwrap();
    let index = SpecIndex::new(Arc::clone(&root), &BuildConfig::default());
    build_object(&root, &index).unwrap()
}

fn document(yaml: &str) -> Document {
    Document::build_from_root(parse_document_str(yaml).unwrap(), &BuildConfig::default()).unwrap()
}

// ============================================================================
// Info
// ============================================================================

mod info {
    use super::*;

    #[test]
    fn version_bump_with_new_license() {
        let left: Info = build("title: v1\nversion: 1.0.0\n");
        let right: Info = build("title: v1\nversion: 2.0.0\nlicense:\n  name: MIT\n");
        let report = compare_info(&left, &right).unwrap();

        assert_eq!(report.total_changes(), 2);
        assert_eq!(report.total_breaking_changes(), 0);

        let version = report.property_changes.find("version").unwrap();
        assert_eq!(version.change_type, ChangeType::Modified);
        assert_eq!(version.original, Some("1.0.0".into()));
        assert_eq!(version.new, Some("2.0.0".into()));
        assert!(!version.breaking);
        let position = version.right_position().unwrap();
        assert_eq!((position.line, position.column), (2, 10));

        let license = report.property_changes.find("license").unwrap();
        assert!(license.change_type.is_addition());
    }

    #[test]
    fn info_never_breaks() {
        let left: Info = build(
            "title: a\ndescription: b\ntermsOfService: c\nversion: 1\ncontact:\n  name: d\nlicense:\n  name: e\n",
        );
        let right: Info = build("title: z\ncontact:\n  email: y@z.io\nx-internal: true\n");
        let report = compare_info(&left, &right).unwrap();

        assert!(report.total_changes() >= 7);
        assert_eq!(report.total_breaking_changes(), 0);
    }
}

// ============================================================================
// Discriminator
// ============================================================================

mod discriminator {
    use super::*;

    const LEFT: &str = "propertyName: type\nmapping:\n  dog: '#/Dog'\n";

    #[test]
    fn added_mapping_is_not_breaking() {
        let left: Discriminator = build(LEFT);
        let right: Discriminator =
            build("propertyName: type\nmapping:\n  dog: '#/Dog'\n  cat: '#/Cat'\n");
        let report = compare_discriminator(&left, &right).unwrap();

        assert_eq!(report.total_changes(), 1);
        assert_eq!(report.total_breaking_changes(), 0);
        assert_eq!(report.mapping_changes[0].change_type, ChangeType::ObjectAdded);
    }

    #[test]
    fn renamed_property_is_breaking() {
        let left: Discriminator = build(LEFT);
        let right: Discriminator = build("propertyName: kind\nmapping:\n  dog: '#/Dog'\n");
        let report = compare_discriminator(&left, &right).unwrap();

        assert_eq!(report.total_changes(), 1);
        assert_eq!(report.total_breaking_changes(), 1);
    }
}

// ============================================================================
// General properties
// ============================================================================

mod properties {
    use super::*;

    const API: &str = r#"openapi: 3.1.0
info:
  title: Pets
  version: 1.0.0
servers:
  - url: https://pets.io
paths:
  /pets:
    get:
      operationId: listPets
  /users:
    get:
      operationId: listUsers
tags:
  - name: pets
"#;

    #[test]
    fn identical_rebuild_has_no_changes() {
        assert!(compare_documents(&document(API), &document(API)).is_none());
    }

    #[test]
    fn additions_and_removals_are_symmetric() {
        let smaller = API.replace("  /users:\n    get:\n      operationId: listUsers\n", "");
        let (big, small) = (document(API), document(&smaller));

        let removed = compare_documents(&big, &small).unwrap();
        let added = compare_documents(&small, &big).unwrap();
        assert_eq!(removed.total_changes(), added.total_changes());

        let paths_removed = removed.paths_changes.as_ref().unwrap();
        let paths_added = added.paths_changes.as_ref().unwrap();
        assert!(paths_removed.property_changes.changes[0].change_type.is_removal());
        assert!(paths_added.property_changes.changes[0].change_type.is_addition());
        assert_eq!(removed.total_breaking_changes(), 1);
        assert_eq!(added.total_breaking_changes(), 0);
    }

    #[test]
    fn extension_keys_ignore_case() {
        let left = extract_extensions(&parse_document_str("x-Rate-Limit: 100\n").unwrap());
        let right = extract_extensions(&parse_document_str("X-RATE-LIMIT: 100\n").unwrap());
        assert!(compare_extensions(&left, &right).is_none());

        let changed = extract_extensions(&parse_document_str("x-rate-limit: 200\n").unwrap());
        let report = compare_extensions(&left, &changed).unwrap();
        assert_eq!(report.total_changes(), 1);
        assert_eq!(report.total_breaking_changes(), 0);
    }

    #[test]
    fn report_serializes_to_json() {
        let changed = API.replace("version: 1.0.0", "version: 1.0.1");
        let report = compare_documents(&document(API), &document(&changed)).unwrap();
        let json = oas_tools::pipeline::report_to_json(&report).unwrap();
        assert!(json.contains("\"property\": \"version\""), "{json}");
    }
}
