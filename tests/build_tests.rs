//! Document build integration tests.
//!
//! Build whole documents from inline fixtures and check that typed values
//! and their source positions come out as written.

use oas_tools::config::BuildConfig;
use oas_tools::error::{BuildErrorKind, OasError};
use oas_tools::model::HasExtensions;
use oas_tools::pipeline::{build_document, build_document_str, BuiltDocument};
use serde_yaml::Value;
use std::io::Write;

// ============================================================================
// Fixtures
// ============================================================================

const PETSTORE: &str = r#"openapi: 3.1.0
info:
  title: Swagger Petstore
  version: 1.0.0
  license:
    name: MIT
  x-audience: public
servers:
  - url: https://petstore.io/v1
paths:
  /pets:
    get:
      operationId: listPets
      tags: [pets]
      deprecated: false
    post:
      operationId: createPet
  /pets/{petId}:
    $ref: '#/components/pathItems/pet'
webhooks:
  newPet:
    post:
      summary: New pet
components:
  pathItems:
    pet:
      get:
        operationId: showPet
security:
  - petstore_auth: [read, write]
tags:
  - name: pets
    description: Pet operations
x-owner: pets-team
"#;

const LEGACY: &str = r#"swagger: '2.0'
info:
  title: Legacy
  version: '1'
host: api.example.com
basePath: /v1
schemes: [https]
paths:
  /pets:
    get:
      operationId: listPets
      produces: [application/json]
  /legacy:
    $ref: 'other.yaml#/missing'
securityDefinitions:
  oauth:
    type: oauth2
    flow: implicit
    authorizationUrl: https://auth.example.com
    scopes:
      read: Read access
"#;

fn openapi3(yaml: &str) -> oas_tools::model::v3::Document {
    match build_document_str(yaml, &BuildConfig::default()).unwrap() {
        BuiltDocument::OpenApi3(doc) => doc,
        BuiltDocument::Swagger2(_) => panic!("expected an OpenAPI 3 document"),
    }
}

// ============================================================================
// OpenAPI 3.x
// ============================================================================

mod openapi3_documents {
    use super::*;

    #[test]
    fn values_keep_their_positions() {
        let doc = openapi3(PETSTORE);
        assert_eq!(doc.version.as_ref().unwrap().value, "3.1.0");

        let info = &doc.info.as_ref().unwrap().value;
        let title = info.title.as_ref().unwrap();
        assert_eq!(title.value, "Swagger Petstore");
        assert_eq!((title.line(), title.column()), (3, 10));
        assert_eq!(info.license.as_ref().unwrap().value.name.as_ref().unwrap().value, "MIT");

        let paths = &doc.paths.as_ref().unwrap().value;
        let get = paths.find_path("/pets").unwrap().value.get.as_ref().unwrap();
        let id = get.value.operation_id.as_ref().unwrap();
        assert_eq!(id.value, "listPets");
        assert_eq!((id.line(), id.column()), (13, 20));
        assert!(!get.value.deprecated.as_ref().unwrap().value);
    }

    #[test]
    fn referenced_path_item_is_dereferenced() {
        let doc = openapi3(PETSTORE);
        assert_eq!(doc.path_count(), 2);
        assert_eq!(doc.index.reference_count(), 1);

        let pet = doc.paths.as_ref().unwrap().value.find_path("/pets/{petId}").unwrap();
        assert_eq!(pet.line(), 27);
        let get = pet.value.get.as_ref().unwrap();
        assert_eq!(get.value.operation_id.as_ref().unwrap().value, "showPet");
    }

    #[test]
    fn operations_follow_method_order() {
        let doc = openapi3(PETSTORE);
        let pets = &doc.paths.as_ref().unwrap().value.find_path("/pets").unwrap().value;
        let methods: Vec<_> = pets.operations().map(|(method, _)| method).collect();
        assert_eq!(methods, vec!["get", "post"]);
    }

    #[test]
    fn webhooks_security_tags_and_extensions() {
        let doc = openapi3(PETSTORE);

        let hooks = &doc.webhooks.as_ref().unwrap().value;
        let new_pet = hooks.iter().find(|(k, _)| k.value == "newPet").unwrap().1;
        let post = new_pet.value.post.as_ref().unwrap();
        assert_eq!(post.value.summary.as_ref().unwrap().value, "New pet");

        let security = &doc.security.as_ref().unwrap().value[0].value;
        let scopes: Vec<_> = security
            .find_requirement("petstore_auth")
            .unwrap()
            .value
            .iter()
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(scopes, vec!["read", "write"]);

        let tag = &doc.tags.as_ref().unwrap().value[0].value;
        assert_eq!(tag.name.as_ref().unwrap().value, "pets");

        assert_eq!(doc.find_extension("x-owner").unwrap().value, Value::from("pets-team"));
        let info = &doc.info.as_ref().unwrap().value;
        assert_eq!(info.find_extension("X-Audience").unwrap().value, Value::from("public"));
    }

    #[test]
    fn operation_responses_resolve_into_components() {
        let doc = openapi3(
            r#"openapi: 3.0.3
paths:
  /pets/{petId}:
    get:
      responses:
        '200':
          description: A pet
        '404':
          $ref: '#/components/responses/NotFound'
components:
  responses:
    NotFound:
      description: No such pet
      headers:
        Retry-After:
          $ref: '#/components/headers/RetryAfter'
  headers:
    RetryAfter:
      description: Seconds to wait
"#,
        );

        let pet = &doc.paths.as_ref().unwrap().value.find_path("/pets/{petId}").unwrap().value;
        let responses = &pet.get.as_ref().unwrap().value.responses.as_ref().unwrap().value;
        let missing = responses.find_response_by_code("404").unwrap();
        assert_eq!(missing.line(), 13);
        assert_eq!(missing.value.description.as_ref().unwrap().value, "No such pet");
        let retry = missing.value.find_header("retry-after").unwrap();
        assert_eq!(retry.value.description.as_ref().unwrap().value, "Seconds to wait");

        let components = &doc.components.as_ref().unwrap().value;
        assert!(components.find_response("NotFound").is_some());
        assert_eq!(doc.index.reference_count(), 2);
    }

    #[test]
    fn json_documents_build_too() {
        let doc = openapi3(r#"{"openapi": "3.0.3", "paths": {"/a": {"get": {"operationId": "a"}}}}"#);
        assert_eq!(doc.path_count(), 1);
    }
}

// ============================================================================
// Swagger 2.0
// ============================================================================

mod swagger_documents {
    use super::*;

    #[test]
    fn swagger_fields_build() {
        let built = build_document_str(LEGACY, &BuildConfig::default()).unwrap();
        let swagger = built.as_swagger2().unwrap();

        assert_eq!(swagger.host.as_ref().unwrap().value, "api.example.com");
        assert_eq!(swagger.base_path.as_ref().unwrap().value, "/v1");
        assert_eq!(swagger.schemes.as_ref().unwrap().value[0].value, "https");

        let paths = &swagger.paths.as_ref().unwrap().value;
        let pets = &paths.find_path("/pets").unwrap().value;
        let produces = pets.get.as_ref().unwrap().value.produces.as_ref().unwrap();
        assert_eq!(produces.value[0].value, "application/json");

        let schemes = &swagger.security_definitions.as_ref().unwrap().value;
        let oauth = schemes.iter().find(|(k, _)| k.value == "oauth").unwrap().1;
        let scopes = &oauth.value.scopes.as_ref().unwrap().value;
        assert_eq!(scopes.find_scope("read").unwrap().value, "Read access");
    }

    #[test]
    fn swagger_path_references_stay_as_text() {
        let built = build_document_str(LEGACY, &BuildConfig::default()).unwrap();
        let paths = &built.as_swagger2().unwrap().paths.as_ref().unwrap().value;
        let legacy = &paths.find_path("/legacy").unwrap().value;
        assert_eq!(legacy.reference.as_ref().unwrap().value, "other.yaml#/missing");
        assert!(legacy.get.is_none());
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failures {
    use super::*;

    #[test]
    fn wrong_scalar_type_reports_field_and_position() {
        let yaml = "openapi: 3.1.0\npaths:\n  /pets:\n    get:\n      deprecated: maybe\n";
        let err = build_document_str(yaml, &BuildConfig::default()).unwrap_err();
        match err {
            OasError::Build {
                context,
                source:
                    BuildErrorKind::InvalidValue {
                        field,
                        line,
                        column,
                        ..
                    },
            } => {
                assert_eq!(field, "deprecated");
                assert_eq!((line, column), (5, 19));
                assert!(context.contains("building path item '/pets'"), "{context}");
            }
            other => panic!("expected an invalid value error, got {other:?}"),
        }
    }

    #[test]
    fn paths_must_be_a_mapping() {
        let err = build_document_str("openapi: 3.1.0\npaths: [a]\n", &BuildConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            OasError::Build {
                source: BuildErrorKind::InvalidStructure { .. },
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = build_document(
            std::path::Path::new("/nonexistent/api.yaml"),
            &BuildConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, OasError::Io { .. }));
    }
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn build_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(PETSTORE.as_bytes()).unwrap();

    let built = build_document(file.path(), &BuildConfig::default()).unwrap();
    assert_eq!(built.path_count(), 2);
    assert!(built.as_openapi3().is_some());
}
