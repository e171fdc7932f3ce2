//! Field names as they appear in documents.
//!
//! Builders and comparators share these so a change report names a field
//! exactly as the document spells it.

pub const OPENAPI_LABEL: &str = "openapi";
pub const SWAGGER_LABEL: &str = "swagger";
pub const INFO_LABEL: &str = "info";
pub const TITLE_LABEL: &str = "title";
pub const SUMMARY_LABEL: &str = "summary";
pub const DESCRIPTION_LABEL: &str = "description";
pub const TERMS_OF_SERVICE_LABEL: &str = "termsOfService";
pub const CONTACT_LABEL: &str = "contact";
pub const LICENSE_LABEL: &str = "license";
pub const VERSION_LABEL: &str = "version";
pub const NAME_LABEL: &str = "name";
pub const URL_LABEL: &str = "url";
pub const EMAIL_LABEL: &str = "email";
pub const IDENTIFIER_LABEL: &str = "identifier";
pub const EXTERNAL_DOCS_LABEL: &str = "externalDocs";
pub const TAGS_LABEL: &str = "tags";
pub const PROPERTY_NAME_LABEL: &str = "propertyName";
pub const MAPPING_LABEL: &str = "mapping";
pub const JSON_SCHEMA_DIALECT_LABEL: &str = "jsonSchemaDialect";
pub const SERVERS_LABEL: &str = "servers";
pub const SERVER_LABEL: &str = "server";
pub const VARIABLES_LABEL: &str = "variables";
pub const ENUM_LABEL: &str = "enum";
pub const DEFAULT_LABEL: &str = "default";
pub const PATHS_LABEL: &str = "paths";
pub const PATH_ITEM_LABEL: &str = "path item";
pub const WEBHOOKS_LABEL: &str = "webhooks";
pub const WEBHOOK_LABEL: &str = "webhook";
pub const SECURITY_LABEL: &str = "security";
pub const OPERATION_ID_LABEL: &str = "operationId";
pub const OPERATION_REF_LABEL: &str = "operationRef";
pub const DEPRECATED_LABEL: &str = "deprecated";
pub const PARAMETERS_LABEL: &str = "parameters";
pub const REQUEST_BODY_LABEL: &str = "requestBody";
pub const GET_LABEL: &str = "get";
pub const PUT_LABEL: &str = "put";
pub const POST_LABEL: &str = "post";
pub const DELETE_LABEL: &str = "delete";
pub const OPTIONS_LABEL: &str = "options";
pub const HEAD_LABEL: &str = "head";
pub const PATCH_LABEL: &str = "patch";
pub const TRACE_LABEL: &str = "trace";
pub const HOST_LABEL: &str = "host";
pub const BASE_PATH_LABEL: &str = "basePath";
pub const SCHEMES_LABEL: &str = "schemes";
pub const CONSUMES_LABEL: &str = "consumes";
pub const PRODUCES_LABEL: &str = "produces";
pub const SECURITY_DEFINITIONS_LABEL: &str = "securityDefinitions";
pub const TYPE_LABEL: &str = "type";
pub const IN_LABEL: &str = "in";
pub const FLOW_LABEL: &str = "flow";
pub const AUTHORIZATION_URL_LABEL: &str = "authorizationUrl";
pub const TOKEN_URL_LABEL: &str = "tokenUrl";
pub const SCOPES_LABEL: &str = "scopes";
pub const FORMAT_LABEL: &str = "format";
pub const ITEMS_LABEL: &str = "items";
pub const COLLECTION_FORMAT_LABEL: &str = "collectionFormat";
pub const MAXIMUM_LABEL: &str = "maximum";
pub const EXCLUSIVE_MAXIMUM_LABEL: &str = "exclusiveMaximum";
pub const MINIMUM_LABEL: &str = "minimum";
pub const EXCLUSIVE_MINIMUM_LABEL: &str = "exclusiveMinimum";
pub const MAX_LENGTH_LABEL: &str = "maxLength";
pub const MIN_LENGTH_LABEL: &str = "minLength";
pub const PATTERN_LABEL: &str = "pattern";
pub const MAX_ITEMS_LABEL: &str = "maxItems";
pub const MIN_ITEMS_LABEL: &str = "minItems";
pub const UNIQUE_ITEMS_LABEL: &str = "uniqueItems";
pub const MULTIPLE_OF_LABEL: &str = "multipleOf";
pub const COMPONENTS_LABEL: &str = "components";
pub const PATH_ITEMS_LABEL: &str = "pathItems";
pub const RESPONSES_LABEL: &str = "responses";
pub const RESPONSE_LABEL: &str = "response";
pub const HEADERS_LABEL: &str = "headers";
pub const LINKS_LABEL: &str = "links";
pub const REQUIRED_LABEL: &str = "required";
pub const ALLOW_EMPTY_VALUE_LABEL: &str = "allowEmptyValue";
pub const STYLE_LABEL: &str = "style";
pub const EXPLODE_LABEL: &str = "explode";
pub const ALLOW_RESERVED_LABEL: &str = "allowReserved";
pub const EXAMPLE_LABEL: &str = "example";
