//! Server and server variable comparison.

use super::extensions::{compare_extensions, ExtensionChanges};
use crate::diff::checks::{
    check_properties, check_scalar_list, compare_keyed_objects, flatten_low_level_map, key_list_by,
    PropertyCheck,
};
use crate::diff::{count_breaking_changes, Change, Changed, PropertyChanges};
use crate::model::labels::{DEFAULT_LABEL, DESCRIPTION_LABEL, ENUM_LABEL};
use crate::model::v3::{Server, ServerVariable};
use crate::model::{NodeReference, ReferenceMap, ValueReference};
use indexmap::IndexMap;
use serde::Serialize;

/// Changes to one server variable.
#[derive(Debug, Clone, Serialize)]
pub struct ServerVariableChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for ServerVariableChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes() + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
    }
}

/// Changes to one server, matched by URL on both sides.
#[derive(Debug, Clone, Serialize)]
pub struct ServerChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub variable_changes: IndexMap<String, ServerVariableChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for ServerChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.variable_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes() + self.variable_changes.total_breaking_changes()
    }
}

/// Changes to a server list.
#[derive(Debug, Clone, Serialize)]
pub struct ServersChanges {
    /// Servers added or removed, keyed by URL.
    pub changes: Vec<Change>,
    pub server_changes: IndexMap<String, ServerChanges>,
}

impl Changed for ServersChanges {
    fn total_changes(&self) -> usize {
        self.changes.len() + self.server_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        count_breaking_changes(&self.changes) + self.server_changes.total_breaking_changes()
    }
}

fn compare_server_variable(
    left: &ServerVariable,
    right: &ServerVariable,
) -> Option<ServerVariableChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(DEFAULT_LABEL, &left.default, &right.default, true),
            PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false),
        ],
        &mut changes,
    );
    check_scalar_list(
        ENUM_LABEL,
        left.enum_values.as_ref(),
        right.enum_values.as_ref(),
        &mut changes,
        false,
        true,
    );
    let report = ServerVariableChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

fn compare_server(left: &Server, right: &Server) -> Option<ServerChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false)],
        &mut changes,
    );

    let empty = ReferenceMap::new();
    let l = flatten_low_level_map(left.variables.as_ref().map_or(&empty, |v| &v.value));
    let r = flatten_low_level_map(right.variables.as_ref().map_or(&empty, |v| &v.value));
    let variable_changes =
        compare_keyed_objects(&l, &r, &mut changes, false, true, compare_server_variable);

    let report = ServerChanges {
        property_changes: PropertyChanges::new(changes),
        variable_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

fn server_url(server: &Server) -> String {
    server.url.as_ref().map(|u| u.value.clone()).unwrap_or_default()
}

/// Compare two server lists, matching servers by URL.
///
/// A removed server, removed variable, changed variable default or removed
/// enum value is breaking. Additions never are.
#[must_use]
pub fn compare_servers(
    left: Option<&NodeReference<Vec<ValueReference<Server>>>>,
    right: Option<&NodeReference<Vec<ValueReference<Server>>>>,
) -> Option<ServersChanges> {
    let empty = Vec::new();
    let l = key_list_by(left.map_or(&empty, |s| &s.value), server_url);
    let r = key_list_by(right.map_or(&empty, |s| &s.value), server_url);

    let mut changes = Vec::new();
    let server_changes = compare_keyed_objects(&l, &r, &mut changes, false, true, compare_server);
    let report = ServersChanges {
        changes,
        server_changes,
    };
    (report.total_changes() > 0).then_some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::changes::test_support::build_document;
    use crate::diff::ChangeType;

    fn compare(left: &str, right: &str) -> Option<ServersChanges> {
        let left = build_document(&format!("openapi: 3.0.3\nservers:\n{left}"));
        let right = build_document(&format!("openapi: 3.0.3\nservers:\n{right}"));
        compare_servers(left.servers.as_ref(), right.servers.as_ref())
    }

    #[test]
    fn test_server_added_and_removed() {
        let report = compare("  - url: https://a.io\n", "  - url: https://b.io\n").unwrap();
        assert_eq!(report.total_changes(), 2);
        assert_eq!(report.total_breaking_changes(), 1);
        assert_eq!(report.changes[0].change_type, ChangeType::ObjectRemoved);
        assert!(report.changes[0].breaking);
        assert!(!report.changes[1].breaking);
    }

    #[test]
    fn test_variable_default_change_is_breaking() {
        let left = "  - url: https://{env}.io\n    variables:\n      env:\n        default: prod\n        enum: [prod, dev]\n";
        let right = "  - url: https://{env}.io\n    variables:\n      env:\n        default: dev\n        enum: [dev, test]\n";
        let report = compare(left, right).unwrap();

        let env = &report.server_changes["https://{env}.io"].variable_changes["env"];
        assert!(env.property_changes.find(DEFAULT_LABEL).unwrap().breaking);
        assert_eq!(env.total_changes(), 3);
        assert_eq!(report.total_breaking_changes(), 2);
    }

    #[test]
    fn test_description_only_is_not_breaking() {
        let report = compare(
            "  - url: https://a.io\n    description: one\n",
            "  - url: https://a.io\n    description: two\n",
        )
        .unwrap();
        assert_eq!(report.total_changes(), 1);
        assert_eq!(report.total_breaking_changes(), 0);
    }
}
