//! Change model: single field changes and the bundles they are reported in.

use crate::model::Node;
use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::fmt;
use std::sync::Arc;

/// Kind of a single change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// A value changed.
    Modified,
    /// A scalar property appeared.
    PropertyAdded,
    /// A scalar property disappeared.
    PropertyRemoved,
    /// An object or map entry appeared.
    ObjectAdded,
    /// An object or map entry disappeared.
    ObjectRemoved,
}

impl ChangeType {
    #[must_use]
    pub const fn is_addition(&self) -> bool {
        matches!(self, Self::PropertyAdded | Self::ObjectAdded)
    }

    #[must_use]
    pub const fn is_removal(&self) -> bool {
        matches!(self, Self::PropertyRemoved | Self::ObjectRemoved)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Modified => "modified",
            Self::PropertyAdded => "property added",
            Self::PropertyRemoved => "property removed",
            Self::ObjectAdded => "object added",
            Self::ObjectRemoved => "object removed",
        };
        write!(f, "{name}")
    }
}

/// Source position of a changed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// One field-level difference between two documents.
///
/// Nodes point into the compared documents, so a change can always be
/// located in the original (left) and new (right) text.
#[derive(Debug, Clone, Serialize)]
pub struct Change {
    pub change_type: ChangeType,
    /// Name of the changed field or map key.
    pub property: String,
    pub original: Option<Value>,
    pub new: Option<Value>,
    #[serde(rename = "left", serialize_with = "serialize_position")]
    pub left_node: Option<Arc<Node>>,
    #[serde(rename = "right", serialize_with = "serialize_position")]
    pub right_node: Option<Arc<Node>>,
    pub breaking: bool,
}

impl Change {
    /// Create a change, taking values from the nodes.
    #[must_use]
    pub fn new(
        change_type: ChangeType,
        property: impl Into<String>,
        left_node: Option<&Arc<Node>>,
        right_node: Option<&Arc<Node>>,
        breaking: bool,
    ) -> Self {
        Self {
            change_type,
            property: property.into(),
            original: left_node.map(|n| n.to_value()),
            new: right_node.map(|n| n.to_value()),
            left_node: left_node.cloned(),
            right_node: right_node.cloned(),
            breaking,
        }
    }

    /// Position of the original value.
    #[must_use]
    pub fn left_position(&self) -> Option<Position> {
        self.left_node.as_deref().map(position)
    }

    /// Position of the new value.
    #[must_use]
    pub fn right_position(&self) -> Option<Position> {
        self.right_node.as_deref().map(position)
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.property, self.change_type)?;
        if let Some(pos) = self.right_position().or_else(|| self.left_position()) {
            write!(f, " (line {}, column {})", pos.line, pos.column)?;
        }
        if self.breaking {
            write!(f, " [breaking]")?;
        }
        Ok(())
    }
}

fn position(node: &Node) -> Position {
    Position {
        line: node.line,
        column: node.column,
    }
}

fn serialize_position<S: Serializer>(
    node: &Option<Arc<Node>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    node.as_deref().map(position).serialize(serializer)
}

/// Changes made directly to one object's own properties.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyChanges {
    pub changes: Vec<Change>,
}

impl PropertyChanges {
    #[must_use]
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Find the change reported for `property`.
    #[must_use]
    pub fn find(&self, property: &str) -> Option<&Change> {
        self.changes.iter().find(|c| c.property == property)
    }
}
