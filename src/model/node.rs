//! Document tree nodes.
//!
//! A [`Node`] is the generic, position-carrying tree produced by the parser.
//! Nodes are shared through [`Arc`] so every reference wrapper in the built
//! model can point at the exact node it was decoded from.

use serde_yaml::{Mapping, Number, Value};
use std::fmt;
use std::sync::Arc;

/// Key that marks a reference node.
pub const REF_LABEL: &str = "$ref";

/// Prefix of vendor extension keys.
pub const EXTENSION_PREFIX: &str = "x-";

/// Structural kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
    Alias,
}

/// Resolved tag of a node, following the YAML 1.2 core schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Str,
    Int,
    Float,
    Bool,
    Null,
    Map,
    Seq,
}

impl Tag {
    /// Resolve the tag of a plain (unquoted) scalar.
    #[must_use]
    pub fn resolve_plain(value: &str) -> Self {
        match value {
            "" | "~" | "null" | "Null" | "NULL" => return Self::Null,
            "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => return Self::Bool,
            ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" | "-.inf" | "-.Inf"
            | "-.INF" | ".nan" | ".NaN" | ".NAN" => return Self::Float,
            _ => {}
        }
        if parse_int(value).is_some() {
            Self::Int
        } else if looks_like_float(value) {
            Self::Float
        } else {
            Self::Str
        }
    }

    /// Short YAML name of the tag, e.g. `!!str`.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Str => "!!str",
            Self::Int => "!!int",
            Self::Float => "!!float",
            Self::Bool => "!!bool",
            Self::Null => "!!null",
            Self::Map => "!!map",
            Self::Seq => "!!seq",
        }
    }
}

/// A node in a parsed document tree.
///
/// Mapping content is stored interleaved (`key, value, key, value, ...`),
/// sequence content is stored in order. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub tag: Tag,
    /// Scalar text; empty for collections.
    pub value: String,
    /// Anchor id assigned by the parser, if the node was anchored.
    pub anchor_id: Option<usize>,
    pub content: Vec<Arc<Node>>,
    /// Target of an alias node.
    pub alias: Option<Arc<Node>>,
    pub line: usize,
    pub column: usize,
}

impl Node {
    /// Create a scalar node with an explicit tag.
    #[must_use]
    pub fn scalar(value: impl Into<String>, tag: Tag, line: usize, column: usize) -> Self {
        Self {
            kind: NodeKind::Scalar,
            tag,
            value: value.into(),
            anchor_id: None,
            content: Vec::new(),
            alias: None,
            line,
            column,
        }
    }

    /// Create a string scalar node.
    #[must_use]
    pub fn string(value: impl Into<String>, line: usize, column: usize) -> Self {
        Self::scalar(value, Tag::Str, line, column)
    }

    /// Create a mapping node from interleaved key/value content.
    #[must_use]
    pub fn mapping(content: Vec<Arc<Node>>, line: usize, column: usize) -> Self {
        Self {
            kind: NodeKind::Mapping,
            tag: Tag::Map,
            value: String::new(),
            anchor_id: None,
            content,
            alias: None,
            line,
            column,
        }
    }

    /// Create a sequence node.
    #[must_use]
    pub fn sequence(content: Vec<Arc<Node>>, line: usize, column: usize) -> Self {
        Self {
            kind: NodeKind::Sequence,
            tag: Tag::Seq,
            value: String::new(),
            anchor_id: None,
            content,
            alias: None,
            line,
            column,
        }
    }

    /// Create an alias node pointing at an anchored node.
    #[must_use]
    pub fn alias_of(target: Arc<Node>, line: usize, column: usize) -> Self {
        Self {
            kind: NodeKind::Alias,
            tag: target.tag,
            value: String::new(),
            anchor_id: None,
            content: Vec::new(),
            alias: Some(target),
            line,
            column,
        }
    }

    #[must_use]
    pub fn is_mapping(&self) -> bool {
        self.kind == NodeKind::Mapping
    }

    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.kind == NodeKind::Sequence
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.kind == NodeKind::Scalar
    }

    /// The node an alias points at, or the node itself.
    #[must_use]
    pub fn target(&self) -> &Node {
        self.alias.as_deref().unwrap_or(self)
    }

    /// Iterate over the key/value pairs of a mapping node.
    ///
    /// Yields nothing for non-mapping nodes.
    pub fn mapping_pairs(&self) -> impl Iterator<Item = (&Arc<Node>, &Arc<Node>)> {
        let content: &[Arc<Node>] = if self.is_mapping() { &self.content } else { &[] };
        content.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Find the value node for `label` in a mapping (case-sensitive).
    #[must_use]
    pub fn find_key(&self, label: &str) -> Option<&Arc<Node>> {
        self.find_key_full(label).map(|(_, value)| value)
    }

    /// Find both key and value nodes for `label` in a mapping (case-sensitive).
    #[must_use]
    pub fn find_key_full(&self, label: &str) -> Option<(&Arc<Node>, &Arc<Node>)> {
        self.mapping_pairs().find(|(key, _)| key.value == label)
    }

    /// Whether this node is a reference node: a mapping holding exactly
    /// the `$ref` key.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.reference_value().is_some()
    }

    /// Pointer text of a reference node.
    #[must_use]
    pub fn reference_value(&self) -> Option<&str> {
        self.reference_parts().map(|(_, value)| value.value.as_str())
    }

    /// Key and value nodes of a reference node.
    #[must_use]
    pub fn reference_parts(&self) -> Option<(&Arc<Node>, &Arc<Node>)> {
        if !self.is_mapping() || self.content.len() != 2 {
            return None;
        }
        let (key, value) = (&self.content[0], &self.content[1]);
        (key.value == REF_LABEL && value.is_scalar()).then_some((key, value))
    }

    /// Whether this node is a key carrying a vendor extension.
    #[must_use]
    pub fn is_extension_key(&self) -> bool {
        self.value
            .get(..EXTENSION_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENSION_PREFIX))
    }

    /// Convert the subtree to a `serde_yaml::Value`, following aliases.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self.kind {
            NodeKind::Alias => self
                .alias
                .as_ref()
                .map_or(Value::Null, |target| target.to_value()),
            NodeKind::Mapping => {
                let mut mapping = Mapping::with_capacity(self.content.len() / 2);
                for (key, value) in self.mapping_pairs() {
                    mapping.insert(key.to_value(), value.to_value());
                }
                Value::Mapping(mapping)
            }
            NodeKind::Sequence => {
                Value::Sequence(self.content.iter().map(|n| n.to_value()).collect())
            }
            NodeKind::Scalar => self.scalar_value(),
        }
    }

    fn scalar_value(&self) -> Value {
        match self.tag {
            Tag::Null => Value::Null,
            Tag::Bool => Value::Bool(self.value.eq_ignore_ascii_case("true")),
            Tag::Int => parse_int(&self.value).map_or_else(
                || Value::String(self.value.clone()),
                |n| Value::Number(Number::from(n)),
            ),
            Tag::Float => parse_float(&self.value).map_or_else(
                || Value::String(self.value.clone()),
                |f| Value::Number(Number::from(f)),
            ),
            Tag::Str | Tag::Map | Tag::Seq => Value::String(self.value.clone()),
        }
    }
}

/// Follow an alias node to its target; any other node is returned as is.
#[must_use]
pub fn resolve_alias(node: &Arc<Node>) -> Arc<Node> {
    let mut current = Arc::clone(node);
    while let Some(target) = current.alias.clone() {
        current = target;
    }
    current
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Scalar => write!(f, "{}", self.value),
            _ => write!(f, "{} at {}:{}", self.tag.short_name(), self.line, self.column),
        }
    }
}

/// Parse an integer in YAML 1.2 core notation (decimal, `0x`, `0o`).
pub(crate) fn parse_int(value: &str) -> Option<i64> {
    let (negative, digits) = match value.as_bytes().first()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };
    let magnitude = if let Some(hex) = digits.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = digits.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()?
    } else if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<i64>().ok()?
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a float in YAML 1.2 core notation, including `.inf` and `.nan`.
pub(crate) fn parse_float(value: &str) -> Option<f64> {
    match value.to_ascii_lowercase().as_str() {
        ".inf" | "+.inf" => Some(f64::INFINITY),
        "-.inf" => Some(f64::NEG_INFINITY),
        ".nan" => Some(f64::NAN),
        _ if looks_like_float(value) || parse_int(value).is_some() => value.parse().ok(),
        _ => None,
    }
}

fn looks_like_float(value: &str) -> bool {
    let body = value.trim_start_matches(['-', '+']);
    let has_digit = body.bytes().any(|b| b.is_ascii_digit());
    has_digit
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'-' | b'+'))
        && body.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str, line: usize) -> Arc<Node> {
        Arc::new(Node::string(value, line, 1))
    }

    #[test]
    fn test_resolve_plain_tags() {
        assert_eq!(Tag::resolve_plain("~"), Tag::Null);
        assert_eq!(Tag::resolve_plain("true"), Tag::Bool);
        assert_eq!(Tag::resolve_plain("42"), Tag::Int);
        assert_eq!(Tag::resolve_plain("-0x1F"), Tag::Int);
        assert_eq!(Tag::resolve_plain("1.0"), Tag::Float);
        assert_eq!(Tag::resolve_plain("1e3"), Tag::Float);
        assert_eq!(Tag::resolve_plain("1.0.0"), Tag::Str);
        assert_eq!(Tag::resolve_plain("yes"), Tag::Str);
        assert_eq!(Tag::resolve_plain("e"), Tag::Str);
    }

    #[test]
    fn test_reference_detection() {
        let reference = Node::mapping(
            vec![key("$ref", 1), key("#/paths/~1pets", 1)],
            1,
            1,
        );
        assert!(reference.is_reference());
        assert_eq!(reference.reference_value(), Some("#/paths/~1pets"));

        let not_reference = Node::mapping(
            vec![key("$ref", 1), key("#/a", 1), key("summary", 2), key("x", 2)],
            1,
            1,
        );
        assert!(!not_reference.is_reference());
    }

    #[test]
    fn test_find_key_is_case_sensitive() {
        let map = Node::mapping(vec![key("Title", 1), key("nope", 1)], 1, 1);
        assert!(map.find_key("title").is_none());
        assert_eq!(map.find_key("Title").map(|n| n.value.as_str()), Some("nope"));
    }

    #[test]
    fn test_extension_key_prefix() {
        assert!(Node::string("x-internal", 1, 1).is_extension_key());
        assert!(Node::string("X-Upper", 1, 1).is_extension_key());
        assert!(!Node::string("xinternal", 1, 1).is_extension_key());
        assert!(!Node::string("x", 1, 1).is_extension_key());
    }

    #[test]
    fn test_to_value_follows_alias() {
        let target = Arc::new(Node::scalar("7", Tag::Int, 1, 1));
        let alias = Arc::new(Node::alias_of(Arc::clone(&target), 2, 1));
        assert_eq!(alias.to_value(), Value::Number(Number::from(7)));
        assert!(Arc::ptr_eq(&resolve_alias(&alias), &target));
    }
}
