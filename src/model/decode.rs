//! Decoding document nodes into typed values.

use super::node::{parse_float, parse_int};
use super::{Node, NodeKind, Tag};
use serde_yaml::Value;

/// Types that can be decoded from a single document node.
pub trait NodeDecode: Sized {
    /// Human-readable description of what the node must hold.
    const EXPECTED: &'static str;

    /// Decode `node`, or `None` when its shape or tag does not fit.
    fn decode(node: &Node) -> Option<Self>;
}

impl NodeDecode for String {
    const EXPECTED: &'static str = "a string";

    fn decode(node: &Node) -> Option<Self> {
        let node = node.target();
        match (node.kind, node.tag) {
            (NodeKind::Scalar, Tag::Null) => Some(Self::new()),
            (NodeKind::Scalar, _) => Some(node.value.clone()),
            _ => None,
        }
    }
}

impl NodeDecode for bool {
    const EXPECTED: &'static str = "a boolean";

    fn decode(node: &Node) -> Option<Self> {
        let node = node.target();
        (node.is_scalar() && node.tag == Tag::Bool)
            .then(|| node.value.eq_ignore_ascii_case("true"))
    }
}

impl NodeDecode for i64 {
    const EXPECTED: &'static str = "an integer";

    fn decode(node: &Node) -> Option<Self> {
        let node = node.target();
        if node.is_scalar() && node.tag == Tag::Int {
            parse_int(&node.value)
        } else {
            None
        }
    }
}

impl NodeDecode for f64 {
    const EXPECTED: &'static str = "a number";

    fn decode(node: &Node) -> Option<Self> {
        let node = node.target();
        if node.is_scalar() && matches!(node.tag, Tag::Int | Tag::Float) {
            parse_float(&node.value)
        } else {
            None
        }
    }
}

impl NodeDecode for Value {
    const EXPECTED: &'static str = "any value";

    fn decode(node: &Node) -> Option<Self> {
        Some(decode_any(node))
    }
}

type DecodeAttempt = fn(&Node) -> Option<Value>;

/// Decode attempts for "any-shaped" values, in priority order.
const ANY_ATTEMPTS: [DecodeAttempt; 3] = [decode_object, decode_array, decode_scalar];

fn decode_object(node: &Node) -> Option<Value> {
    node.is_mapping().then(|| node.to_value())
}

fn decode_array(node: &Node) -> Option<Value> {
    node.is_sequence().then(|| node.to_value())
}

fn decode_scalar(node: &Node) -> Option<Value> {
    Some(node.to_value())
}

/// Decode a node whose shape is not known up front.
///
/// Tries an object first, then an array, then falls back to an arbitrary
/// scalar; the first attempt that succeeds wins.
#[must_use]
pub fn decode_any(node: &Node) -> Value {
    let node = node.target();
    ANY_ATTEMPTS
        .iter()
        .find_map(|attempt| attempt(node))
        .unwrap_or(Value::Null)
}
