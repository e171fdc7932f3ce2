//! The build protocol and the field extraction helpers it is written with.
//!
//! Every modeled object implements [`Buildable`]: given its own mapping node
//! and the document's [`SpecIndex`], it pulls each field out by name,
//! decodes it, and recursively builds nested objects. Fields are looked up
//! case-sensitively; extension keys are matched on a case-insensitive `x-`.

use super::decode::{decode_any, NodeDecode};
use super::reference::{Extensions, KeyReference, NodeReference, ReferenceMap, ValueReference};
use super::{resolve_alias, Node};
use crate::error::{ErrorContext, OasError, Result};
use crate::index::SpecIndex;
use serde_yaml::Value;
use std::sync::Arc;

/// An object that populates itself from a document node.
pub trait Buildable: Default + Send + Sync {
    /// Populate `self` from `root`, resolving references through `idx`.
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()>;
}

/// Allocate a `T` and build it from `node`.
pub fn build_object<T: Buildable>(node: &Arc<Node>, idx: &SpecIndex) -> Result<T> {
    let mut object = T::default();
    object.build(node, idx)?;
    Ok(object)
}

/// Decode the scalar field `label` of `root`.
///
/// Absent fields are `Ok(None)`; a present field whose value does not fit
/// `T` is an error carrying the value's position.
pub fn extract_field<T: NodeDecode>(label: &str, root: &Node) -> Result<Option<NodeReference<T>>> {
    let Some((key, value)) = root.target().find_key_full(label) else {
        return Ok(None);
    };
    let decoded = T::decode(value)
        .ok_or_else(|| OasError::invalid_value(label, T::EXPECTED, value.line, value.column))?;
    Ok(Some(NodeReference::new(
        decoded,
        Arc::clone(key),
        Arc::clone(value),
    )))
}

/// Extract an "any-shaped" field (object, then array, then scalar).
#[must_use]
pub fn extract_any(label: &str, root: &Node) -> Option<NodeReference<Value>> {
    root.target()
        .find_key_full(label)
        .map(|(key, value)| NodeReference::new(decode_any(value), Arc::clone(key), Arc::clone(value)))
}

/// Collect every vendor extension of `root`, in source order.
#[must_use]
pub fn extract_extensions(root: &Node) -> Extensions {
    root.target()
        .mapping_pairs()
        .filter(|(key, _)| key.is_extension_key())
        .map(|(key, value)| {
            (
                KeyReference::new(key.value.clone(), Arc::clone(key)),
                ValueReference::new(decode_any(value), Arc::clone(value)),
            )
        })
        .collect()
}

/// Resolve `node` and build a `T` from whatever it designates.
///
/// A referenced target stays on the build chain while it is built, so a
/// nested reference back to it is caught as circular instead of recursing.
pub(crate) fn build_referenced<T: Buildable>(
    node: &Arc<Node>,
    idx: &SpecIndex,
    context: String,
) -> Result<(T, Arc<Node>)> {
    let target = idx.resolve_target(node, &context)?;
    let _building = target.activate();
    let object = build_object::<T>(&target.node, idx).context(context)?;
    Ok((object, target.node))
}

/// Build the object-valued field `label`, resolving it first if it is a
/// reference.
pub fn extract_object<T: Buildable>(
    label: &str,
    root: &Node,
    idx: &SpecIndex,
) -> Result<Option<NodeReference<T>>> {
    let Some((key, value)) = root.target().find_key_full(label) else {
        return Ok(None);
    };
    let (object, target) = build_referenced::<T>(value, idx, format!("building '{label}'"))?;
    Ok(Some(NodeReference::new(object, Arc::clone(key), target)))
}

/// Build every element of the sequence field `label`.
pub fn extract_array<T: Buildable>(
    label: &str,
    root: &Node,
    idx: &SpecIndex,
) -> Result<Option<NodeReference<Vec<ValueReference<T>>>>> {
    let Some((key, value)) = root.target().find_key_full(label) else {
        return Ok(None);
    };
    let sequence = resolve_alias(value);
    if !sequence.is_sequence() {
        return Err(OasError::invalid_structure(
            label,
            "a sequence",
            value.line,
            value.column,
        ));
    }

    let mut items = Vec::with_capacity(sequence.content.len());
    for (i, element) in sequence.content.iter().enumerate() {
        let context = format!("building '{label}' item {i}");
        let (object, target) = build_referenced::<T>(element, idx, context)?;
        items.push(ValueReference::new(object, target));
    }
    Ok(Some(NodeReference::new(items, Arc::clone(key), sequence)))
}

/// Build every entry of the mapping field `label`, one after another.
///
/// Extension keys are not entries and are skipped.
pub fn extract_map<T: Buildable>(
    label: &str,
    root: &Node,
    idx: &SpecIndex,
) -> Result<Option<NodeReference<ReferenceMap<T>>>> {
    let Some((key, value)) = root.target().find_key_full(label) else {
        return Ok(None);
    };
    let mapping = mapping_field(label, value)?;

    let mut entries = ReferenceMap::new();
    for (entry_key, entry_value) in mapping.mapping_pairs() {
        if entry_key.is_extension_key() {
            continue;
        }
        let context = format!("building '{label}' entry '{}'", entry_key.value);
        let (object, target) = build_referenced::<T>(entry_value, idx, context)?;
        entries.insert(
            KeyReference::new(entry_key.value.clone(), Arc::clone(entry_key)),
            ValueReference::new(object, target),
        );
    }
    Ok(Some(NodeReference::new(entries, Arc::clone(key), mapping)))
}

/// Decode the sequence field `label` as a list of strings.
pub fn extract_string_array(
    label: &str,
    root: &Node,
) -> Result<Option<NodeReference<Vec<ValueReference<String>>>>> {
    extract_scalar_array::<String>(label, root)
}

/// Decode the sequence field `label` element by element.
pub fn extract_scalar_array<T: NodeDecode>(
    label: &str,
    root: &Node,
) -> Result<Option<NodeReference<Vec<ValueReference<T>>>>> {
    let Some((key, value)) = root.target().find_key_full(label) else {
        return Ok(None);
    };
    let sequence = resolve_alias(value);
    if !sequence.is_sequence() {
        return Err(OasError::invalid_structure(
            label,
            "a sequence",
            value.line,
            value.column,
        ));
    }
    let items = decode_sequence::<T>(label, &sequence)?;
    Ok(Some(NodeReference::new(items, Arc::clone(key), sequence)))
}

/// Decode the mapping field `label` as a map of strings, keeping every key.
pub fn extract_string_map(
    label: &str,
    root: &Node,
) -> Result<Option<NodeReference<ReferenceMap<String>>>> {
    extract_scalar_map::<String>(label, root)
}

/// Decode the mapping field `label` as a map of scalars or any-shaped
/// values, keeping every key.
pub fn extract_scalar_map<T: NodeDecode>(
    label: &str,
    root: &Node,
) -> Result<Option<NodeReference<ReferenceMap<T>>>> {
    let Some((key, value)) = root.target().find_key_full(label) else {
        return Ok(None);
    };
    let mapping = mapping_field(label, value)?;
    let mut entries = ReferenceMap::new();
    for (entry_key, entry_value) in mapping.mapping_pairs() {
        let decoded = T::decode(entry_value).ok_or_else(|| {
            OasError::invalid_value(
                format!("{label}.{}", entry_key.value),
                T::EXPECTED,
                entry_value.line,
                entry_value.column,
            )
        })?;
        entries.insert(
            KeyReference::new(entry_key.value.clone(), Arc::clone(entry_key)),
            ValueReference::new(decoded, Arc::clone(entry_value)),
        );
    }
    Ok(Some(NodeReference::new(entries, Arc::clone(key), mapping)))
}

/// Decode every element of a sequence node.
pub(crate) fn decode_sequence<T: NodeDecode>(
    label: &str,
    sequence: &Node,
) -> Result<Vec<ValueReference<T>>> {
    sequence
        .target()
        .content
        .iter()
        .map(|element| {
            T::decode(element)
                .map(|decoded| ValueReference::new(decoded, Arc::clone(element)))
                .ok_or_else(|| {
                    OasError::invalid_value(label, T::EXPECTED, element.line, element.column)
                })
        })
        .collect()
}

fn mapping_field(label: &str, value: &Arc<Node>) -> Result<Arc<Node>> {
    let mapping = resolve_alias(value);
    if mapping.is_mapping() {
        Ok(mapping)
    } else {
        Err(OasError::invalid_structure(
            label,
            "a mapping",
            value.line,
            value.column,
        ))
    }
}
