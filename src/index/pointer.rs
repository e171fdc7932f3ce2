//! Reference pointer syntax.
//!
//! A pointer is `#/a/b` (same document), `resource#/a/b` (another
//! document) or a bare `resource` (the whole of another document).
//! Fragment segments use JSON-pointer escapes (`~1` for `/`, `~0` for `~`)
//! and may be percent-encoded.

use crate::model::{resolve_alias, Node};
use std::fmt;
use std::sync::Arc;

/// A parsed reference pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pointer {
    /// Resource part, `None` for a fragment-only pointer.
    pub resource: Option<String>,
    /// Decoded fragment segments, empty for the document root.
    pub segments: Vec<String>,
}

impl Pointer {
    /// Parse pointer text, returning the reason on failure.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if text.is_empty() {
            return Err("pointer is empty".to_string());
        }
        let (resource, fragment) = match text.split_once('#') {
            Some((resource, fragment)) => (resource, fragment),
            None => (text, ""),
        };
        let resource = (!resource.is_empty()).then(|| resource.to_string());

        let segments = if fragment.is_empty() {
            Vec::new()
        } else {
            let Some(path) = fragment.strip_prefix('/') else {
                return Err(format!("fragment '{fragment}' must start with '/'"));
            };
            path.split('/')
                .map(decode_segment)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self { resource, segments })
    }

    /// The fragment part, re-escaped (`#/a/b`).
    #[must_use]
    pub fn fragment(&self) -> String {
        let mut out = String::from("#");
        for segment in &self.segments {
            out.push('/');
            out.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        }
        out
    }

    /// Walk the segments from `root`, following aliases along the way.
    #[must_use]
    pub fn walk(&self, root: &Arc<Node>) -> Option<Arc<Node>> {
        let mut current = resolve_alias(root);
        for segment in &self.segments {
            let next = if current.is_mapping() {
                current.find_key(segment).cloned()
            } else if current.is_sequence() {
                segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| current.content.get(i).cloned())
            } else {
                None
            }?;
            current = resolve_alias(&next);
        }
        Some(current)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(resource) = &self.resource {
            write!(f, "{resource}")?;
        }
        write!(f, "{}", self.fragment())
    }
}

/// Decode one fragment segment: percent escapes first, then `~1` and `~0`.
fn decode_segment(raw: &str) -> Result<String, String> {
    let unescaped = percent_decode(raw)?;
    let mut out = String::with_capacity(unescaped.len());
    let mut chars = unescaped.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(format!("invalid escape in segment '{raw}'")),
        }
    }
    Ok(out)
}

fn percent_decode(raw: &str) -> Result<String, String> {
    if !raw.contains('%') {
        return Ok(raw.to_string());
    }
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = raw
                .get(i + 1..i + 3)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| format!("invalid percent escape in segment '{raw}'"))?;
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| format!("segment '{raw}' is not valid UTF-8"))
}
