//! YAML/JSON text to [`Node`] tree.
//!
//! Built on the `yaml-rust2` marked event stream: every node keeps the
//! line and column where its token started. JSON is parsed as the YAML
//! subset it is.

use crate::error::{OasError, ParseErrorKind, Result};
use crate::model::{Node, NodeKind, Tag};
use std::collections::HashMap;
use std::sync::Arc;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// A collection node whose content is still arriving.
struct Pending {
    kind: NodeKind,
    anchor_id: usize,
    line: usize,
    column: usize,
    content: Vec<Arc<Node>>,
}

/// Event receiver assembling the first document of a stream.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Pending>,
    anchors: HashMap<usize, Arc<Node>>,
    root: Option<Arc<Node>>,
    error: Option<ParseErrorKind>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Arc<Node>, anchor_id: usize) {
        if anchor_id > 0 {
            self.anchors.insert(anchor_id, Arc::clone(&node));
        }
        match self.stack.last_mut() {
            Some(parent) => parent.content.push(node),
            None if self.root.is_none() => self.root = Some(node),
            None => {}
        }
    }

    fn finish(&mut self) {
        let Some(pending) = self.stack.pop() else {
            return;
        };
        let node = match pending.kind {
            NodeKind::Mapping => Node::mapping(pending.content, pending.line, pending.column),
            _ => Node::sequence(pending.content, pending.line, pending.column),
        };
        let node = with_anchor(node, pending.anchor_id);
        self.attach(Arc::new(node), pending.anchor_id);
    }
}

fn with_anchor(mut node: Node, anchor_id: usize) -> Node {
    if anchor_id > 0 {
        node.anchor_id = Some(anchor_id);
    }
    node
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }
        let (line, column) = (mark.line(), mark.col() + 1);
        match ev {
            Event::MappingStart(anchor_id, ..) => self.stack.push(Pending {
                kind: NodeKind::Mapping,
                anchor_id,
                line,
                column,
                content: Vec::new(),
            }),
            Event::SequenceStart(anchor_id, ..) => self.stack.push(Pending {
                kind: NodeKind::Sequence,
                anchor_id,
                line,
                column,
                content: Vec::new(),
            }),
            Event::MappingEnd | Event::SequenceEnd => self.finish(),
            Event::Scalar(value, style, anchor_id, ..) => {
                let tag = if matches!(style, TScalarStyle::Plain) {
                    Tag::resolve_plain(&value)
                } else {
                    Tag::Str
                };
                let node = with_anchor(Node::scalar(value, tag, line, column), anchor_id);
                self.attach(Arc::new(node), anchor_id);
            }
            Event::Alias(anchor_id) => match self.anchors.get(&anchor_id) {
                Some(target) => {
                    let node = Node::alias_of(Arc::clone(target), line, column);
                    self.attach(Arc::new(node), 0);
                }
                None => {
                    self.error = Some(ParseErrorKind::UnknownAlias {
                        anchor_id,
                        line,
                        column,
                    });
                }
            },
            _ => {}
        }
    }
}

/// Parse the first document in `content` into a node tree.
pub fn parse_tree(content: &str) -> Result<Arc<Node>> {
    let mut builder = TreeBuilder::default();
    let mut parser = Parser::new_from_str(content);
    parser.load(&mut builder, false).map_err(|e| {
        let marker = e.marker();
        OasError::parse(
            "scanning document",
            ParseErrorKind::InvalidSyntax {
                message: e.info().to_string(),
                line: marker.line(),
                column: marker.col() + 1,
            },
        )
    })?;

    if let Some(kind) = builder.error {
        return Err(OasError::parse("resolving aliases", kind));
    }
    match builder.root {
        Some(root) if !(root.is_scalar() && root.tag == Tag::Null) => Ok(root),
        _ => Err(OasError::parse("reading root node", ParseErrorKind::EmptyDocument)),
    }
}
