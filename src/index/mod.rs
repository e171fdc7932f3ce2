//! Specification index: the shared reference resolution authority.
//!
//! One [`SpecIndex`] is created per parsed document. It catalogs every
//! reference node up front, then resolves pointers on demand while the
//! object graph is built, caching every pointer it has resolved. All
//! interior state is lock-guarded so entries of a concurrently built
//! collection can resolve distinct pointers at the same time.
//!
//! ```
//! use oas_tools::config::BuildConfig;
//! use oas_tools::index::SpecIndex;
//! use oas_tools::parsers::parse_document_str;
//!
//! let root = parse_document_str("a: {$ref: '#/b'}\nb: {name: pet}\n").unwrap();
//! let index = SpecIndex::new(root.clone(), &BuildConfig::default());
//! assert_eq!(index.reference_count(), 1);
//!
//! let reference = root.find_key("a").unwrap();
//! let target = index.resolve(reference, "building 'a'").unwrap();
//! assert_eq!(target.find_key("name").unwrap().value, "pet");
//! ```

pub(crate) mod chain;
mod pointer;
mod resolver;

pub use pointer::Pointer;
pub use resolver::{DocumentResolver, StaticResolver};

use crate::config::BuildConfig;
use crate::error::{ErrorContext, OasError, ResolveErrorKind, Result};
use crate::model::{resolve_alias, Node};
use chain::{ChainGuard, ChainLink};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// A reference node found while cataloging the document.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    /// Pointer text as written.
    pub definition: String,
    /// The reference mapping node (`{$ref: ...}`).
    pub node: Arc<Node>,
}

impl ReferenceEntry {
    /// Line of the pointer value.
    #[must_use]
    pub fn line(&self) -> usize {
        reference_position(&self.node).0
    }

    /// Column of the pointer value.
    #[must_use]
    pub fn column(&self) -> usize {
        reference_position(&self.node).1
    }
}

/// A reference chain that loops back on itself.
#[derive(Debug, Clone)]
pub struct CircularReference {
    /// Canonical pointers visited, ending with the one seen twice.
    pub journey: Vec<String>,
    /// Best-effort node: the reference node where the loop closed.
    pub node: Arc<Node>,
    /// Position of the pointer that started the lookup.
    pub line: usize,
    pub column: usize,
}

impl CircularReference {
    /// The journey joined with arrows, e.g. `#/a -> #/b -> #/a`.
    #[must_use]
    pub fn journey_text(&self) -> String {
        self.journey.join(" -> ")
    }
}

/// Outcome of following a reference chain.
#[derive(Debug, Clone)]
pub enum Located {
    /// The chain ended at a non-reference node.
    Found(Arc<Node>),
    /// The chain revisited a pointer.
    Circular(CircularReference),
}

/// A resolved object to build, with the pointer it was reached through.
#[derive(Debug, Clone)]
pub(crate) struct Target {
    pub(crate) node: Arc<Node>,
    link: Option<ChainLink>,
}

impl Target {
    /// A node built where it is written, not reached through a reference.
    pub(crate) const fn inline(node: Arc<Node>) -> Self {
        Self { node, link: None }
    }

    /// Hold the target on this thread's build chain until the guard drops.
    pub(crate) fn activate(&self) -> Option<ChainGuard> {
        self.link.clone().map(chain::push)
    }
}

/// Result of walking a reference chain, keeping the last pointer followed.
enum Walk {
    Found {
        node: Arc<Node>,
        key: Option<String>,
    },
    Circular(CircularReference),
}

/// Document a pointer is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Scope {
    Local,
    Remote(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => Ok(()),
            Self::Remote(resource) => write!(f, "{resource}"),
        }
    }
}

/// Index of a single document's references.
pub struct SpecIndex {
    root: Arc<Node>,
    location: Option<String>,
    allow_circular: AtomicBool,
    concurrent_collections: bool,
    references: Vec<ReferenceEntry>,
    resolver: Option<Arc<dyn DocumentResolver>>,
    remote_documents: RwLock<HashMap<String, Arc<Node>>>,
    resolved: RwLock<HashMap<String, Arc<Node>>>,
    circular: Mutex<Vec<CircularReference>>,
}

impl fmt::Debug for SpecIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecIndex")
            .field("location", &self.location)
            .field("allow_circular", &self.allow_circular_reference_resolving())
            .field("references", &self.references.len())
            .field("has_resolver", &self.resolver.is_some())
            .finish_non_exhaustive()
    }
}

impl SpecIndex {
    /// Index `root`, cataloging every reference node in it.
    #[must_use]
    pub fn new(root: Arc<Node>, config: &BuildConfig) -> Self {
        let mut references = Vec::new();
        collect_references(&root, &mut references);
        tracing::debug!("Indexed {} references", references.len());

        Self {
            root,
            location: config.location.clone(),
            allow_circular: AtomicBool::new(config.allow_circular_references),
            concurrent_collections: config.concurrent_collections,
            references,
            resolver: None,
            remote_documents: RwLock::new(HashMap::new()),
            resolved: RwLock::new(HashMap::new()),
            circular: Mutex::new(Vec::new()),
        }
    }

    /// Attach a resolver for cross-document pointers.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn DocumentResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Root node of the indexed document.
    #[must_use]
    pub fn root(&self) -> &Arc<Node> {
        &self.root
    }

    /// Every reference node in the document, in source order.
    #[must_use]
    pub fn all_references(&self) -> &[ReferenceEntry] {
        &self.references
    }

    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn allow_circular_reference_resolving(&self) -> bool {
        self.allow_circular.load(Ordering::Relaxed)
    }

    pub fn set_allow_circular_reference_resolving(&self, allow: bool) {
        self.allow_circular.store(allow, Ordering::Relaxed);
    }

    /// Whether collections built against this index fan out in parallel.
    #[must_use]
    pub const fn concurrent_collections(&self) -> bool {
        self.concurrent_collections
    }

    /// Circular references tolerated so far.
    #[must_use]
    pub fn circular_references(&self) -> Vec<CircularReference> {
        self.circular
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Pre-populate the document for `resource`.
    pub fn register_remote_document(&self, resource: impl Into<String>, root: Arc<Node>) {
        let resource = resource.into();
        tracing::debug!("Registered remote document '{}'", resource);
        self.remote_documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(resource, root);
    }

    /// Follow the reference chain starting at `node`.
    ///
    /// A node that is not a reference is returned as found. A chain that
    /// visits the same pointer twice is reported as circular rather than
    /// followed forever.
    pub fn locate_ref_node(&self, node: &Arc<Node>) -> Result<Located> {
        Ok(match self.walk(node)? {
            Walk::Found { node, .. } => Located::Found(node),
            Walk::Circular(circular) => Located::Circular(circular),
        })
    }

    /// Resolve `node` under the circular reference policy.
    ///
    /// Non-reference nodes come back unchanged. A tolerated cycle yields
    /// the best-effort node and is recorded; a forbidden one is an error
    /// carrying the journey and the position of the starting pointer.
    pub fn resolve(&self, node: &Arc<Node>, context: &str) -> Result<Arc<Node>> {
        match self.walk(node).context(context)? {
            Walk::Found { node, .. } => Ok(node),
            Walk::Circular(circular) => self.apply_circular_policy(circular, context),
        }
    }

    /// Resolve `node` as an object about to be built.
    ///
    /// Besides pointer cycles, this catches targets that are reached again
    /// while they are still being built on the current chain, such as an
    /// `items` that refers back to the schema containing it. Both kinds
    /// follow the circular reference policy.
    pub(crate) fn resolve_target(&self, node: &Arc<Node>, context: &str) -> Result<Target> {
        match self.walk(node).context(context)? {
            Walk::Circular(circular) => Ok(Target::inline(self.apply_circular_policy(circular, context)?)),
            Walk::Found { node: found, key: None } => Ok(Target::inline(found)),
            Walk::Found {
                node: found,
                key: Some(key),
            } => match chain::loop_through(&found) {
                None => Ok(Target {
                    link: Some(ChainLink::new(key, &found)),
                    node: found,
                }),
                Some(mut journey) => {
                    journey.push(key);
                    let start = resolve_alias(node);
                    let (line, column) = reference_position(&start);
                    let circular = CircularReference {
                        journey,
                        node: start,
                        line,
                        column,
                    };
                    Ok(Target::inline(self.apply_circular_policy(circular, context)?))
                }
            },
        }
    }

    fn apply_circular_policy(&self, circular: CircularReference, context: &str) -> Result<Arc<Node>> {
        if self.allow_circular_reference_resolving() {
            tracing::warn!(
                "Circular reference '{}' at line {}, column {} tolerated",
                circular.journey_text(),
                circular.line,
                circular.column
            );
            let best_effort = Arc::clone(&circular.node);
            self.circular
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(circular);
            Ok(best_effort)
        } else {
            Err(OasError::resolve(
                context,
                ResolveErrorKind::Circular {
                    journey: circular.journey_text(),
                    line: circular.line,
                    column: circular.column,
                },
            ))
        }
    }

    fn walk(&self, node: &Arc<Node>) -> Result<Walk> {
        let start = resolve_alias(node);
        let (line, column) = reference_position(&start);
        let mut current = Arc::clone(&start);
        let mut scope = Scope::Local;
        let mut journey: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        while let Some(text) = current.reference_value() {
            let (ref_line, ref_column) = reference_position(&current);
            let pointer = Pointer::parse(text).map_err(|reason| {
                OasError::resolve(
                    "parsing reference",
                    ResolveErrorKind::Malformed {
                        reference: text.to_string(),
                        reason,
                        line: ref_line,
                        column: ref_column,
                    },
                )
            })?;
            let target_scope = self.scope_of(&pointer, &scope);
            let key = format!("{target_scope}{}", pointer.fragment());

            if !seen.insert(key.clone()) {
                journey.push(key);
                return Ok(Walk::Circular(CircularReference {
                    journey,
                    node: current,
                    line,
                    column,
                }));
            }
            journey.push(key.clone());

            let target = self
                .lookup(&key, &pointer, &target_scope)
                .map_err(|reason| {
                    OasError::resolve(
                        format!("following '{text}'"),
                        ResolveErrorKind::RemoteUnavailable {
                            resource: target_scope.to_string(),
                            reference: text.to_string(),
                            reason,
                            line: ref_line,
                            column: ref_column,
                        },
                    )
                })?
                .ok_or_else(|| {
                    OasError::resolve(
                        "locating reference",
                        ResolveErrorKind::NotFound {
                            reference: text.to_string(),
                            line: ref_line,
                            column: ref_column,
                        },
                    )
                })?;
            current = resolve_alias(&target);
            scope = target_scope;
        }

        Ok(Walk::Found {
            node: current,
            key: journey.pop(),
        })
    }

    fn scope_of(&self, pointer: &Pointer, current: &Scope) -> Scope {
        match &pointer.resource {
            None => current.clone(),
            Some(resource) if self.location.as_deref() == Some(resource.as_str()) => Scope::Local,
            Some(resource) => Scope::Remote(resource.clone()),
        }
    }

    /// Look up a single pointer, consulting and filling the cache.
    ///
    /// Fails only when the pointer's remote document cannot be had; the
    /// error is the reason.
    fn lookup(
        &self,
        key: &str,
        pointer: &Pointer,
        scope: &Scope,
    ) -> std::result::Result<Option<Arc<Node>>, String> {
        if let Some(hit) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            tracing::debug!("Reference cache hit for '{}'", key);
            return Ok(Some(Arc::clone(hit)));
        }

        let document = match scope {
            Scope::Local => Arc::clone(&self.root),
            Scope::Remote(resource) => self.remote_document(resource)?,
        };
        let found = pointer.walk(&document);
        if let Some(node) = &found {
            self.resolved
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_string(), Arc::clone(node));
        }
        Ok(found)
    }

    /// Fetch `resource` once, however many lookups miss it at the same time.
    fn remote_document(&self, resource: &str) -> std::result::Result<Arc<Node>, String> {
        if let Some(doc) = self
            .remote_documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(resource)
        {
            return Ok(Arc::clone(doc));
        }

        let mut documents = self
            .remote_documents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Fetched by another lookup while this one waited for the lock.
        if let Some(doc) = documents.get(resource) {
            return Ok(Arc::clone(doc));
        }

        let Some(resolver) = &self.resolver else {
            return Err("no resolver configured".to_string());
        };
        let doc = resolver.resolve(resource).map_err(|e| {
            let reason = error_chain(&e);
            tracing::warn!("Remote document '{}' could not be fetched: {}", resource, reason);
            reason
        })?;
        tracing::debug!("Fetched remote document '{}'", resource);
        documents.insert(resource.to_string(), Arc::clone(&doc));
        Ok(doc)
    }
}

/// An error and its sources, joined with colons.
fn error_chain(err: &OasError) -> String {
    let mut text = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Line and column of the pointer value of a reference node, or of the
/// node itself when it is not a reference.
fn reference_position(node: &Node) -> (usize, usize) {
    node.reference_parts()
        .map_or((node.line, node.column), |(_, value)| (value.line, value.column))
}

fn collect_references(node: &Arc<Node>, out: &mut Vec<ReferenceEntry>) {
    if let Some(definition) = node.reference_value() {
        out.push(ReferenceEntry {
            definition: definition.to_string(),
            node: Arc::clone(node),
        });
        return;
    }
    for child in &node.content {
        collect_references(child, out);
    }
}
