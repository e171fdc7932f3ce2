//! Reference targets currently being built on this thread.
//!
//! Building an object recurses into the objects it references. A target
//! that is reached again while it is still being built closes a cycle
//! through object bodies, which pointer-by-pointer lookup cannot see.
//! Each thread keeps the chain of targets it is inside; a parallel task
//! installs its parent's chain before it starts.

use crate::model::Node;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;

/// One reference target on the chain.
#[derive(Debug, Clone)]
pub(crate) struct ChainLink {
    /// Canonical pointer of the target.
    key: String,
    node: usize,
}

impl ChainLink {
    pub(crate) fn new(key: String, node: &Arc<Node>) -> Self {
        Self {
            key,
            node: node_id(node),
        }
    }
}

/// Targets being built, outermost first.
pub(crate) type BuildChain = Vec<ChainLink>;

thread_local! {
    static ACTIVE: RefCell<BuildChain> = const { RefCell::new(Vec::new()) };
}

fn node_id(node: &Arc<Node>) -> usize {
    Arc::as_ptr(node) as usize
}

/// Snapshot of this thread's chain.
pub(crate) fn current() -> BuildChain {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Keys from the first visit of `node` to the end of the chain, if `node`
/// is already being built.
pub(crate) fn loop_through(node: &Arc<Node>) -> Option<Vec<String>> {
    let id = node_id(node);
    ACTIVE.with(|active| {
        let active = active.borrow();
        active
            .iter()
            .position(|link| link.node == id)
            .map(|start| active[start..].iter().map(|link| link.key.clone()).collect())
    })
}

/// Push `link` for the lifetime of the returned guard.
pub(crate) fn push(link: ChainLink) -> ChainGuard {
    let depth = ACTIVE.with(|active| {
        let mut active = active.borrow_mut();
        let depth = active.len();
        active.push(link);
        depth
    });
    ChainGuard {
        depth,
        _thread_bound: PhantomData,
    }
}

/// Replace this thread's chain with `chain` until the scope drops.
pub(crate) fn install(chain: BuildChain) -> ChainScope {
    let previous = ACTIVE.with(|active| std::mem::replace(&mut *active.borrow_mut(), chain));
    ChainScope {
        previous: Some(previous),
        _thread_bound: PhantomData,
    }
}

/// Pops its link when dropped.
#[derive(Debug)]
pub(crate) struct ChainGuard {
    depth: usize,
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for ChainGuard {
    fn drop(&mut self) {
        ACTIVE.with(|active| active.borrow_mut().truncate(self.depth));
    }
}

/// Restores the chain it replaced when dropped.
#[derive(Debug)]
pub(crate) struct ChainScope {
    previous: Option<BuildChain>,
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for ChainScope {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            ACTIVE.with(|active| *active.borrow_mut() = previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: &str) -> Arc<Node> {
        Arc::new(Node::string(value, 1, 1))
    }

    #[test]
    fn test_guards_pop_in_order() {
        let a = node("a");
        let b = node("b");
        {
            let _outer = push(ChainLink::new("#/a".to_string(), &a));
            {
                let _inner = push(ChainLink::new("#/b".to_string(), &b));
                assert_eq!(loop_through(&a), Some(vec!["#/a".to_string(), "#/b".to_string()]));
                assert_eq!(loop_through(&b), Some(vec!["#/b".to_string()]));
            }
            assert!(loop_through(&b).is_none());
        }
        assert!(current().is_empty());
    }

    #[test]
    fn test_install_restores_previous_chain() {
        let a = node("a");
        let b = node("b");
        let _outer = push(ChainLink::new("#/a".to_string(), &a));
        {
            let _scope = install(vec![ChainLink::new("#/b".to_string(), &b)]);
            assert!(loop_through(&a).is_none());
            assert!(loop_through(&b).is_some());
        }
        assert!(loop_through(&a).is_some());
        assert!(loop_through(&b).is_none());
    }
}
