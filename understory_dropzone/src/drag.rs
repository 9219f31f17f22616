// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-target bookkeeping: tell a real drag exit apart from moving between
//! descendants.
//!
//! Entering a child fires `enter(child)` before `leave(parent)`, so the first
//! leave seen is not an exit. The set records every node that received an
//! enter; a leave removes its node after discarding nodes no longer inside the
//! root. The drag has left only once the set is empty.

use smallvec::SmallVec;

/// Nodes currently under an active drag, in enter order.
#[derive(Clone, Debug)]
pub(crate) struct DragTargets<K> {
    targets: SmallVec<[K; 4]>,
}

impl<K: Clone + PartialEq> DragTargets<K> {
    pub(crate) fn new() -> Self {
        Self {
            targets: SmallVec::new(),
        }
    }

    /// Records a node that received drag-enter.
    pub(crate) fn enter(&mut self, node: K) {
        self.targets.push(node);
    }

    /// Handles drag-leave on `node`.
    ///
    /// Tracked nodes for which `in_root` is false are discarded first, then
    /// one occurrence of `node` is removed. Returns `true` if tracked nodes
    /// remain, meaning the pointer only moved inside the root.
    pub(crate) fn leave(&mut self, node: Option<&K>, mut in_root: impl FnMut(&K) -> bool) -> bool {
        self.targets.retain(|t| in_root(&*t));
        if let Some(node) = node
            && let Some(idx) = self.targets.iter().position(|t| t == node)
        {
            self.targets.remove(idx);
        }
        !self.targets.is_empty()
    }

    /// Forgets every tracked node.
    pub(crate) fn clear(&mut self) {
        self.targets.clear();
    }

    /// Returns `true` if no node holds the drag.
    pub(crate) fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.targets.len()
    }
}
