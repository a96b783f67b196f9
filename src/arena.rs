//! Index-addressed arena for the `LB` back-edge lists.
//!
//! The algorithm needs O(1) prepend, O(1) splice-append at the tail (via a
//! per-list tail pointer), and in-place pruning of a list's head while
//! scanning it. A vector of intrusive cells addressed by handle gives all
//! three without raw pointers: a cell is never individually freed, it's
//! just unlinked, and the whole arena is dropped with the `State` that owns
//! it at the end of `compute`.

use crate::error::Error;

/// Handle to a single back-edge cell. Opaque outside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellId(usize);

#[derive(Debug, Default)]
pub struct BackEdgeArena {
    target: Vec<usize>,
    next: Vec<Option<CellId>>,
}

impl BackEdgeArena {
    pub fn with_capacity_hint(edges: usize) -> Result<Self, Error> {
        let mut target = Vec::new();
        let mut next = Vec::new();
        target.try_reserve(edges).map_err(|_| Error::OutOfMemory)?;
        next.try_reserve(edges).map_err(|_| Error::OutOfMemory)?;
        Ok(BackEdgeArena { target, next })
    }

    /// Allocates a new cell targeting `target`, returning its handle. The
    /// cell starts with no successor; the caller links it in.
    pub fn alloc(&mut self, target_vertex: usize) -> Result<CellId, Error> {
        if self.target.len() == self.target.capacity() {
            self.target
                .try_reserve(self.target.len().max(1))
                .map_err(|_| Error::OutOfMemory)?;
            self.next
                .try_reserve(self.next.len().max(1))
                .map_err(|_| Error::OutOfMemory)?;
        }
        let id = CellId(self.target.len());
        self.target.push(target_vertex);
        self.next.push(None);
        Ok(id)
    }

    pub fn target(&self, id: CellId) -> usize {
        self.target[id.0]
    }

    pub fn next(&self, id: CellId) -> Option<CellId> {
        self.next[id.0]
    }

    pub fn set_next(&mut self, id: CellId, next: Option<CellId>) {
        self.next[id.0] = next;
    }
}
