//! Weighted quick-union with path halving over the universe `[0, n)`.
//!
//! The forest is stored as two parallel vectors indexed by element: `parent`
//! (a root points at itself) and `size` (meaningful only at roots). A live
//! component counter is kept beside them so [`UnionFind::component_count`]
//! is O(1).
//!
//! Path compression uses iterative path-halving: during [`UnionFind::find`]
//! each visited node is pointed at its grandparent, halving the path length
//! without a second pass or recursion. Unions attach the root of the smaller
//! tree under the root of the larger one; on equal sizes the root of the
//! first argument survives, so the resulting forest depends only on the
//! sequence of calls.

use crate::error::IndexOutOfRange;

/// A union-find (disjoint set) structure with path-halving and union-by-size.
///
/// Each element is identified by a `usize` ordinal in `[0, n)` where `n` is
/// the number of elements supplied at construction time. The universe never
/// grows or shrinks.
///
/// # Mutable queries
///
/// [`find`](Self::find), [`connected`](Self::connected) and
/// [`component_size`](Self::component_size) take `&mut self` because they
/// rewrite parent pointers as they walk. Embedders sharing a `UnionFind`
/// across threads must serialize every call, queries included, behind a
/// `Mutex` (not an `RwLock` read guard).
///
/// # Panics
///
/// The unchecked operations index the backing vectors directly, so an
/// element `>= n` panics with an out-of-bounds error. Use the `try_*`
/// variants when indices come from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `n` singleton sets.
    ///
    /// Each element `i` is initially its own root (`parent[i] == i`,
    /// `size[i] == 1`) and the component count is `n`. `n == 0` yields a
    /// valid empty structure on which every element operation fails.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the root of the component containing `p`.
    ///
    /// Each node visited on the way up is relinked to its grandparent. The
    /// path is halved, not flattened; repeated calls keep shortening it.
    ///
    /// # Panics
    ///
    /// Panics if `p >= self.len()`.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Merges the components containing `p` and `q` and returns the root of
    /// the merged component.
    ///
    /// The root of the strictly smaller tree is attached under the root of the
    /// larger one. On a size tie `find(q)` is attached under `find(p)`. When
    /// `p` and `q` already share a root nothing changes and that root is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if `p` or `q` is `>= self.len()`.
    pub fn union(&mut self, p: usize, q: usize) -> usize {
        let p_root = self.find(p);
        let q_root = self.find(q);

        if p_root == q_root {
            return p_root;
        }

        let (root, child) = if self.size[q_root] > self.size[p_root] {
            (q_root, p_root)
        } else {
            (p_root, q_root)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        root
    }

    /// Returns `true` if `p` and `q` belong to the same component.
    ///
    /// # Panics
    ///
    /// Panics if `p` or `q` is `>= self.len()`.
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Returns the number of elements in the component containing `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p >= self.len()`.
    pub fn component_size(&mut self, p: usize) -> usize {
        let root = self.find(p);
        self.size[root]
    }

    /// Returns the number of distinct components.
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns every component as an ascending list of its members.
    ///
    /// Components are ordered by their smallest member, so the output does not
    /// depend on which element happens to be the root.
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.count);

        for element in 0..self.len() {
            let root = self.find(element);
            match slot_of_root[root] {
                Some(slot) => groups[slot].push(element),
                None => {
                    slot_of_root[root] = Some(groups.len());
                    groups.push(vec![element]);
                }
            }
        }
        groups
    }

    /// Checked [`find`](Self::find).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `p >= self.len()`.
    pub fn try_find(&mut self, p: usize) -> Result<usize, IndexOutOfRange> {
        self.check(p)?;
        Ok(self.find(p))
    }

    /// Checked [`union`](Self::union). Both indices are validated before
    /// anything is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] for the first of `p`, `q` that is
    /// `>= self.len()`.
    pub fn try_union(&mut self, p: usize, q: usize) -> Result<usize, IndexOutOfRange> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.union(p, q))
    }

    /// Checked [`connected`](Self::connected).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] for the first of `p`, `q` that is
    /// `>= self.len()`.
    pub fn try_connected(&mut self, p: usize, q: usize) -> Result<bool, IndexOutOfRange> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.connected(p, q))
    }

    /// Checked [`component_size`](Self::component_size).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `p >= self.len()`.
    pub fn try_component_size(&mut self, p: usize) -> Result<usize, IndexOutOfRange> {
        self.check(p)?;
        Ok(self.component_size(p))
    }

    fn check(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}
