// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Edges of a residual network.
//!
//! Each inserted edge is stored together with its residual edge. The
//! forward edge of pair `k` has id `2k`, the residual edge has id
//! `2k + 1`, so the partner of edge `e` is always `e ^ 1`.
//!
//! Both directions share a single flow value: the flow on the forward
//! edge. The residual edge carries the negated flow and has capacity
//! zero, hence its remaining capacity equals the flow on the forward
//! edge.

use crate::num::traits::{NumAssign, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::fmt;

/// Identifier of an edge in an [`EdgeTable`].
pub type EdgeId = usize;

/// Return the paired edge of `e`.
#[inline]
pub fn residual(e: EdgeId) -> EdgeId {
    e ^ 1
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
struct EdgePair<F> {
    src: usize,
    dst: usize,
    capacity: F,
    flow: F,
}

/// The table of all forward and residual edges of a network.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct EdgeTable<F> {
    pairs: Vec<EdgePair<F>>,
}

impl<F> Default for EdgeTable<F> {
    fn default() -> Self {
        EdgeTable { pairs: vec![] }
    }
}

impl<F> EdgeTable<F> {
    /// Return the number of edges including residual edges.
    pub fn len(&self) -> usize {
        self.pairs.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the number of forward edges.
    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Return the source node of edge `e`.
    pub fn src(&self, e: EdgeId) -> usize {
        let pair = &self.pairs[e >> 1];
        if e & 1 == 0 {
            pair.src
        } else {
            pair.dst
        }
    }

    /// Return the destination node of edge `e`.
    pub fn dst(&self, e: EdgeId) -> usize {
        self.src(residual(e))
    }

    /// Return a read-only view of edge `e`.
    pub fn get(&self, e: EdgeId) -> EdgeRef<'_, F> {
        assert!(e < self.len(), "invalid edge id {}", e);
        EdgeRef { table: self, id: e }
    }

    /// Iterate over all edges, forward and residual, in id order.
    pub fn iter(&self) -> impl Iterator<Item = EdgeRef<'_, F>> + '_ {
        (0..self.len()).map(move |e| EdgeRef { table: self, id: e })
    }
}

impl<F> EdgeTable<F>
where
    F: NumAssign + Signed + Ord + Copy,
{
    /// Insert a forward edge and its residual edge.
    ///
    /// Returns the id of the forward edge; the residual edge has id
    /// `residual(e)`.
    pub(crate) fn push(&mut self, src: usize, dst: usize, capacity: F) -> EdgeId {
        debug_assert!(!capacity.is_negative());
        self.pairs.push(EdgePair {
            src,
            dst,
            capacity,
            flow: F::zero(),
        });
        (self.pairs.len() - 1) << 1
    }

    /// Return the capacity of edge `e` (always zero for residual edges).
    pub fn capacity(&self, e: EdgeId) -> F {
        if e & 1 == 0 {
            self.pairs[e >> 1].capacity
        } else {
            F::zero()
        }
    }

    /// Return the flow on edge `e`.
    pub fn flow(&self, e: EdgeId) -> F {
        let flow = self.pairs[e >> 1].flow;
        if e & 1 == 0 {
            flow
        } else {
            -flow
        }
    }

    /// Return the capacity that is still available on edge `e`.
    pub fn remaining_capacity(&self, e: EdgeId) -> F {
        self.capacity(e) - self.flow(e)
    }

    /// Return `true` if `e` has capacity zero.
    ///
    /// This is true for every residual edge, but also for forward edges
    /// inserted with capacity zero.
    pub fn is_residual(&self, e: EdgeId) -> bool {
        self.capacity(e).is_zero()
    }

    /// Send `df` additional units of flow over edge `e`.
    ///
    /// The flow on the paired edge decreases by the same amount.
    ///
    /// # Panics
    ///
    /// If `df` is not positive or exceeds the remaining capacity of `e`.
    pub(crate) fn augment(&mut self, e: EdgeId, df: F) {
        assert!(
            df > F::zero() && df <= self.remaining_capacity(e),
            "augmentation exceeds remaining capacity of edge {}",
            e
        );
        let pair = &mut self.pairs[e >> 1];
        if e & 1 == 0 {
            pair.flow += df;
        } else {
            pair.flow -= df;
        }
    }
}

/// A read-only view of one edge.
pub struct EdgeRef<'a, F> {
    table: &'a EdgeTable<F>,
    id: EdgeId,
}

impl<'a, F> Clone for EdgeRef<'a, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, F> Copy for EdgeRef<'a, F> {}

impl<'a, F> EdgeRef<'a, F> {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn src(&self) -> usize {
        self.table.src(self.id)
    }

    pub fn dst(&self) -> usize {
        self.table.dst(self.id)
    }

    /// Return the paired edge.
    pub fn residual(&self) -> EdgeRef<'a, F> {
        EdgeRef {
            table: self.table,
            id: residual(self.id),
        }
    }
}

impl<'a, F> EdgeRef<'a, F>
where
    F: NumAssign + Signed + Ord + Copy,
{
    pub fn capacity(&self) -> F {
        self.table.capacity(self.id)
    }

    pub fn flow(&self) -> F {
        self.table.flow(self.id)
    }

    pub fn remaining_capacity(&self) -> F {
        self.table.remaining_capacity(self.id)
    }

    pub fn is_residual(&self) -> bool {
        self.table.is_residual(self.id)
    }
}

impl<'a, F> fmt::Display for EdgeRef<'a, F> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} -> {}", self.src(), self.dst())
    }
}

impl<'a, F> fmt::Debug for EdgeRef<'a, F>
where
    F: NumAssign + Signed + Ord + Copy + fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("src", &self.src())
            .field("dst", &self.dst())
            .field("flow", &self.flow())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{residual, EdgeTable};

    #[test]
    fn pairing() {
        let mut edges = EdgeTable::<i32>::default();
        let a = edges.push(0, 1, 10);
        let b = edges.push(1, 2, 5);

        assert_eq!(edges.len(), 4);
        assert_eq!(edges.num_pairs(), 2);
        assert_eq!((a, b), (0, 2));
        assert_eq!(residual(residual(a)), a);

        let r = edges.get(a).residual();
        assert_eq!(r.id(), 1);
        assert_eq!((r.src(), r.dst()), (1, 0));
        assert!(r.is_residual());
        assert!(!edges.get(a).is_residual());
        assert_eq!(r.residual().id(), a);
        assert_eq!(edges.get(b).to_string(), "1 -> 2");
        assert_eq!(edges.get(residual(b)).to_string(), "2 -> 1");
    }

    #[test]
    fn augment_moves_flow_to_residual() {
        let mut edges = EdgeTable::<i64>::default();
        let e = edges.push(3, 4, 7);
        let r = residual(e);
        assert_eq!(edges.remaining_capacity(e), 7);
        assert_eq!(edges.remaining_capacity(r), 0);

        edges.augment(e, 5);
        assert_eq!(edges.flow(e), 5);
        assert_eq!(edges.flow(r), -5);
        assert_eq!(edges.remaining_capacity(e), 2);
        assert_eq!(edges.remaining_capacity(r), 5);

        // undo part of the flow via the residual edge
        edges.augment(r, 3);
        assert_eq!(edges.flow(e), 2);
        assert_eq!(edges.flow(r), -2);
        assert_eq!(edges.remaining_capacity(e), 5);
        assert_eq!(edges.remaining_capacity(r), 2);
    }

    #[test]
    fn zero_capacity_forward_edge() {
        let mut edges = EdgeTable::<i32>::default();
        let e = edges.push(0, 1, 0);
        assert!(edges.is_residual(e));
        assert!(edges.is_residual(residual(e)));
        assert_eq!(edges.remaining_capacity(e), 0);
    }

    #[test]
    #[should_panic(expected = "exceeds remaining capacity")]
    fn augment_beyond_capacity() {
        let mut edges = EdgeTable::<i32>::default();
        let e = edges.push(0, 1, 2);
        edges.augment(e, 3);
    }

    #[test]
    #[should_panic(expected = "exceeds remaining capacity")]
    fn augment_empty_residual() {
        let mut edges = EdgeTable::<i32>::default();
        let e = edges.push(0, 1, 2);
        edges.augment(residual(e), 1);
    }
}
