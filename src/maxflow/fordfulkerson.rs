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

//! This module implements the max flow algorithm of Ford and Fulkerson
//! with depth-first search for augmenting paths.
//!
//! Each round searches a single augmenting path from the source to the
//! sink. The search follows the outgoing edges of a node in insertion
//! order and stops at the first path reaching the sink, which is then
//! augmented by its bottleneck capacity. The algorithm stops as soon as
//! the sink is no longer reachable in the residual network.
//!
//! # Example
//!
//! ```
//! use ff_maxflow::FordFulkerson;
//!
//! let n = 11;
//! let (s, t) = (n - 2, n - 1);
//! let mut ff = FordFulkerson::<i64>::new(n, s, t).unwrap();
//!
//! for &(u, v, c) in &[
//!     (s, 0, 10), (s, 1, 5), (s, 2, 10),
//!     (0, 3, 10), (1, 2, 10), (2, 5, 15), (3, 1, 20), (3, 6, 15),
//!     (4, 1, 15), (4, 3, 3), (5, 4, 4), (5, 8, 10), (6, 7, 10),
//!     (7, 4, 10), (7, 5, 7),
//!     (6, t, 15), (8, t, 10),
//! ] {
//!     ff.add_edge(u, v, c).unwrap();
//! }
//!
//! ff.solve();
//! assert_eq!(ff.value(), 23);
//! assert_eq!(ff.mincut(), vec![1, 2, 4, 5, s]);
//!
//! // the flow satisfies the capacity bounds ...
//! assert!(ff.edges().filter(|e| e.id() % 2 == 0).all(|e| e.flow() >= 0 && e.flow() <= e.capacity()));
//! // ... and is conserved at each inner node
//! assert!((0..n).filter(|&u| u != s && u != t).all(|u| ff.outedges(u).map(|e| e.flow()).sum::<i64>() == 0));
//! ```

use super::edge::{residual, EdgeId, EdgeRef, EdgeTable};
use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, Signed};

use log::{debug, info, trace};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::cmp::min;
use std::fmt;

/// Max-flow algorithm of Ford and Fulkerson with DFS path search.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct FordFulkerson<F> {
    src: usize,
    snk: usize,
    edges: EdgeTable<F>,
    /// The outgoing edges (forward and residual) of each node.
    neighs: Vec<Vec<EdgeId>>,
    /// The round in which a node has been visited last (plus one).
    visited: Vec<usize>,
    round: usize,
    /// Whether the markers of the current round have been used.
    searched: bool,
    /// Search stack with (node, index of next outgoing edge).
    #[cfg_attr(feature = "serialize", serde(skip))]
    stack: Vec<(usize, usize)>,
    /// The edges from the source to the top of the stack.
    #[cfg_attr(feature = "serialize", serde(skip))]
    path: Vec<EdgeId>,
    value: F,
    naugmentations: usize,
}

impl<F> FordFulkerson<F>
where
    F: NumAssign + Signed + Ord + Copy + fmt::Display,
{
    /// Create an empty network with `n` nodes, source `src` and sink `snk`.
    pub fn new(n: usize, src: usize, snk: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyNetwork);
        }
        for &u in &[src, snk] {
            if u >= n {
                return Err(Error::NodeOutOfRange { node: u, n });
            }
        }
        if src == snk {
            return Err(Error::SourceIsSink(src));
        }

        Ok(FordFulkerson {
            src,
            snk,
            edges: EdgeTable::default(),
            neighs: vec![vec![]; n],
            visited: vec![0; n],
            round: 0,
            searched: false,
            stack: Vec::with_capacity(n),
            path: Vec::with_capacity(n),
            value: F::zero(),
            naugmentations: 0,
        })
    }

    /// Add an edge from `src` to `dst` with the given capacity.
    ///
    /// This also adds the residual edge from `dst` to `src`. Parallel
    /// edges are allowed and kept as separate edges.
    ///
    /// Returns the id of the new (forward) edge.
    pub fn add_edge(&mut self, src: usize, dst: usize, capacity: F) -> Result<EdgeId> {
        let n = self.num_nodes();
        for &u in &[src, dst] {
            if u >= n {
                return Err(Error::NodeOutOfRange { node: u, n });
            }
        }
        if capacity.is_negative() {
            return Err(Error::NegativeCapacity { src, dst });
        }

        let e = self.edges.push(src, dst, capacity);
        self.neighs[src].push(e);
        self.neighs[dst].push(residual(e));
        Ok(e)
    }

    pub fn num_nodes(&self) -> usize {
        self.neighs.len()
    }

    /// Return the number of edges added by `add_edge`.
    pub fn num_edges(&self) -> usize {
        self.edges.num_pairs()
    }

    pub fn source(&self) -> usize {
        self.src
    }

    pub fn sink(&self) -> usize {
        self.snk
    }

    /// Return the value of the current flow.
    ///
    /// After `solve` this is the value of a maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the number of augmenting paths found so far.
    pub fn augmentations(&self) -> usize {
        self.naugmentations
    }

    /// Return the flow on edge `e`.
    pub fn flow(&self, e: EdgeId) -> F {
        self.edges.flow(e)
    }

    pub fn edge(&self, e: EdgeId) -> EdgeRef<'_, F> {
        self.edges.get(e)
    }

    /// Iterate over all edges, including residual edges.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, F>> + '_ {
        self.edges.iter()
    }

    /// Iterate over the edges leaving `u` in insertion order.
    ///
    /// This includes the residual edges of edges entering `u`.
    pub fn outedges(&self, u: usize) -> impl Iterator<Item = EdgeRef<'_, F>> + '_ {
        self.neighs[u].iter().map(move |&e| self.edges.get(e))
    }

    /// Compute a maximum flow.
    ///
    /// Augments the current flow along augmenting paths until the sink
    /// cannot be reached anymore. Calling this method again without
    /// adding edges does not change the flow.
    pub fn solve(&mut self) {
        let start = self.naugmentations;
        loop {
            let df = self.search();
            if df.is_zero() {
                break;
            }
            self.value += df;
            self.naugmentations += 1;
            debug!("Round {}: augmented {} (flow value {})", self.round, df, self.value);
        }
        info!(
            "Maximum flow {} after {} augmentations",
            self.value,
            self.naugmentations - start
        );
    }

    /// Return the nodes reachable from the source in the residual network.
    ///
    /// After `solve` this is the source side of a minimal cut, sorted by
    /// node id. The result is empty if no search has been done yet.
    pub fn mincut(&self) -> Vec<usize> {
        if !self.searched {
            return vec![];
        }
        (0..self.num_nodes()).filter(|&u| self.is_visited(u)).collect()
    }

    fn is_visited(&self, u: usize) -> bool {
        self.visited[u] == self.round + 1
    }

    /// Start a new round, which implicitly unmarks all nodes.
    fn next_round(&mut self) {
        if self.round >= usize::max_value() - 1 {
            self.visited.fill(0);
            self.round = 0;
        } else {
            self.round += 1;
        }
        self.searched = false;
    }

    /// Search an augmenting path and augment the flow along it.
    ///
    /// Returns the bottleneck capacity of the path, or zero if the sink is
    /// not reachable.
    fn search(&mut self) -> F {
        if self.searched {
            self.next_round();
        }
        self.searched = true;

        let mark = self.round + 1;
        self.stack.clear();
        self.path.clear();
        self.visited[self.src] = mark;
        self.stack.push((self.src, 0));

        while let Some(&(u, pos)) = self.stack.last() {
            if pos == self.neighs[u].len() {
                // dead end, u will not be visited again in this round
                self.stack.pop();
                self.path.pop();
                continue;
            }

            let top = self.stack.len() - 1;
            self.stack[top].1 += 1;

            let e = self.neighs[u][pos];
            let v = self.edges.dst(e);
            if self.visited[v] == mark || self.edges.remaining_capacity(e) <= F::zero() {
                continue;
            }

            self.path.push(e);
            if v == self.snk {
                return self.augment();
            }
            self.visited[v] = mark;
            self.stack.push((v, 0));
        }

        F::zero()
    }

    /// Augment the flow along the current path by its bottleneck.
    fn augment(&mut self) -> F {
        let mut df = self.edges.remaining_capacity(self.path[0]);
        for &e in &self.path[1..] {
            df = min(df, self.edges.remaining_capacity(e));
        }
        debug_assert!(df > F::zero());

        for &e in &self.path {
            trace!("  augment {} by {}", self.edges.get(e), df);
            self.edges.augment(e, df);
        }

        df
    }
}

impl<F> fmt::Display for FordFulkerson<F>
where
    F: NumAssign + Signed + Ord + Copy + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for u in 0..self.num_nodes() {
            if u > 0 {
                writeln!(fmt)?;
            }
            write!(fmt, "Node {}", u)?;
            for e in self.outedges(u) {
                write!(
                    fmt,
                    "\n\t{} to {}, flow: {}, capacity: {} ({})",
                    e.src(),
                    e.dst(),
                    e.flow(),
                    e.capacity(),
                    if e.is_residual() { "Residual" } else { "Normal" }
                )?;
            }
        }
        Ok(())
    }
}

/// Solve the maxflow problem using the algorithm of Ford-Fulkerson.
///
/// The network has `n` nodes and the given `edges` as triples
/// `(src, dst, capacity)`. The function solves the max flow problem from
/// the source node `src` to the sink node `snk`.
///
/// The function returns the flow value, the flow on each edge (in the
/// order of `edges`) and the nodes in a minimal cut.
pub fn fordfulkerson<F, I>(n: usize, src: usize, snk: usize, edges: I) -> Result<(F, Vec<F>, Vec<usize>)>
where
    F: NumAssign + Signed + Ord + Copy + fmt::Display,
    I: IntoIterator<Item = (usize, usize, F)>,
{
    let mut maxflow = FordFulkerson::new(n, src, snk)?;
    let mut ids = vec![];
    for (u, v, c) in edges {
        ids.push(maxflow.add_edge(u, v, c)?);
    }
    maxflow.solve();
    Ok((
        maxflow.value(),
        ids.into_iter().map(|e| maxflow.flow(e)).collect(),
        maxflow.mincut(),
    ))
}
