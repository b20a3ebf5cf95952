// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Maximum flows with the method of Ford and Fulkerson.
//!
//! A network is built by adding edges one by one. Every edge is stored
//! together with a residual edge of capacity zero in opposite direction,
//! which allows later augmenting paths to cancel flow.
//!
//! # Example
//!
//! ```
//! use ff_maxflow::FordFulkerson;
//!
//! let mut ff = FordFulkerson::<i32>::new(3, 0, 2).unwrap();
//! let sa = ff.add_edge(0, 1, 10).unwrap();
//! let at = ff.add_edge(1, 2, 5).unwrap();
//! ff.solve();
//!
//! assert_eq!(ff.value(), 5);
//! assert_eq!(ff.flow(sa), 5);
//! assert_eq!(ff.flow(at), 5);
//! assert_eq!(ff.mincut(), vec![0, 1]);
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

pub mod maxflow;
pub use self::maxflow::{fordfulkerson, EdgeId, EdgeRef, FordFulkerson};

#[cfg(feature = "dimacs")]
pub mod dimacs;
