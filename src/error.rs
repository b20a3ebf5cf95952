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

//! Errors raised while building a flow network.

use thiserror::Error;

/// Invalid arguments passed to the network construction functions.
///
/// All of these are detected before the network is modified, so a
/// failing call leaves the network untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the network must have at least one node")]
    EmptyNetwork,
    #[error("invalid node id {node} (must be in 0..{n})")]
    NodeOutOfRange { node: usize, n: usize },
    #[error("source and sink node must not be equal (both are {0})")]
    SourceIsSink(usize),
    #[error("negative capacity on edge ({src},{dst})")]
    NegativeCapacity { src: usize, dst: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NodeOutOfRange { node: 7, n: 5 }.to_string(),
            "invalid node id 7 (must be in 0..5)"
        );
        assert_eq!(
            Error::SourceIsSink(3).to_string(),
            "source and sink node must not be equal (both are 3)"
        );
        assert_eq!(
            Error::NegativeCapacity { src: 0, dst: 1 }.to_string(),
            "negative capacity on edge (0,1)"
        );
    }
}
