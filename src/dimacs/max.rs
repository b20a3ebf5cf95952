/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Reading and writing max flow networks in DIMACS format.
//!
//! A DIMACS max flow file looks as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p max <n> <m>`,
//!    where `<n>` is the number of nodes and `<m>` the number of arcs.
//! 4. after the problem line there must follow exactly two node lines
//!    of the form `n <node> <type>` where `<node>` is the node number
//!    between `1..n` and `<type>` is either `s` (the source node) or
//!    `t` (the sink node).
//! 5. after the node lines there must be exactly `m` arc lines `a <u>
//!    <v> <c>` denoting the source and sink nodes of an arc as well as
//!    the arcs capacity `<c>` (a number >= 0).
//!
//! Nodes are numbered from 1 in the file but from 0 in the network.
//! Loops are not allowed. Parallel arcs are accepted and become
//! parallel edges of the network.

use super::{DimacsReader, Error, Result};
use crate::maxflow::FordFulkerson;
use crate::num::traits::{NumAssign, Signed};

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Read a max flow network.
///
/// The returned network has no flow yet.
pub fn read<R, F>(r: R) -> Result<FordFulkerson<F>>
where
    R: Read,
    F: NumAssign + Signed + Ord + Copy + fmt::Display + FromStr,
    F::Err: fmt::Display,
{
    let mut reader = DimacsReader::new(r);

    let mut pline = reader.expect_line("p")?;
    pline.expect("max")?;
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    let mut src = None;
    let mut snk = None;
    let mut line = 0;
    for _ in 0..2 {
        let mut nline = reader.expect_line("n")?;
        line = nline.line;
        let u: usize = nline.number()?;
        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line,
                msg: format!("invalid node id {} (must be in 1..{})", u, nnodes),
            });
        }
        let (what, node) = match nline.str()? {
            "s" => ("source", &mut src),
            "t" => ("sink", &mut snk),
            what => {
                return Err(Error::Format {
                    line,
                    msg: format!("invalid node type, must be 's' or 't', got: {}", what),
                })
            }
        };
        if node.is_some() {
            return Err(Error::Format {
                line,
                msg: format!("duplicate {} node", what),
            });
        }
        *node = Some(u - 1);
        nline.end()?;
    }

    let (src, snk) = match (src, snk) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            return Err(Error::Format {
                line,
                msg: "missing source or sink node".to_string(),
            })
        }
    };
    let mut network = FordFulkerson::new(nnodes, src, snk).map_err(|source| Error::Network { line, source })?;

    for _ in 0..nedges {
        let mut aline = reader.expect_line("a")?;
        let line = aline.line;
        let u: usize = aline.number()?;
        let v: usize = aline.number()?;
        let c: F = aline.number()?;
        aline.end()?;

        for &(x, what) in &[(u, "source"), (v, "sink")] {
            if x < 1 || x > nnodes {
                return Err(Error::Data {
                    line,
                    msg: format!("invalid {} node id {} (must be in 1..{})", what, x, nnodes),
                });
            }
        }

        if u == v {
            return Err(Error::Data {
                line,
                msg: format!("invalid loop ({},{}) in edge", u, u),
            });
        }

        network
            .add_edge(u - 1, v - 1, c)
            .map_err(|source| Error::Network { line, source })?;
    }

    if let Some(toks) = reader.read_line()? {
        return Err(Error::Format {
            line: toks.line,
            msg: format!(
                "unexpected line at the end of file (expected exactly {} 'a' lines)",
                nedges,
            ),
        });
    }

    Ok(network)
}

pub fn read_from_file<F>(filename: &str) -> Result<FordFulkerson<F>>
where
    F: NumAssign + Signed + Ord + Copy + fmt::Display + FromStr,
    F::Err: fmt::Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a max flow network.
///
/// Only the capacities are written, the current flow is ignored.
pub fn write<W, F>(mut w: W, network: &FordFulkerson<F>) -> std::io::Result<()>
where
    W: Write,
    F: NumAssign + Signed + Ord + Copy + fmt::Display,
{
    writeln!(w, "p max {} {}", network.num_nodes(), network.num_edges())?;
    writeln!(w, "n {} s", network.source() + 1)?;
    writeln!(w, "n {} t", network.sink() + 1)?;
    for e in network.edges().filter(|e| e.id() & 1 == 0) {
        writeln!(w, "a {} {} {}", e.src() + 1, e.dst() + 1, e.capacity())?;
    }

    Ok(())
}

/// Write a max flow network to a named file.
pub fn write_to_file<F>(filename: &str, network: &FordFulkerson<F>) -> std::io::Result<()>
where
    F: NumAssign + Signed + Ord + Copy + fmt::Display,
{
    write(&mut std::fs::File::create(filename)?, network)
}

#[cfg(test)]
mod tests {
    use crate::dimacs::{self, Error};
    use crate::maxflow::FordFulkerson;
    use std::io::{self, Cursor};

    #[test]
    fn parse_file_test() {
        let file = "c this is a test file

p max 6 9
n 5 s
n 6 t

c there might be empty lines

a 5 1 10
a 5 2 10
a 1 2 2
a 1 3 4
a 1 4 8
a 2 4 9
a 3 6 10
a 4 3 6
a 4 6 10

c end of the file
";
        let mut network: FordFulkerson<i32> = dimacs::max::read(io::Cursor::new(file)).unwrap();

        assert_eq!(network.num_nodes(), 6);
        assert_eq!(network.num_edges(), 9);
        assert_eq!(network.source(), 4);
        assert_eq!(network.sink(), 5);

        let mut arcs: Vec<_> = network
            .edges()
            .filter(|e| !e.is_residual())
            .map(|e| (e.src() + 1, e.dst() + 1, e.capacity()))
            .collect();
        arcs.sort();

        assert_eq!(
            arcs,
            vec![
                (1, 2, 2),
                (1, 3, 4),
                (1, 4, 8),
                (2, 4, 9),
                (3, 6, 10),
                (4, 3, 6),
                (4, 6, 10),
                (5, 1, 10),
                (5, 2, 10),
            ]
        );

        network.solve();
        assert_eq!(network.value(), 19);
    }

    #[test]
    fn write_test_file() {
        let mut network = FordFulkerson::<i64>::new(4, 0, 3).unwrap();
        network.add_edge(0, 1, 4).unwrap();
        network.add_edge(0, 2, 2).unwrap();
        network.add_edge(1, 2, 2).unwrap();
        network.add_edge(1, 3, 3).unwrap();
        network.add_edge(2, 3, 5).unwrap();

        let mut buf = Cursor::new(Vec::new());
        dimacs::max::write(&mut buf, &network).unwrap();

        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "p max 4 5
n 1 s
n 4 t
a 1 2 4
a 1 3 2
a 2 3 2
a 2 4 3
a 3 4 5
"
        );
    }

    fn read_err(file: &str) -> Error {
        match dimacs::max::read::<_, i32>(Cursor::new(file.to_string())) {
            Err(err) => err,
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn invalid_files() {
        match read_err("p max 2 1\nn 1 s\nn 1 s\na 1 2 1\n") {
            Error::Format { line, msg } => {
                assert_eq!(line, 3);
                assert_eq!(msg, "duplicate source node");
            }
            err => panic!("unexpected error: {}", err),
        }

        match read_err("p max 2 1\nn 1 s\nn 2 t\na 1 3 1\n") {
            Error::Data { line, .. } => assert_eq!(line, 4),
            err => panic!("unexpected error: {}", err),
        }

        match read_err("p max 2 1\nn 1 s\nn 2 t\na 2 2 1\n") {
            Error::Data { line, msg } => {
                assert_eq!(line, 4);
                assert_eq!(msg, "invalid loop (2,2) in edge");
            }
            err => panic!("unexpected error: {}", err),
        }

        match read_err("p max 2 1\nn 1 s\nn 2 t\na 1 2 -1\n") {
            Error::Network { line, source } => {
                assert_eq!(line, 4);
                assert_eq!(source, crate::error::Error::NegativeCapacity { src: 0, dst: 1 });
            }
            err => panic!("unexpected error: {}", err),
        }

        match read_err("p max 2 1\nn 1 s\nn 2 t\na 1 2 1\na 2 1 1\n") {
            Error::Format { line, .. } => assert_eq!(line, 5),
            err => panic!("unexpected error: {}", err),
        }

        match read_err("p max 2 1\nn 1 s\nn 2 t\n") {
            Error::Format { msg, .. } => assert!(msg.starts_with("unexpected end of file")),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn roundtrip_through_file_format() {
        let mut network = FordFulkerson::<i64>::new(3, 2, 0).unwrap();
        network.add_edge(2, 1, 7).unwrap();
        network.add_edge(1, 0, 4).unwrap();
        network.add_edge(2, 1, 1).unwrap();

        let mut buf = Cursor::new(Vec::new());
        dimacs::max::write(&mut buf, &network).unwrap();
        let mut copy: FordFulkerson<i64> = dimacs::max::read(Cursor::new(buf.into_inner())).unwrap();

        assert_eq!((copy.source(), copy.sink()), (2, 0));
        copy.solve();
        assert_eq!(copy.value(), 4);
    }
}
