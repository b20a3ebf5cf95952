/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use ff_maxflow::dimacs;
use ff_maxflow::FordFulkerson;

use std::error::Error;

/// The small example network with 11 nodes.
fn example() -> Result<FordFulkerson<i64>, ff_maxflow::Error> {
    let n = 11;
    let s = n - 2;
    let t = n - 1;
    let mut ff = FordFulkerson::new(n, s, t)?;

    // edges from the source
    ff.add_edge(s, 0, 10)?;
    ff.add_edge(s, 1, 5)?;
    ff.add_edge(s, 2, 10)?;

    ff.add_edge(0, 3, 10)?;
    ff.add_edge(1, 2, 10)?;
    ff.add_edge(2, 5, 15)?;
    ff.add_edge(3, 1, 20)?;
    ff.add_edge(3, 6, 15)?;
    ff.add_edge(4, 1, 15)?;
    ff.add_edge(4, 3, 3)?;
    ff.add_edge(5, 4, 4)?;
    ff.add_edge(5, 8, 10)?;
    ff.add_edge(6, 7, 10)?;
    ff.add_edge(7, 4, 10)?;
    ff.add_edge(7, 5, 7)?;

    // edges to the sink
    ff.add_edge(6, t, 15)?;
    ff.add_edge(8, t, 10)?;

    Ok(ff)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve max-flow problem with the algorithm of Ford-Fulkerson.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt quiet:bool, desc:"Do not print the final network.";
        param file:Option<String>, desc:"Instance file name (default: built-in example)";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let network = match args.file {
        Some(ref file) => dimacs::max::read_from_file::<i64>(file)?,
        None => example()?,
    };
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", network.num_nodes());
    println!("  number of arcs: {}", network.num_edges());

    let mut ff = network.clone();
    let tstart = OffsetDateTime::now_utc();
    for _ in 0..args.num {
        ff = network.clone();
        ff.solve();
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    let s = ff.source();
    let t = ff.sink();
    assert!(ff.edges().all(|e| e.flow() <= e.capacity()));
    assert!((0..ff.num_nodes())
        .filter(|&u| u != s && u != t)
        .all(|u| ff.outedges(u).map(|e| e.flow()).sum::<i64>() == 0));
    assert_eq!(ff.outedges(s).map(|e| e.flow()).sum::<i64>(), ff.value());

    if !args.quiet {
        println!("{}", ff);
        println!("{}", "=".repeat(20));
    }
    println!("Max Flow: {}", ff.value());

    Ok(())
}
