// Routeplan: Deterministic Static-Route Synthesis for Emulated Networks
// Copyright (C) 2026  The Routeplan Developers
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Example Topologies
//!
//! Collection of prepared topologies, used by the test suite and the command
//! line frontend. All of them follow the same pattern: a unit struct
//! implementing [`ExampleTopology`], plus [`chain`] for arbitrarily long
//! lines of nodes.

use crate::topology::Topology;
use crate::types::Rank;

/// Trait for prepared example topologies
pub trait ExampleTopology {
    /// Build the topology
    fn topo() -> Topology;
}

/// # SmallMesh
///
/// Six nodes `u, v, w, x, y, z` with ranks 1 to 6 and nine edges:
///
/// ```text
/// u --- v --- w --- z
///  \   /|   / | \
///   \ / |  /  |  \
///    x -+-'   y---+
///     \_______/
/// ```
///
/// Edges: `u-v, u-x, v-w, v-x, x-y, x-w, w-y, w-z, y-z`. There is no direct
/// edge between `u` and `z`; the two shortest paths are `u-v-w-z` and
/// `u-x-w-z`.
pub struct SmallMesh {}

impl ExampleTopology for SmallMesh {
    fn topo() -> Topology {
        let mut t = Topology::new();

        let u = t.add_node("u", Rank(1)).unwrap();
        let v = t.add_node("v", Rank(2)).unwrap();
        let w = t.add_node("w", Rank(3)).unwrap();
        let x = t.add_node("x", Rank(4)).unwrap();
        let y = t.add_node("y", Rank(5)).unwrap();
        let z = t.add_node("z", Rank(6)).unwrap();

        t.add_edge(u, v).unwrap();
        t.add_edge(u, x).unwrap();
        t.add_edge(v, w).unwrap();
        t.add_edge(v, x).unwrap();
        t.add_edge(x, y).unwrap();
        t.add_edge(x, w).unwrap();
        t.add_edge(w, y).unwrap();
        t.add_edge(w, z).unwrap();
        t.add_edge(y, z).unwrap();

        t
    }
}

/// # DenseMesh
///
/// Six nodes `u, v, w, ex, y, z` with ranks 1, 2, 3, 4, 5, 6 and ten edges:
/// the [`SmallMesh`] wiring (with `ex` in the position of `x`) plus a direct
/// `u-w` edge.
pub struct DenseMesh {}

impl ExampleTopology for DenseMesh {
    fn topo() -> Topology {
        let mut t = Topology::new();

        let u = t.add_node("u", Rank(1)).unwrap();
        let v = t.add_node("v", Rank(2)).unwrap();
        let w = t.add_node("w", Rank(3)).unwrap();
        let ex = t.add_node("ex", Rank(4)).unwrap();
        let y = t.add_node("y", Rank(5)).unwrap();
        let z = t.add_node("z", Rank(6)).unwrap();

        t.add_edge(u, ex).unwrap();
        t.add_edge(u, v).unwrap();
        t.add_edge(u, w).unwrap();
        t.add_edge(v, w).unwrap();
        t.add_edge(v, ex).unwrap();
        t.add_edge(ex, y).unwrap();
        t.add_edge(ex, w).unwrap();
        t.add_edge(w, y).unwrap();
        t.add_edge(w, z).unwrap();
        t.add_edge(y, z).unwrap();

        t
    }
}

/// Build a chain of `n` nodes named `n1, n2, ...` with ranks 1 to `n`, each
/// connected to its successor. Useful for tests that need a topology of a
/// specific diameter.
pub fn chain(n: u8) -> Topology {
    let mut t = Topology::new();
    let mut prev = None;
    for i in 1..=n {
        let node = t.add_node(format!("n{}", i), Rank(i)).unwrap();
        if let Some(prev) = prev {
            t.add_edge(prev, node).unwrap();
        }
        prev = Some(node);
    }
    t
}
