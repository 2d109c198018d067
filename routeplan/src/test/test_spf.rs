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

//! Test the shortest-path oracle: BFS distances and the lowest-rank
//! tie-break for the first hop.

use crate::example_topologies::{chain, ExampleTopology, SmallMesh};
use crate::spf::next_hops;
use crate::topology::Topology;
use crate::types::{NodeId, Rank, TopologyError};
use lazy_static::lazy_static;
use maplit::btreemap;

lazy_static! {
    static ref U: NodeId = 0.into();
    static ref V: NodeId = 1.into();
    static ref W: NodeId = 2.into();
    static ref X: NodeId = 3.into();
    static ref Y: NodeId = 4.into();
    static ref Z: NodeId = 5.into();
}

#[test]
fn test_chain() {
    let topo = chain(4);
    let n1: NodeId = 0.into();
    let n2: NodeId = 1.into();
    let n3: NodeId = 2.into();
    let n4: NodeId = 3.into();

    assert_eq!(
        next_hops(&topo, n1),
        Ok(btreemap! { n2 => n2, n3 => n2, n4 => n2 })
    );
    assert_eq!(
        next_hops(&topo, n2),
        Ok(btreemap! { n1 => n1, n3 => n3, n4 => n3 })
    );
    assert_eq!(
        next_hops(&topo, n4),
        Ok(btreemap! { n1 => n3, n2 => n3, n3 => n3 })
    );
}

#[test]
fn test_small_mesh_tie_break() {
    let topo = SmallMesh::topo();

    // from u: both u-v-w and u-x-w are shortest paths to w, and both
    // u-v-w-z and u-x-w-z are shortest paths to z. The first hop with the
    // lowest rank is v (rank 2), not x (rank 4). y however is only reachable
    // in two hops through x.
    assert_eq!(
        next_hops(&topo, *U),
        Ok(btreemap! {
            *V => *V,
            *W => *V,
            *X => *X,
            *Y => *X,
            *Z => *V,
        })
    );
}

#[test]
fn test_small_mesh_next_hop_is_neighbor() {
    let topo = SmallMesh::topo();
    for source in topo.nodes() {
        for (destination, hop) in next_hops(&topo, source).unwrap() {
            assert!(topo.edge_between(source, hop).is_some());
            assert_ne!(destination, source);
        }
    }
}

#[test]
fn test_disconnected() {
    let mut topo = Topology::new();
    let a = topo.add_node("a", Rank(1)).unwrap();
    let b = topo.add_node("b", Rank(2)).unwrap();
    let c = topo.add_node("c", Rank(3)).unwrap();
    let d = topo.add_node("d", Rank(4)).unwrap();
    topo.add_edge(a, b).unwrap();
    topo.add_edge(c, d).unwrap();

    // nodes of the other component are absent, not an error
    assert_eq!(next_hops(&topo, a), Ok(btreemap! { b => b }));
    assert_eq!(next_hops(&topo, c), Ok(btreemap! { d => d }));
}

#[test]
fn test_isolated_source() {
    let mut topo = Topology::new();
    let a = topo.add_node("a", Rank(1)).unwrap();
    let b = topo.add_node("b", Rank(2)).unwrap();
    let lonely = topo.add_node("lonely", Rank(3)).unwrap();
    topo.add_edge(a, b).unwrap();

    assert_eq!(next_hops(&topo, lonely), Ok(btreemap! {}));
}

#[test]
fn test_unknown_source() {
    let topo = chain(2);
    let ghost: NodeId = 42.into();
    assert_eq!(next_hops(&topo, ghost), Err(TopologyError::UnknownNode(ghost)));
}
