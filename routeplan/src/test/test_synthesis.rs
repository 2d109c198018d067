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

//! Test the route synthesizer end to end: address plan in, route plan out.

use crate::addressing::{compute_address_plan, AddressPlan};
use crate::example_topologies::{chain, ExampleTopology, SmallMesh};
use crate::synthesis::{compute_route_plan, routes_for, RouteEntry};
use crate::topology::Topology;
use crate::types::{NodeId, Rank, SynthesisError};
use crate::Error;
use lazy_static::lazy_static;

lazy_static! {
    static ref U: NodeId = 0.into();
    static ref V: NodeId = 1.into();
    static ref W: NodeId = 2.into();
    static ref X: NodeId = 3.into();
    static ref Y: NodeId = 4.into();
    static ref Z: NodeId = 5.into();
}

#[test]
fn test_small_mesh_routes() {
    let topo = SmallMesh::topo();
    let addrs = compute_address_plan(&topo).unwrap();
    let routes = compute_route_plan(&topo, &addrs).unwrap();

    // u reaches z over u-v-w-z: the gateway is v's address on the u-v block,
    // the advertised address is z's address toward w, its lowest-rank neighbor
    assert_eq!(
        routes.route(*U, *Z),
        Some(&RouteEntry {
            destination: *Z,
            destination_addr: "10.3.6.2".parse().unwrap(),
            next_hop: *V,
            gateway: "10.1.2.2".parse().unwrap(),
        })
    );

    // v reaches z over v-w-z
    assert_eq!(
        routes.route(*V, *Z),
        Some(&RouteEntry {
            destination: *Z,
            destination_addr: "10.3.6.2".parse().unwrap(),
            next_hop: *W,
            gateway: "10.2.3.2".parse().unwrap(),
        })
    );

    // the mesh is connected: every node holds a route to all five others
    assert_eq!(routes.num_routes(), 30);
    for node in topo.nodes() {
        assert_eq!(routes.routes_from(node).unwrap().len(), 5);
    }
}

#[test]
fn test_gateway_is_directly_reachable() {
    let topo = SmallMesh::topo();
    let addrs = compute_address_plan(&topo).unwrap();
    let routes = compute_route_plan(&topo, &addrs).unwrap();

    for (&source, entries) in routes.iter() {
        for entry in entries {
            // the next hop must be a neighbor, and the gateway must be the
            // next hop's own address on the shared block
            let block = addrs
                .block_between(source, entry.next_hop)
                .expect("next hop is not a neighbor of the source");
            assert_eq!(block.addr_of(entry.next_hop), Some(entry.gateway));
            assert!(block.network().contains(&entry.gateway));
        }
    }
}

#[test]
fn test_route_plan_deterministic() {
    let topo = SmallMesh::topo();
    let addrs = compute_address_plan(&topo).unwrap();
    let first = compute_route_plan(&topo, &addrs).unwrap();
    let second = compute_route_plan(&topo, &addrs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_disconnected_components() {
    let mut topo = Topology::new();
    let a = topo.add_node("a", Rank(1)).unwrap();
    let b = topo.add_node("b", Rank(2)).unwrap();
    let c = topo.add_node("c", Rank(3)).unwrap();
    let d = topo.add_node("d", Rank(4)).unwrap();
    topo.add_edge(a, b).unwrap();
    topo.add_edge(c, d).unwrap();

    let addrs = compute_address_plan(&topo).unwrap();
    // synthesis succeeds; cross-component routes are simply absent
    let routes = compute_route_plan(&topo, &addrs).unwrap();
    assert_eq!(routes.num_routes(), 4);
    assert_eq!(routes.route(a, c), None);
    assert_eq!(routes.route(c, a), None);
    assert!(routes.route(a, b).is_some());
    assert!(routes.route(d, c).is_some());
}

#[test]
fn test_isolated_node_has_no_routes() {
    let mut topo = Topology::new();
    let a = topo.add_node("a", Rank(1)).unwrap();
    let b = topo.add_node("b", Rank(2)).unwrap();
    let lonely = topo.add_node("lonely", Rank(3)).unwrap();
    topo.add_edge(a, b).unwrap();

    let addrs = compute_address_plan(&topo).unwrap();
    let routes = compute_route_plan(&topo, &addrs).unwrap();
    assert_eq!(routes.routes_from(lonely), Some(&[][..]));
    assert_eq!(routes.num_routes(), 2);
}

#[test]
fn test_missing_address_block() {
    let topo = chain(2);
    let n1: NodeId = 0.into();
    let n2: NodeId = 1.into();

    // an empty plan cannot back any route
    assert_eq!(
        routes_for(&topo, &AddressPlan::default(), n1),
        Err(Error::SynthesisError(SynthesisError::MissingAddressBlock(n1, n2)))
    );
}
