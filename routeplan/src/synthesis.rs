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

//! # Route Synthesizer
//!
//! Joins the shortest-path oracle with the address plan: for every ordered
//! pair of connected nodes, the synthesizer produces one static route naming
//! a gateway address that is directly reachable from the source. The result
//! is a pure, deterministic function of the topology snapshot and the plan;
//! computing it twice, in any order over sources, yields identical output.

use crate::addressing::AddressPlan;
use crate::spf;
use crate::topology::Topology;
use crate::types::{NodeId, SynthesisError};
use crate::Error;
use log::*;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// A single static route owned by one source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RouteEntry {
    /// The destination node
    pub destination: NodeId,
    /// The representative address of the destination: its address on the edge
    /// toward its lowest-rank neighbor. This is the address the route is
    /// installed for.
    pub destination_addr: Ipv4Addr,
    /// The first node on the chosen shortest path toward the destination
    pub next_hop: NodeId,
    /// The gateway of the route: the next hop's address on the block of the
    /// directly connected source--next-hop edge.
    pub gateway: Ipv4Addr,
}

/// # Route Plan
///
/// The complete routing plane: for every node of the topology, the full set
/// of route entries toward every other reachable node. Nodes in different
/// components simply have no entries for each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePlan {
    routes: BTreeMap<NodeId, Vec<RouteEntry>>,
}

impl RoutePlan {
    /// Return the route entries of one source node, sorted by destination.
    /// `None` if the node is not part of the plan's topology.
    pub fn routes_from(&self, node: NodeId) -> Option<&[RouteEntry]> {
        self.routes.get(&node).map(|r| r.as_slice())
    }

    /// Return the route from `source` toward `destination`, if one exists
    pub fn route(&self, source: NodeId, destination: NodeId) -> Option<&RouteEntry> {
        self.routes
            .get(&source)?
            .iter()
            .find(|r| r.destination == destination)
    }

    /// Iterate over all (source, entries) pairs in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Vec<RouteEntry>)> {
        self.routes.iter()
    }

    /// Total number of route entries over all sources
    pub fn num_routes(&self) -> usize {
        self.routes.values().map(|r| r.len()).sum()
    }
}

/// Compute the full set of routes for a single source node. For each
/// reachable destination, the gateway is the next hop's address on the
/// directly connected block, and the advertised address is the destination's
/// deterministic representative address. Fails only if the given address plan
/// does not cover the topology.
pub fn routes_for(
    topo: &Topology,
    plan: &AddressPlan,
    source: NodeId,
) -> Result<Vec<RouteEntry>, Error> {
    let mut entries = Vec::new();
    for (destination, next_hop) in spf::next_hops(topo, source)? {
        let gateway = plan
            .block_between(source, next_hop)
            .and_then(|block| block.addr_of(next_hop))
            .ok_or(SynthesisError::MissingAddressBlock(source, next_hop))?;
        let destination_addr = plan
            .node_addr(topo, destination)?
            .ok_or(SynthesisError::NoAddressForNode(destination))?;
        entries.push(RouteEntry { destination, destination_addr, next_hop, gateway });
    }
    Ok(entries)
}

/// Compute the route plan for every node of the topology. Either a fully
/// consistent plan is returned, or the first error; a half-computed plan is
/// never emitted.
pub fn compute_route_plan(topo: &Topology, plan: &AddressPlan) -> Result<RoutePlan, Error> {
    let mut routes = BTreeMap::new();
    for node in topo.nodes() {
        let entries = routes_for(topo, plan, node)?;
        trace!("{}: {} routes", topo.get_node_name(node)?, entries.len());
        routes.insert(node, entries);
    }
    let result = RoutePlan { routes };
    debug!(
        "Synthesized {} routes for {} nodes",
        result.num_routes(),
        topo.num_nodes()
    );
    Ok(result)
}
