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

//! # Helper (printer) functions for plans
//! Module containing helper functions to get formatted strings and print
//! information about address and route plans, with all node names inserted.

use crate::addressing::{AddressBlock, AddressPlan};
use crate::synthesis::{RouteEntry, RoutePlan};
use crate::topology::Topology;
use crate::types::TopologyError;

/// Returns a formatted string for the block of one edge, with both endpoint
/// names and their assigned addresses inserted.
pub fn address_block(topo: &Topology, block: &AddressBlock) -> Result<String, TopologyError> {
    let [(a, addr_a), (b, addr_b)] = block.assignments();
    Ok(format!(
        "{net}: {a} <- {addr_a}, {b} <- {addr_b}",
        net = block.network(),
        a = topo.get_node_name(a)?,
        addr_a = addr_a,
        b = topo.get_node_name(b)?,
        addr_b = addr_b,
    ))
}

/// Get a vector of strings representing the address plan, one line per edge,
/// in deterministic order.
pub fn address_plan(topo: &Topology, plan: &AddressPlan) -> Result<Vec<String>, TopologyError> {
    let mut result = Vec::with_capacity(plan.len());
    for (_, block) in plan.iter() {
        result.push(address_block(topo, block)?);
    }
    Ok(result)
}

/// Returns a formatted string for a single route entry
pub fn route_entry(topo: &Topology, entry: &RouteEntry) -> Result<String, TopologyError> {
    Ok(format!(
        "to {dest} ({dest_addr}) via {nh} ({gw})",
        dest = topo.get_node_name(entry.destination)?,
        dest_addr = entry.destination_addr,
        nh = topo.get_node_name(entry.next_hop)?,
        gw = entry.gateway,
    ))
}

/// Get a vector of strings representing the route table of one source node,
/// one line per route entry.
pub fn route_table(topo: &Topology, entries: &[RouteEntry]) -> Result<Vec<String>, TopologyError> {
    entries.iter().map(|e| route_entry(topo, e)).collect()
}

/// Print the complete address plan to stdout
pub fn print_address_plan(topo: &Topology, plan: &AddressPlan) -> Result<(), TopologyError> {
    println!("AddressPlan {{");
    for line in address_plan(topo, plan)? {
        println!("    {}", line);
    }
    println!("}}");
    Ok(())
}

/// Print the complete route plan to stdout
pub fn print_route_plan(topo: &Topology, plan: &RoutePlan) -> Result<(), TopologyError> {
    println!("RoutePlan {{");
    for (source, entries) in plan.iter() {
        println!("    {}:", topo.get_node_name(*source)?);
        for line in route_table(topo, entries)? {
            println!("        {}", line);
        }
    }
    println!("}}");
    Ok(())
}
