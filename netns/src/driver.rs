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

//! # Plan Driver
//!
//! Applies the rendered command sequences to an executor, in the fixed order
//! addresses, forwarding, routes. Application is fail-fast: the first command
//! exiting with a non-zero status aborts the run.

use crate::commands::{address_commands, forwarding_commands, route_commands, InterfaceMap};
use crate::exec::NodeExecutor;
use crate::{Error, Result};

use log::*;
use routeplan::{AddressPlan, RoutePlan, Topology};

/// Apply the address plan and the route plan to the given executor. The three
/// phases run in order: addresses are assigned first, then forwarding is
/// enabled, then the static routes are installed, so a route never names a
/// gateway that is not yet configured.
pub fn apply_plans<E: NodeExecutor>(
    exec: &mut E,
    topo: &Topology,
    addrs: &AddressPlan,
    routes: &RoutePlan,
) -> Result<()> {
    let interfaces = InterfaceMap::from_topology(topo)?;

    let mut commands = address_commands(topo, addrs, &interfaces)?;
    commands.extend(forwarding_commands(topo)?);
    commands.extend(route_commands(topo, routes)?);
    info!("Applying {} commands to {} nodes", commands.len(), topo.num_nodes());

    for cmd in commands {
        let output = exec.execute(&cmd.node, &cmd.command)?;
        if !output.success() {
            return Err(Error::CommandFailed {
                node: cmd.node,
                command: cmd.command,
                status: output.status,
                output: output.output,
            });
        }
    }
    Ok(())
}

/// Probe every edge with a single ping in both directions and return the
/// (source, target) node name pairs that did not answer. An empty vector
/// means all links are up. Probing continues past failures; only executor
/// errors abort the run.
pub fn probe_edges<E: NodeExecutor>(
    exec: &mut E,
    topo: &Topology,
    addrs: &AddressPlan,
) -> Result<Vec<(String, String)>> {
    let mut failed = Vec::new();
    for (edge, block) in addrs.iter() {
        let [(low, _), (high, _)] = block.assignments();
        for &(source, target) in &[(low, high), (high, low)] {
            let source_name = topo.get_node_name(source)?;
            let target_name = topo.get_node_name(target)?;
            // addr_of never fails for an endpoint of the block's own edge
            let target_addr = block.addr_of(target).unwrap();
            let output = exec.execute(source_name, &format!("ping -c 1 -W 1 {}", target_addr))?;
            if output.success() {
                trace!("{} -> {}: ok", source_name, target_name);
            } else {
                warn!("{} -> {}: no answer over {:?}", source_name, target_name, edge);
                failed.push((source_name.to_string(), target_name.to_string()));
            }
        }
    }
    Ok(failed)
}
