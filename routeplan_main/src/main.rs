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

use routeplan::printer;
use routeplan::{compute_address_plan, compute_route_plan};

use netns::{
    address_commands, apply_plans, forwarding_commands, probe_edges, route_commands,
    InterfaceMap, NetnsExecutor,
};

use clap::{Parser, Subcommand};
use log::*;
use std::error::Error;

mod topology_file;
use topology_file::TopologySelection;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    // match on the action
    match args.cmd {
        MainCommand::Plan { topology, commands } => {
            let topo = topology.topology()?;
            let addrs = compute_address_plan(&topo)?;
            let routes = compute_route_plan(&topo, &addrs)?;

            if commands {
                let interfaces = InterfaceMap::from_topology(&topo)?;
                for cmd in address_commands(&topo, &addrs, &interfaces)? {
                    println!("{}", cmd);
                }
                for cmd in forwarding_commands(&topo)? {
                    println!("{}", cmd);
                }
                for cmd in route_commands(&topo, &routes)? {
                    println!("{}", cmd);
                }
            } else {
                printer::print_address_plan(&topo, &addrs)?;
                printer::print_route_plan(&topo, &routes)?;
            }
        }
        MainCommand::Apply { topology, probe } => {
            let topo = topology.topology()?;
            let addrs = compute_address_plan(&topo)?;
            let routes = compute_route_plan(&topo, &addrs)?;

            let mut exec = NetnsExecutor::default();
            apply_plans(&mut exec, &topo, &addrs, &routes)?;
            info!("All plans applied");

            if probe {
                let failed = probe_edges(&mut exec, &topo, &addrs)?;
                if failed.is_empty() {
                    info!("All links answered");
                } else {
                    for (source, target) in &failed {
                        error!("Link probe failed: {} -> {}", source, target);
                    }
                    return Err(format!("{} link probes failed", failed.len()).into());
                }
            }
        }
    }

    Ok(())
}

/// Compute deterministic address and route plans for a topology, and
/// optionally apply them to per-node Linux network namespaces.
#[derive(Parser, Debug)]
#[command(name = "routeplan", version)]
struct CommandLineArguments {
    /// Action to perform
    #[command(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Compute the plans and print them without touching the host
    Plan {
        /// Topology to plan for
        #[command(flatten)]
        topology: TopologySelection,
        /// Print the rendered shell commands instead of the plan summary
        #[arg(short, long)]
        commands: bool,
    },
    /// Compute the plans and apply them to the network namespaces
    Apply {
        /// Topology to apply
        #[command(flatten)]
        topology: TopologySelection,
        /// Ping every link in both directions after applying
        #[arg(short, long)]
        probe: bool,
    },
}
