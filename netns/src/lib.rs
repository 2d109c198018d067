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

//! # Network Namespace Backend
//!
//! This crate turns the plans computed by [`routeplan`] into `ip` and
//! `sysctl` invocations, executed inside per-node Linux network namespaces.
//! Every configuration step is first rendered into a [`ConfigCommand`]
//! sequence, so the exact commands can be inspected (or recorded in tests)
//! before anything touches the host.
//!
//! ```no_run
//! use netns::{apply_plans, NetnsExecutor};
//! use routeplan::example_topologies::{ExampleTopology, SmallMesh};
//! use routeplan::{compute_address_plan, compute_route_plan};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let topo = SmallMesh::topo();
//!     let addrs = compute_address_plan(&topo)?;
//!     let routes = compute_route_plan(&topo, &addrs)?;
//!
//!     let mut exec = NetnsExecutor::default();
//!     apply_plans(&mut exec, &topo, &addrs, &routes)?;
//!     Ok(())
//! }
//! ```
#![deny(missing_docs)]

mod commands;
mod driver;
mod exec;

pub use commands::{
    address_commands, forwarding_commands, route_commands, ConfigCommand, InterfaceMap,
};
pub use driver::{apply_plans, probe_edges};
pub use exec::{CommandOutput, NetnsExecutor, NodeExecutor, RecordingExecutor};

use thiserror::Error;

/// # Netns Error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error while spawning or waiting for a process
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// A command exited with a non-zero status
    #[error("Command failed on {node}: `{command}` exited with {status}:\n{output}")]
    CommandFailed {
        /// Name of the node the command ran on
        node: String,
        /// The shell command that failed
        command: String,
        /// Exit status of the command
        status: i32,
        /// Combined output of the command
        output: String,
    },
    /// A node of the plan has no interface on the requested edge
    #[error("Node {node} has no interface toward {peer}")]
    MissingInterface {
        /// Name of the node missing the interface
        node: String,
        /// Name of the peer on the other end of the edge
        peer: String,
    },
    /// Error raised while computing or inspecting the plans
    #[error("Plan error: {0}")]
    PlanError(#[from] routeplan::Error),
    /// Error raised while inspecting the topology
    #[error("Topology error: {0}")]
    TopologyError(#[from] routeplan::TopologyError),
}

/// Netns Result type
type Result<T> = core::result::Result<T, Error>;
