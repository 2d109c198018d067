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

#![deny(missing_docs)]

//! # Routeplan: Deterministic Static-Route Synthesis
//!
//! This is a library for computing a complete, reproducible static-route
//! configuration for a point-to-point network, given only its topology graph.
//! The computation is pure: the topology is built once, and every derived
//! artifact (address blocks, next hops, route tables) is a deterministic
//! function of that snapshot.
//!
//! ## Structure
//!
//! - **[`Topology`](topology::Topology)**: the undirected graph of named,
//!   ranked nodes and point-to-point edges. Read-only after construction.
//!
//! - **[`addressing`]**: assigns every edge a conflict-free /30 block, derived
//!   purely from the ranks of its two endpoints. The public entry point is
//!   [`compute_address_plan`](addressing::compute_address_plan).
//!
//! - **[`spf`]**: the shortest-path oracle. Breadth-first search from a source
//!   node, retaining only the first hop toward every reachable destination,
//!   with ties broken toward the lowest rank.
//!
//! - **[`synthesis`]**: joins the oracle with the address plan to produce the
//!   full routing plane. The public entry point is
//!   [`compute_route_plan`](synthesis::compute_route_plan).
//!
//! - **[`printer`]**: helper functions to format plans with node names
//!   substituted.
//!
//! - **[`example_topologies`]**: prepared topologies used in tests and by the
//!   command line frontend.
//!
//! Unreachable destinations are never an error: a partitioned topology simply
//! yields no route entries between its components. All real errors (malformed
//! topology, rank collisions, inconsistent plans) are fatal and reported
//! before any output is produced.
//!
//! ## Example usage
//!
//! ```rust
//! use routeplan::{compute_address_plan, compute_route_plan, Rank, Topology};
//!
//! fn main() -> Result<(), routeplan::Error> {
//!     let mut topo = Topology::new();
//!     let a = topo.add_node("a", Rank(1))?;
//!     let b = topo.add_node("b", Rank(2))?;
//!     let c = topo.add_node("c", Rank(3))?;
//!     topo.add_edge(a, b)?;
//!     topo.add_edge(b, c)?;
//!
//!     let addrs = compute_address_plan(&topo)?;
//!     let routes = compute_route_plan(&topo, &addrs)?;
//!
//!     // a reaches c through b, using b's address on the a--b block
//!     let to_c = routes
//!         .routes_from(a)
//!         .unwrap()
//!         .iter()
//!         .find(|r| r.destination == c)
//!         .unwrap();
//!     assert_eq!(to_c.next_hop, b);
//!     assert_eq!(to_c.gateway, "10.1.2.2".parse::<std::net::Ipv4Addr>().unwrap());
//!
//!     Ok(())
//! }
//! ```

// test modules
pub mod example_topologies;
mod test;

pub mod addressing;
mod error;
pub mod printer;
pub mod spf;
pub mod synthesis;
pub mod topology;
pub mod types;

pub use addressing::{allocate, compute_address_plan, AddressBlock, AddressPlan};
pub use error::Error;
pub use spf::next_hops;
pub use synthesis::{compute_route_plan, routes_for, RouteEntry, RoutePlan};
pub use topology::{Edge, Node, Topology};
pub use types::{AllocationError, NodeId, Rank, SynthesisError, TopologyError};
