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

//! Module containing all type definitions

use petgraph::prelude::*;
use petgraph::stable_graph::StableGraph;
use thiserror::Error;

type IndexType = u32;
/// Node Identification (and index into the graph)
pub type NodeId = NodeIndex<IndexType>;

/// Node rank: a small positive integer, unique per node, used only for
/// deterministic tie-breaking in address and gateway selection.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct Rank(pub u8);

/// Undirected topology graph
pub type TopologyGraph = StableGraph<(), (), Undirected, IndexType>;

/// Topology construction errors. All of them are fatal: they are raised while
/// the topology is built, before any address or route computation begins.
#[derive(Error, Debug, PartialEq)]
pub enum TopologyError {
    /// A node with the same name was already added
    #[error("Node {0} does already exist in the topology")]
    DuplicateNode(String),
    /// The referenced node is not part of the topology
    #[error("Node {0:?} was not found in the topology")]
    UnknownNode(NodeId),
    /// The unordered pair of endpoints is already connected
    #[error("Edge between {0:?} and {1:?} does already exist")]
    DuplicateEdge(NodeId, NodeId),
    /// Both endpoints of the edge are the same node
    #[error("Self-loops are not allowed: {0:?}")]
    SelfLoop(NodeId),
    /// Node name is not present in the topology
    #[error("Node name was not found in the topology: {0}")]
    NodeNameNotFound(String),
}

/// Address allocation errors
#[derive(Error, Debug, PartialEq)]
pub enum AllocationError {
    /// Two distinct nodes share the same rank. Allocating anyway would alias
    /// two edges to the same address block, so this aborts the entire plan.
    #[error("Nodes {0:?} and {1:?} share rank {2:?}")]
    RankCollision(NodeId, NodeId, Rank),
}

/// Route synthesis errors. These can only occur when the address plan passed
/// to the synthesizer does not belong to the given topology. An unreachable
/// destination is *not* an error, it is an absent route entry.
#[derive(Error, Debug, PartialEq)]
pub enum SynthesisError {
    /// The address plan holds no block for an edge of the topology
    #[error("Address plan has no block for the edge {0:?} -- {1:?}")]
    MissingAddressBlock(NodeId, NodeId),
    /// The node owns no address in the given address plan
    #[error("Address plan assigns no address to node {0:?}")]
    NoAddressForNode(NodeId),
}
