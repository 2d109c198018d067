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

//! # Topology module
//!
//! This module represents the point-to-point topology: named, ranked nodes and
//! the undirected edges between them. The topology is built once from a
//! declarative edge list and is read-only afterwards; there is no removal and
//! no edge mutation, reflecting the single-shot experiment model this library
//! serves.

use crate::types::{NodeId, Rank, TopologyError, TopologyGraph};
use std::collections::HashMap;

/// A node of the topology: an addressable participant (router/host
/// abstraction) with a globally unique name and a unique rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    rank: Rank,
}

impl Node {
    /// Return the name of the node
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Return the rank of the node
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// An unordered pair of distinct nodes. The constructor normalizes the
/// endpoint order, so `Edge::new(a, b) == Edge::new(b, a)` and edges can be
/// used directly as deterministic map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(NodeId, NodeId);

impl Edge {
    /// Create a new edge between two nodes. The order of the arguments does
    /// not matter.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }

    /// Return both endpoints (in normalized order)
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }

    /// Returns true if and only if `node` is one of the two endpoints
    pub fn contains(&self, node: NodeId) -> bool {
        self.0 == node || self.1 == node
    }

    /// Return the endpoint opposite of `node`, or `None` if `node` is not an
    /// endpoint of this edge.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.0 == node {
            Some(self.1)
        } else if self.1 == node {
            Some(self.0)
        } else {
            None
        }
    }
}

/// # Topology struct
///
/// The struct contains the undirected graph of all nodes and edges, along
/// with the name and rank of every node. After construction it only supports
/// read operations.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    graph: TopologyGraph,
    nodes: HashMap<NodeId, Node>,
    names: HashMap<String, NodeId>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Generate an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new node to the topology. This function returns the ID of the
    /// node, which is used to reference it when adding edges.
    pub fn add_node<S: Into<String>>(&mut self, name: S, rank: Rank) -> Result<NodeId, TopologyError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(TopologyError::DuplicateNode(name));
        }
        let id = self.graph.add_node(());
        self.names.insert(name.clone(), id);
        self.nodes.insert(id, Node { name, rank });
        Ok(id)
    }

    /// Add a point-to-point edge between two existing, distinct nodes. At
    /// most one edge may exist between the same unordered pair.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<Edge, TopologyError> {
        if !self.nodes.contains_key(&a) {
            return Err(TopologyError::UnknownNode(a));
        }
        if !self.nodes.contains_key(&b) {
            return Err(TopologyError::UnknownNode(b));
        }
        if a == b {
            return Err(TopologyError::SelfLoop(a));
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(TopologyError::DuplicateEdge(a, b));
        }
        let edge = Edge::new(a, b);
        self.graph.add_edge(a, b, ());
        self.edges.push(edge);
        Ok(edge)
    }

    /// Return all nodes adjacent to the given one, sorted by rank. The result
    /// is empty for isolated nodes, which are legal but unreachable.
    pub fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, TopologyError> {
        if !self.nodes.contains_key(&node) {
            return Err(TopologyError::UnknownNode(node));
        }
        let mut neighbors: Vec<NodeId> = self.graph.neighbors(node).collect();
        neighbors.sort_by_key(|n| self.nodes[n].rank);
        Ok(neighbors)
    }

    /// Get the node behind an ID
    pub fn get_node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(&node)
    }

    /// Return the rank of a node
    pub fn rank(&self, node: NodeId) -> Result<Rank, TopologyError> {
        self.nodes
            .get(&node)
            .map(|n| n.rank)
            .ok_or(TopologyError::UnknownNode(node))
    }

    /// Return the name of a node
    pub fn get_node_name(&self, node: NodeId) -> Result<&str, TopologyError> {
        self.nodes
            .get(&node)
            .map(|n| n.name.as_ref())
            .ok_or(TopologyError::UnknownNode(node))
    }

    /// Return the ID of the node with the given name
    pub fn get_node_id(&self, name: &str) -> Result<NodeId, TopologyError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| TopologyError::NodeNameNotFound(name.to_string()))
    }

    /// Return all node IDs, sorted by index
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.nodes.keys().copied().collect();
        nodes.sort();
        nodes
    }

    /// Return all edges, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the edge between the two nodes, if it exists
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<Edge> {
        self.graph.find_edge(a, b).map(|_| Edge::new(a, b))
    }

    /// Number of nodes in the topology
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the topology
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
