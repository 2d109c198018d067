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

//! # Address Allocator
//!
//! Deterministic assignment of a /30 point-to-point block to every edge. The
//! block is a pure function of the two endpoint ranks: with
//! `(low, high) = sort(rank_a, rank_b)`, the edge receives `10.low.high.0/30`,
//! the lower-rank endpoint owns `10.low.high.1` and the higher-rank endpoint
//! owns `10.low.high.2`. Composing one rank per octet guarantees that two
//! distinct edges can never receive overlapping blocks, as long as ranks are
//! unique across the topology. A rank collision therefore aborts allocation
//! before any block is emitted.

use crate::topology::{Edge, Topology};
use crate::types::{AllocationError, NodeId, Rank};
use crate::Error;
use ipnet::Ipv4Net;
use std::collections::{BTreeMap, HashMap};
use std::net::Ipv4Addr;

/// Prefix length of every point-to-point block: exactly two usable addresses.
const BLOCK_PREFIX_LEN: u8 = 30;

/// The address block of a single edge: the /30 network and the address
/// assigned to each of the two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressBlock {
    network: Ipv4Net,
    low: (NodeId, Ipv4Addr),
    high: (NodeId, Ipv4Addr),
}

impl AddressBlock {
    /// Return the /30 network covering both endpoint addresses
    pub fn network(&self) -> Ipv4Net {
        self.network
    }

    /// Return the address assigned to `node`, or `None` if `node` is not an
    /// endpoint of this block's edge.
    pub fn addr_of(&self, node: NodeId) -> Option<Ipv4Addr> {
        if self.low.0 == node {
            Some(self.low.1)
        } else if self.high.0 == node {
            Some(self.high.1)
        } else {
            None
        }
    }

    /// Return both (node, address) assignments, lower-rank endpoint first
    pub fn assignments(&self) -> [(NodeId, Ipv4Addr); 2] {
        [self.low, self.high]
    }
}

/// Allocate the address block for a single edge. Pure function of the two
/// endpoint ranks: calling it with `{a, b}` or `{b, a}`, in any allocation
/// order, always yields the same block and the same address-to-node
/// assignment. Fails with [`AllocationError::RankCollision`] if both
/// endpoints share a rank.
pub fn allocate(topo: &Topology, edge: Edge) -> Result<AddressBlock, Error> {
    let (a, b) = edge.endpoints();
    let rank_a = topo.rank(a)?;
    let rank_b = topo.rank(b)?;
    if rank_a == rank_b {
        return Err(AllocationError::RankCollision(a, b, rank_a).into());
    }
    let ((low_node, low_rank), (high_node, high_rank)) = if rank_a < rank_b {
        ((a, rank_a), (b, rank_b))
    } else {
        ((b, rank_b), (a, rank_a))
    };
    // prefix length 30 is always valid
    let network = Ipv4Net::new(Ipv4Addr::new(10, low_rank.0, high_rank.0, 0), BLOCK_PREFIX_LEN).unwrap();
    Ok(AddressBlock {
        network,
        low: (low_node, Ipv4Addr::new(10, low_rank.0, high_rank.0, 1)),
        high: (high_node, Ipv4Addr::new(10, low_rank.0, high_rank.0, 2)),
    })
}

/// # Address Plan
///
/// The ordered mapping from every edge of a topology to its address block,
/// produced once by [`compute_address_plan`] and passed as an explicit input
/// to the route synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressPlan {
    blocks: BTreeMap<Edge, AddressBlock>,
}

impl AddressPlan {
    /// Get the block of an edge
    pub fn get(&self, edge: &Edge) -> Option<&AddressBlock> {
        self.blocks.get(edge)
    }

    /// Get the block of the edge between two nodes (in any order)
    pub fn block_between(&self, a: NodeId, b: NodeId) -> Option<&AddressBlock> {
        self.blocks.get(&Edge::new(a, b))
    }

    /// Iterate over all (edge, block) pairs in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&Edge, &AddressBlock)> {
        self.blocks.iter()
    }

    /// Number of allocated blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block was allocated
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Return the deterministic representative address of a node: its own
    /// address on the edge toward its lowest-rank neighbor. Returns
    /// `Ok(None)` for isolated nodes (which own no address at all) and when
    /// the plan holds no block for that edge.
    pub fn node_addr(&self, topo: &Topology, node: NodeId) -> Result<Option<Ipv4Addr>, Error> {
        match topo.neighbors(node)?.first() {
            Some(&neighbor) => Ok(self
                .block_between(node, neighbor)
                .and_then(|block| block.addr_of(node))),
            None => Ok(None),
        }
    }
}

/// Compute the complete address plan of a topology: one block per edge. The
/// result is deterministic (independent of edge insertion order) and
/// idempotent: computing it twice always yields identical plans. Before any
/// block is emitted, all node ranks are checked for global uniqueness; a
/// collision is fatal.
pub fn compute_address_plan(topo: &Topology) -> Result<AddressPlan, Error> {
    let mut seen: HashMap<Rank, NodeId> = HashMap::new();
    for node in topo.nodes() {
        let rank = topo.rank(node)?;
        if let Some(&other) = seen.get(&rank) {
            return Err(AllocationError::RankCollision(other, node, rank).into());
        }
        seen.insert(rank, node);
    }

    let mut blocks = BTreeMap::new();
    for edge in topo.edges() {
        blocks.insert(*edge, allocate(topo, *edge)?);
    }
    Ok(AddressPlan { blocks })
}
