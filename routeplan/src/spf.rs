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

//! # Shortest-Path Oracle
//!
//! Single-source shortest paths over the unweighted, undirected topology via
//! breadth-first search. Only the first hop toward every reachable
//! destination is retained, since installing a static route needs nothing
//! more. When several shortest paths exist, the first hop with the lowest
//! rank wins, so the result is reproducible across runs and iteration orders.

use crate::topology::Topology;
use crate::types::{NodeId, TopologyError};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Compute, for every node reachable from `source`, the first node on a
/// shortest path toward it. Unreachable nodes are simply absent from the
/// result: a partitioned topology is a legitimate input, not an error.
pub fn next_hops(topo: &Topology, source: NodeId) -> Result<BTreeMap<NodeId, NodeId>, TopologyError> {
    // breadth-first search, recording the distance of every reachable node.
    // `order` keeps the discovery order, which is non-decreasing in distance.
    let mut dist: HashMap<NodeId, usize> = HashMap::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    dist.insert(source, 0);
    queue.push_back(source);
    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        for neighbor in topo.neighbors(node)? {
            if !dist.contains_key(&neighbor) {
                dist.insert(neighbor, d + 1);
                order.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    // second pass in order of increasing distance: nodes adjacent to the
    // source are their own first hop; every other node inherits the
    // lowest-rank first hop among its neighbors one step closer to the
    // source.
    let mut first_hop: HashMap<NodeId, NodeId> = HashMap::new();
    let mut result: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    for node in order {
        let d = dist[&node];
        let hop = if d == 1 {
            node
        } else {
            let mut best: Option<NodeId> = None;
            for parent in topo.neighbors(node)? {
                if dist.get(&parent) == Some(&(d - 1)) {
                    // the parent was discovered at a smaller distance, so its
                    // first hop is already known
                    let candidate = first_hop[&parent];
                    best = match best {
                        Some(current) if topo.rank(candidate)? < topo.rank(current)? => {
                            Some(candidate)
                        }
                        Some(current) => Some(current),
                        None => Some(candidate),
                    };
                }
            }
            // every node at distance >= 2 has at least one neighbor at
            // distance d - 1, because it was discovered through one
            best.unwrap()
        };
        first_hop.insert(node, hop);
        result.insert(node, hop);
    }

    Ok(result)
}
