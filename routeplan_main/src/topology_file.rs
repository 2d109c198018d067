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

//! Topology selection for the command line: either a JSON file describing
//! nodes and edges, or one of the prepared example topologies.

use routeplan::example_topologies::{DenseMesh, ExampleTopology, SmallMesh};
use routeplan::{Rank, Topology};

use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Where the topology comes from: exactly one of `--file` or `--example`
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TopologySelection {
    /// Load the topology from a JSON file
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Use one of the prepared example topologies
    #[arg(short, long, value_enum)]
    example: Option<ExampleSelection>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ExampleSelection {
    /// Six nodes, nine edges, no direct u-z link
    SmallMesh,
    /// Six nodes, ten edges, including the direct u-w link
    DenseMesh,
}

impl TopologySelection {
    /// Build the selected topology
    pub fn topology(&self) -> Result<Topology, Box<dyn Error>> {
        match (&self.file, self.example) {
            (Some(path), _) => {
                let content = fs::read_to_string(path)?;
                let file: TopologyFile = serde_json::from_str(&content)?;
                Ok(file.into_topology()?)
            }
            (None, Some(ExampleSelection::SmallMesh)) => Ok(SmallMesh::topo()),
            (None, Some(ExampleSelection::DenseMesh)) => Ok(DenseMesh::topo()),
            // clap enforces that exactly one option is given
            (None, None) => unreachable!(),
        }
    }
}

/// JSON representation of a topology: a node list with ranks, and an edge
/// list referring to the nodes by name.
#[derive(Deserialize, Debug)]
pub struct TopologyFile {
    nodes: Vec<NodeSpec>,
    edges: Vec<(String, String)>,
}

#[derive(Deserialize, Debug)]
struct NodeSpec {
    name: String,
    rank: u8,
}

impl TopologyFile {
    /// Build the topology, checking all names and edges
    pub fn into_topology(self) -> Result<Topology, routeplan::Error> {
        let mut topo = Topology::new();
        for node in self.nodes {
            topo.add_node(node.name, Rank(node.rank))?;
        }
        for (a, b) in self.edges {
            let a = topo.get_node_id(&a)?;
            let b = topo.get_node_id(&b)?;
            topo.add_edge(a, b)?;
        }
        Ok(topo)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routeplan::TopologyError;

    const TRIANGLE: &str = r#"{
        "nodes": [
            {"name": "r1", "rank": 1},
            {"name": "r2", "rank": 2},
            {"name": "r3", "rank": 3}
        ],
        "edges": [["r1", "r2"], ["r2", "r3"], ["r3", "r1"]]
    }"#;

    #[test]
    fn test_parse_triangle() {
        let file: TopologyFile = serde_json::from_str(TRIANGLE).unwrap();
        let topo = file.into_topology().unwrap();
        assert_eq!(topo.num_nodes(), 3);
        assert_eq!(topo.num_edges(), 3);
        let r1 = topo.get_node_id("r1").unwrap();
        assert_eq!(topo.rank(r1), Ok(Rank(1)));
    }

    #[test]
    fn test_unknown_edge_endpoint() {
        let json = r#"{
            "nodes": [{"name": "r1", "rank": 1}],
            "edges": [["r1", "ghost"]]
        }"#;
        let file: TopologyFile = serde_json::from_str(json).unwrap();
        assert_eq!(
            file.into_topology().unwrap_err(),
            routeplan::Error::TopologyError(TopologyError::NodeNameNotFound(
                "ghost".to_string()
            ))
        );
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let json = r#"{
            "nodes": [{"name": "r1", "rank": 1}, {"name": "r1", "rank": 2}],
            "edges": []
        }"#;
        let file: TopologyFile = serde_json::from_str(json).unwrap();
        assert_eq!(
            file.into_topology().unwrap_err(),
            routeplan::Error::TopologyError(TopologyError::DuplicateNode(
                "r1".to_string()
            ))
        );
    }
}
