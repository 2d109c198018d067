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

//! # Command Rendering
//!
//! Translates the address and route plans into the exact `ip` and `sysctl`
//! command sequences, without executing anything. Rendering is deterministic:
//! the same plans always produce the same command list in the same order.

use crate::{Error, Result};

use routeplan::{AddressPlan, Edge, NodeId, RoutePlan, Topology};
use std::collections::HashMap;
use std::fmt;

/// One shell command, addressed to the namespace of one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCommand {
    /// Name of the node (and its namespace) the command runs on
    pub node: String,
    /// The shell command to run
    pub command: String,
}

impl fmt::Display for ConfigCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.node, self.command)
    }
}

/// # Interface Map
///
/// Deterministic interface naming: the `i`-th edge of a node (counting its
/// incident edges in topology insertion order) is carried by the interface
/// `<node>-eth<i>` inside that node's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceMap {
    interfaces: HashMap<(NodeId, Edge), String>,
}

impl InterfaceMap {
    /// Build the interface map of a topology
    pub fn from_topology(topo: &Topology) -> Result<Self> {
        let mut counters: HashMap<NodeId, usize> = HashMap::new();
        let mut interfaces = HashMap::new();
        for edge in topo.edges() {
            let (a, b) = edge.endpoints();
            for &node in &[a, b] {
                let index = counters.entry(node).or_insert(0);
                let name = format!("{}-eth{}", topo.get_node_name(node)?, index);
                interfaces.insert((node, *edge), name);
                *index += 1;
            }
        }
        Ok(Self { interfaces })
    }

    /// Return the interface of `node` on `edge`, or an error if `node` is not
    /// an endpoint of that edge.
    pub fn interface(&self, topo: &Topology, node: NodeId, edge: Edge) -> Result<&str> {
        match self.interfaces.get(&(node, edge)) {
            Some(name) => Ok(name.as_str()),
            None => {
                let peer = edge.other(node).unwrap_or_else(|| edge.endpoints().1);
                Err(Error::MissingInterface {
                    node: topo.get_node_name(node)?.to_string(),
                    peer: topo.get_node_name(peer)?.to_string(),
                })
            }
        }
    }
}

/// Render the address assignment commands: for every edge (in deterministic
/// plan order) and both of its endpoints (lower rank first), add the /30
/// address to the edge interface and bring the interface up.
pub fn address_commands(
    topo: &Topology,
    plan: &AddressPlan,
    interfaces: &InterfaceMap,
) -> Result<Vec<ConfigCommand>> {
    let mut commands = Vec::new();
    for (edge, block) in plan.iter() {
        for &(node, addr) in block.assignments().iter() {
            let name = topo.get_node_name(node)?.to_string();
            let intf = interfaces.interface(topo, node, *edge)?;
            commands.push(ConfigCommand {
                node: name.clone(),
                command: format!("ip addr add {}/{} dev {}", addr, block.network().prefix_len(), intf),
            });
            commands.push(ConfigCommand {
                node: name,
                command: format!("ip link set {} up", intf),
            });
        }
    }
    Ok(commands)
}

/// Render the forwarding commands: enable IPv4 forwarding on every node so
/// transit traffic is passed along.
pub fn forwarding_commands(topo: &Topology) -> Result<Vec<ConfigCommand>> {
    let mut commands = Vec::new();
    for node in topo.nodes() {
        commands.push(ConfigCommand {
            node: topo.get_node_name(node)?.to_string(),
            command: String::from("sysctl -w net.ipv4.ip_forward=1"),
        });
    }
    Ok(commands)
}

/// Render the static route commands: one host route per route entry, pointing
/// the destination's representative address at the gateway.
pub fn route_commands(topo: &Topology, routes: &RoutePlan) -> Result<Vec<ConfigCommand>> {
    let mut commands = Vec::new();
    for (&source, entries) in routes.iter() {
        let name = topo.get_node_name(source)?.to_string();
        for entry in entries {
            commands.push(ConfigCommand {
                node: name.clone(),
                command: format!("ip route add {}/32 via {}", entry.destination_addr, entry.gateway),
            });
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod test {
    use super::*;
    use routeplan::example_topologies::chain;
    use routeplan::{compute_address_plan, compute_route_plan};

    #[test]
    fn test_interface_names() {
        let topo = chain(3);
        let n1: NodeId = 0.into();
        let n2: NodeId = 1.into();
        let n3: NodeId = 2.into();
        let interfaces = InterfaceMap::from_topology(&topo).unwrap();

        let first = Edge::new(n1, n2);
        let second = Edge::new(n2, n3);
        assert_eq!(interfaces.interface(&topo, n1, first).unwrap(), "n1-eth0");
        assert_eq!(interfaces.interface(&topo, n2, first).unwrap(), "n2-eth0");
        assert_eq!(interfaces.interface(&topo, n2, second).unwrap(), "n2-eth1");
        assert_eq!(interfaces.interface(&topo, n3, second).unwrap(), "n3-eth0");
    }

    #[test]
    fn test_missing_interface() {
        let topo = chain(3);
        let n1: NodeId = 0.into();
        let n3: NodeId = 2.into();
        let interfaces = InterfaceMap::from_topology(&topo).unwrap();

        // n1 and n3 share no edge
        let result = interfaces.interface(&topo, n1, Edge::new(n1, n3));
        assert!(matches!(
            result,
            Err(Error::MissingInterface { ref node, ref peer }) if node == "n1" && peer == "n3"
        ));
    }

    #[test]
    fn test_address_commands() {
        let topo = chain(2);
        let plan = compute_address_plan(&topo).unwrap();
        let interfaces = InterfaceMap::from_topology(&topo).unwrap();

        let commands = address_commands(&topo, &plan, &interfaces).unwrap();
        assert_eq!(
            commands,
            vec![
                ConfigCommand {
                    node: "n1".to_string(),
                    command: "ip addr add 10.1.2.1/30 dev n1-eth0".to_string(),
                },
                ConfigCommand {
                    node: "n1".to_string(),
                    command: "ip link set n1-eth0 up".to_string(),
                },
                ConfigCommand {
                    node: "n2".to_string(),
                    command: "ip addr add 10.1.2.2/30 dev n2-eth0".to_string(),
                },
                ConfigCommand {
                    node: "n2".to_string(),
                    command: "ip link set n2-eth0 up".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_forwarding_commands() {
        let topo = chain(2);
        let commands = forwarding_commands(&topo).unwrap();
        assert_eq!(commands.len(), 2);
        assert!(commands
            .iter()
            .all(|c| c.command == "sysctl -w net.ipv4.ip_forward=1"));
    }

    #[test]
    fn test_route_commands() {
        let topo = chain(3);
        let plan = compute_address_plan(&topo).unwrap();
        let routes = compute_route_plan(&topo, &plan).unwrap();

        let commands = route_commands(&topo, &routes).unwrap();
        // n1 routes to n2 (10.1.2.2) and n3 (10.2.3.2, via 10.1.2.2)
        assert!(commands.contains(&ConfigCommand {
            node: "n1".to_string(),
            command: "ip route add 10.2.3.2/32 via 10.1.2.2".to_string(),
        }));
        // 2 routes per node
        assert_eq!(commands.len(), 6);
    }
}
