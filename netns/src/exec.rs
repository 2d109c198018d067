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

//! # Command Executors

use crate::Result;

use log::*;
use std::process::Command;

/// Output of one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status of the command
    pub status: i32,
    /// Combined stdout and stderr
    pub output: String,
}

impl CommandOutput {
    /// Returns true if the command exited with status zero
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Abstraction over where commands run. The driver only ever talks to this
/// trait, so tests can record commands instead of executing them.
pub trait NodeExecutor {
    /// Run a shell command inside the namespace of `node` and return its
    /// output. An error is only returned if the command could not be run at
    /// all; a non-zero exit status is reported in the output.
    fn execute(&mut self, node: &str, command: &str) -> Result<CommandOutput>;
}

/// # Namespace Executor
///
/// Runs commands inside per-node network namespaces via
/// `ip netns exec <node> sh -c <command>`. Requires the namespaces to exist
/// and the process to have the privileges to enter them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NetnsExecutor {}

impl NodeExecutor for NetnsExecutor {
    fn execute(&mut self, node: &str, command: &str) -> Result<CommandOutput> {
        trace!("[{}] {}", node, command);
        let result = Command::new("ip")
            .args(&["netns", "exec", node, "sh", "-c", command])
            .output()?;
        let mut output = String::from_utf8_lossy(&result.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&result.stderr));
        // a terminating signal is reported as status -1
        let status = result.status.code().unwrap_or(-1);
        Ok(CommandOutput { status, output })
    }
}

/// # Recording Executor
///
/// Records every command instead of executing it, always reporting success.
/// Used by the test suite to assert on the exact command sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingExecutor {
    commands: Vec<(String, String)>,
}

impl RecordingExecutor {
    /// Return all recorded (node, command) pairs in execution order
    pub fn commands(&self) -> &[(String, String)] {
        &self.commands
    }
}

impl NodeExecutor for RecordingExecutor {
    fn execute(&mut self, node: &str, command: &str) -> Result<CommandOutput> {
        self.commands.push((node.to_string(), command.to_string()));
        Ok(CommandOutput { status: 0, output: String::new() })
    }
}
