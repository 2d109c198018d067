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

//! Module containing all error types

use crate::types::{AllocationError, SynthesisError, TopologyError};
use thiserror::Error;

/// Main error type
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Error while constructing or querying the topology
    #[error("Topology Error: {0}")]
    TopologyError(#[from] TopologyError),
    /// Error while allocating address blocks
    #[error("Allocation Error: {0}")]
    AllocationError(#[from] AllocationError),
    /// Error while synthesizing routes
    #[error("Synthesis Error: {0}")]
    SynthesisError(#[from] SynthesisError),
}
