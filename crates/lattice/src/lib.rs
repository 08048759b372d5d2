// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The geometry engine: lattice construction, island region classification,
//! and point-cloud downsampling, composed by [`generate`].
//!
//! Everything here is a pure function over immutable configuration
//! snapshots. The only non-determinism is the sampler's caller-supplied
//! random source.

pub mod builder;
pub mod generate;
pub mod region;
pub mod sample;

pub use generate::{generate, Atom, AtomSet, CellBox, DEFAULT_MAX_ATOMS};
pub use region::{Species, BOUNDARY_EPSILON};

// End of File
