// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Scene configuration model and persistence.
//!
//! The canonical types ([`SceneConfig`] and friends) are always in normal
//! form: enums are valid, lists are present, ranges are checked. A raw
//! document ([`SceneDoc`]) only becomes a [`SceneConfig`] through
//! [`SceneConfig::from_doc`], which applies defaults and reports every
//! silent substitution as a [`Coercion`]. [`ConfigStore`] handles the
//! whole-document read/write cycle against the YAML file on disk.

mod document;
mod error;
mod model;
mod store;

pub use document::{FacetDoc, IslandDoc, SceneDoc, SeaDoc};
pub use error::ConfigError;
pub use model::{
    Coercion, FacetConfig, Frame, IslandConfig, SceneConfig, SeaConfig, Side,
    DEFAULT_ISLAND_RADIUS, DEFAULT_LATTICE_CONSTANT, DEFAULT_MILLER, DEFAULT_SUPERCELL,
};
pub use store::{ConfigStore, CONFIG_FILE_NAME};

// End of File
