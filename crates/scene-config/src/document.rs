// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Raw serde mirror of the persisted YAML document.
//!
//! Every field is optional so that a partially-written or hand-edited
//! document still deserializes; defaulting and validation happen in one
//! explicit step, [`SceneConfig::from_doc`](crate::SceneConfig::from_doc),
//! rather than being scattered across construction sites.

use serde::{Deserialize, Serialize};

/// Top-level persisted document. Field order matches the on-disk layout:
/// the `sea` section is written before the `island` section.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SceneDoc {
    pub sea: Option<SeaDoc>,
    pub island: Option<IslandDoc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SeaDoc {
    pub lattice_constant: Option<f64>,
    /// Parsed as signed integers so that a negative dimension is caught by
    /// range validation instead of failing deserialization with an opaque
    /// type error.
    pub supercell: Option<[i64; 3]>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IslandDoc {
    pub enabled: Option<bool>,
    pub center: Option<[f64; 3]>,
    pub radius: Option<f64>,
    pub facets: Option<Vec<FacetDoc>>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FacetDoc {
    pub frame: Option<String>,
    pub miller: Option<[i32; 3]>,
    pub offset: Option<f64>,
    pub side: Option<String>,
}

// End of File
