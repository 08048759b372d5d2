// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::region::Species;
use crate::{builder, region, sample};

use common::BoundingBox;
use log::debug;
use rand::Rng;
use scene_config::SceneConfig;
use serde::Serialize;

/// Default cap on the number of atoms returned to a renderer.
pub const DEFAULT_MAX_ATOMS: usize = 30000;

/// One atom of the generated scene. `type` is 0 for matrix, 1 for island.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Atom {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(rename = "type")]
    pub species: Species,
}

/// Simulation cell bounds in the `{x: [lo, hi], ...}` shape consumed by the
/// rendering front end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellBox {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

impl From<BoundingBox> for CellBox {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            x: [bounds.min.x, bounds.max.x],
            y: [bounds.min.y, bounds.max.y],
            z: [bounds.min.z, bounds.max.z],
        }
    }
}

/// The externally visible generation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomSet {
    pub atoms: Vec<Atom>,
    #[serde(rename = "box")]
    pub bounds: CellBox,
}

/// Builds the lattice, classifies it against the island, and downsamples
/// the result to at most `max_count` atoms.
///
/// The returned bounds always reflect the *configured* cell dimensions —
/// they are independent of both classification and downsampling, so a
/// carved or heavily downsampled scene still frames the full cell.
pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, max_count: usize, rng: &mut R) -> AtomSet {
    let points = builder::build(&config.sea);
    let bounds = builder::cell_bounds(&config.sea);
    let labels = region::classify(&points, &config.island, &bounds);

    let island_count = labels.iter().filter(|&&s| s == Species::Island).count();
    debug!(
        "generated {} lattice points ({} island), sampling to at most {}",
        points.len(),
        island_count,
        max_count
    );

    let sites: Vec<(ultraviolet::DVec3, Species)> =
        points.into_iter().zip(labels).collect();
    let sites = sample::sample(&sites, max_count, rng);

    AtomSet {
        atoms: sites
            .iter()
            .map(|&(p, species)| Atom {
                x: p.x,
                y: p.y,
                z: p.z,
                species,
            })
            .collect(),
        bounds: bounds.into(),
    }
}


// End of File
