// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use common::BoundingBox;
use scene_config::{IslandConfig, Side};
use serde::{Serialize, Serializer};
use ultraviolet::DVec3;

/// Tolerance applied to facet constraints so that points sitting exactly on
/// a cutting plane are not dropped by floating-point boundary noise.
pub const BOUNDARY_EPSILON: f64 = 1e-8;

/// Classification of a lattice point: part of the bulk sea, or part of the
/// carved island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Species {
    Matrix = 0,
    Island = 1,
}

/// Atoms serialize their species as the numeric `type` flag (0 = matrix,
/// 1 = island) expected by the rendering front end.
impl Serialize for Species {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Resolves the island center against the cell bounds.
///
/// A configured center of exactly `[0, 0, 0]` means "auto-center": the
/// midpoint of the cell is substituted. The substitution is computed here
/// and never written back to the configuration.
pub fn resolve_center(island: &IslandConfig, bounds: &BoundingBox) -> DVec3 {
    let [x, y, z] = island.center;
    if island.center == [0.0, 0.0, 0.0] {
        bounds.center()
    } else {
        DVec3::new(x, y, z)
    }
}

/// One precomputed half-space constraint: unit normal, signed offset, and
/// which side of the plane satisfies it.
struct HalfSpace {
    normal: DVec3,
    offset: f64,
    side: Side,
}

impl HalfSpace {
    fn satisfied_by(&self, rel: DVec3) -> bool {
        let d = rel.dot(self.normal);
        match self.side {
            Side::Inside => d <= self.offset + BOUNDARY_EPSILON,
            Side::Outside => d >= self.offset - BOUNDARY_EPSILON,
        }
    }
}

/// Labels every point as island or matrix.
///
/// With the island disabled everything is matrix. With facets present, a
/// point is island iff it satisfies *every* non-degenerate facet constraint
/// — the intersection of half-spaces is what keeps the region convex.
/// Degenerate facets (zero Miller vector) impose no constraint. With no
/// facets at all, the island falls back to a sphere of the configured
/// radius.
///
/// Pure function of its inputs; identical inputs reproduce identical labels
/// bit for bit.
pub fn classify(points: &[DVec3], island: &IslandConfig, bounds: &BoundingBox) -> Vec<Species> {
    if !island.enabled {
        return vec![Species::Matrix; points.len()];
    }

    let center = resolve_center(island, bounds);

    if island.facets.is_empty() {
        let radius_sq = island.radius * island.radius;
        return points
            .iter()
            .map(|&p| {
                if (p - center).mag_sq() <= radius_sq {
                    Species::Island
                } else {
                    Species::Matrix
                }
            })
            .collect();
    }

    let half_spaces: Vec<HalfSpace> = island
        .facets
        .iter()
        .filter(|facet| !facet.is_degenerate())
        .map(|facet| {
            let [h, k, l] = facet.miller;
            let normal = DVec3::new(h as f64, k as f64, l as f64);
            HalfSpace {
                normal: normal.normalized(),
                offset: facet.offset,
                side: facet.side,
            }
        })
        .collect();

    points
        .iter()
        .map(|&p| {
            let rel = p - center;
            if half_spaces.iter().all(|hs| hs.satisfied_by(rel)) {
                Species::Island
            } else {
                Species::Matrix
            }
        })
        .collect()
}


// End of File
