// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use common::BoundingBox;
use scene_config::SeaConfig;
use ultraviolet::DVec3;

/// Number of points [`build`] will produce for this sea configuration.
pub fn point_count(sea: &SeaConfig) -> usize {
    sea.supercell
        .iter()
        .map(|&n| n as usize)
        .product()
}

/// Generates the sea's simple-cubic point lattice.
///
/// Points sit at `(i*a, j*a, k*a)` for `0 <= i < na`, `0 <= j < nb`,
/// `0 <= k < nc`, enumerated row-major over `(i, j, k)` with `k` varying
/// fastest. The enumeration is fully deterministic and independent of the
/// island configuration.
pub fn build(sea: &SeaConfig) -> Vec<DVec3> {
    let a = sea.lattice_constant;
    let [na, nb, nc] = sea.supercell;

    let mut points = Vec::with_capacity(point_count(sea));
    for i in 0..na {
        for j in 0..nb {
            for k in 0..nc {
                points.push(DVec3::new(i as f64 * a, j as f64 * a, k as f64 * a));
            }
        }
    }
    points
}

/// Bounds of the configured simulation cell: `[0, n*a]` on each axis.
///
/// This is a function of the configuration alone, not of any generated or
/// downsampled point set.
pub fn cell_bounds(sea: &SeaConfig) -> BoundingBox {
    let a = sea.lattice_constant;
    let [na, nb, nc] = sea.supercell;
    BoundingBox {
        min: DVec3::zero(),
        max: DVec3::new(na as f64 * a, nb as f64 * a, nc as f64 * a),
    }
}


// End of File
