// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end generation scenarios over a small 2x2x2 silicon-like cell
//! (lattice constant 5.43 Å), checked against hand-enumerated expectations.

use lattice::{generate, Species};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_config::{IslandConfig, SceneConfig, SeaConfig};

fn small_cell() -> SceneConfig {
    SceneConfig {
        sea: SeaConfig {
            lattice_constant: 5.43,
            supercell: [2, 2, 2],
        },
        island: IslandConfig {
            enabled: false,
            ..IslandConfig::default()
        },
    }
}

#[test]
fn disabled_island_gives_eight_matrix_corners() {
    let mut rng = StdRng::seed_from_u64(0);
    let set = generate(&small_cell(), 30000, &mut rng);

    assert_eq!(set.atoms.len(), 8);
    for atom in &set.atoms {
        assert_eq!(atom.species, Species::Matrix);
        for coordinate in [atom.x, atom.y, atom.z] {
            assert!(coordinate == 0.0 || coordinate == 5.43);
        }
    }
    assert_eq!(set.bounds.x, [0.0, 10.86]);
    assert_eq!(set.bounds.y, [0.0, 10.86]);
    assert_eq!(set.bounds.z, [0.0, 10.86]);
}

#[test]
fn auto_centered_sphere_carves_the_expected_corners() {
    let mut config = small_cell();
    config.island.enabled = true;
    // Zero center auto-resolves to the cell midpoint (5.43, 5.43, 5.43);
    // radius 5.43 then reaches exactly the face-adjacent corners.
    config.island.center = [0.0, 0.0, 0.0];
    config.island.radius = 5.43;

    let mut rng = StdRng::seed_from_u64(0);
    let set = generate(&config, 30000, &mut rng);
    assert_eq!(set.atoms.len(), 8);

    // The corner (5.43, 5.43, 5.43) is the resolved center itself; the
    // three corners with exactly one zero coordinate sit at distance 5.43,
    // right on the sphere boundary. The remaining four corners are at
    // sqrt(2) or sqrt(3) times 5.43 and stay matrix.
    let center = [5.43, 5.43, 5.43];
    let mut island_count = 0;
    for atom in &set.atoms {
        let dist_sq = (atom.x - center[0]).powi(2)
            + (atom.y - center[1]).powi(2)
            + (atom.z - center[2]).powi(2);
        let expected = if dist_sq <= 5.43 * 5.43 {
            Species::Island
        } else {
            Species::Matrix
        };
        assert_eq!(atom.species, expected, "corner ({}, {}, {})", atom.x, atom.y, atom.z);
        if atom.species == Species::Island {
            island_count += 1;
        }
    }
    assert_eq!(island_count, 4);

    // Growing the radius past the far-corner distance flips all eight.
    config.island.radius = 9.5;
    let set = generate(&config, 30000, &mut StdRng::seed_from_u64(0));
    assert!(set.atoms.iter().all(|a| a.species == Species::Island));
}

#[test]
fn downsampling_caps_the_atom_count_but_not_the_box() {
    let config = SceneConfig {
        sea: SeaConfig {
            lattice_constant: 5.43,
            supercell: [10, 10, 10],
        },
        island: IslandConfig::default(),
    };

    for seed in [0, 1, 2] {
        let mut rng = StdRng::seed_from_u64(seed);
        let set = generate(&config, 123, &mut rng);
        assert_eq!(set.atoms.len(), 123);
        assert_eq!(set.bounds.x, [0.0, 54.3]);
    }

    // A cap larger than the lattice leaves the set complete.
    let mut rng = StdRng::seed_from_u64(0);
    let set = generate(&config, 30000, &mut rng);
    assert_eq!(set.atoms.len(), 1000);
}

#[test]
fn max_count_zero_yields_an_empty_atom_list() {
    let mut rng = StdRng::seed_from_u64(0);
    let set = generate(&small_cell(), 0, &mut rng);
    assert!(set.atoms.is_empty());
    assert_eq!(set.bounds.x, [0.0, 10.86]);
}

// End of File
