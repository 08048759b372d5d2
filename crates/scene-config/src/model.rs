// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::document::{FacetDoc, IslandDoc, SceneDoc, SeaDoc};
use crate::error::ConfigError;

pub const DEFAULT_LATTICE_CONSTANT: f64 = 5.43;
pub const DEFAULT_SUPERCELL: [u32; 3] = [6, 6, 6];
pub const DEFAULT_ISLAND_RADIUS: f64 = 8.0;
pub const DEFAULT_MILLER: [i32; 3] = [1, 1, 1];

/// Configuration for the host crystal (the "sea").
#[derive(Debug, Clone, PartialEq)]
pub struct SeaConfig {
    /// Simple-cubic lattice constant in Ångström. Always positive.
    pub lattice_constant: f64,
    /// Repetition counts of the unit cell along each axis. Each >= 1.
    pub supercell: [u32; 3],
}

impl Default for SeaConfig {
    fn default() -> Self {
        Self {
            lattice_constant: DEFAULT_LATTICE_CONSTANT,
            supercell: DEFAULT_SUPERCELL,
        }
    }
}

/// Frame in which a facet's Miller indices are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Sea,
    Island,
}

impl Frame {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "sea" => Some(Frame::Sea),
            "island" => Some(Frame::Island),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::Sea => "sea",
            Frame::Island => "island",
        }
    }
}

/// Which side of a facet plane counts as the island interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Points with signed distance `<= offset` satisfy the facet.
    Inside,
    /// Points with signed distance `>= offset` satisfy the facet.
    Outside,
}

impl Side {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "inside" => Some(Side::Inside),
            "outside" => Some(Side::Outside),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Inside => "inside",
            Side::Outside => "outside",
        }
    }
}

/// A single plane facet used to bound the island, given by a Miller
/// direction and a signed offset from the island center along the facet
/// normal (Å).
#[derive(Debug, Clone, PartialEq)]
pub struct FacetConfig {
    pub frame: Frame,
    /// Miller indices `[h, k, l]`. The zero vector is a degenerate facet:
    /// it is kept in the model but imposes no geometric constraint.
    pub miller: [i32; 3],
    /// A facet with no explicit offset in the document inherits the
    /// island's radius, so an offset-less facet cuts tangent to the
    /// fallback sphere.
    pub offset: f64,
    pub side: Side,
}

impl FacetConfig {
    /// A zero Miller vector has no defined normal direction.
    pub fn is_degenerate(&self) -> bool {
        self.miller == [0, 0, 0]
    }
}

/// Configuration for the embedded island.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandConfig {
    pub enabled: bool,
    /// Island center in sea-frame coordinates (Å). `[0, 0, 0]` is a
    /// sentinel meaning "auto-center on the cell midpoint"; it is resolved
    /// at generation time and never written back to the document.
    pub center: [f64; 3],
    /// Fallback sphere radius (Å), and the default offset for facets that
    /// specify none. Never negative.
    pub radius: f64,
    pub facets: Vec<FacetConfig>,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            center: [0.0, 0.0, 0.0],
            radius: DEFAULT_ISLAND_RADIUS,
            facets: Vec::new(),
        }
    }
}

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneConfig {
    pub sea: SeaConfig,
    pub island: IslandConfig,
}

/// A record of one field that was silently normalized while converting a
/// document into a [`SceneConfig`]. Kept separate from the config itself so
/// callers can decide whether to log, surface, or ignore the substitutions.
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    /// Dotted path of the offending field, e.g. `island.facets[2].side`.
    pub field: String,
    /// The value found in the document.
    pub given: String,
    /// The default that was used instead.
    pub substituted: &'static str,
}

impl SceneConfig {
    /// Converts a raw document into a canonical configuration.
    ///
    /// Missing fields are filled with their documented defaults.
    /// Unrecognized `side`/`frame` strings are coerced to `inside`/`sea`
    /// and reported in the returned [`Coercion`] list. Values that parsed
    /// but are outside their legal range fail with
    /// [`ConfigError::OutOfRange`].
    pub fn from_doc(doc: SceneDoc) -> Result<(Self, Vec<Coercion>), ConfigError> {
        let mut coercions = Vec::new();

        let sea_doc = doc.sea.unwrap_or_default();
        let lattice_constant = sea_doc
            .lattice_constant
            .unwrap_or(DEFAULT_LATTICE_CONSTANT);
        if !lattice_constant.is_finite() || lattice_constant <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "sea.lattice_constant",
                value: lattice_constant.to_string(),
            });
        }

        let mut supercell = [0u32; 3];
        match sea_doc.supercell {
            None => supercell = DEFAULT_SUPERCELL,
            Some(dims) => {
                for (axis, &dim) in dims.iter().enumerate() {
                    supercell[axis] = u32::try_from(dim)
                        .ok()
                        .filter(|&d| d >= 1)
                        .ok_or_else(|| ConfigError::OutOfRange {
                            field: "sea.supercell",
                            value: format!("{:?}", dims),
                        })?;
                }
            }
        }

        let isl_doc = doc.island.unwrap_or_default();
        let radius = isl_doc.radius.unwrap_or(DEFAULT_ISLAND_RADIUS);
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "island.radius",
                value: radius.to_string(),
            });
        }

        let facets = isl_doc
            .facets
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, facet)| {
                Self::facet_from_doc(facet, index, radius, &mut coercions)
            })
            .collect();

        let island = IslandConfig {
            enabled: isl_doc.enabled.unwrap_or(true),
            center: isl_doc.center.unwrap_or([0.0, 0.0, 0.0]),
            radius,
            facets,
        };

        let config = SceneConfig {
            sea: SeaConfig {
                lattice_constant,
                supercell,
            },
            island,
        };
        Ok((config, coercions))
    }

    fn facet_from_doc(
        facet: FacetDoc,
        index: usize,
        island_radius: f64,
        coercions: &mut Vec<Coercion>,
    ) -> FacetConfig {
        let frame = match facet.frame {
            None => Frame::Sea,
            Some(s) => Frame::parse(&s).unwrap_or_else(|| {
                coercions.push(Coercion {
                    field: format!("island.facets[{}].frame", index),
                    given: s,
                    substituted: Frame::Sea.as_str(),
                });
                Frame::Sea
            }),
        };
        let side = match facet.side {
            None => Side::Inside,
            Some(s) => Side::parse(&s).unwrap_or_else(|| {
                coercions.push(Coercion {
                    field: format!("island.facets[{}].side", index),
                    given: s,
                    substituted: Side::Inside.as_str(),
                });
                Side::Inside
            }),
        };
        FacetConfig {
            frame,
            miller: facet.miller.unwrap_or(DEFAULT_MILLER),
            // The island radius is resolved before any facet, so an
            // omitted offset inherits it.
            offset: facet.offset.unwrap_or(island_radius),
            side,
        }
    }

    /// Converts the canonical configuration back into a full document.
    /// Total and lossless: every field is written out, so a later load
    /// applies no defaults.
    pub fn to_doc(&self) -> SceneDoc {
        SceneDoc {
            sea: Some(SeaDoc {
                lattice_constant: Some(self.sea.lattice_constant),
                supercell: Some(self.sea.supercell.map(i64::from)),
            }),
            island: Some(IslandDoc {
                enabled: Some(self.island.enabled),
                center: Some(self.island.center),
                radius: Some(self.island.radius),
                facets: Some(
                    self.island
                        .facets
                        .iter()
                        .map(|f| FacetDoc {
                            frame: Some(f.frame.as_str().to_owned()),
                            miller: Some(f.miller),
                            offset: Some(f.offset),
                            side: Some(f.side.as_str().to_owned()),
                        })
                        .collect(),
                ),
            }),
        }
    }
}
