// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors that can occur while loading, validating, or persisting a scene
/// configuration.
///
/// Unrecognized enum strings and missing fields are *not* errors: they are
/// normalized to documented defaults and reported as [`Coercion`] records
/// (see [`SceneConfig::from_doc`]). Only unreadable, unparsable, or
/// out-of-range documents are rejected.
///
/// [`Coercion`]: crate::Coercion
/// [`SceneConfig::from_doc`]: crate::SceneConfig::from_doc
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access the configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document is not a well-formed configuration mapping.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A field parsed correctly but its value is outside the legal range
    /// (non-positive lattice constant, supercell dimension < 1, or negative
    /// island radius).
    #[error("configuration value out of range: {field} = {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
    },
}

// End of File
