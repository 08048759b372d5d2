// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::document::SceneDoc;
use crate::error::ConfigError;
use crate::model::SceneConfig;

use log::{error, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted scene document.
pub const CONFIG_FILE_NAME: &str = "design.yaml";

/// Whole-document storage for a [`SceneConfig`].
///
/// Reads and writes are whole-file operations with no locking: the store
/// does not provide mutual exclusion between concurrent writers. The write
/// itself is atomic (temporary file + rename), so readers never observe a
/// torn document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform configuration directory, falling
    /// back to the working directory if that directory cannot be created.
    pub fn at_default_location() -> Self {
        let config_dir = directories::ProjectDirs::from("org", "crystaldesigner", "CrystalDesigner")
            .map(|dirs| dirs.config_dir().to_owned())
            .unwrap_or_else(|| PathBuf::from("."));

        if !config_dir.exists() {
            if let Err(err) = fs::create_dir_all(&config_dir) {
                error!(
                    "Failed to create config directory {}: {}",
                    config_dir.display(),
                    err
                );
                warn!("Scene configuration will be stored in the working directory.");
                return Self::new(CONFIG_FILE_NAME);
            }
        }

        Self::new(config_dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the scene configuration.
    ///
    /// If no document exists yet, a default configuration is persisted and
    /// returned, so from the caller's perspective a first-run load behaves
    /// exactly like any other. Fields missing from an existing document are
    /// filled with their defaults; any coerced enum values are logged at
    /// warn level.
    pub fn load(&self) -> Result<SceneConfig, ConfigError> {
        if !self.path.exists() {
            let config = SceneConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let text = fs::read_to_string(&self.path)?;
        // An empty (or all-comment) file deserializes to YAML null; treat
        // it like a missing document body rather than a parse failure.
        let doc = serde_yaml::from_str::<Option<SceneDoc>>(&text)?.unwrap_or_default();
        let (config, coercions) = SceneConfig::from_doc(doc)?;
        for coercion in &coercions {
            warn!(
                "Coerced configuration field {}: {:?} is not recognized, using {:?}",
                coercion.field, coercion.given, coercion.substituted
            );
        }
        Ok(config)
    }

    /// Persists the full configuration, replacing the document wholesale.
    ///
    /// The document is written to a sibling temporary file and renamed over
    /// the target, so an interrupted save leaves the previous document
    /// intact.
    pub fn save(&self, config: &SceneConfig) -> Result<(), ConfigError> {
        let text = serde_yaml::to_string(&config.to_doc())?;
        // Sibling path keeps the rename on a single filesystem.
        let tmp_path = self.path.with_extension("yaml.tmp");
        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}


// End of File
