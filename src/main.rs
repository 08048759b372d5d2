// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Thin command-line caller around the three core operations: load the
//! configuration, save a configuration, generate the atom set. Transport
//! layers (HTTP front ends and the like) are expected to wrap the same
//! library calls; nothing here knows about them.

use anyhow::{bail, Context, Result};
use lattice::DEFAULT_MAX_ATOMS;
use log::warn;
use scene_config::{ConfigStore, SceneConfig, SceneDoc};
use std::io::Read;

const USAGE: &str = "usage: crystal-designer <config | set | generate [MAX_ATOMS]>";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "generate".to_owned());
    let store = ConfigStore::at_default_location();

    match command.as_str() {
        // Print the current configuration, creating the default document
        // on first run.
        "config" => {
            let config = store.load()?;
            print!("{}", serde_yaml::to_string(&config.to_doc())?);
        }
        // Read a full configuration document from stdin and persist it,
        // replacing the stored document wholesale.
        "set" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read configuration from stdin")?;
            let doc = serde_yaml::from_str::<Option<SceneDoc>>(&text)?.unwrap_or_default();
            let (config, coercions) = SceneConfig::from_doc(doc)?;
            for coercion in &coercions {
                warn!(
                    "Coerced configuration field {}: {:?} is not recognized, using {:?}",
                    coercion.field, coercion.given, coercion.substituted
                );
            }
            store.save(&config)?;
        }
        "generate" => {
            let max_count = match args.next() {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("invalid MAX_ATOMS value: {}", raw))?,
                None => DEFAULT_MAX_ATOMS,
            };
            let config = store.load()?;
            let set = lattice::generate(&config, max_count, &mut rand::thread_rng());
            println!("{}", serde_json::to_string(&set)?);
        }
        other => bail!("unknown command: {}\n{}", other, USAGE),
    }

    Ok(())
}

// End of File
