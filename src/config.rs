// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use flashdeck_core::error::ErrorReport;
use flashdeck_core::error::Fallible;
use flashdeck_core::error::fail;
use flashdeck_core::types::card::UNCATEGORIZED;
use serde::Deserialize;

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "flashdeck.toml";

/// Settings read from `flashdeck.toml`.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the SQLite database. Relative paths are resolved against the
    /// directory holding the configuration file.
    pub database: PathBuf,
    /// Category given to cards added without one.
    pub default_category: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("flashdeck.db"),
            default_category: UNCATEGORIZED.to_string(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Fallible<Self> {
        toml::from_str(text)
            .map_err(|e| ErrorReport::new(format!("Failed to parse configuration: {e}")))
    }

    /// Load the configuration. An explicit path must exist; otherwise
    /// `flashdeck.toml` in the given directory is used if present, and the
    /// defaults if not.
    pub fn load(explicit: Option<&Path>, directory: &Path) -> Fallible<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return fail(format!(
                        "configuration file {} does not exist.",
                        path.display()
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let path = directory.join(CONFIG_FILE_NAME);
                if !path.exists() {
                    log::debug!("No configuration file, using defaults");
                    return Ok(Config::default());
                }
                path
            }
        };
        log::debug!("Reading configuration from {}", path.display());
        let mut config = Config::parse(&read_to_string(&path)?)?;
        if config.database.is_relative() {
            if let Some(parent) = path.parent() {
                config.database = parent.join(&config.database);
            }
        }
        Ok(config)
    }
}
