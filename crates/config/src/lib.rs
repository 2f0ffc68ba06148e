//! Configuration management for the Intcode toolkit
//!
//! This crate provides functionality for managing the persistent user configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use intcode_common::utils::io::file::{delete_path, read_file, write_file};
use intcode_vm::core::constants::DEFAULT_MEMORY_LIMIT;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "intcode config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. Modules fall back to
/// these values when a command line flag is not given.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The number of words a machine's memory may grow to
    pub memory_limit: usize,

    /// Whether the runner speaks the ASCII protocol by default
    pub ascii: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration { memory_limit: DEFAULT_MEMORY_LIMIT, ascii: false }
    }
}

/// Returns the path of the configuration file, `$HOME/.intcode/config.toml`.
#[allow(deprecated)]
fn config_path() -> Result<String, Error> {
    let mut home: PathBuf = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".intcode");
    home.push("config.toml");

    home.to_str()
        .map(|path| path.to_string())
        .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

impl Configuration {
    /// Returns the current configuration, creating the file with defaults if it is missing.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        // if the config file doesn't exist, create it
        if !PathBuf::from(&path).exists() {
            debug!("creating default configuration at '{}'", path);
            Configuration::default().save()?;
        }

        let contents = read_file(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        write_file(
            &config_path()?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.intcode/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let path = config_path()?;
        if !delete_path(&path) {
            return Err(Error::Generic(format!("failed to delete config file '{path}'")));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration, then save it.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "memory_limit" => {
                self.memory_limit = value.parse::<usize>().map_err(|_| {
                    Error::ParseError(format!(
                        "invalid value: \'{value}\' is not a valid memory limit."
                    ))
                })?;
            }
            "ascii" => {
                self.ascii = value.parse::<bool>().map_err(|_| {
                    Error::ParseError(format!(
                        "invalid value: \'{value}\' is not 'true' or 'false'."
                    ))
                })?;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `intcode config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `intcode config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}
