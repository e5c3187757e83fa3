use std::{
    env, io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use idcounter::Strategy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CONFIG_FILENAME: &str = "idgen.toml";

/// Defaults for idgen's commands, contained in an idgen.toml file.
///
/// Every field is optional. Flags passed on the command line always win over
/// values from this file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The counter that `idgen issue` draws from.
    #[serde(default)]
    pub strategy: Strategy,

    /// How many threads draw IDs at once.
    #[serde(default = "default_callers")]
    pub callers: usize,

    /// How many IDs each thread draws in `idgen issue`.
    #[serde(default = "default_per_caller")]
    pub per_caller: usize,

    /// The path that this config came from, if any.
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Config {
    /// Reads the config at `explicit_path`, or idgen.toml from the current
    /// directory when no path is given.
    ///
    /// A missing idgen.toml in the current directory is not an error, but a
    /// missing explicit path is.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::read_from_file(path),
            None => Self::load_from(&env::current_dir()?),
        }
    }

    /// Reads idgen.toml from `folder`, falling back to the defaults if there
    /// isn't one.
    pub fn load_from(folder: &Path) -> Result<Self, ConfigError> {
        match Self::read_from_folder(folder) {
            Ok(config) => Ok(config),
            Err(err) if err.is_not_found() => {
                log::debug!("No {} found, using default settings", CONFIG_FILENAME);
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let file_path = folder_path.as_ref().join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = Some(path.to_owned());

        log::trace!("Loaded config from {}", path.display());

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            callers: default_callers(),
            per_caller: default_per_caller(),
            file_path: None,
        }
    }
}

fn default_callers() -> usize {
    50
}

fn default_per_caller() -> usize {
    1
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
