//! Board configuration
//!
//! [`BoardConfig`] names the setup and layout files; the submodules parse
//! them. The setup file must be loaded first because layout tokens are
//! checked against its room initials.

mod errors;
mod layout;
mod setup;

pub use errors::ConfigError;
pub use layout::parse_layout;
pub use setup::parse_setup;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{Grid, RoomRegistry};

/// Default directory holding board files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where to find a board's setup and layout files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    pub layout_file: String,
    pub setup_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl BoardConfig {
    /// Files looked up under the default `data` directory
    pub fn new(layout_file: impl Into<String>, setup_file: impl Into<String>) -> Self {
        Self {
            data_dir: default_data_dir(),
            layout_file: layout_file.into(),
            setup_file: setup_file.into(),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn layout_path(&self) -> PathBuf {
        self.data_dir.join(&self.layout_file)
    }

    pub fn setup_path(&self) -> PathBuf {
        self.data_dir.join(&self.setup_file)
    }

    /// Read settings from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_source(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }
}

fn read_source(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path.to_path_buf(), e))
}

/// Load the setup file into a room registry
pub fn load_setup_file(path: &Path) -> Result<RoomRegistry, ConfigError> {
    tracing::debug!(path = %path.display(), "loading setup");
    parse_setup(&read_source(path)?)
}

/// Load the layout file, validating it against `rooms`
pub fn load_layout_file(path: &Path, rooms: &mut RoomRegistry) -> Result<Grid, ConfigError> {
    tracing::debug!(path = %path.display(), "loading layout");
    parse_layout(&read_source(path)?, rooms)
}
