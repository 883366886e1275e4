use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::spare_part::BODY;

/// Environment variable naming an optional TOML file.
pub const CONFIG_ENV: &str = "LESSONS_CONFIG";

/// Inputs for the two demos. Every field has a default, so a missing file
/// or an empty one prints the stock output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    pub day: String,
    pub part: i32,
    pub untyped_pick: usize,
    pub typed_pick: usize,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            day: "SATURDAY".to_string(),
            part: BODY,
            untyped_pick: 3,
            typed_pick: 4,
        }
    }
}

impl LessonConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => {
                debug!(path = ?path, "loading config");
                Self::from_path(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }
}
