use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Gateau configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GateauConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Schedule settings.
    #[serde(default)]
    pub schedule: ScheduleToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("birthdays.csv")
}
fn default_output() -> PathBuf {
    PathBuf::from("cakedays.csv")
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    /// Target year; out-of-range values fall back to the current year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Holiday descriptors in "day Month" form.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl GateauConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist (the tool is fully usable without one).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}
