//! Configuration types for rasterpack

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RasterpackError, RasterpackResult};

use super::loader::{self, ConfigWarning};

/// Contents of `rasterpack.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the `.svg` sources
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Directory receiving the `<density>/` trees
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// `[watch]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period before pending changes are handled; 0 handles each change at once
    #[serde(default)]
    pub debounce_ms: u64,
}

/// `[batch]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Exit non-zero when any (file, density) render failed
    #[serde(default)]
    pub fail_on_error: bool,
}

/// `[ui]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Values given on the command line; `None` defers to env, file, then defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub debounce_ms: Option<u64>,
    pub fail_on_error: bool,
    pub color: Option<ColorMode>,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub debounce: Duration,
    pub fail_on_error: bool,
    pub color: ColorMode,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RasterpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load an explicit config file, or `rasterpack.toml` in `cwd` when present
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> RasterpackResult<(Self, Option<PathBuf>, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (RASTERPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Merge command-line values on top and require both roots
    pub fn resolve(self, overrides: Overrides) -> RasterpackResult<Settings> {
        let input = overrides
            .input
            .or(self.input)
            .ok_or(RasterpackError::MissingRoot { which: "input" })?;
        let output = overrides
            .output
            .or(self.output)
            .ok_or(RasterpackError::MissingRoot { which: "output" })?;
        let debounce_ms = overrides.debounce_ms.unwrap_or(self.watch.debounce_ms);

        Ok(Settings {
            input,
            output,
            debounce: Duration::from_millis(debounce_ms),
            fail_on_error: overrides.fail_on_error || self.batch.fail_on_error,
            color: overrides.color.unwrap_or(self.ui.color),
        })
    }
}
