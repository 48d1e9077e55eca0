//! Configuration for rasterpack
//!
//! Values are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (RASTERPACK_*)
//! 3. `rasterpack.toml` (`--config`, else the working directory)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::{BatchConfig, ColorMode, Config, Overrides, Settings, UiConfig, WatchConfig};
