//! rasterpack - SVG icon tree to multi-density PNG converter
//!
//! Mirrors every `.svg` under an input directory into `<output>/1x`,
//! `<output>/2x` and `<output>/3x` as PNGs, either once (batch) or
//! continuously as the input tree changes (watch).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BatchOptions, BatchReport, BatchUseCase, IconConverter, SyncEvent, WatchOptions, WatchUseCase,
};
pub use config::{Config, Settings};
pub use domain::services::PathMapper;
pub use domain::value_objects::{Density, DENSITIES};
pub use error::{RasterpackError, RasterpackResult, RenderError};
pub use infrastructure::{LocalFs, ResvgRasterizer};
