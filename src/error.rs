//! Error types for rasterpack
//!
//! Library code returns `RasterpackResult`; the binary wraps everything in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rasterpack operations
pub type RasterpackResult<T> = Result<T, RasterpackError>;

/// Main error type for rasterpack operations
#[derive(Error, Debug)]
pub enum RasterpackError {
    /// Source path does not live under the configured input root
    #[error("path '{path}' is not under input root '{root}'")]
    PathNotUnderRoot { path: PathBuf, root: PathBuf },

    /// Rasterizing one (file, density) pair failed
    #[error("failed to render {source_path} -> {output}: {reason}")]
    Render {
        source_path: PathBuf,
        output: PathBuf,
        reason: RenderError,
    },

    /// Root-level listing, clearing or writing failure
    #[error("filesystem error at {path}: {message}")]
    Filesystem { path: PathBuf, message: String },

    /// The recursive watch could not be established
    #[error("cannot watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// Clearing the output root would delete the sources
    #[error("input root '{input}' lies inside output root '{output}'")]
    OutputContainsInput { input: PathBuf, output: PathBuf },

    /// Input or output root was not supplied by CLI, env or config
    #[error("missing {which} directory (pass --{which} or set it in rasterpack.toml)")]
    MissingRoot { which: &'static str },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterpackError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Filesystem {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Failure reported by a `Rasterizer` implementation
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot read source: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed svg: {0}")]
    Parse(String),

    #[error("invalid raster size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("png encoding failed: {0}")]
    Encode(String),

    #[error("cannot write output: {0}")]
    Write(String),
}
