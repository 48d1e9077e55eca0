//! Renderer adapter
//!
//! Resolves destinations through the `PathMapper`, rasterizes through the
//! `Rasterizer` port and writes through the `FileSystem` port. Both the
//! batch and watch use cases go through here, so they agree on exactly
//! which files a source owns.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError, Rasterizer};
use crate::domain::services::PathMapper;
use crate::domain::value_objects::{Density, DENSITIES};
use crate::error::{RasterpackError, RasterpackResult, RenderError};

use super::events::SyncEvent;

/// An output that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub density: &'static str,
    pub output: PathBuf,
}

/// An output that could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub source: PathBuf,
    pub output: PathBuf,
    pub density: &'static str,
    pub message: String,
}

/// Result of converting one source at every density
#[derive(Debug, Clone, Default)]
pub struct ConvertReport {
    pub generated: Vec<RenderedOutput>,
    pub failures: Vec<RenderFailure>,
}

impl ConvertReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Report each output as a `Generated` or `RenderFailed` event
    pub fn emit(&self, on_event: &impl Fn(SyncEvent)) {
        for rendered in &self.generated {
            on_event(SyncEvent::Generated {
                output: rendered.output.display().to_string(),
                density: rendered.density,
            });
        }
        for failure in &self.failures {
            on_event(SyncEvent::RenderFailed {
                source: failure.source.display().to_string(),
                output: failure.output.display().to_string(),
                density: failure.density,
                message: failure.message.clone(),
            });
        }
    }
}

/// Result of deleting a source's outputs
#[derive(Debug, Clone, Default)]
pub struct RemoveReport {
    pub removed: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Converts sources into their per-density outputs
pub struct IconConverter<R, FS>
where
    R: Rasterizer,
    FS: FileSystem,
{
    mapper: PathMapper,
    rasterizer: R,
    fs: FS,
}

impl<R, FS> IconConverter<R, FS>
where
    R: Rasterizer,
    FS: FileSystem,
{
    pub fn new(mapper: PathMapper, rasterizer: R, fs: FS) -> Self {
        Self {
            mapper,
            rasterizer,
            fs,
        }
    }

    pub fn mapper(&self) -> &PathMapper {
        &self.mapper
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Render `source` at `density` into `output`, overwriting it.
    ///
    /// Parent directories are created as needed.
    pub fn render(&self, source: &Path, output: &Path, density: &Density) -> RasterpackResult<()> {
        let render_error = |reason| RasterpackError::Render {
            source_path: source.to_path_buf(),
            output: output.to_path_buf(),
            reason,
        };

        let bytes = self
            .rasterizer
            .rasterize(source, density.scale_factor())
            .map_err(render_error)?;

        self.fs
            .write(output, &bytes)
            .map_err(|e| render_error(RenderError::Write(e.to_string())))
    }

    /// Render `source` at every density.
    ///
    /// Per-density failures are collected, never returned as `Err`; only a
    /// source outside the input root fails the whole call.
    pub fn convert(&self, source: &Path) -> RasterpackResult<ConvertReport> {
        let outputs = self.mapper.all_output_paths(source)?;
        let mut report = ConvertReport::default();

        for (density, output) in DENSITIES.iter().zip(outputs) {
            match self.render(source, &output, density) {
                Ok(()) => report.generated.push(RenderedOutput {
                    density: density.label(),
                    output,
                }),
                Err(e) => {
                    // Source and output travel alongside; keep only the cause
                    let message = match e {
                        RasterpackError::Render { reason, .. } => reason.to_string(),
                        other => other.to_string(),
                    };
                    report.failures.push(RenderFailure {
                        source: source.to_path_buf(),
                        output,
                        density: density.label(),
                        message,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Delete every existing output of `source`; missing outputs are skipped.
    pub fn remove_outputs(&self, source: &Path) -> RasterpackResult<RemoveReport> {
        let mut report = RemoveReport::default();

        for output in self.mapper.all_output_paths(source)? {
            if !self.fs.exists(&output) {
                continue;
            }
            match self.fs.remove(&output) {
                Ok(()) => report.removed.push(output),
                // Raced with another deletion
                Err(FsError::NotFound(_)) => {}
                Err(e) => report.errors.push(e.to_string()),
            }
        }

        Ok(report)
    }

    /// Delete the mirrored output directories of a removed input directory
    pub fn prune_dirs(&self, input_dir: &Path) -> RasterpackResult<RemoveReport> {
        let mut report = RemoveReport::default();

        for dir in self.mapper.mirrored_dirs(input_dir)? {
            if !self.fs.is_dir(&dir) {
                continue;
            }
            match self.fs.remove_dir_all(&dir) {
                Ok(()) => report.removed.push(dir),
                Err(FsError::NotFound(_)) => {}
                Err(e) => report.errors.push(e.to_string()),
            }
        }

        Ok(report)
    }

    /// True when any mirrored output directory of `input_dir` exists
    pub fn has_mirrored_dir(&self, input_dir: &Path) -> bool {
        self.mapper
            .mirrored_dirs(input_dir)
            .map(|dirs| dirs.iter().any(|dir| self.fs.is_dir(dir)))
            .unwrap_or(false)
    }
}
