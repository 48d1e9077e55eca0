//! Path Mapper
//!
//! Maps a source SVG under the input root to its PNG under the output root:
//! `output/<density>/<relative path with .svg swapped for .png>`.
//!
//! Both roots are fixed at construction. Every method after that is a pure
//! function of its arguments, so generation and deletion always agree on the
//! exact set of files a source owns.

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::{Density, DENSITIES};
use crate::error::{RasterpackError, RasterpackResult};

/// Extension of source files
pub const VECTOR_EXTENSION: &str = "svg";
/// Extension of generated files
pub const RASTER_EXTENSION: &str = "png";

/// Derives output locations from input locations
#[derive(Debug, Clone)]
pub struct PathMapper {
    input_root: PathBuf,
    output_root: PathBuf,
    base: PathBuf,
    /// Absolute forms of the input root a source may be reported under
    input_prefixes: Vec<PathBuf>,
}

impl PathMapper {
    /// Create a mapper resolving relative paths against the current directory
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> RasterpackResult<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::with_base(input_root, output_root, &cwd))
    }

    /// Create a mapper resolving relative paths against `base`
    pub fn with_base(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        base: &Path,
    ) -> Self {
        let input_root = input_root.into();
        let base = normalize(base);
        let absolute = normalize(&base.join(&input_root));

        let mut input_prefixes = vec![absolute.clone()];
        // Watchers may report canonical paths (e.g. /private/var on macOS)
        if let Ok(canonical) = absolute.canonicalize() {
            if canonical != absolute {
                input_prefixes.push(canonical);
            }
        }

        Self {
            input_root,
            output_root: output_root.into(),
            base,
            input_prefixes,
        }
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Strip the input root from `source`.
    ///
    /// Requires a strict component-wise prefix match after normalization;
    /// the root itself is not a valid source.
    pub fn relative_path(&self, source: &Path) -> RasterpackResult<PathBuf> {
        let absolute = normalize(&self.base.join(source));

        self.input_prefixes
            .iter()
            .find_map(|prefix| absolute.strip_prefix(prefix).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| RasterpackError::PathNotUnderRoot {
                path: source.to_path_buf(),
                root: self.input_root.clone(),
            })
    }

    /// Output file for `source` at `density`
    pub fn output_path(&self, source: &Path, density: &Density) -> RasterpackResult<PathBuf> {
        let relative = self.relative_path(source)?;
        Ok(self
            .output_root
            .join(density.label())
            .join(relative.with_extension(RASTER_EXTENSION)))
    }

    /// Output files for `source`, one per density in table order
    pub fn all_output_paths(&self, source: &Path) -> RasterpackResult<Vec<PathBuf>> {
        DENSITIES
            .iter()
            .map(|density| self.output_path(source, density))
            .collect()
    }

    /// Mirrored output directories for an input directory, one per density
    pub fn mirrored_dirs(&self, input_dir: &Path) -> RasterpackResult<Vec<PathBuf>> {
        let relative = self.relative_path(input_dir)?;
        Ok(DENSITIES
            .iter()
            .map(|density| self.output_root.join(density.label()).join(&relative))
            .collect())
    }

    /// True when `path` is a source batch mode would scan: vector extension
    /// and no hidden component below the input root.
    ///
    /// Paths outside the input root keep their extension verdict so the
    /// caller can still report them.
    pub fn is_source(&self, path: &Path) -> bool {
        if !is_vector_file(path) {
            return false;
        }
        match self.relative_path(path) {
            Ok(relative) => !has_hidden_component(&relative),
            Err(_) => true,
        }
    }

    /// True when the input root is the output root or nested inside it
    pub fn input_within_output(&self) -> bool {
        let output = normalize(&self.base.join(&self.output_root));
        self.input_prefixes[0].starts_with(&output)
    }
}

/// True when `path` carries the source vector extension
pub fn is_vector_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == VECTOR_EXTENSION)
}

/// True when any component of `relative` is a dotfile or dot-directory
pub fn has_hidden_component(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
