//! Rasterizer port - the opaque "render(input, scale) -> bytes" capability

use std::path::Path;

use crate::error::RenderError;

/// Turns a vector source into encoded raster bytes
pub trait Rasterizer {
    /// Render `source` at `scale` times its intrinsic size and return PNG bytes
    fn rasterize(&self, source: &Path, scale: f32) -> Result<Vec<u8>, RenderError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, source: &Path, scale: f32) -> Result<Vec<u8>, RenderError> {
        (**self).rasterize(source, scale)
    }
}
