//! resvg-backed implementation of the Rasterizer port

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::Rasterizer;
use crate::error::RenderError;

/// Largest pixmap side we are willing to allocate
const MAX_DIM: u32 = 16_384;

/// Renders SVG files with usvg + resvg and encodes PNG via tiny-skia
#[derive(Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }
}

impl std::fmt::Debug for ResvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResvgRasterizer")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl ResvgRasterizer {
    /// Rasterizer with system fonts loaded once for every render
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    fn parse(&self, source: &Path, bytes: &[u8]) -> Result<usvg::Tree, RenderError> {
        let opts = usvg::Options {
            resources_dir: source.parent().map(Path::to_path_buf),
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        usvg::Tree::from_data(bytes, &opts).map_err(|e| RenderError::Parse(e.to_string()))
    }
}

/// Pixel size of `tree` scaled by `scale`
fn raster_size(tree: &usvg::Tree, scale: f32) -> Result<(u32, u32), RenderError> {
    let size = tree.size();
    let width = size.width() * scale;
    let height = size.height() * scale;

    let to_px = |v: f32| -> Option<u32> {
        if !v.is_finite() || v <= 0.0 {
            return None;
        }
        let px = (v.ceil() as u32).max(1);
        (px <= MAX_DIM).then_some(px)
    };

    match (to_px(width), to_px(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(RenderError::InvalidSize { width, height }),
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, source: &Path, scale: f32) -> Result<Vec<u8>, RenderError> {
        let bytes = std::fs::read(source).map_err(RenderError::Read)?;
        let tree = self.parse(source, &bytes)?;
        let (width, height) = raster_size(&tree, scale)?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or(
            RenderError::InvalidSize {
                width: width as f32,
                height: height as f32,
            },
        )?;
        let transform = resvg::tiny_skia::Transform::from_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="16" viewBox="0 0 24 16"><rect width="24" height="16" fill="#e11d48"/></svg>"##;

    /// Width and height from the PNG IHDR chunk
    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        assert_eq!(&png[1..4], b"PNG", "not a png");
        let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (w, h)
    }

    #[test]
    fn rasterizes_at_each_scale() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("square.svg");
        std::fs::write(&source, SQUARE).unwrap();
        let rasterizer = ResvgRasterizer::default();

        let half = rasterizer.rasterize(&source, 0.5).unwrap();
        let base = rasterizer.rasterize(&source, 1.0).unwrap();
        let double = rasterizer.rasterize(&source, 2.0).unwrap();

        assert_eq!(png_dimensions(&half), (12, 8));
        assert_eq!(png_dimensions(&base), (24, 16));
        assert_eq!(png_dimensions(&double), (48, 32));
    }

    #[test]
    fn rounds_fractional_sizes_up() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("odd.svg");
        std::fs::write(
            &source,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="25" height="3"/>"#,
        )
        .unwrap();

        let png = ResvgRasterizer::default().rasterize(&source, 0.5).unwrap();

        assert_eq!(png_dimensions(&png), (13, 2));
    }

    #[test]
    fn missing_source_is_read_error() {
        let dir = tempdir().unwrap();
        let err = ResvgRasterizer::default()
            .rasterize(&dir.path().join("nope.svg"), 1.0)
            .unwrap_err();
        assert!(matches!(err, RenderError::Read(_)));
    }

    #[test]
    fn malformed_source_is_parse_error() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("broken.svg");
        std::fs::write(&source, "<svg").unwrap();

        let err = ResvgRasterizer::default().rasterize(&source, 1.0).unwrap_err();

        assert!(matches!(err, RenderError::Parse(_)));
    }

    #[test]
    fn oversized_output_is_rejected() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("huge.svg");
        std::fs::write(
            &source,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="10000" height="10"/>"#,
        )
        .unwrap();

        let err = ResvgRasterizer::default().rasterize(&source, 2.0).unwrap_err();

        assert!(matches!(err, RenderError::InvalidSize { .. }));
    }
}
