//! Rasterizer implementations

mod svg;

pub use svg::ResvgRasterizer;
