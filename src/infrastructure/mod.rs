//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Mock for tests)
//! - `raster/` - SVG rasterization (resvg)
//! - `watch/` - Filesystem change notifications (notify)

pub mod fs;
pub mod raster;
pub mod watch;

// Re-export for convenience
pub use fs::LocalFs;
pub use raster::ResvgRasterizer;
pub use watch::{translate, watch_tree};
