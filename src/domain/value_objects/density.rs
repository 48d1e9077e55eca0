//! Density value object - one output variant of a source icon
//!
//! Source SVGs are assumed to be delivered at a @2x base size, so the
//! 1x output is rendered at half the vector's intrinsic size.

use serde::Serialize;

/// A pixel density tier and the scale applied to the master vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Density {
    label: &'static str,
    scale_factor: f32,
}

/// The fixed density table, iterated in this order everywhere.
pub const DENSITIES: [Density; 3] = [
    Density::new("1x", 0.5),
    Density::new("2x", 1.0),
    Density::new("3x", 2.0),
];

impl Density {
    const fn new(label: &'static str, scale_factor: f32) -> Self {
        Self {
            label,
            scale_factor,
        }
    }

    /// Directory name under the output root (`1x`, `2x`, `3x`)
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Scale relative to the SVG's intrinsic size
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.scale_factor)
    }
}
