//! SVG fixtures with known intrinsic sizes.

/// 24x16 rectangle: 12x8 at 1x, 24x16 at 2x, 48x32 at 3x
pub const RECT_24X16: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="16" viewBox="0 0 24 16">
  <rect x="2" y="2" width="20" height="12" fill="#3366ff"/>
</svg>
"##;

/// 10x10 circle: 5x5, 10x10, 20x20
pub const CIRCLE_10: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
  <circle cx="5" cy="5" r="4" fill="black"/>
</svg>
"#;

/// Truncated document that fails to parse
pub const BROKEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect"#;
