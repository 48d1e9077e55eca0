use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use rasterpack::config::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// `color` is the already-merged CLI/config color mode
    pub fn new(json: bool, verbose: u8, color: ColorMode) -> Self {
        Self::from_caps(json, verbose, color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}
