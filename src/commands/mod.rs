pub mod batch;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use rasterpack::application::IconConverter;
use rasterpack::config::{ColorMode, Config, Settings};
use rasterpack::{LocalFs, PathMapper, ResvgRasterizer};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Layer CLI > env > file > defaults and build the console context
pub fn resolve(cli: &Cli) -> Result<(Settings, UiContext)> {
    let cwd = std::env::current_dir()?;
    let (config, _path, warnings) = Config::discover(cli.config.as_deref(), &cwd)?;
    let config = config.with_env_overrides();

    // Warn about the file even when resolution fails below
    let color = cli.color.map(ColorMode::from).unwrap_or(config.ui.color);
    let ui = UiContext::new(cli.json, cli.verbose, color);
    print_config_warnings(&warnings, ui.color, ui.unicode);

    let settings = config.resolve(cli.overrides())?;
    Ok((settings, ui))
}

pub fn converter(settings: &Settings) -> Result<IconConverter<ResvgRasterizer, LocalFs>> {
    let mapper = PathMapper::new(&settings.input, &settings.output)?;
    Ok(IconConverter::new(
        mapper,
        ResvgRasterizer::with_system_fonts(),
        LocalFs::new(),
    ))
}

pub(crate) fn display(path: &Path) -> String {
    path.display().to_string()
}
