use anyhow::Result;
use rasterpack::application::{BatchOptions, BatchUseCase};
use rasterpack::config::Settings;

use crate::commands::display;
use crate::ui::context::UiContext;
use crate::ui::views::batch::{render_batch_event, render_batch_header};

/// Run one batch; returns the process exit code
pub fn cmd_batch(settings: &Settings, dry_run: bool, ui: UiContext) -> Result<i32> {
    let use_case = BatchUseCase::new(super::converter(settings)?);
    let options = BatchOptions::new().with_dry_run(dry_run);

    if !ui.json {
        print!(
            "{}",
            render_batch_header(
                &display(&settings.input),
                &display(&settings.output),
                dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let report = use_case.execute(&options, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        if let Some(line) = render_batch_event(&event, ui.verbose, ui.color, ui.unicode) {
            if event.is_error() {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
    })?;

    if settings.fail_on_error && !report.is_success() {
        return Ok(1);
    }
    Ok(0)
}
