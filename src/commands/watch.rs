use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use rasterpack::application::{WatchOptions, WatchUseCase};
use rasterpack::config::Settings;

use crate::commands::display;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(settings: &Settings, ui: UiContext) -> Result<()> {
    let options = WatchOptions::new().with_debounce(settings.debounce);
    let use_case = WatchUseCase::new(super::converter(settings)?, options);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &display(&settings.input),
                &display(&settings.output),
                ui.caps.is_tty,
                ui.color,
                ui.unicode
            )
        );
    }

    use_case.start(running, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some(line) = render_watch_event(&timestamp, &event, ui.verbose, ui.color, ui.unicode) {
            if event.is_error() {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
    })?;

    Ok(())
}
