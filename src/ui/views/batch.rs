use rasterpack::SyncEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::event::render_event;

pub fn render_batch_header(
    input: &str,
    output: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Batch, "rasterpack");
    header.add("Input", input);
    header.add("Output", output);
    if dry_run {
        header.add("Mode", "Dry run (nothing is written)");
    }
    header.render(supports_color, supports_unicode)
}

/// The header already names both roots, so `BatchStarted` is not repeated.
pub fn render_batch_event(
    event: &SyncEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    match event {
        SyncEvent::BatchStarted { .. } => None,
        _ => render_event(event, verbose, supports_color, supports_unicode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_marks_dry_run() {
        insta::assert_snapshot!(render_batch_header("svg", "png", true, false, false), @r"
        [BATCH] rasterpack
        Input: svg
        Output: png
        Mode: Dry run (nothing is written)
        ");
    }

    #[test]
    fn batch_started_is_folded_into_header() {
        let event = SyncEvent::BatchStarted {
            input: "svg".to_string(),
            output: "png".to_string(),
        };
        assert_eq!(render_batch_event(&event, 2, false, false), None);
    }

    #[test]
    fn scan_complete_counts_files() {
        let event = SyncEvent::ScanComplete { files: 4 };
        insta::assert_snapshot!(
            render_batch_event(&event, 0, false, true).unwrap(),
            @"● Found 4 SVG files"
        );
    }
}
