use rasterpack::SyncEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::event::render_event;

pub fn render_watch_header(
    input: &str,
    output: &str,
    hint: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "rasterpack watch");
    header.add("Input", input);
    header.add("Output", output);
    if hint {
        header.add("Hint", "Press Ctrl+C to stop");
    }
    header.render(supports_color, supports_unicode)
}

/// Prefix every visible line with `[HH:MM:SS]`
pub fn render_watch_event(
    timestamp: &str,
    event: &SyncEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let line = render_event(event, verbose, supports_color, supports_unicode)?;
    let prefix = format!("[{}]", timestamp);

    Some(match event {
        SyncEvent::Shutdown => format!("\n{} {}", prefix, line),
        _ => format!("{} {}", prefix, line),
    })
}
