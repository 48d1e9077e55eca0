//! Human-readable lines for the events both modes share

use rasterpack::SyncEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render one event as a single line, or `None` when it is hidden at this verbosity.
///
/// Per-density `Generated` lines and the clear step only show with `-v`.
pub fn render_event(
    event: &SyncEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    let line = match event {
        SyncEvent::BatchStarted { input, output } => {
            format!("{} Converting {} -> {}", icon(Icon::Batch), input, output)
        }
        SyncEvent::OutputCleared { output } => {
            if verbose == 0 {
                return None;
            }
            format!("{} Cleared: {}", icon(Icon::Trash), output)
        }
        SyncEvent::ScanComplete { files } => format!(
            "{} Found {} SVG {}",
            icon(Icon::Progress),
            files,
            plural(*files, "file", "files")
        ),
        SyncEvent::Planned { source, outputs } => {
            let mut out = format!("{} Would convert: {}", icon(Icon::Arrow), source);
            for output in outputs {
                out.push_str(&format!("\n    {}", output));
            }
            out
        }
        SyncEvent::Converting { source } => {
            format!("{} Converting: {}", icon(Icon::Progress), source)
        }
        SyncEvent::Generated { output, density } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "  {} {} {}",
                icon(Icon::Success),
                ColoredText::dim(*density).render(supports_color),
                output
            )
        }
        SyncEvent::RenderFailed {
            source,
            output,
            density,
            message,
        } => format!(
            "  {} {} {} -> {}: {}",
            icon(Icon::Error),
            density,
            source,
            output,
            ColoredText::error(message.as_str()).render(supports_color)
        ),
        SyncEvent::BatchComplete {
            files,
            generated,
            failed,
        } => {
            if *failed > 0 {
                format!(
                    "{} Done: {} {}, {} generated, {}",
                    icon(Icon::Warning),
                    files,
                    plural(*files, "file", "files"),
                    generated,
                    ColoredText::warning(format!("{} failed", failed)).render(supports_color)
                )
            } else {
                format!(
                    "{} Done: {} {}, {}",
                    icon(Icon::Success),
                    files,
                    plural(*files, "file", "files"),
                    ColoredText::success(format!("{} generated", generated)).render(supports_color)
                )
            }
        }
        SyncEvent::WatchStarted { input, output } => {
            format!("{} Watching: {} -> {}", icon(Icon::Watch), input, output)
        }
        SyncEvent::FileChanged { path, change } => {
            let change = capitalize(&change.to_string());
            format!("{} {}: {}", icon(Icon::Arrow), change, path)
        }
        SyncEvent::OutputRemoved { output } => {
            format!("{} Removed: {}", icon(Icon::Trash), output)
        }
        SyncEvent::DirectoryPruned { path } => {
            format!("{} Pruned: {}", icon(Icon::Trash), path)
        }
        SyncEvent::Error { message } => format!(
            "{} Error: {}",
            icon(Icon::Error),
            ColoredText::error(message.as_str()).render(supports_color)
        ),
        SyncEvent::Shutdown => format!("{} Watch stopped.", icon(Icon::Watch)),
    };

    Some(line)
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
