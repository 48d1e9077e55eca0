//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use crate::application::convert::{IconConverter, RemoveReport};
use crate::application::events::SyncEvent;
use crate::domain::ports::{FileSystem, Rasterizer};
use crate::domain::services::{classify, SyncAction};
use crate::domain::value_objects::FileChange;
use crate::error::{RasterpackError, RasterpackResult};
use crate::infrastructure::watch::watch_tree;

use super::event::{WatchOptions, WatcherState};

/// How often the loop wakes up to check the running flag and debounce timer
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Handles one change to completion (every density) before the next.
/// Render failures are reported and never stop the loop.
pub struct WatchUseCase<R, FS>
where
    R: Rasterizer,
    FS: FileSystem,
{
    converter: IconConverter<R, FS>,
    options: WatchOptions,
}

impl<R, FS> WatchUseCase<R, FS>
where
    R: Rasterizer,
    FS: FileSystem,
{
    pub fn new(converter: IconConverter<R, FS>, options: WatchOptions) -> Self {
        Self { converter, options }
    }

    /// Start watching the input root (blocking)
    ///
    /// Blocks until the running flag is set to false. A missing input root
    /// or a failed watch subscription is returned as an error.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> RasterpackResult<()>
    where
        F: Fn(SyncEvent),
    {
        let input = self.converter.mapper().input_root();
        if !self.converter.fs().is_dir(input) {
            return Err(RasterpackError::filesystem(
                input,
                "input directory does not exist",
            ));
        }

        let (tx, rx) = channel();
        let _watcher = watch_tree(input, tx)?;

        self.run(rx, running, on_event);
        Ok(())
    }

    /// Drive the loop from an arbitrary change source.
    ///
    /// Returns when the running flag clears or every sender is dropped.
    pub fn run<F>(&self, rx: Receiver<FileChange>, running: Arc<AtomicBool>, on_event: F)
    where
        F: Fn(SyncEvent),
    {
        let mapper = self.converter.mapper();
        on_event(SyncEvent::WatchStarted {
            input: mapper.input_root().display().to_string(),
            output: mapper.output_root().display().to_string(),
        });

        let mut state = WatcherState::new(self.options.debounce);

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(change) if self.options.debounce_enabled() => state.add_change(change),
                Ok(change) => {
                    self.handle(&change, &on_event);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if state.should_sync() {
                for change in state.take_changes() {
                    self.handle(&change, &on_event);
                }
            }
        }

        // Apply whatever the debounce window was still holding
        for change in state.take_changes() {
            self.handle(&change, &on_event);
        }

        on_event(SyncEvent::Shutdown);
    }

    /// Apply a single change and report what happened
    pub fn handle(&self, change: &FileChange, on_event: &impl Fn(SyncEvent)) -> SyncAction {
        let action = classify(
            change,
            |path| self.converter.mapper().is_source(path),
            |path| self.converter.has_mirrored_dir(path),
        );

        match &action {
            SyncAction::Ignore => {}
            SyncAction::Regenerate(source) => {
                Self::changed(change, on_event);
                match self.converter.convert(source) {
                    Ok(report) => report.emit(on_event),
                    Err(e) => Self::error(e, on_event),
                }
            }
            SyncAction::RemoveOutputs(source) => {
                Self::changed(change, on_event);
                match self.converter.remove_outputs(source) {
                    Ok(report) => Self::removed(report, on_event, |output| {
                        SyncEvent::OutputRemoved { output }
                    }),
                    Err(e) => Self::error(e, on_event),
                }
            }
            SyncAction::PruneDirectory(dir) => {
                Self::changed(change, on_event);
                match self.converter.prune_dirs(dir) {
                    Ok(report) => Self::removed(report, on_event, |path| {
                        SyncEvent::DirectoryPruned { path }
                    }),
                    Err(e) => Self::error(e, on_event),
                }
            }
        }

        action
    }

    fn changed(change: &FileChange, on_event: &impl Fn(SyncEvent)) {
        on_event(SyncEvent::FileChanged {
            path: change.path.display().to_string(),
            change: change.kind,
        });
    }

    fn removed(
        report: RemoveReport,
        on_event: &impl Fn(SyncEvent),
        to_event: impl Fn(String) -> SyncEvent,
    ) {
        for path in &report.removed {
            on_event(to_event(path.display().to_string()));
        }
        for message in report.errors {
            on_event(SyncEvent::Error { message });
        }
    }

    fn error(err: RasterpackError, on_event: &impl Fn(SyncEvent)) {
        on_event(SyncEvent::Error {
            message: err.to_string(),
        });
    }
}
