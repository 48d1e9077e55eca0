//! Watch options and debounce state

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::domain::value_objects::FileChange;

/// Watch options
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Quiet period before pending changes are applied; zero applies every
    /// change as soon as it arrives
    pub debounce: Duration,
}

impl WatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn debounce_enabled(&self) -> bool {
        !self.debounce.is_zero()
    }
}

/// Watcher state for debouncing
///
/// Coalesces changes per path; the latest kind for a path wins and the
/// path keeps its first-arrival position.
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: Vec<FileChange>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl WatcherState {
    /// Create a new watcher state
    pub fn new(debounce: Duration) -> Self {
        Self {
            pending_changes: Vec::new(),
            last_change: None,
            debounce,
        }
    }

    /// Queue a change
    pub fn add_change(&mut self, change: FileChange) {
        match self
            .pending_changes
            .iter_mut()
            .find(|pending| pending.path == change.path)
        {
            Some(pending) => pending.kind = change.kind,
            None => self.pending_changes.push(change),
        }
        self.last_change = Some(Instant::now());
    }

    /// True once the quiet period has elapsed with changes pending
    pub fn should_sync(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Drain pending changes in arrival order
    pub fn take_changes(&mut self) -> Vec<FileChange> {
        self.last_change = None;
        std::mem::take(&mut self.pending_changes)
    }

    pub fn pending_paths(&self) -> Vec<PathBuf> {
        self.pending_changes.iter().map(|c| c.path.clone()).collect()
    }
}
