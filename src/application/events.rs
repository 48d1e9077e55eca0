//! Progress events emitted by the batch and watch use cases
//!
//! Use cases never print. They hand every step to a callback, which the
//! binary renders either as human-readable lines or as NDJSON for CI.

use serde::Serialize;

use crate::domain::value_objects::ChangeKind;

/// One step of a sync run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    BatchStarted {
        input: String,
        output: String,
    },
    OutputCleared {
        output: String,
    },
    ScanComplete {
        files: usize,
    },
    /// Dry run: what a source would produce
    Planned {
        source: String,
        outputs: Vec<String>,
    },
    Converting {
        source: String,
    },
    Generated {
        output: String,
        density: &'static str,
    },
    RenderFailed {
        source: String,
        output: String,
        density: &'static str,
        message: String,
    },
    BatchComplete {
        files: usize,
        generated: usize,
        failed: usize,
    },
    WatchStarted {
        input: String,
        output: String,
    },
    FileChanged {
        path: String,
        change: ChangeKind,
    },
    OutputRemoved {
        output: String,
    },
    DirectoryPruned {
        path: String,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl SyncEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// True for events that should go to stderr
    pub fn is_error(&self) -> bool {
        matches!(self, SyncEvent::RenderFailed { .. } | SyncEvent::Error { .. })
    }
}
