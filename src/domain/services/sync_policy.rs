//! Incremental sync policy for watch mode
//!
//! Decides what a single filesystem change means for the output tree.
//! The decision only looks at the change and at whether mirrored output
//! directories exist; executing it is the watch use case's job.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ChangeKind, FileChange};

/// What to do about one change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Render the source at every density, overwriting existing outputs
    Regenerate(PathBuf),
    /// Delete whichever of the source's outputs exist
    RemoveOutputs(PathBuf),
    /// A removed input directory: delete its mirrored output directories
    PruneDirectory(PathBuf),
    /// Nothing to do
    Ignore,
}

/// Classify a change.
///
/// `is_source` decides which vector files are in scope (the same rule the
/// batch scan applies). `has_mirrored_dir` is consulted only for removals
/// of other paths, where the path may have been a directory of icons.
pub fn classify(
    change: &FileChange,
    is_source: impl Fn(&Path) -> bool,
    has_mirrored_dir: impl Fn(&Path) -> bool,
) -> SyncAction {
    let vector = is_source(&change.path);
    match change.kind {
        ChangeKind::Created | ChangeKind::Modified if vector => {
            SyncAction::Regenerate(change.path.clone())
        }
        ChangeKind::Removed if vector => SyncAction::RemoveOutputs(change.path.clone()),
        ChangeKind::Removed if has_mirrored_dir(&change.path) => {
            SyncAction::PruneDirectory(change.path.clone())
        }
        _ => SyncAction::Ignore,
    }
}
