//! notify-backed filesystem event source
//!
//! Translates raw `notify` events into domain `FileChange`s so the sync
//! policy only ever sees created/modified/removed.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::value_objects::FileChange;
use crate::error::{RasterpackError, RasterpackResult};

/// Translate one notify event.
///
/// Renames are reported as the removal of the old path and the creation of
/// the new one. When the backend cannot tell which side of a rename a path
/// is on, `exists` decides.
pub fn translate(event: &Event, exists: impl Fn(&Path) -> bool) -> Vec<FileChange> {
    let by_existence = |path: &PathBuf| {
        if exists(path) {
            FileChange::created(path.clone())
        } else {
            FileChange::removed(path.clone())
        }
    };

    match event.kind {
        EventKind::Create(CreateKind::Folder) => Vec::new(),
        EventKind::Create(_) => event.paths.iter().cloned().map(FileChange::created).collect(),
        EventKind::Remove(_) => event.paths.iter().cloned().map(FileChange::removed).collect(),
        EventKind::Modify(ModifyKind::Metadata(_)) => Vec::new(),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            event.paths.iter().cloned().map(FileChange::removed).collect()
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
            event.paths.iter().cloned().map(FileChange::created).collect()
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => match event.paths.as_slice() {
            [from, to] => vec![
                FileChange::removed(from.clone()),
                FileChange::created(to.clone()),
            ],
            paths => paths.iter().map(by_existence).collect(),
        },
        EventKind::Modify(ModifyKind::Name(_)) => event.paths.iter().map(by_existence).collect(),
        EventKind::Modify(_) => event.paths.iter().cloned().map(FileChange::modified).collect(),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
    }
}

/// Start a recursive watch on `root`, forwarding translated changes to `tx`.
///
/// The watch lives as long as the returned watcher.
pub fn watch_tree(root: &Path, tx: Sender<FileChange>) -> RasterpackResult<RecommendedWatcher> {
    let watch_error = |e: notify::Error| RasterpackError::Watch {
        path: root.to_path_buf(),
        message: e.to_string(),
    };

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                for change in translate(&event, Path::exists) {
                    let _ = tx.send(change);
                }
            }
        },
        Config::default(),
    )
    .map_err(watch_error)?;

    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(watch_error)?;

    Ok(watcher)
}
