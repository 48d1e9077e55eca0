//! Watch Use Case
//!
//! Continuous incremental sync driven by filesystem notifications.
//! It orchestrates:
//! - File system monitoring (via `notify`, see `infrastructure::watch`)
//! - Classification of each change (`domain::services::sync_policy`)
//! - Regeneration or deletion of the affected outputs
//! - Optional per-path debouncing (off by default)
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(converter, WatchOptions::new());
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{WatchOptions, WatcherState};
pub use use_case::WatchUseCase;
