//! Batch Sync Use Case
//!
//! One-shot full regeneration: clear the output root, scan the input root,
//! convert every source at every density, then stop.

mod options;
mod result;
mod use_case;

pub use options::BatchOptions;
pub use result::BatchReport;
pub use use_case::BatchUseCase;
