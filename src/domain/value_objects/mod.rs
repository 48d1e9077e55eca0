//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod density;
mod file_change;

pub use density::{Density, DENSITIES};
pub use file_change::{ChangeKind, FileChange};
