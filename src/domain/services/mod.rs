//! Domain Services
//!
//! Pure rules for mapping paths and deciding incremental work.
//! These services have no I/O dependencies and are easily testable.

mod path_mapper;
mod sync_policy;

pub use path_mapper::{
    has_hidden_component, is_vector_file, PathMapper, RASTER_EXTENSION, VECTOR_EXTENSION,
};
pub use sync_policy::{classify, SyncAction};
