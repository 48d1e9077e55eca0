//! Filesystem event sources

mod notify_source;

pub use notify_source::{translate, watch_tree};
