//! Application Layer
//!
//! Use cases that orchestrate the sync flow.
//! This layer:
//! - Depends on Domain layer (path mapping, sync policy, ports)
//! - Does NOT contain mapping rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BatchUseCase` - Clear, scan and convert the whole tree once
//! - `WatchUseCase` - Apply filesystem changes incrementally
//!
//! ## Services
//!
//! - `IconConverter` - Render one source at every density, or delete its outputs

pub mod batch;
pub mod convert;
pub mod events;
pub mod watch;

pub use batch::{BatchOptions, BatchReport, BatchUseCase};
pub use convert::{ConvertReport, IconConverter, RemoveReport, RenderFailure, RenderedOutput};
pub use events::SyncEvent;
pub use watch::{WatchOptions, WatchUseCase, WatcherState};
