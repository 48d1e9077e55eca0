//! Domain Layer
//!
//! Pure rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Density, FileChange)
//! - `services/` - Path mapping and the incremental sync policy
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Only `PathMapper` construction resolves the input root once
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
