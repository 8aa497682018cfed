//! Domain Layer
//!
//! Pure bundling rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ComponentName, PathRedirect, ExclusionList, OutputSpec)
//! - `services/` - Inventory resolution, redirect/exclusion builders, license header
//! - `ports/` - Interface definitions for infrastructure (components, flattening engine, file system)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
