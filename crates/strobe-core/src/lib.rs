//! Core types for the Strobe simulation diagnostics framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the simulation clock, the named field resources diagnostics observe,
//! the catalog those resources are published through, and the core
//! error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod field;

pub use clock::SimClock;
pub use error::{ClockError, FieldError};
pub use field::{Field, FieldHandle, ResourceCatalog};
