//! Shared test fixtures for the Strobe workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod solvers;

pub use solvers::{temp_path, ConstSolver, RampSolver};
