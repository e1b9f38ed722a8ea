//! Infrastructure adapters for Stacksmith.
//!
//! This crate implements the ports defined in
//! `stacksmith_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ProcessRunner, RecordingRunner};
