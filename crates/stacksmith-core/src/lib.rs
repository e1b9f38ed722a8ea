//! # Stacksmith Core
//!
//! Configuration-driven generation engine for multi-service projects.
//! The domain layer holds pure types and computations (settings registry,
//! template substitution, name derivation, compose assembly); the
//! application layer holds the producers, strategy selection, and the
//! orchestrator. All I/O goes through the ports in
//! [`application::ports`] — this crate never touches the filesystem or
//! spawns a process directly.

pub mod application;
pub mod domain;
pub mod error;

/// Commonly used items, re-exported for consumers.
pub mod prelude {
    pub use crate::application::ports::{CommandOutput, CommandRunner, Filesystem};
    pub use crate::application::{Generator, Orchestrator, Workspace};
    pub use crate::domain::{
        BackendKind, ConfigKey, DatabaseKind, GenerationTarget, Settings, UiLibrary,
    };
    pub use crate::error::{ErrorCategory, GenError, GenResult};
}
