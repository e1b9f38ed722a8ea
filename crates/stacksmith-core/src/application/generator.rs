//! The capability contract every artifact producer implements.

use crate::error::GenResult;

/// One producer in the generation pipeline.
///
/// The orchestrator drives producers through this trait alone and never
/// branches on the concrete type behind it. Not every producer needs every
/// capability: directory preparation defaults to a no-op, and a producer
/// whose entire output is a compose fragment (the databases) has a no-op
/// `generate`. None of the capabilities ever answers "not implemented" —
/// doing nothing successfully is the contract for a capability a producer
/// does not use.
pub trait Generator: Send + Sync {
    /// Create the directory skeleton this producer writes into. Idempotent.
    fn ensure_directories(&self) -> GenResult<()> {
        Ok(())
    }

    /// Produce the artifact subtree on the filesystem.
    fn generate(&self) -> GenResult<()>;

    /// Produce this service's docker-compose fragment.
    fn aux_generate(&self) -> GenResult<String>;
}

impl std::fmt::Debug for dyn Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Generator")
    }
}
