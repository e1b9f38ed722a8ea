//! External process adapters.

pub mod recording;
pub mod runner;

pub use recording::{RecordedCall, RecordingRunner};
pub use runner::ProcessRunner;
