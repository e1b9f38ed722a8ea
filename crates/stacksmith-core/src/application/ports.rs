//! Driven ports: the core's view of the outside world.
//!
//! The core never touches `std::fs` or spawns processes itself; it speaks
//! through these traits, and the adapters crate supplies the real
//! implementations (plus in-memory and recording ones for tests).

use std::path::Path;

use crate::error::{GenError, GenResult};

/// Filesystem operations the generators need.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Idempotent.
    fn create_dir_all(&self, path: &Path) -> GenResult<()>;

    /// Write a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> GenResult<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> GenResult<String>;

    /// Whether a file or directory exists at the path.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> GenResult<()>;

    /// Remove a directory tree recursively.
    fn remove_dir_all(&self, path: &Path) -> GenResult<()>;
}

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit status; `None` when the process was killed before exiting
    /// normally (e.g. on timeout).
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Synchronous external command execution with captured output.
///
/// Implementations own the timeout policy; exceeding it must surface as an
/// error, not a hang.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, waiting for completion.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GenResult<CommandOutput>;

    /// Like [`run`](Self::run), but a non-zero exit is an error carrying
    /// the captured stderr. Generators use this exclusively: any failing
    /// collaborator aborts the run.
    fn run_checked(&self, program: &str, args: &[&str], cwd: &Path) -> GenResult<CommandOutput> {
        let output = self.run(program, args, cwd)?;
        if output.success() {
            Ok(output)
        } else {
            Err(GenError::ExternalProcess {
                command: format!("{program} {}", args.join(" ")),
                detail: match output.status {
                    Some(code) => format!("exit status {code}: {}", output.stderr.trim()),
                    None => format!("terminated by signal: {}", output.stderr.trim()),
                },
            })
        }
    }
}
