//! Recording command runner for tests.
//!
//! Succeeds every call by default while keeping a log of what was invoked,
//! so orchestrator tests can assert on the external-tool conversation
//! without touching npm or maven. An optional failure trigger simulates a
//! broken collaborator.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use stacksmith_core::error::GenResult;
use stacksmith_core::prelude::{CommandOutput, CommandRunner};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl RecordedCall {
    /// The full command line, for substring assertions.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Command runner that records calls and answers success.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<RecordedCall>>,
    fail_matching: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer exit status 1 for any command line containing `pattern`.
    pub fn failing_on(pattern: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_matching: Some(pattern.into()),
        }
    }

    /// Snapshot of everything invoked so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether any call's command line contains `pattern`.
    pub fn invoked(&self, pattern: &str) -> bool {
        self.calls()
            .iter()
            .any(|call| call.command_line().contains(pattern))
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GenResult<CommandOutput> {
        let call = RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        };
        let command_line = call.command_line();
        self.calls.lock().unwrap().push(call);

        let fails = self
            .fail_matching
            .as_deref()
            .is_some_and(|pattern| command_line.contains(pattern));

        Ok(if fails {
            CommandOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: format!("simulated failure for '{command_line}'"),
            }
        } else {
            CommandOutput {
                status: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_program_args_and_cwd() {
        let runner = RecordingRunner::new();
        runner
            .run("npm", &["install", "express"], Path::new("/work"))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "npm");
        assert_eq!(calls[0].cwd, PathBuf::from("/work"));
        assert!(runner.invoked("npm install express"));
    }

    #[test]
    fn failure_trigger_matches_on_the_command_line() {
        let runner = RecordingRunner::failing_on("mvn");
        let ok = runner.run("npm", &["init", "-y"], Path::new("/w")).unwrap();
        assert!(ok.success());
        let bad = runner.run("mvn", &["-q", "validate"], Path::new("/w")).unwrap();
        assert_eq!(bad.status, Some(1));
        assert!(bad.stderr.contains("simulated failure"));
    }
}
