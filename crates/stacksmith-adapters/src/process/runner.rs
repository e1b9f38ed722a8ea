//! Synchronous process execution with a hard timeout.
//!
//! External tools (npm, npx, mvn) are collaborators we cannot trust to
//! terminate: a registry outage can leave `npm install` hanging forever.
//! The runner polls the child and kills it once the configured timeout
//! elapses, surfacing the timeout as an error instead of a hung run.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use stacksmith_core::error::{GenError, GenResult};
use stacksmith_core::prelude::{CommandOutput, CommandRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Real process runner with kill-on-timeout.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Drain a stdio stream on its own thread so a chatty child never blocks
/// on a full pipe buffer while we wait for it.
fn drain<R: Read + Send + 'static>(stream: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_string(&mut buf);
        }
        buf
    })
}

fn describe(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

impl ProcessRunner {
    fn wait_with_timeout(&self, child: &mut Child, command: &str) -> GenResult<Option<i32>> {
        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status.code()),
                Ok(None) => {
                    if started.elapsed() >= self.timeout {
                        warn!(command, "timeout exceeded, killing process");
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(GenError::ExternalProcess {
                            command: command.to_string(),
                            detail: format!("timed out after {}s", self.timeout.as_secs()),
                        });
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    return Err(GenError::ExternalProcess {
                        command: command.to_string(),
                        detail: format!("wait failed: {e}"),
                    });
                }
            }
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> GenResult<CommandOutput> {
        let command = describe(program, args);
        debug!(%command, cwd = %cwd.display(), "running external command");

        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GenError::ExternalProcess {
                command: command.clone(),
                detail: format!("failed to spawn: {e}"),
            })?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = self.wait_with_timeout(&mut child, &command)?;

        Ok(CommandOutput {
            status,
            stdout: stdout.join().unwrap_or_default(),
            stderr: stderr.join().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn runner() -> ProcessRunner {
        ProcessRunner::new(Duration::from_secs(5))
    }

    fn cwd() -> PathBuf {
        std::env::temp_dir()
    }

    #[test]
    fn captures_stdout_of_a_successful_command() {
        let out = runner().run("sh", &["-c", "echo hello"], &cwd()).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn non_zero_exit_is_reported_in_status() {
        let out = runner().run("sh", &["-c", "echo oops >&2; exit 3"], &cwd()).unwrap();
        assert_eq!(out.status, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[test]
    fn run_checked_turns_failure_into_an_error() {
        let err = runner()
            .run_checked("sh", &["-c", "exit 1"], &cwd())
            .unwrap_err();
        assert!(matches!(err, GenError::ExternalProcess { .. }));
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let err = runner()
            .run("definitely-not-a-real-binary", &[], &cwd())
            .unwrap_err();
        assert!(err.to_string().contains("failed to spawn"));
    }

    #[test]
    fn hung_process_is_killed_at_the_timeout() {
        let short = ProcessRunner::new(Duration::from_millis(200));
        let started = Instant::now();
        let err = short.run("sh", &["-c", "sleep 30"], &cwd()).unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(10));
        match err {
            GenError::ExternalProcess { detail, .. } => assert!(detail.contains("timed out")),
            other => panic!("expected ExternalProcess error, got {other:?}"),
        }
    }
}
