//! Unified error handling for Stacksmith Core.
//!
//! Every failure in the generation pipeline is fatal: errors propagate
//! unchanged to the orchestrator and from there to the CLI, which maps
//! them to a message and an exit code. There are no retries and no
//! partial-success summaries.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for generation operations.
#[derive(Debug, Error)]
pub enum GenError {
    /// One or more required configuration keys are missing or empty.
    ///
    /// Carries the full list so a user can fix their `.env` in one pass
    /// instead of replaying the run key by key.
    #[error("missing or empty configuration keys: {}", keys.join(", "))]
    Config { keys: Vec<String> },

    /// A selector key held a value no strategy recognises.
    #[error("unrecognized value '{value}' for {key}")]
    Strategy { key: &'static str, value: String },

    /// A template placeholder had no substitution entry.
    #[error("template '{template}' has no substitution for '{{{{{placeholder}}}}}'")]
    Template {
        template: String,
        placeholder: String,
    },

    /// An external command failed, timed out, or could not be spawned.
    #[error("external command '{command}' failed: {detail}")]
    ExternalProcess { command: String, detail: String },

    /// A filesystem operation failed.
    #[error("filesystem operation failed on {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Another run holds the lock for the same project root.
    #[error("workspace is locked by another run (lock file: {path})")]
    WorkspaceLocked { path: PathBuf },
}

impl GenError {
    /// Get the error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Strategy { .. } => ErrorCategory::UserError,
            Self::Template { .. } => ErrorCategory::Internal,
            Self::ExternalProcess { .. } => ErrorCategory::Internal,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::WorkspaceLocked { .. } => ErrorCategory::UserError,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { keys } => {
                let mut out = vec!["Add the missing keys to your environment or .env file:".into()];
                for key in keys {
                    out.push(format!("  • {key}"));
                }
                out
            }
            Self::Strategy { key, value } => vec![
                format!("'{value}' is not a recognised value for {key}"),
                match *key {
                    "BACKEND_TYPE" => "Supported values: node, springboot".into(),
                    "DATABASE_TYPE" => "Supported values: postgres, mongo, none".into(),
                    "UI_LIBRARY" => "Supported values: none, tailwind, bootstrap".into(),
                    _ => "Check the key's documented values".into(),
                },
            ],
            Self::Template { template, .. } => vec![
                format!("Template '{template}' references a value the generator never supplied"),
                "This is a bug in stacksmith, please report it".into(),
            ],
            Self::ExternalProcess { command, .. } => vec![
                format!("The command '{command}' did not complete successfully"),
                "Ensure the tool is installed and on your PATH".into(),
                "Raise COMMAND_TIMEOUT_SECS if the tool is just slow".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Could not touch {}", path.display()),
                "Check permissions and available disk space".into(),
            ],
            Self::WorkspaceLocked { path } => vec![
                "Another stacksmith run is (or was) using this project root".into(),
                format!(
                    "If no other run is active, remove the stale lock: rm {}",
                    path.display()
                ),
            ],
        }
    }
}

/// Error categories for styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (bad selector value, locked workspace).
    UserError,
    /// Configuration error (incomplete environment).
    Configuration,
    /// Internal/system error.
    Internal,
}

/// Convenient result type alias.
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_lists_every_missing_key() {
        let err = GenError::Config {
            keys: vec!["PROJECT_NAME".into(), "DATABASE_TYPE".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("PROJECT_NAME"));
        assert!(msg.contains("DATABASE_TYPE"));
    }

    #[test]
    fn strategy_error_names_key_and_value() {
        let err = GenError::Strategy {
            key: "DATABASE_TYPE",
            value: "oracle".into(),
        };
        assert!(err.to_string().contains("oracle"));
        assert!(err.to_string().contains("DATABASE_TYPE"));
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn template_error_shows_braced_placeholder() {
        let err = GenError::Template {
            template: "pom.xml".into(),
            placeholder: "groupId".into(),
        };
        assert!(err.to_string().contains("{{groupId}}"));
    }

    #[test]
    fn categories_map_as_documented() {
        assert_eq!(
            GenError::Config { keys: vec![] }.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            GenError::WorkspaceLocked {
                path: PathBuf::from("/tmp/x.lock")
            }
            .category(),
            ErrorCategory::UserError
        );
        assert_eq!(
            GenError::ExternalProcess {
                command: "npm".into(),
                detail: "exit status 1".into()
            }
            .category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn strategy_suggestions_list_database_values() {
        let err = GenError::Strategy {
            key: "DATABASE_TYPE",
            value: "oracle".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("postgres")));
    }
}
