//! Closed-key configuration registry.
//!
//! Every value the generation pipeline consumes comes from a fixed set of
//! environment keys. [`Settings::from_env`] is all-or-nothing: it reads
//! every key up front and fails with the complete list of missing or empty
//! ones, so a generation run never dies halfway because a key it only
//! needed late was never set.
//!
//! There is no global instance. The CLI builds one `Settings`, wraps it in
//! an `Arc`, and hands it to every component that needs it.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{GenError, GenResult};

/// The closed set of configuration keys.
///
/// Unknown keys are unrepresentable: there is no string-based lookup, so a
/// typo in a key name is a compile error, not a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ProjectName,
    ProjectDescription,
    OutputRoot,
    BackendType,
    BackendPort,
    BeVersion,
    GroupId,
    JavaVersion,
    SpringbootVersion,
    SwaggerVersion,
    DatabaseType,
    DatabasePort,
    DatabaseUsr,
    DatabasePassword,
    DatabaseName,
    DatabaseHost,
    DatabaseUri,
    FrontendPort,
    AngularVersion,
    UiLibrary,
    LogLevel,
    CommandTimeoutSecs,
    EnableGenerateFrontend,
    EnableGenerateBackend,
    EnableGenerateDocker,
    EnableGenerateReadme,
    EnableActuator,
    EnableLombok,
    EnableValidator,
    EnableSwagger,
    EnableSamples,
}

impl ConfigKey {
    /// Every key, in the order they are reported when missing.
    pub const ALL: [ConfigKey; 31] = [
        Self::ProjectName,
        Self::ProjectDescription,
        Self::OutputRoot,
        Self::BackendType,
        Self::BackendPort,
        Self::BeVersion,
        Self::GroupId,
        Self::JavaVersion,
        Self::SpringbootVersion,
        Self::SwaggerVersion,
        Self::DatabaseType,
        Self::DatabasePort,
        Self::DatabaseUsr,
        Self::DatabasePassword,
        Self::DatabaseName,
        Self::DatabaseHost,
        Self::DatabaseUri,
        Self::FrontendPort,
        Self::AngularVersion,
        Self::UiLibrary,
        Self::LogLevel,
        Self::CommandTimeoutSecs,
        Self::EnableGenerateFrontend,
        Self::EnableGenerateBackend,
        Self::EnableGenerateDocker,
        Self::EnableGenerateReadme,
        Self::EnableActuator,
        Self::EnableLombok,
        Self::EnableValidator,
        Self::EnableSwagger,
        Self::EnableSamples,
    ];

    /// The environment variable this key is read from.
    pub fn env_name(self) -> &'static str {
        match self {
            Self::ProjectName => "PROJECT_NAME",
            Self::ProjectDescription => "PROJECT_DESCRIPTION",
            Self::OutputRoot => "OUTPUT_ROOT",
            Self::BackendType => "BACKEND_TYPE",
            Self::BackendPort => "BACKEND_PORT",
            Self::BeVersion => "BE_VERSION",
            Self::GroupId => "GROUP_ID",
            Self::JavaVersion => "JAVA_VERSION",
            Self::SpringbootVersion => "SPRINGBOOT_VERSION",
            Self::SwaggerVersion => "SWAGGER_VERSION",
            Self::DatabaseType => "DATABASE_TYPE",
            Self::DatabasePort => "DATABASE_PORT",
            Self::DatabaseUsr => "DATABASE_USR",
            Self::DatabasePassword => "DATABASE_PASSWORD",
            Self::DatabaseName => "DATABASE_NAME",
            Self::DatabaseHost => "DATABASE_HOST",
            Self::DatabaseUri => "DATABASE_URI",
            Self::FrontendPort => "FRONTEND_PORT",
            Self::AngularVersion => "ANGULAR_VERSION",
            Self::UiLibrary => "UI_LIBRARY",
            Self::LogLevel => "LOG_LEVEL",
            Self::CommandTimeoutSecs => "COMMAND_TIMEOUT_SECS",
            Self::EnableGenerateFrontend => "ENABLE_GENERATE_FRONTEND",
            Self::EnableGenerateBackend => "ENABLE_GENERATE_BACKEND",
            Self::EnableGenerateDocker => "ENABLE_GENERATE_DOCKER",
            Self::EnableGenerateReadme => "ENABLE_GENERATE_README",
            Self::EnableActuator => "ENABLE_ACTUATOR",
            Self::EnableLombok => "ENABLE_LOMBOK",
            Self::EnableValidator => "ENABLE_VALIDATOR",
            Self::EnableSwagger => "ENABLE_SWAGGER",
            Self::EnableSamples => "ENABLE_SAMPLES",
        }
    }
}

/// Immutable, complete configuration for one generation run.
#[derive(Debug, Clone)]
pub struct Settings {
    values: HashMap<ConfigKey, String>,
}

impl Settings {
    /// Build from the process environment. All keys are read eagerly;
    /// missing or empty ones are collected and reported together.
    pub fn from_env() -> GenResult<Self> {
        Self::from_env_with(None)
    }

    /// Build from the process environment, with an optional project-name
    /// override (the CLI's positional argument wins over `PROJECT_NAME`).
    pub fn from_env_with(project_name: Option<&str>) -> GenResult<Self> {
        let mut values = HashMap::with_capacity(ConfigKey::ALL.len());
        let mut missing = Vec::new();

        for key in ConfigKey::ALL {
            let value = match key {
                ConfigKey::ProjectName if project_name.is_some() => {
                    project_name.map(str::to_owned)
                }
                _ => std::env::var(key.env_name()).ok(),
            };
            match value {
                Some(v) if !v.trim().is_empty() => {
                    values.insert(key, v);
                }
                _ => missing.push(key.env_name().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(GenError::Config { keys: missing });
        }

        tracing::debug!(keys = values.len(), "settings loaded from environment");
        Ok(Self { values })
    }

    /// Build from explicit entries. Completeness is still enforced, so a
    /// partially-populated map fails the same way a partial environment does.
    pub fn from_entries<I, S>(entries: I) -> GenResult<Self>
    where
        I: IntoIterator<Item = (ConfigKey, S)>,
        S: Into<String>,
    {
        let provided: HashMap<ConfigKey, String> =
            entries.into_iter().map(|(k, v)| (k, v.into())).collect();

        let mut values = HashMap::with_capacity(ConfigKey::ALL.len());
        let mut missing = Vec::new();
        for key in ConfigKey::ALL {
            match provided.get(&key) {
                Some(v) if !v.trim().is_empty() => {
                    values.insert(key, v.clone());
                }
                _ => missing.push(key.env_name().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(GenError::Config { keys: missing });
        }
        Ok(Self { values })
    }

    /// Look up a value. Infallible: construction guaranteed every key.
    pub fn get(&self, key: ConfigKey) -> &str {
        self.values
            .get(&key)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Boolean flag semantics: exactly the string `true` enables.
    pub fn flag(&self, key: ConfigKey) -> bool {
        self.get(key) == "true"
    }

    /// Project name (possibly CLI-overridden).
    pub fn project_name(&self) -> &str {
        self.get(ConfigKey::ProjectName)
    }

    /// Directory under which the project root is created.
    pub fn output_root(&self) -> PathBuf {
        PathBuf::from(self.get(ConfigKey::OutputRoot))
    }

    /// External-command timeout, parsed from `COMMAND_TIMEOUT_SECS`.
    pub fn command_timeout(&self) -> GenResult<std::time::Duration> {
        let raw = self.get(ConfigKey::CommandTimeoutSecs);
        raw.parse::<u64>()
            .map(std::time::Duration::from_secs)
            .map_err(|_| GenError::Strategy {
                key: "COMMAND_TIMEOUT_SECS",
                value: raw.to_string(),
            })
    }

    /// Snapshot of every key/value for the dry-run plan, with the database
    /// password masked.
    pub fn redacted(&self) -> std::collections::BTreeMap<&'static str, String> {
        ConfigKey::ALL
            .iter()
            .map(|&key| {
                let value = if key == ConfigKey::DatabasePassword {
                    "********".to_string()
                } else {
                    self.get(key).to_string()
                };
                (key.env_name(), value)
            })
            .collect()
    }
}
