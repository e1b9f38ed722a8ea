//! Domain layer: pure types and computations with no I/O.

pub mod compose;
pub mod naming;
pub mod settings;
pub mod target;
pub mod template;

pub use settings::{ConfigKey, Settings};
pub use target::{BackendKind, DatabaseKind, GenerationTarget, UiLibrary};
pub use template::Substitutions;

/// Shared fixtures for unit tests across the crate.
#[cfg(test)]
pub(crate) mod testkit {
    use super::settings::{ConfigKey, Settings};

    /// A complete, internally consistent set of configuration entries for
    /// the "Demo" project: Node backend, Postgres database, no UI library.
    pub(crate) fn complete_entries() -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL
            .iter()
            .map(|&key| {
                let value = match key {
                    ConfigKey::ProjectName => "Demo",
                    ConfigKey::ProjectDescription => "A demo project",
                    ConfigKey::OutputRoot => "/tmp/out",
                    ConfigKey::BackendType => "node",
                    ConfigKey::BackendPort => "3000",
                    ConfigKey::BeVersion => "0.0.1",
                    ConfigKey::GroupId => "com.example",
                    ConfigKey::JavaVersion => "17",
                    ConfigKey::SpringbootVersion => "3.2.4",
                    ConfigKey::SwaggerVersion => "2.5.0",
                    ConfigKey::DatabaseType => "postgres",
                    ConfigKey::DatabasePort => "5432",
                    ConfigKey::DatabaseUsr => "demo_user",
                    ConfigKey::DatabasePassword => "demo_pass",
                    ConfigKey::DatabaseName => "demo_db",
                    ConfigKey::DatabaseHost => "localhost",
                    ConfigKey::DatabaseUri => "mongodb://localhost:27017/demo_db",
                    ConfigKey::FrontendPort => "4200",
                    ConfigKey::AngularVersion => "17",
                    ConfigKey::UiLibrary => "none",
                    ConfigKey::LogLevel => "info",
                    ConfigKey::CommandTimeoutSecs => "300",
                    ConfigKey::EnableGenerateFrontend => "false",
                    ConfigKey::EnableGenerateBackend => "true",
                    ConfigKey::EnableGenerateDocker => "true",
                    ConfigKey::EnableGenerateReadme => "true",
                    ConfigKey::EnableActuator => "false",
                    ConfigKey::EnableLombok => "false",
                    ConfigKey::EnableValidator => "false",
                    ConfigKey::EnableSwagger => "false",
                    ConfigKey::EnableSamples => "true",
                };
                (key, value.to_string())
            })
            .collect()
    }

    /// Settings built from [`complete_entries`] with selected overrides.
    pub(crate) fn settings_with(overrides: &[(ConfigKey, &str)]) -> Settings {
        let mut entries = complete_entries();
        for (key, value) in overrides {
            for (k, v) in &mut entries {
                if k == key {
                    *v = (*value).to_string();
                }
            }
        }
        Settings::from_entries(entries).unwrap()
    }

    /// Settings for the default Demo/Node/Postgres fixture.
    pub(crate) fn settings() -> Settings {
        settings_with(&[])
    }
}
