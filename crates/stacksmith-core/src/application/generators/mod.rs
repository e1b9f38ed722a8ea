//! Artifact producers, one module per service family.

pub mod database;
pub mod frontend;
pub mod node;
pub mod readme;
pub mod springboot;

pub use database::{MongoGenerator, PostgresGenerator};
pub use frontend::FrontendGenerator;
pub use node::NodeBackendGenerator;
pub use readme::ReadmeGenerator;
pub use springboot::SpringBootBackendGenerator;

use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::DatabaseKind;
use crate::domain::{naming, template, Substitutions};
use crate::error::GenResult;

const BACKEND_FRAGMENT: &str = r#"  {{beService}}:
    build:
      context: ./{{beDir}}
      dockerfile: Dockerfile
    container_name: {{beService}}
    restart: always
    ports:
      - "{{backendPort}}:{{backendPort}}"
    networks:
      - {{network}}"#;

const BACKEND_DEPENDS_ON: &str = r#"
    depends_on:
      - {{dbService}}"#;

/// Compose fragment for the backend service, shared by both backend
/// flavors. The `depends_on` block only appears when a database service
/// will exist in the same document.
pub(crate) fn backend_fragment(settings: &Settings, database: DatabaseKind) -> GenResult<String> {
    let project = settings.project_name();
    let subs = Substitutions::new()
        .with("beService", naming::backend_service(project))
        .with("beDir", naming::backend_dir(project))
        .with("backendPort", settings.get(ConfigKey::BackendPort))
        .with("network", naming::network(project))
        .with("dbService", naming::database_service(project));

    let mut fragment = template::render("compose/backend", BACKEND_FRAGMENT, &subs)?;
    if database != DatabaseKind::None {
        fragment.push_str(&template::render(
            "compose/backend-depends",
            BACKEND_DEPENDS_ON,
            &subs,
        )?);
    }
    Ok(fragment)
}

/// No-op port implementations for unit tests that only exercise pure logic.
#[cfg(test)]
pub(crate) mod stubs {
    use std::path::Path;

    use crate::application::ports::{CommandOutput, CommandRunner, Filesystem};
    use crate::error::{GenError, GenResult};

    pub(crate) struct NullFs;

    impl Filesystem for NullFs {
        fn create_dir_all(&self, _: &Path) -> GenResult<()> {
            Ok(())
        }
        fn write_file(&self, _: &Path, _: &str) -> GenResult<()> {
            Ok(())
        }
        fn read_file(&self, path: &Path) -> GenResult<String> {
            Err(GenError::Filesystem {
                path: path.to_path_buf(),
                reason: "not found".into(),
            })
        }
        fn exists(&self, _: &Path) -> bool {
            false
        }
        fn remove_file(&self, _: &Path) -> GenResult<()> {
            Ok(())
        }
        fn remove_dir_all(&self, _: &Path) -> GenResult<()> {
            Ok(())
        }
    }

    pub(crate) struct NullRunner;

    impl CommandRunner for NullRunner {
        fn run(&self, _: &str, _: &[&str], _: &Path) -> GenResult<CommandOutput> {
            Ok(CommandOutput {
                status: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testkit::settings;

    #[test]
    fn backend_fragment_names_agree_with_naming_helpers() {
        let fragment = backend_fragment(&settings(), DatabaseKind::Postgres).unwrap();
        assert!(fragment.contains("demobe:"));
        assert!(fragment.contains("context: ./DemoBE"));
        assert!(fragment.contains("\"3000:3000\""));
        assert!(fragment.contains("- demo-network"));
        assert!(fragment.contains("- demodb"));
    }

    #[test]
    fn backend_fragment_omits_depends_on_without_a_database() {
        let fragment = backend_fragment(&settings(), DatabaseKind::None).unwrap();
        assert!(!fragment.contains("depends_on"));
    }
}
