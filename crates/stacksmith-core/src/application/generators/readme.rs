//! Top-level README producer. Pure interpolation, no external tools.

use std::sync::Arc;

use tracing::info;

use crate::application::generator::Generator;
use crate::application::ports::Filesystem;
use crate::application::Workspace;
use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::{BackendKind, DatabaseKind, GenerationTarget};
use crate::domain::{naming, template, Substitutions};
use crate::error::GenResult;

const README: &str = r#"# {{projectName}}

{{description}}

Generated by [stacksmith](https://github.com/cosecruz/stacksmith).

## Layout

| Directory | Contents |
|-----------|----------|
| `{{feDir}}/` | Angular frontend |
| `{{beDir}}/` | {{backendLabel}} backend |

Database: {{databaseLabel}}

## Running the stack

```bash
docker compose up --build
```

Frontend: http://localhost:{{frontendPort}}
Backend:  http://localhost:{{backendPort}}

Re-running the generator deletes and recreates this directory.
"#;

/// Produces the project-level `README.md`.
pub struct ReadmeGenerator {
    settings: Arc<Settings>,
    workspace: Workspace,
    target: GenerationTarget,
    fs: Arc<dyn Filesystem>,
}

impl ReadmeGenerator {
    pub fn new(
        settings: Arc<Settings>,
        workspace: Workspace,
        target: GenerationTarget,
        fs: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            settings,
            workspace,
            target,
            fs,
        }
    }

    fn substitutions(&self) -> Substitutions {
        let project = &self.workspace.project_name;
        let backend_label = match self.target.backend {
            BackendKind::Node => "Express + TypeScript",
            BackendKind::SpringBoot => "Spring Boot",
        };
        let database_label = match self.target.database {
            DatabaseKind::Postgres => "PostgreSQL",
            DatabaseKind::Mongo => "MongoDB",
            DatabaseKind::None => "none",
        };
        Substitutions::new()
            .with("projectName", project.clone())
            .with("description", self.settings.get(ConfigKey::ProjectDescription))
            .with("feDir", naming::frontend_dir(project))
            .with("beDir", naming::backend_dir(project))
            .with("backendLabel", backend_label)
            .with("databaseLabel", database_label)
            .with("frontendPort", self.settings.get(ConfigKey::FrontendPort))
            .with("backendPort", self.settings.get(ConfigKey::BackendPort))
    }
}

impl Generator for ReadmeGenerator {
    fn generate(&self) -> GenResult<()> {
        info!("writing project README");
        let rendered = template::render("README.md", README, &self.substitutions())?;
        self.fs
            .write_file(&self.workspace.root.join("README.md"), &rendered)
    }

    /// The README is not a service; it contributes nothing to the compose
    /// document.
    fn aux_generate(&self) -> GenResult<String> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generators::stubs::NullFs;
    use crate::domain::testkit::settings;
    use std::path::Path;

    #[test]
    fn readme_interpolates_project_facts() {
        let settings = Arc::new(settings());
        let target = GenerationTarget::from_settings(&settings).unwrap();
        let generator = ReadmeGenerator::new(
            settings,
            Workspace::new(Path::new("/tmp/out"), "Demo"),
            target,
            Arc::new(NullFs),
        );
        let rendered =
            template::render("README.md", README, &generator.substitutions()).unwrap();
        assert!(rendered.contains("# Demo"));
        assert!(rendered.contains("A demo project"));
        assert!(rendered.contains("`DemoBE/`"));
        assert!(rendered.contains("Express + TypeScript"));
        assert!(rendered.contains("PostgreSQL"));
        assert!(rendered.contains("localhost:4200"));
        assert!(!rendered.contains("{{"));
    }
}
