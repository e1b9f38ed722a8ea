//! Spring Boot backend producer.
//!
//! A Maven project is written file by file: assembled `pom.xml`,
//! per-database `application.properties`, the application class, and —
//! when samples are enabled and a database exists — a CRUD vertical slice
//! for the default `User` entity, all four layers rendered from the same
//! substitution map so the entity id type can never diverge between them.

pub mod pom;
pub mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::generator::Generator;
use crate::application::generators::backend_fragment;
use crate::application::ports::{CommandRunner, Filesystem};
use crate::application::Workspace;
use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::DatabaseKind;
use crate::domain::{naming, template, Substitutions};
use crate::error::GenResult;

const PACKAGE_DIRS: [&str; 8] = [
    "config",
    "controller",
    "dto",
    "exception",
    "model",
    "repository",
    "service",
    "util",
];

/// Spring Boot backend producer.
pub struct SpringBootBackendGenerator {
    settings: Arc<Settings>,
    workspace: Workspace,
    database: DatabaseKind,
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl SpringBootBackendGenerator {
    pub fn new(
        settings: Arc<Settings>,
        workspace: Workspace,
        database: DatabaseKind,
        fs: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            settings,
            workspace,
            database,
            fs,
            runner,
        }
    }

    fn java_package(&self) -> String {
        naming::java_package(
            self.settings.get(ConfigKey::GroupId),
            &self.workspace.project_name,
        )
    }

    /// `src/main/java/<package path>` under the backend directory.
    fn package_root(&self) -> PathBuf {
        let package_path = self.java_package().replace('.', "/");
        self.workspace
            .backend_path
            .join("src/main/java")
            .join(package_path)
    }

    fn application_class(&self) -> String {
        format!("{}Application", naming::capitalize(&self.workspace.project_name))
    }

    fn write_build_files(&self) -> GenResult<()> {
        let be = &self.workspace.backend_path;
        self.fs
            .write_file(&be.join("pom.xml"), &pom::build_pom(&self.settings, self.database)?)?;
        self.fs.write_file(&be.join(".gitignore"), templates::GITIGNORE)?;

        let properties_template = match self.database {
            DatabaseKind::Postgres => templates::PROPERTIES_POSTGRES,
            DatabaseKind::Mongo => templates::PROPERTIES_MONGO,
            DatabaseKind::None => templates::PROPERTIES_PLAIN,
        };
        let subs = Substitutions::new()
            .with("backendPort", self.settings.get(ConfigKey::BackendPort))
            .with("dbHost", self.settings.get(ConfigKey::DatabaseHost))
            .with("dbPort", self.settings.get(ConfigKey::DatabasePort))
            .with("dbName", self.settings.get(ConfigKey::DatabaseName))
            .with("dbUser", self.settings.get(ConfigKey::DatabaseUsr))
            .with("dbPassword", self.settings.get(ConfigKey::DatabasePassword))
            .with("dbUri", self.settings.get(ConfigKey::DatabaseUri));
        self.fs.write_file(
            &be.join("src/main/resources/application.properties"),
            &template::render("springboot/application.properties", properties_template, &subs)?,
        )
    }

    fn write_application_class(&self) -> GenResult<()> {
        let subs = Substitutions::new()
            .with("packageName", self.java_package())
            .with("applicationClass", self.application_class());
        let rendered = template::render("springboot/Application.java", templates::MAIN_CLASS, &subs)?;
        self.fs.write_file(
            &self.package_root().join(format!("{}.java", self.application_class())),
            &rendered,
        )
    }

    /// CRUD slice for the default `User` entity. One substitution map is
    /// rendered against all four templates; `idType` comes from the
    /// database flavor alone.
    fn write_samples(&self) -> GenResult<()> {
        let Some(id_type) = self.database.id_type() else {
            debug!("no database selected, skipping sample entity");
            return Ok(());
        };

        let subs = Substitutions::new()
            .with("className", "User")
            .with("tableName", "users")
            .with("packageName", self.java_package())
            .with("idType", id_type);

        let (model, repository) = match self.database {
            DatabaseKind::Postgres => (templates::MODEL_POSTGRES, templates::REPOSITORY_POSTGRES),
            DatabaseKind::Mongo => (templates::MODEL_MONGO, templates::REPOSITORY_MONGO),
            DatabaseKind::None => unreachable!("guarded by id_type above"),
        };

        let root = self.package_root();
        let files = [
            ("model/User.java", "springboot/model", model),
            ("repository/UserRepository.java", "springboot/repository", repository),
            ("service/UserService.java", "springboot/service", templates::SERVICE),
            ("controller/UserController.java", "springboot/controller", templates::CONTROLLER),
        ];
        for (rel_path, name, tpl) in files {
            self.fs
                .write_file(&root.join(rel_path), &template::render(name, tpl, &subs)?)?;
        }
        Ok(())
    }
}

impl Generator for SpringBootBackendGenerator {
    fn ensure_directories(&self) -> GenResult<()> {
        let be = &self.workspace.backend_path;
        let package_root = self.package_root();
        for dir in PACKAGE_DIRS {
            self.fs.create_dir_all(&package_root.join(dir))?;
        }
        self.fs.create_dir_all(&be.join("src/main/resources"))?;
        self.fs.create_dir_all(
            &be.join("src/test/java")
                .join(self.java_package().replace('.', "/")),
        )?;
        debug!(path = %be.display(), "spring boot directories ready");
        Ok(())
    }

    fn generate(&self) -> GenResult<()> {
        info!(
            database = %self.database,
            "generating spring boot backend in {}",
            self.workspace.backend_path.display()
        );
        self.write_build_files()?;
        self.write_application_class()?;
        if self.settings.flag(ConfigKey::EnableSamples) {
            self.write_samples()?;
        }
        self.runner
            .run_checked("mvn", &["-q", "validate"], &self.workspace.backend_path)?;
        Ok(())
    }

    fn aux_generate(&self) -> GenResult<String> {
        backend_fragment(&self.settings, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testkit::settings_with;
    use std::path::Path;

    fn generator(database: DatabaseKind) -> SpringBootBackendGenerator {
        let settings = settings_with(&[(ConfigKey::BackendType, "springboot")]);
        SpringBootBackendGenerator {
            settings: Arc::new(settings),
            workspace: Workspace::new(Path::new("/tmp/out"), "Demo"),
            database,
            fs: Arc::new(crate::application::generators::stubs::NullFs),
            runner: Arc::new(crate::application::generators::stubs::NullRunner),
        }
    }

    #[test]
    fn package_root_folds_group_and_backend_dir() {
        let g = generator(DatabaseKind::Postgres);
        assert_eq!(
            g.package_root(),
            PathBuf::from("/tmp/out/Demo/DemoBE/src/main/java/com/example/demobe")
        );
    }

    #[test]
    fn application_class_capitalizes_the_project() {
        let g = generator(DatabaseKind::Postgres);
        assert_eq!(g.application_class(), "DemoApplication");
    }

    #[test]
    fn sample_slice_shares_one_id_type_postgres() {
        let subs = Substitutions::new()
            .with("className", "User")
            .with("tableName", "users")
            .with("packageName", "com.example.demobe")
            .with("idType", "Long");
        for (name, tpl) in [
            ("model", templates::MODEL_POSTGRES),
            ("repository", templates::REPOSITORY_POSTGRES),
            ("service", templates::SERVICE),
            ("controller", templates::CONTROLLER),
        ] {
            let out = template::render(name, tpl, &subs).unwrap();
            assert!(!out.contains("{{"), "{name} left a token behind");
            assert!(!out.contains("String id"), "{name} leaked a String id");
        }
        let repo = template::render("r", templates::REPOSITORY_POSTGRES, &subs).unwrap();
        assert!(repo.contains("JpaRepository<User, Long>"));
    }

    #[test]
    fn sample_slice_uses_string_ids_for_mongo() {
        let subs = Substitutions::new()
            .with("className", "User")
            .with("tableName", "users")
            .with("packageName", "com.example.demobe")
            .with("idType", "String");
        let repo = template::render("r", templates::REPOSITORY_MONGO, &subs).unwrap();
        assert!(repo.contains("MongoRepository<User, String>"));
        let controller = template::render("c", templates::CONTROLLER, &subs).unwrap();
        assert!(controller.contains("@PathVariable String id"));
    }
}
