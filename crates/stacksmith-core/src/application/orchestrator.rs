//! The generation pipeline.
//!
//! Stages run in a fixed order: lock, workspace reset, frontend, backend,
//! compose document, README. Every stage after the reset is gated by its
//! `ENABLE_GENERATE_*` flag; a disabled stage logs a skip and the run
//! continues. Any error aborts the run where it happened — output already
//! on disk stays there, nothing is rolled back.
//!
//! The reset is destructive by design: an existing project root is deleted
//! and recreated, every run starts from a blank slate.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::generator::Generator;
use crate::application::generators::{FrontendGenerator, ReadmeGenerator};
use crate::application::ports::{CommandRunner, Filesystem};
use crate::application::{selector, Workspace};
use crate::domain::compose;
use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::GenerationTarget;
use crate::error::{GenError, GenResult};

/// Holds the lock file for the duration of a run. Removed on drop, so both
/// success and failure release it.
struct WorkspaceLock {
    fs: Arc<dyn Filesystem>,
    path: PathBuf,
}

impl WorkspaceLock {
    fn acquire(fs: Arc<dyn Filesystem>, path: PathBuf) -> GenResult<Self> {
        if fs.exists(&path) {
            return Err(GenError::WorkspaceLocked { path });
        }
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&path, &format!("pid={}\n", std::process::id()))?;
        Ok(Self { fs, path })
    }
}

impl Drop for WorkspaceLock {
    fn drop(&mut self) {
        if let Err(e) = self.fs.remove_file(&self.path) {
            warn!("failed to remove lock file {}: {e}", self.path.display());
        }
    }
}

/// Drives one generation run end to end.
pub struct Orchestrator {
    settings: Arc<Settings>,
    workspace: Workspace,
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl Orchestrator {
    pub fn new(
        settings: Arc<Settings>,
        fs: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let workspace = Workspace::new(&settings.output_root(), settings.project_name());
        Self {
            settings,
            workspace,
            fs,
            runner,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Run every enabled stage. See the module docs for ordering.
    #[instrument(skip_all, fields(project = %self.workspace.project_name))]
    pub fn run(&self) -> GenResult<()> {
        let _lock = WorkspaceLock::acquire(self.fs.clone(), self.workspace.lock_path())?;
        self.reset_workspace()?;

        // All selection happens up front: a bad selector value fails the
        // run here, after the reset but before any stage writes a file.
        let target = GenerationTarget::from_settings(&self.settings)?;
        let frontend = FrontendGenerator::new(
            self.settings.clone(),
            self.workspace.clone(),
            target.ui,
            self.fs.clone(),
            self.runner.clone(),
        );
        let backend =
            selector::select_backend(&self.settings, &self.workspace, &self.fs, &self.runner)?;
        let database = selector::select_database(&self.settings)?;

        if self.settings.flag(ConfigKey::EnableGenerateFrontend) {
            frontend.ensure_directories()?;
            frontend.generate()?;
        } else {
            info!(stage = "frontend", "stage disabled, skipping");
        }

        if self.settings.flag(ConfigKey::EnableGenerateBackend) {
            backend.ensure_directories()?;
            backend.generate()?;
            if let Some(db) = &database {
                db.ensure_directories()?;
                db.generate()?;
            }
        } else {
            info!(stage = "backend", "stage disabled, skipping");
        }

        if self.settings.flag(ConfigKey::EnableGenerateDocker) {
            let document = self.compose_document(&frontend, backend.as_ref(), database.as_deref())?;
            self.fs
                .write_file(&self.workspace.root.join("docker-compose.yml"), &document)?;
        } else {
            info!(stage = "docker", "stage disabled, skipping");
        }

        if self.settings.flag(ConfigKey::EnableGenerateReadme) {
            ReadmeGenerator::new(
                self.settings.clone(),
                self.workspace.clone(),
                target,
                self.fs.clone(),
            )
            .generate()?;
        } else {
            info!(stage = "readme", "stage disabled, skipping");
        }

        info!("generation complete at {}", self.workspace.root.display());
        Ok(())
    }

    /// Delete and recreate the project root.
    fn reset_workspace(&self) -> GenResult<()> {
        let root = &self.workspace.root;
        if self.fs.exists(root) {
            warn!("removing existing workspace {}", root.display());
            self.fs.remove_dir_all(root)?;
        }
        self.fs.create_dir_all(root)
    }

    /// The compose document always describes the full stack, independent of
    /// which generation stages were enabled; fragments come from the same
    /// producers that generate the services.
    fn compose_document(
        &self,
        frontend: &FrontendGenerator,
        backend: &dyn Generator,
        database: Option<&dyn Generator>,
    ) -> GenResult<String> {
        let project = &self.workspace.project_name;
        let mut fragments = vec![
            compose::header(),
            frontend.aux_generate()?,
            backend.aux_generate()?,
        ];
        if let Some(db) = database {
            fragments.push(db.aux_generate()?);
            fragments.push(compose::volumes_section(project));
        }
        fragments.push(compose::networks_section(project));
        Ok(compose::assemble(&fragments))
    }
}
