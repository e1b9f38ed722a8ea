//! Application layer: generators, strategy selection, and the orchestrator.

pub mod generator;
pub mod generators;
pub mod orchestrator;
pub mod ports;
pub mod selector;

pub use generator::Generator;
pub use orchestrator::Orchestrator;

use std::path::{Path, PathBuf};

use crate::domain::naming;

/// Resolved output locations for one run.
///
/// Derived once from `OUTPUT_ROOT` and the project name; every generator
/// receives the same instance, so nobody re-derives paths from raw strings.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub project_name: String,
    /// `<OUTPUT_ROOT>/<ProjectName>`
    pub root: PathBuf,
    /// `<root>/<ProjectName>FE`
    pub frontend_path: PathBuf,
    /// `<root>/<ProjectName>BE`
    pub backend_path: PathBuf,
}

impl Workspace {
    pub fn new(output_root: &Path, project_name: &str) -> Self {
        let root = output_root.join(project_name);
        Self {
            project_name: project_name.to_string(),
            frontend_path: root.join(naming::frontend_dir(project_name)),
            backend_path: root.join(naming::backend_dir(project_name)),
            root,
        }
    }

    /// Lock file guarding this root, created as a sibling so that deleting
    /// the root during the workspace reset never deletes the lock.
    pub fn lock_path(&self) -> PathBuf {
        let mut os = self.root.clone().into_os_string();
        os.push(".lock");
        PathBuf::from(os)
    }
}
