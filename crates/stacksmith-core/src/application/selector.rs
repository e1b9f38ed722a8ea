//! Strategy selection: configuration values to concrete producers.
//!
//! Selection is a closed match over parsed enums. There is no default arm
//! handing back a fallback producer: a value nobody recognises became a
//! [`GenError::Strategy`](crate::error::GenError) during parsing, before
//! any producer was built.

use std::sync::Arc;

use crate::application::generator::Generator;
use crate::application::generators::{
    MongoGenerator, NodeBackendGenerator, PostgresGenerator, SpringBootBackendGenerator,
};
use crate::application::ports::{CommandRunner, Filesystem};
use crate::application::Workspace;
use crate::domain::settings::Settings;
use crate::domain::target::{BackendKind, DatabaseKind};
use crate::error::GenResult;

/// Build the backend producer for the configured `BACKEND_TYPE`.
pub fn select_backend(
    settings: &Arc<Settings>,
    workspace: &Workspace,
    fs: &Arc<dyn Filesystem>,
    runner: &Arc<dyn CommandRunner>,
) -> GenResult<Box<dyn Generator>> {
    let database = DatabaseKind::from_settings(settings)?;
    Ok(match BackendKind::from_settings(settings)? {
        BackendKind::Node => Box::new(NodeBackendGenerator::new(
            settings.clone(),
            workspace.clone(),
            database,
            fs.clone(),
            runner.clone(),
        )),
        BackendKind::SpringBoot => Box::new(SpringBootBackendGenerator::new(
            settings.clone(),
            workspace.clone(),
            database,
            fs.clone(),
            runner.clone(),
        )),
    })
}

/// Build the database producer for the configured `DATABASE_TYPE`.
///
/// `Ok(None)` means the stack has no database by choice; the compose
/// document will carry no db service and no volume.
pub fn select_database(settings: &Arc<Settings>) -> GenResult<Option<Box<dyn Generator>>> {
    Ok(match DatabaseKind::from_settings(settings)? {
        DatabaseKind::Postgres => Some(Box::new(PostgresGenerator::new(settings.clone()))),
        DatabaseKind::Mongo => Some(Box::new(MongoGenerator::new(settings.clone()))),
        DatabaseKind::None => None,
    })
}
