//! Generation target: which backend flavor, database, and UI library a run
//! produces.
//!
//! Parsed exactly once from [`Settings`] at the start of a run and passed
//! around as values; selector keys are never re-read mid-run. Unrecognised
//! values fail loudly — there is no default branch that silently picks a
//! flavor the user did not ask for.

use std::fmt;

use crate::domain::settings::{ConfigKey, Settings};
use crate::error::{GenError, GenResult};

/// Backend service flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Express + TypeScript service assembled through npm.
    Node,
    /// Spring Boot service assembled from a generated Maven project.
    SpringBoot,
}

impl BackendKind {
    pub fn from_settings(settings: &Settings) -> GenResult<Self> {
        let raw = settings.get(ConfigKey::BackendType);
        match raw {
            "node" => Ok(Self::Node),
            "springboot" => Ok(Self::SpringBoot),
            other => Err(GenError::Strategy {
                key: "BACKEND_TYPE",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::SpringBoot => write!(f, "springboot"),
        }
    }
}

/// Database flavor. `None` is a valid choice, not an error: the generated
/// stack simply carries no persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Postgres,
    Mongo,
    None,
}

impl DatabaseKind {
    pub fn from_settings(settings: &Settings) -> GenResult<Self> {
        let raw = settings.get(ConfigKey::DatabaseType);
        match raw {
            "postgres" => Ok(Self::Postgres),
            "mongo" => Ok(Self::Mongo),
            "none" => Ok(Self::None),
            other => Err(GenError::Strategy {
                key: "DATABASE_TYPE",
                value: other.to_string(),
            }),
        }
    }

    /// The Java identifier type for generated entity ids.
    ///
    /// Relational rows carry a numeric surrogate key; document stores use
    /// their native string object id. Everything generated for an entity
    /// derives its id type from here and nowhere else.
    pub fn id_type(self) -> Option<&'static str> {
        match self {
            Self::Postgres => Some("Long"),
            Self::Mongo => Some("String"),
            Self::None => None,
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Mongo => write!(f, "mongo"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Frontend styling add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLibrary {
    None,
    Tailwind,
    Bootstrap,
}

impl UiLibrary {
    pub fn from_settings(settings: &Settings) -> GenResult<Self> {
        let raw = settings.get(ConfigKey::UiLibrary);
        match raw {
            "none" => Ok(Self::None),
            "tailwind" => Ok(Self::Tailwind),
            "bootstrap" => Ok(Self::Bootstrap),
            other => Err(GenError::Strategy {
                key: "UI_LIBRARY",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Tailwind => write!(f, "tailwind"),
            Self::Bootstrap => write!(f, "bootstrap"),
        }
    }
}

/// The full target of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTarget {
    pub backend: BackendKind,
    pub database: DatabaseKind,
    pub ui: UiLibrary,
}

impl GenerationTarget {
    /// Parse all three selectors. Fails on the first unrecognised value.
    pub fn from_settings(settings: &Settings) -> GenResult<Self> {
        Ok(Self {
            backend: BackendKind::from_settings(settings)?,
            database: DatabaseKind::from_settings(settings)?,
            ui: UiLibrary::from_settings(settings)?,
        })
    }
}
