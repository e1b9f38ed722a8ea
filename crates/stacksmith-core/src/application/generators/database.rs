//! Database producers.
//!
//! A database service has no source tree of its own — it exists purely as a
//! pinned container image in the compose document, so `generate` succeeds
//! without doing anything and `aux_generate` carries the real output.

use std::sync::Arc;

use tracing::debug;

use crate::application::generator::Generator;
use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::{naming, template, Substitutions};
use crate::error::GenResult;

const POSTGRES_FRAGMENT: &str = r#"  {{dbService}}:
    image: postgres:13
    container_name: {{dbService}}
    restart: always
    environment:
      POSTGRES_USER: {{dbUser}}
      POSTGRES_PASSWORD: {{dbPassword}}
      POSTGRES_DB: {{dbName}}
    ports:
      - "{{dbPort}}:5432"
    volumes:
      - {{dbVolume}}:/var/lib/postgresql/data
    networks:
      - {{network}}"#;

const MONGO_FRAGMENT: &str = r#"  {{dbService}}:
    image: mongo:6.0
    container_name: {{dbService}}
    restart: always
    environment:
      MONGO_INITDB_DATABASE: {{dbName}}
    ports:
      - "{{dbPort}}:27017"
    volumes:
      - {{dbVolume}}:/data/db
    networks:
      - {{network}}
    healthcheck:
      test: ["CMD", "mongosh", "--eval", "db.adminCommand('ping')"]
      interval: 10s
      timeout: 5s
      retries: 5"#;

fn db_substitutions(settings: &Settings) -> Substitutions {
    let project = settings.project_name();
    Substitutions::new()
        .with("dbService", naming::database_service(project))
        .with("dbUser", settings.get(ConfigKey::DatabaseUsr))
        .with("dbPassword", settings.get(ConfigKey::DatabasePassword))
        .with("dbName", settings.get(ConfigKey::DatabaseName))
        .with("dbPort", settings.get(ConfigKey::DatabasePort))
        .with("dbVolume", naming::db_volume(project))
        .with("network", naming::network(project))
}

/// PostgreSQL compose-service producer.
pub struct PostgresGenerator {
    settings: Arc<Settings>,
}

impl PostgresGenerator {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl Generator for PostgresGenerator {
    fn generate(&self) -> GenResult<()> {
        debug!("postgres service lives in the compose document only, nothing to write");
        Ok(())
    }

    fn aux_generate(&self) -> GenResult<String> {
        template::render(
            "compose/postgres",
            POSTGRES_FRAGMENT,
            &db_substitutions(&self.settings),
        )
    }
}

/// MongoDB compose-service producer.
pub struct MongoGenerator {
    settings: Arc<Settings>,
}

impl MongoGenerator {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl Generator for MongoGenerator {
    fn generate(&self) -> GenResult<()> {
        debug!("mongo service lives in the compose document only, nothing to write");
        Ok(())
    }

    fn aux_generate(&self) -> GenResult<String> {
        template::render(
            "compose/mongo",
            MONGO_FRAGMENT,
            &db_substitutions(&self.settings),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testkit::settings;

    #[test]
    fn postgres_fragment_uses_derived_names_and_credentials() {
        let generator = PostgresGenerator::new(Arc::new(settings()));
        let fragment = generator.aux_generate().unwrap();
        assert!(fragment.contains("demodb:"));
        assert!(fragment.contains("image: postgres:13"));
        assert!(fragment.contains("POSTGRES_USER: demo_user"));
        assert!(fragment.contains("POSTGRES_DB: demo_db"));
        assert!(fragment.contains("\"5432:5432\""));
        assert!(fragment.contains("demo-db-data:/var/lib/postgresql/data"));
        assert!(fragment.contains("- demo-network"));
        assert!(!fragment.contains("{{"));
    }

    #[test]
    fn mongo_fragment_pins_image_and_healthcheck() {
        let generator = MongoGenerator::new(Arc::new(settings()));
        let fragment = generator.aux_generate().unwrap();
        assert!(fragment.contains("image: mongo:6.0"));
        assert!(fragment.contains("healthcheck:"));
        assert!(fragment.contains(":27017\""));
        assert!(!fragment.contains("{{"));
    }

    #[test]
    fn generate_is_a_successful_no_op() {
        assert!(PostgresGenerator::new(Arc::new(settings())).generate().is_ok());
        assert!(MongoGenerator::new(Arc::new(settings())).generate().is_ok());
    }
}
