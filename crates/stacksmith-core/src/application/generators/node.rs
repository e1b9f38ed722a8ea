//! Express + TypeScript backend producer.
//!
//! The skeleton comes from npm itself (`npm init`, `npm install` through
//! the [`CommandRunner`] port); the source files, `.env`, and Dockerfile
//! are rendered from the templates below. Which database wiring lands in
//! `src/index.ts` and `.env` follows the [`DatabaseKind`] chosen for the
//! run — with `DatabaseKind::None` the service boots with no persistence
//! layer at all.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::generator::Generator;
use crate::application::generators::backend_fragment;
use crate::application::ports::{CommandRunner, Filesystem};
use crate::application::Workspace;
use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::DatabaseKind;
use crate::domain::{template, Substitutions};
use crate::error::{GenError, GenResult};

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "commonjs",
    "rootDir": "src",
    "outDir": "dist",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "resolveJsonModule": true
  },
  "include": ["src/**/*"]
}
"#;

const GITIGNORE: &str = "node_modules/\ndist/\nlogs/\n.env\n";

const LOGGER_TS: &str = r#"import winston from 'winston';

export const logger = winston.createLogger({
  level: process.env.LOG_LEVEL ?? 'info',
  format: winston.format.combine(
    winston.format.timestamp(),
    winston.format.simple(),
  ),
  transports: [
    new winston.transports.Console(),
    new winston.transports.File({ filename: 'logs/app.log' }),
  ],
});
"#;

const INDEX_POSTGRES: &str = r#"import express from 'express';
import cors from 'cors';
import morgan from 'morgan';
import dotenv from 'dotenv';
import { Pool } from 'pg';
import { logger } from './config/logger';

dotenv.config();

const app = express();
const port = Number(process.env.PORT ?? {{backendPort}});

export const pool = new Pool({
  host: process.env.DB_HOST,
  port: Number(process.env.DB_PORT ?? 5432),
  user: process.env.DB_USER,
  password: process.env.DB_PASSWORD,
  database: process.env.DB_NAME,
});

app.use(cors());
app.use(express.json());
app.use(morgan('combined'));

app.get('/health', async (_req, res) => {
  try {
    await pool.query('SELECT 1');
    res.json({ status: 'ok', database: 'up' });
  } catch (err) {
    logger.error(`database check failed: ${err}`);
    res.status(503).json({ status: 'degraded', database: 'down' });
  }
});

app.listen(port, () => {
  logger.info(`{{serviceName}} listening on port ${port}`);
});
"#;

const INDEX_MONGO: &str = r#"import express from 'express';
import cors from 'cors';
import morgan from 'morgan';
import dotenv from 'dotenv';
import mongoose from 'mongoose';
import { logger } from './config/logger';

dotenv.config();

const app = express();
const port = Number(process.env.PORT ?? {{backendPort}});

mongoose
  .connect(process.env.MONGO_URI ?? '')
  .then(() => logger.info('connected to mongodb'))
  .catch((err) => {
    logger.error(`mongodb connection failed: ${err}`);
    process.exit(1);
  });

app.use(cors());
app.use(express.json());
app.use(morgan('combined'));

app.get('/health', (_req, res) => {
  const state = mongoose.connection.readyState === 1 ? 'up' : 'down';
  res.json({ status: 'ok', database: state });
});

app.listen(port, () => {
  logger.info(`{{serviceName}} listening on port ${port}`);
});
"#;

const INDEX_PLAIN: &str = r#"import express from 'express';
import cors from 'cors';
import morgan from 'morgan';
import dotenv from 'dotenv';
import { logger } from './config/logger';

dotenv.config();

const app = express();
const port = Number(process.env.PORT ?? {{backendPort}});

app.use(cors());
app.use(express.json());
app.use(morgan('combined'));

app.get('/health', (_req, res) => {
  res.json({ status: 'ok' });
});

app.listen(port, () => {
  logger.info(`{{serviceName}} listening on port ${port}`);
});
"#;

const ENV_POSTGRES: &str = r#"PORT={{backendPort}}
LOG_LEVEL={{logLevel}}

DB_HOST={{dbHost}}
DB_PORT={{dbPort}}
DB_USER={{dbUser}}
DB_PASSWORD={{dbPassword}}
DB_NAME={{dbName}}
"#;

const ENV_MONGO: &str = r#"PORT={{backendPort}}
LOG_LEVEL={{logLevel}}

MONGO_URI={{dbUri}}
"#;

const ENV_PLAIN: &str = r#"PORT={{backendPort}}
LOG_LEVEL={{logLevel}}
"#;

const DOCKERFILE: &str = r#"FROM node:20-alpine
WORKDIR /app
COPY package*.json ./
RUN npm ci
COPY . .
RUN npm run build
EXPOSE {{backendPort}}
CMD ["node", "dist/index.js"]
"#;

const README_BE: &str = r#"# {{projectName}} backend

Express + TypeScript service generated by stacksmith.

## Development

```bash
npm install
npm run dev
```

The service reads its configuration from `.env`.
"#;

const SOURCE_DIRS: [&str; 10] = [
    "src/config",
    "src/controllers",
    "src/database",
    "src/helpers",
    "src/middleware",
    "src/models",
    "src/routes",
    "src/types",
    "src/utils",
    "src/views",
];

/// Node/Express backend producer.
pub struct NodeBackendGenerator {
    settings: Arc<Settings>,
    workspace: Workspace,
    database: DatabaseKind,
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl NodeBackendGenerator {
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

    fn substitutions(&self) -> Substitutions {
        let s = &self.settings;
        Substitutions::new()
            .with("projectName", self.workspace.project_name.clone())
            .with(
                "serviceName",
                crate::domain::naming::backend_service(&self.workspace.project_name),
            )
            .with("backendPort", s.get(ConfigKey::BackendPort))
            .with("logLevel", s.get(ConfigKey::LogLevel))
            .with("dbHost", s.get(ConfigKey::DatabaseHost))
            .with("dbPort", s.get(ConfigKey::DatabasePort))
            .with("dbUser", s.get(ConfigKey::DatabaseUsr))
            .with("dbPassword", s.get(ConfigKey::DatabasePassword))
            .with("dbName", s.get(ConfigKey::DatabaseName))
            .with("dbUri", s.get(ConfigKey::DatabaseUri))
    }

    fn install_packages(&self) -> GenResult<()> {
        let cwd = &self.workspace.backend_path;
        self.runner.run_checked("npm", &["init", "-y"], cwd)?;

        let mut deps = vec!["express", "dotenv", "cors", "morgan", "winston"];
        let mut dev_deps = vec![
            "typescript",
            "ts-node",
            "nodemon",
            "@types/express",
            "@types/node",
            "@types/cors",
            "@types/morgan",
        ];

        match self.database {
            DatabaseKind::Postgres => {
                deps.push("pg");
                dev_deps.push("@types/pg");
            }
            DatabaseKind::Mongo => deps.push("mongoose"),
            DatabaseKind::None => {}
        }

        if self.settings.flag(ConfigKey::EnableSwagger) {
            deps.extend(["swagger-ui-express", "swagger-jsdoc"]);
            dev_deps.extend(["@types/swagger-ui-express", "@types/swagger-jsdoc"]);
        }

        let mut install = vec!["install"];
        install.extend(&deps);
        self.runner.run_checked("npm", &install, cwd)?;

        let mut install_dev = vec!["install", "--save-dev"];
        install_dev.extend(&dev_deps);
        self.runner.run_checked("npm", &install_dev, cwd)?;
        Ok(())
    }

    /// Overwrite the scripts block of the manifest `npm init` produced.
    ///
    /// npm writes `package.json` directly, outside the [`Filesystem`] port;
    /// when the runner is stubbed the manifest may not be visible through
    /// the port, so a missing file starts from an empty object.
    fn patch_manifest(&self) -> GenResult<()> {
        let path = self.workspace.backend_path.join("package.json");
        let raw = self.fs.read_file(&path).unwrap_or_else(|_| "{}".into());
        let mut manifest: serde_json::Value =
            serde_json::from_str(&raw).unwrap_or_else(|_| serde_json::json!({}));

        manifest["main"] = serde_json::json!("dist/index.js");
        manifest["scripts"] = serde_json::json!({
            "build": "tsc",
            "start": "node dist/index.js",
            "dev": "nodemon --exec ts-node src/index.ts",
        });

        let rendered = serde_json::to_string_pretty(&manifest).map_err(|e| {
            GenError::Filesystem {
                path: path.clone(),
                reason: format!("serialize package.json: {e}"),
            }
        })?;
        self.fs.write_file(&path, &rendered)
    }

    fn write_sources(&self) -> GenResult<()> {
        let subs = self.substitutions();
        let be = &self.workspace.backend_path;

        let (index_template, env_template) = match self.database {
            DatabaseKind::Postgres => (INDEX_POSTGRES, ENV_POSTGRES),
            DatabaseKind::Mongo => (INDEX_MONGO, ENV_MONGO),
            DatabaseKind::None => (INDEX_PLAIN, ENV_PLAIN),
        };

        self.fs.write_file(&be.join("tsconfig.json"), TSCONFIG)?;
        self.fs.write_file(&be.join(".gitignore"), GITIGNORE)?;
        self.fs
            .write_file(&be.join("src/config/logger.ts"), LOGGER_TS)?;
        self.fs.write_file(
            &be.join("src/index.ts"),
            &template::render("node/index.ts", index_template, &subs)?,
        )?;
        self.fs.write_file(
            &be.join(".env"),
            &template::render("node/.env", env_template, &subs)?,
        )?;
        self.fs.write_file(
            &be.join("Dockerfile"),
            &template::render("node/Dockerfile", DOCKERFILE, &subs)?,
        )?;
        self.fs.write_file(
            &be.join("README.md"),
            &template::render("node/README.md", README_BE, &subs)?,
        )?;
        Ok(())
    }
}

impl Generator for NodeBackendGenerator {
    fn ensure_directories(&self) -> GenResult<()> {
        let be = &self.workspace.backend_path;
        self.fs.create_dir_all(be)?;
        for dir in SOURCE_DIRS {
            self.fs.create_dir_all(&be.join(dir))?;
        }
        self.fs.create_dir_all(&be.join("logs"))?;
        debug!(path = %be.display(), "node backend directories ready");
        Ok(())
    }

    fn generate(&self) -> GenResult<()> {
        info!(
            database = %self.database,
            "generating node backend in {}",
            self.workspace.backend_path.display()
        );
        self.install_packages()?;
        self.write_sources()?;
        self.patch_manifest()?;
        Ok(())
    }

    fn aux_generate(&self) -> GenResult<String> {
        backend_fragment(&self.settings, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generators::stubs::{NullFs, NullRunner};
    use crate::domain::testkit::settings;
    use std::path::Path;

    #[test]
    fn env_template_for_postgres_carries_credentials() {
        let ws = Workspace::new(Path::new("/tmp/out"), "Demo");
        let generator = NodeBackendGenerator {
            settings: Arc::new(settings()),
            workspace: ws,
            database: DatabaseKind::Postgres,
            fs: Arc::new(NullFs),
            runner: Arc::new(NullRunner),
        };
        let env = template::render("node/.env", ENV_POSTGRES, &generator.substitutions()).unwrap();
        assert!(env.contains("PORT=3000"));
        assert!(env.contains("DB_USER=demo_user"));
        assert!(env.contains("DB_PASSWORD=demo_pass"));
        assert!(env.contains("DB_NAME=demo_db"));
    }

    #[test]
    fn env_template_without_database_has_no_db_entries() {
        let ws = Workspace::new(Path::new("/tmp/out"), "Demo");
        let generator = NodeBackendGenerator {
            settings: Arc::new(settings()),
            workspace: ws,
            database: DatabaseKind::None,
            fs: Arc::new(NullFs),
            runner: Arc::new(NullRunner),
        };
        let env = template::render("node/.env", ENV_PLAIN, &generator.substitutions()).unwrap();
        assert!(env.contains("PORT=3000"));
        assert!(!env.contains("DB_"));
        assert!(!env.contains("MONGO_URI"));
    }

    #[test]
    fn index_templates_leave_no_tokens() {
        let ws = Workspace::new(Path::new("/tmp/out"), "Demo");
        let generator = NodeBackendGenerator {
            settings: Arc::new(settings()),
            workspace: ws,
            database: DatabaseKind::Mongo,
            fs: Arc::new(NullFs),
            runner: Arc::new(NullRunner),
        };
        let subs = generator.substitutions();
        for (name, tpl) in [
            ("postgres", INDEX_POSTGRES),
            ("mongo", INDEX_MONGO),
            ("plain", INDEX_PLAIN),
        ] {
            let out = template::render(name, tpl, &subs).unwrap();
            assert!(!out.contains("{{"), "{name} left a token behind");
        }
    }
}
