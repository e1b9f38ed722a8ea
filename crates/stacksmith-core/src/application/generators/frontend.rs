//! Angular frontend producer.
//!
//! The Angular CLI does the heavy lifting through the [`CommandRunner`]
//! port; this producer then layers in the nginx deployment files, patches
//! `angular.json` (serve port, Bootstrap styles), and applies the chosen
//! UI library. The generated welcome pages are static markup on purpose —
//! Angular's own `{{ }}` interpolation would collide with the template
//! token syntax.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::generator::Generator;
use crate::application::ports::{CommandRunner, Filesystem};
use crate::application::Workspace;
use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::UiLibrary;
use crate::domain::{naming, template, Substitutions};
use crate::error::{GenError, GenResult};

const FRONTEND_FRAGMENT: &str = r#"  {{feService}}:
    build:
      context: ./{{feDir}}
      dockerfile: Dockerfile
    container_name: {{feService}}
    restart: always
    ports:
      - "{{frontendPort}}:80"
    networks:
      - {{network}}"#;

const DOCKERFILE: &str = r#"FROM node:20-alpine AS build
WORKDIR /app
COPY package*.json ./
RUN npm ci
COPY . .
RUN npm run build

FROM nginx:alpine
COPY nginx.conf /etc/nginx/conf.d/default.conf
COPY --from=build /app/dist/{{feDir}}/browser /usr/share/nginx/html
EXPOSE 80
"#;

const NGINX_CONF: &str = r#"server {
    listen 80;
    server_name _;

    location / {
        root /usr/share/nginx/html;
        index index.html;
        try_files $uri $uri/ /index.html;
    }
}
"#;

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./src/**/*.{html,ts}'],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
"#;

const STYLES_TAILWIND: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const WELCOME_TAILWIND: &str = r#"<main class="min-h-screen flex items-center justify-center bg-slate-900">
  <div class="text-center">
    <h1 class="text-4xl font-bold text-white">{{projectName}}</h1>
    <p class="mt-4 text-slate-400">Generated by stacksmith. Edit src/app to get started.</p>
  </div>
</main>
"#;

const WELCOME_BOOTSTRAP: &str = r#"<main class="d-flex min-vh-100 align-items-center justify-content-center bg-dark">
  <div class="text-center">
    <h1 class="display-4 text-white">{{projectName}}</h1>
    <p class="lead text-secondary">Generated by stacksmith. Edit src/app to get started.</p>
  </div>
</main>
"#;

/// Angular frontend producer.
pub struct FrontendGenerator {
    settings: Arc<Settings>,
    workspace: Workspace,
    ui: UiLibrary,
    fs: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl FrontendGenerator {
    pub fn new(
        settings: Arc<Settings>,
        workspace: Workspace,
        ui: UiLibrary,
        fs: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            settings,
            workspace,
            ui,
            fs,
            runner,
        }
    }

    fn frontend_dir(&self) -> String {
        naming::frontend_dir(&self.workspace.project_name)
    }

    fn scaffold_app(&self) -> GenResult<()> {
        let cli_spec = format!(
            "@angular/cli@{}",
            self.settings.get(ConfigKey::AngularVersion)
        );
        let dir = self.frontend_dir();
        self.runner.run_checked(
            "npx",
            &[
                "-y",
                &cli_spec,
                "new",
                &dir,
                "--directory",
                &dir,
                "--style=scss",
                "--routing",
                "--skip-git",
                "--skip-install",
            ],
            &self.workspace.root,
        )?;
        self.runner
            .run_checked("npm", &["install"], &self.workspace.frontend_path)?;
        Ok(())
    }

    fn write_deployment_files(&self) -> GenResult<()> {
        let fe = &self.workspace.frontend_path;
        // The Angular CLI already made this tree; idempotent re-create
        // keeps the write below valid on every Filesystem implementation.
        self.fs.create_dir_all(&fe.join("src/app"))?;
        let subs = Substitutions::new().with("feDir", self.frontend_dir());
        self.fs.write_file(
            &fe.join("Dockerfile"),
            &template::render("frontend/Dockerfile", DOCKERFILE, &subs)?,
        )?;
        self.fs.write_file(&fe.join("nginx.conf"), NGINX_CONF)
    }

    /// Apply an in-place edit to the generated `angular.json`.
    ///
    /// The file is written by the Angular CLI outside the [`Filesystem`]
    /// port; when the runner is stubbed it may not be visible through the
    /// port, in which case the patch is skipped with a warning.
    fn patch_angular_json(
        &self,
        patch: impl FnOnce(&mut serde_json::Value),
    ) -> GenResult<()> {
        let path = self.workspace.frontend_path.join("angular.json");
        let raw = match self.fs.read_file(&path) {
            Ok(raw) => raw,
            Err(_) => {
                warn!(path = %path.display(), "angular.json not visible, skipping patch");
                return Ok(());
            }
        };
        let mut document: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| GenError::Filesystem {
                path: path.clone(),
                reason: format!("parse angular.json: {e}"),
            })?;
        patch(&mut document);
        let rendered =
            serde_json::to_string_pretty(&document).map_err(|e| GenError::Filesystem {
                path: path.clone(),
                reason: format!("serialize angular.json: {e}"),
            })?;
        self.fs.write_file(&path, &rendered)
    }

    fn patch_serve_port(&self) -> GenResult<()> {
        let dir = self.frontend_dir();
        let port: u64 = self
            .settings
            .get(ConfigKey::FrontendPort)
            .parse()
            .map_err(|_| GenError::Strategy {
                key: "FRONTEND_PORT",
                value: self.settings.get(ConfigKey::FrontendPort).to_string(),
            })?;
        self.patch_angular_json(|doc| {
            doc["projects"][&dir]["architect"]["serve"]["options"]["port"] =
                serde_json::json!(port);
        })
    }

    fn apply_ui_library(&self) -> GenResult<()> {
        let fe = &self.workspace.frontend_path;
        let subs =
            Substitutions::new().with("projectName", self.workspace.project_name.clone());

        match self.ui {
            UiLibrary::None => {
                debug!("no ui library requested");
                Ok(())
            }
            UiLibrary::Tailwind => {
                self.runner.run_checked(
                    "npm",
                    &["install", "--save-dev", "tailwindcss", "postcss", "autoprefixer"],
                    fe,
                )?;
                self.fs
                    .write_file(&fe.join("tailwind.config.js"), TAILWIND_CONFIG)?;
                self.fs
                    .write_file(&fe.join("postcss.config.js"), POSTCSS_CONFIG)?;
                self.fs
                    .write_file(&fe.join("src/styles.scss"), STYLES_TAILWIND)?;
                self.fs.write_file(
                    &fe.join("src/app/app.component.html"),
                    &template::render("frontend/welcome", WELCOME_TAILWIND, &subs)?,
                )
            }
            UiLibrary::Bootstrap => {
                self.runner.run_checked(
                    "npm",
                    &["install", "bootstrap", "@ng-bootstrap/ng-bootstrap"],
                    fe,
                )?;
                let dir = self.frontend_dir();
                self.patch_angular_json(|doc| {
                    let styles =
                        &mut doc["projects"][&dir]["architect"]["build"]["options"]["styles"];
                    if let Some(array) = styles.as_array_mut() {
                        array.insert(
                            0,
                            serde_json::json!("node_modules/bootstrap/dist/css/bootstrap.min.css"),
                        );
                    }
                })?;
                self.fs.write_file(
                    &fe.join("src/app/app.component.html"),
                    &template::render("frontend/welcome", WELCOME_BOOTSTRAP, &subs)?,
                )
            }
        }
    }
}

impl Generator for FrontendGenerator {
    fn ensure_directories(&self) -> GenResult<()> {
        // The Angular CLI creates the frontend directory itself; only the
        // project root has to exist for `npx` to run in.
        self.fs.create_dir_all(&self.workspace.root)
    }

    fn generate(&self) -> GenResult<()> {
        info!(
            ui = %self.ui,
            "generating angular frontend in {}",
            self.workspace.frontend_path.display()
        );
        self.scaffold_app()?;
        self.write_deployment_files()?;
        self.patch_serve_port()?;
        self.apply_ui_library()?;
        Ok(())
    }

    fn aux_generate(&self) -> GenResult<String> {
        let project = &self.workspace.project_name;
        let subs = Substitutions::new()
            .with("feService", naming::frontend_service(project))
            .with("feDir", naming::frontend_dir(project))
            .with("frontendPort", self.settings.get(ConfigKey::FrontendPort))
            .with("network", naming::network(project));
        template::render("compose/frontend", FRONTEND_FRAGMENT, &subs)
    }
}
