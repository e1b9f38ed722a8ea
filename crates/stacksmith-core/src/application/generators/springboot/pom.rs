//! `pom.xml` assembly.
//!
//! The dependency list is built in a fixed order: unconditional starters
//! first, then the database starter for the chosen flavor, then one
//! conditional append per feature flag. Each flag is read exactly once,
//! and the document is well-formed with every flag off.

use crate::domain::settings::{ConfigKey, Settings};
use crate::domain::target::DatabaseKind;
use crate::domain::{naming, template, Substitutions};
use crate::error::GenResult;

const POM_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>{{springbootVersion}}</version>
        <relativePath/>
    </parent>

    <groupId>{{groupId}}</groupId>
    <artifactId>{{artifactId}}</artifactId>
    <version>{{beVersion}}</version>
    <name>{{artifactId}}</name>
    <description>{{description}}</description>

    <properties>
        <java.version>{{javaVersion}}</java.version>
    </properties>

    <dependencies>
{{dependencies}}
    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>
</project>
"#;

fn dependency(
    group: &str,
    artifact: &str,
    version: Option<&str>,
    scope: Option<&str>,
) -> String {
    let mut entry = String::from("        <dependency>\n");
    entry.push_str(&format!("            <groupId>{group}</groupId>\n"));
    entry.push_str(&format!("            <artifactId>{artifact}</artifactId>\n"));
    if let Some(version) = version {
        entry.push_str(&format!("            <version>{version}</version>\n"));
    }
    if let Some(scope) = scope {
        entry.push_str(&format!("            <scope>{scope}</scope>\n"));
    }
    entry.push_str("        </dependency>");
    entry
}

/// Assemble the full `pom.xml` for the chosen database flavor and flags.
pub fn build_pom(settings: &Settings, database: DatabaseKind) -> GenResult<String> {
    let mut deps = vec![
        dependency("org.springframework.boot", "spring-boot-starter-web", None, None),
        dependency(
            "org.springframework.boot",
            "spring-boot-starter-test",
            None,
            Some("test"),
        ),
    ];

    match database {
        DatabaseKind::Postgres => {
            deps.push(dependency(
                "org.springframework.boot",
                "spring-boot-starter-data-jpa",
                None,
                None,
            ));
            deps.push(dependency(
                "org.postgresql",
                "postgresql",
                None,
                Some("runtime"),
            ));
        }
        DatabaseKind::Mongo => {
            deps.push(dependency(
                "org.springframework.boot",
                "spring-boot-starter-data-mongodb",
                None,
                None,
            ));
        }
        DatabaseKind::None => {}
    }

    if settings.flag(ConfigKey::EnableActuator) {
        deps.push(dependency(
            "org.springframework.boot",
            "spring-boot-starter-actuator",
            None,
            None,
        ));
    }
    if settings.flag(ConfigKey::EnableLombok) {
        deps.push(dependency("org.projectlombok", "lombok", None, Some("provided")));
    }
    if settings.flag(ConfigKey::EnableValidator) {
        deps.push(dependency(
            "org.springframework.boot",
            "spring-boot-starter-validation",
            None,
            None,
        ));
    }
    if settings.flag(ConfigKey::EnableSwagger) {
        deps.push(dependency(
            "org.springdoc",
            "springdoc-openapi-starter-webmvc-ui",
            Some(settings.get(ConfigKey::SwaggerVersion)),
            None,
        ));
    }

    let subs = Substitutions::new()
        .with("springbootVersion", settings.get(ConfigKey::SpringbootVersion))
        .with("groupId", settings.get(ConfigKey::GroupId))
        .with(
            "artifactId",
            naming::backend_dir(settings.project_name()).to_lowercase(),
        )
        .with("beVersion", settings.get(ConfigKey::BeVersion))
        .with("javaVersion", settings.get(ConfigKey::JavaVersion))
        .with("description", settings.get(ConfigKey::ProjectDescription))
        .with("dependencies", deps.join("\n"));

    template::render("springboot/pom.xml", POM_TEMPLATE, &subs)
}
