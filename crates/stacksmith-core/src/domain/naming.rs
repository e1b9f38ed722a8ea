//! Name derivations shared by every artifact producer.
//!
//! Directory names, compose service names, the network, and the volume are
//! all functions of the project name. Each producer calls these helpers
//! independently instead of receiving pre-derived strings, so a backend
//! fragment and a database fragment always agree on the names they share.

/// Backend source directory: `DemoBE` for project `Demo`.
pub fn backend_dir(project: &str) -> String {
    format!("{project}BE")
}

/// Frontend source directory: `DemoFE` for project `Demo`.
pub fn frontend_dir(project: &str) -> String {
    format!("{project}FE")
}

/// Compose service name for the backend: `demobe`.
pub fn backend_service(project: &str) -> String {
    format!("{}be", project.to_lowercase())
}

/// Compose service name for the frontend: `demofe`.
pub fn frontend_service(project: &str) -> String {
    format!("{}fe", project.to_lowercase())
}

/// Compose service name for the database: `demodb`.
pub fn database_service(project: &str) -> String {
    format!("{}db", project.to_lowercase())
}

/// Shared bridge network: `demo-network`.
pub fn network(project: &str) -> String {
    format!("{}-network", project.to_lowercase())
}

/// Named volume backing the database: `demo-db-data`.
pub fn db_volume(project: &str) -> String {
    format!("{}-db-data", project.to_lowercase())
}

/// Java package for the generated backend: `com.example.demobe`.
pub fn java_package(group_id: &str, project: &str) -> String {
    format!("{group_id}.{}", backend_dir(project).to_lowercase())
}

/// Uppercase the first character, used for generated Java class names.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_keep_the_original_casing() {
        assert_eq!(backend_dir("Demo"), "DemoBE");
        assert_eq!(frontend_dir("Demo"), "DemoFE");
    }

    #[test]
    fn services_are_lowercased() {
        assert_eq!(backend_service("Demo"), "demobe");
        assert_eq!(frontend_service("Demo"), "demofe");
        assert_eq!(database_service("Demo"), "demodb");
    }

    #[test]
    fn network_and_volume_derive_from_the_project() {
        assert_eq!(network("Demo"), "demo-network");
        assert_eq!(db_volume("Demo"), "demo-db-data");
    }

    #[test]
    fn java_package_folds_the_backend_dir() {
        assert_eq!(java_package("com.example", "Demo"), "com.example.demobe");
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("User"), "User");
        assert_eq!(capitalize(""), "");
    }
}
