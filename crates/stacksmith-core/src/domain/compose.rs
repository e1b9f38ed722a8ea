//! Compose document assembly.
//!
//! The document is built by pure concatenation of pre-rendered fragments in
//! the order the orchestrator supplies them. No parsing, no validation, no
//! renaming: each fragment producer has already derived its names through
//! [`crate::domain::naming`], which is the only consistency mechanism.

use crate::domain::naming;

/// Fixed document header, including the opening of the `services` mapping.
pub fn header() -> String {
    "version: '3.8'\n\nservices:".to_string()
}

/// The `volumes` section. Only emitted when a database service exists.
pub fn volumes_section(project: &str) -> String {
    format!("\nvolumes:\n  {}:", naming::db_volume(project))
}

/// The `networks` section closing every document.
pub fn networks_section(project: &str) -> String {
    format!("\nnetworks:\n  {}:\n    driver: bridge", naming::network(project))
}

/// Join fragments into the final document, newline-separated, with a
/// trailing newline.
pub fn assemble(fragments: &[String]) -> String {
    let mut doc = fragments.join("\n");
    doc.push('\n');
    doc
}
