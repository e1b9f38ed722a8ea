//! Strict `{{token}}` template substitution.
//!
//! Rendering is total or it fails: every placeholder present in a template
//! must have a substitution entry, and a successful render contains zero
//! remaining tokens. Generated files never carry a `{{leftover}}` into a
//! user's project because a key was quietly absent.

use crate::error::{GenError, GenResult};

/// One substitution map, built per generated entity and shared across all
/// templates rendered for it. Insertion order is preserved, which keeps the
/// dry-run output and error reporting deterministic.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Render `template` with `subs`, replacing every `{{identifier}}` token.
///
/// `name` identifies the template in error messages only. A placeholder
/// with no entry aborts with [`GenError::Template`]; duplicate occurrences
/// of the same token are all replaced.
pub fn render(name: &str, template: &str, subs: &Substitutions) -> GenResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let placeholder = &after_open[..end];
                match subs.get(placeholder) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(GenError::Template {
                            template: name.to_string(),
                            placeholder: placeholder.to_string(),
                        });
                    }
                }
                rest = &after_open[end + 2..];
            }
            None => {
                // Unterminated braces are literal text, not a token.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
