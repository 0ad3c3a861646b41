use std::fmt;

use serde::Serialize;

/// A DNS zone to enumerate. Never empty and never padded with whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Build a domain from user input. Returns `None` when the input is blank.
    pub fn new(input: &str) -> Option<Domain> {
        let name = input.trim();
        if name.is_empty() {
            None
        } else {
            Some(Domain(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe identifier: `.` and path separators replaced with `_`,
    /// so the stem is always a single file name component.
    pub fn file_stem(&self) -> String {
        self.0.replace(['.', '/', '\\', ':'], "_")
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize raw domain entries. Each entry may itself hold a comma separated list.
/// Entries are trimmed and blanks dropped; input order is kept.
pub fn parse_domain_list<S: AsRef<str>>(entries: &[S]) -> Vec<Domain> {
    entries
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .filter_map(Domain::new)
        .collect()
}
