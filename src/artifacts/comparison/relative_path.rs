use std::fmt;
use std::path::{Component, Path};

const SEPARATOR: &str = "/";

/// Location of an entry relative to its root, joined with `/` on every
/// platform. Used as the key that matches entries across the two sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// True for the root itself (empty prefix).
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, name: &str) -> Self {
        if self.is_root() {
            RelativePath(name.to_string())
        } else {
            RelativePath(format!("{}{}{}", self.0, SEPARATOR, name))
        }
    }

    /// Builds a key from a path already stripped of its root prefix.
    ///
    /// Names that are not valid UTF-8 are converted lossily, so two such names
    /// differing only in their invalid bytes produce the same key. Matching
    /// across sides is done on the raw names and stays exact; only the
    /// reported keys can repeat.
    pub fn from_path(path: &Path) -> Self {
        let joined = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        RelativePath(joined)
    }

    /// Directory part of the key; empty for entries directly under the root.
    pub fn parent(&self) -> &str {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| parent)
            .unwrap_or("")
    }

    pub fn file_name(&self) -> &str {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(_, name)| name)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(value: &str) -> Self {
        RelativePath(value.trim_matches('/').to_string())
    }
}

impl PartialEq<str> for RelativePath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RelativePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
