//! Workspace scope an operation applies to

use std::fmt;
use std::path::{Path, PathBuf};

/// Workspace folder or file an operation is scoped to.
///
/// Operations take `Option<&Resource>`; `None` means global scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource(PathBuf);

impl Resource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Directory holding workspace files such as `Pipfile`.
    ///
    /// A resource pointing at a file resolves to its parent directory.
    pub fn workspace_dir(&self) -> &Path {
        if self.0.is_file() {
            self.0.parent().unwrap_or(&self.0)
        } else {
            &self.0
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for Resource {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for Resource {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

/// Path string for a resource, empty for global scope.
pub fn resource_key(resource: Option<&Resource>) -> String {
    resource
        .map(|r| r.path().to_string_lossy().into_owned())
        .unwrap_or_default()
}
