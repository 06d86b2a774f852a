//! Active interpreter resolution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use acquire_meta::{ConfigurationService, Resource};
use async_trait::async_trait;
use semver::Version;
use tracing::warn;

use crate::python::PythonExecution;

/// Kind of environment an interpreter lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpreterKind {
    /// A system or user-level interpreter outside any environment.
    Global,
    VirtualEnv,
    Conda,
    Pipenv,
}

/// The interpreter selected for a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    /// Path (or command name) used to launch the interpreter.
    pub path: String,
    pub version: Option<Version>,
    pub kind: InterpreterKind,
    /// `sys.prefix` of the interpreter.
    pub prefix: PathBuf,
}

impl InterpreterInfo {
    pub fn major_version(&self) -> Option<u64> {
        self.version.as_ref().map(|v| v.major)
    }
}

/// Resolves the interpreter a resource runs under.
#[async_trait]
pub trait InterpreterService: Send + Sync {
    /// Active interpreter, or `None` when none can be resolved.
    async fn active_interpreter(&self, resource: Option<&Resource>) -> Option<InterpreterInfo>;
}

/// Resolves the configured `python_path` by asking it about itself.
pub struct ProcessInterpreterService {
    python: PythonExecution,
    config: Arc<dyn ConfigurationService>,
}

impl ProcessInterpreterService {
    pub fn new(python: PythonExecution, config: Arc<dyn ConfigurationService>) -> Self {
        Self { python, config }
    }
}

#[async_trait]
impl InterpreterService for ProcessInterpreterService {
    async fn active_interpreter(&self, resource: Option<&Resource>) -> Option<InterpreterInfo> {
        let python_path = self.config.settings(resource).python_path;
        let info = match self.python.environment_info(&python_path).await {
            Ok(info) => info,
            Err(e) => {
                warn!(python = %python_path, error = %e, "Could not resolve the active interpreter");
                return None;
            }
        };

        let workspace = resource.map(|r| r.workspace_dir());
        let kind = classify(&info.prefix, &info.base_prefix, workspace);
        Some(InterpreterInfo {
            path: python_path,
            version: info.version,
            kind,
            prefix: info.prefix,
        })
    }
}

/// Decide the environment kind from an interpreter's prefixes.
pub fn classify(prefix: &Path, base_prefix: &Path, workspace: Option<&Path>) -> InterpreterKind {
    if prefix.join("conda-meta").is_dir() {
        return InterpreterKind::Conda;
    }
    if prefix == base_prefix {
        return InterpreterKind::Global;
    }
    if workspace.is_some_and(|dir| dir.join("Pipfile").is_file()) {
        InterpreterKind::Pipenv
    } else {
        InterpreterKind::VirtualEnv
    }
}
