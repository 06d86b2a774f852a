//! conda discovery and environment naming

use std::path::{Path, PathBuf};
use std::sync::Arc;

use acquire_meta::ConfigurationService;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::interpreter::{InterpreterInfo, InterpreterKind};
use crate::process::{ExecOptions, ProcessRunner};
use crate::python::PROBE_TIMEOUT;

/// How a conda environment can be addressed on the command line.
///
/// Either field may be empty; a non-empty `name` takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CondaEnvironmentInfo {
    pub name: String,
    pub path: String,
}

/// Access to the conda installation.
#[async_trait]
pub trait CondaService: Send + Sync {
    /// conda executable to run.
    async fn conda_file(&self) -> String;

    async fn is_conda_available(&self) -> bool;

    /// Environment the interpreter belongs to, if it is a conda interpreter.
    async fn conda_environment(&self, interpreter: &InterpreterInfo) -> Option<CondaEnvironmentInfo>;
}

/// Subset of `conda info --json` used to name environments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CondaInfo {
    #[serde(default)]
    pub envs: Vec<PathBuf>,
    #[serde(default)]
    pub envs_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub root_prefix: Option<PathBuf>,
}

/// [`CondaService`] that shells out to the configured conda.
pub struct ProcessCondaService {
    process: Arc<dyn ProcessRunner>,
    config: Arc<dyn ConfigurationService>,
}

impl ProcessCondaService {
    pub fn new(process: Arc<dyn ProcessRunner>, config: Arc<dyn ConfigurationService>) -> Self {
        Self { process, config }
    }

    async fn conda_info(&self) -> Option<CondaInfo> {
        let conda = self.conda_file().await;
        let args = vec!["info".to_string(), "--json".to_string()];
        let options = ExecOptions::default().with_timeout(PROBE_TIMEOUT);
        let output = match self.process.exec(&conda, &args, &options).await {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "conda info failed");
                return None;
            }
        };
        serde_json::from_str(&output.stdout)
            .map_err(|e| warn!(error = %e, "Unreadable conda info output"))
            .ok()
    }
}

#[async_trait]
impl CondaService for ProcessCondaService {
    async fn conda_file(&self) -> String {
        self.config.settings(None).conda_file().to_string()
    }

    async fn is_conda_available(&self) -> bool {
        let conda = self.conda_file().await;
        let options = ExecOptions::default().with_timeout(PROBE_TIMEOUT);
        self.process
            .exec(&conda, &["--version".to_string()], &options)
            .await
            .is_ok()
    }

    async fn conda_environment(&self, interpreter: &InterpreterInfo) -> Option<CondaEnvironmentInfo> {
        if interpreter.kind != InterpreterKind::Conda {
            return None;
        }
        let environment = match self.conda_info().await {
            Some(info) => environment_from_info(&info, &interpreter.prefix),
            None => CondaEnvironmentInfo {
                name: String::new(),
                path: interpreter.prefix.to_string_lossy().into_owned(),
            },
        };
        debug!(name = %environment.name, path = %environment.path, "Resolved conda environment");
        Some(environment)
    }
}

/// Name an environment prefix using conda's own view of its environments.
///
/// The root prefix is `base`; an environment directly inside one of the
/// envs directories is named after its folder; anything else is path-only.
pub fn environment_from_info(info: &CondaInfo, prefix: &Path) -> CondaEnvironmentInfo {
    let path = prefix.to_string_lossy().into_owned();

    if info.root_prefix.as_deref() == Some(prefix) {
        return CondaEnvironmentInfo {
            name: "base".to_string(),
            path,
        };
    }

    let known = info.envs.iter().any(|env| env == prefix);
    let in_envs_dir = prefix
        .parent()
        .is_some_and(|parent| info.envs_dirs.iter().any(|dir| dir == parent));

    let name = if known && in_envs_dir {
        prefix
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        String::new()
    };

    CondaEnvironmentInfo { name, path }
}
