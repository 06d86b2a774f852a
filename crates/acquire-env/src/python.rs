//! Python interpreter probes

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use semver::Version;
use tracing::debug;

use crate::error::{Error, Result};
use crate::process::{ExecOptions, ProcessRunner};

/// Upper bound for a probe; installs are not bounded here.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

const ENVIRONMENT_SCRIPT: &str = "import sys; \
print('.'.join(str(p) for p in sys.version_info[:3])); \
print(sys.prefix); \
print(getattr(sys, 'real_prefix', getattr(sys, 'base_prefix', sys.prefix)))";

/// Facts reported by an interpreter about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnvironmentInfo {
    pub version: Option<Version>,
    pub prefix: PathBuf,
    pub base_prefix: PathBuf,
}

/// Runs small scripts through a Python interpreter.
#[derive(Clone)]
pub struct PythonExecution {
    process: Arc<dyn ProcessRunner>,
}

impl PythonExecution {
    pub fn new(process: Arc<dyn ProcessRunner>) -> Self {
        Self { process }
    }

    /// Whether `module` can be imported by the interpreter at `python_path`.
    pub async fn is_module_installed(&self, python_path: &str, module: &str) -> bool {
        let args = vec!["-c".to_string(), format!("import {module}")];
        let options = ExecOptions::default().with_timeout(PROBE_TIMEOUT);
        match self.process.exec(python_path, &args, &options).await {
            Ok(_) => true,
            Err(e) => {
                debug!(%module, python = %python_path, error = %e, "Module is not importable");
                false
            }
        }
    }

    /// Ask the interpreter for its version and prefixes.
    pub async fn environment_info(&self, python_path: &str) -> Result<PythonEnvironmentInfo> {
        let args = vec!["-c".to_string(), ENVIRONMENT_SCRIPT.to_string()];
        let options = ExecOptions::default().with_timeout(PROBE_TIMEOUT);
        let output = self.process.exec(python_path, &args, &options).await?;
        parse_environment_info(&output.stdout).ok_or_else(|| Error::InvalidOutput {
            command: format!("{python_path} -c <environment script>"),
            message: output.stdout.trim().to_string(),
        })
    }
}

/// Parse the three lines printed by the environment script.
pub fn parse_environment_info(stdout: &str) -> Option<PythonEnvironmentInfo> {
    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
    let version = lines.next()?;
    let prefix = lines.next()?;
    let base_prefix = lines.next().unwrap_or(prefix);

    Some(PythonEnvironmentInfo {
        version: Version::parse(version).ok(),
        prefix: PathBuf::from(prefix),
        base_prefix: PathBuf::from(base_prefix),
    })
}
