//! Command implementations for acquire-cli

pub mod check;
pub mod install;
pub mod list;

pub use check::run_check;
pub use install::{run_install, run_prompt};
pub use list::{run_list, run_module_name};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use acquire_env::{
    ChannelEnvironment, HostPlatform, ProcessCondaService, ProcessInterpreterService,
    PythonExecution, TokioProcessRunner,
};
use acquire_installer::{HostServices, InstallerServices, ProductInstaller};
use acquire_meta::{Resource, TomlConfigurationService};

use crate::error::{CliError, Result};
use crate::host::{ConsoleOutput, DialoguerShell, ShellTerminal};

/// Wire the real collaborators into an installer.
pub fn build_installer(config: Option<&Path>) -> Result<ProductInstaller> {
    let config = Arc::new(match config {
        Some(path) => TomlConfigurationService::new(path),
        None => TomlConfigurationService::from_default_location()?,
    });
    tracing::debug!(path = %config.global_path().display(), "Global settings");

    let process = Arc::new(TokioProcessRunner::new());
    let interpreters = Arc::new(ProcessInterpreterService::new(
        PythonExecution::new(process.clone()),
        config.clone(),
    ));
    let conda = Arc::new(ProcessCondaService::new(process.clone(), config.clone()));
    let env = ChannelEnvironment::new(process, interpreters, config);

    let host = HostServices {
        shell: Arc::new(DialoguerShell),
        output: Arc::new(ConsoleOutput),
        terminal: Arc::new(ShellTerminal),
        platform: Arc::new(HostPlatform),
    };
    Ok(ProductInstaller::new(InstallerServices::new(env, conda, host)))
}

/// Resolve `--resource` against the working directory.
pub fn resolve_resource(resource: Option<PathBuf>) -> Result<Option<Resource>> {
    let Some(path) = resource else {
        return Ok(None);
    };
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    if !path.exists() {
        return Err(CliError::user(format!(
            "Resource does not exist: {}",
            path.display()
        )));
    }
    Ok(Some(Resource::new(path)))
}
