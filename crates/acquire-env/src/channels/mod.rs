//! Installation channels
//!
//! A channel is a package-manager backend able to install a named module
//! into the environment a resource runs under. Each channel answers two
//! questions: can it be used for this resource, and which command line
//! installs a given module. Running that command line is shared.

mod conda;
mod manager;
mod pip;
mod pipenv;

pub use conda::CondaChannel;
pub use manager::InstallationChannelManager;
pub use pip::PipChannel;
pub use pipenv::PipenvChannel;

use std::sync::Arc;

use acquire_meta::{ConfigurationService, ModuleNamePurpose, Product, Resource};
use acquire_meta::translate_product_to_module_name;
use async_trait::async_trait;
use tracing::info;

use crate::args::command_line;
use crate::error::Result;
use crate::interpreter::{InterpreterInfo, InterpreterService};
use crate::process::{ExecOptions, ProcessRunner};

/// Requirement pinned for Python 2 interpreters, which pylint 2 dropped.
pub const PYLINT_PYTHON2_SPEC: &str = "\"pylint<2.0.0\"";

/// Program and argument vector a channel runs to install a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionInfo {
    pub program: String,
    pub args: Vec<String>,
}

impl ExecutionInfo {
    pub fn command_line(&self) -> String {
        command_line(&self.program, &self.args)
    }
}

#[async_trait]
pub trait InstallationChannel: Send + Sync {
    fn name(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// Higher priorities are considered first.
    fn priority(&self) -> u8;

    async fn is_supported(&self, resource: Option<&Resource>) -> bool;

    /// Command line that installs `module_name` for `resource`.
    async fn execution_info(
        &self,
        module_name: &str,
        resource: Option<&Resource>,
    ) -> Result<ExecutionInfo>;

    async fn install_module(&self, module_name: &str, resource: Option<&Resource>) -> Result<()>;
}

/// Requirement spec handed to a package manager for `module_name`.
///
/// pylint is pinned below 2.0 under a Python 2 interpreter. Every channel
/// goes through this function so the rule is applied identically.
pub fn install_spec(module_name: &str, interpreter: Option<&InterpreterInfo>) -> String {
    let is_pylint = translate_product_to_module_name(Product::Pylint, ModuleNamePurpose::Install)
        .is_ok_and(|pylint| pylint == module_name);
    let is_python2 = interpreter.and_then(InterpreterInfo::major_version) == Some(2);

    if is_pylint && is_python2 {
        PYLINT_PYTHON2_SPEC.to_string()
    } else {
        module_name.to_string()
    }
}

/// Collaborators every channel needs.
#[derive(Clone)]
pub struct ChannelEnvironment {
    pub process: Arc<dyn ProcessRunner>,
    pub interpreters: Arc<dyn InterpreterService>,
    pub config: Arc<dyn ConfigurationService>,
}

impl ChannelEnvironment {
    pub fn new(
        process: Arc<dyn ProcessRunner>,
        interpreters: Arc<dyn InterpreterService>,
        config: Arc<dyn ConfigurationService>,
    ) -> Self {
        Self {
            process,
            interpreters,
            config,
        }
    }

    /// Run an install command line through the shell, in the resource's workspace.
    ///
    /// The shell is what turns the quoted pylint pin into a single argument.
    pub async fn run(&self, execution: &ExecutionInfo, resource: Option<&Resource>) -> Result<()> {
        let command = execution.command_line();
        let mut options = ExecOptions::default().merged();
        if let Some(resource) = resource {
            options = options.with_cwd(resource.workspace_dir());
        }

        info!(%command, "Installing module");
        self.process.shell_exec(&command, &options).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::InterpreterKind;
    use rstest::rstest;
    use semver::Version;
    use std::path::PathBuf;

    fn interpreter(major: u64) -> InterpreterInfo {
        InterpreterInfo {
            path: "python".to_string(),
            version: Some(Version::new(major, 7, 0)),
            kind: InterpreterKind::VirtualEnv,
            prefix: PathBuf::from("/env"),
        }
    }

    #[rstest]
    #[case("pylint", 2, "\"pylint<2.0.0\"")]
    #[case("pylint", 3, "pylint")]
    #[case("flake8", 2, "flake8")]
    #[case("black", 3, "black")]
    fn test_install_spec(#[case] module: &str, #[case] major: u64, #[case] expected: &str) {
        assert_eq!(install_spec(module, Some(&interpreter(major))), expected);
    }

    #[test]
    fn test_install_spec_without_interpreter_is_bare() {
        assert_eq!(install_spec("pylint", None), "pylint");
    }

    #[test]
    fn test_execution_info_command_line() {
        let info = ExecutionInfo {
            program: "conda".to_string(),
            args: vec!["install".to_string(), "black".to_string()],
        };
        assert_eq!(info.command_line(), "conda install black");
    }
}
