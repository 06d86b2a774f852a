//! conda channel: `conda install [--name <env> | --prefix <path>] <spec>`

use std::sync::Arc;

use acquire_meta::Resource;
use async_trait::async_trait;

use super::{ChannelEnvironment, ExecutionInfo, InstallationChannel, install_spec};
use crate::args::{file_to_command_argument, to_command_argument};
use crate::conda::{CondaEnvironmentInfo, CondaService};
use crate::error::Result;
use crate::interpreter::InterpreterKind;

pub struct CondaChannel {
    env: ChannelEnvironment,
    conda: Arc<dyn CondaService>,
}

impl CondaChannel {
    pub fn new(env: ChannelEnvironment, conda: Arc<dyn CondaService>) -> Self {
        Self { env, conda }
    }
}

/// Arguments selecting the target environment; name wins over path.
pub fn environment_args(environment: &CondaEnvironmentInfo) -> Vec<String> {
    if !environment.name.is_empty() {
        vec!["--name".to_string(), to_command_argument(&environment.name)]
    } else if !environment.path.is_empty() {
        vec![
            "--prefix".to_string(),
            file_to_command_argument(&environment.path),
        ]
    } else {
        Vec::new()
    }
}

#[async_trait]
impl InstallationChannel for CondaChannel {
    fn name(&self) -> &'static str {
        "Conda"
    }

    fn display_name(&self) -> &'static str {
        "Conda"
    }

    fn priority(&self) -> u8 {
        0
    }

    async fn is_supported(&self, resource: Option<&Resource>) -> bool {
        if !self.conda.is_conda_available().await {
            return false;
        }
        self.env
            .interpreters
            .active_interpreter(resource)
            .await
            .is_some_and(|i| i.kind == InterpreterKind::Conda)
    }

    async fn execution_info(
        &self,
        module_name: &str,
        resource: Option<&Resource>,
    ) -> Result<ExecutionInfo> {
        let interpreter = self.env.interpreters.active_interpreter(resource).await;
        let environment = match &interpreter {
            Some(interpreter) => self.conda.conda_environment(interpreter).await,
            None => None,
        };

        let mut args = vec!["install".to_string()];
        if let Some(environment) = &environment {
            args.extend(environment_args(environment));
        }
        args.push(install_spec(module_name, interpreter.as_ref()));

        Ok(ExecutionInfo {
            program: self.conda.conda_file().await,
            args,
        })
    }

    async fn install_module(&self, module_name: &str, resource: Option<&Resource>) -> Result<()> {
        let execution = self.execution_info(module_name, resource).await?;
        self.env.run(&execution, resource).await
    }
}
