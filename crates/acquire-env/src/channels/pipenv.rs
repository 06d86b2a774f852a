//! pipenv channel: `pipenv install <spec> --dev`

use acquire_meta::Resource;
use async_trait::async_trait;

use super::{ChannelEnvironment, ExecutionInfo, InstallationChannel, install_spec};
use crate::error::Result;
use crate::interpreter::InterpreterKind;

pub struct PipenvChannel {
    env: ChannelEnvironment,
}

impl PipenvChannel {
    pub fn new(env: ChannelEnvironment) -> Self {
        Self { env }
    }
}

#[async_trait]
impl InstallationChannel for PipenvChannel {
    fn name(&self) -> &'static str {
        "pipenv"
    }

    fn display_name(&self) -> &'static str {
        "pipenv"
    }

    fn priority(&self) -> u8 {
        10
    }

    /// Only a workspace with a `Pipfile` whose interpreter pipenv manages.
    async fn is_supported(&self, resource: Option<&Resource>) -> bool {
        let Some(resource) = resource else {
            return false;
        };
        if !resource.workspace_dir().join("Pipfile").is_file() {
            return false;
        }
        self.env
            .interpreters
            .active_interpreter(Some(resource))
            .await
            .is_some_and(|i| i.kind == InterpreterKind::Pipenv)
    }

    async fn execution_info(
        &self,
        module_name: &str,
        resource: Option<&Resource>,
    ) -> Result<ExecutionInfo> {
        let settings = self.env.config.settings(resource);
        let interpreter = self.env.interpreters.active_interpreter(resource).await;

        Ok(ExecutionInfo {
            program: settings.pipenv_path,
            args: vec![
                "install".to_string(),
                install_spec(module_name, interpreter.as_ref()),
                "--dev".to_string(),
            ],
        })
    }

    async fn install_module(&self, module_name: &str, resource: Option<&Resource>) -> Result<()> {
        let execution = self.execution_info(module_name, resource).await?;
        self.env.run(&execution, resource).await
    }
}
