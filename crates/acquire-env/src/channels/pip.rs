//! pip channel: `<interpreter> -m pip install -U <spec>`

use acquire_meta::Resource;
use async_trait::async_trait;

use super::{ChannelEnvironment, ExecutionInfo, InstallationChannel, install_spec};
use crate::error::Result;
use crate::interpreter::InterpreterKind;
use crate::python::PythonExecution;

pub struct PipChannel {
    env: ChannelEnvironment,
    python: PythonExecution,
}

impl PipChannel {
    pub fn new(env: ChannelEnvironment) -> Self {
        let python = PythonExecution::new(env.process.clone());
        Self { env, python }
    }
}

#[async_trait]
impl InstallationChannel for PipChannel {
    fn name(&self) -> &'static str {
        "Pip"
    }

    fn display_name(&self) -> &'static str {
        "Pip"
    }

    fn priority(&self) -> u8 {
        0
    }

    async fn is_supported(&self, resource: Option<&Resource>) -> bool {
        let python_path = match self.env.interpreters.active_interpreter(resource).await {
            Some(interpreter) => interpreter.path,
            None => self.env.config.settings(resource).python_path,
        };
        self.python.is_module_installed(&python_path, "pip").await
    }

    async fn execution_info(
        &self,
        module_name: &str,
        resource: Option<&Resource>,
    ) -> Result<ExecutionInfo> {
        let settings = self.env.config.settings(resource);
        let interpreter = self.env.interpreters.active_interpreter(resource).await;

        let program = interpreter
            .as_ref()
            .map(|i| i.path.clone())
            .unwrap_or_else(|| settings.python_path.clone());

        let mut args = vec!["-m".to_string(), "pip".to_string()];
        if let Some(proxy) = settings.proxy() {
            args.push("--proxy".to_string());
            args.push(proxy.to_string());
        }
        args.push("install".to_string());
        args.push("-U".to_string());
        args.push(install_spec(module_name, interpreter.as_ref()));

        let is_global = interpreter
            .as_ref()
            .is_some_and(|i| i.kind == InterpreterKind::Global);
        if is_global && !settings.global_module_installation {
            args.push("--user".to_string());
        }

        Ok(ExecutionInfo { program, args })
    }

    async fn install_module(&self, module_name: &str, resource: Option<&Resource>) -> Result<()> {
        let execution = self.execution_info(module_name, resource).await?;
        self.env.run(&execution, resource).await
    }
}
