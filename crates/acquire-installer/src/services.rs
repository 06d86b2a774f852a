//! Collaborators shared by every installer

use std::sync::Arc;

use acquire_env::{
    ApplicationShell, ChannelEnvironment, CondaService, InstallationChannelManager,
    InterpreterService, OutputChannel, PlatformService, ProcessRunner, PythonExecution,
    TerminalService,
};
use acquire_meta::ConfigurationService;

use crate::cache::PromptCache;

/// What the host supplies: prompts, an output surface, a terminal, the platform.
#[derive(Clone)]
pub struct HostServices {
    pub shell: Arc<dyn ApplicationShell>,
    pub output: Arc<dyn OutputChannel>,
    pub terminal: Arc<dyn TerminalService>,
    pub platform: Arc<dyn PlatformService>,
}

/// Everything an installer talks to, cheap to clone.
///
/// The prompt cache lives here so that every installer built from the same
/// services shares one cache for the lifetime of the process.
#[derive(Clone)]
pub struct InstallerServices {
    pub config: Arc<dyn ConfigurationService>,
    pub interpreters: Arc<dyn InterpreterService>,
    pub process: Arc<dyn ProcessRunner>,
    pub python: PythonExecution,
    pub channels: Arc<InstallationChannelManager>,
    pub host: HostServices,
    pub prompts: PromptCache,
}

impl InstallerServices {
    /// Services over the built-in pip, conda and pipenv channels.
    pub fn new(env: ChannelEnvironment, conda: Arc<dyn CondaService>, host: HostServices) -> Self {
        let channels = InstallationChannelManager::with_builtins(
            env.clone(),
            conda,
            host.shell.clone(),
            host.platform.clone(),
        );
        Self::with_channels(env, channels, host)
    }

    /// Services over an explicit channel manager.
    pub fn with_channels(
        env: ChannelEnvironment,
        channels: InstallationChannelManager,
        host: HostServices,
    ) -> Self {
        Self {
            python: PythonExecution::new(env.process.clone()),
            config: env.config,
            interpreters: env.interpreters,
            process: env.process,
            channels: Arc::new(channels),
            host,
            prompts: PromptCache::new(),
        }
    }
}
