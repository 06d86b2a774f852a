#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use acquire_env::{ChannelEnvironment, InterpreterKind, PlatformService};
use acquire_installer::{HostServices, InstallerServices, ProductInstaller};
use acquire_meta::Settings;
use acquire_test_utils::{
    FakeProcessRunner, FixedPlatform, InMemoryConfiguration, MemoryOutput, RecordingTerminal,
    ScriptedShell, StaticCondaService, StaticInterpreters,
};

pub const PYTHON: &str = "/env/bin/python";
pub const PIP_PROBE: &str = "/env/bin/python -c import pip";

pub struct Harness {
    pub process: Arc<FakeProcessRunner>,
    pub shell: Arc<ScriptedShell>,
    pub output: Arc<MemoryOutput>,
    pub terminal: Arc<RecordingTerminal>,
    pub config: Arc<InMemoryConfiguration>,
    pub interpreters: Arc<StaticInterpreters>,
    pub installer: ProductInstaller,
}

pub struct HarnessBuilder {
    process: FakeProcessRunner,
    shell: ScriptedShell,
    terminal: RecordingTerminal,
    platform: FixedPlatform,
    settings: Settings,
    interpreters: StaticInterpreters,
    conda: StaticCondaService,
}

/// A Python 3 virtual environment at `/env` on Linux, nothing scripted.
pub fn harness() -> HarnessBuilder {
    HarnessBuilder {
        process: FakeProcessRunner::new(),
        shell: ScriptedShell::new(),
        terminal: RecordingTerminal::new(),
        platform: FixedPlatform::linux(),
        settings: Settings::default(),
        interpreters: StaticInterpreters::python(PYTHON, "3.11.4", InterpreterKind::VirtualEnv),
        conda: StaticCondaService::unavailable(),
    }
}

impl HarnessBuilder {
    pub fn process(mut self, process: FakeProcessRunner) -> Self {
        self.process = process;
        self
    }

    pub fn shell(mut self, shell: ScriptedShell) -> Self {
        self.shell = shell;
        self
    }

    pub fn answer(mut self, choice: &str) -> Self {
        self.shell = self.shell.answer(choice);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.shell = self.shell.with_delay(delay);
        self
    }

    pub fn terminal(mut self, terminal: RecordingTerminal) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn platform(mut self, platform: FixedPlatform) -> Self {
        self.platform = platform;
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn interpreter(mut self, version: &str, kind: InterpreterKind) -> Self {
        self.interpreters = StaticInterpreters::python(PYTHON, version, kind);
        self
    }

    pub fn no_interpreter(mut self) -> Self {
        self.interpreters = StaticInterpreters::none();
        self
    }

    pub fn conda(mut self, conda: StaticCondaService) -> Self {
        self.conda = conda;
        self
    }

    pub fn build(self) -> Harness {
        self.build_with(InMemoryConfiguration::new)
    }

    /// Settings updates fail.
    pub fn build_read_only(self) -> Harness {
        self.build_with(InMemoryConfiguration::read_only)
    }

    fn build_with(self, config: impl FnOnce(Settings) -> InMemoryConfiguration) -> Harness {
        let process = Arc::new(self.process);
        let shell = Arc::new(self.shell);
        let output = Arc::new(MemoryOutput::new());
        let terminal = Arc::new(self.terminal);
        let config = Arc::new(config(self.settings));
        let interpreters = Arc::new(self.interpreters);
        let platform: Arc<dyn PlatformService> = Arc::new(self.platform);

        let env = ChannelEnvironment::new(process.clone(), interpreters.clone(), config.clone());
        let host = HostServices {
            shell: shell.clone(),
            output: output.clone(),
            terminal: terminal.clone(),
            platform,
        };
        let services = InstallerServices::new(env, Arc::new(self.conda), host);

        Harness {
            process,
            shell,
            output,
            terminal,
            config,
            interpreters,
            installer: ProductInstaller::new(services),
        }
    }
}

/// pip is importable and `pip install -U <module>` makes `<module>` importable.
pub fn pip_installs(module: &str) -> FakeProcessRunner {
    let install = format!("{PYTHON} -m pip install -U {module}");
    FakeProcessRunner::new()
        .succeed(PIP_PROBE, "")
        .succeed(&install, "Successfully installed")
        .after(&install, &format!("{PYTHON} -c import {module}"))
}
