//! Static environment services and a fake channel.

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use acquire_env::{
    CondaEnvironmentInfo, CondaService, Error, ExecutionInfo, InstallationChannel,
    InterpreterInfo, InterpreterKind, InterpreterService, Result,
};
use acquire_meta::{
    ConfigurationService, Product, Resource, SettingKey, SettingValue, Settings,
};
use async_trait::async_trait;
use semver::Version;

/// [`InterpreterService`] returning one fixed interpreter.
#[derive(Debug, Default)]
pub struct StaticInterpreters {
    interpreter: Option<InterpreterInfo>,
    calls: AtomicUsize,
}

impl StaticInterpreters {
    pub fn new(interpreter: InterpreterInfo) -> Self {
        Self {
            interpreter: Some(interpreter),
            calls: AtomicUsize::new(0),
        }
    }

    /// No interpreter can be resolved.
    pub fn none() -> Self {
        Self::default()
    }

    /// Interpreter at `path` with the given version and kind.
    pub fn python(path: &str, version: &str, kind: InterpreterKind) -> Self {
        Self::new(interpreter(path, version, kind))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Build an [`InterpreterInfo`]; unparsable versions become `None`.
pub fn interpreter(path: &str, version: &str, kind: InterpreterKind) -> InterpreterInfo {
    InterpreterInfo {
        path: path.to_string(),
        version: Version::parse(version).ok(),
        kind,
        prefix: PathBuf::from(path)
            .parent()
            .and_then(|bin| bin.parent())
            .map(PathBuf::from)
            .unwrap_or_default(),
    }
}

#[async_trait]
impl InterpreterService for StaticInterpreters {
    async fn active_interpreter(&self, _resource: Option<&Resource>) -> Option<InterpreterInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.interpreter.clone()
    }
}

/// [`CondaService`] with a fixed answer.
#[derive(Debug, Clone)]
pub struct StaticCondaService {
    pub available: bool,
    pub conda_file: String,
    pub environment: Option<CondaEnvironmentInfo>,
}

impl StaticCondaService {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            conda_file: "conda".to_string(),
            environment: None,
        }
    }

    pub fn with_environment(name: &str, path: &str) -> Self {
        Self {
            available: true,
            conda_file: "conda".to_string(),
            environment: Some(CondaEnvironmentInfo {
                name: name.to_string(),
                path: path.to_string(),
            }),
        }
    }
}

#[async_trait]
impl CondaService for StaticCondaService {
    async fn conda_file(&self) -> String {
        self.conda_file.clone()
    }

    async fn is_conda_available(&self) -> bool {
        self.available
    }

    async fn conda_environment(&self, _interpreter: &InterpreterInfo) -> Option<CondaEnvironmentInfo> {
        self.environment.clone()
    }
}

/// A recorded setting update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingUpdate {
    pub key: SettingKey,
    pub value: SettingValue,
    pub resource: Option<Resource>,
}

/// [`ConfigurationService`] holding one settings value in memory.
///
/// Updates are recorded and applied, so later reads observe them.
#[derive(Debug, Default)]
pub struct InMemoryConfiguration {
    settings: Mutex<Settings>,
    updates: Mutex<Vec<SettingUpdate>>,
    fail_updates: bool,
}

impl InMemoryConfiguration {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
            ..Self::default()
        }
    }

    /// Every update fails with a write error.
    pub fn read_only(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<SettingUpdate> {
        self.updates.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ConfigurationService for InMemoryConfiguration {
    fn settings(&self, _resource: Option<&Resource>) -> Settings {
        self.settings.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update_setting(
        &self,
        key: SettingKey,
        value: SettingValue,
        resource: Option<&Resource>,
    ) -> acquire_meta::Result<()> {
        if self.fail_updates {
            return Err(acquire_meta::Error::ConfigWrite {
                path: PathBuf::from("<memory>"),
                message: "read-only".to_string(),
            });
        }

        self.updates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SettingUpdate {
                key,
                value: value.clone(),
                resource: resource.cloned(),
            });

        let mut settings = self.settings.lock().unwrap_or_else(|e| e.into_inner());
        match (key, value) {
            (SettingKey::FormattingProvider, SettingValue::String(provider)) => {
                settings.formatting.provider = provider;
            }
            (SettingKey::LintingEnabled, SettingValue::Bool(enabled)) => {
                settings.linting.enabled = enabled;
            }
            (SettingKey::LinterEnabled(product), SettingValue::Bool(enabled)) => {
                settings
                    .linting
                    .linters
                    .entry(product.name().to_string())
                    .or_default()
                    .enabled = Some(enabled);
            }
            _ => {}
        }
        Ok(())
    }
}

/// [`InstallationChannel`] with scripted support and outcome.
#[derive(Debug)]
pub struct FakeChannel {
    name: &'static str,
    priority: u8,
    supported: bool,
    fail: bool,
    installs: Mutex<Vec<String>>,
}

impl FakeChannel {
    pub fn new(name: &'static str, priority: u8, supported: bool) -> Self {
        Self {
            name,
            priority,
            supported,
            fail: false,
            installs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Module names this channel was asked to install.
    pub fn installs(&self) -> Vec<String> {
        self.installs.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl InstallationChannel for FakeChannel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    async fn is_supported(&self, _resource: Option<&Resource>) -> bool {
        self.supported
    }

    async fn execution_info(
        &self,
        module_name: &str,
        _resource: Option<&Resource>,
    ) -> Result<ExecutionInfo> {
        Ok(ExecutionInfo {
            program: self.name.to_string(),
            args: vec!["install".to_string(), module_name.to_string()],
        })
    }

    async fn install_module(&self, module_name: &str, _resource: Option<&Resource>) -> Result<()> {
        self.installs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(module_name.to_string());
        if self.fail {
            return Err(Error::CommandFailed {
                command: format!("{} install {module_name}", self.name),
                code: 1,
                stderr: "scripted failure".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings with one linter configured at `path`.
pub fn settings_with_linter_path(product: Product, path: &str) -> Settings {
    let mut settings = Settings::default();
    settings
        .linting
        .linters
        .entry(product.name().to_string())
        .or_default()
        .path = Some(path.to_string());
    settings
}
