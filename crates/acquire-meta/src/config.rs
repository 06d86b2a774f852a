//! Settings model and the configuration collaborator
//!
//! Settings are read from TOML. Every field has a default so an empty file
//! (or no file at all) yields a usable configuration:
//!
//! ```toml
//! python_path = "/usr/bin/python3"
//!
//! [http]
//! proxy = "http://proxy:3128"
//!
//! [linting]
//! enabled = true
//!
//! [linting.linters.flake8]
//! enabled = true
//! path = "/opt/tools/flake8"
//!
//! [formatting]
//! provider = "black"
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::product::Product;
use crate::resource::Resource;

/// Resolved settings for one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interpreter used for module probes and pip installs.
    pub python_path: String,
    /// conda executable; empty means `conda` on PATH.
    pub conda_path: String,
    pub pipenv_path: String,
    /// Install into the interpreter itself rather than the user site.
    pub global_module_installation: bool,
    pub http: HttpSettings,
    pub linting: LintingSettings,
    pub formatting: FormattingSettings,
    pub testing: TestingSettings,
    pub workspace_symbols: WorkspaceSymbolsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python_path: "python".to_string(),
            conda_path: String::new(),
            pipenv_path: "pipenv".to_string(),
            global_module_installation: false,
            http: HttpSettings::default(),
            linting: LintingSettings::default(),
            formatting: FormattingSettings::default(),
            testing: TestingSettings::default(),
            workspace_symbols: WorkspaceSymbolsSettings::default(),
        }
    }
}

impl Settings {
    /// Whether a linter is switched on.
    ///
    /// pylint is on unless configured otherwise; every other linter is off.
    pub fn linter_enabled(&self, product: Product) -> bool {
        self.linting
            .linters
            .get(product.name())
            .and_then(|linter| linter.enabled)
            .unwrap_or(product == Product::Pylint)
    }

    /// Proxy to hand to pip, if any.
    pub fn proxy(&self) -> Option<&str> {
        let proxy = self.http.proxy.trim();
        (!proxy.is_empty()).then_some(proxy)
    }

    /// conda executable to run.
    pub fn conda_file(&self) -> &str {
        if self.conda_path.trim().is_empty() {
            "conda"
        } else {
            &self.conda_path
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub proxy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintingSettings {
    /// Master switch for all linters.
    pub enabled: bool,
    pub linters: BTreeMap<String, LinterSettings>,
}

impl Default for LintingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            linters: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinterSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingSettings {
    /// Active formatter name.
    pub provider: String,
    pub paths: BTreeMap<String, String>,
}

impl Default for FormattingSettings {
    fn default() -> Self {
        Self {
            provider: "autopep8".to_string(),
            paths: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestingSettings {
    pub paths: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSymbolsSettings {
    pub ctags_path: String,
}

impl Default for WorkspaceSymbolsSettings {
    fn default() -> Self {
        Self {
            ctags_path: "ctags".to_string(),
        }
    }
}

/// A setting the orchestrator is allowed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// `formatting.provider`
    FormattingProvider,
    /// `linting.enabled`
    LintingEnabled,
    /// `linting.linters.<name>.enabled`
    LinterEnabled(Product),
}

impl SettingKey {
    /// Table path of the setting, outermost first.
    pub fn segments(&self) -> Vec<&'static str> {
        match self {
            SettingKey::FormattingProvider => vec!["formatting", "provider"],
            SettingKey::LintingEnabled => vec!["linting", "enabled"],
            SettingKey::LinterEnabled(product) => {
                vec!["linting", "linters", product.name(), "enabled"]
            }
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("."))
    }
}

/// Value written by a setting update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    String(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

/// Read and update access to settings, scoped by resource.
pub trait ConfigurationService: Send + Sync {
    /// Settings in effect for `resource` (global scope when `None`).
    fn settings(&self, resource: Option<&Resource>) -> Settings;

    /// Persist a single setting in the scope of `resource`.
    fn update_setting(
        &self,
        key: SettingKey,
        value: SettingValue,
        resource: Option<&Resource>,
    ) -> Result<()>;
}
