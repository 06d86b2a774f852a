//! TOML-backed configuration service
//!
//! Two files feed the settings for a resource:
//!
//! ```text
//! <config_dir>/acquire/settings.toml      global scope
//! <workspace>/.acquire/settings.toml      workspace scope, overrides global key by key
//! ```
//!
//! Updates go through `toml_edit` so comments and layout survive.

use std::fs;
use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, TableLike};
use tracing::{debug, warn};

use crate::config::{ConfigurationService, SettingKey, SettingValue, Settings};
use crate::error::{Error, Result};
use crate::resource::Resource;

/// Directory holding workspace-scoped settings.
pub const WORKSPACE_SETTINGS_DIR: &str = ".acquire";

/// Settings file name in either scope.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Maximum settings file size we are willing to parse.
const MAX_SETTINGS_SIZE: u64 = 1024 * 1024;

/// Configuration service reading global and workspace TOML files.
#[derive(Debug, Clone)]
pub struct TomlConfigurationService {
    global_path: PathBuf,
}

impl TomlConfigurationService {
    /// Create a service whose global scope lives at `global_path`.
    pub fn new(global_path: impl Into<PathBuf>) -> Self {
        Self {
            global_path: global_path.into(),
        }
    }

    /// Create a service using the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        let dir = dirs::config_dir().ok_or_else(|| Error::ConfigNotFound {
            path: PathBuf::from("<config dir>"),
        })?;
        Ok(Self::new(dir.join("acquire").join(SETTINGS_FILE)))
    }

    pub fn global_path(&self) -> &Path {
        &self.global_path
    }

    /// Settings file for a resource's workspace.
    pub fn workspace_path(resource: &Resource) -> PathBuf {
        resource
            .workspace_dir()
            .join(WORKSPACE_SETTINGS_DIR)
            .join(SETTINGS_FILE)
    }

    /// Load the merged settings for a resource, surfacing parse errors.
    pub fn load(&self, resource: Option<&Resource>) -> Result<Settings> {
        let mut merged = read_table(&self.global_path)?.unwrap_or_default();

        if let Some(resource) = resource {
            let path = Self::workspace_path(resource);
            if let Some(overlay) = read_table(&path)? {
                debug!(path = %path.display(), "Applying workspace settings");
                merge_tables(&mut merged, overlay);
            }
        }

        toml::Value::Table(merged)
            .try_into::<Settings>()
            .map_err(|e: toml::de::Error| Error::InvalidConfig {
                path: self.global_path.clone(),
                message: e.to_string(),
            })
    }

    fn target_path(&self, resource: Option<&Resource>) -> PathBuf {
        match resource {
            Some(resource) => Self::workspace_path(resource),
            None => self.global_path.clone(),
        }
    }
}

impl ConfigurationService for TomlConfigurationService {
    fn settings(&self, resource: Option<&Resource>) -> Settings {
        self.load(resource).unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default settings");
            Settings::default()
        })
    }

    fn update_setting(
        &self,
        key: SettingKey,
        value: SettingValue,
        resource: Option<&Resource>,
    ) -> Result<()> {
        let path = self.target_path(resource);
        let source = if path.exists() {
            fs::read_to_string(&path).map_err(|e| Error::InvalidConfig {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = source.parse().map_err(|e: toml_edit::TomlError| {
            Error::InvalidConfig {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

        set_value(&mut doc, &key, value, &path)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
                path: path.clone(),
                message: e.to_string(),
            })?;
        }
        fs::write(&path, doc.to_string()).map_err(|e| Error::ConfigWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(%key, path = %path.display(), "Updated setting");
        Ok(())
    }
}

fn read_table(path: &Path) -> Result<Option<toml::Table>> {
    if !path.exists() {
        return Ok(None);
    }

    let size = fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if size > MAX_SETTINGS_SIZE {
        return Err(Error::InvalidConfig {
            path: path.to_path_buf(),
            message: format!("file is {size} bytes (max {MAX_SETTINGS_SIZE})"),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| Error::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    content
        .parse::<toml::Table>()
        .map(Some)
        .map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Deep-merge `overlay` into `base`; tables merge, everything else replaces.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn set_value(doc: &mut DocumentMut, key: &SettingKey, value: SettingValue, path: &Path) -> Result<()> {
    let segments = key.segments();
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };

    // Children of an inline table must stay inline.
    let mut table: &mut dyn TableLike = doc.as_table_mut();
    let mut inline = false;
    for segment in parents {
        let item = table.entry(segment).or_insert_with(|| {
            if inline {
                toml_edit::Item::Value(toml_edit::InlineTable::new().into())
            } else {
                let mut implicit = toml_edit::Table::new();
                implicit.set_implicit(true);
                toml_edit::Item::Table(implicit)
            }
        });
        inline = item.is_inline_table();
        table = item.as_table_like_mut().ok_or_else(|| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: format!("expected `{segment}` to be a table while setting {key}"),
        })?;
    }

    table.insert(
        last,
        match value {
            SettingValue::Bool(b) => toml_edit::value(b),
            SettingValue::String(s) => toml_edit::value(s),
        },
    );
    Ok(())
}
