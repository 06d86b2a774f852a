//! Linter prompt: install, disable this linter, or disable linting

use acquire_meta::catalog::{executable_name, is_executable_a_module};
use acquire_meta::{InstallerResponse, Product, Resource, Result, SettingKey};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::base::{BaseInstaller, InstallStrategy};

const INSTALL: &str = "Install";
const DISABLE_LINTING: &str = "Disable linting";

#[derive(Clone)]
pub struct LinterInstaller {
    base: BaseInstaller,
}

impl LinterInstaller {
    pub fn new(base: BaseInstaller) -> Self {
        Self { base }
    }

    /// Turn `key` off. `Disabled` only when the change was persisted.
    fn disable(&self, key: SettingKey, resource: Option<&Resource>) -> InstallerResponse {
        match self
            .base
            .services()
            .config
            .update_setting(key, false.into(), resource)
        {
            Ok(()) => {
                info!(setting = %key, "Disabled");
                InstallerResponse::Disabled
            }
            Err(e) => {
                warn!(setting = %key, error = %e, "Could not disable");
                InstallerResponse::Ignore
            }
        }
    }
}

#[async_trait]
impl InstallStrategy for LinterInstaller {
    fn base(&self) -> &BaseInstaller {
        &self.base
    }

    async fn prompt_to_install_implementation(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        let services = self.base.services();
        let settings = services.config.settings(resource);

        let disable_this = format!("Disable {product}");
        let mut options = vec![disable_this.clone(), DISABLE_LINTING.to_string()];
        let message = if is_executable_a_module(product, &settings) {
            options.insert(0, INSTALL.to_string());
            format!("Linter {product} is not installed.")
        } else {
            let executable = executable_name(product, &settings);
            format!("Path to the {product} linter is invalid ({executable})")
        };

        let choice = services.host.shell.show_error_message(&message, &options).await;
        match choice.as_deref() {
            Some(INSTALL) => self.install(product, resource).await,
            Some(DISABLE_LINTING) => Ok(self.disable(SettingKey::LintingEnabled, resource)),
            Some(choice) if choice == disable_this => {
                Ok(self.disable(SettingKey::LinterEnabled(product), resource))
            }
            _ => Ok(InstallerResponse::Ignore),
        }
    }
}
