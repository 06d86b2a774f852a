//! Formatter prompt: install, or switch to another formatter

use acquire_meta::catalog::{executable_name, is_executable_a_module};
use acquire_meta::{InstallerResponse, Product, Resource, Result, SettingKey, SettingValue};
use async_trait::async_trait;
use tracing::{info, warn};

use super::YES;
use crate::base::{BaseInstaller, InstallStrategy};

#[derive(Clone)]
pub struct FormatterInstaller {
    base: BaseInstaller,
}

impl FormatterInstaller {
    pub fn new(base: BaseInstaller) -> Self {
        Self { base }
    }

    /// Make `formatter` the active provider, then install it.
    async fn switch_to(
        &self,
        formatter: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        let config = &self.base.services().config;
        let value = SettingValue::from(formatter.name());
        match config.update_setting(SettingKey::FormattingProvider, value, resource) {
            Ok(()) => info!(%formatter, "Switched formatting provider"),
            Err(e) => warn!(%formatter, error = %e, "Could not persist formatting provider"),
        }
        self.install(formatter, resource).await
    }
}

fn use_option(formatter: Product) -> String {
    format!("Use {formatter}")
}

#[async_trait]
impl InstallStrategy for FormatterInstaller {
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

        let alternatives: Vec<Product> = Product::FORMATTERS
            .into_iter()
            .filter(|f| *f != product)
            .collect();
        let mut options: Vec<String> = alternatives.iter().copied().map(use_option).collect();

        let message = if is_executable_a_module(product, &settings) {
            options.insert(0, YES.to_string());
            format!("Formatter {product} is not installed. Install?")
        } else {
            let executable = executable_name(product, &settings);
            format!("Path to the {product} formatter is invalid ({executable})")
        };

        let Some(choice) = services.host.shell.show_error_message(&message, &options).await else {
            return Ok(InstallerResponse::Ignore);
        };
        if choice == YES {
            return self.install(product, resource).await;
        }
        match alternatives.into_iter().find(|f| choice == use_option(*f)) {
            Some(formatter) => self.switch_to(formatter, resource).await,
            None => Ok(InstallerResponse::Ignore),
        }
    }
}
