//! Install protocol shared by every category

use acquire_env::ExecOptions;
use acquire_env::python::PROBE_TIMEOUT;
use acquire_meta::catalog::{executable_name, is_executable_a_module, probe_module_name};
use acquire_meta::{
    InstallerResponse, ModuleNamePurpose, Product, Resource, Result,
    translate_product_to_module_name,
};
use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::services::InstallerServices;

/// Probing and channel-driven installation, independent of category.
#[derive(Clone)]
pub struct BaseInstaller {
    services: InstallerServices,
}

impl BaseInstaller {
    pub fn new(services: InstallerServices) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &InstallerServices {
        &self.services
    }

    /// Whether `product` is usable for `resource`.
    ///
    /// Built-in products are always present. A module-shaped configuration is
    /// checked by importing it with the active interpreter; anything else by
    /// running `<executable> --version`.
    pub async fn is_installed(&self, product: Product, resource: Option<&Resource>) -> bool {
        if product.is_builtin() {
            return true;
        }

        let settings = self.services.config.settings(resource);
        if is_executable_a_module(product, &settings) {
            let python_path = match self.services.interpreters.active_interpreter(resource).await {
                Some(interpreter) => interpreter.path,
                None => settings.python_path.clone(),
            };
            let module = probe_module_name(product, &settings);
            return self
                .services
                .python
                .is_module_installed(&python_path, &module)
                .await;
        }

        let executable = executable_name(product, &settings);
        let options = ExecOptions::default()
            .merged()
            .with_timeout(PROBE_TIMEOUT);
        match self
            .services
            .process
            .exec(&executable, &["--version".to_string()], &options)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                debug!(%product, %executable, error = %e, "Executable probe failed");
                false
            }
        }
    }

    /// Install `product` through the channel chosen for `resource`.
    ///
    /// The response always comes from a fresh probe after the install
    /// command, never from the command's own exit status.
    pub async fn install(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        if product.is_builtin() {
            return Ok(InstallerResponse::Installed);
        }

        let Some(channel) = self
            .services
            .channels
            .installation_channel(product, resource)
            .await
        else {
            debug!(%product, "No installation channel");
            return Ok(InstallerResponse::Ignore);
        };

        let module_name = translate_product_to_module_name(product, ModuleNamePurpose::Install)?;
        info!(%product, channel = channel.name(), module = module_name, "Installing product");
        if let Err(e) = channel.install_module(module_name, resource).await {
            error!(%product, channel = channel.name(), error = %e, "Install command failed");
        }

        if self.is_installed(product, resource).await {
            Ok(InstallerResponse::Installed)
        } else {
            Ok(InstallerResponse::Ignore)
        }
    }
}

/// The part of an installer that differs per category.
///
/// Implementors supply the prompt flow. `install` and `is_installed` default
/// to the shared protocol.
#[async_trait]
pub trait InstallStrategy: Send + Sync {
    fn base(&self) -> &BaseInstaller;

    /// Ask the user how to proceed and act on the answer.
    async fn prompt_to_install_implementation(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse>;

    async fn install(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        self.base().install(product, resource).await
    }

    async fn is_installed(&self, product: Product, resource: Option<&Resource>) -> bool {
        self.base().is_installed(product, resource).await
    }
}
