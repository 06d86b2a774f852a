use acquire_meta::{InstallerResponse, Product, Resource, Result};
use async_trait::async_trait;

use super::confirm_install;
use crate::base::{BaseInstaller, InstallStrategy};

/// pytest, nose and unittest.
#[derive(Clone)]
pub struct TestFrameworkInstaller {
    base: BaseInstaller,
}

impl TestFrameworkInstaller {
    pub fn new(base: BaseInstaller) -> Self {
        Self { base }
    }
}

#[async_trait]
impl InstallStrategy for TestFrameworkInstaller {
    fn base(&self) -> &BaseInstaller {
        &self.base
    }

    async fn prompt_to_install_implementation(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        confirm_install(self, "test framework", product, resource).await
    }
}
