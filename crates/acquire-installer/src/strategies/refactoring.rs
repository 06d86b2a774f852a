use acquire_meta::{InstallerResponse, Product, Resource, Result};
use async_trait::async_trait;

use super::confirm_install;
use crate::base::{BaseInstaller, InstallStrategy};

/// rope and isort.
#[derive(Clone)]
pub struct RefactoringLibraryInstaller {
    base: BaseInstaller,
}

impl RefactoringLibraryInstaller {
    pub fn new(base: BaseInstaller) -> Self {
        Self { base }
    }
}

#[async_trait]
impl InstallStrategy for RefactoringLibraryInstaller {
    fn base(&self) -> &BaseInstaller {
        &self.base
    }

    async fn prompt_to_install_implementation(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        confirm_install(self, "refactoring library", product, resource).await
    }
}
