//! Category dispatch and the public facade

use acquire_meta::{
    InstallerResponse, ModuleNamePurpose, Product, ProductType, Resource, Result, resource_key,
};
use futures::FutureExt;
use tracing::debug;

use crate::base::{BaseInstaller, InstallStrategy};
use crate::services::InstallerServices;
use crate::strategies::{
    CTagsInstaller, FormatterInstaller, LinterInstaller, RefactoringLibraryInstaller,
    TestFrameworkInstaller,
};

/// The installer for one product category.
///
/// The set of categories is closed, so every [`ProductType`] has a variant.
#[derive(Clone)]
pub enum CategoryInstaller {
    Formatter(FormatterInstaller),
    Linter(LinterInstaller),
    WorkspaceSymbols(CTagsInstaller),
    TestFramework(TestFrameworkInstaller),
    RefactoringLibrary(RefactoringLibraryInstaller),
}

impl CategoryInstaller {
    pub fn for_type(product_type: ProductType, base: BaseInstaller) -> Self {
        match product_type {
            ProductType::Formatter => Self::Formatter(FormatterInstaller::new(base)),
            ProductType::Linter => Self::Linter(LinterInstaller::new(base)),
            ProductType::WorkspaceSymbols => Self::WorkspaceSymbols(CTagsInstaller::new(base)),
            ProductType::TestFramework => Self::TestFramework(TestFrameworkInstaller::new(base)),
            ProductType::RefactoringLibrary => {
                Self::RefactoringLibrary(RefactoringLibraryInstaller::new(base))
            }
        }
    }

    pub fn product_type(&self) -> ProductType {
        match self {
            Self::Formatter(_) => ProductType::Formatter,
            Self::Linter(_) => ProductType::Linter,
            Self::WorkspaceSymbols(_) => ProductType::WorkspaceSymbols,
            Self::TestFramework(_) => ProductType::TestFramework,
            Self::RefactoringLibrary(_) => ProductType::RefactoringLibrary,
        }
    }

    fn strategy(&self) -> &dyn InstallStrategy {
        match self {
            Self::Formatter(s) => s,
            Self::Linter(s) => s,
            Self::WorkspaceSymbols(s) => s,
            Self::TestFramework(s) => s,
            Self::RefactoringLibrary(s) => s,
        }
    }

    /// Run the prompt flow, joining one already pending for the same key.
    pub async fn prompt_to_install(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        let key = format!("{product}{}", resource_key(resource));
        let installer = self.clone();
        let resource = resource.cloned();
        let prompts = self.strategy().base().services().prompts.clone();

        prompts
            .run(key, move || {
                async move {
                    installer
                        .strategy()
                        .prompt_to_install_implementation(product, resource.as_ref())
                        .await
                }
                .boxed()
            })
            .await
    }

    pub async fn install(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        self.strategy().install(product, resource).await
    }

    pub async fn is_installed(&self, product: Product, resource: Option<&Resource>) -> bool {
        self.strategy().is_installed(product, resource).await
    }
}

/// Entry point: checks, installs and prompts for any [`Product`].
///
/// # Example
///
/// ```rust,ignore
/// let installer = ProductInstaller::new(services);
/// if !installer.is_installed(Product::Pylint, None).await {
///     let response = installer.prompt_to_install(Product::Pylint, None).await?;
///     println!("pylint: {response}");
/// }
/// ```
#[derive(Clone)]
pub struct ProductInstaller {
    base: BaseInstaller,
}

impl ProductInstaller {
    pub fn new(services: InstallerServices) -> Self {
        Self {
            base: BaseInstaller::new(services),
        }
    }

    pub fn services(&self) -> &InstallerServices {
        self.base.services()
    }

    /// Installer for the category `product` belongs to.
    pub fn installer_for(&self, product: Product) -> CategoryInstaller {
        CategoryInstaller::for_type(product.product_type(), self.base.clone())
    }

    pub async fn prompt_to_install(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        debug!(%product, resource = %resource_key(resource), "Prompting to install");
        self.installer_for(product)
            .prompt_to_install(product, resource)
            .await
    }

    pub async fn install(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        self.installer_for(product).install(product, resource).await
    }

    pub async fn is_installed(&self, product: Product, resource: Option<&Resource>) -> bool {
        self.installer_for(product)
            .is_installed(product, resource)
            .await
    }

    pub fn translate_product_to_module_name(
        &self,
        product: Product,
        purpose: ModuleNamePurpose,
    ) -> Result<&'static str> {
        acquire_meta::translate_product_to_module_name(product, purpose)
    }
}
