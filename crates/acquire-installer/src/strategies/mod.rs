//! Category strategies
//!
//! One installer per [`ProductType`](acquire_meta::ProductType). Each only
//! decides what to ask the user and what to do with the answer; probing and
//! installing go through [`BaseInstaller`](crate::BaseInstaller).

mod ctags;
mod formatter;
mod linter;
mod refactoring;
mod test_framework;

pub use ctags::{CTAGS_WINDOWS_INSTRUCTIONS, CTagsInstaller, ctags_install_script};
pub use formatter::FormatterInstaller;
pub use linter::LinterInstaller;
pub use refactoring::RefactoringLibraryInstaller;
pub use test_framework::TestFrameworkInstaller;

use acquire_meta::catalog::{executable_name, is_executable_a_module};
use acquire_meta::{InstallerResponse, Product, Resource, Result};

use crate::base::InstallStrategy;

pub(crate) const YES: &str = "Yes";
pub(crate) const NO: &str = "No";

/// Yes/No flow shared by test frameworks and refactoring libraries.
///
/// `category` names the kind of tool in the message. A path-configured
/// product gets an invalid-path message and no buttons.
pub(crate) async fn confirm_install<S: InstallStrategy + ?Sized>(
    strategy: &S,
    category: &str,
    product: Product,
    resource: Option<&Resource>,
) -> Result<InstallerResponse> {
    let services = strategy.base().services();
    let settings = services.config.settings(resource);

    let (message, options) = if is_executable_a_module(product, &settings) {
        (
            format!(
                "{} {product} is not installed. Install?",
                capitalize(category)
            ),
            vec![YES.to_string(), NO.to_string()],
        )
    } else {
        let executable = executable_name(product, &settings);
        (
            format!("Path to the {product} {category} is invalid ({executable})"),
            Vec::new(),
        )
    };

    let choice = services.host.shell.show_error_message(&message, &options).await;
    if choice.as_deref() == Some(YES) {
        strategy.install(product, resource).await
    } else {
        Ok(InstallerResponse::Ignore)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("test framework"), "Test framework");
        assert_eq!(capitalize("refactoring library"), "Refactoring library");
        assert_eq!(capitalize(""), "");
    }
}
