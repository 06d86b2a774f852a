//! Product catalog: module names and executable metadata
//!
//! The catalog is static. It answers three questions about a product:
//!
//! - which package name a channel should install ([`translate_product_to_module_name`])
//! - which executable or module the user has configured for it ([`executable_name`])
//! - whether that configured value should be probed as an importable module
//!   or run as an executable ([`is_executable_a_module`])

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::product::{Product, ProductType};

/// Why a module name is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleNamePurpose {
    /// The name a package manager installs.
    Install,
    /// The name used to run the tool.
    #[default]
    Run,
}

/// Translate a product into the canonical package name for the default channel.
///
/// The nose test runner is installed as `nose` but run as `nosetests`.
/// ctags is not a Python package and yields [`Error::NotInstallable`].
pub fn translate_product_to_module_name(
    product: Product,
    purpose: ModuleNamePurpose,
) -> Result<&'static str> {
    match product {
        Product::Nosetest => Ok(match purpose {
            ModuleNamePurpose::Install => "nose",
            ModuleNamePurpose::Run => "nosetests",
        }),
        Product::Ctags => Err(Error::NotInstallable { product }),
        Product::Autopep8
        | Product::Bandit
        | Product::Black
        | Product::Flake8
        | Product::Isort
        | Product::Mypy
        | Product::Pep8
        | Product::Prospector
        | Product::Pydocstyle
        | Product::Pylama
        | Product::Pylint
        | Product::Pytest
        | Product::Rope
        | Product::Unittest
        | Product::Yapf => Ok(product.name()),
    }
}

/// Executable name used when nothing is configured.
pub fn default_executable(product: Product) -> &'static str {
    match product {
        Product::Nosetest => "nosetests",
        _ => product.name(),
    }
}

/// Whether the product is distributed as a Python module at all.
pub fn is_python_module(product: Product) -> bool {
    !matches!(product, Product::Ctags)
}

/// Module imported to check that the default installation is present.
pub fn import_name(product: Product) -> &'static str {
    match product {
        Product::Nosetest => "nose",
        _ => product.name(),
    }
}

/// Executable or module name configured for a product.
pub fn executable_name(product: Product, settings: &Settings) -> String {
    let configured = match product.product_type() {
        ProductType::Linter => settings
            .linting
            .linters
            .get(product.name())
            .and_then(|linter| linter.path.clone()),
        ProductType::Formatter => settings.formatting.paths.get(product.name()).cloned(),
        ProductType::TestFramework => settings.testing.paths.get(product.name()).cloned(),
        ProductType::WorkspaceSymbols => Some(settings.workspace_symbols.ctags_path.clone()),
        ProductType::RefactoringLibrary => None,
    };

    configured
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_executable(product).to_string())
}

/// Whether the configured value names a module rather than a path.
///
/// A value is module-shaped when it has no directory component and is not
/// relative to the current directory.
pub fn is_executable_a_module(product: Product, settings: &Settings) -> bool {
    if !is_python_module(product) {
        return false;
    }
    let name = executable_name(product, settings);
    !name.contains('/') && !name.contains('\\') && !name.starts_with('.')
}

/// Module to import when probing a module-shaped product.
///
/// The default executable maps to the catalog import name so that the
/// install/probe cycle agrees (nose installs `nose`, runs `nosetests`).
pub fn probe_module_name(product: Product, settings: &Settings) -> String {
    let name = executable_name(product, settings);
    if name == default_executable(product) {
        import_name(product).to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinterSettings;
    use rstest::rstest;

    #[rstest]
    #[case(Product::Pylint, ModuleNamePurpose::Install, "pylint")]
    #[case(Product::Black, ModuleNamePurpose::Run, "black")]
    #[case(Product::Nosetest, ModuleNamePurpose::Install, "nose")]
    #[case(Product::Nosetest, ModuleNamePurpose::Run, "nosetests")]
    #[case(Product::Pytest, ModuleNamePurpose::Install, "pytest")]
    #[case(Product::Unittest, ModuleNamePurpose::Run, "unittest")]
    fn test_translate(
        #[case] product: Product,
        #[case] purpose: ModuleNamePurpose,
        #[case] expected: &str,
    ) {
        assert_eq!(
            translate_product_to_module_name(product, purpose).unwrap(),
            expected
        );
    }

    #[test]
    fn test_translate_is_total_over_installable_products() {
        for product in Product::ALL {
            for purpose in [ModuleNamePurpose::Install, ModuleNamePurpose::Run] {
                match translate_product_to_module_name(product, purpose) {
                    Ok(name) => assert!(!name.is_empty(), "{product} mapped to empty name"),
                    Err(Error::NotInstallable { product: failed }) => {
                        assert_eq!(failed, Product::Ctags);
                    }
                    Err(other) => panic!("unexpected error {other}"),
                }
            }
        }
    }

    #[test]
    fn test_translate_ctags_names_product() {
        let err = translate_product_to_module_name(Product::Ctags, ModuleNamePurpose::Install)
            .unwrap_err();
        assert!(err.to_string().contains("ctags"));
    }

    #[test]
    fn test_executable_name_defaults() {
        let settings = Settings::default();
        assert_eq!(executable_name(Product::Pylint, &settings), "pylint");
        assert_eq!(executable_name(Product::Nosetest, &settings), "nosetests");
        assert_eq!(executable_name(Product::Ctags, &settings), "ctags");
    }

    #[test]
    fn test_executable_name_uses_configured_paths() {
        let mut settings = Settings::default();
        settings.linting.linters.insert(
            "flake8".to_string(),
            LinterSettings {
                enabled: Some(true),
                path: Some("/opt/bin/flake8".to_string()),
            },
        );
        settings
            .formatting
            .paths
            .insert("black".to_string(), "tools/black".to_string());

        assert_eq!(executable_name(Product::Flake8, &settings), "/opt/bin/flake8");
        assert_eq!(executable_name(Product::Black, &settings), "tools/black");
        assert!(!is_executable_a_module(Product::Flake8, &settings));
        assert!(!is_executable_a_module(Product::Black, &settings));
    }

    #[test]
    fn test_blank_configured_path_falls_back_to_default() {
        let mut settings = Settings::default();
        settings
            .testing
            .paths
            .insert("pytest".to_string(), "  ".to_string());
        assert_eq!(executable_name(Product::Pytest, &settings), "pytest");
    }

    #[rstest]
    #[case("pylint", true)]
    #[case("./pylint", false)]
    #[case("C:\\tools\\pylint.exe", false)]
    #[case("/usr/bin/pylint", false)]
    fn test_is_executable_a_module(#[case] configured: &str, #[case] expected: bool) {
        let mut settings = Settings::default();
        settings.linting.linters.insert(
            "pylint".to_string(),
            LinterSettings {
                enabled: None,
                path: Some(configured.to_string()),
            },
        );
        assert_eq!(is_executable_a_module(Product::Pylint, &settings), expected);
    }

    #[test]
    fn test_ctags_is_never_a_module() {
        assert!(!is_executable_a_module(Product::Ctags, &Settings::default()));
    }

    #[test]
    fn test_probe_module_name() {
        let mut settings = Settings::default();
        assert_eq!(probe_module_name(Product::Nosetest, &settings), "nose");
        assert_eq!(probe_module_name(Product::Mypy, &settings), "mypy");

        settings
            .testing
            .paths
            .insert("pytest".to_string(), "py.test".to_string());
        assert_eq!(probe_module_name(Product::Pytest, &settings), "py.test");
    }
}
