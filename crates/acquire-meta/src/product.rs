//! The closed set of installable products and their categories

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A developer-tool capability that can be detected and installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Product {
    Autopep8,
    Bandit,
    Black,
    Ctags,
    Flake8,
    Isort,
    Mypy,
    Nosetest,
    Pep8,
    Prospector,
    Pydocstyle,
    Pylama,
    Pylint,
    Pytest,
    Rope,
    Unittest,
    Yapf,
}

/// Category a product belongs to.
///
/// Every product has exactly one category; see [`Product::product_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Formatter,
    Linter,
    WorkspaceSymbols,
    TestFramework,
    RefactoringLibrary,
}

impl Product {
    /// All products, sorted by name.
    pub const ALL: [Product; 17] = [
        Product::Autopep8,
        Product::Bandit,
        Product::Black,
        Product::Ctags,
        Product::Flake8,
        Product::Isort,
        Product::Mypy,
        Product::Nosetest,
        Product::Pep8,
        Product::Prospector,
        Product::Pydocstyle,
        Product::Pylama,
        Product::Pylint,
        Product::Pytest,
        Product::Rope,
        Product::Unittest,
        Product::Yapf,
    ];

    /// Formatters the user can switch between when one is missing.
    pub const FORMATTERS: [Product; 3] = [Product::Autopep8, Product::Black, Product::Yapf];

    /// Human-facing product name, also used as the settings key.
    pub fn name(&self) -> &'static str {
        match self {
            Product::Autopep8 => "autopep8",
            Product::Bandit => "bandit",
            Product::Black => "black",
            Product::Ctags => "ctags",
            Product::Flake8 => "flake8",
            Product::Isort => "isort",
            Product::Mypy => "mypy",
            Product::Nosetest => "nose",
            Product::Pep8 => "pep8",
            Product::Prospector => "prospector",
            Product::Pydocstyle => "pydocstyle",
            Product::Pylama => "pylama",
            Product::Pylint => "pylint",
            Product::Pytest => "pytest",
            Product::Rope => "rope",
            Product::Unittest => "unittest",
            Product::Yapf => "yapf",
        }
    }

    pub fn product_type(&self) -> ProductType {
        match self {
            Product::Autopep8 | Product::Black | Product::Yapf => ProductType::Formatter,
            Product::Bandit
            | Product::Flake8
            | Product::Mypy
            | Product::Pep8
            | Product::Prospector
            | Product::Pydocstyle
            | Product::Pylama
            | Product::Pylint => ProductType::Linter,
            Product::Ctags => ProductType::WorkspaceSymbols,
            Product::Nosetest | Product::Pytest | Product::Unittest => ProductType::TestFramework,
            Product::Isort | Product::Rope => ProductType::RefactoringLibrary,
        }
    }

    /// Whether this product ships with the interpreter and never needs installing.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Product::Unittest)
    }
}

impl FromStr for Product {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered == "nosetest" || lowered == "nosetests" {
            return Ok(Product::Nosetest);
        }
        Product::ALL
            .iter()
            .copied()
            .find(|p| p.name() == lowered)
            .ok_or_else(|| Error::UnknownProduct {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductType::Formatter => "formatter",
            ProductType::Linter => "linter",
            ProductType::WorkspaceSymbols => "workspace-symbols",
            ProductType::TestFramework => "test-framework",
            ProductType::RefactoringLibrary => "refactoring-library",
        };
        f.write_str(label)
    }
}
