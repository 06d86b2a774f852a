//! CLI argument parsing using clap derive

use std::path::PathBuf;

use acquire_meta::{ModuleNamePurpose, Product};
use clap::{Parser, Subcommand, ValueEnum};

/// acquire - check for and install Python developer tools
#[derive(Parser, Debug)]
#[command(name = "acquire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Global settings file (defaults to <config dir>/acquire/settings.toml)
    #[arg(long, global = true, env = "ACQUIRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report whether a product is installed
    ///
    /// Examples:
    ///   acquire check pylint
    ///   acquire check black --resource ./my-project
    Check {
        /// Product name (pylint, black, pytest, ctags, ...)
        product: Product,

        /// Workspace folder or file the check applies to
        #[arg(short, long)]
        resource: Option<PathBuf>,
    },

    /// Install a product without asking
    Install {
        /// Product name
        product: Product,

        /// Workspace folder or file the install applies to
        #[arg(short, long)]
        resource: Option<PathBuf>,
    },

    /// Ask how to proceed with a missing product, then act on the answer
    Prompt {
        /// Product name
        product: Product,

        /// Workspace folder or file the prompt applies to
        #[arg(short, long)]
        resource: Option<PathBuf>,
    },

    /// List known products with their category and package name
    List,

    /// Print the module name of a product
    ModuleName {
        /// Product name
        product: Product,

        /// Why the name is needed
        #[arg(long, value_enum, default_value_t = Purpose::Run)]
        purpose: Purpose,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    /// Name a package manager installs
    Install,
    /// Name used to run the tool
    Run,
}

impl From<Purpose> for ModuleNamePurpose {
    fn from(purpose: Purpose) -> Self {
        match purpose {
            Purpose::Install => ModuleNamePurpose::Install,
            Purpose::Run => ModuleNamePurpose::Run,
        }
    }
}
