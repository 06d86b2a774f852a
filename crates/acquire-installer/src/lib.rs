//! Product installers for the tool acquisition orchestrator.
//!
//! [`ProductInstaller`] is the entry point. It maps a [`Product`] to the
//! installer for its category and forwards the three operations:
//!
//! - [`ProductInstaller::is_installed`] probes the environment
//! - [`ProductInstaller::install`] installs through a channel and re-probes
//! - [`ProductInstaller::prompt_to_install`] runs the category's interactive
//!   flow, coalescing concurrent requests for the same product and resource
//!
//! Expected failures (no channel, a failing install command, a declined
//! prompt) never surface as errors; they end in an [`InstallerResponse`].
//! Only catalog bugs are returned as [`Error`].

pub mod base;
pub mod cache;
pub mod installer;
pub mod services;
pub mod strategies;

pub use acquire_meta::{Error, InstallerResponse, ModuleNamePurpose, Product, Resource, Result};
pub use base::{BaseInstaller, InstallStrategy};
pub use cache::PromptCache;
pub use installer::{CategoryInstaller, ProductInstaller};
pub use services::{HostServices, InstallerServices};
pub use strategies::{
    CTagsInstaller, FormatterInstaller, LinterInstaller, RefactoringLibraryInstaller,
    TestFrameworkInstaller,
};
