//! Product catalog and settings for the tool acquisition orchestrator.
//!
//! This crate holds the static knowledge the orchestrator works from:
//! the closed set of products, their categories, the names channels install
//! them under, and the settings that say where each tool lives.

pub mod catalog;
pub mod config;
pub mod error;
pub mod product;
pub mod resource;
pub mod response;
pub mod store;

pub use catalog::{ModuleNamePurpose, translate_product_to_module_name};
pub use config::{ConfigurationService, SettingKey, SettingValue, Settings};
pub use error::{Error, Result};
pub use product::{Product, ProductType};
pub use resource::{Resource, resource_key};
pub use response::InstallerResponse;
pub use store::TomlConfigurationService;
