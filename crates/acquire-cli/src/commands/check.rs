//! `acquire check`

use std::path::{Path, PathBuf};

use acquire_meta::{Product, ProductType};
use colored::Colorize;

use super::{build_installer, resolve_resource};
use crate::error::Result;

pub async fn run_check(config: Option<&Path>, product: Product, resource: Option<PathBuf>) -> Result<()> {
    let resource = resolve_resource(resource)?;
    let installer = build_installer(config)?;

    if installer.is_installed(product, resource.as_ref()).await {
        println!("{} {} is installed", "✓".green(), product.to_string().bold());
    } else {
        println!("{} {} is not installed", "✗".red(), product.to_string().bold());
    }

    let settings = installer.services().config.settings(resource.as_ref());
    if product.product_type() == ProductType::Linter && !settings.linter_enabled(product) {
        println!("  {}", "disabled in settings".dimmed());
    }
    Ok(())
}
