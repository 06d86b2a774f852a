//! `acquire install` and `acquire prompt`

use std::path::{Path, PathBuf};

use acquire_meta::{InstallerResponse, Product};
use colored::Colorize;

use super::{build_installer, resolve_resource};
use crate::error::Result;

pub async fn run_install(config: Option<&Path>, product: Product, resource: Option<PathBuf>) -> Result<()> {
    let resource = resolve_resource(resource)?;
    let installer = build_installer(config)?;

    let response = installer.install(product, resource.as_ref()).await?;
    report(product, response);
    Ok(())
}

pub async fn run_prompt(config: Option<&Path>, product: Product, resource: Option<PathBuf>) -> Result<()> {
    let resource = resolve_resource(resource)?;
    let installer = build_installer(config)?;

    let response = installer
        .prompt_to_install(product, resource.as_ref())
        .await?;
    report(product, response);
    Ok(())
}

fn report(product: Product, response: InstallerResponse) {
    let status = match response {
        InstallerResponse::Installed => response.to_string().green(),
        InstallerResponse::Disabled => response.to_string().yellow(),
        InstallerResponse::Ignore => response.to_string().dimmed(),
    };
    println!("{}: {}", product.to_string().bold(), status);
}
