//! `acquire list` and `acquire module-name`

use acquire_meta::{ModuleNamePurpose, Product, translate_product_to_module_name};
use colored::Colorize;

use crate::error::Result;

pub fn run_list() -> Result<()> {
    println!("{}", "Known Products".bold());
    println!();
    for product in Product::ALL {
        let package = translate_product_to_module_name(product, ModuleNamePurpose::Install)
            .map(|name| name.to_string())
            .unwrap_or_else(|_| "-".to_string());
        println!(
            "  {:<12} {:<20} {}",
            product.to_string().green(),
            product.product_type().to_string().cyan(),
            package.dimmed()
        );
    }
    println!();
    Ok(())
}

pub fn run_module_name(product: Product, purpose: ModuleNamePurpose) -> Result<()> {
    let name = translate_product_to_module_name(product, purpose)?;
    println!("{name}");
    Ok(())
}
