//! acquire CLI
//!
//! Checks whether Python developer tools are present and installs them
//! through pip, conda or pipenv.

mod cli;
mod commands;
mod error;
mod host;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    let config = cli.config.as_deref();
    match cli.command {
        Some(Commands::Check { product, resource }) => {
            commands::run_check(config, product, resource).await
        }
        Some(Commands::Install { product, resource }) => {
            commands::run_install(config, product, resource).await
        }
        Some(Commands::Prompt { product, resource }) => {
            commands::run_prompt(config, product, resource).await
        }
        Some(Commands::List) => commands::run_list(),
        Some(Commands::ModuleName { product, purpose }) => {
            commands::run_module_name(product, purpose.into())
        }
        None => {
            println!("{} Tool acquisition CLI", "acquire".green().bold());
            println!();
            println!("Run {} for available commands.", "acquire --help".cyan());
            Ok(())
        }
    }
}
