//! Terminal-backed host collaborators
//!
//! Prompts use dialoguer; they run on the blocking pool so the runtime keeps
//! driving other work. Without a TTY every prompt counts as dismissed.

use std::process::Stdio;

use acquire_env::{ApplicationShell, Error, OutputChannel, TerminalService};
use async_trait::async_trait;
use colored::Colorize;
use dialoguer::Select;
use tokio::process::Command;
use tracing::{debug, warn};

/// [`ApplicationShell`] prompting on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerShell;

impl DialoguerShell {
    async fn select(prompt: String, items: Vec<String>) -> Option<usize> {
        let selection = tokio::task::spawn_blocking(move || {
            Select::new()
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact_opt()
        })
        .await;

        match selection {
            Ok(Ok(choice)) => choice,
            Ok(Err(e)) => {
                debug!(error = %e, "Prompt unavailable, treating as dismissed");
                None
            }
            Err(e) => {
                warn!(error = %e, "Prompt task failed");
                None
            }
        }
    }
}

#[async_trait]
impl ApplicationShell for DialoguerShell {
    async fn show_error_message(&self, message: &str, options: &[String]) -> Option<String> {
        eprintln!("{} {}", "!".red().bold(), message);
        if options.is_empty() {
            return None;
        }
        let index = Self::select("Choose an action".to_string(), options.to_vec()).await?;
        options.get(index).cloned()
    }

    async fn show_quick_pick(&self, placeholder: &str, items: &[String]) -> Option<usize> {
        Self::select(placeholder.to_string(), items.to_vec()).await
    }

    async fn open_url(&self, url: &str) {
        println!("{} {}", "Open:".cyan(), url);
    }
}

/// [`OutputChannel`] printing straight to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutput;

impl OutputChannel for ConsoleOutput {
    fn append_line(&self, line: &str) {
        println!("{line}");
    }

    fn show(&self) {}
}

/// [`TerminalService`] running commands through the system shell with
/// inherited stdio, so the user sees them and can answer `sudo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellTerminal;

#[async_trait]
impl TerminalService for ShellTerminal {
    async fn send_command(&self, command: &str, args: &[String]) -> acquire_env::Result<()> {
        let line = std::iter::once(command)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{} {}", "$".dimmed(), line);

        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&line);
            cmd
        };
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: line,
                code: status.code().unwrap_or(-1),
                stderr: String::new(),
            })
        }
    }
}
