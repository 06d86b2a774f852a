//! Host collaborators: prompts, output surface, terminal and platform
//!
//! The orchestrator never talks to a user or a terminal directly. A host
//! (the CLI, an editor integration, a test) supplies these.

use async_trait::async_trait;

use crate::error::Result;

/// Interactive prompts.
#[async_trait]
pub trait ApplicationShell: Send + Sync {
    /// Show an error message with buttons; returns the chosen button label,
    /// or `None` when dismissed.
    async fn show_error_message(&self, message: &str, options: &[String]) -> Option<String>;

    /// Let the user pick one item; returns its index, or `None` when dismissed.
    async fn show_quick_pick(&self, placeholder: &str, items: &[String]) -> Option<usize>;

    async fn open_url(&self, url: &str);
}

/// Append-only text surface for instructions and diagnostics.
pub trait OutputChannel: Send + Sync {
    fn append_line(&self, line: &str);

    /// Bring the surface to the user's attention.
    fn show(&self);
}

/// Terminal the user can watch commands run in.
#[async_trait]
pub trait TerminalService: Send + Sync {
    /// Hand a command to the terminal.
    async fn send_command(&self, command: &str, args: &[String]) -> Result<()>;
}

/// Host operating system facts.
pub trait PlatformService: Send + Sync {
    fn is_windows(&self) -> bool;
    fn is_mac(&self) -> bool;
    fn os_name(&self) -> &str;
}

/// [`PlatformService`] for the machine we are running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformService for HostPlatform {
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn is_mac(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn os_name(&self) -> &str {
        match std::env::consts::OS {
            "windows" => "Windows",
            "macos" => "Mac",
            _ => "Linux",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_platform_is_consistent() {
        let platform = HostPlatform;
        assert!(!(platform.is_windows() && platform.is_mac()));
        assert!(["Windows", "Mac", "Linux"].contains(&platform.os_name()));
    }
}
