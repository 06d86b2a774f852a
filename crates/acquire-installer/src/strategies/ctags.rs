//! ctags: manual instructions on Windows, a package-manager command elsewhere
//!
//! ctags is not a Python package, so no channel is involved. The command is
//! handed to a terminal and its outcome is never observed here: `install`
//! resolves [`InstallerResponse::Ignore`] whether or not it later succeeds.

use acquire_env::PlatformService;
use acquire_meta::{InstallerResponse, Product, Resource, Result};
use async_trait::async_trait;
use tracing::error;

use super::{NO, YES};
use crate::base::{BaseInstaller, InstallStrategy};

pub const CTAGS_WINDOWS_INSTRUCTIONS: [&str; 5] = [
    "Install Universal Ctags Win32 to enable support for Workspace Symbols",
    "Download the CTags binary from the Universal CTags site.",
    "Option 1: Extract ctags.exe from the downloaded zip to any folder within your PATH so that it can be run.",
    "Option 2: Extract to any folder and add the path to this folder to the command setting.",
    "Option 3: Extract to any folder and set workspace_symbols.ctags_path in your settings.toml to that path.",
];

/// Shell command installing ctags on a non-Windows host.
pub fn ctags_install_script(platform: &dyn PlatformService) -> &'static str {
    if platform.is_mac() {
        "brew install ctags"
    } else {
        "sudo apt-get install exuberant-ctags"
    }
}

#[derive(Clone)]
pub struct CTagsInstaller {
    base: BaseInstaller,
}

impl CTagsInstaller {
    pub fn new(base: BaseInstaller) -> Self {
        Self { base }
    }
}

#[async_trait]
impl InstallStrategy for CTagsInstaller {
    fn base(&self) -> &BaseInstaller {
        &self.base
    }

    async fn prompt_to_install_implementation(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        let host = &self.base.services().host;
        if host.platform.is_windows() {
            return self.install(product, resource).await;
        }

        let message = format!("Tool {product} is not installed. Install?");
        let choice = host
            .shell
            .show_error_message(&message, &[YES.to_string(), NO.to_string()])
            .await;
        if choice.as_deref() == Some(YES) {
            self.install(product, resource).await
        } else {
            Ok(InstallerResponse::Ignore)
        }
    }

    async fn install(
        &self,
        _product: Product,
        _resource: Option<&Resource>,
    ) -> Result<InstallerResponse> {
        let host = &self.base.services().host;
        if host.platform.is_windows() {
            for line in CTAGS_WINDOWS_INSTRUCTIONS {
                host.output.append_line(line);
            }
            host.output.show();
        } else {
            let script = ctags_install_script(host.platform.as_ref());
            if let Err(e) = host.terminal.send_command(script, &[]).await {
                error!(error = %e, "Failed to install ctags. Script sent '{script}'.");
            }
        }
        Ok(InstallerResponse::Ignore)
    }
}
