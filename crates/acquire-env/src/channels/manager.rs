//! Choosing a channel for a product

use std::sync::Arc;

use acquire_meta::{Product, Resource};
use tracing::debug;

use super::{ChannelEnvironment, CondaChannel, InstallationChannel, PipChannel, PipenvChannel};
use crate::conda::CondaService;
use crate::host::{ApplicationShell, PlatformService};
use crate::interpreter::{InterpreterKind, InterpreterService};

const SEARCH_FOR_HELP: &str = "Search for help";

/// Picks the channel used to install a product.
///
/// Channels are grouped by priority, highest first. The first group with at
/// least one supported channel wins; lower groups are never consulted.
pub struct InstallationChannelManager {
    channels: Vec<Arc<dyn InstallationChannel>>,
    shell: Arc<dyn ApplicationShell>,
    interpreters: Arc<dyn InterpreterService>,
    platform: Arc<dyn PlatformService>,
}

impl InstallationChannelManager {
    pub fn new(
        channels: Vec<Arc<dyn InstallationChannel>>,
        shell: Arc<dyn ApplicationShell>,
        interpreters: Arc<dyn InterpreterService>,
        platform: Arc<dyn PlatformService>,
    ) -> Self {
        Self {
            channels,
            shell,
            interpreters,
            platform,
        }
    }

    /// Manager over the pip, conda and pipenv channels.
    pub fn with_builtins(
        env: ChannelEnvironment,
        conda: Arc<dyn CondaService>,
        shell: Arc<dyn ApplicationShell>,
        platform: Arc<dyn PlatformService>,
    ) -> Self {
        let interpreters = env.interpreters.clone();
        let channels: Vec<Arc<dyn InstallationChannel>> = vec![
            Arc::new(PipChannel::new(env.clone())),
            Arc::new(CondaChannel::new(env.clone(), conda)),
            Arc::new(PipenvChannel::new(env)),
        ];
        Self::new(channels, shell, interpreters, platform)
    }

    /// Supported channels from the highest-priority group that has any.
    pub async fn installation_channels(
        &self,
        resource: Option<&Resource>,
    ) -> Vec<Arc<dyn InstallationChannel>> {
        let mut ordered = self.channels.clone();
        ordered.sort_by_key(|c| std::cmp::Reverse(c.priority()));

        let mut supported = Vec::new();
        let mut current = match ordered.first() {
            Some(first) => first.priority(),
            None => return supported,
        };

        for channel in ordered {
            if channel.priority() != current {
                if !supported.is_empty() {
                    break;
                }
                current = channel.priority();
            }
            if channel.is_supported(resource).await {
                supported.push(channel);
            }
        }
        supported
    }

    /// Channel to install `product` with, asking the user when several fit.
    ///
    /// Returns `None` when no channel is usable or the user dismisses the pick.
    pub async fn installation_channel(
        &self,
        product: Product,
        resource: Option<&Resource>,
    ) -> Option<Arc<dyn InstallationChannel>> {
        let mut channels = self.installation_channels(resource).await;
        debug!(%product, count = channels.len(), "Supported installation channels");

        match channels.len() {
            0 => {
                self.show_no_installers_message(resource).await;
                None
            }
            1 => channels.pop(),
            _ => {
                let placeholder = format!("Select an option to install {product}");
                let items: Vec<String> = channels
                    .iter()
                    .map(|c| format!("Install using {}", c.display_name()))
                    .collect();
                let selection = self.shell.show_quick_pick(&placeholder, &items).await?;
                channels.into_iter().nth(selection)
            }
        }
    }

    async fn show_no_installers_message(&self, resource: Option<&Resource>) {
        // No interpreter at all is reported elsewhere.
        let Some(interpreter) = self.interpreters.active_interpreter(resource).await else {
            return;
        };

        let is_conda = interpreter.kind == InterpreterKind::Conda;
        let message = if is_conda {
            "There is no Conda or Pip installer available in the selected environment."
        } else {
            "There is no Pip installer available in the selected environment."
        };

        let choice = self
            .shell
            .show_error_message(message, &[SEARCH_FOR_HELP.to_string()])
            .await;
        if choice.as_deref() == Some(SEARCH_FOR_HELP) {
            let suffix = if is_conda { "+Conda" } else { "" };
            let url = format!(
                "https://www.bing.com/search?q=Install+Pip+{}{}",
                self.platform.os_name(),
                suffix
            );
            self.shell.open_url(&url).await;
        }
    }
}
