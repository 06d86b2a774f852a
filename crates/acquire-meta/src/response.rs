//! Terminal outcome of an install or prompt flow

use std::fmt;

/// Outcome of an install or prompt-to-install flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallerResponse {
    /// The product is present after the flow.
    Installed,
    /// The user turned the feature off instead of installing.
    Disabled,
    /// Nothing changed: declined, dismissed, or the install did not take.
    Ignore,
}

impl fmt::Display for InstallerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallerResponse::Installed => write!(f, "installed"),
            InstallerResponse::Disabled => write!(f, "disabled"),
            InstallerResponse::Ignore => write!(f, "ignored"),
        }
    }
}
