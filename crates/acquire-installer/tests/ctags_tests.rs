//! ctags installation hands off to the output surface or a terminal

mod common;

use acquire_installer::strategies::CTAGS_WINDOWS_INSTRUCTIONS;
use acquire_installer::{Error, InstallerResponse, ModuleNamePurpose, Product};
use acquire_test_utils::{FixedPlatform, RecordingTerminal};
use common::harness;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_windows_writes_manual_instructions() {
    let h = harness().platform(FixedPlatform::windows()).build();

    let response = h
        .installer
        .prompt_to_install(Product::Ctags, None)
        .await
        .unwrap();

    assert_eq!(response, InstallerResponse::Ignore);
    assert_eq!(h.output.lines(), CTAGS_WINDOWS_INSTRUCTIONS.to_vec());
    assert!(h.output.was_shown());
    assert!(h.shell.shown().is_empty());
    assert!(h.terminal.commands().is_empty());
}

#[tokio::test]
async fn test_mac_yes_sends_brew_command() {
    let h = harness().platform(FixedPlatform::mac()).answer("Yes").build();

    h.installer
        .prompt_to_install(Product::Ctags, None)
        .await
        .unwrap();

    let shown = h.shell.shown();
    assert_eq!(shown[0].message, "Tool ctags is not installed. Install?");
    assert_eq!(shown[0].options, vec!["Yes", "No"]);
    assert_eq!(h.terminal.commands(), vec!["brew install ctags"]);
}

#[tokio::test]
async fn test_linux_yes_sends_apt_command() {
    let h = harness().answer("Yes").build();

    h.installer
        .prompt_to_install(Product::Ctags, None)
        .await
        .unwrap();

    assert_eq!(
        h.terminal.commands(),
        vec!["sudo apt-get install exuberant-ctags"]
    );
    assert!(h.output.lines().is_empty());
}

#[tokio::test]
async fn test_declined_prompt_sends_nothing() {
    let h = harness().answer("No").build();

    let response = h
        .installer
        .prompt_to_install(Product::Ctags, None)
        .await
        .unwrap();

    assert_eq!(response, InstallerResponse::Ignore);
    assert!(h.terminal.commands().is_empty());
}

// The command runs in a terminal this flow does not watch, so even a command
// that was handed over successfully reports Ignore rather than Installed.
#[tokio::test]
async fn test_ctags_install_reports_ignore_even_after_command_is_sent() {
    let h = harness().build();

    let response = h.installer.install(Product::Ctags, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Ignore);
    assert_eq!(h.terminal.commands().len(), 1);
}

#[tokio::test]
async fn test_terminal_failure_is_logged_not_returned() {
    let h = harness().terminal(RecordingTerminal::failing()).build();

    let response = h.installer.install(Product::Ctags, None).await;

    assert_eq!(response, Ok(InstallerResponse::Ignore));
}

#[tokio::test]
async fn test_ctags_never_reaches_a_channel() {
    let h = harness().answer("Yes").build();

    h.installer
        .prompt_to_install(Product::Ctags, None)
        .await
        .unwrap();

    assert!(h.process.calls().is_empty());
}

#[test]
fn test_ctags_has_no_module_name() {
    let h = harness().build();

    let result = h
        .installer
        .translate_product_to_module_name(Product::Ctags, ModuleNamePurpose::Install);

    assert_eq!(
        result,
        Err(Error::NotInstallable {
            product: Product::Ctags
        })
    );
}
