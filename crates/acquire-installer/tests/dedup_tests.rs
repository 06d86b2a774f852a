//! Concurrent prompts for the same product and resource share one flow

mod common;

use std::time::Duration;

use acquire_installer::{InstallerResponse, Product, Resource};
use acquire_test_utils::ScriptedShell;
use common::{PYTHON, harness, pip_installs};
use pretty_assertions::assert_eq;

const PROMPT_DELAY: Duration = Duration::from_millis(50);

#[tokio::test]
async fn test_concurrent_prompts_show_one_prompt() {
    let h = harness()
        .answer("Yes")
        .delay(PROMPT_DELAY)
        .process(pip_installs("black"))
        .build();

    let (first, second) = tokio::join!(
        h.installer.prompt_to_install(Product::Black, None),
        h.installer.prompt_to_install(Product::Black, None),
    );

    assert_eq!(first, Ok(InstallerResponse::Installed));
    assert_eq!(second, Ok(InstallerResponse::Installed));
    assert_eq!(h.shell.shown().len(), 1);
    assert_eq!(h.process.count(&format!("{PYTHON} -m pip install")), 1);
}

#[tokio::test]
async fn test_prompt_after_settlement_starts_fresh() {
    let h = harness()
        .shell(ScriptedShell::new().dismiss().answer("Disable linting"))
        .build();

    let first = h.installer.prompt_to_install(Product::Pylint, None).await;
    let second = h.installer.prompt_to_install(Product::Pylint, None).await;

    assert_eq!(first, Ok(InstallerResponse::Ignore));
    assert_eq!(second, Ok(InstallerResponse::Disabled));
    assert_eq!(h.shell.shown().len(), 2);
}

#[tokio::test]
async fn test_different_resources_prompt_separately() {
    let h = harness().delay(PROMPT_DELAY).build();
    let left = Resource::new("/work/left");
    let right = Resource::new("/work/right");

    let (a, b) = tokio::join!(
        h.installer.prompt_to_install(Product::Mypy, Some(&left)),
        h.installer.prompt_to_install(Product::Mypy, Some(&right)),
    );

    assert_eq!(a, Ok(InstallerResponse::Ignore));
    assert_eq!(b, Ok(InstallerResponse::Ignore));
    assert_eq!(h.shell.shown().len(), 2);
}

#[tokio::test]
async fn test_different_products_prompt_separately() {
    let h = harness().delay(PROMPT_DELAY).build();

    let (a, b) = tokio::join!(
        h.installer.prompt_to_install(Product::Pytest, None),
        h.installer.prompt_to_install(Product::Rope, None),
    );

    assert_eq!(a, Ok(InstallerResponse::Ignore));
    assert_eq!(b, Ok(InstallerResponse::Ignore));
    assert_eq!(h.shell.shown().len(), 2);
}

#[tokio::test]
async fn test_global_and_scoped_prompts_are_distinct() {
    let h = harness().delay(PROMPT_DELAY).build();
    let scoped = Resource::new("/work/app");

    let (a, b) = tokio::join!(
        h.installer.prompt_to_install(Product::Flake8, None),
        h.installer.prompt_to_install(Product::Flake8, Some(&scoped)),
    );

    assert_eq!(a, b);
    assert_eq!(h.shell.shown().len(), 2);
}
