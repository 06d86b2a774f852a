//! Probing and channel-driven installation

mod common;

use acquire_installer::{InstallerResponse, Product};
use acquire_meta::Settings;
use acquire_test_utils::FakeProcessRunner;
use acquire_test_utils::env::settings_with_linter_path;
use common::{PIP_PROBE, PYTHON, harness, pip_installs};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_unittest_is_installed_without_probing() {
    let h = harness().build();

    assert!(h.installer.is_installed(Product::Unittest, None).await);
    assert!(h.process.calls().is_empty());
    assert_eq!(h.interpreters.calls(), 0);
}

#[tokio::test]
async fn test_unittest_install_is_immediate() {
    let h = harness().build();

    let response = h.installer.install(Product::Unittest, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Installed);
    assert!(h.process.calls().is_empty());
    assert!(h.shell.shown().is_empty());
}

#[tokio::test]
async fn test_module_probe_imports_with_active_interpreter() {
    let h = harness()
        .process(FakeProcessRunner::new().succeed("/env/bin/python -c import pylint", ""))
        .build();

    assert!(h.installer.is_installed(Product::Pylint, None).await);
    assert_eq!(h.process.calls(), vec!["/env/bin/python -c import pylint"]);
}

#[tokio::test]
async fn test_missing_module_is_not_installed() {
    let h = harness()
        .process(FakeProcessRunner::new().fail("/env/bin/python -c import flake8"))
        .build();

    assert!(!h.installer.is_installed(Product::Flake8, None).await);
}

#[tokio::test]
async fn test_nose_probes_its_import_name() {
    let h = harness()
        .process(FakeProcessRunner::new().succeed("/env/bin/python -c import nose", ""))
        .build();

    assert!(h.installer.is_installed(Product::Nosetest, None).await);
    assert_eq!(h.process.calls(), vec!["/env/bin/python -c import nose"]);
}

#[tokio::test]
async fn test_probe_falls_back_to_configured_python() {
    let h = harness()
        .no_interpreter()
        .process(FakeProcessRunner::new().succeed("python -c import black", ""))
        .build();

    assert!(h.installer.is_installed(Product::Black, None).await);
}

#[tokio::test]
async fn test_path_configured_linter_runs_version() {
    let h = harness()
        .settings(settings_with_linter_path(Product::Pylint, "/opt/tools/pylint"))
        .process(FakeProcessRunner::new().succeed("/opt/tools/pylint --version", "pylint 3.0.0"))
        .build();

    assert!(h.installer.is_installed(Product::Pylint, None).await);
    assert_eq!(h.process.calls(), vec!["/opt/tools/pylint --version"]);
}

#[tokio::test]
async fn test_failing_version_probe_is_not_installed() {
    let h = harness()
        .settings(settings_with_linter_path(Product::Mypy, "./venv/bin/mypy"))
        .process(FakeProcessRunner::new().fail("./venv/bin/mypy --version"))
        .build();

    assert!(!h.installer.is_installed(Product::Mypy, None).await);
}

#[tokio::test]
async fn test_ctags_probe_runs_executable() {
    let mut settings = Settings::default();
    settings.workspace_symbols.ctags_path = "/usr/local/bin/ctags".to_string();
    let h = harness()
        .settings(settings)
        .process(FakeProcessRunner::new().succeed("/usr/local/bin/ctags --version", ""))
        .build();

    assert!(h.installer.is_installed(Product::Ctags, None).await);
}

#[tokio::test]
async fn test_install_without_channel_is_ignore() {
    let h = harness().build();

    let response = h.installer.install(Product::Black, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Ignore);
    assert_eq!(h.process.calls(), vec![PIP_PROBE]);
    let shown = h.shell.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(
        shown[0].message,
        "There is no Pip installer available in the selected environment."
    );
}

#[tokio::test]
async fn test_install_then_probe_round_trip() {
    let h = harness().process(pip_installs("black")).build();

    let response = h.installer.install(Product::Black, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Installed);
    assert!(h.installer.is_installed(Product::Black, None).await);
    assert_eq!(
        h.process.count(&format!("{PYTHON} -m pip install -U black")),
        1
    );
}

#[tokio::test]
async fn test_failing_install_command_is_swallowed() {
    let process = FakeProcessRunner::new()
        .succeed(PIP_PROBE, "")
        .fail("/env/bin/python -m pip install");
    let h = harness().process(process).build();

    let response = h.installer.install(Product::Isort, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Ignore);
    assert_eq!(
        h.process.calls(),
        vec![
            PIP_PROBE,
            "/env/bin/python -m pip install -U isort",
            "/env/bin/python -c import isort",
        ]
    );
}

#[tokio::test]
async fn test_response_comes_from_fresh_probe() {
    // The command reports failure, yet the module is importable afterwards.
    let process = FakeProcessRunner::new()
        .succeed(PIP_PROBE, "")
        .fail("/env/bin/python -m pip install")
        .succeed("/env/bin/python -c import yapf", "");
    let h = harness().process(process).build();

    let response = h.installer.install(Product::Yapf, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Installed);
}

#[tokio::test]
async fn test_nose_installs_under_package_name() {
    let process = FakeProcessRunner::new()
        .succeed(PIP_PROBE, "")
        .succeed("/env/bin/python -m pip install -U nose", "")
        .after(
            "/env/bin/python -m pip install -U nose",
            "/env/bin/python -c import nose",
        );
    let h = harness().process(process).build();

    let response = h.installer.install(Product::Nosetest, None).await.unwrap();

    assert_eq!(response, InstallerResponse::Installed);
    assert!(h.installer.is_installed(Product::Nosetest, None).await);
}
