//! Shared test fakes for the acquire workspace.
//!
//! Every collaborator the orchestrator talks to has a fake here. They record
//! what they were asked and answer from a script, so tests can assert on exact
//! command lines and prompt texts without touching the machine.
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`process`]: scripted [`ProcessRunner`](acquire_env::ProcessRunner)
//! - [`host`]: scripted shell, recording terminal and output, fixed platform
//! - [`env`]: static interpreter, conda and configuration services, fake channel

pub mod env;
pub mod host;
pub mod process;

pub use env::{FakeChannel, InMemoryConfiguration, StaticCondaService, StaticInterpreters};
pub use host::{FixedPlatform, MemoryOutput, RecordingTerminal, ScriptedShell};
pub use process::FakeProcessRunner;
