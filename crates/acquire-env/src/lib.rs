//! Execution environment and installation channels.
//!
//! This crate knows how to look at the machine (interpreters, conda,
//! importable modules) and how to turn "install module X" into a concrete
//! pip, conda or pipenv command line. Host interaction is abstracted behind
//! the traits in [`host`].

pub mod args;
pub mod channels;
pub mod conda;
pub mod error;
pub mod host;
pub mod interpreter;
pub mod process;
pub mod python;

pub use channels::{
    ChannelEnvironment, CondaChannel, ExecutionInfo, InstallationChannel,
    InstallationChannelManager, PipChannel, PipenvChannel, install_spec,
};
pub use conda::{CondaEnvironmentInfo, CondaService, ProcessCondaService};
pub use error::{Error, Result};
pub use host::{ApplicationShell, HostPlatform, OutputChannel, PlatformService, TerminalService};
pub use interpreter::{InterpreterInfo, InterpreterKind, InterpreterService, ProcessInterpreterService};
pub use process::{ExecOptions, ExecOutput, ProcessRunner, TokioProcessRunner};
pub use python::PythonExecution;
