//! Scripted process runner.

use std::sync::Mutex;

use acquire_env::{Error, ExecOptions, ExecOutput, ProcessRunner, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
struct Rule {
    prefix: String,
    stdout: Option<String>,
}

#[derive(Debug, Clone)]
struct Trigger {
    on: String,
    rule: Rule,
}

/// A [`ProcessRunner`] answering from prefix rules.
///
/// Each call is rendered as a command line (`program arg arg`, or the raw
/// shell command) and matched against the most recently added rule whose
/// prefix it starts with. Unmatched commands fail as not found.
///
/// # Example
///
/// ```rust
/// use acquire_test_utils::FakeProcessRunner;
///
/// let process = FakeProcessRunner::new()
///     .succeed("python -c import pip", "")
///     .fail("python -c import black")
///     .after("python -m pip install -U black", "python -c import black");
/// ```
#[derive(Debug, Default)]
pub struct FakeProcessRunner {
    rules: Mutex<Vec<Rule>>,
    triggers: Mutex<Vec<Trigger>>,
    calls: Mutex<Vec<String>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix` succeed with `stdout`.
    pub fn succeed(self, prefix: &str, stdout: &str) -> Self {
        self.push(Rule {
            prefix: prefix.to_string(),
            stdout: Some(stdout.to_string()),
        });
        self
    }

    /// Commands starting with `prefix` fail with exit code 1.
    pub fn fail(self, prefix: &str) -> Self {
        self.push(Rule {
            prefix: prefix.to_string(),
            stdout: None,
        });
        self
    }

    /// Once a command starting with `trigger` succeeds, commands starting
    /// with `prefix` succeed too. Models an install making a module importable.
    pub fn after(self, trigger: &str, prefix: &str) -> Self {
        self.lock_triggers().push(Trigger {
            on: trigger.to_string(),
            rule: Rule {
                prefix: prefix.to_string(),
                stdout: Some(String::new()),
            },
        });
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of calls starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn push(&self, rule: Rule) {
        self.rules
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(rule);
    }

    fn lock_triggers(&self) -> std::sync::MutexGuard<'_, Vec<Trigger>> {
        self.triggers.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn answer(&self, line: String) -> Result<ExecOutput> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.clone());

        let rule = self
            .rules
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .rev()
            .find(|r| line.starts_with(&r.prefix))
            .cloned();

        match rule {
            Some(Rule {
                stdout: Some(stdout),
                ..
            }) => {
                let fired: Vec<Rule> = {
                    let mut triggers = self.lock_triggers();
                    let (fired, pending): (Vec<_>, Vec<_>) = triggers
                        .drain(..)
                        .partition(|t| line.starts_with(&t.on));
                    *triggers = pending;
                    fired.into_iter().map(|t| t.rule).collect()
                };
                for rule in fired {
                    self.push(rule);
                }
                Ok(ExecOutput {
                    stdout,
                    stderr: String::new(),
                })
            }
            Some(Rule { stdout: None, .. }) => Err(Error::CommandFailed {
                command: line,
                code: 1,
                stderr: "scripted failure".to_string(),
            }),
            None => Err(Error::CommandNotFound { command: line }),
        }
    }
}

#[async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn exec(&self, file: &str, args: &[String], _options: &ExecOptions) -> Result<ExecOutput> {
        let line = std::iter::once(file)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        self.answer(line)
    }

    async fn shell_exec(&self, command: &str, _options: &ExecOptions) -> Result<ExecOutput> {
        self.answer(command.to_string())
    }
}
