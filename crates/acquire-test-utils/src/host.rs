//! Host fakes: prompts, output, terminal, platform.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use acquire_env::{
    ApplicationShell, Error, OutputChannel, PlatformService, Result, TerminalService,
};
use async_trait::async_trait;

/// A prompt the shell was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMessage {
    pub message: String,
    pub options: Vec<String>,
}

/// [`ApplicationShell`] answering from queues.
///
/// Unscripted prompts are dismissed. An optional delay keeps prompts
/// pending long enough for concurrent callers to pile up.
#[derive(Debug, Default)]
pub struct ScriptedShell {
    answers: Mutex<VecDeque<Option<String>>>,
    picks: Mutex<VecDeque<Option<usize>>>,
    shown: Mutex<Vec<ShownMessage>>,
    quick_picks: Mutex<Vec<ShownMessage>>,
    urls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a button label as the answer to the next error message.
    pub fn answer(self, choice: &str) -> Self {
        self.answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Some(choice.to_string()));
        self
    }

    /// Queue a dismissal of the next error message.
    pub fn dismiss(self) -> Self {
        self.answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(None);
        self
    }

    /// Queue the index picked in the next quick pick.
    pub fn pick(self, index: usize) -> Self {
        self.picks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Some(index));
        self
    }

    /// Hold every prompt open for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn shown(&self) -> Vec<ShownMessage> {
        self.shown.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn quick_picks(&self) -> Vec<ShownMessage> {
        self.quick_picks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ApplicationShell for ScriptedShell {
    async fn show_error_message(&self, message: &str, options: &[String]) -> Option<String> {
        self.shown
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ShownMessage {
                message: message.to_string(),
                options: options.to_vec(),
            });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .flatten()
    }

    async fn show_quick_pick(&self, placeholder: &str, items: &[String]) -> Option<usize> {
        self.quick_picks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ShownMessage {
                message: placeholder.to_string(),
                options: items.to_vec(),
            });
        self.picks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .flatten()
    }

    async fn open_url(&self, url: &str) {
        self.urls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());
    }
}

/// [`OutputChannel`] collecting lines in memory.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<String>>,
    shown: AtomicBool,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn was_shown(&self) -> bool {
        self.shown.load(Ordering::SeqCst)
    }
}

impl OutputChannel for MemoryOutput {
    fn append_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }

    fn show(&self) {
        self.shown.store(true, Ordering::SeqCst);
    }
}

/// [`TerminalService`] recording commands, optionally failing them.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    commands: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl TerminalService for RecordingTerminal {
    async fn send_command(&self, command: &str, args: &[String]) -> Result<()> {
        let line = std::iter::once(command.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.clone());
        if self.fail {
            return Err(Error::CommandFailed {
                command: line,
                code: 1,
                stderr: "terminal closed".to_string(),
            });
        }
        Ok(())
    }
}

/// [`PlatformService`] pinned to one operating system.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform {
    windows: bool,
    mac: bool,
}

impl FixedPlatform {
    pub fn windows() -> Self {
        Self {
            windows: true,
            mac: false,
        }
    }

    pub fn mac() -> Self {
        Self {
            windows: false,
            mac: true,
        }
    }

    pub fn linux() -> Self {
        Self {
            windows: false,
            mac: false,
        }
    }
}

impl PlatformService for FixedPlatform {
    fn is_windows(&self) -> bool {
        self.windows
    }

    fn is_mac(&self) -> bool {
        self.mac
    }

    fn os_name(&self) -> &str {
        if self.windows {
            "Windows"
        } else if self.mac {
            "Mac"
        } else {
            "Linux"
        }
    }
}
