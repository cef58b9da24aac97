//! Terminal session: one instance of the simulated terminal widget.
//!
//! A session owns its boot log, transcript and input buffer, borrows the
//! project catalog from its host, and tells the host when the user asks to
//! leave. Time only moves when the host calls [`Session::tick`].

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::boot::{BootEvent, BootLine, BootPhase, BootSequencer, BootTiming};
use super::command::{dispatch, Command, Output};
use super::transcript::{Transcript, TranscriptEntry};
use crate::catalog::Catalog;

/// Whether the session accepts input yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpreterState {
    #[default]
    Booting,
    Ready,
}

/// Callback invoked when the user runs `exit`.
pub type CloseHandler<'a> = Box<dyn FnMut() + 'a>;

/// The terminal widget core.
pub struct Session<'a> {
    catalog: &'a Catalog,
    boot: BootSequencer,
    boot_lines: Vec<BootLine>,
    transcript: Transcript,
    state: InterpreterState,
    input: String,
    rng: StdRng,
    on_close: CloseHandler<'a>,
}

impl<'a> Session<'a> {
    /// Create a session over `catalog` that plays the default boot script.
    pub fn new(catalog: &'a Catalog, timing: BootTiming, on_close: CloseHandler<'a>) -> Self {
        Self::with_boot(
            catalog,
            BootSequencer::with_default_script(timing),
            on_close,
        )
    }

    /// Create a session with a custom boot sequencer.
    pub fn with_boot(
        catalog: &'a Catalog,
        boot: BootSequencer,
        on_close: CloseHandler<'a>,
    ) -> Self {
        Self {
            catalog,
            boot,
            boot_lines: Vec::new(),
            transcript: Transcript::new(),
            state: InterpreterState::Booting,
            input: String::new(),
            rng: StdRng::from_entropy(),
            on_close,
        }
    }

    /// Use a seeded random source for boot delays.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start the boot sequence. Repeated calls are ignored.
    pub fn activate(&mut self, now: Instant) -> bool {
        self.boot.activate(now, &mut self.rng)
    }

    /// Apply every boot event due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for event in self.boot.poll(now) {
            match event {
                BootEvent::Line(line) => {
                    tracing::debug!(line = %line.text, "boot line");
                    self.boot_lines.push(line);
                }
                BootEvent::Ready => {
                    if self.state == InterpreterState::Booting {
                        tracing::info!("terminal ready");
                        self.state = InterpreterState::Ready;
                    }
                }
            }
        }
    }

    /// Cancel any pending boot work. Also runs on drop.
    pub fn teardown(&mut self) {
        self.boot.teardown();
    }

    /// Submit one line of input.
    ///
    /// The raw line is recorded as typed; matching uses the trimmed,
    /// lowercased form. `clear` and `exit` leave no transcript entries.
    pub fn submit(&mut self, raw: &str) {
        let command = Command::parse(raw);
        tracing::debug!(command = command.name(), "dispatching command");

        match dispatch(&command, self.catalog) {
            Output::Clear => {
                self.boot_lines.clear();
                self.transcript.clear();
            }
            Output::Exit => {
                tracing::info!("session close requested");
                (self.on_close)();
            }
            Output::Text(response) => {
                self.transcript.append(TranscriptEntry::command(raw));
                if !response.is_empty() {
                    self.transcript.append(TranscriptEntry::response(response));
                }
            }
        }
        self.input.clear();
    }

    /// Submit whatever is in the input buffer. Ignored while booting.
    pub fn submit_input(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw);
        true
    }

    /// Type a character into the input buffer. Ignored while booting.
    pub fn push_char(&mut self, c: char) {
        if self.is_ready() {
            self.input.push(c);
        }
    }

    /// Delete the last character of the input buffer.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == InterpreterState::Ready
    }

    pub fn boot_phase(&self) -> BootPhase {
        self.boot.phase()
    }

    pub fn boot_lines(&self) -> &[BootLine] {
        &self.boot_lines
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("boot_phase", &self.boot.phase())
            .field("boot_lines", &self.boot_lines.len())
            .field("transcript", &self.transcript.len())
            .field("input", &self.input)
            .finish()
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.teardown();
    }
}
