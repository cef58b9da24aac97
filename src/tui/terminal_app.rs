//! Terminal TUI application
//!
//! Hosts one [`Session`] full-screen: plays the boot sequence, then reads
//! commands until the user runs `exit` or presses Esc.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;

use super::app::{App, InputResult};
use super::input::handle_event;
use super::theme::Theme;
use super::ui::{centered_rect, render_terminal, Prompt};
use crate::catalog::Catalog;
use crate::shell::{BootTiming, Session};

/// Frame timeout; short enough that boot lines appear on time.
const FRAME_TIMEOUT: Duration = Duration::from_millis(16);

/// Settings for a terminal window.
#[derive(Debug, Clone, Default)]
pub struct TerminalOptions {
    pub timing: BootTiming,
    pub prompt: Prompt,
    pub theme: Theme,
    /// Fixed seed for boot delays
    pub seed: Option<u64>,
}

/// Full-screen host for a terminal session.
pub struct TerminalApp<'a> {
    app: App,
    session: Session<'a>,
    prompt: Prompt,
    theme: Theme,
    close_requested: Rc<Cell<bool>>,
}

impl<'a> TerminalApp<'a> {
    /// Take over the terminal and create a session over `catalog`.
    pub fn new(catalog: &'a Catalog, options: TerminalOptions) -> Result<Self> {
        let close_requested = Rc::new(Cell::new(false));
        let flag = Rc::clone(&close_requested);

        let mut session = Session::new(catalog, options.timing, Box::new(move || flag.set(true)));
        if let Some(seed) = options.seed {
            session = session.with_seed(seed);
        }

        let app = App::new(FRAME_TIMEOUT)?;

        Ok(Self {
            app,
            session,
            prompt: options.prompt,
            theme: options.theme,
            close_requested,
        })
    }

    /// Run until the session is closed.
    pub fn run(&mut self) -> Result<()> {
        self.session.activate(Instant::now());

        loop {
            self.session.tick(Instant::now());
            self.draw()?;

            if let Some(event) = self.app.next_event()? {
                if handle_event(event, &mut self.session) == InputResult::Quit {
                    tracing::info!("terminal closed from keyboard");
                    break;
                }
            }
            if self.close_requested.get() {
                break;
            }
        }

        self.session.teardown();
        self.app.restore()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        let prompt = &self.prompt;
        let theme = &self.theme;

        self.app.draw(|frame| {
            let area = centered_rect(90, 90, frame.area());
            render_terminal(frame, area, session, prompt, theme);
        })
    }
}
