//! Terminal runner for the picker overlay
//!
//! Owns the terminal for the lifetime of one pick: raw mode and the
//! alternate screen on stderr (stdout stays free for the result), a draw and
//! poll loop, and the timer queue backing the picker's debounce.

use super::error::{Result, UiError};
use super::events::{EventResult, handle_key};
use super::overlay::{EmojiOverlay, list_height, overlay_rect};
use super::theme::Theme;
use crate::glyphs::Entry;
use crate::picker::{FilterSelectList, PickerEvent};
use crate::scheduler::TimerQueue;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::{Cell, RefCell};
use std::io::{self, IsTerminal, Stderr};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Longest wait for input when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How a pick ended
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickOutcome {
    /// The confirmed entry, if any
    pub selection: Option<Entry>,
    /// Whether the user bailed out with ctrl-c
    pub interrupted: bool,
}

impl PickOutcome {
    /// Process exit status: 0 on selection, 130 on interrupt, 1 otherwise
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match (&self.selection, self.interrupted) {
            (Some(_), _) => 0,
            (None, true) => 130,
            (None, false) => 1,
        }
    }
}

/// Runs a [`FilterSelectList`] full-screen until it is dismissed
#[derive(Debug, Clone)]
pub struct PickerRunner {
    theme: Theme,
    title: String,
    width_percent: u16,
    height: u16,
}

impl Default for PickerRunner {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl PickerRunner {
    /// Create a runner with the default overlay geometry
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            title: "Emoji".to_string(),
            width_percent: 40,
            height: 20,
        }
    }

    /// Set the overlay title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the overlay geometry
    #[must_use]
    pub const fn with_size(mut self, width_percent: u16, height: u16) -> Self {
        self.width_percent = width_percent;
        self.height = height;
        self
    }

    /// Run the picker until it is dismissed or interrupted
    ///
    /// The picker is always disposed and the terminal restored, even when
    /// the loop fails.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Terminal` if stderr is not a terminal and
    /// `UiError::IoError` if drawing or reading input fails.
    pub fn run(&self, mut picker: FilterSelectList) -> Result<PickOutcome> {
        if !io::stderr().is_terminal() {
            return Err(UiError::Terminal("stderr is not a terminal".to_string()));
        }

        let mut timers = TimerQueue::new(Instant::now());
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, &mut picker, &mut timers);
        picker.dispose(&mut timers);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!("terminal cleanup failed: {e}");
        }

        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        rollback_raw_mode(execute!(stderr, EnterAlternateScreen))?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        picker: &mut FilterSelectList,
        timers: &mut TimerQueue,
    ) -> Result<PickOutcome> {
        let selected: Rc<RefCell<Option<String>>> = Rc::default();
        let dismissed = Rc::new(Cell::new(false));
        {
            let selected = Rc::clone(&selected);
            let dismissed = Rc::clone(&dismissed);
            picker.subscribe(move |event| match event {
                PickerEvent::Selection(key) => *selected.borrow_mut() = Some(key.clone()),
                PickerEvent::Dismiss => dismissed.set(true),
            });
        }

        let mut interrupted = false;
        while !dismissed.get() {
            fire_due(picker, timers);

            let mut screen = Rect::default();
            terminal.draw(|frame| {
                screen = frame.area();
                let overlay = EmojiOverlay::new(picker, &self.theme)
                    .title(&self.title)
                    .size(self.width_percent, self.height);
                frame.render_widget(overlay, screen);
            })?;
            let rows = list_height(overlay_rect(screen, self.width_percent, self.height));
            picker.set_page_size(usize::from(rows));

            let timeout = timers.time_until_next().map_or(IDLE_POLL, |t| t.min(IDLE_POLL));
            if !event::poll(timeout)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                // timers due before this key fire first
                fire_due(picker, timers);
                if handle_key(picker, &key, timers) == EventResult::Interrupt {
                    interrupted = true;
                    break;
                }
            }
        }

        let selection = selected
            .borrow()
            .as_deref()
            .and_then(|key| picker.source().iter().find(|entry| entry.key == key))
            .cloned();

        tracing::debug!(?selection, interrupted, "pick finished");
        Ok(PickOutcome {
            selection,
            interrupted,
        })
    }
}

fn fire_due(picker: &mut FilterSelectList, timers: &mut TimerQueue) {
    for handle in timers.advance_to(Instant::now()) {
        picker.on_timer(handle);
    }
}

/// Leave raw mode again if the rest of terminal setup failed
fn rollback_raw_mode<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        if let Err(cleanup) = disable_raw_mode() {
            tracing::warn!("failed to leave raw mode: {cleanup}");
        }
        UiError::from(e)
    })
}
