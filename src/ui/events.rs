//! Key handling for the picker overlay
//!
//! Maps crossterm key events onto picker operations. Arrows, paging, enter
//! and escape are reserved; printable keys and line editing (home and end
//! included) go to the query line.

use crate::picker::{Direction, FilterSelectList, TextEdit};
use crate::scheduler::Scheduler;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key means to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the focus cursor
    Navigate(Direction),
    /// Select the focused entry
    Confirm,
    /// Close without selecting
    Cancel,
    /// Leave the picker unconditionally (ctrl-c)
    Interrupt,
    /// Edit the query line
    Edit(TextEdit),
    /// Not meaningful to the picker
    Ignored,
}

/// Result of handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Cursor moved, keep running
    Continue,
    /// An entry was selected and the picker dismissed
    Confirm,
    /// The picker was dismissed without a selection
    Abort,
    /// The user interrupted the picker
    Interrupt,
    /// Query changed, a filter run is pending
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Classify a key event
#[must_use]
pub fn route_key(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignored;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Interrupt,
        (KeyCode::Enter, _) => KeyAction::Confirm,
        (KeyCode::Esc, _) => KeyAction::Cancel,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            KeyAction::Navigate(Direction::Up)
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            KeyAction::Navigate(Direction::Down)
        }
        (KeyCode::PageUp, _) => KeyAction::Navigate(Direction::PageUp),
        (KeyCode::PageDown, _) => KeyAction::Navigate(Direction::PageDown),

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::Edit(TextEdit::Clear),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => KeyAction::Edit(TextEdit::DeleteWord),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            KeyAction::Edit(TextEdit::Insert(c))
        }
        (KeyCode::Backspace, _) => KeyAction::Edit(TextEdit::Backspace),
        (KeyCode::Delete, _) => KeyAction::Edit(TextEdit::Delete),
        (KeyCode::Left, _) => KeyAction::Edit(TextEdit::Left),
        (KeyCode::Right, _) => KeyAction::Edit(TextEdit::Right),
        (KeyCode::Home, _) => KeyAction::Edit(TextEdit::Home),
        (KeyCode::End, _) => KeyAction::Edit(TextEdit::End),

        _ => KeyAction::Ignored,
    }
}

/// Route a key event into the picker
///
/// Enter and escape on an empty view are not consumed and come back as
/// [`EventResult::Ignored`].
pub fn handle_key(
    picker: &mut FilterSelectList,
    key: &KeyEvent,
    scheduler: &mut dyn Scheduler,
) -> EventResult {
    match route_key(key) {
        KeyAction::Navigate(direction) => {
            picker.on_navigate(direction);
            EventResult::Continue
        }
        KeyAction::Confirm => {
            if picker.on_confirm() {
                EventResult::Confirm
            } else {
                EventResult::Ignored
            }
        }
        KeyAction::Cancel => {
            if picker.on_cancel() {
                EventResult::Abort
            } else {
                EventResult::Ignored
            }
        }
        KeyAction::Interrupt => EventResult::Interrupt,
        KeyAction::Edit(edit) => {
            picker.on_text_input(edit, scheduler);
            EventResult::QueryChanged
        }
        KeyAction::Ignored => EventResult::Ignored,
    }
}
