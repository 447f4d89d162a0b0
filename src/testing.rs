//! Testing utilities for emopick
//!
//! Shared fixtures for unit tests: a small entry list and an event recorder
//! that can be attached to a picker.
//!
//! Only available when compiled with `cfg(test)`.

use crate::glyphs::Entry;
use crate::picker::{FilterSelectList, PickerEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// The three-entry list used throughout the picker tests
pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("smile", "😄"),
        Entry::new("smiling_face", "🙂"),
        Entry::new("sad", "😢"),
    ]
}

/// Records every event a picker emits
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<PickerEvent>>>);

impl EventLog {
    /// Subscribe a fresh log to `picker`
    pub fn attach(picker: &mut FilterSelectList) -> Self {
        let log = Self::default();
        let sink = Rc::clone(&log.0);
        picker.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        log
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<PickerEvent> {
        self.0.borrow().clone()
    }
}
