//! Debounced filter-select list
//!
//! [`FilterSelectList`] is the state behind the emoji picker overlay. It owns
//! the source entries, the query line, the filtered view and the focus cursor,
//! and it talks to the outside world through two narrow seams:
//!
//! - a [`Scheduler`] that arms the debounce timer on every edit, and
//! - listeners registered with [`FilterSelectList::subscribe`] that receive
//!   [`PickerEvent`]s when the user confirms or cancels.
//!
//! Typing never filters immediately. Each edit cancels the pending timer and
//! arms a new one; when the host reports that timer as fired through
//! [`FilterSelectList::on_timer`], the filter runs once with the query as it
//! is at that moment.
//!
//! ```
//! use emopick::glyphs::Entry;
//! use emopick::picker::{FilterSelectList, TextEdit};
//! use emopick::scheduler::TimerQueue;
//! use std::time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut timers = TimerQueue::new(t0);
//! let mut picker = FilterSelectList::new(vec![
//!     Entry::new("smile", "😄"),
//!     Entry::new("sad", "😢"),
//! ]);
//!
//! picker.on_text_input(TextEdit::Insert('s'), &mut timers);
//! picker.on_text_input(TextEdit::Insert('m'), &mut timers);
//! assert_eq!(picker.view_len(), 2);
//!
//! for handle in timers.advance_to(t0 + Duration::from_millis(300)) {
//!     picker.on_timer(handle);
//! }
//! assert_eq!(picker.focused().map(|e| e.key.as_str()), Some("smile"));
//! assert_eq!(picker.view_len(), 1);
//! ```

mod query;

pub use query::{QueryInput, TextEdit};

use crate::filter::filter_indices;
use crate::glyphs::Entry;
use crate::scheduler::{Scheduler, TimerHandle};
use std::fmt;
use std::time::Duration;

/// Default debounce delay between the last keystroke and filtering
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default number of rows moved by page navigation
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Events emitted towards the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The user confirmed the focused entry
    Selection(String),
    /// The picker should be removed from the screen
    Dismiss,
}

/// Cursor movement requested by a navigation key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

type Listener = Box<dyn FnMut(&PickerEvent)>;

/// Filterable, keyboard-driven selection list with a debounced query
pub struct FilterSelectList {
    /// Immutable source entries, in display order
    source: Vec<Entry>,
    /// Current view as indices into `source`
    view: Vec<usize>,
    query: QueryInput,
    /// Focused position in `view`; `None` iff the view is empty
    cursor: Option<usize>,
    scroll_offset: usize,
    page_size: usize,
    delay: Duration,
    pending: Option<TimerHandle>,
    listeners: Vec<Listener>,
    disposed: bool,
}

impl FilterSelectList {
    /// Create a list showing every entry, focused on the first one
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let view: Vec<usize> = (0..entries.len()).collect();
        let cursor = if view.is_empty() { None } else { Some(0) };

        Self {
            source: entries,
            view,
            query: QueryInput::new(),
            cursor,
            scroll_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
            delay: DEFAULT_DEBOUNCE,
            pending: None,
            listeners: Vec::new(),
            disposed: false,
        }
    }

    /// Override the debounce delay
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Start from `query`, filtered right away without waiting on a timer
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        if query.is_empty() {
            return self;
        }
        for c in query.chars() {
            self.query.apply(TextEdit::Insert(c));
        }
        self.apply_filter();
        self
    }

    /// Register a listener for [`PickerEvent`]s
    ///
    /// Listeners are called synchronously, in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&PickerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a text edit and re-arm the debounce timer
    ///
    /// The view is not recomputed here; it changes only when the armed timer
    /// fires. Ignored after [`FilterSelectList::dispose`].
    pub fn on_text_input(&mut self, edit: TextEdit, scheduler: &mut dyn Scheduler) {
        if self.disposed {
            return;
        }

        self.query.apply(edit);

        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.pending = Some(scheduler.schedule_once(self.delay));
    }

    /// Timer callback; runs the filter if `handle` is the pending timer
    ///
    /// Returns `false` for stale handles and after disposal.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.disposed || self.pending != Some(handle) {
            tracing::trace!(?handle, disposed = self.disposed, "ignoring timer");
            return false;
        }

        self.apply_filter();
        true
    }

    /// Recompute the view from the current query
    ///
    /// Resets focus to the first entry and clears the pending timer.
    pub fn apply_filter(&mut self) {
        self.view = filter_indices(&self.source, self.query.text());
        self.cursor = if self.view.is_empty() { None } else { Some(0) };
        self.scroll_offset = 0;
        self.pending = None;

        tracing::debug!(
            query = self.query.text(),
            matches = self.view.len(),
            total = self.source.len(),
            "filter applied"
        );
    }

    /// Cancel any pending timer and filter right away
    pub fn flush(&mut self, scheduler: &mut dyn Scheduler) {
        if self.disposed {
            return;
        }
        if let Some(pending) = self.pending.take() {
            scheduler.cancel(pending);
        }
        self.apply_filter();
    }

    /// Move the focus cursor, clamping at both ends
    pub fn on_navigate(&mut self, direction: Direction) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = self.view.len() - 1;

        let next = match direction {
            Direction::Up => cursor.saturating_sub(1),
            Direction::Down => (cursor + 1).min(last),
            Direction::PageUp => cursor.saturating_sub(self.page_size),
            Direction::PageDown => (cursor + self.page_size).min(last),
            Direction::Home => 0,
            Direction::End => last,
        };

        self.cursor = Some(next);
        self.adjust_scroll();
    }

    /// Confirm the focused entry
    ///
    /// Emits [`PickerEvent::Selection`] followed by [`PickerEvent::Dismiss`].
    /// Returns `false` without emitting anything when the view is empty.
    pub fn on_confirm(&mut self) -> bool {
        let Some(key) = self.focused().map(|entry| entry.key.clone()) else {
            return false;
        };

        self.emit(&PickerEvent::Selection(key));
        self.emit(&PickerEvent::Dismiss);
        true
    }

    /// Close the picker without selecting
    ///
    /// Returns `false` without emitting anything when the view is empty.
    pub fn on_cancel(&mut self) -> bool {
        if self.cursor.is_none() {
            return false;
        }

        self.emit(&PickerEvent::Dismiss);
        true
    }

    /// Release the pending timer; later timer callbacks become no-ops
    pub fn dispose(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(pending) = self.pending.take() {
            scheduler.cancel(pending);
        }
        if !self.disposed {
            tracing::debug!("picker disposed");
        }
        self.disposed = true;
    }

    /// Set the number of rows a page move covers (at least one)
    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
        self.adjust_scroll();
    }

    /// Rows covered by a page move
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current query line
    #[must_use]
    pub const fn query(&self) -> &QueryInput {
        &self.query
    }

    /// Focus cursor into the view
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// First visible row of the view
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The focused entry
    #[must_use]
    pub fn focused(&self) -> Option<&Entry> {
        self.cursor
            .and_then(|pos| self.view.get(pos))
            .map(|&idx| &self.source[idx])
    }

    /// Entries of the current view, in display order
    pub fn view(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.view.iter().map(|&idx| &self.source[idx])
    }

    /// Number of entries in the current view
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// All source entries
    #[must_use]
    pub fn source(&self) -> &[Entry] {
        &self.source
    }

    /// Timer currently armed for the next filter run
    #[must_use]
    pub const fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Whether [`FilterSelectList::dispose`] has been called
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn emit(&mut self, event: &PickerEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// Keep the cursor inside the visible window
    fn adjust_scroll(&mut self) {
        let Some(cursor) = self.cursor else {
            self.scroll_offset = 0;
            return;
        };

        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + self.page_size {
            self.scroll_offset = cursor + 1 - self.page_size;
        }
    }
}

impl fmt::Debug for FilterSelectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSelectList")
            .field("entries", &self.source.len())
            .field("view", &self.view.len())
            .field("query", &self.query.text())
            .field("cursor", &self.cursor)
            .field("pending", &self.pending)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TimerQueue;
    use crate::testing::{EventLog, sample_entries};
    use std::time::Instant;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn numbered(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry::new(format!("item{i}"), "•"))
            .collect()
    }

    fn type_str(picker: &mut FilterSelectList, timers: &mut TimerQueue, text: &str) {
        for c in text.chars() {
            picker.on_text_input(TextEdit::Insert(c), timers);
        }
    }

    fn fire_due(picker: &mut FilterSelectList, timers: &mut TimerQueue, at: Instant) -> usize {
        timers
            .advance_to(at)
            .into_iter()
            .filter(|&handle| picker.on_timer(handle))
            .count()
    }

    fn view_keys(picker: &FilterSelectList) -> Vec<&str> {
        picker.view().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_new_shows_everything() {
        let picker = FilterSelectList::new(sample_entries());
        assert_eq!(view_keys(&picker), vec!["smile", "smiling_face", "sad"]);
        assert_eq!(picker.cursor(), Some(0));
        assert_eq!(picker.query().text(), "");
        assert!(picker.pending_timer().is_none());
    }

    #[test]
    fn test_new_empty_has_no_focus() {
        let picker = FilterSelectList::new(Vec::new());
        assert_eq!(picker.cursor(), None);
        assert!(picker.focused().is_none());
    }

    #[test]
    fn test_typing_does_not_filter_immediately() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries());

        type_str(&mut picker, &mut timers, "sad");
        assert_eq!(picker.view_len(), 3);
        assert!(picker.pending_timer().is_some());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_burst_fires_once_after_last_keystroke() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries());

        let mut fired = 0;
        for (offset, c) in [(0, 's'), (50, 'm'), (100, 'i'), (150, 'l')] {
            fired += fire_due(&mut picker, &mut timers, t0 + ms(offset));
            picker.on_text_input(TextEdit::Insert(c), &mut timers);
        }

        fired += fire_due(&mut picker, &mut timers, t0 + ms(449));
        assert_eq!(fired, 0);
        assert_eq!(picker.view_len(), 3);

        fired += fire_due(&mut picker, &mut timers, t0 + ms(450));
        assert_eq!(fired, 1);
        assert_eq!(view_keys(&picker), vec!["smile", "smiling_face"]);
        assert!(picker.pending_timer().is_none());

        fired += fire_due(&mut picker, &mut timers, t0 + ms(5_000));
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_filter_uses_query_at_fire_time() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries());

        type_str(&mut picker, &mut timers, "sm");
        fire_due(&mut picker, &mut timers, t0 + ms(100));
        picker.on_text_input(TextEdit::Clear, &mut timers);
        type_str(&mut picker, &mut timers, "sa");

        fire_due(&mut picker, &mut timers, t0 + ms(400));
        assert_eq!(view_keys(&picker), vec!["sad"]);
    }

    #[test]
    fn test_caret_moves_rearm_timer() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries());

        picker.on_text_input(TextEdit::Insert('x'), &mut timers);
        let first = picker.pending_timer().unwrap();

        timers.advance_to(t0 + ms(200));
        picker.on_text_input(TextEdit::Left, &mut timers);
        let second = picker.pending_timer().unwrap();

        assert_ne!(first, second);
        assert!(!timers.is_pending(first));
        assert!(timers.is_pending(second));
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries());

        picker.on_text_input(TextEdit::Insert('s'), &mut timers);
        let stale = picker.pending_timer().unwrap();
        picker.on_text_input(TextEdit::Insert('a'), &mut timers);

        assert!(!picker.on_timer(stale));
        assert_eq!(picker.view_len(), 3);
    }

    #[test]
    fn test_filter_resets_focus() {
        let mut timers = TimerQueue::new(Instant::now());
        let mut picker = FilterSelectList::new(sample_entries());
        picker.on_navigate(Direction::End);
        assert_eq!(picker.cursor(), Some(2));

        type_str(&mut picker, &mut timers, "smil");
        picker.flush(&mut timers);
        assert_eq!(picker.cursor(), Some(0));
        assert_eq!(picker.focused().unwrap().key, "smile");

        picker.on_text_input(TextEdit::Clear, &mut timers);
        type_str(&mut picker, &mut timers, "xyz");
        picker.flush(&mut timers);
        assert_eq!(picker.cursor(), None);
        assert!(timers.is_empty());

        picker.on_text_input(TextEdit::Clear, &mut timers);
        picker.flush(&mut timers);
        assert_eq!(view_keys(&picker), vec!["smile", "smiling_face", "sad"]);
        assert_eq!(picker.cursor(), Some(0));
    }

    #[test]
    fn test_cursor_navigation() {
        let mut picker = FilterSelectList::new(numbered(5));

        picker.on_navigate(Direction::Down);
        assert_eq!(picker.cursor(), Some(1));

        picker.on_navigate(Direction::Down);
        picker.on_navigate(Direction::Down);
        picker.on_navigate(Direction::Down);
        assert_eq!(picker.cursor(), Some(4));

        // Should not go past end
        picker.on_navigate(Direction::Down);
        assert_eq!(picker.cursor(), Some(4));

        picker.on_navigate(Direction::Up);
        assert_eq!(picker.cursor(), Some(3));

        picker.on_navigate(Direction::Home);
        assert_eq!(picker.cursor(), Some(0));
        picker.on_navigate(Direction::Up);
        assert_eq!(picker.cursor(), Some(0));

        picker.on_navigate(Direction::End);
        assert_eq!(picker.cursor(), Some(4));
    }

    #[test]
    fn test_page_navigation_and_scroll() {
        let mut picker = FilterSelectList::new(numbered(50));
        picker.set_page_size(10);

        picker.on_navigate(Direction::PageDown);
        assert_eq!(picker.cursor(), Some(10));
        assert_eq!(picker.scroll_offset(), 1);

        picker.on_navigate(Direction::PageDown);
        picker.on_navigate(Direction::PageDown);
        picker.on_navigate(Direction::PageDown);
        picker.on_navigate(Direction::PageDown);
        assert_eq!(picker.cursor(), Some(49));
        assert_eq!(picker.scroll_offset(), 40);

        picker.on_navigate(Direction::PageUp);
        assert_eq!(picker.cursor(), Some(39));
        assert_eq!(picker.scroll_offset(), 39);

        picker.on_navigate(Direction::Home);
        picker.on_navigate(Direction::PageUp);
        assert_eq!(picker.cursor(), Some(0));
        assert_eq!(picker.scroll_offset(), 0);
    }

    #[test]
    fn test_navigation_on_empty_view() {
        let mut picker = FilterSelectList::new(Vec::new());
        picker.on_navigate(Direction::Down);
        picker.on_navigate(Direction::End);
        assert_eq!(picker.cursor(), None);
    }

    #[test]
    fn test_confirm_emits_selection_then_dismiss() {
        let mut picker = FilterSelectList::new(sample_entries());
        let log = EventLog::attach(&mut picker);

        picker.on_navigate(Direction::Down);
        assert!(picker.on_confirm());
        assert_eq!(
            log.events(),
            vec![
                PickerEvent::Selection("smiling_face".to_string()),
                PickerEvent::Dismiss
            ]
        );
    }

    #[test]
    fn test_confirm_without_focus_is_noop() {
        let mut timers = TimerQueue::new(Instant::now());
        let mut picker = FilterSelectList::new(sample_entries());
        let log = EventLog::attach(&mut picker);

        type_str(&mut picker, &mut timers, "xyz");
        picker.flush(&mut timers);

        assert!(!picker.on_confirm());
        assert!(!picker.on_cancel());
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_cancel_emits_dismiss() {
        let mut picker = FilterSelectList::new(sample_entries());
        let log = EventLog::attach(&mut picker);

        assert!(picker.on_cancel());
        assert_eq!(log.events(), vec![PickerEvent::Dismiss]);
    }

    #[test]
    fn test_dispose_cancels_pending_timer() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries());

        type_str(&mut picker, &mut timers, "sad");
        let pending = picker.pending_timer().unwrap();
        picker.dispose(&mut timers);

        assert!(picker.is_disposed());
        assert!(picker.pending_timer().is_none());
        assert!(timers.is_empty());
        assert!(!picker.on_timer(pending));
        assert_eq!(picker.view_len(), 3);

        // Input after teardown schedules nothing
        picker.on_text_input(TextEdit::Insert('x'), &mut timers);
        assert!(timers.is_empty());
        picker.dispose(&mut timers);
    }

    #[test]
    fn test_custom_delay() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new(t0);
        let mut picker = FilterSelectList::new(sample_entries()).with_delay(ms(50));

        type_str(&mut picker, &mut timers, "sad");
        assert_eq!(fire_due(&mut picker, &mut timers, t0 + ms(50)), 1);
        assert_eq!(view_keys(&picker), vec!["sad"]);
    }

    #[test]
    fn test_with_query_filters_immediately() {
        let picker = FilterSelectList::new(sample_entries()).with_query("smil");

        assert_eq!(picker.query().text(), "smil");
        assert_eq!(view_keys(&picker), vec!["smile", "smiling_face"]);
        assert_eq!(picker.cursor(), Some(0));
        assert_eq!(picker.pending_timer(), None);
    }

    #[test]
    fn test_with_empty_query_keeps_everything() {
        let picker = FilterSelectList::new(sample_entries()).with_query("");
        assert_eq!(picker.view_len(), 3);

        let picker = FilterSelectList::new(sample_entries()).with_query("xyz");
        assert_eq!(picker.view_len(), 0);
        assert_eq!(picker.focused(), None);
    }
}
