//! Integration tests for emopick
//!
//! These drive the picker through the public API the way the terminal runner
//! does: key events in, timers advanced on a synthetic clock, events out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use emopick::glyphs::{Entry, GlyphTable};
use emopick::picker::{FilterSelectList, PickerEvent, TextEdit};
use emopick::scheduler::TimerQueue;
use emopick::ui::{EventResult, handle_key};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Helper function to build the three-entry list
fn scenario_entries() -> Vec<Entry> {
    vec![
        Entry::new("smile", "😄"),
        Entry::new("smiling_face", "🙂"),
        Entry::new("sad", "😢"),
    ]
}

/// Helper function to record emitted events
fn record(picker: &mut FilterSelectList) -> Rc<RefCell<Vec<PickerEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    picker.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// Helper function to fire every timer due at `at`; returns how many ran the filter
fn fire(picker: &mut FilterSelectList, timers: &mut TimerQueue, at: Instant) -> usize {
    timers
        .advance_to(at)
        .into_iter()
        .filter(|&handle| picker.on_timer(handle))
        .count()
}

fn keys(picker: &FilterSelectList) -> Vec<String> {
    picker.view().map(|entry| entry.key.clone()).collect()
}

fn press(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

#[test]
fn test_scenario_queries() {
    let mut timers = TimerQueue::new(Instant::now());
    let mut picker = FilterSelectList::new(scenario_entries());

    for c in "smil".chars() {
        picker.on_text_input(TextEdit::Insert(c), &mut timers);
    }
    picker.flush(&mut timers);
    assert_eq!(keys(&picker), vec!["smile", "smiling_face"]);

    picker.on_text_input(TextEdit::Clear, &mut timers);
    picker.flush(&mut timers);
    assert_eq!(keys(&picker), vec!["smile", "smiling_face", "sad"]);

    for c in "xyz".chars() {
        picker.on_text_input(TextEdit::Insert(c), &mut timers);
    }
    picker.flush(&mut timers);
    assert!(keys(&picker).is_empty());
    assert_eq!(picker.cursor(), None);
}

#[test]
fn test_keystroke_burst_filters_once_with_last_query() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new(t0);
    let mut picker = FilterSelectList::new(scenario_entries());
    let mut fired = 0;

    for (at, c) in [(0, 's'), (50, 'm'), (100, 'i'), (150, 'l')] {
        fired += fire(&mut picker, &mut timers, t0 + Duration::from_millis(at));
        let result = handle_key(&mut picker, &press(c), &mut timers);
        assert_eq!(result, EventResult::QueryChanged);
    }

    assert_eq!(timers.len(), 1);
    assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(450)));

    fired += fire(&mut picker, &mut timers, t0 + Duration::from_millis(449));
    assert_eq!(fired, 0);

    fired += fire(&mut picker, &mut timers, t0 + Duration::from_millis(450));
    assert_eq!(fired, 1);
    assert_eq!(keys(&picker), vec!["smile", "smiling_face"]);
}

#[test]
fn test_pick_flow_with_keys() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new(t0);
    let mut picker = FilterSelectList::new(GlyphTable::builtin().into_entries());
    let events = record(&mut picker);

    for c in "heart".chars() {
        handle_key(&mut picker, &press(c), &mut timers);
    }
    fire(&mut picker, &mut timers, t0 + Duration::from_secs(1));
    assert!(keys(&picker).iter().all(|key| key.contains("heart")));
    assert_eq!(keys(&picker)[0], "heart_eyes");

    let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    handle_key(&mut picker, &down, &mut timers);
    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(handle_key(&mut picker, &enter, &mut timers), EventResult::Confirm);

    assert_eq!(
        *events.borrow(),
        vec![
            PickerEvent::Selection("kissing_heart".to_string()),
            PickerEvent::Dismiss
        ]
    );
}

#[test]
fn test_teardown_with_pending_timer() {
    let t0 = Instant::now();
    let mut timers = TimerQueue::new(t0);
    let mut picker = FilterSelectList::new(scenario_entries());
    let events = record(&mut picker);

    handle_key(&mut picker, &press('s'), &mut timers);
    let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(handle_key(&mut picker, &esc, &mut timers), EventResult::Abort);
    picker.dispose(&mut timers);

    assert_eq!(fire(&mut picker, &mut timers, t0 + Duration::from_secs(1)), 0);
    assert_eq!(*events.borrow(), vec![PickerEvent::Dismiss]);
    assert_eq!(picker.view_len(), 3);
}

#[test]
fn test_normalized_duplicates_collapse() {
    let mut timers = TimerQueue::new(Instant::now());
    let mut picker = FilterSelectList::new(vec![
        Entry::new("Crème", "🍮"),
        Entry::new("creme", "🍦"),
        Entry::new("cream", "🥛"),
    ]);

    for c in "CREM".chars() {
        picker.on_text_input(TextEdit::Insert(c), &mut timers);
    }
    picker.flush(&mut timers);

    let view: Vec<&Entry> = picker.view().collect();
    assert_eq!(view, vec![&Entry::new("Crème", "🍮")]);
}

#[test]
fn test_custom_glyph_table_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("glyphs.toml");
    fs::write(
        &path,
        "[[glyph]]\nkey = \"ferris\"\nvalue = \"🦀\"\n\n[[glyph]]\nkey = \"ferry\"\nvalue = \"⛴️\"\n",
    )
    .unwrap();

    let table = GlyphTable::load(&path).unwrap();
    let mut timers = TimerQueue::new(Instant::now());
    let mut picker = FilterSelectList::new(table.into_entries());
    for c in "ferr".chars() {
        picker.on_text_input(TextEdit::Insert(c), &mut timers);
    }
    picker.flush(&mut timers);

    assert_eq!(keys(&picker), vec!["ferris", "ferry"]);
    assert!(picker.on_confirm());
}
