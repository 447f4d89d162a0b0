//! Terminal front end for the picker
//!
//! Everything here is a thin layer over [`crate::picker::FilterSelectList`]:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │               PickerRunner                 │
//! │   (terminal setup, draw + poll loop)       │
//! └──────────────────────┬─────────────────────┘
//!                        │
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//! ┌─────────────┐ ┌──────────────┐ ┌─────────────┐
//! │   events    │ │ EmojiOverlay │ │ TimerQueue  │
//! │ (crossterm) │ │  (ratatui)   │ │ (debounce)  │
//! └─────────────┘ └──────────────┘ └─────────────┘
//! ```
//!
//! Styles come from an injected [`Theme`]; nothing reads global state.

mod error;
pub mod events;
mod overlay;
mod runner;
mod theme;

pub use error::{Result, UiError};
pub use events::{EventResult, KeyAction, handle_key, route_key};
pub use overlay::{EmojiOverlay, list_height, overlay_rect};
pub use runner::{PickOutcome, PickerRunner};
pub use theme::{Theme, ThemeName};
