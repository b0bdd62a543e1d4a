//! UI components built with Leptos.
//!
//! - [`terminal`] - terminal emulator interface (log, input, suggestions)

pub mod terminal;
