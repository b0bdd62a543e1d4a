//! Display-level output types.
//!
//! - [`Line`] - one styled line of command output
//! - [`LogEntry`] - one record of the terminal output log, with a unique ID

use std::sync::atomic::{AtomicUsize, Ordering};

/// A single styled line of command output.
///
/// The core only tags intent; the display decides colors and layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Plain text
    Text(String),
    /// Error message (red)
    Error(String),
    /// Success message (green)
    Success(String),
    /// Info message (yellow)
    Info(String),
    /// Section heading (bold)
    Heading(String),
    /// Preformatted ASCII art
    Ascii(String),
    /// Blank spacer line
    Empty,
    /// `label: value` row
    Field { label: String, value: String },
    /// Clickable link
    Link { label: String, url: String },
    /// Aligned name + description row (help listings)
    Entry { name: String, description: String },
}

impl Line {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::Success(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    pub fn heading(s: impl Into<String>) -> Self {
        Self::Heading(s.into())
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::Ascii(s.into())
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn entry(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Entry {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The line's text with styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(s)
            | Self::Error(s)
            | Self::Success(s)
            | Self::Info(s)
            | Self::Heading(s)
            | Self::Ascii(s) => s.clone(),
            Self::Empty => String::new(),
            Self::Field { label, value } => format!("{label}: {value}"),
            Self::Link { label, url } => format!("{label}: {url}"),
            Self::Entry { name, description } => format!("{name}  {description}"),
        }
    }
}

/// Renders lines as plain text, one per row.
#[cfg(test)]
pub(crate) fn to_plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Output Log
// =============================================================================

/// One record of the terminal output log.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Unique ID for keyed rendering and deferred replacement
    pub id: usize,
    pub data: LogEntryData,
}

/// Content of a [`LogEntry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEntryData {
    /// The raw line the user submitted
    Input(String),
    /// A command's output
    Output { lines: Vec<Line>, is_error: bool },
}

static LOG_ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LOG_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed)
}

impl LogEntry {
    pub fn input(raw: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            data: LogEntryData::Input(raw.into()),
        }
    }

    pub fn output(lines: Vec<Line>, is_error: bool) -> Self {
        Self {
            id: next_id(),
            data: LogEntryData::Output { lines, is_error },
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self.data, LogEntryData::Input(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, LogEntryData::Output { is_error: true, .. })
    }
}

impl PartialEq for LogEntry {
    fn eq(&self, other: &Self) -> bool {
        // IDs are identity, not content
        self.data == other.data
    }
}
