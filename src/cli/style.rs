//! Terminal styling for the result line

use owo_colors::{OwoColorize, Stream, Style};

/// Check mark for success lines
pub const CHECK: &str = "✓";

/// Cross for failure lines
pub const CROSS: &str = "✗";

/// Color helpers that respect whether the stream is a terminal
pub trait Stylize {
    /// Green, for success
    fn success(&self) -> String;
    /// Yellow, for reported failures
    fn warn(&self) -> String;
    /// Bold red, for failures nobody was told about
    fn danger(&self) -> String;
}

fn paint(text: &str, stream: Stream, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}

impl<T: AsRef<str>> Stylize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Stream::Stdout, Style::new().green())
    }

    fn warn(&self) -> String {
        paint(self.as_ref(), Stream::Stderr, Style::new().yellow())
    }

    fn danger(&self) -> String {
        paint(self.as_ref(), Stream::Stderr, Style::new().red().bold())
    }
}
