//! Colour handling for user-facing console output.

use owo_colors::OwoColorize;

fn stdout_supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait colouring user-facing status messages, falling back to
/// plain text when stdout is not a colour terminal.
pub trait Colorize {
    /// Green, for completed work.
    fn success(&self) -> String;
    /// Amber, for soft failures.
    fn warning(&self) -> String;
    /// Dimmed, for supporting detail.
    fn dim(&self) -> String;
}

impl<T: AsRef<str>> Colorize for T {
    fn success(&self) -> String {
        let text = self.as_ref();
        if stdout_supports_color() {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self) -> String {
        let text = self.as_ref();
        if stdout_supports_color() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self) -> String {
        let text = self.as_ref();
        if stdout_supports_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
