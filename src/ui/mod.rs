//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage, [`MockUI`] for tests
//! - The report table, the watch-mode status line, and the theme

pub mod mock;
pub mod output;
pub mod statusline;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use statusline::render_status_line;
pub use table::ReportTable;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LegibleTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Clear the screen before a fresh watch-mode render.
    fn clear_screen(&mut self);

    /// Terminal width in columns.
    fn width(&self) -> usize;
}
