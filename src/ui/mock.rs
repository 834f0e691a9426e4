//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use legible::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Lexicon Count : 3");
//!
//! assert!(ui.messages().contains(&"Lexicon Count : 3".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing. Captures all output.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    clear_count: usize,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// All captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of screen clears requested.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn clear_screen(&mut self) {
        self.clear_count += 1;
    }

    fn width(&self) -> usize {
        80
    }
}
