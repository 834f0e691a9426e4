//! Legible - Text readability metrics for the terminal.
//!
//! Legible computes readability scores (Flesch Reading Ease, SMOG,
//! Dale-Chall, and friends) over files or stdin and renders them as
//! one-line summaries, a full report table, or a live watch view.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`eval`] - The evaluation pipeline
//! - [`input`] - File/stdin/line-range text resolution
//! - [`scales`] - Scale definitions, formulas, banding, and the registry
//! - [`text`] - Tokenization and counting primitives
//! - [`ui`] - Terminal output, the report table, and the status line
//! - [`watch`] - Change monitoring for watch mode
//!
//! # Example
//!
//! ```
//! use legible::eval::evaluate;
//! use legible::scales::ScaleRegistry;
//!
//! let registry = ScaleRegistry::shared();
//! let scale = registry.get("lexicon-count").unwrap();
//! let result = evaluate(scale, "The cat sat on the mat.");
//! assert_eq!(result.summary(), "Lexicon Count : 6");
//! ```

pub mod cli;
pub mod error;
pub mod eval;
pub mod input;
pub mod scales;
pub mod text;
pub mod ui;
pub mod watch;

pub use error::{LegibleError, Result};
