//! Scale definitions.
//!
//! A [`ScaleDefinition`] is a small capability bundle: how to compute a
//! readability score, optionally how to validate the input first, and
//! optionally how to translate the raw number into a human-readable band.
//! Definitions are built once at startup and never mutated.

use std::fmt;

/// A raw score produced by a scale.
///
/// Most scales yield a number; the readability-consensus scale yields a
/// textual grade range.
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Numeric(f64),
    Text(String),
}

impl Score {
    /// The numeric value, if this score is numeric.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Score::Numeric(v) => Some(*v),
            Score::Text(_) => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Numeric(v) => f.write_str(&format_numeric(*v)),
            Score::Text(s) => f.write_str(s),
        }
    }
}

/// Format a numeric score with up to two decimal places, trimming
/// trailing zeros ("64.75", "8.1", "12").
pub fn format_numeric(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Compute a score from text. Pure; callers guard empty input via precheck.
pub type ComputeFn = fn(&str) -> Score;

/// Validate text before computing. `None` means the input is suitable;
/// `Some(message)` carries a human-readable reason it is not.
pub type PrecheckFn = fn(&str) -> Option<String>;

/// Map a numeric score to a human-readable band.
pub type ClarifyFn = fn(f64) -> String;

/// Which side of the status line a scale is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Placement of a scale on the watch-mode status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLineConfig {
    pub alignment: Alignment,
    /// Higher priority renders closer to the pinned edge.
    pub priority: i32,
}

/// A readability scale: id, label, and the functions that drive the
/// evaluation pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ScaleDefinition {
    /// Unique, stable key (e.g., "flesch-reading-ease").
    pub id: &'static str,
    /// Display name (e.g., "Flesch Reading Ease").
    pub label: &'static str,
    /// Score computation.
    pub compute: ComputeFn,
    /// Input validation, consulted before `compute` when present.
    pub precheck: Option<PrecheckFn>,
    /// Score-to-band mapping for numeric scores.
    pub clarify: Option<ClarifyFn>,
    /// Status-line placement, for scales surfaced in watch mode.
    pub status_line: Option<StatusLineConfig>,
}
