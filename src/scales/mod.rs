//! Readability scales: definitions, formulas, banding, and the registry.
//!
//! # Architecture
//!
//! - [`definition`] - The [`ScaleDefinition`] capability bundle and [`Score`]
//! - [`formulas`] - Pure readability formulas over text counts
//! - [`clarify`] - Score-to-band clarification tables
//! - [`registry`] - The ordered [`ScaleRegistry`] of built-in scales

pub mod clarify;
pub mod definition;
pub mod formulas;
pub mod registry;

pub use clarify::{grade_level_description, ordinal_suffix};
pub use definition::{
    Alignment, ClarifyFn, ComputeFn, PrecheckFn, ScaleDefinition, Score, StatusLineConfig,
};
pub use registry::ScaleRegistry;
