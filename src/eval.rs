//! The evaluation pipeline.
//!
//! One path for every surface: run the precheck when the scale has one,
//! stop on failure, otherwise compute and clarify. The same pipeline is
//! invoked for a single scale (the `score` command, the status line) or
//! fanned out across the whole registry (the `report` table); fan-out
//! applies it independently per scale with no shared state.

use tracing::debug;

use crate::scales::{ScaleDefinition, ScaleRegistry, Score};

/// The result of evaluating one scale against one text.
///
/// Created fresh per evaluation and discarded after rendering; nothing is
/// cached. A result with a precheck failure never carries a score or
/// clarification.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The scale that was evaluated.
    pub scale: ScaleDefinition,
    /// The raw score, when the precheck passed.
    pub score: Option<Score>,
    /// Human-readable band for numeric scores, when the scale defines one.
    pub clarification: Option<String>,
    /// Why the input was unsuitable, when the precheck failed.
    pub precheck_failure: Option<String>,
}

impl Evaluation {
    /// Whether the input passed the scale's precheck.
    pub fn is_valid(&self) -> bool {
        self.precheck_failure.is_none()
    }

    /// The value to render in a score column: the score when valid,
    /// otherwise the precheck message.
    pub fn display_value(&self) -> String {
        if let Some(ref message) = self.precheck_failure {
            return message.clone();
        }
        self.score
            .as_ref()
            .map(|score| score.to_string())
            .unwrap_or_default()
    }

    /// One-line summary: "`<label> : <score>`", with the band appended
    /// when present, or "`<label> : <precheck message>`".
    pub fn summary(&self) -> String {
        if let Some(ref message) = self.precheck_failure {
            return format!("{} : {}", self.scale.label, message);
        }
        let value = self.display_value();
        match self.clarification {
            Some(ref band) => format!("{} : {} - {}", self.scale.label, value, band),
            None => format!("{} : {}", self.scale.label, value),
        }
    }
}

/// Evaluate one scale against the given text.
pub fn evaluate(scale: &ScaleDefinition, text: &str) -> Evaluation {
    if let Some(precheck) = scale.precheck {
        if let Some(message) = precheck(text) {
            debug!(scale = scale.id, %message, "precheck failed");
            return Evaluation {
                scale: *scale,
                score: None,
                clarification: None,
                precheck_failure: Some(message),
            };
        }
    }

    let score = (scale.compute)(text);
    let clarification = match (scale.clarify, score.as_numeric()) {
        (Some(clarify), Some(value)) => Some(clarify(value)),
        _ => None,
    };
    debug!(scale = scale.id, score = %score, "evaluated");

    Evaluation {
        scale: *scale,
        score: Some(score),
        clarification,
        precheck_failure: None,
    }
}

/// Evaluate every registered scale against the same text, in registry order.
pub fn evaluate_all(registry: &ScaleRegistry, text: &str) -> Vec<Evaluation> {
    registry.iter().map(|scale| evaluate(scale, text)).collect()
}
