//! Status line rendering for watch mode.
//!
//! The terminal analog of pinned status items: one compact line showing
//! the status-line scales, left-aligned cells first, right-aligned cells
//! padded to the terminal edge.

use crate::eval::Evaluation;
use crate::scales::Alignment;

fn cell(evaluation: &Evaluation) -> String {
    if let Some(ref message) = evaluation.precheck_failure {
        return format!("{}: {}", evaluation.scale.label, message);
    }
    let value = evaluation.display_value();
    match evaluation.clarification {
        Some(ref band) => format!("{}: {} ({})", evaluation.scale.label, value, band),
        None => format!("{}: {}", evaluation.scale.label, value),
    }
}

/// Render the status line for the given width.
///
/// `evaluations` must already be in status-line order (see
/// [`ScaleRegistry::status_line_scales`](crate::scales::ScaleRegistry::status_line_scales)).
pub fn render_status_line(evaluations: &[Evaluation], width: usize) -> String {
    let mut left_cells: Vec<String> = Vec::new();
    let mut right_cells: Vec<String> = Vec::new();

    for evaluation in evaluations {
        let Some(config) = evaluation.scale.status_line else {
            continue;
        };
        match config.alignment {
            Alignment::Left => left_cells.push(cell(evaluation)),
            Alignment::Right => right_cells.push(cell(evaluation)),
        }
    }

    let left = left_cells.join(" │ ");
    let right = right_cells.join(" │ ");

    if right.is_empty() {
        return left;
    }
    if left.is_empty() {
        let pad = width.saturating_sub(right.chars().count());
        return format!("{}{}", " ".repeat(pad), right);
    }

    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}
