//! Report table rendering.

use crate::eval::Evaluation;

const HEADERS: [&str; 3] = ["Scale", "Score", "Clarification"];

/// The report table: one row per scale, in registry order.
///
/// A precheck failure renders its message in the score column and leaves
/// the clarification column empty; scores and bands are never shown for
/// invalid input.
#[derive(Debug)]
pub struct ReportTable {
    rows: Vec<[String; 3]>,
    column_widths: [usize; 3],
}

impl ReportTable {
    /// Build a table from pipeline results.
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        let mut table = Self {
            rows: Vec::new(),
            column_widths: [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()],
        };
        for evaluation in evaluations {
            let clarification = if evaluation.is_valid() {
                evaluation.clarification.clone().unwrap_or_default()
            } else {
                String::new()
            };
            table.add_row([
                evaluation.scale.label.to_string(),
                evaluation.display_value(),
                clarification,
            ]);
        }
        table
    }

    fn add_row(&mut self, row: [String; 3]) {
        for (width, cell) in self.column_widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        let headers = HEADERS.map(str::to_string);
        output.push_str(&self.render_row(&headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String; 3]) -> String {
        let mut s = String::from("│");

        for (width, cell) in self.column_widths.iter().zip(row.iter()) {
            let padding = width.saturating_sub(cell.chars().count());
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(padding));
            s.push_str(" │");
        }

        s
    }
}
