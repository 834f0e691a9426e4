//! Report command implementation.
//!
//! The `legible report` command fans the evaluation pipeline out across
//! the full registry and renders one row per scale.

use serde::Serialize;

use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::eval::{evaluate_all, Evaluation};
use crate::input::resolve_text;
use crate::scales::ScaleRegistry;
use crate::ui::{ReportTable, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// One row of the JSON report.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precheck_failure: Option<String>,
}

impl From<&Evaluation> for ReportRow {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            id: evaluation.scale.id,
            label: evaluation.scale.label,
            score: evaluation.score.as_ref().map(|score| score.to_string()),
            clarification: evaluation.clarification.clone(),
            precheck_failure: evaluation.precheck_failure.clone(),
        }
    }
}

/// The report command implementation.
pub struct ReportCommand {
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(args: ReportArgs) -> Self {
        Self { args }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = ScaleRegistry::shared();
        let text = resolve_text(self.args.file.as_ref(), self.args.lines.as_deref())?;
        let evaluations = evaluate_all(registry, &text);

        if self.args.json {
            let rows: Vec<ReportRow> = evaluations.iter().map(ReportRow::from).collect();
            let json = serde_json::to_string_pretty(&rows).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let table = ReportTable::from_evaluations(&evaluations);
        ui.message(&table.render());
        Ok(CommandResult::success())
    }
}
