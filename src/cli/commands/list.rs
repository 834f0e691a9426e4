//! List command implementation.
//!
//! The `legible list` command lists the registered readability scales.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::scales::ScaleRegistry;
use crate::ui::theme::LegibleTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct ScaleListing {
    id: &'static str,
    label: &'static str,
    has_precheck: bool,
    has_clarify: bool,
    on_status_line: bool,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = ScaleRegistry::shared();

        if self.args.json {
            let listings: Vec<ScaleListing> = registry
                .iter()
                .map(|scale| ScaleListing {
                    id: scale.id,
                    label: scale.label,
                    has_precheck: scale.precheck.is_some(),
                    has_clarify: scale.clarify.is_some(),
                    on_status_line: scale.status_line.is_some(),
                })
                .collect();
            let json = serde_json::to_string_pretty(&listings).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = LegibleTheme::new();
        ui.message(&format!("  {}", theme.header.apply_to("Scales:")));
        for scale in registry.iter() {
            let marker = if scale.status_line.is_some() {
                format!(" {}", theme.dim.apply_to("(status line)"))
            } else {
                String::new()
            };
            ui.message(&format!(
                "    {} {} {}{}",
                theme.highlight.apply_to(scale.id),
                theme.dim.apply_to("—"),
                scale.label,
                marker
            ));
        }

        Ok(CommandResult::success())
    }
}
