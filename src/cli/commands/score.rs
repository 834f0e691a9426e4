//! Score command implementation.
//!
//! The `legible score` command evaluates a single scale against a file,
//! a line range of it, or stdin.

use tracing::debug;

use crate::cli::args::ScoreArgs;
use crate::error::{LegibleError, Result};
use crate::eval::evaluate;
use crate::input::resolve_text;
use crate::scales::ScaleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The score command implementation.
pub struct ScoreCommand {
    args: ScoreArgs,
}

impl ScoreCommand {
    /// Create a new score command.
    pub fn new(args: ScoreArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScoreArgs {
        &self.args
    }
}

impl Command for ScoreCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = ScaleRegistry::shared();
        let scale = registry
            .get(&self.args.scale)
            .ok_or_else(|| LegibleError::UnknownScale {
                id: self.args.scale.clone(),
            })?;

        let text = resolve_text(self.args.file.as_ref(), self.args.lines.as_deref())?;
        if text.is_empty() {
            // No resolvable text is a deliberate no-op, not an error.
            debug!(scale = scale.id, "empty input, skipping evaluation");
            return Ok(CommandResult::success());
        }

        let result = evaluate(scale, &text);
        // Precheck failures are informational, never fatal.
        ui.message(&result.summary());
        Ok(CommandResult::success())
    }
}
