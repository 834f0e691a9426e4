//! Watch command implementation.
//!
//! The `legible watch` command re-runs the evaluation pipeline on every
//! change to the watched file and redraws the status line and report table.

use tracing::debug;

use crate::cli::args::WatchArgs;
use crate::error::Result;
use crate::eval::{evaluate, evaluate_all};
use crate::scales::ScaleRegistry;
use crate::ui::{render_status_line, LegibleTheme, ReportTable, UserInterface};
use crate::watch::{ChangeMonitor, FileSource, TextSource};

use super::dispatcher::{Command, CommandResult};

/// The watch command implementation.
pub struct WatchCommand {
    args: WatchArgs,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(args: WatchArgs) -> Self {
        Self { args }
    }

    /// Run one render cycle: load the source, evaluate, redraw.
    ///
    /// Split from `execute` so tests can drive re-evaluation without a
    /// real filesystem event.
    pub fn render(source: &dyn TextSource, ui: &mut dyn UserInterface) -> Result<()> {
        let registry = ScaleRegistry::shared();
        let text = source.load()?;
        debug!(source = %source.name(), bytes = text.len(), "re-evaluating");

        let pinned: Vec<_> = registry
            .status_line_scales()
            .into_iter()
            .map(|scale| evaluate(scale, &text))
            .collect();
        let evaluations = evaluate_all(registry, &text);

        let theme = LegibleTheme::new();
        let width = ui.width();
        ui.clear_screen();
        ui.message(&format!("  {}", theme.header.apply_to(source.name())));
        ui.message(&render_status_line(&pinned, width));
        ui.message("");
        ui.message(&ReportTable::from_evaluations(&evaluations).render());
        Ok(())
    }
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = FileSource::new(&self.args.file);

        // Initial render before the first change arrives.
        Self::render(&source, ui)?;

        let monitor = ChangeMonitor::new(&self.args.file);
        monitor.run(|| Self::render(&source, ui))?;
        Ok(CommandResult::success())
    }
}
