//! Command implementations.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod report;
pub mod score;
pub mod watch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
