//! Outcome of a device command.

use reqwest::StatusCode;

use crate::types::PowerMode;

/// Result of a command the vendor answered.
///
/// A rejected command is not an [`Error`](crate::Error): the light's cached
/// state is left untouched and the status is handed back for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The vendor accepted the command and the cached state was updated.
    Applied(PowerMode),
    /// The vendor answered with a status of 400 or above.
    Rejected { status: StatusCode },
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied(_))
    }
}
