use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Lifecycle of a contact-data entry relative to what is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelStatus {
    /// Created during this session (including freshly imported entries).
    New,
    Unchanged,
    Changed,
    Deleted,
}

impl ModelStatus {
    /// Whether this status may move to `target`. Staying put is always allowed.
    #[must_use]
    pub const fn can_change_to(self, target: ModelStatus) -> bool {
        use ModelStatus::*;

        match (self, target) {
            (New, New | Deleted) => true,
            (New, _) => false,
            (Unchanged, New) => false,
            (Unchanged, _) => true,
            (Changed, Changed | Deleted) => true,
            (Changed, _) => false,
            (Deleted, Deleted) => true,
            (Deleted, _) => false,
        }
    }

    /// Moves to `target` if allowed, otherwise keeps the current status.
    #[must_use]
    pub fn try_change_to(self, target: ModelStatus) -> ModelStatus {
        if self.can_change_to(target) {
            target
        } else {
            debug!("Blocked status transition from {} to {}", self, target);
            self
        }
    }

    /// Moves to `target`, failing if the transition is not allowed.
    pub fn change_to(self, target: ModelStatus) -> crate::Result<ModelStatus> {
        if self.can_change_to(target) {
            Ok(target)
        } else {
            Err(Error::InvalidStatusTransition { from: self, to: target })
        }
    }

    /// True when the entry has to be written (new or changed).
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, ModelStatus::New | ModelStatus::Changed)
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelStatus::New => "new",
            ModelStatus::Unchanged => "unchanged",
            ModelStatus::Changed => "changed",
            ModelStatus::Deleted => "deleted",
        };
        f.write_str(name)
    }
}
