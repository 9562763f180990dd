use serde::Serialize;
use std::fmt;

/// Aggregate outcome of importing one contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Entries in the resulting data set.
    pub imported: usize,
    /// Entries dropped because their value was missing, empty or unparseable.
    pub skipped_invalid: usize,
    /// Entries dropped as duplicates of a surviving entry.
    pub removed_duplicates: usize,
    /// Entries whose external label was not recognized and got a fallback type.
    pub fallback_labels: usize,
}

impl ImportReport {
    /// True if every entry made it through with a recognized label.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_invalid == 0 && self.removed_duplicates == 0 && self.fallback_labels == 0
    }

    pub(crate) fn dropped(&self) -> usize {
        self.skipped_invalid + self.removed_duplicates
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} imported, {} invalid, {} duplicates, {} fallback labels",
            self.imported, self.skipped_invalid, self.removed_duplicates, self.fallback_labels
        )
    }
}

/// Aggregate outcome of exporting one contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub exported: usize,
    /// Entries the target representation has no place for.
    pub skipped: usize,
}

impl ExportReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exported, {} skipped", self.exported, self.skipped)
    }
}
