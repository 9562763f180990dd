//! Identifiers of single contact-data entries.
//!
//! Entries created by the app get a random UUID. Entries read from the
//! platform directory carry the directory's row number when it reported one.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a contact-data entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContactDataId {
    /// Owned by the app.
    Internal(Uuid),
    /// Row number assigned by the platform directory.
    External(i64),
    /// Read from the platform directory, which did not report a row number.
    ExternalWithoutNo(Uuid),
}

impl ContactDataId {
    /// Creates a new internal ID.
    ///
    /// New entries always start internal; they are switched to an external
    /// ID only when the contact is written to the directory.
    #[must_use]
    pub fn new() -> Self {
        Self::Internal(Uuid::new_v4())
    }

    /// Creates an ID for a directory entry, falling back to a placeholder
    /// when the directory did not report a row number.
    #[must_use]
    pub fn external(row_no: Option<i64>) -> Self {
        match row_no {
            Some(no) => Self::External(no),
            None => Self::ExternalWithoutNo(Uuid::new_v4()),
        }
    }

    /// Creates an internal ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self::Internal(uuid)
    }

    /// Returns the directory row number, if any.
    #[must_use]
    pub const fn row_no(&self) -> Option<i64> {
        match self {
            Self::External(no) => Some(*no),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_) | Self::ExternalWithoutNo(_))
    }

    /// Parses an internal ID from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUuid`] when `s` is not a UUID.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self::Internal(Uuid::parse_str(s)?))
    }
}

impl Default for ContactDataId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(uuid) => write!(f, "{uuid}"),
            Self::External(no) => write!(f, "ext:{no}"),
            Self::ExternalWithoutNo(uuid) => write!(f, "ext:{uuid}"),
        }
    }
}

impl FromStr for ContactDataId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
