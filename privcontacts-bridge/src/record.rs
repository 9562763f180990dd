//! Raw per-entry tuples exchanged with the external representations.
//!
//! These carry no interpretation: labels and tokens are passed through as
//! received, and values may be missing when the source delivered a broken
//! entry.

use privcontacts_types::DirectoryLabel;
use serde::{Deserialize, Serialize};

// ── Platform directory ───────────────────────────────────────────

/// One labelled value of a directory contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub label: DirectoryLabel,
    pub value: Option<String>,
    /// Row number in the directory, if it reported one.
    pub id: Option<i64>,
}

impl DirectoryEntry {
    pub fn new(label: impl Into<DirectoryLabel>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// All contact data of one directory contact.
///
/// Companies have no slot of their own; they live in `relations` under a
/// pseudo-relationship label. `organization` is the directory's single
/// free-text organization field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryRecord {
    pub phone_numbers: Vec<DirectoryEntry>,
    pub email_addresses: Vec<DirectoryEntry>,
    pub physical_addresses: Vec<DirectoryEntry>,
    pub websites: Vec<DirectoryEntry>,
    pub relations: Vec<DirectoryEntry>,
    pub events: Vec<DirectoryEntry>,
    pub organization: Option<String>,
}

impl DirectoryRecord {
    /// Number of entries across all lists, not counting `organization`.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.phone_numbers.len()
            + self.email_addresses.len()
            + self.physical_addresses.len()
            + self.websites.len()
            + self.relations.len()
            + self.events.len()
    }
}

// ── Interchange format ───────────────────────────────────────────

/// One property of an interchange contact with its type tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchangeEntry {
    #[serde(default)]
    pub types: Vec<String>,
    pub value: Option<String>,
}

impl InterchangeEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            types: Vec::new(),
            value: Some(value.into()),
        }
    }

    /// Entry with a single type token.
    pub fn typed(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(value).with_type(token)
    }

    #[must_use]
    pub fn with_type(mut self, token: impl Into<String>) -> Self {
        self.types.push(token.into());
        self
    }
}

/// An organization property: hierarchy levels from outermost to innermost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationEntry {
    #[serde(default)]
    pub values: Vec<String>,
    pub type_token: Option<String>,
}

impl OrganizationEntry {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            type_token: None,
        }
    }
}

/// All contact data of one interchange contact.
///
/// Event dates are split into birthdays and anniversaries; their values are
/// `YYYY-MM-DD` or `--MM-DD`, and type tokens on them are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterchangeRecord {
    pub telephones: Vec<InterchangeEntry>,
    pub emails: Vec<InterchangeEntry>,
    pub addresses: Vec<InterchangeEntry>,
    pub urls: Vec<InterchangeEntry>,
    pub related: Vec<InterchangeEntry>,
    pub organizations: Vec<OrganizationEntry>,
    pub birthdays: Vec<InterchangeEntry>,
    pub anniversaries: Vec<InterchangeEntry>,
}

impl InterchangeRecord {
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.telephones.len()
            + self.emails.len()
            + self.addresses.len()
            + self.urls.len()
            + self.related.len()
            + self.organizations.len()
            + self.birthdays.len()
            + self.anniversaries.len()
    }
}
