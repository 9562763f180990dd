//! Per-category value types.
//!
//! Each value knows how it is displayed and, where the category has one, its
//! search-normalized projection. The projection is what the second
//! deduplication pass groups on; values without one are never merged by it.

use chrono::{Datelike, NaiveDate};
use privcontacts_types::ContactDataCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can be stored in a [`ContactDataEntry`](crate::ContactDataEntry).
pub trait ContactValue: Clone + fmt::Debug + PartialEq {
    /// The category all values of this type belong to.
    const CATEGORY: ContactDataCategory;

    /// The form shown to the user. Exact duplicates are detected on this.
    fn display_value(&self) -> String;

    /// Format-insensitive projection, or `None` if the category has none.
    fn search_value(&self) -> Option<String> {
        None
    }

    fn is_empty(&self) -> bool {
        self.display_value().trim().is_empty()
    }
}

// ── Phone numbers ────────────────────────────────────────────────

/// A phone number as entered, plus its display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    raw: String,
    formatted: String,
}

impl PhoneNumber {
    /// Creates a phone number. The display form is the trimmed input with
    /// runs of whitespace collapsed to a single space.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let formatted = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        Self { raw, formatted }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Only the digits of the number.
    #[must_use]
    pub fn digits(&self) -> String {
        self.raw.chars().filter(char::is_ascii_digit).collect()
    }
}

impl ContactValue for PhoneNumber {
    const CATEGORY: ContactDataCategory = ContactDataCategory::PhoneNumber;

    fn display_value(&self) -> String {
        self.formatted.clone()
    }

    fn search_value(&self) -> Option<String> {
        let digits = self.digits();
        (!digits.is_empty()).then_some(digits)
    }
}

// ── E-mail addresses ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into().trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ContactValue for EmailAddress {
    const CATEGORY: ContactDataCategory = ContactDataCategory::EmailAddress;

    fn display_value(&self) -> String {
        self.0.clone()
    }

    /// Only the domain is case-folded; the local part may be case-sensitive.
    fn search_value(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        Some(match self.0.rsplit_once('@') {
            Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
            None => self.0.clone(),
        })
    }
}

// ── Free-text values ─────────────────────────────────────────────

macro_rules! text_value {
    ($(#[$meta:meta])* $name:ident => $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into().trim().to_string())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ContactValue for $name {
            const CATEGORY: ContactDataCategory = $category;

            fn display_value(&self) -> String {
                self.0.clone()
            }
        }
    };
}

text_value!(
    /// A postal address, already formatted into a single line.
    PhysicalAddress => ContactDataCategory::PhysicalAddress
);
text_value!(Website => ContactDataCategory::Website);
text_value!(
    /// Name of the related person.
    RelatedPerson => ContactDataCategory::Relationship
);
text_value!(
    /// Organization name, possibly spanning several levels ("ACME - Sales").
    Company => ContactDataCategory::Company
);

// ── Event dates ──────────────────────────────────────────────────

/// Year used to store dates whose year is unknown. A leap year, so that
/// 29 February stays representable.
const YEARLESS_PLACEHOLDER: i32 = 2000;

/// A calendar date, optionally without year (`--MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDate {
    date: NaiveDate,
    has_year: bool,
}

impl EventDate {
    /// Returns `None` for impossible dates.
    #[must_use]
    pub fn new(year: Option<i32>, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year.unwrap_or(YEARLESS_PLACEHOLDER), month, day)?;
        Some(Self {
            date,
            has_year: year.is_some(),
        })
    }

    /// Parses `YYYY-MM-DD` or `--MM-DD`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.strip_prefix("--") {
            Some(month_day) => {
                let padded = format!("{YEARLESS_PLACEHOLDER}-{month_day}");
                let date = NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()?;
                Some(Self { date, has_year: false })
            }
            None => {
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
                Some(Self { date, has_year: true })
            }
        }
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.has_year.then(|| self.date.year())
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Serialized form accepted by [`EventDate::parse`].
    #[must_use]
    pub fn to_raw(&self) -> String {
        if self.has_year {
            self.date.format("%Y-%m-%d").to_string()
        } else {
            format!("--{:02}-{:02}", self.month(), self.day())
        }
    }
}

impl ContactValue for EventDate {
    const CATEGORY: ContactDataCategory = ContactDataCategory::EventDate;

    fn display_value(&self) -> String {
        self.to_raw()
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw())
    }
}
