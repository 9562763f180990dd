//! Pseudo-relationship labels for the company field.
//!
//! The platform directory has no slot for the app's company entries, so they
//! travel as relationship entries whose custom label starts with a reserved
//! marker followed by the company's type key:
//!
//! ```text
//! Organisation:BUSINESS
//! Organisation:CUSTOM:Board of directors
//! ```

use privcontacts_types::{ContactDataType, TypeKey};
use thiserror::Error;
use tracing::warn;

/// Prefix reserved for pseudo-relationship labels. Never shown to the user.
pub const ORGANISATION_MARKER: &str = "Organisation:";

const KEY_SEPARATOR: char = ':';

/// Why a label could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("label {0:?} does not start with the organisation marker")]
    MissingMarker(String),

    #[error("label carries no type key")]
    EmptyKey,

    #[error("unknown type key {0:?}")]
    UnknownKey(String),
}

/// Encodes company types into relationship labels and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyLabelCodec;

impl CompanyLabelCodec {
    /// Type used whenever a label cannot be decoded.
    pub const FALLBACK: ContactDataType = ContactDataType::Business;

    #[must_use]
    pub fn encode(&self, data_type: &ContactDataType) -> String {
        match data_type {
            ContactDataType::Custom(text) => {
                format!("{ORGANISATION_MARKER}{}{KEY_SEPARATOR}{text}", TypeKey::Custom)
            }
            other => format!("{ORGANISATION_MARKER}{}", other.key()),
        }
    }

    /// Whether `label` is a pseudo-relationship label. The marker is compared
    /// ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        strip_marker(label).is_some()
    }

    /// Decodes a label, reporting why it could not be read.
    pub fn try_decode(&self, label: &str) -> Result<ContactDataType, DecodeError> {
        let rest = strip_marker(label).ok_or_else(|| DecodeError::MissingMarker(label.to_string()))?;

        let (key, custom_text) = match rest.split_once(KEY_SEPARATOR) {
            Some((key, text)) => (key.trim(), Some(text)),
            None => (rest.trim(), None),
        };
        if key.is_empty() {
            return Err(DecodeError::EmptyKey);
        }

        let key = TypeKey::parse(key).ok_or_else(|| DecodeError::UnknownKey(key.to_string()))?;
        Ok(ContactDataType::from_key(key, custom_text))
    }

    /// Decodes a label, substituting [`Self::FALLBACK`] for anything unreadable.
    ///
    /// One corrupt label must not keep the rest of a contact from loading.
    #[must_use]
    pub fn decode(&self, label: &str) -> ContactDataType {
        self.try_decode(label).unwrap_or_else(|err| {
            warn!("Failed to decode company label {label:?}: {err}, using {}", Self::FALLBACK);
            Self::FALLBACK
        })
    }
}

fn strip_marker(label: &str) -> Option<&str> {
    let prefix = label.get(..ORGANISATION_MARKER.len())?;
    prefix
        .eq_ignore_ascii_case(ORGANISATION_MARKER)
        .then(|| &label[ORGANISATION_MARKER.len()..])
}
