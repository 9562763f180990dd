//! The field-type taxonomy.
//!
//! A closed set of semantic types plus one open-ended [`ContactDataType::Custom`]
//! variant carrying a free-text label. Every variant has a stable [`TypeKey`]
//! (persisted, and embedded in pseudo-relationship labels) and a priority used
//! to pick the most specific type when the same value arrives several times.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Stable machine key of a [`ContactDataType`].
///
/// The string form (`MOBILE_BUSINESS`, `RELATIONSHIP_WORK`, ...) is written to
/// storage and into external labels, so it must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKey {
    Personal,
    Business,
    Mobile,
    MobileBusiness,
    Other,
    Birthday,
    Anniversary,
    Main,
    Custom,

    RelationshipSibling,
    RelationshipBrother,
    RelationshipSister,
    RelationshipParent,
    RelationshipMother,
    RelationshipFather,
    RelationshipChild,
    RelationshipRelative,
    RelationshipPartner,
    RelationshipFriend,
    RelationshipWork,
}

impl TypeKey {
    /// All keys, in declaration order.
    pub const ALL: [TypeKey; 20] = [
        TypeKey::Personal,
        TypeKey::Business,
        TypeKey::Mobile,
        TypeKey::MobileBusiness,
        TypeKey::Other,
        TypeKey::Birthday,
        TypeKey::Anniversary,
        TypeKey::Main,
        TypeKey::Custom,
        TypeKey::RelationshipSibling,
        TypeKey::RelationshipBrother,
        TypeKey::RelationshipSister,
        TypeKey::RelationshipParent,
        TypeKey::RelationshipMother,
        TypeKey::RelationshipFather,
        TypeKey::RelationshipChild,
        TypeKey::RelationshipRelative,
        TypeKey::RelationshipPartner,
        TypeKey::RelationshipFriend,
        TypeKey::RelationshipWork,
    ];

    /// Returns the persisted name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKey::Personal => "PERSONAL",
            TypeKey::Business => "BUSINESS",
            TypeKey::Mobile => "MOBILE",
            TypeKey::MobileBusiness => "MOBILE_BUSINESS",
            TypeKey::Other => "OTHER",
            TypeKey::Birthday => "BIRTHDAY",
            TypeKey::Anniversary => "ANNIVERSARY",
            TypeKey::Main => "MAIN",
            TypeKey::Custom => "CUSTOM",
            TypeKey::RelationshipSibling => "RELATIONSHIP_SIBLING",
            TypeKey::RelationshipBrother => "RELATIONSHIP_BROTHER",
            TypeKey::RelationshipSister => "RELATIONSHIP_SISTER",
            TypeKey::RelationshipParent => "RELATIONSHIP_PARENT",
            TypeKey::RelationshipMother => "RELATIONSHIP_MOTHER",
            TypeKey::RelationshipFather => "RELATIONSHIP_FATHER",
            TypeKey::RelationshipChild => "RELATIONSHIP_CHILD",
            TypeKey::RelationshipRelative => "RELATIONSHIP_RELATIVE",
            TypeKey::RelationshipPartner => "RELATIONSHIP_PARTNER",
            TypeKey::RelationshipFriend => "RELATIONSHIP_FRIEND",
            TypeKey::RelationshipWork => "RELATIONSHIP_WORK",
        }
    }

    /// Parses a key by name, ignoring ASCII case. Returns `None` for unknown names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownTypeKey(s.to_string()))
    }
}

/// Semantic type of a single piece of contact data.
///
/// Equality follows the key; two [`ContactDataType::Custom`] values are equal
/// when their labels match after trimming, ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "key", content = "custom_value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactDataType {
    Personal,
    Business,
    Mobile,
    MobileBusiness,
    Other,
    Birthday,
    Anniversary,
    Main,
    /// User- or provider-supplied label without a dedicated variant.
    Custom(String),

    RelationshipSibling,
    RelationshipBrother,
    RelationshipSister,
    RelationshipParent,
    RelationshipMother,
    RelationshipFather,
    RelationshipChild,
    RelationshipRelative,
    RelationshipPartner,
    RelationshipFriend,
    RelationshipWork,
}

impl ContactDataType {
    /// Creates a custom type with the given label.
    pub fn custom(label: impl Into<String>) -> Self {
        ContactDataType::Custom(label.into())
    }

    /// Returns the stable key of this type.
    #[must_use]
    pub const fn key(&self) -> TypeKey {
        match self {
            ContactDataType::Personal => TypeKey::Personal,
            ContactDataType::Business => TypeKey::Business,
            ContactDataType::Mobile => TypeKey::Mobile,
            ContactDataType::MobileBusiness => TypeKey::MobileBusiness,
            ContactDataType::Other => TypeKey::Other,
            ContactDataType::Birthday => TypeKey::Birthday,
            ContactDataType::Anniversary => TypeKey::Anniversary,
            ContactDataType::Main => TypeKey::Main,
            ContactDataType::Custom(_) => TypeKey::Custom,
            ContactDataType::RelationshipSibling => TypeKey::RelationshipSibling,
            ContactDataType::RelationshipBrother => TypeKey::RelationshipBrother,
            ContactDataType::RelationshipSister => TypeKey::RelationshipSister,
            ContactDataType::RelationshipParent => TypeKey::RelationshipParent,
            ContactDataType::RelationshipMother => TypeKey::RelationshipMother,
            ContactDataType::RelationshipFather => TypeKey::RelationshipFather,
            ContactDataType::RelationshipChild => TypeKey::RelationshipChild,
            ContactDataType::RelationshipRelative => TypeKey::RelationshipRelative,
            ContactDataType::RelationshipPartner => TypeKey::RelationshipPartner,
            ContactDataType::RelationshipFriend => TypeKey::RelationshipFriend,
            ContactDataType::RelationshipWork => TypeKey::RelationshipWork,
        }
    }

    /// Lower numbers mean more specific. Used when one value is stored under
    /// several types and only one of them may survive.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        match self {
            ContactDataType::Mobile => 100,
            ContactDataType::Personal => 200,
            ContactDataType::Business => 300,
            ContactDataType::MobileBusiness => 310,
            ContactDataType::Custom(_) => 400,
            ContactDataType::Birthday => 500,
            ContactDataType::Anniversary => 600,
            ContactDataType::Main => 700,
            ContactDataType::RelationshipBrother => 800,
            ContactDataType::RelationshipSister => 802,
            ContactDataType::RelationshipSibling => 805,
            ContactDataType::RelationshipParent => 810,
            ContactDataType::RelationshipFather => 811,
            ContactDataType::RelationshipMother => 812,
            ContactDataType::RelationshipChild => 820,
            ContactDataType::RelationshipPartner => 830,
            ContactDataType::RelationshipRelative => 840,
            ContactDataType::RelationshipFriend => 850,
            ContactDataType::RelationshipWork => 860,
            ContactDataType::Other => 9000,
        }
    }

    /// Rebuilds a type from its persisted key. The custom text is only used
    /// for [`TypeKey::Custom`]; a missing text yields an empty custom label.
    #[must_use]
    pub fn from_key(key: TypeKey, custom_value: Option<&str>) -> Self {
        match key {
            TypeKey::Personal => ContactDataType::Personal,
            TypeKey::Business => ContactDataType::Business,
            TypeKey::Mobile => ContactDataType::Mobile,
            TypeKey::MobileBusiness => ContactDataType::MobileBusiness,
            TypeKey::Other => ContactDataType::Other,
            TypeKey::Birthday => ContactDataType::Birthday,
            TypeKey::Anniversary => ContactDataType::Anniversary,
            TypeKey::Main => ContactDataType::Main,
            TypeKey::Custom => ContactDataType::Custom(custom_value.unwrap_or_default().to_string()),
            TypeKey::RelationshipSibling => ContactDataType::RelationshipSibling,
            TypeKey::RelationshipBrother => ContactDataType::RelationshipBrother,
            TypeKey::RelationshipSister => ContactDataType::RelationshipSister,
            TypeKey::RelationshipParent => ContactDataType::RelationshipParent,
            TypeKey::RelationshipMother => ContactDataType::RelationshipMother,
            TypeKey::RelationshipFather => ContactDataType::RelationshipFather,
            TypeKey::RelationshipChild => ContactDataType::RelationshipChild,
            TypeKey::RelationshipRelative => ContactDataType::RelationshipRelative,
            TypeKey::RelationshipPartner => ContactDataType::RelationshipPartner,
            TypeKey::RelationshipFriend => ContactDataType::RelationshipFriend,
            TypeKey::RelationshipWork => ContactDataType::RelationshipWork,
        }
    }

    /// All types that carry no custom text, in key declaration order.
    #[must_use]
    pub fn standard_types() -> Vec<ContactDataType> {
        TypeKey::ALL
            .iter()
            .filter(|key| **key != TypeKey::Custom)
            .map(|key| Self::from_key(*key, None))
            .collect()
    }

    /// Returns the custom label, if this is a custom type.
    #[must_use]
    pub fn custom_value(&self) -> Option<&str> {
        match self {
            ContactDataType::Custom(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, ContactDataType::Custom(_))
    }

    /// True for the relationship sub-kinds (brother, parent, work, ...).
    #[must_use]
    pub const fn is_relationship(&self) -> bool {
        matches!(
            self,
            ContactDataType::RelationshipSibling
                | ContactDataType::RelationshipBrother
                | ContactDataType::RelationshipSister
                | ContactDataType::RelationshipParent
                | ContactDataType::RelationshipMother
                | ContactDataType::RelationshipFather
                | ContactDataType::RelationshipChild
                | ContactDataType::RelationshipRelative
                | ContactDataType::RelationshipPartner
                | ContactDataType::RelationshipFriend
                | ContactDataType::RelationshipWork
        )
    }

    /// English fallback title; the custom label for custom types.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            ContactDataType::Personal => "Personal",
            ContactDataType::Business | ContactDataType::MobileBusiness => "Business",
            ContactDataType::Mobile => "Mobile",
            ContactDataType::Other => "Other",
            ContactDataType::Birthday => "Birthday",
            ContactDataType::Anniversary => "Anniversary",
            ContactDataType::Main => "Main",
            ContactDataType::Custom(value) if value.trim().is_empty() => "(no label)",
            ContactDataType::Custom(value) => value,
            ContactDataType::RelationshipSibling => "Sibling",
            ContactDataType::RelationshipBrother => "Brother",
            ContactDataType::RelationshipSister => "Sister",
            ContactDataType::RelationshipParent => "Parent",
            ContactDataType::RelationshipMother => "Mother",
            ContactDataType::RelationshipFather => "Father",
            ContactDataType::RelationshipChild => "Child",
            ContactDataType::RelationshipRelative => "Relative",
            ContactDataType::RelationshipPartner => "Partner",
            ContactDataType::RelationshipFriend => "Friend",
            ContactDataType::RelationshipWork => "Work",
        }
    }
}

/// Comparison form of a custom label.
fn normalized_label(label: &str) -> String {
    label.trim().to_lowercase()
}

impl PartialEq for ContactDataType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ContactDataType::Custom(a), ContactDataType::Custom(b)) => {
                normalized_label(a) == normalized_label(b)
            }
            _ => self.key() == other.key(),
        }
    }
}

impl Eq for ContactDataType {}

impl Hash for ContactDataType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        if let ContactDataType::Custom(label) = self {
            normalized_label(label).hash(state);
        }
    }
}

impl fmt::Display for ContactDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactDataType::Custom(label) => write!(f, "{}({label})", TypeKey::Custom),
            other => f.write_str(other.key().as_str()),
        }
    }
}
