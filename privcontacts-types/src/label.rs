//! External label vocabularies.
//!
//! The platform directory labels entries with a fixed set of native types
//! plus a free-text custom label. The interchange format uses free-text type
//! tokens. Neither vocabulary is interpreted here; the translation tables live
//! in `privcontacts-mapping`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Native field-type token of the platform contact directory.
///
/// The `Location*` labels are shared between phone numbers, e-mail
/// addresses, postal addresses and websites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeType {
    Main,
    Other,
    LocationHome,
    LocationWork,

    PhoneNumberMobile,
    PhoneNumberCompanyMain,
    PhoneNumberWorkMobile,
    PhoneNumberAssistant,
    PhoneNumberCallback,
    PhoneNumberCar,
    PhoneNumberFaxHome,
    PhoneNumberFaxWork,
    PhoneNumberIsdn,
    PhoneNumberMms,
    PhoneNumberOtherFax,
    PhoneNumberPager,
    PhoneNumberRadio,
    PhoneNumberTelex,
    PhoneNumberTtyTdd,
    PhoneNumberWorkPager,

    WebsiteHomePage,
    WebsiteBlog,
    WebsiteProfile,
    WebsiteFtp,

    DateBirthday,
    DateAnniversary,

    RelationAssistant,
    RelationBrother,
    RelationChild,
    RelationDomesticPartner,
    RelationFather,
    RelationFriend,
    RelationManager,
    RelationMother,
    RelationParent,
    RelationPartner,
    RelationReferredBy,
    RelationRelative,
    RelationSister,
    RelationSpouse,
}

/// Label of a single directory entry: a native type or a free-text label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DirectoryLabel {
    Native(NativeType),
    Custom(String),
}

impl DirectoryLabel {
    pub fn custom(label: impl Into<String>) -> Self {
        DirectoryLabel::Custom(label.into())
    }

    /// Returns the free text of a custom label.
    #[must_use]
    pub fn custom_text(&self) -> Option<&str> {
        match self {
            DirectoryLabel::Custom(text) => Some(text),
            DirectoryLabel::Native(_) => None,
        }
    }
}

impl From<NativeType> for DirectoryLabel {
    fn from(native: NativeType) -> Self {
        DirectoryLabel::Native(native)
    }
}

impl fmt::Display for DirectoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryLabel::Native(native) => write!(f, "{native:?}"),
            DirectoryLabel::Custom(text) => write!(f, "custom({text})"),
        }
    }
}

/// The external label an imported entry arrived with.
///
/// Kept on the entry so that an unedited value is exported with exactly the
/// label it came with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "label", rename_all = "snake_case")]
pub enum SourceLabel {
    Directory(DirectoryLabel),
    Interchange(String),
}

impl SourceLabel {
    #[must_use]
    pub fn as_directory(&self) -> Option<&DirectoryLabel> {
        match self {
            SourceLabel::Directory(label) => Some(label),
            SourceLabel::Interchange(_) => None,
        }
    }

    #[must_use]
    pub fn as_interchange(&self) -> Option<&str> {
        match self {
            SourceLabel::Interchange(token) => Some(token),
            SourceLabel::Directory(_) => None,
        }
    }
}
