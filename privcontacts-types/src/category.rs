use crate::ContactDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of field a piece of contact data belongs to.
///
/// Each category has its own value type in the model and its own mapping
/// table towards the external representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactDataCategory {
    PhoneNumber,
    EmailAddress,
    PhysicalAddress,
    Website,
    Relationship,
    EventDate,
    Company,
}

impl ContactDataCategory {
    /// All categories, in the order a contact is imported and exported.
    pub const ALL: [ContactDataCategory; 7] = [
        ContactDataCategory::PhoneNumber,
        ContactDataCategory::EmailAddress,
        ContactDataCategory::PhysicalAddress,
        ContactDataCategory::Website,
        ContactDataCategory::Relationship,
        ContactDataCategory::EventDate,
        ContactDataCategory::Company,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactDataCategory::PhoneNumber => "phone_number",
            ContactDataCategory::EmailAddress => "email_address",
            ContactDataCategory::PhysicalAddress => "physical_address",
            ContactDataCategory::Website => "website",
            ContactDataCategory::Relationship => "relationship",
            ContactDataCategory::EventDate => "event_date",
            ContactDataCategory::Company => "company",
        }
    }

    /// Types the editing layer offers for this category. The empty custom
    /// entry stands for "enter your own label".
    #[must_use]
    pub fn allowed_types(self) -> Vec<ContactDataType> {
        use ContactDataType::*;

        match self {
            ContactDataCategory::PhoneNumber => {
                vec![Mobile, Personal, Business, MobileBusiness, Other, Custom(String::new())]
            }
            ContactDataCategory::EmailAddress
            | ContactDataCategory::PhysicalAddress
            | ContactDataCategory::Website => {
                vec![Personal, Business, Other, Custom(String::new())]
            }
            ContactDataCategory::Relationship => vec![
                RelationshipFather,
                RelationshipMother,
                RelationshipChild,
                RelationshipBrother,
                RelationshipSister,
                RelationshipFriend,
                RelationshipPartner,
                RelationshipRelative,
                RelationshipWork,
                Custom(String::new()),
                Other,
            ],
            ContactDataCategory::EventDate => {
                vec![Birthday, Anniversary, Other, Custom(String::new())]
            }
            ContactDataCategory::Company => vec![Main, Other, Custom(String::new())],
        }
    }

    /// Type given to a freshly created, empty entry.
    #[must_use]
    pub fn default_type(self) -> ContactDataType {
        match self {
            ContactDataCategory::PhoneNumber => ContactDataType::Mobile,
            ContactDataCategory::EmailAddress
            | ContactDataCategory::PhysicalAddress
            | ContactDataCategory::Website => ContactDataType::Personal,
            ContactDataCategory::Relationship => ContactDataType::RelationshipFriend,
            ContactDataCategory::EventDate => ContactDataType::Birthday,
            ContactDataCategory::Company => ContactDataType::Main,
        }
    }
}

impl fmt::Display for ContactDataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
