use crate::{LabelMapping, LabelTable};
use privcontacts_types::{ContactDataCategory, ContactDataType, DirectoryLabel, NativeType, TypeKey};
use tracing::debug;

const PHONE: &[(NativeType, TypeKey)] = &[
    (NativeType::PhoneNumberMobile, TypeKey::Mobile),
    (NativeType::LocationHome, TypeKey::Personal),
    (NativeType::LocationWork, TypeKey::Business),
    (NativeType::PhoneNumberCompanyMain, TypeKey::Business),
    (NativeType::PhoneNumberWorkMobile, TypeKey::MobileBusiness),
    (NativeType::Main, TypeKey::Main),
    (NativeType::Other, TypeKey::Other),
];

const LOCATION: &[(NativeType, TypeKey)] = &[
    (NativeType::LocationHome, TypeKey::Personal),
    (NativeType::LocationWork, TypeKey::Business),
    (NativeType::Main, TypeKey::Main),
    (NativeType::Other, TypeKey::Other),
];

const WEBSITE: &[(NativeType, TypeKey)] = &[
    (NativeType::WebsiteHomePage, TypeKey::Main),
    (NativeType::Main, TypeKey::Main),
    (NativeType::LocationHome, TypeKey::Personal),
    (NativeType::LocationWork, TypeKey::Business),
    (NativeType::Other, TypeKey::Other),
];

const RELATION: &[(NativeType, TypeKey)] = &[
    (NativeType::RelationBrother, TypeKey::RelationshipBrother),
    (NativeType::RelationSister, TypeKey::RelationshipSister),
    (NativeType::RelationChild, TypeKey::RelationshipChild),
    (NativeType::RelationFather, TypeKey::RelationshipFather),
    (NativeType::RelationMother, TypeKey::RelationshipMother),
    (NativeType::RelationParent, TypeKey::RelationshipParent),
    (NativeType::RelationPartner, TypeKey::RelationshipPartner),
    (NativeType::RelationDomesticPartner, TypeKey::RelationshipPartner),
    (NativeType::RelationSpouse, TypeKey::RelationshipPartner),
    (NativeType::RelationRelative, TypeKey::RelationshipRelative),
    (NativeType::RelationFriend, TypeKey::RelationshipFriend),
    (NativeType::RelationManager, TypeKey::RelationshipWork),
    (NativeType::RelationAssistant, TypeKey::RelationshipWork),
    (NativeType::Other, TypeKey::Other),
];

const EVENT: &[(NativeType, TypeKey)] = &[
    (NativeType::DateBirthday, TypeKey::Birthday),
    (NativeType::DateAnniversary, TypeKey::Anniversary),
    (NativeType::Other, TypeKey::Other),
];

const COMPANY: &[(NativeType, TypeKey)] = &[
    (NativeType::Main, TypeKey::Main),
    (NativeType::LocationWork, TypeKey::Business),
    (NativeType::LocationHome, TypeKey::Personal),
    (NativeType::Other, TypeKey::Other),
];

/// Translation between [`ContactDataType`] and the platform directory's
/// [`DirectoryLabel`].
///
/// Native types absent from a category's table (fax numbers, referrals, a
/// birthday label on a phone number, ...) import as `Other`. Custom labels
/// import verbatim as [`ContactDataType::Custom`]; a blank one imports as
/// `Other`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryMapping;

impl DirectoryMapping {
    #[must_use]
    pub const fn table(category: ContactDataCategory) -> LabelTable<NativeType> {
        let primary = match category {
            ContactDataCategory::PhoneNumber => PHONE,
            ContactDataCategory::EmailAddress | ContactDataCategory::PhysicalAddress => LOCATION,
            ContactDataCategory::Website => WEBSITE,
            ContactDataCategory::Relationship => RELATION,
            ContactDataCategory::EventDate => EVENT,
            ContactDataCategory::Company => COMPANY,
        };
        LabelTable::new(primary, &[])
    }
}

impl LabelMapping for DirectoryMapping {
    type Label = DirectoryLabel;

    fn to_internal(&self, label: &DirectoryLabel, category: ContactDataCategory) -> ContactDataType {
        match label {
            DirectoryLabel::Custom(text) if text.trim().is_empty() => ContactDataType::Other,
            DirectoryLabel::Custom(text) => ContactDataType::Custom(text.clone()),
            DirectoryLabel::Native(native) => match Self::table(category).key_of(*native) {
                Some(key) => ContactDataType::from_key(key, None),
                None => {
                    debug!("No {category} type for native label {native:?}, using Other");
                    ContactDataType::Other
                }
            },
        }
    }

    fn recognizes(&self, label: &DirectoryLabel, category: ContactDataCategory) -> bool {
        match label {
            DirectoryLabel::Custom(text) => !text.trim().is_empty(),
            DirectoryLabel::Native(native) => Self::table(category).key_of(*native).is_some(),
        }
    }

    fn to_external_fresh(&self, data_type: &ContactDataType, category: ContactDataCategory) -> DirectoryLabel {
        if let ContactDataType::Custom(text) = data_type {
            if !text.trim().is_empty() {
                return DirectoryLabel::Custom(text.clone());
            }
        }

        match Self::table(category).resolve(data_type.key()) {
            Some((native, key)) => {
                if key != data_type.key() {
                    debug!("No native {category} label for {data_type}, exporting as {key}");
                }
                DirectoryLabel::Native(native)
            }
            None => DirectoryLabel::Native(NativeType::Other),
        }
    }
}
