use crate::{
    Company, ContactDataEntry, EmailAddress, EventDate, PhoneNumber, PhysicalAddress,
    RelatedPerson, Website,
};
use privcontacts_types::ContactDataCategory;
use serde::{Deserialize, Serialize};

/// All contact-data entries of one contact, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDataSet {
    #[serde(default)]
    pub phone_numbers: Vec<ContactDataEntry<PhoneNumber>>,
    #[serde(default)]
    pub email_addresses: Vec<ContactDataEntry<EmailAddress>>,
    #[serde(default)]
    pub physical_addresses: Vec<ContactDataEntry<PhysicalAddress>>,
    #[serde(default)]
    pub websites: Vec<ContactDataEntry<Website>>,
    #[serde(default)]
    pub relationships: Vec<ContactDataEntry<RelatedPerson>>,
    #[serde(default)]
    pub event_dates: Vec<ContactDataEntry<EventDate>>,
    #[serde(default)]
    pub companies: Vec<ContactDataEntry<Company>>,
}

impl ContactDataSet {
    /// Number of entries in one category.
    #[must_use]
    pub fn count(&self, category: ContactDataCategory) -> usize {
        match category {
            ContactDataCategory::PhoneNumber => self.phone_numbers.len(),
            ContactDataCategory::EmailAddress => self.email_addresses.len(),
            ContactDataCategory::PhysicalAddress => self.physical_addresses.len(),
            ContactDataCategory::Website => self.websites.len(),
            ContactDataCategory::Relationship => self.relationships.len(),
            ContactDataCategory::EventDate => self.event_dates.len(),
            ContactDataCategory::Company => self.companies.len(),
        }
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        ContactDataCategory::ALL
            .iter()
            .map(|category| self.count(*category))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops entries marked deleted; they must not be exported.
    pub fn retain_live(&mut self) {
        use privcontacts_types::ModelStatus::Deleted;

        self.phone_numbers.retain(|e| e.status != Deleted);
        self.email_addresses.retain(|e| e.status != Deleted);
        self.physical_addresses.retain(|e| e.status != Deleted);
        self.websites.retain(|e| e.status != Deleted);
        self.relationships.retain(|e| e.status != Deleted);
        self.event_dates.retain(|e| e.status != Deleted);
        self.companies.retain(|e| e.status != Deleted);
    }
}
