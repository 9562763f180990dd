use crate::ContactValue;
use privcontacts_types::{ContactDataCategory, ContactDataId, ContactDataType, ModelStatus, SourceLabel};
use serde::{Deserialize, Serialize};

/// A single typed value of a contact, e.g. one phone number.
///
/// Within one contact and one category, `sort_order` is contiguous from 0
/// and at most one entry is flagged main.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDataEntry<V> {
    pub id: ContactDataId,
    /// Ascending, 0 comes first.
    pub sort_order: usize,
    pub data_type: ContactDataType,
    pub value: V,
    pub is_main: bool,
    pub status: ModelStatus,
    /// Label the entry was imported with, reused on export while the type is unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<SourceLabel>,
}

impl<V: ContactValue> ContactDataEntry<V> {
    /// Creates a new entry owned by the app. The first entry of a category is main.
    pub fn new(sort_order: usize, data_type: ContactDataType, value: V) -> Self {
        Self {
            id: ContactDataId::new(),
            sort_order,
            data_type,
            value,
            is_main: sort_order == 0,
            status: ModelStatus::New,
            source_label: None,
        }
    }

    /// Creates an entry read from an external source.
    pub fn imported(
        id: ContactDataId,
        sort_order: usize,
        data_type: ContactDataType,
        value: V,
        source_label: Option<SourceLabel>,
    ) -> Self {
        Self {
            id,
            sort_order,
            data_type,
            value,
            is_main: false,
            status: ModelStatus::New,
            source_label,
        }
    }

    #[must_use]
    pub fn category(&self) -> ContactDataCategory {
        V::CATEGORY
    }

    #[must_use]
    pub fn display_value(&self) -> String {
        self.value.display_value()
    }

    #[must_use]
    pub fn search_value(&self) -> Option<String> {
        self.value.search_value()
    }

    #[must_use]
    pub fn priority(&self) -> u32 {
        self.data_type.priority()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    pub fn change_value(mut self, value: V) -> Self {
        self.value = value;
        self.status = self.status.try_change_to(ModelStatus::Changed);
        self
    }

    #[must_use]
    pub fn change_type(mut self, data_type: ContactDataType) -> Self {
        self.data_type = data_type;
        self.status = self.status.try_change_to(ModelStatus::Changed);
        self
    }

    #[must_use]
    pub fn change_sort_order(mut self, sort_order: usize) -> Self {
        self.sort_order = sort_order;
        self.status = self.status.try_change_to(ModelStatus::Changed);
        self
    }

    #[must_use]
    pub fn delete(mut self) -> Self {
        self.status = self.status.try_change_to(ModelStatus::Deleted);
        self
    }

    /// Switches to a directory id once the contact is written to the directory.
    #[must_use]
    pub fn with_id(mut self, id: ContactDataId) -> Self {
        self.id = id;
        self
    }
}
