//! Type mapping between the internal taxonomy and external label vocabularies.
//!
//! - [`DirectoryMapping`]: native labels of the platform contact directory
//! - [`InterchangeMapping`]: type tokens of the text-based interchange format
//! - [`CompanyLabelCodec`]: carries the internal-only company field through
//!   the directory's free-text relationship label
//!
//! Both mappings are total: every external label resolves to some
//! [`ContactDataType`], unknown ones to `Other` or `Custom`. Each category has
//! one ordered table queried by both directions; see [`LabelTable`].

mod codec;
mod directory;
mod interchange;
mod table;

pub use codec::{CompanyLabelCodec, DecodeError, ORGANISATION_MARKER};
pub use directory::DirectoryMapping;
pub use interchange::InterchangeMapping;
pub use table::{LabelTable, fallback_key};

use privcontacts_types::{ContactDataCategory, ContactDataType};

/// Bidirectional translation between [`ContactDataType`] and one external
/// label vocabulary.
///
/// Implementors provide the two raw directions; [`LabelMapping::to_external`]
/// adds the rule that an unedited value keeps the label it arrived with.
pub trait LabelMapping {
    /// External label representation.
    type Label: Clone + PartialEq;

    /// Resolves an external label. Never fails.
    fn to_internal(&self, label: &Self::Label, category: ContactDataCategory) -> ContactDataType;

    /// Whether `label` has a meaning of its own in `category`, as opposed to
    /// resolving to a fallback.
    fn recognizes(&self, label: &Self::Label, category: ContactDataCategory) -> bool;

    /// Forward mapping without regard to the original label.
    fn to_external_fresh(&self, data_type: &ContactDataType, category: ContactDataCategory) -> Self::Label;

    /// Maps a type back to an external label.
    ///
    /// If `original` still resolves to `data_type`, it is returned unchanged,
    /// so values that were not edited do not churn.
    fn to_external(
        &self,
        data_type: &ContactDataType,
        category: ContactDataCategory,
        original: Option<&Self::Label>,
    ) -> Self::Label {
        match original {
            Some(original) if self.to_internal(original, category) == *data_type => original.clone(),
            _ => self.to_external_fresh(data_type, category),
        }
    }
}
