//! Contact-data model for Private Contacts.
//!
//! Defines the types every import and export path works on:
//! - [`ContactDataEntry`]: one typed value of one category, generic over the value
//! - [`ContactValue`]: display form and optional search projection of a value
//! - the per-category value types ([`PhoneNumber`], [`EmailAddress`], ...)
//! - [`dedupe`]: the two-pass, priority-based duplicate removal run after import
//! - [`ContactDataSet`]: all entries of one contact, grouped by category
//!
//! Everything here is pure and synchronous.

mod contact_data;
mod dedup;
mod entry;
mod value;

pub use contact_data::ContactDataSet;
pub use dedup::{dedupe, enforce_contiguous_sort_order, normalize_main_flag};
pub use entry::ContactDataEntry;
pub use value::{
    Company, ContactValue, EmailAddress, EventDate, PhoneNumber, PhysicalAddress, RelatedPerson,
    Website,
};
