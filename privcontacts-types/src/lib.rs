//! Core type definitions for Private Contacts.
//!
//! This crate defines the fundamental types shared by the model, the
//! mapping tables and the import/export bridge:
//! - [`ContactDataType`] and its stable [`TypeKey`] (the field-type taxonomy)
//! - [`ContactDataCategory`] (phone numbers, e-mail addresses, ...)
//! - [`ContactDataId`] for entries owned by the app or by the platform directory
//! - [`ModelStatus`], the lifecycle of a single entry
//! - [`DirectoryLabel`] / [`SourceLabel`], the raw external label vocabularies
//!
//! The translation between taxonomy and external labels lives in
//! `privcontacts-mapping`.

mod category;
mod data_type;
mod ids;
mod label;
mod status;

pub use category::ContactDataCategory;
pub use data_type::{ContactDataType, TypeKey};
pub use ids::ContactDataId;
pub use label::{DirectoryLabel, NativeType, SourceLabel};
pub use status::ModelStatus;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown type key: {0}")]
    UnknownTypeKey(String),

    #[error("invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: ModelStatus, to: ModelStatus },

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
