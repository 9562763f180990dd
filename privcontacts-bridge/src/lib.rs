//! Import/export orchestration for Private Contacts.
//!
//! Converts whole contacts between the internal [`ContactDataSet`] and the
//! two external representations:
//!
//! - the platform contact directory ([`DirectoryRecord`]): native labels,
//!   companies stored as pseudo-relationships
//! - the text-based interchange format ([`InterchangeRecord`]): type tokens,
//!   organizations, separate birthday and anniversary lists
//!
//! Import maps labels, drops unusable entries, deduplicates and renumbers;
//! export maps back, reusing the original label of every unedited entry.
//! Neither direction fails: problems are counted in an [`ImportReport`] or
//! [`ExportReport`]. Only configuration loading and the async
//! [`DirectorySource`] / [`DirectorySink`] / [`InterchangeSource`]
//! collaborators return [`BridgeError`].
//!
//! [`ContactDataSet`]: privcontacts_model::ContactDataSet

mod bridge;
mod config;
mod error;
mod export;
mod import;
mod record;
mod report;
mod source;

pub use bridge::ContactBridge;
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use export::ExportOutcome;
pub use import::ImportOutcome;
pub use record::{DirectoryEntry, DirectoryRecord, InterchangeEntry, InterchangeRecord, OrganizationEntry};
pub use report::{ExportReport, ImportReport};
pub use source::{DirectorySink, DirectorySource, InterchangeSource};
