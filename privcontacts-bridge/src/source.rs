//! Async collaborators that deliver and accept raw records.
//!
//! Reading the platform directory or an interchange file is I/O owned by the
//! caller. The bridge awaits the collaborator for a complete record, then
//! runs the synchronous core on it.

use crate::{
    BridgeResult, ContactBridge, DirectoryRecord, ExportReport, ImportOutcome, InterchangeRecord,
};
use async_trait::async_trait;
use privcontacts_model::ContactDataSet;
use tracing::{debug, info};

/// Reads contacts from the platform directory.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Loads all contact data of one directory contact.
    async fn load_contact(&self, contact_no: i64) -> BridgeResult<DirectoryRecord>;
}

/// Writes contacts back to the platform directory.
#[async_trait]
pub trait DirectorySink: Send + Sync {
    /// Replaces the contact data of one directory contact.
    async fn store_contact(&self, contact_no: i64, record: DirectoryRecord) -> BridgeResult<()>;
}

/// Reads all contacts of one interchange document.
#[async_trait]
pub trait InterchangeSource: Send + Sync {
    async fn read_contacts(&self) -> BridgeResult<Vec<InterchangeRecord>>;
}

impl ContactBridge {
    /// Loads one contact from the directory and imports it.
    pub async fn import_from_directory_source<S>(&self, source: &S, contact_no: i64) -> BridgeResult<ImportOutcome>
    where
        S: DirectorySource + ?Sized,
    {
        let record = source.load_contact(contact_no).await?;
        debug!("Loaded directory contact {contact_no} with {} entries", record.entry_count());
        Ok(self.import_directory(&record))
    }

    /// Reads every contact of an interchange document and imports them in
    /// document order.
    pub async fn import_from_interchange_source<S>(&self, source: &S) -> BridgeResult<Vec<ImportOutcome>>
    where
        S: InterchangeSource + ?Sized,
    {
        let records = source.read_contacts().await?;
        let outcomes: Vec<ImportOutcome> = records.iter().map(|record| self.import_interchange(record)).collect();

        let unclean = outcomes.iter().filter(|outcome| !outcome.report.is_clean()).count();
        info!("Imported {} interchange contacts, {unclean} with dropped or relabelled entries", outcomes.len());
        Ok(outcomes)
    }

    /// Exports one contact and hands it to the directory.
    pub async fn export_to_directory_sink<S>(
        &self,
        sink: &S,
        contact_no: i64,
        data: &ContactDataSet,
    ) -> BridgeResult<ExportReport>
    where
        S: DirectorySink + ?Sized,
    {
        let outcome = self.export_directory(data);
        sink.store_contact(contact_no, outcome.record).await?;
        Ok(outcome.report)
    }
}
