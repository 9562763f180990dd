//! Shared test helpers for bridge tests.

#![allow(dead_code)]

use async_trait::async_trait;
use privcontacts_bridge::{
    BridgeError, BridgeResult, DirectoryEntry, DirectoryRecord, DirectorySink, DirectorySource, InterchangeEntry,
    InterchangeRecord, InterchangeSource, OrganizationEntry,
};
use privcontacts_types::{DirectoryLabel, NativeType};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Routes log output through the test harness. `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

pub fn native(native: NativeType, value: &str) -> DirectoryEntry {
    DirectoryEntry::new(native, value)
}

pub fn custom(label: &str, value: &str) -> DirectoryEntry {
    DirectoryEntry::new(DirectoryLabel::custom(label), value)
}

/// A directory contact touching every category.
pub fn sample_directory_record() -> DirectoryRecord {
    DirectoryRecord {
        phone_numbers: vec![
            native(NativeType::PhoneNumberMobile, "+41 79 123 45 67").with_id(11),
            native(NativeType::LocationWork, "044 555 00 11").with_id(12),
        ],
        email_addresses: vec![native(NativeType::LocationHome, "jane@example.org").with_id(21)],
        physical_addresses: vec![native(NativeType::LocationWork, "Main Street 1, 8000 Zurich").with_id(31)],
        websites: vec![native(NativeType::WebsiteHomePage, "https://jane.example.org").with_id(41)],
        relations: vec![
            native(NativeType::RelationSister, "Ann").with_id(51),
            custom("Organisation:BUSINESS", "ACME").with_id(52),
        ],
        events: vec![native(NativeType::DateBirthday, "1990-07-14").with_id(61)],
        organization: Some("ACME".to_string()),
    }
}

/// An interchange contact touching every category.
pub fn sample_interchange_record() -> InterchangeRecord {
    InterchangeRecord {
        telephones: vec![
            InterchangeEntry::typed("cell", "+41 79 123 45 67"),
            InterchangeEntry::typed("work", "044 555 00 11").with_type("voice"),
        ],
        emails: vec![InterchangeEntry::typed("internet", "jane@example.org").with_type("home")],
        addresses: vec![InterchangeEntry::typed("work", "Main Street 1, 8000 Zurich")],
        urls: vec![InterchangeEntry::new("https://jane.example.org")],
        related: vec![
            InterchangeEntry::typed("sister", "Ann"),
            InterchangeEntry::typed("Organisation:MAIN", "ACME"),
        ],
        organizations: vec![OrganizationEntry::new(["Initech", "Research", "Team B"])],
        birthdays: vec![InterchangeEntry::new("--07-14")],
        anniversaries: vec![InterchangeEntry::new("2015-05-30")],
    }
}

// ── Fake collaborators ───────────────────────────────────────────

/// In-memory directory serving and collecting records by contact number.
#[derive(Default)]
pub struct MemoryDirectory {
    pub contacts: Mutex<HashMap<i64, DirectoryRecord>>,
}

impl MemoryDirectory {
    pub fn with_contact(contact_no: i64, record: DirectoryRecord) -> Self {
        let directory = Self::default();
        directory.contacts.lock().unwrap().insert(contact_no, record);
        directory
    }

    pub fn get(&self, contact_no: i64) -> Option<DirectoryRecord> {
        self.contacts.lock().unwrap().get(&contact_no).cloned()
    }
}

#[async_trait]
impl DirectorySource for MemoryDirectory {
    async fn load_contact(&self, contact_no: i64) -> BridgeResult<DirectoryRecord> {
        self.get(contact_no)
            .ok_or_else(|| BridgeError::Source(format!("no contact {contact_no}")))
    }
}

#[async_trait]
impl DirectorySink for MemoryDirectory {
    async fn store_contact(&self, contact_no: i64, record: DirectoryRecord) -> BridgeResult<()> {
        self.contacts.lock().unwrap().insert(contact_no, record);
        Ok(())
    }
}

/// Directory that refuses every write.
pub struct ReadOnlyDirectory;

#[async_trait]
impl DirectorySink for ReadOnlyDirectory {
    async fn store_contact(&self, contact_no: i64, _record: DirectoryRecord) -> BridgeResult<()> {
        Err(BridgeError::Sink(format!("contact {contact_no} is read-only")))
    }
}

/// Interchange document that is already parsed.
pub struct ParsedDocument(pub Vec<InterchangeRecord>);

#[async_trait]
impl InterchangeSource for ParsedDocument {
    async fn read_contacts(&self) -> BridgeResult<Vec<InterchangeRecord>> {
        Ok(self.0.clone())
    }
}

/// Interchange document that cannot be read.
pub struct UnreadableDocument;

#[async_trait]
impl InterchangeSource for UnreadableDocument {
    async fn read_contacts(&self) -> BridgeResult<Vec<InterchangeRecord>> {
        Err(BridgeError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "contacts.vcf")))
    }
}
