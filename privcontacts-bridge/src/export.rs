//! Internal [`ContactDataSet`] → external record.
//!
//! Deleted entries are left out. Each remaining entry keeps the label it was
//! imported with unless its type was changed since. Companies are appended
//! to the relationship slot under their pseudo-relationship label.

use crate::{
    ContactBridge, DirectoryEntry, DirectoryRecord, ExportReport, InterchangeEntry, InterchangeRecord,
};
use privcontacts_mapping::LabelMapping;
use privcontacts_model::{Company, ContactDataEntry, ContactDataSet, ContactValue};
use privcontacts_types::{ContactDataType, DirectoryLabel, ModelStatus, SourceLabel};
use tracing::{debug, info};

/// An exported record and what was left behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOutcome<R> {
    pub record: R,
    pub report: ExportReport,
}

impl ContactBridge {
    /// Exports a contact to the platform directory.
    ///
    /// The directory's organization field is set to the main company: the
    /// first one typed `Main`, else the one flagged main, else the first.
    #[must_use]
    pub fn export_directory(&self, data: &ContactDataSet) -> ExportOutcome<DirectoryRecord> {
        let mut report = ExportReport::default();

        let mut relations = self.export_directory_entries(&data.relationships, &mut report);
        let companies = live_sorted(&data.companies);
        for entry in &companies {
            let Some(value) = exportable(*entry, &mut report) else {
                continue;
            };
            let label = self.company_directory_label(entry);
            relations.push(DirectoryEntry {
                label,
                value: Some(value),
                id: entry.id.row_no(),
            });
            report.exported += 1;
        }

        let organization = companies
            .iter()
            .find(|entry| entry.data_type == ContactDataType::Main)
            .or_else(|| companies.iter().find(|entry| entry.is_main))
            .or_else(|| companies.first())
            .map(|entry| entry.value.as_str().to_string())
            .filter(|value| !value.is_empty());

        let record = DirectoryRecord {
            phone_numbers: self.export_directory_entries(&data.phone_numbers, &mut report),
            email_addresses: self.export_directory_entries(&data.email_addresses, &mut report),
            physical_addresses: self.export_directory_entries(&data.physical_addresses, &mut report),
            websites: self.export_directory_entries(&data.websites, &mut report),
            relations,
            events: self.export_directory_entries(&data.event_dates, &mut report),
            organization,
        };

        finish_export("directory", record, report)
    }

    /// Exports a contact to the interchange format.
    ///
    /// Event dates are split into birthdays and anniversaries. Dates of any
    /// other type are written as anniversaries when `export_other_dates` is
    /// set and skipped otherwise.
    #[must_use]
    pub fn export_interchange(&self, data: &ContactDataSet) -> ExportOutcome<InterchangeRecord> {
        let mut report = ExportReport::default();

        let mut related = self.export_interchange_entries(&data.relationships, &mut report);
        for entry in live_sorted(&data.companies) {
            let Some(value) = exportable(entry, &mut report) else {
                continue;
            };
            let token = self.company_interchange_token(entry);
            related.push(InterchangeEntry::typed(token, value));
            report.exported += 1;
        }

        let mut birthdays = Vec::new();
        let mut anniversaries = Vec::new();
        for entry in live_sorted(&data.event_dates) {
            let target = match entry.data_type {
                ContactDataType::Birthday => &mut birthdays,
                ContactDataType::Anniversary => &mut anniversaries,
                _ if self.config.export_other_dates => &mut anniversaries,
                _ => {
                    debug!("Skipping {} event date: no interchange slot", entry.data_type);
                    report.skipped += 1;
                    continue;
                }
            };
            target.push(InterchangeEntry::new(entry.value.to_raw()));
            report.exported += 1;
        }

        let record = InterchangeRecord {
            telephones: self.export_interchange_entries(&data.phone_numbers, &mut report),
            emails: self.export_interchange_entries(&data.email_addresses, &mut report),
            addresses: self.export_interchange_entries(&data.physical_addresses, &mut report),
            urls: self.export_interchange_entries(&data.websites, &mut report),
            related,
            organizations: Vec::new(),
            birthdays,
            anniversaries,
        };

        finish_export("interchange", record, report)
    }

    fn export_directory_entries<V: ExportValue>(
        &self,
        entries: &[ContactDataEntry<V>],
        report: &mut ExportReport,
    ) -> Vec<DirectoryEntry> {
        let mut exported = Vec::with_capacity(entries.len());
        for entry in live_sorted(entries) {
            let Some(value) = exportable(entry, report) else {
                continue;
            };
            let original = entry.source_label.as_ref().and_then(SourceLabel::as_directory);
            exported.push(DirectoryEntry {
                label: self.directory.to_external(&entry.data_type, V::CATEGORY, original),
                value: Some(value),
                id: entry.id.row_no(),
            });
        }
        report.exported += exported.len();
        exported
    }

    fn export_interchange_entries<V: ExportValue>(
        &self,
        entries: &[ContactDataEntry<V>],
        report: &mut ExportReport,
    ) -> Vec<InterchangeEntry> {
        let mut exported = Vec::with_capacity(entries.len());
        for entry in live_sorted(entries) {
            let Some(value) = exportable(entry, report) else {
                continue;
            };
            let original = entry
                .source_label
                .as_ref()
                .and_then(SourceLabel::as_interchange)
                .map(str::to_string);
            let token = self.interchange.to_external(&entry.data_type, V::CATEGORY, original.as_ref());
            exported.push(InterchangeEntry::typed(token, value));
        }
        report.exported += exported.len();
        exported
    }

    fn company_directory_label(&self, entry: &ContactDataEntry<Company>) -> DirectoryLabel {
        let original = entry.source_label.as_ref().and_then(SourceLabel::as_directory);
        match original {
            Some(label)
                if label
                    .custom_text()
                    .is_some_and(|text| self.is_company_label_for(text, &entry.data_type)) =>
            {
                label.clone()
            }
            _ => DirectoryLabel::Custom(self.codec.encode(&entry.data_type)),
        }
    }

    fn company_interchange_token(&self, entry: &ContactDataEntry<Company>) -> String {
        match entry.source_label.as_ref().and_then(SourceLabel::as_interchange) {
            Some(token) if self.is_company_label_for(token, &entry.data_type) => token.to_string(),
            _ => self.codec.encode(&entry.data_type),
        }
    }

    fn is_company_label_for(&self, label: &str, data_type: &ContactDataType) -> bool {
        self.codec.try_decode(label).is_ok_and(|decoded| decoded == *data_type)
    }
}

/// Value as written to an external record.
trait ExportValue: ContactValue {
    fn export_value(&self) -> String {
        self.display_value()
    }
}

impl ExportValue for privcontacts_model::PhoneNumber {
    /// Numbers go out as entered, not in their display form.
    fn export_value(&self) -> String {
        self.raw().trim().to_string()
    }
}

impl ExportValue for privcontacts_model::EmailAddress {}
impl ExportValue for privcontacts_model::PhysicalAddress {}
impl ExportValue for privcontacts_model::Website {}
impl ExportValue for privcontacts_model::RelatedPerson {}
impl ExportValue for privcontacts_model::EventDate {}
impl ExportValue for Company {}

/// Live entries in sort order.
fn live_sorted<V>(entries: &[ContactDataEntry<V>]) -> Vec<&ContactDataEntry<V>> {
    let mut live: Vec<_> = entries
        .iter()
        .filter(|entry| entry.status != ModelStatus::Deleted)
        .collect();
    live.sort_by_key(|entry| entry.sort_order);
    live
}

/// The value to write, or `None` (counted as skipped) when it is empty.
fn exportable<V: ExportValue>(entry: &ContactDataEntry<V>, report: &mut ExportReport) -> Option<String> {
    let value = entry.value.export_value();
    if value.trim().is_empty() {
        debug!("Skipping empty {} entry {}", V::CATEGORY, entry.id);
        report.skipped += 1;
        return None;
    }
    Some(value)
}

fn finish_export<R>(target: &str, record: R, report: ExportReport) -> ExportOutcome<R> {
    if report.is_clean() {
        debug!("Exported contact to {target}: {report}");
    } else {
        info!("Exported contact to {target}: {report}");
    }
    ExportOutcome { record, report }
}
