//! External record → internal [`ContactDataSet`].
//!
//! Every category goes through the same steps: drop entries without a usable
//! value, map the external label, deduplicate, renumber and settle the main
//! flag. Companies are collected from pseudo-relationships first and from
//! organization fields after them.

use crate::{ContactBridge, DirectoryEntry, DirectoryRecord, ImportReport, InterchangeEntry, InterchangeRecord};
use privcontacts_mapping::{CompanyLabelCodec, LabelMapping};
use privcontacts_model::{
    Company, ContactDataEntry, ContactDataSet, ContactValue, EmailAddress, EventDate, PhoneNumber,
    PhysicalAddress, RelatedPerson, Website, dedupe, enforce_contiguous_sort_order, normalize_main_flag,
};
use privcontacts_types::{ContactDataCategory, ContactDataId, ContactDataType, ModelStatus, SourceLabel};
use tracing::{debug, info, warn};

/// A contact's imported data and what happened on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub data: ContactDataSet,
    pub report: ImportReport,
}

/// One external entry with its type already resolved.
struct RawEntry<'a> {
    id: ContactDataId,
    data_type: ContactDataType,
    value: Option<&'a str>,
    source_label: Option<SourceLabel>,
}

impl ContactBridge {
    /// Imports a contact read from the platform directory.
    ///
    /// Entries keep the directory's row numbers as ids and start out
    /// [`ModelStatus::Unchanged`], since they already exist there.
    /// Unlike [`Self::import_interchange`], whose entries start out
    /// [`ModelStatus::New`], nothing is written back unless it changes.
    #[must_use]
    pub fn import_directory(&self, record: &DirectoryRecord) -> ImportOutcome {
        let mut report = ImportReport::default();
        let status = ModelStatus::Unchanged;

        let (pseudo_companies, relations): (Vec<&DirectoryEntry>, Vec<&DirectoryEntry>) = record
            .relations
            .iter()
            .partition(|entry| entry.label.custom_text().is_some_and(|text| self.codec.matches(text)));

        let mut company_entries: Vec<RawEntry<'_>> = pseudo_companies
            .into_iter()
            .map(|entry| {
                let text = entry.label.custom_text().unwrap_or_default();
                RawEntry {
                    id: directory_id(entry),
                    data_type: self.decode_company_label(text, &mut report),
                    value: entry.value.as_deref(),
                    source_label: Some(SourceLabel::Directory(entry.label.clone())),
                }
            })
            .collect();

        if let Some(organization) = record.organization.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
            let mirrored = company_entries
                .iter()
                .any(|entry| entry.value.map(str::trim) == Some(organization));
            if mirrored {
                debug!("Organization field mirrors a pseudo-relationship company, not importing it twice");
            } else {
                company_entries.push(RawEntry {
                    id: ContactDataId::new(),
                    data_type: ContactDataType::Business,
                    value: Some(organization),
                    source_label: None,
                });
            }
        }

        let data = ContactDataSet {
            phone_numbers: self.collect(
                self.directory_entries(&record.phone_numbers, ContactDataCategory::PhoneNumber, &mut report),
                |raw| Some(PhoneNumber::new(raw)),
                status,
                &mut report,
            ),
            email_addresses: self.collect(
                self.directory_entries(&record.email_addresses, ContactDataCategory::EmailAddress, &mut report),
                |raw| Some(EmailAddress::new(raw)),
                status,
                &mut report,
            ),
            physical_addresses: self.collect(
                self.directory_entries(&record.physical_addresses, ContactDataCategory::PhysicalAddress, &mut report),
                |raw| Some(PhysicalAddress::new(raw)),
                status,
                &mut report,
            ),
            websites: self.collect(
                self.directory_entries(&record.websites, ContactDataCategory::Website, &mut report),
                |raw| Some(Website::new(raw)),
                status,
                &mut report,
            ),
            relationships: self.collect(
                self.directory_entries(relations, ContactDataCategory::Relationship, &mut report),
                |raw| Some(RelatedPerson::new(raw)),
                status,
                &mut report,
            ),
            event_dates: self.collect(
                self.directory_entries(&record.events, ContactDataCategory::EventDate, &mut report),
                EventDate::parse,
                status,
                &mut report,
            ),
            companies: self.collect(company_entries, |raw| Some(Company::new(raw)), status, &mut report),
        };

        finish_contact("directory", data, report)
    }

    /// Imports a contact read from the interchange format.
    ///
    /// The contact is new to the app, so entries get fresh internal ids and
    /// start out [`ModelStatus::New`].
    #[must_use]
    pub fn import_interchange(&self, record: &InterchangeRecord) -> ImportOutcome {
        let mut report = ImportReport::default();
        let status = ModelStatus::New;

        let (pseudo_companies, related): (Vec<&InterchangeEntry>, Vec<&InterchangeEntry>) = record
            .related
            .iter()
            .partition(|entry| self.company_token(entry).is_some());

        let mut company_entries: Vec<RawEntry<'_>> = pseudo_companies
            .into_iter()
            .map(|entry| {
                let token = self.company_token(entry).unwrap_or_default();
                RawEntry {
                    id: ContactDataId::new(),
                    data_type: self.decode_company_label(token, &mut report),
                    value: entry.value.as_deref(),
                    source_label: Some(SourceLabel::Interchange(token.to_string())),
                }
            })
            .collect();

        let organization_names: Vec<Option<String>> = record
            .organizations
            .iter()
            .map(|organization| {
                let levels: Vec<&str> = organization
                    .values
                    .iter()
                    .map(|level| level.trim())
                    .filter(|level| !level.is_empty())
                    .collect();
                (!levels.is_empty()).then(|| levels.join(self.config.organisation_separator.as_str()))
            })
            .collect();

        for (organization, name) in record.organizations.iter().zip(&organization_names) {
            let token = organization.type_token.clone().unwrap_or_default();
            if !self.interchange.recognizes(&token, ContactDataCategory::Company) {
                report.fallback_labels += 1;
            }
            company_entries.push(RawEntry {
                id: ContactDataId::new(),
                data_type: self.interchange.to_internal(&token, ContactDataCategory::Company),
                value: name.as_deref(),
                source_label: organization.type_token.clone().map(SourceLabel::Interchange),
            });
        }

        let mut events = self.fixed_type_entries(&record.birthdays, ContactDataType::Birthday);
        events.extend(self.fixed_type_entries(&record.anniversaries, ContactDataType::Anniversary));

        let data = ContactDataSet {
            phone_numbers: self.collect(
                self.interchange_entries(&record.telephones, ContactDataCategory::PhoneNumber, &mut report),
                |raw| Some(PhoneNumber::new(raw)),
                status,
                &mut report,
            ),
            email_addresses: self.collect(
                self.interchange_entries(&record.emails, ContactDataCategory::EmailAddress, &mut report),
                |raw| Some(EmailAddress::new(raw)),
                status,
                &mut report,
            ),
            physical_addresses: self.collect(
                self.interchange_entries(&record.addresses, ContactDataCategory::PhysicalAddress, &mut report),
                |raw| Some(PhysicalAddress::new(raw)),
                status,
                &mut report,
            ),
            websites: self.collect(
                self.interchange_entries(&record.urls, ContactDataCategory::Website, &mut report),
                |raw| Some(Website::new(raw)),
                status,
                &mut report,
            ),
            relationships: self.collect(
                self.interchange_entries(related, ContactDataCategory::Relationship, &mut report),
                |raw| Some(RelatedPerson::new(raw)),
                status,
                &mut report,
            ),
            event_dates: self.collect(events, EventDate::parse, status, &mut report),
            companies: self.collect(company_entries, |raw| Some(Company::new(raw)), status, &mut report),
        };

        finish_contact("interchange", data, report)
    }

    // ── Label resolution ─────────────────────────────────────────

    fn directory_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a DirectoryEntry>,
        category: ContactDataCategory,
        report: &mut ImportReport,
    ) -> Vec<RawEntry<'a>> {
        entries
            .into_iter()
            .map(|entry| {
                if !self.directory.recognizes(&entry.label, category) {
                    report.fallback_labels += 1;
                }
                RawEntry {
                    id: directory_id(entry),
                    data_type: self.directory.to_internal(&entry.label, category),
                    value: entry.value.as_deref(),
                    source_label: Some(SourceLabel::Directory(entry.label.clone())),
                }
            })
            .collect()
    }

    fn interchange_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a InterchangeEntry>,
        category: ContactDataCategory,
        report: &mut ImportReport,
    ) -> Vec<RawEntry<'a>> {
        entries
            .into_iter()
            .map(|entry| {
                let (data_type, token) = self.interchange.resolve_tokens(&entry.types, category);
                if token.as_ref().is_some_and(|t| !self.interchange.recognizes(t, category)) {
                    report.fallback_labels += 1;
                }
                RawEntry {
                    id: ContactDataId::new(),
                    data_type,
                    value: entry.value.as_deref(),
                    source_label: token.map(SourceLabel::Interchange),
                }
            })
            .collect()
    }

    fn fixed_type_entries<'a>(&self, entries: &'a [InterchangeEntry], data_type: ContactDataType) -> Vec<RawEntry<'a>> {
        entries
            .iter()
            .map(|entry| RawEntry {
                id: ContactDataId::new(),
                data_type: data_type.clone(),
                value: entry.value.as_deref(),
                source_label: None,
            })
            .collect()
    }

    /// First type token of a related entry that is a company label.
    fn company_token<'a>(&self, entry: &'a InterchangeEntry) -> Option<&'a str> {
        entry
            .types
            .iter()
            .map(String::as_str)
            .find(|token| self.codec.matches(token))
    }

    fn decode_company_label(&self, label: &str, report: &mut ImportReport) -> ContactDataType {
        match self.codec.try_decode(label) {
            Ok(data_type) => data_type,
            Err(err) => {
                warn!("Unreadable company label {label:?}: {err}, using {}", CompanyLabelCodec::FALLBACK);
                report.fallback_labels += 1;
                CompanyLabelCodec::FALLBACK
            }
        }
    }

    // ── Per-category pipeline ────────────────────────────────────

    fn collect<V: ContactValue>(
        &self,
        raw: Vec<RawEntry<'_>>,
        parse: impl Fn(&str) -> Option<V>,
        status: ModelStatus,
        report: &mut ImportReport,
    ) -> Vec<ContactDataEntry<V>> {
        let mut entries = Vec::with_capacity(raw.len());

        for (index, entry) in raw.into_iter().enumerate() {
            let Some(value) = entry.value.and_then(&parse).filter(|v| !v.is_empty()) else {
                warn!("Skipping {} entry #{index} ({}): no usable value", V::CATEGORY, entry.id);
                report.skipped_invalid += 1;
                continue;
            };

            let mut imported =
                ContactDataEntry::imported(entry.id, entries.len(), entry.data_type, value, entry.source_label);
            imported.status = status;
            entries.push(imported);
        }

        let before = entries.len();
        if self.config.deduplicate {
            entries = dedupe(entries);
        } else {
            enforce_contiguous_sort_order(&mut entries);
        }
        report.removed_duplicates += before - entries.len();

        normalize_main_flag(&mut entries, self.config.assign_main_entry);
        report.imported += entries.len();

        debug!("Imported {} {} entries ({} read)", entries.len(), V::CATEGORY, before);
        entries
    }
}

fn directory_id(entry: &DirectoryEntry) -> ContactDataId {
    if entry.id.is_none() {
        debug!("Directory entry without row number, using a placeholder id");
    }
    ContactDataId::external(entry.id)
}

fn finish_contact(source: &str, data: ContactDataSet, report: ImportReport) -> ImportOutcome {
    if report.dropped() > 0 {
        info!("Imported contact from {source}: {report}");
    } else {
        debug!("Imported contact from {source}: {report}");
    }
    ImportOutcome { data, report }
}
