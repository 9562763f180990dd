use privcontacts_model::{
    Company, ContactDataEntry, ContactDataSet, ContactValue, EmailAddress, EventDate, PhoneNumber,
    Website,
};
use privcontacts_types::{
    ContactDataCategory, ContactDataId, ContactDataType, DirectoryLabel, ModelStatus, NativeType,
    SourceLabel,
};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_entry_is_internal_and_new() {
    let entry = ContactDataEntry::new(0, ContactDataType::Mobile, PhoneNumber::new("123"));
    assert!(!entry.id.is_external());
    assert_eq!(entry.status, ModelStatus::New);
    assert!(entry.is_main);
    assert_eq!(entry.source_label, None);
}

#[test]
fn only_first_new_entry_is_main() {
    let entry = ContactDataEntry::new(3, ContactDataType::Mobile, PhoneNumber::new("123"));
    assert!(!entry.is_main);
}

#[test]
fn imported_entry_keeps_source_label() {
    let label = SourceLabel::Directory(DirectoryLabel::Native(NativeType::PhoneNumberMobile));
    let entry = ContactDataEntry::imported(
        ContactDataId::External(4),
        0,
        ContactDataType::Mobile,
        PhoneNumber::new("123"),
        Some(label.clone()),
    );
    assert_eq!(entry.source_label, Some(label));
    assert_eq!(entry.id.row_no(), Some(4));
    assert!(!entry.is_main);
}

#[test]
fn category_follows_value_type() {
    let entry = ContactDataEntry::new(0, ContactDataType::Main, Company::new("ACME"));
    assert_eq!(entry.category(), ContactDataCategory::Company);
    let entry = ContactDataEntry::new(0, ContactDataType::Main, Website::new("https://acme.test"));
    assert_eq!(entry.category(), ContactDataCategory::Website);
}

// ── Status transitions ───────────────────────────────────────────

#[test]
fn changing_unchanged_entry_marks_it_changed() {
    let mut entry = ContactDataEntry::new(0, ContactDataType::Other, EmailAddress::new("a@b.ch"));
    entry.status = ModelStatus::Unchanged;

    let entry = entry.change_type(ContactDataType::Business);

    assert_eq!(entry.status, ModelStatus::Changed);
    assert_eq!(entry.data_type, ContactDataType::Business);
}

#[test]
fn changing_new_entry_keeps_it_new() {
    let entry = ContactDataEntry::new(0, ContactDataType::Other, EmailAddress::new("a@b.ch"))
        .change_value(EmailAddress::new("c@d.ch"))
        .change_sort_order(2);

    assert_eq!(entry.status, ModelStatus::New);
    assert_eq!(entry.sort_order, 2);
    assert_eq!(entry.display_value(), "c@d.ch");
}

#[test]
fn deleted_entry_stays_deleted() {
    let entry = ContactDataEntry::new(0, ContactDataType::Other, EmailAddress::new("a@b.ch"))
        .delete()
        .change_value(EmailAddress::new("x@y.ch"));
    assert_eq!(entry.status, ModelStatus::Deleted);
}

// ── Values ───────────────────────────────────────────────────────

#[test]
fn text_values_are_trimmed() {
    assert_eq!(Company::new("  ACME ").as_str(), "ACME");
    assert!(Company::new("   ").is_empty());
}

#[test]
fn event_date_parses_full_and_yearless_dates() {
    let full = EventDate::parse("1990-07-14").unwrap();
    assert_eq!(full.year(), Some(1990));
    assert_eq!((full.month(), full.day()), (7, 14));
    assert_eq!(full.display_value(), "1990-07-14");

    let yearless = EventDate::parse(" --12-24 ").unwrap();
    assert_eq!(yearless.year(), None);
    assert_eq!(yearless.display_value(), "--12-24");
}

#[test]
fn event_date_rejects_garbage() {
    assert_eq!(EventDate::parse("yesterday"), None);
    assert_eq!(EventDate::parse("2023-02-30"), None);
    assert_eq!(EventDate::new(Some(2023), 13, 1), None);
}

#[test]
fn event_date_has_no_search_projection() {
    assert_eq!(EventDate::parse("2001-01-01").unwrap().search_value(), None);
}

// ── ContactDataSet ───────────────────────────────────────────────

#[test]
fn set_counts_per_category() {
    let mut set = ContactDataSet::default();
    assert!(set.is_empty());

    set.phone_numbers.push(ContactDataEntry::new(0, ContactDataType::Mobile, PhoneNumber::new("1")));
    set.companies.push(ContactDataEntry::new(0, ContactDataType::Main, Company::new("ACME")));
    set.companies.push(ContactDataEntry::new(1, ContactDataType::Other, Company::new("Initech")));

    assert_eq!(set.count(ContactDataCategory::PhoneNumber), 1);
    assert_eq!(set.count(ContactDataCategory::Company), 2);
    assert_eq!(set.count(ContactDataCategory::Website), 0);
    assert_eq!(set.len(), 3);
}

#[test]
fn retain_live_drops_deleted_entries() {
    let mut set = ContactDataSet::default();
    set.phone_numbers.push(ContactDataEntry::new(0, ContactDataType::Mobile, PhoneNumber::new("1")));
    set.phone_numbers
        .push(ContactDataEntry::new(1, ContactDataType::Mobile, PhoneNumber::new("2")).delete());

    set.retain_live();

    assert_eq!(set.phone_numbers.len(), 1);
    assert_eq!(set.phone_numbers[0].display_value(), "1");
}

#[test]
fn set_survives_json_roundtrip() {
    let mut set = ContactDataSet::default();
    set.event_dates.push(ContactDataEntry::new(
        0,
        ContactDataType::Birthday,
        EventDate::parse("--03-01").unwrap(),
    ));
    set.email_addresses.push(ContactDataEntry::imported(
        ContactDataId::external(None),
        0,
        ContactDataType::custom("Club"),
        EmailAddress::new("club@example.org"),
        Some(SourceLabel::Interchange("club".into())),
    ));

    let json = serde_json::to_string(&set).unwrap();
    let back: ContactDataSet = serde_json::from_str(&json).unwrap();

    assert_eq!(back, set);
}
