use pretty_assertions::assert_eq;
use privcontacts_mapping::{DirectoryMapping, LabelMapping};
use privcontacts_types::{
    ContactDataCategory::{self, *},
    ContactDataType, DirectoryLabel, NativeType,
};

fn import(native: NativeType, category: ContactDataCategory) -> ContactDataType {
    DirectoryMapping.to_internal(&DirectoryLabel::Native(native), category)
}

fn export(data_type: &ContactDataType, category: ContactDataCategory) -> DirectoryLabel {
    DirectoryMapping.to_external(data_type, category, None)
}

// ── Import ───────────────────────────────────────────────────────

#[test]
fn phone_native_types() {
    assert_eq!(import(NativeType::PhoneNumberMobile, PhoneNumber), ContactDataType::Mobile);
    assert_eq!(import(NativeType::LocationHome, PhoneNumber), ContactDataType::Personal);
    assert_eq!(import(NativeType::LocationWork, PhoneNumber), ContactDataType::Business);
    assert_eq!(import(NativeType::PhoneNumberCompanyMain, PhoneNumber), ContactDataType::Business);
    assert_eq!(
        import(NativeType::PhoneNumberWorkMobile, PhoneNumber),
        ContactDataType::MobileBusiness
    );
}

#[test]
fn unmapped_native_types_import_as_other() {
    assert_eq!(import(NativeType::PhoneNumberFaxHome, PhoneNumber), ContactDataType::Other);
    assert_eq!(import(NativeType::PhoneNumberPager, PhoneNumber), ContactDataType::Other);
    assert_eq!(import(NativeType::WebsiteBlog, Website), ContactDataType::Other);
    assert_eq!(import(NativeType::RelationReferredBy, Relationship), ContactDataType::Other);
    assert_eq!(import(NativeType::DateBirthday, PhoneNumber), ContactDataType::Other);
}

#[test]
fn partner_variants_collapse() {
    for native in [
        NativeType::RelationPartner,
        NativeType::RelationDomesticPartner,
        NativeType::RelationSpouse,
    ] {
        assert_eq!(import(native, Relationship), ContactDataType::RelationshipPartner);
    }
}

#[test]
fn work_relations() {
    assert_eq!(import(NativeType::RelationManager, Relationship), ContactDataType::RelationshipWork);
    assert_eq!(import(NativeType::RelationAssistant, Relationship), ContactDataType::RelationshipWork);
}

#[test]
fn website_home_page_is_main() {
    assert_eq!(import(NativeType::WebsiteHomePage, Website), ContactDataType::Main);
}

#[test]
fn custom_label_is_kept_verbatim() {
    let label = DirectoryLabel::custom("Yacht Club");
    assert_eq!(
        DirectoryMapping.to_internal(&label, PhoneNumber),
        ContactDataType::custom("Yacht Club")
    );
}

#[test]
fn blank_custom_label_is_other() {
    let label = DirectoryLabel::custom("   ");
    assert_eq!(DirectoryMapping.to_internal(&label, EmailAddress), ContactDataType::Other);
}

// ── Export ───────────────────────────────────────────────────────

#[test]
fn export_uses_first_native_type_for_a_key() {
    assert_eq!(export(&ContactDataType::Business, PhoneNumber), DirectoryLabel::Native(NativeType::LocationWork));
    assert_eq!(export(&ContactDataType::Main, Website), DirectoryLabel::Native(NativeType::WebsiteHomePage));
    assert_eq!(
        export(&ContactDataType::RelationshipPartner, Relationship),
        DirectoryLabel::Native(NativeType::RelationPartner)
    );
    assert_eq!(
        export(&ContactDataType::RelationshipWork, Relationship),
        DirectoryLabel::Native(NativeType::RelationManager)
    );
}

#[test]
fn export_without_native_equivalent_uses_fallback_chain() {
    assert_eq!(export(&ContactDataType::Mobile, EmailAddress), DirectoryLabel::Native(NativeType::LocationHome));
    assert_eq!(
        export(&ContactDataType::MobileBusiness, PhysicalAddress),
        DirectoryLabel::Native(NativeType::LocationWork)
    );
    assert_eq!(
        export(&ContactDataType::RelationshipSibling, Relationship),
        DirectoryLabel::Native(NativeType::RelationBrother)
    );
    assert_eq!(export(&ContactDataType::Birthday, PhoneNumber), DirectoryLabel::Native(NativeType::Other));
}

#[test]
fn custom_type_exports_as_custom_label() {
    assert_eq!(
        export(&ContactDataType::custom("Boat"), PhoneNumber),
        DirectoryLabel::custom("Boat")
    );
    assert_eq!(export(&ContactDataType::custom(" "), PhoneNumber), DirectoryLabel::Native(NativeType::Other));
}

// ── No churn ─────────────────────────────────────────────────────

#[test]
fn original_label_kept_when_it_still_matches() {
    let original = DirectoryLabel::Native(NativeType::PhoneNumberCompanyMain);
    let label = DirectoryMapping.to_external(&ContactDataType::Business, PhoneNumber, Some(&original));
    assert_eq!(label, original);
}

#[test]
fn original_spouse_label_survives_export() {
    let original = DirectoryLabel::Native(NativeType::RelationSpouse);
    let label = DirectoryMapping.to_external(
        &ContactDataType::RelationshipPartner,
        Relationship,
        Some(&original),
    );
    assert_eq!(label, original);
}

#[test]
fn original_custom_label_survives_export() {
    let original = DirectoryLabel::custom("Yacht Club");
    let data_type = DirectoryMapping.to_internal(&original, PhoneNumber);
    let label = DirectoryMapping.to_external(&data_type, PhoneNumber, Some(&original));
    assert_eq!(label, original);
}

#[test]
fn edited_type_ignores_original_label() {
    let original = DirectoryLabel::Native(NativeType::PhoneNumberFaxHome);
    let label = DirectoryMapping.to_external(&ContactDataType::Mobile, PhoneNumber, Some(&original));
    assert_eq!(label, DirectoryLabel::Native(NativeType::PhoneNumberMobile));
}

#[test]
fn unmapped_original_is_kept_for_other() {
    let original = DirectoryLabel::Native(NativeType::PhoneNumberFaxHome);
    let label = DirectoryMapping.to_external(&ContactDataType::Other, PhoneNumber, Some(&original));
    assert_eq!(label, original);
}

// ── Tables ───────────────────────────────────────────────────────

#[test]
fn every_table_exports_other() {
    for category in ContactDataCategory::ALL {
        assert_eq!(
            DirectoryMapping::table(category).label_of(privcontacts_types::TypeKey::Other),
            Some(NativeType::Other),
            "{category}"
        );
    }
}
