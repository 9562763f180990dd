//! Property-based tests for the mapping tables and the company codec.
//!
//! - Round-trip: a type with an external equivalent survives export + import
//! - Idempotence: export → import settles after at most one trip
//! - Custom types: export → import gives back the same custom type
//! - Totality: arbitrary labels and tokens always resolve
//! - Codec: decode(encode(t)) == t, and encoded labels always match

use privcontacts_mapping::{CompanyLabelCodec, DirectoryMapping, InterchangeMapping, LabelMapping};
use privcontacts_types::{ContactDataCategory, ContactDataType, DirectoryLabel, TypeKey};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn category_strategy() -> impl Strategy<Value = ContactDataCategory> {
    prop::sample::select(ContactDataCategory::ALL.to_vec())
}

fn standard_type_strategy() -> impl Strategy<Value = ContactDataType> {
    prop::sample::select(ContactDataType::standard_types())
}

/// Custom labels, biased towards ones that spell a known token.
fn custom_type_strategy() -> impl Strategy<Value = ContactDataType> {
    prop_oneof![
        prop::sample::select(vec![
            "Home", "work", "CELL", "voice", "Internet", "pref", "Spouse", "kin", "co-worker", "Other", "x-Home",
            "X-", "Organisation:MAIN",
        ])
        .prop_map(ContactDataType::custom),
        "[A-Za-z][A-Za-z :-]{0,11}".prop_map(ContactDataType::Custom),
    ]
}

fn data_type_strategy() -> impl Strategy<Value = ContactDataType> {
    prop_oneof![
        4 => standard_type_strategy(),
        1 => "[A-Za-z :]{0,12}".prop_map(ContactDataType::Custom),
    ]
}

proptest! {
    #[test]
    fn directory_round_trip_for_native_types(
        data_type in standard_type_strategy(),
        category in category_strategy(),
    ) {
        let table = DirectoryMapping::table(category);
        prop_assume!(table.label_of(data_type.key()).is_some());

        let label = DirectoryMapping.to_external(&data_type, category, None);
        prop_assert_eq!(DirectoryMapping.to_internal(&label, category), data_type);
    }

    #[test]
    fn directory_export_is_idempotent(
        data_type in data_type_strategy(),
        category in category_strategy(),
    ) {
        let first = DirectoryMapping.to_external(&data_type, category, None);
        let settled = DirectoryMapping.to_internal(&first, category);
        let second = DirectoryMapping.to_external(&settled, category, None);
        prop_assert_eq!(DirectoryMapping.to_internal(&second, category), settled.clone());
        prop_assert_eq!(second, first);
    }

    #[test]
    fn interchange_round_trip_is_lossless_for_standard_types(
        data_type in standard_type_strategy(),
        category in category_strategy(),
    ) {
        let token = InterchangeMapping.to_external(&data_type, category, None);
        prop_assert_eq!(InterchangeMapping.to_internal(&token, category), data_type);
    }

    #[test]
    fn interchange_export_is_idempotent(
        data_type in data_type_strategy(),
        category in category_strategy(),
    ) {
        let first = InterchangeMapping.to_external(&data_type, category, None);
        let settled = InterchangeMapping.to_internal(&first, category);
        let second = InterchangeMapping.to_external(&settled, category, None);
        prop_assert_eq!(InterchangeMapping.to_internal(&second, category), settled);
    }

    #[test]
    fn interchange_keeps_custom_types(
        data_type in custom_type_strategy(),
        category in category_strategy(),
    ) {
        let token = InterchangeMapping.to_external(&data_type, category, None);
        prop_assert_eq!(InterchangeMapping.to_internal(&token, category), data_type);
    }

    #[test]
    fn any_custom_directory_label_resolves(text in ".{0,20}", category in category_strategy()) {
        let data_type = DirectoryMapping.to_internal(&DirectoryLabel::Custom(text.clone()), category);
        if text.trim().is_empty() {
            prop_assert_eq!(data_type, ContactDataType::Other);
        } else {
            prop_assert_eq!(data_type.key(), TypeKey::Custom);
        }
    }

    #[test]
    fn any_token_resolves_to_a_type(token in ".{0,20}", category in category_strategy()) {
        let data_type = InterchangeMapping.to_internal(&token, category);
        let back = InterchangeMapping.to_external(&data_type, category, Some(&token));
        prop_assert_eq!(back, token);
    }

    #[test]
    fn codec_round_trip(data_type in data_type_strategy()) {
        let codec = CompanyLabelCodec;
        let label = codec.encode(&data_type);
        prop_assert!(codec.matches(&label));
        prop_assert_eq!(codec.decode(&label), data_type);
    }

    #[test]
    fn codec_decode_never_panics(label in ".{0,40}") {
        let _ = CompanyLabelCodec.decode(&label);
    }
}
