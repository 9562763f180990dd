use pretty_assertions::assert_eq;
use privcontacts_types::{ContactDataCategory, ContactDataType, TypeKey};
use std::collections::HashSet;

// ── TypeKey ──────────────────────────────────────────────────────

#[test]
fn key_names_are_screaming_snake() {
    assert_eq!(TypeKey::MobileBusiness.as_str(), "MOBILE_BUSINESS");
    assert_eq!(TypeKey::RelationshipWork.as_str(), "RELATIONSHIP_WORK");
    assert_eq!(TypeKey::Custom.to_string(), "CUSTOM");
}

#[test]
fn key_parse_ignores_case() {
    assert_eq!(TypeKey::parse("business"), Some(TypeKey::Business));
    assert_eq!(TypeKey::parse("Relationship_Friend"), Some(TypeKey::RelationshipFriend));
    assert_eq!(TypeKey::parse("yacht"), None);
    assert_eq!(TypeKey::parse(""), None);
}

#[test]
fn key_from_str_reports_unknown() {
    let err = "nope".parse::<TypeKey>().unwrap_err();
    assert_eq!(err.to_string(), "unknown type key: nope");
}

#[test]
fn key_names_are_unique() {
    let names: HashSet<_> = TypeKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names.len(), TypeKey::ALL.len());
}

#[test]
fn key_serializes_as_name() {
    let json = serde_json::to_string(&TypeKey::MobileBusiness).unwrap();
    assert_eq!(json, "\"MOBILE_BUSINESS\"");
}

// ── ContactDataType ──────────────────────────────────────────────

#[test]
fn priorities_follow_specificity() {
    assert!(ContactDataType::Mobile.priority() < ContactDataType::Personal.priority());
    assert!(ContactDataType::Personal.priority() < ContactDataType::Business.priority());
    assert!(ContactDataType::custom("x").priority() < ContactDataType::Main.priority());
    assert!(ContactDataType::RelationshipBrother.priority() < ContactDataType::RelationshipSibling.priority());
    for t in ContactDataType::standard_types() {
        if t != ContactDataType::Other {
            assert!(t.priority() < ContactDataType::Other.priority(), "{t} should beat Other");
        }
    }
}

#[test]
fn custom_equality_ignores_case_and_whitespace() {
    assert_eq!(ContactDataType::custom("Yacht Club"), ContactDataType::custom("  yacht club "));
    assert_ne!(ContactDataType::custom("Yacht Club"), ContactDataType::custom("Golf Club"));
    assert_ne!(ContactDataType::custom("Other"), ContactDataType::Other);
}

#[test]
fn custom_hash_matches_equality() {
    let mut set = HashSet::new();
    set.insert(ContactDataType::custom("Gym"));
    set.insert(ContactDataType::custom(" GYM"));
    set.insert(ContactDataType::Personal);
    assert_eq!(set.len(), 2);
}

#[test]
fn from_key_rebuilds_custom_text() {
    assert_eq!(
        ContactDataType::from_key(TypeKey::Custom, Some("Boat")),
        ContactDataType::custom("Boat")
    );
    assert_eq!(ContactDataType::from_key(TypeKey::Custom, None), ContactDataType::custom(""));
    assert_eq!(ContactDataType::from_key(TypeKey::Main, Some("ignored")), ContactDataType::Main);
}

#[test]
fn relationship_kinds() {
    assert!(ContactDataType::RelationshipWork.is_relationship());
    assert!(!ContactDataType::Business.is_relationship());
    assert!(!ContactDataType::custom("Boss").is_relationship());
}

#[test]
fn titles() {
    assert_eq!(ContactDataType::MobileBusiness.title(), "Business");
    assert_eq!(ContactDataType::custom("Boat").title(), "Boat");
    assert_eq!(ContactDataType::custom(" ").title(), "(no label)");
}

#[test]
fn serde_shape_is_stable() {
    let json = serde_json::to_string(&ContactDataType::Personal).unwrap();
    assert_eq!(json, r#"{"key":"PERSONAL"}"#);

    let json = serde_json::to_string(&ContactDataType::custom("Boat")).unwrap();
    assert_eq!(json, r#"{"key":"CUSTOM","custom_value":"Boat"}"#);

    let back: ContactDataType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ContactDataType::custom("Boat"));
}

// ── ContactDataCategory ──────────────────────────────────────────

#[test]
fn default_type_is_allowed() {
    for category in ContactDataCategory::ALL {
        assert!(
            category.allowed_types().contains(&category.default_type()),
            "default type of {category} must be allowed"
        );
    }
}

#[test]
fn every_category_allows_custom_labels() {
    for category in ContactDataCategory::ALL {
        assert!(category.allowed_types().iter().any(ContactDataType::is_custom));
    }
}
