use attack_schema::enums::StixType;
use attack_schema::objects::collection::COLLECTION;
use attack_schema::{IssueCode, StixIdentifier};
use proptest::prelude::*;
use serde_json::json;

use crate::common::*;

/// Strategy for hyphenated UUIDs in lower or upper case.
fn arb_uuid() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        "[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}",
    ]
}

fn arb_other_type() -> impl Strategy<Value = StixType> {
    prop::sample::select(
        StixType::ALL
            .iter()
            .copied()
            .filter(|t| *t != StixType::Collection)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_uuid_makes_a_valid_collection_id(uuid in arb_uuid()) {
        let id = format!("x-mitre-collection--{}", uuid);
        let candidate = with(collection(), "id", json!(id));
        prop_assert!(COLLECTION.parse(&candidate).is_ok(), "{} rejected", id);
    }

    #[test]
    fn identifier_round_trips_through_display(stix_type in arb_other_type(), uuid in arb_uuid()) {
        let raw = format!("{}--{}", stix_type, uuid);
        let id = StixIdentifier::parse(&raw).unwrap();
        prop_assert_eq!(id.to_string(), raw);
        prop_assert_eq!(id.object_type(), stix_type.as_str());
    }

    #[test]
    fn other_type_prefix_is_rejected(stix_type in arb_other_type(), uuid in arb_uuid()) {
        let id = format!("{}--{}", stix_type, uuid);
        let candidate = with(collection(), "id", json!(id));
        let err = COLLECTION.parse(&candidate).unwrap_err();
        prop_assert_eq!(err.issues().len(), 1);
        prop_assert_eq!(err.issues()[0].code, IssueCode::InvalidString);
        prop_assert_eq!(err.issues()[0].path.to_string(), "id");
    }

    #[test]
    fn truncated_uuid_is_rejected(uuid in arb_uuid(), cut in 1usize..36) {
        let id = format!("x-mitre-collection--{}", &uuid[..36 - cut]);
        prop_assert!(StixIdentifier::parse(&id).is_none());
        let candidate = with(collection(), "id", json!(id));
        prop_assert!(COLLECTION.parse(&candidate).is_err());
    }

    #[test]
    fn arbitrary_strings_never_panic(raw in ".{0,80}") {
        let _ = StixIdentifier::parse(&raw);
        let candidate = with(collection(), "id", json!(raw));
        let _ = COLLECTION.safe_parse(&candidate);
    }
}
