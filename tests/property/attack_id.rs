use attack_schema::objects::data_source::DATA_SOURCE;
use attack_schema::IssueCode;
use proptest::prelude::*;
use serde_json::json;

use crate::common::*;

fn with_attack_id(id: &str) -> serde_json::Value {
    let mut candidate = data_source();
    candidate["external_references"][0]["external_id"] = json!(id);
    candidate
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn four_digits_are_accepted(digits in "[0-9]{4}") {
        let candidate = with_attack_id(&format!("DS{}", digits));
        prop_assert!(DATA_SOURCE.parse(&candidate).is_ok());
    }

    #[test]
    fn other_digit_counts_are_rejected(digits in "[0-9]{0,3}|[0-9]{5,8}") {
        let candidate = with_attack_id(&format!("DS{}", digits));
        let err = DATA_SOURCE.parse(&candidate).unwrap_err();
        prop_assert_eq!(err.issues().len(), 1);
        prop_assert_eq!(err.issues()[0].code, IssueCode::Custom);
        prop_assert_eq!(
            err.issues()[0].message.as_str(),
            "The first external_reference must match the ATT&CK ID format DS####."
        );
    }

    #[test]
    fn other_prefixes_are_rejected(prefix in "[A-Z]{1,3}", digits in "[0-9]{4}") {
        prop_assume!(prefix != "DS");
        let candidate = with_attack_id(&format!("{}{}", prefix, digits));
        let err = DATA_SOURCE.parse(&candidate).unwrap_err();
        prop_assert!(err.mentions("DS####"));
    }

    #[test]
    fn attack_id_issue_points_at_the_attack_entry(leading in 0usize..4) {
        let mut references: Vec<serde_json::Value> = (0..leading)
            .map(|i| json!({ "source_name": format!("source-{}", i) }))
            .collect();
        references.push(json!({ "source_name": "mitre-attack", "external_id": "DS1" }));
        let candidate = with(data_source(), "external_references", json!(references));
        let err = DATA_SOURCE.parse(&candidate).unwrap_err();
        prop_assert_eq!(
            err.issues()[0].path.to_string(),
            format!("external_references[{}].external_id", leading)
        );
    }
}
