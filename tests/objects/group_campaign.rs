use attack_schema::objects::campaign::CAMPAIGN;
use attack_schema::objects::group::GROUP;
use attack_schema::{IssueCode, validate};
use serde_json::json;

use super::common::*;

// ─── Groups ─────────────────────────────────────────────────────────────────

#[test]
fn group_aliases_are_optional() {
    assert!(GROUP.parse(&without(group(), "aliases")).is_ok());
}

#[test]
fn group_first_alias_must_match_name() {
    let candidate = with(group(), "aliases", json!(["Fancy Bear", "APT28"]));
    let err = GROUP.parse(&candidate).unwrap_err();
    let issue = only_issue(&err);
    assert_eq!(issue.path.to_string(), "aliases[0]");
    assert_eq!(issue.code, IssueCode::Custom);
    assert_eq!(
        issue.message,
        "The first alias must match the object's name ('APT28'), got 'Fancy Bear'."
    );
}

#[test]
fn group_attack_id_format() {
    let mut candidate = group();
    candidate["external_references"][0]["external_id"] = json!("G07");
    let err = GROUP.parse(&candidate).unwrap_err();
    assert!(err.mentions("G####"));
}

#[test]
fn group_refinements_all_report() {
    let mut candidate = with(group(), "aliases", json!(["Sofacy"]));
    candidate["external_references"][0]["external_id"] = json!("G07");
    let err = GROUP.parse(&candidate).unwrap_err();
    assert_eq!(
        paths(&err),
        vec!["external_references[0].external_id", "aliases[0]"],
        "refinements report in declaration order"
    );
}

// ─── Campaigns ──────────────────────────────────────────────────────────────

#[test]
fn campaign_is_valid() {
    let object = CAMPAIGN.parse(&campaign()).unwrap();
    assert_eq!(object.attack_id(), Some("C0011"));
}

#[test]
fn campaign_last_seen_before_first_seen_is_rejected() {
    let candidate = with(campaign(), "last_seen", json!("2020-01-01T00:00:00.000Z"));
    let err = CAMPAIGN.parse(&candidate).unwrap_err();
    let issue = only_issue(&err);
    assert_eq!(issue.path.to_string(), "last_seen");
    assert_eq!(issue.message, "last_seen must be greater than or equal to first_seen.");
}

#[test]
fn campaign_seen_dates_may_be_equal() {
    let candidate = with(campaign(), "last_seen", json!("2021-12-01T05:00:00.000Z"));
    assert!(CAMPAIGN.parse(&candidate).is_ok());
}

#[test]
fn campaign_citations_must_be_citation_markers() {
    let cases = [
        json!("Cisco Talos"),
        json!("(Citation: )"),
        json!("(Citation: A) trailing"),
    ];
    for value in cases {
        let candidate = with(campaign(), "x_mitre_first_seen_citation", value.clone());
        let err = CAMPAIGN.parse(&candidate).unwrap_err();
        let issue = only_issue(&err);
        assert_eq!(issue.path.to_string(), "x_mitre_first_seen_citation", "{}", value);
        assert_eq!(issue.code, IssueCode::InvalidString);
    }
}

#[test]
fn campaign_accepts_several_citations() {
    let candidate = with(
        campaign(),
        "x_mitre_last_seen_citation",
        json!("(Citation: Source One)(Citation: Source Two)"),
    );
    assert!(CAMPAIGN.parse(&candidate).is_ok());
}

#[test]
fn campaign_seen_dates_must_be_real_dates() {
    let candidate = with(campaign(), "first_seen", json!("2021-02-30T00:00:00.000Z"));
    let err = validate(&candidate).unwrap_err();
    let issue = only_issue(&err);
    assert_eq!(issue.code, IssueCode::InvalidDate);
    assert_eq!(issue.path.to_string(), "first_seen");
}
