//! Minimal valid fixtures for every object type, plus small helpers.
#![allow(dead_code)]

use attack_schema::enums::StixType;
use attack_schema::{ATTACK_IDENTITY_REF, ATTACK_MARKING_REF, Issue, IssueCode, ValidationError};
use serde_json::{Value, json};

pub const CREATED: &str = "2017-06-01T00:00:00.000Z";
pub const MODIFIED: &str = "2017-06-01T00:00:00.000Z";

pub const TECHNIQUE_REF: &str = "attack-pattern--0042a9f5-f053-4769-b3ef-9ad018dfa298";
pub const GROUP_REF: &str = "intrusion-set--bef4c620-0787-42a8-a96d-b7eb6e85917c";
pub const DATA_SOURCE_REF: &str = "x-mitre-data-source--c000cd5c-bbb3-4606-af6f-6c6d9de0bbe3";

pub fn collection() -> Value {
    json!({
        "type": "x-mitre-collection",
        "id": "x-mitre-collection--1f5f1533-f617-4ca8-9ab4-6a02367fa019",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "name": "Enterprise ATT&CK",
        "description": "ATT&CK for Enterprise provides a knowledge base of real-world adversary behavior.",
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "1.0",
        "x_mitre_contents": [
            {
                "object_ref": TECHNIQUE_REF,
                "object_modified": "2024-04-16T12:59:54.084Z"
            }
        ]
    })
}

pub fn data_source() -> Value {
    json!({
        "type": "x-mitre-data-source",
        "id": DATA_SOURCE_REF,
        "description": "Test data source description",
        "spec_version": "2.1",
        "created": CREATED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "modified": MODIFIED,
        "name": "Network Connection Creation",
        "object_marking_refs": [ATTACK_MARKING_REF],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/datasources/DS0014",
                "external_id": "DS0014"
            }
        ],
        "x_mitre_attack_spec_version": "2.1.0",
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_version": "1.0",
        "x_mitre_collection_layers": ["Host"]
    })
}

pub fn data_component() -> Value {
    json!({
        "type": "x-mitre-data-component",
        "id": "x-mitre-data-component--3d20385b-24ef-40e1-9f56-f39750379077",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "name": "Network Connection Creation",
        "description": "Initial construction of a network connection.",
        "x_mitre_data_source_ref": DATA_SOURCE_REF,
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "2.1.0",
        "x_mitre_version": "1.0"
    })
}

pub fn tactic() -> Value {
    json!({
        "type": "x-mitre-tactic",
        "id": "x-mitre-tactic--ffd5bcee-6e16-4dd2-8eca-7b3beedf33ca",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/tactics/TA0001",
                "external_id": "TA0001"
            }
        ],
        "name": "Initial Access",
        "description": "The adversary is trying to get into your network.",
        "x_mitre_shortname": "initial-access",
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "2.1.0",
        "x_mitre_version": "1.0"
    })
}

pub fn technique() -> Value {
    json!({
        "type": "attack-pattern",
        "id": TECHNIQUE_REF,
        "spec_version": "2.1",
        "created": CREATED,
        "modified": "2024-04-16T12:59:54.084Z",
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/techniques/T1055",
                "external_id": "T1055"
            }
        ],
        "name": "Process Injection",
        "description": "Adversaries may inject code into processes.",
        "kill_chain_phases": [
            { "kill_chain_name": "mitre-attack", "phase_name": "privilege-escalation" },
            { "kill_chain_name": "mitre-attack", "phase_name": "defense-evasion" }
        ],
        "x_mitre_is_subtechnique": false,
        "x_mitre_platforms": ["Windows", "Linux", "macOS"],
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "1.3"
    })
}

pub fn group() -> Value {
    json!({
        "type": "intrusion-set",
        "id": GROUP_REF,
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/groups/G0007",
                "external_id": "G0007"
            }
        ],
        "name": "APT28",
        "aliases": ["APT28", "Fancy Bear"],
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "5.0"
    })
}

pub fn campaign() -> Value {
    json!({
        "type": "campaign",
        "id": "campaign--b4e5a4a9-f3be-4631-ba8f-da6ebb067fac",
        "spec_version": "2.1",
        "created": "2022-09-22T20:17:38.780Z",
        "modified": "2022-10-11T13:56:58.116Z",
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/campaigns/C0011",
                "external_id": "C0011"
            }
        ],
        "name": "C0011",
        "description": "C0011 was a suspected cyber espionage campaign.",
        "aliases": ["C0011"],
        "first_seen": "2021-12-01T05:00:00.000Z",
        "last_seen": "2022-07-01T04:00:00.000Z",
        "x_mitre_first_seen_citation": "(Citation: Cisco Talos Transparent Tribe Education Campaign July 2022)",
        "x_mitre_last_seen_citation": "(Citation: Cisco Talos Transparent Tribe Education Campaign July 2022)",
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "1.0"
    })
}

pub fn mitigation() -> Value {
    json!({
        "type": "course-of-action",
        "id": "course-of-action--b045d015-6bed-4490-bd38-56b41ece59a0",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/mitigations/M1032",
                "external_id": "M1032"
            }
        ],
        "name": "Multi-factor Authentication",
        "description": "Use two or more pieces of evidence to authenticate to a system.",
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "1.1"
    })
}

pub fn malware() -> Value {
    json!({
        "type": "malware",
        "id": "malware--aafea02e-ece5-4bb2-91a6-3bf8c7f38a39",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/software/S0154",
                "external_id": "S0154"
            }
        ],
        "name": "Cobalt Strike",
        "is_family": true,
        "x_mitre_aliases": ["Cobalt Strike"],
        "x_mitre_platforms": ["Windows", "Linux", "macOS"],
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "1.12"
    })
}

pub fn tool() -> Value {
    json!({
        "type": "tool",
        "id": "tool--afc079f3-c0ea-4096-b75d-3f05338b7f60",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "external_references": [
            {
                "source_name": "mitre-attack",
                "url": "https://attack.mitre.org/software/S0002",
                "external_id": "S0002"
            }
        ],
        "name": "Mimikatz",
        "x_mitre_aliases": ["Mimikatz"],
        "x_mitre_platforms": ["Windows"],
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": "1.8"
    })
}

pub fn identity() -> Value {
    json!({
        "type": "identity",
        "id": ATTACK_IDENTITY_REF,
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "name": "The MITRE Corporation",
        "identity_class": "organization",
        "x_mitre_attack_spec_version": "2.1.0"
    })
}

pub fn marking_definition() -> Value {
    json!({
        "type": "marking-definition",
        "id": ATTACK_MARKING_REF,
        "spec_version": "2.1",
        "created": CREATED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "definition_type": "statement",
        "definition": {
            "statement": "Copyright 2015-2024, The MITRE Corporation. MITRE ATT&CK and ATT&CK are registered trademarks of The MITRE Corporation."
        },
        "x_mitre_attack_spec_version": "2.1.0",
        "x_mitre_domains": ["enterprise-attack"]
    })
}

pub fn relationship() -> Value {
    json!({
        "type": "relationship",
        "id": "relationship--0d2c7a3f-5d6f-4b8a-9a3a-2d4c1f7e8b90",
        "spec_version": "2.1",
        "created": CREATED,
        "modified": MODIFIED,
        "created_by_ref": ATTACK_IDENTITY_REF,
        "object_marking_refs": [ATTACK_MARKING_REF],
        "relationship_type": "uses",
        "source_ref": GROUP_REF,
        "target_ref": TECHNIQUE_REF,
        "description": "APT28 has used process injection.",
        "x_mitre_domains": ["enterprise-attack"],
        "x_mitre_modified_by_ref": ATTACK_IDENTITY_REF,
        "x_mitre_attack_spec_version": "3.2.0"
    })
}

/// Every fixture, paired with its type.
pub fn all_fixtures() -> Vec<(StixType, Value)> {
    vec![
        (StixType::AttackPattern, technique()),
        (StixType::Campaign, campaign()),
        (StixType::CourseOfAction, mitigation()),
        (StixType::Identity, identity()),
        (StixType::IntrusionSet, group()),
        (StixType::Malware, malware()),
        (StixType::MarkingDefinition, marking_definition()),
        (StixType::Relationship, relationship()),
        (StixType::Tool, tool()),
        (StixType::Collection, collection()),
        (StixType::DataComponent, data_component()),
        (StixType::DataSource, data_source()),
        (StixType::Tactic, tactic()),
    ]
}

pub fn without(mut value: Value, field: &str) -> Value {
    value
        .as_object_mut()
        .expect("fixture must be an object")
        .remove(field);
    value
}

pub fn with(mut value: Value, field: &str, replacement: Value) -> Value {
    value[field] = replacement;
    value
}

/// Dotted paths of every issue, in report order.
pub fn paths(err: &ValidationError) -> Vec<String> {
    err.issues().iter().map(|i| i.path.to_string()).collect()
}

/// The single issue of `err`, failing the test if there is not exactly one.
pub fn only_issue(err: &ValidationError) -> &Issue {
    assert_eq!(
        err.issues().len(),
        1,
        "expected exactly one issue, got: {:?}",
        err.issues()
    );
    &err.issues()[0]
}

pub fn assert_issue(err: &ValidationError, path: &str, code: IssueCode) {
    assert!(
        err.issues()
            .iter()
            .any(|i| i.path.to_string() == path && i.code == code),
        "expected {} at '{}', got: {:?}",
        code,
        path,
        err.issues()
    );
}
