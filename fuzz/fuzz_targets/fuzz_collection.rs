#![no_main]

use arbitrary::Arbitrary;
use attack_schema::objects::collection::COLLECTION;
use libfuzzer_sys::fuzz_target;
use serde_json::{Value, json};

#[derive(Arbitrary, Debug)]
struct Entry {
    object_type: String,
    uuid: String,
    modified: String,
}

#[derive(Arbitrary, Debug)]
struct Input {
    name: String,
    version: String,
    created: String,
    modified: String,
    entries: Vec<Entry>,
}

fuzz_target!(|input: Input| {
    let contents: Vec<Value> = input
        .entries
        .iter()
        .map(|e| {
            json!({
                "object_ref": format!("{}--{}", e.object_type, e.uuid),
                "object_modified": e.modified,
            })
        })
        .collect();
    let candidate = json!({
        "type": "x-mitre-collection",
        "id": "x-mitre-collection--1f5f1533-f617-4ca8-9ab4-6a02367fa019",
        "spec_version": "2.1",
        "created": input.created,
        "modified": input.modified,
        "created_by_ref": attack_schema::ATTACK_IDENTITY_REF,
        "object_marking_refs": [attack_schema::ATTACK_MARKING_REF],
        "name": input.name,
        "description": "",
        "x_mitre_attack_spec_version": "3.2.0",
        "x_mitre_version": input.version,
        "x_mitre_contents": contents,
    });

    match COLLECTION.parse(&candidate) {
        Ok(object) => {
            // Anything accepted must also deserialize into the typed view.
            let typed: attack_schema::Collection = object
                .to_typed()
                .expect("validated collection must convert to its typed view");
            assert_eq!(typed.x_mitre_contents.len(), input.entries.len());
        }
        Err(err) => assert!(!err.issues().is_empty()),
    }
});
