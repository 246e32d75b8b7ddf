#![no_main]

use attack_schema::parse::{parse_json_value, parse_yaml};
use attack_schema::registry::{safe_validate, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let _ = parse_yaml(&s);

    let value = match parse_json_value(&s) {
        Ok(v) => v,
        Err(_) => return,
    };

    // Both consumption modes must agree on every input.
    let thrown = validate(&value);
    let safe = safe_validate(&value);
    match (&thrown, &safe) {
        (Ok(object), _) => assert_eq!(safe.value(), Some(object)),
        (Err(err), _) => {
            assert!(!err.issues().is_empty());
            assert_eq!(safe.issues(), err.issues());
        }
    }

    if let Some(list) = value.as_array() {
        let _ = attack_schema::validate_all(list);
    }
    let _ = attack_schema::validate_bundle(&value);
});
