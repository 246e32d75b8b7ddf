#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let object = match attack_schema::load(&s) {
        Ok(o) => o,
        Err(_) => return,
    };

    let json = match attack_schema::serialize(&object) {
        Ok(j) => j,
        Err(_) => return,
    };

    // A serialized validated object must load back to the same object.
    match attack_schema::load(&json) {
        Ok(again) if again == object => {}
        other => panic!(
            "Roundtrip failure: serialize produced JSON that does not load back.\n\
             Input (lossy): {:?}\n\
             Serialized JSON:\n{}\n\
             Result: {:?}",
            s.get(..200).unwrap_or(&s),
            json.get(..500).unwrap_or(&json),
            other,
        ),
    }
});
