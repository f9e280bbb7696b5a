#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let Ok(card) = adaptive_cards::from_json(&s) else {
        return;
    };

    let json = match adaptive_cards::to_json(&card) {
        Ok(j) => j,
        Err(_) => return,
    };

    // Anything we serialize must parse back to the same card.
    match adaptive_cards::from_json(&json) {
        Ok(back) => assert_eq!(
            serde_json::to_value(&back).ok(),
            serde_json::to_value(&card).ok(),
            "roundtrip changed the card:\n{}",
            json.get(..500).unwrap_or(&json),
        ),
        Err(e) => panic!(
            "serialized card cannot be re-parsed: {e}\n{}",
            json.get(..500).unwrap_or(&json)
        ),
    }
});
