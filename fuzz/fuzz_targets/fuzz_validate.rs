#![no_main]

use adaptive_cards::{CardValidator, Platform, SchemaStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let Ok(card) = adaptive_cards::from_json(&s) else {
        return;
    };

    let mut validator = CardValidator::for_platform(Platform::WindowsWidgets)
        .with_schema_store(SchemaStore::default().memoized());
    let first = validator.validate(&card).is_ok();
    let findings = validator.details().to_vec();

    // Validation must be deterministic for the same card.
    let second = validator.validate(&card).is_ok();
    assert_eq!(first, second);
    assert_eq!(findings, validator.details());
});
