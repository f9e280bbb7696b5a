#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let _ = adaptive_cards::from_json(&s);
    let _ = adaptive_cards::from_yaml(&s);
});
