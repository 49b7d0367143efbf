#![no_main]

use libfuzzer_sys::fuzz_target;

use seqcalc_core::generate;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte caps the length, the rest is the kind name.
    let length = i64::from(i8::from_ne_bytes([data[0]])) % 64;
    let Ok(name) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    match generate(name, length) {
        Ok(terms) => {
            assert!(length >= 0);
            assert_eq!(terms.len() as i64, length);
        }
        Err(_) => {
            assert!(length < 0 || name.parse::<seqcalc_core::SequenceKind>().is_err());
        }
    }
});
