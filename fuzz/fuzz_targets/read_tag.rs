#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic or hang, whatever the input.
    if let Ok(tag) = nbtag::from_bytes(data) {
        let _ = nbtag::to_bytes(&tag);
    }
});
