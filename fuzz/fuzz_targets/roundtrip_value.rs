#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtag::{NamedTag, ReadOptions, Value};

fuzz_target!(|v: Value| {
    let tag = NamedTag::new("", v);

    if let Ok(bs) = nbtag::to_bytes(&tag) {
        // The writer has no depth limit, so neither may the reader here.
        let opts = ReadOptions::new().max_depth(usize::MAX);
        let back = nbtag::from_bytes_with_opts(&bs, opts).expect("encoded nbt should decode");

        // NaN floats are never equal, so compare the encodings instead.
        assert_eq!(nbtag::to_bytes(&back).unwrap(), bs);
    }
});
