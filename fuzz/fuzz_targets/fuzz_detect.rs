#![no_main]

use libfuzzer_sys::fuzz_target;
use mojidec::{Encoding, decode, detect};

fuzz_target!(|data: &[u8]| {
    // Detection is total over arbitrary bytes and always nominates a
    // decodable candidate.
    let tag = detect(data);
    assert_ne!(tag, Encoding::Unknown);

    // The nominated decoder must accept the input without panicking.
    let mut buf = vec![0i32; decode(None, data, tag)];
    decode(Some(&mut buf), data, tag);
});
