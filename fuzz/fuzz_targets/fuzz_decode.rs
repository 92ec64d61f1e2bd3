#![no_main]

use libfuzzer_sys::fuzz_target;
use mojidec::{Encoding, REPLACEMENT, decode};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, src)) = data.split_first() else {
        return;
    };
    let encoding = match selector % 5 {
        0 => Encoding::Unknown,
        1 => Encoding::Utf16,
        2 => Encoding::Utf8,
        3 => Encoding::ShiftJis,
        _ => Encoding::EucJp,
    };

    // Counting and decoding must agree given enough room.
    let needed = decode(None, src, encoding);
    assert!(needed <= src.len());
    let mut buf = vec![0i32; needed];
    assert_eq!(decode(Some(&mut buf), src, encoding), needed);

    // Every unit is a plausible scalar or the replacement marker.
    for &unit in &buf {
        assert!(unit == REPLACEMENT || (0..=0x0010_FFFF).contains(&unit));
    }

    // A truncated buffer holds exactly the untruncated prefix.
    let cap = needed / 2;
    let mut small = vec![0i32; cap];
    assert_eq!(decode(Some(&mut small), src, encoding), cap);
    assert_eq!(small[..], buf[..cap]);
});
