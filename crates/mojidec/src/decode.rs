//! The decode entry point and its allocating convenience wrapper.

use crate::encoding::Encoding;
use crate::sink::Sink;
use crate::{euc_jp, shift_jis, utf16, utf8};

/// Decodes `src` under `encoding` into Unicode scalar values.
///
/// With `dest` present, up to `dest.len()` units are written in input
/// order and the number actually written is returned; a full buffer stops
/// the scan early. With `dest` absent the same scan runs in counting mode
/// and returns how many units decoding would produce, so the two calls
/// agree whenever the buffer is large enough.
///
/// Malformed subsequences never abort the scan: each one yields exactly
/// one [`REPLACEMENT`](crate::REPLACEMENT) unit and the scan resumes on
/// the next byte. A multi-byte lead with too few bytes left behaves like a
/// terminator — the scan ends silently before it.
///
/// [`Encoding::Unknown`] returns 0 without inspecting `src`.
///
/// # Examples
///
/// ```
/// use mojidec::{Encoding, decode};
///
/// // Count first, then fill.
/// let src = [0xE3, 0x81, 0x82]; // "あ" in UTF-8
/// let needed = decode(None, &src, Encoding::Utf8);
/// assert_eq!(needed, 1);
///
/// let mut buf = [0i32; 1];
/// assert_eq!(decode(Some(&mut buf), &src, Encoding::Utf8), 1);
/// assert_eq!(buf, [0x3042]);
/// ```
pub fn decode(dest: Option<&mut [i32]>, src: &[u8], encoding: Encoding) -> usize {
    let mut sink = Sink::new(dest);
    match encoding {
        Encoding::Utf16 => utf16::decode(&mut sink, src),
        Encoding::Utf8 => utf8::decode(&mut sink, src),
        Encoding::ShiftJis => shift_jis::decode(&mut sink, src),
        Encoding::EucJp => euc_jp::decode(&mut sink, src),
        Encoding::Unknown => {}
    }
    sink.len()
}

/// Decodes `src` into a freshly sized vector.
///
/// Runs the counting pass to size the buffer, then the decoding pass to
/// fill it; the two passes agree by construction.
///
/// # Examples
///
/// ```
/// use mojidec::{Encoding, decode_to_vec};
///
/// let units = decode_to_vec(&[0xA4, 0xA2], Encoding::EucJp);
/// assert_eq!(units, [0x3042]);
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn decode_to_vec(src: &[u8], encoding: Encoding) -> alloc::vec::Vec<i32> {
    let mut out = alloc::vec![0; decode(None, src, encoding)];
    let written = decode(Some(&mut out), src, encoding);
    debug_assert_eq!(written, out.len());
    out
}
