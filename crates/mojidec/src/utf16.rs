//! UTF-16 decoding as a stream of raw 16-bit code units.
//!
//! Surrogate pairs are not combined: each 16-bit unit is emitted as-is.
//! Byte order is resolved once from a leading BOM and defaults to
//! little-endian without one.

use crate::sink::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn unit(self, pair: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Little => u16::from_le_bytes(pair),
            ByteOrder::Big => u16::from_be_bytes(pair),
        }
    }
}

/// Resolves byte order from a 2-byte BOM and returns the remaining view.
///
/// The BOM, when present, is consumed and never counted as a unit. Shared
/// with the detector, which needs the same view without mutating caller
/// data.
pub(crate) fn split_bom(src: &[u8]) -> (ByteOrder, &[u8]) {
    match src {
        [0xFF, 0xFE, rest @ ..] => (ByteOrder::Little, rest),
        [0xFE, 0xFF, rest @ ..] => (ByteOrder::Big, rest),
        _ => (ByteOrder::Little, src),
    }
}

/// Decodes 2-byte units until the NUL unit, end of input, or a full sink.
/// A trailing odd byte is ignored.
pub(crate) fn decode(sink: &mut Sink<'_>, src: &[u8]) {
    let (order, body) = split_bom(src);
    for pair in body.chunks_exact(2) {
        let unit = order.unit([pair[0], pair[1]]);
        if unit == 0 {
            break;
        }
        if !sink.push(i32::from(unit)) {
            break;
        }
    }
}
