//! UTF-8 decoding with the historical relaxations of the legacy engine.
//!
//! This is deliberately not a conforming UTF-8 decoder. It accepts overlong
//! 2/3-byte forms, does not exclude the surrogate range, rejects every
//! 4-byte sequence, and masks 3-byte leads with `0x1F` rather than the
//! standard `0x0F`. Callers that need strict UTF-8 should validate
//! elsewhere; this routine exists to reproduce the byte-compatible behavior
//! the rest of the crate was built against.

use crate::REPLACEMENT;
use crate::sink::Sink;

const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// Decodes until a NUL lead, end of input, a dangling multi-byte lead, or a
/// full sink. A leading BOM is stripped and never counted.
pub(crate) fn decode(sink: &mut Sink<'_>, src: &[u8]) {
    let src = src.strip_prefix(&BOM).unwrap_or(src);
    let mut i = 0;
    while i < src.len() {
        let lead = src[i];
        let unit = match lead {
            0x00 => break,
            0x01..=0x7F => {
                i += 1;
                i32::from(lead)
            }
            0xC2..=0xDF => {
                let Some(&cont) = src.get(i + 1) else {
                    // Dangling lead: truncate without emitting.
                    break;
                };
                if is_continuation(cont) {
                    i += 2;
                    (i32::from(lead & 0x1F) << 6) | i32::from(cont & 0x3F)
                } else {
                    // Consume the lead only, so the scan resynchronizes on
                    // the byte that failed.
                    i += 1;
                    REPLACEMENT
                }
            }
            0xE0..=0xEF => {
                if i + 2 >= src.len() {
                    break;
                }
                let (c1, c2) = (src[i + 1], src[i + 2]);
                if is_continuation(c1) && is_continuation(c2) {
                    i += 3;
                    // Historical lead mask: 0x1F, not the standard 0x0F.
                    (i32::from(lead & 0x1F) << 12)
                        | (i32::from(c1 & 0x3F) << 6)
                        | i32::from(c2 & 0x3F)
                } else {
                    i += 1;
                    REPLACEMENT
                }
            }
            // 0x80..=0xC1: bare continuations and overlong leads.
            // 0xF0..=0xFF: 4+-byte sequences, unsupported.
            _ => {
                i += 1;
                REPLACEMENT
            }
        };
        if !sink.push(unit) {
            break;
        }
    }
}
