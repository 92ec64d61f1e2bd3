//! EUC-JP decoding over the shared JIS translation tables.
//!
//! ASCII passes through unchanged. Lead `0x8E` single-shifts the next byte
//! into the JIS X 0201 page (half-width katakana); leads `0xA1..=0xF4`
//! with trails `0xA1..=0xFE` form plane-1 ku-ten pairs in the combined
//! table. There is no NUL terminator convention; `0x00` decodes as U+0000.

use crate::REPLACEMENT;
use crate::sink::Sink;
use crate::tables;

/// Decodes until end of input, a dangling lead, or a full sink.
pub(crate) fn decode(sink: &mut Sink<'_>, src: &[u8]) {
    let mut i = 0;
    while i < src.len() {
        let lead = src[i];
        let unit = if lead <= 0x7F {
            i += 1;
            i32::from(lead)
        } else {
            let Some(&trail) = src.get(i + 1) else {
                // Dangling lead: truncate without emitting.
                break;
            };
            if lead == 0x8E {
                // Single shift: the trail resolves through the single-byte
                // page, unmapped trails surface as replacements.
                i += 2;
                tables::JIS_X_0201[usize::from(trail)]
            } else if (0xA1..=0xF4).contains(&lead) && (0xA1..=0xFE).contains(&trail) {
                i += 2;
                let index = (usize::from(lead) - 0xA1) * 94 + (usize::from(trail) - 0xA1);
                tables::JIS_X_0213[index]
            } else {
                // Consume the lead only; the trail may start a valid unit.
                i += 1;
                REPLACEMENT
            }
        };
        if !sink.push(unit) {
            break;
        }
    }
}
