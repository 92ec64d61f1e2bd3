//! Shift-JIS decoding with the JIS X 0213 extension planes.
//!
//! Single bytes resolve through the JIS X 0201 table (ASCII plus
//! half-width katakana). Anything that table leaves unmapped is treated as
//! the lead of a double-byte pair: the lead selects a row base in the
//! combined JIS X 0208/0213 table, the trail selects the cell, and leads
//! `0xF0..=0xFC` land in the appended plane-2 rows. There is no NUL
//! terminator convention; `0x00` decodes as U+0000.

use crate::REPLACEMENT;
use crate::sink::Sink;
use crate::tables;

/// Row width of the JIS ku-ten grid.
const KU: i32 = 94;

/// Base index into the combined table per lead byte (`lead - 0x80`).
///
/// Each double-byte lead covers two ku rows (the trail spans 188 cells), so
/// consecutive leads step by two rows. `-1` marks leads that never start a
/// valid pair: `0x80`, the half-width kana range `0xA0..=0xDF`, and
/// `0xFD..=0xFF`. Leads `0xF0..=0xFC` point past plane 1 into the plane-2
/// rows stored at `(94 + row) * 94`; see [`pair_index`] for the additional
/// shift their upper trail halves take.
#[rustfmt::skip]
const ROW_BASE: [i32; 128] = [
            -1,       0,  2 * KU,  4 * KU,  6 * KU,  8 * KU, 10 * KU, 12 * KU,
       14 * KU, 16 * KU, 18 * KU, 20 * KU, 22 * KU, 24 * KU, 26 * KU, 28 * KU,
       30 * KU, 32 * KU, 34 * KU, 36 * KU, 38 * KU, 40 * KU, 42 * KU, 44 * KU,
       46 * KU, 48 * KU, 50 * KU, 52 * KU, 54 * KU, 56 * KU, 58 * KU, 60 * KU,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
       62 * KU, 64 * KU, 66 * KU, 68 * KU, 70 * KU, 72 * KU, 74 * KU, 76 * KU,
       78 * KU, 80 * KU, 82 * KU, 84 * KU, 86 * KU, 88 * KU, 90 * KU, 92 * KU,
    (94 +  0) * KU, (94 +  2) * KU, (94 +  4) * KU, (94 + 12) * KU,
    (94 + 14) * KU, (94 + 78) * KU, (94 + 80) * KU, (94 + 82) * KU,
    (94 + 84) * KU, (94 + 86) * KU, (94 + 88) * KU, (94 + 90) * KU,
    (94 + 92) * KU, -1, -1, -1,
];

fn is_valid_trail(trail: u8) -> bool {
    trail != 0x7F && (0x40..=0xFC).contains(&trail)
}

/// Linear index of a valid (lead, trail) pair in the combined table.
///
/// The trail skips `0x7F`, hence the `trail - 1` fold for the upper half.
/// Leads `0xF0`, `0xF2`, and `0xF4` pack two non-adjacent plane-2 rows
/// each; their upper trail halves shift down by the fixed row counts the
/// plane-2 layout dictates.
fn pair_index(lead: u8, trail: u8, row_base: i32) -> usize {
    let cell = if trail < 0x80 { trail } else { trail - 1 };
    let mut index = row_base + i32::from(cell) - 0x40;
    if trail >= 0x80 {
        match lead {
            0xF0 | 0xF2 => index += 6 * KU,
            0xF4 => index += 62 * KU,
            _ => {}
        }
    }
    usize::try_from(index).expect("row base and cell are non-negative")
}

/// Decodes until end of input, a dangling lead, or a full sink.
pub(crate) fn decode(sink: &mut Sink<'_>, src: &[u8]) {
    let mut i = 0;
    while i < src.len() {
        let lead = src[i];
        let single = tables::JIS_X_0201[usize::from(lead)];
        let unit = if single != REPLACEMENT {
            i += 1;
            single
        } else {
            // Every byte the single-byte table leaves unmapped is >= 0x80.
            debug_assert!(lead >= 0x80);
            let Some(&trail) = src.get(i + 1) else {
                break;
            };
            let row_base = ROW_BASE[usize::from(lead - 0x80)];
            if row_base >= 0 && is_valid_trail(trail) {
                i += 2;
                tables::JIS_X_0213[pair_index(lead, trail, row_base)]
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
