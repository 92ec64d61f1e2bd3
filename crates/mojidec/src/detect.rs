//! Encoding detection by similarity scoring.
//!
//! One cheap pass per candidate, range checks only — no table lookups.
//! Each scan approximates its decoder's grammar and scores the number of
//! bytes that participate in recognizable sequences, so the scores are
//! comparable across candidates: a byte counted by a longer valid sequence
//! contributes more than one counted as a stray single.

use crate::encoding::Encoding;
use crate::utf16::{self, ByteOrder};

/// Guesses the encoding of an untagged byte stream.
///
/// UTF-16 is handled first: a 16-bit-aligned pair that looks like
/// UTF-16-encoded ASCII short-circuits everything else, since no legacy
/// multi-byte stream interleaves NUL bytes with printable ASCII. The
/// remaining three candidates are ranked by similarity score with a fixed
/// tie-break: UTF-8 beats both JIS encodings, Shift-JIS beats EUC-JP. The
/// empty input therefore resolves to UTF-8.
///
/// The function never mutates or retains the input, and with the current
/// candidate set it never returns [`Encoding::Unknown`].
///
/// # Examples
///
/// ```
/// use mojidec::{Encoding, detect};
///
/// assert_eq!(detect(b"plain ascii"), Encoding::Utf8);
/// assert_eq!(detect(&[0x82, 0xA0, 0x82, 0xA2]), Encoding::ShiftJis);
/// assert_eq!(detect(&[0x41, 0x00, 0x42, 0x00]), Encoding::Utf16);
/// ```
#[must_use]
pub fn detect(src: &[u8]) -> Encoding {
    // A UTF-16 BOM also shifts the view the similarity scans see, so a
    // BOM-prefixed stream is scored on its payload.
    let (order, body) = utf16::split_bom(src);

    if has_utf16_ascii(order, body) {
        return Encoding::Utf16;
    }

    let utf8 = utf8_similarity(body);
    let shift_jis = shift_jis_similarity(body);
    let euc_jp = euc_jp_similarity(body);

    if utf8 >= shift_jis && utf8 >= euc_jp {
        Encoding::Utf8
    } else if shift_jis >= euc_jp {
        Encoding::ShiftJis
    } else {
        Encoding::EucJp
    }
}

/// Looks for a 16-bit unit whose high byte is NUL and whose low byte is
/// printable-ish ASCII (neither NUL nor DEL).
fn has_utf16_ascii(order: ByteOrder, body: &[u8]) -> bool {
    body.chunks_exact(2).any(|pair| {
        let (hi, lo) = match order {
            ByteOrder::Little => (pair[1], pair[0]),
            ByteOrder::Big => (pair[0], pair[1]),
        };
        hi == 0x00 && lo != 0x00 && lo != 0x7F
    })
}

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// True when `n` continuation bytes follow position `i`.
fn continuations(src: &[u8], i: usize, n: usize) -> bool {
    src.len() - i > n && src[i + 1..=i + n].iter().all(|&b| is_continuation(b))
}

/// Sums the lengths of valid 1-4 byte sequences. Unlike the decoder, the
/// scan credits 4-byte sequences; the goal is to recognize modern UTF-8,
/// not to mirror the decoder's limits.
fn utf8_similarity(src: &[u8]) -> usize {
    let mut score = 0;
    let mut i = 0;
    while i < src.len() {
        let taken = match src[i] {
            0x00..=0x7F => {
                score += 1;
                1
            }
            0xC2..=0xDF if continuations(src, i, 1) => {
                score += 2;
                2
            }
            0xE0..=0xEF if continuations(src, i, 2) => {
                score += 3;
                3
            }
            0xF0..=0xF7 if continuations(src, i, 3) => {
                score += 4;
                4
            }
            _ => 1,
        };
        i += taken;
    }
    score
}

/// Singles are ASCII and half-width kana; pairs are the documented lead
/// bands with any trail the decoder would accept.
fn shift_jis_similarity(src: &[u8]) -> usize {
    let mut score = 0;
    let mut i = 0;
    while i < src.len() {
        let lead = src[i];
        let taken = match lead {
            0x00..=0x7F | 0xA1..=0xDF => {
                score += 1;
                1
            }
            0x81..=0x9F | 0xE0..=0xFC
                if src
                    .get(i + 1)
                    .is_some_and(|&t| t != 0x7F && (0x40..=0xFC).contains(&t)) =>
            {
                score += 2;
                2
            }
            _ => 1,
        };
        i += taken;
    }
    score
}

/// Recognizes the 0x8E single shift, plane-1 pairs, and the three-byte
/// 0x8F plane-2 form (which the decoder itself does not accept — as with
/// UTF-8, the scan is broader than the decoder).
fn euc_jp_similarity(src: &[u8]) -> usize {
    let mut score = 0;
    let mut i = 0;
    while i < src.len() {
        let lead = src[i];
        let in_pair_range = |b: u8| (0xA1..=0xFE).contains(&b);
        let taken = if lead <= 0x7F {
            score += 1;
            1
        } else if lead == 0x8F
            && i + 2 < src.len()
            && in_pair_range(src[i + 1])
            && in_pair_range(src[i + 2])
        {
            score += 3;
            3
        } else if let Some(&trail) = src.get(i + 1) {
            if lead == 0x8E || (in_pair_range(lead) && in_pair_range(trail)) {
                score += 2;
                2
            } else {
                1
            }
        } else {
            1
        };
        i += taken;
    }
    score
}
