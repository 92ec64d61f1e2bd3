//! Decode legacy Japanese text encodings into Unicode code points, and
//! guess the encoding of untagged byte streams.
//!
//! Externally supplied text (files, network payloads) frequently arrives
//! with no reliable encoding tag. This crate covers the four encodings such
//! data realistically uses — UTF-16, UTF-8, Shift-JIS (with the JIS X 0213
//! extension planes), and EUC-JP — with two entry points:
//!
//! - [`decode`] turns a byte slice plus a declared [`Encoding`] into a
//!   sequence of Unicode scalar values, substituting [`REPLACEMENT`]
//!   (U+FFFD) for malformed subsequences. Passing `None` as the destination
//!   runs the same scan in counting mode, so a caller can size a buffer
//!   before allocating it.
//! - [`detect`] ranks the four encodings against a byte slice using cheap
//!   single-pass range heuristics and returns the best guess.
//!
//! Decoding is total: malformed input never aborts the scan, it produces an
//! inline replacement marker and resynchronizes on the next byte. There is
//! no shared mutable state — the translation tables are immutable statics —
//! so every routine is freely callable from multiple threads.
//!
//! # Examples
//!
//! ```
//! use mojidec::{Encoding, decode, detect};
//!
//! // "あい" in Shift-JIS.
//! let bytes = [0x82, 0xA0, 0x82, 0xA2];
//! assert_eq!(detect(&bytes), Encoding::ShiftJis);
//!
//! let needed = decode(None, &bytes, Encoding::ShiftJis);
//! let mut buf = vec![0; needed];
//! let written = decode(Some(&mut buf), &bytes, Encoding::ShiftJis);
//! assert_eq!(&buf[..written], &[0x3042, 0x3044]);
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod detect;
mod encoding;
mod euc_jp;
mod shift_jis;
mod sink;
mod tables;
mod utf16;
mod utf8;

pub use decode::decode;
#[cfg(feature = "alloc")]
pub use decode::decode_to_vec;
pub use detect::detect;
pub use encoding::{Encoding, ParseEncodingError};

/// The Unicode replacement character (U+FFFD), emitted in place of any byte
/// subsequence that cannot be validly decoded.
pub const REPLACEMENT: i32 = 0xFFFD;
