//! The closed set of encodings this crate recognizes.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A text encoding tag accepted by [`decode`](crate::decode) and returned
/// by [`detect`](crate::detect).
///
/// The set is closed and fixed; dispatch is a plain `match`, never dynamic.
/// [`Encoding::Unknown`] is the inert tag: decoding under it produces zero
/// units without inspecting the source.
///
/// # Examples
///
/// ```
/// use mojidec::Encoding;
///
/// let tag: Encoding = "shift_jis".parse().unwrap();
/// assert_eq!(tag, Encoding::ShiftJis);
/// assert_eq!(tag.as_str(), "shift_jis");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Encoding {
    /// No encoding declared or determined.
    #[default]
    Unknown,
    /// UTF-16, either byte order; resolved from a BOM, little-endian when
    /// absent.
    Utf16,
    /// UTF-8, with the historical relaxations documented on the decoder.
    Utf8,
    /// Shift-JIS extended with the JIS X 0213 planes (superset of the
    /// CP932 repertoire for double-byte rows).
    ShiftJis,
    /// EUC-JP, JIS X 0208/0213 plane 1 plus single-shift half-width kana.
    EucJp,
}

/// Recognized labels, canonical first per tag.
const LABELS: &[(&str, Encoding)] = &[
    ("unknown", Encoding::Unknown),
    ("utf-16", Encoding::Utf16),
    ("utf16", Encoding::Utf16),
    ("utf-8", Encoding::Utf8),
    ("utf8", Encoding::Utf8),
    ("shift_jis", Encoding::ShiftJis),
    ("shift-jis", Encoding::ShiftJis),
    ("sjis", Encoding::ShiftJis),
    ("cp932", Encoding::ShiftJis),
    ("euc-jp", Encoding::EucJp),
    ("euc_jp", Encoding::EucJp),
    ("eucjp", Encoding::EucJp),
];

impl Encoding {
    /// Returns the canonical label for this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Unknown => "unknown",
            Encoding::Utf16 => "utf-16",
            Encoding::Utf8 => "utf-8",
            Encoding::ShiftJis => "shift_jis",
            Encoding::EucJp => "euc-jp",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an encoding label fails.
///
/// Produced by the [`FromStr`] implementation on [`Encoding`]; see the
/// accepted labels there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized encoding label")]
pub struct ParseEncodingError(());

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    /// Parses a label into an encoding tag, ASCII-case-insensitively.
    ///
    /// Accepts the canonical labels (`"utf-16"`, `"utf-8"`, `"shift_jis"`,
    /// `"euc-jp"`, `"unknown"`) and the common aliases `"utf16"`, `"utf8"`,
    /// `"shift-jis"`, `"sjis"`, `"cp932"`, `"euc_jp"`, and `"eucjp"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LABELS
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(s))
            .map(|&(_, encoding)| encoding)
            .ok_or(ParseEncodingError(()))
    }
}
