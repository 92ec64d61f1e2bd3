//! JIS → Unicode translation tables.
//!
//! Both tables are immutable process-wide statics, shared by all callers
//! without synchronization. Unmapped cells hold the replacement marker, so
//! lookups are total: a decoder checks the result, never the input.
//!
//! The data files are generated by `tools/gen-tables.py` from the
//! JIS X 0213:2004 mapping and checked in; regenerate them rather than
//! editing by hand.

/// Single-byte JIS X 0201 page, indexed by the raw byte.
///
/// Covers ASCII (`0x00..=0x7F`) and the half-width katakana block
/// (`0xA1..=0xDF` → U+FF61..U+FF9F). Every other byte holds the
/// replacement marker, which is what routes Shift-JIS input into the
/// double-byte path.
pub(crate) static JIS_X_0201: [i32; 256] = include!("jis_x_0201.in");

/// Combined JIS X 0208 / JIS X 0213 double-byte table, ku-ten linear.
///
/// Plane 1 occupies rows `0..94` at `row * 94 + col`; plane 2 is appended
/// at `(94 + row) * 94 + col`. Rows and columns are 0-based here (the
/// standards number them from 1). Cells with no single-scalar mapping —
/// unassigned positions and the handful of combining-sequence cells —
/// hold the replacement marker.
pub(crate) static JIS_X_0213: [i32; 17672] = include!("jis_x_0213.in");
