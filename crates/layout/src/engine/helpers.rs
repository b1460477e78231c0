// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Whether two half-open column ranges `[start, start + span)` share at least
/// one column
pub(crate) fn ranges_intersect(a_start: i64, a_span: i64, b_start: i64, b_span: i64) -> bool {
    a_start < b_start + b_span && b_start < a_start + a_span
}
