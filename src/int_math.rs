//! Integer division primitives used by the calendar formulas.
//!
//! Every formula in this crate depends on division that truncates toward
//! zero and a remainder that keeps the sign of the dividend. Rust's `/` and
//! `%` on signed integers already behave this way; these wrappers pin the
//! convention down in one place so that nothing drifts to `div_euclid` or
//! `rem_euclid`.

/// Integer division truncated toward zero.
///
/// # Panics
/// Panics if `b` is zero. A zero divisor can only come from a corrupted
/// constant, so it is treated as a programming error.
#[inline]
pub const fn trunc_div(a: i64, b: i64) -> i64 {
    assert!(b != 0, "trunc_div: division by zero");
    a / b
}

/// Remainder with the sign of `a`, i.e. `a - trunc_div(a, b) * b`.
///
/// This is not a mathematical modulo: `trunc_mod(-5, 3)` is `-2`.
///
/// # Panics
/// Panics if `b` is zero.
#[inline]
pub const fn trunc_mod(a: i64, b: i64) -> i64 {
    assert!(b != 0, "trunc_mod: division by zero");
    a % b
}
