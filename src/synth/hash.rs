//! Rolling string hash feeding every synthesized field.

/// Hashes `identifier` with `h = h * 31 + unit` over its UTF-16 code units,
/// wrapping in 32-bit signed arithmetic, and returns the absolute value.
///
/// `i32::MIN` has no positive `i32` counterpart and maps to `2^31`, which is
/// why the result is a `u32`.
#[must_use]
pub fn rolling_hash(identifier: &str) -> u32 {
    identifier
        .encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}
