use core::ops::Add;

/// Adds `a` and `b`.
///
/// This is exactly `a + b`: floats round per IEEE-754, and primitive integers overflow the way the
/// `+` operator does (a panic with debug assertions enabled, wrapping otherwise).
#[inline]
#[must_use]
pub fn addition<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
