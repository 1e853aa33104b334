//! Scalar helpers the vector and matrix code builds on: fast absolute
//! value, tolerance comparison and a generic clamp.

use std::ops::Sub;

pub const TO_DEGREES_D: f64 = 180.0 / std::f64::consts::PI;
pub const TO_DEGREES: f32 = TO_DEGREES_D as f32;
pub const TO_RADIANS_D: f64 = std::f64::consts::PI / 180.0;
pub const TO_RADIANS: f32 = TO_RADIANS_D as f32;

/// Branch-based absolute value without generic numeric promotion.
pub trait FastAbs {
    /// Returns the absolute value of `self`.
    ///
    /// Integer widths wrap: the minimum representable value has no
    /// positive counterpart and comes back unchanged. Negative zero
    /// keeps its sign bit for the float widths.
    fn fast_abs(self) -> Self;
}

macro_rules! fast_abs_int {
    ($($t:ty),+) => {$(
        impl FastAbs for $t {
            #[inline]
            fn fast_abs(self) -> Self {
                if self < 0 { self.wrapping_neg() } else { self }
            }
        }
    )+};
}

macro_rules! fast_abs_float {
    ($($t:ty),+) => {$(
        impl FastAbs for $t {
            #[inline]
            fn fast_abs(self) -> Self {
                if self < 0.0 { -self } else { self }
            }
        }
    )+};
}

fast_abs_int!(i8, i16, i32, i64);
fast_abs_float!(f32, f64);

/// True iff `a` and `b` differ by at most `delta`.
#[inline]
pub fn about_equal<T>(a: T, b: T, delta: T) -> bool
where
    T: FastAbs + Sub<Output = T> + PartialOrd,
{
    (b - a).fast_abs() <= delta
}

/// Clamps `value` to the inclusive range `[min, max]`.
///
/// Requires `min <= max`; the result is unspecified otherwise.
#[inline]
pub fn within_range<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
