//! Small numeric helpers.

use std::ops::Mul;

/// Multiplicative identity, for [`repeat_pow`].
pub trait One {
    /// Returns `1` in the implementing type.
    fn one() -> Self;
}

macro_rules! impl_one_int {
    ($($ty:ty),*) => {
        $(impl One for $ty {
            fn one() -> Self {
                1
            }
        })*
    };
}

macro_rules! impl_one_float {
    ($($ty:ty),*) => {
        $(impl One for $ty {
            fn one() -> Self {
                1.0
            }
        })*
    };
}

impl_one_int!(u32, u64, usize, i32, i64);
impl_one_float!(f32, f64);

/// `base` raised to the const exponent `EXP` by repeated multiplication.
///
/// The exponent is known at compile time, so the multiply chain unrolls
/// fully; no floating-point `pow` call is involved.
#[inline]
pub fn repeat_pow<T, const EXP: usize>(base: T) -> T
where
    T: Copy + Mul<Output = T> + One,
{
    let mut acc = T::one();
    let mut remaining = EXP;
    while remaining > 0 {
        acc = acc * base;
        remaining -= 1;
    }
    acc
}
