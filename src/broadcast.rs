//! Scalar-on-the-left lanewise operations
//!
//! Vector methods take a bare scalar on the right (`v.simd_lt(2)`).
//! [`ScalarBroadcast`] gives the mirrored spelling, `2.simd_lt(v)`, by
//! broadcasting the scalar to the width of `rhs` first.
//!
//! The wrapping forms carry a `_lanes` suffix because the primitive integers
//! already have inherent `wrapping_add` and friends.
//!
//! ```
//! use carril::{ScalarBroadcast, Simd4};
//!
//! let v = Simd4::new(1i32, 2, 3, 4);
//! assert_eq!(2i32.simd_lt(v).to_array(), [false, false, true, true]);
//! assert_eq!(0u8.wrapping_sub_lanes(Simd4::new(1u8, 0, 2, 255)), Simd4::new(255, 0, 254, 1));
//! ```

use crate::mask::MaskOf;
use crate::scalar::{SimdInteger, SimdOrdered, SimdScalar};
use crate::vector::SimdVector;

/// Lanewise operations with a scalar broadcast on the left
pub trait ScalarBroadcast: SimdScalar {
    /// Lanes where `self == rhs[i]`
    #[inline]
    fn simd_eq<V>(self, rhs: V) -> MaskOf<V>
    where
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).simd_eq(rhs)
    }

    /// Lanes where `self != rhs[i]`
    #[inline]
    fn simd_ne<V>(self, rhs: V) -> MaskOf<V>
    where
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).simd_ne(rhs)
    }

    /// Lanes where `self < rhs[i]`
    #[inline]
    fn simd_lt<V>(self, rhs: V) -> MaskOf<V>
    where
        Self: SimdOrdered,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).simd_lt(rhs)
    }

    /// Lanes where `self <= rhs[i]`
    #[inline]
    fn simd_le<V>(self, rhs: V) -> MaskOf<V>
    where
        Self: SimdOrdered,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).simd_le(rhs)
    }

    /// Lanes where `self > rhs[i]`
    #[inline]
    fn simd_gt<V>(self, rhs: V) -> MaskOf<V>
    where
        Self: SimdOrdered,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).simd_gt(rhs)
    }

    /// Lanes where `self >= rhs[i]`
    #[inline]
    fn simd_ge<V>(self, rhs: V) -> MaskOf<V>
    where
        Self: SimdOrdered,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).simd_ge(rhs)
    }

    /// `self &+ rhs[i]` in every lane
    #[inline]
    #[must_use]
    fn wrapping_add_lanes<V>(self, rhs: V) -> V
    where
        Self: SimdInteger,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).wrapping_add(rhs)
    }

    /// `self &- rhs[i]` in every lane
    #[inline]
    #[must_use]
    fn wrapping_sub_lanes<V>(self, rhs: V) -> V
    where
        Self: SimdInteger,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).wrapping_sub(rhs)
    }

    /// `self &* rhs[i]` in every lane
    #[inline]
    #[must_use]
    fn wrapping_mul_lanes<V>(self, rhs: V) -> V
    where
        Self: SimdInteger,
        V: SimdVector<Scalar = Self>,
    {
        V::splat(self).wrapping_mul(rhs)
    }
}

impl<S: SimdScalar> ScalarBroadcast for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Simd16, Simd2, Simd3, Simd4, Simd8};

    #[test]
    fn test_equality_from_the_left() {
        let v = Simd4::new(7u16, 1, 7, 2);
        assert_eq!(7u16.simd_eq(v), v.simd_eq(7u16));
        assert_eq!(7u16.simd_ne(v).to_array(), [false, true, false, true]);
    }

    #[test]
    fn test_ordering_mirrors_right_hand_form() {
        let v = Simd3::new(1i32, 2, 3);
        assert_eq!(2i32.simd_lt(v), v.simd_gt(2i32));
        assert_eq!(2i32.simd_le(v), v.simd_ge(2i32));
        assert_eq!(2i32.simd_gt(v), v.simd_lt(2i32));
        assert_eq!(2i32.simd_ge(v), v.simd_le(2i32));
    }

    #[test]
    fn test_float_comparison_with_nan() {
        let v = Simd2::new(f64::NAN, 3.0);
        assert_eq!(1.0f64.simd_lt(v).to_array(), [false, true]);
        assert_eq!(f64::NAN.simd_ge(v).to_array(), [false, false]);
    }

    #[test]
    fn test_wrapping_sub_is_not_commutative() {
        let v = Simd2::new(2u8, 0);
        assert_eq!(1u8.wrapping_sub_lanes(v), Simd2::new(255, 1));
        assert_eq!(v.wrapping_sub(1u8), Simd2::new(1, 255));
    }

    #[test]
    fn test_wrapping_add_mul_from_the_left() {
        let v = Simd8::<i8>::from_fn(|i| (i as i8).wrapping_mul(40));
        assert_eq!(100i8.wrapping_add_lanes(v), v.wrapping_add(100i8));
        assert_eq!(3i8.wrapping_mul_lanes(v), v.wrapping_mul(3i8));
        assert_eq!(i8::MAX.wrapping_add_lanes(Simd2::new(1i8, 0)), Simd2::new(i8::MIN, i8::MAX));
    }

    #[test]
    fn test_pointer_width_lanes() {
        let v = Simd16::<usize>::from_fn(|i| i);
        assert_eq!(8usize.simd_le(v).to_array().iter().filter(|&&lane| lane).count(), 8);
        assert_eq!(0usize.wrapping_sub_lanes(v).lane(1), usize::MAX);
    }
}
