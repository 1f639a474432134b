//! Splitting a vector into half-width vectors and joining them back
//!
//! Widths 4 through 64 pair with the next narrower width. "Low" and "high"
//! split by position; "even" and "odd" split by lane parity.

use crate::scalar::SimdScalar;
use crate::types::{Simd16, Simd2, Simd32, Simd4, Simd64, Simd8};
use crate::vector::SimdVector;

/// Vectors with a half-width counterpart
///
/// # Examples
///
/// ```
/// use carril::{Simd2, Simd4, SimdHalves};
///
/// let v = Simd4::new(1i32, 2, 3, 4);
/// assert_eq!(v.low_half(), Simd2::new(1, 2));
/// assert_eq!(v.high_half(), Simd2::new(3, 4));
/// assert_eq!(v.even_half(), Simd2::new(1, 3));
/// assert_eq!(v.odd_half(), Simd2::new(2, 4));
/// assert_eq!(Simd4::from_even_odd(v.even_half(), v.odd_half()), v);
/// ```
pub trait SimdHalves: SimdVector {
    /// Vector of half as many lanes with the same scalar
    type Half: SimdVector<Scalar = Self::Scalar>;

    /// Lanes `0..N/2`
    fn low_half(&self) -> Self::Half {
        <Self::Half as SimdVector>::from_fn(|index| self.lane(index))
    }

    /// Lanes `N/2..N`
    fn high_half(&self) -> Self::Half {
        let offset = <Self::Half as SimdVector>::SCALAR_COUNT;
        <Self::Half as SimdVector>::from_fn(|index| self.lane(offset + index))
    }

    /// Lanes `0, 2, 4, ...`
    fn even_half(&self) -> Self::Half {
        <Self::Half as SimdVector>::from_fn(|index| self.lane(2 * index))
    }

    /// Lanes `1, 3, 5, ...`
    fn odd_half(&self) -> Self::Half {
        <Self::Half as SimdVector>::from_fn(|index| self.lane(2 * index + 1))
    }

    /// Overwrite lanes `0..N/2`
    fn set_low_half(&mut self, half: Self::Half) {
        for index in half.indices() {
            self.set_lane(index, half.lane(index));
        }
    }

    /// Overwrite lanes `N/2..N`
    fn set_high_half(&mut self, half: Self::Half) {
        let offset = <Self::Half as SimdVector>::SCALAR_COUNT;
        for index in half.indices() {
            self.set_lane(offset + index, half.lane(index));
        }
    }

    /// Overwrite the even lanes
    fn set_even_half(&mut self, half: Self::Half) {
        for index in half.indices() {
            self.set_lane(2 * index, half.lane(index));
        }
    }

    /// Overwrite the odd lanes
    fn set_odd_half(&mut self, half: Self::Half) {
        for index in half.indices() {
            self.set_lane(2 * index + 1, half.lane(index));
        }
    }

    /// Concatenate `low` and `high`
    fn from_halves(low: Self::Half, high: Self::Half) -> Self {
        let offset = <Self::Half as SimdVector>::SCALAR_COUNT;
        Self::from_fn(|index| {
            if index < offset {
                low.lane(index)
            } else {
                high.lane(index - offset)
            }
        })
    }

    /// Interleave `even` and `odd` lanes
    fn from_even_odd(even: Self::Half, odd: Self::Half) -> Self {
        Self::from_fn(|index| {
            if index % 2 == 0 {
                even.lane(index / 2)
            } else {
                odd.lane(index / 2)
            }
        })
    }
}

macro_rules! impl_halves {
    ($($full:ident => $half:ident),+ $(,)?) => {$(
        impl<S: SimdScalar> SimdHalves for $full<S> {
            type Half = $half<S>;
        }
    )+};
}

impl_halves!(
    Simd4 => Simd2,
    Simd8 => Simd4,
    Simd16 => Simd8,
    Simd32 => Simd16,
    Simd64 => Simd32,
);
