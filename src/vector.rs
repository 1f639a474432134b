//! Vector capability and the elementwise operation layer
//!
//! [`SimdVector`] is implemented once per width in [`crate::types`]. Everything
//! else in this file is a default method written against the capability, so
//! `Simd2` through `Simd64` share one implementation of each operation.
//! Operations that need more than storage are gated on the scalar capability
//! (`where Self::Scalar: SimdInteger` and friends).

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Range;

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::Rng;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::mask::{MaskOf, SimdMask};
use crate::scalar::{
    RoundingRule, SimdFloat, SimdInteger, SimdNumeric, SimdOrdered, SimdScalar,
};
use crate::storage::SimdStorage;
use crate::{Result, SimdError};

/// A fixed-width vector of `SCALAR_COUNT` lanes
///
/// # Examples
///
/// ```
/// use carril::{Simd4, SimdVector};
///
/// let a = Simd4::new(1i32, 2, 3, 4);
/// let b = Simd4::new(3i32, 2, 1, 0);
/// let mask = a.simd_eq(b);
///
/// assert_eq!(mask.to_array(), [false, true, false, false]);
/// assert_eq!(a.replacing(0i32, mask), Simd4::new(1, 0, 3, 4));
/// ```
pub trait SimdVector: Copy + Default + PartialEq + Hash + Debug + Display + Send + Sync + 'static {
    /// Lane type
    type Scalar: SimdScalar;

    /// Backing storage
    type Storage: SimdStorage<Scalar = Self::Scalar>;

    /// Same-width vector of mask scalars backing [`MaskOf<Self>`]
    type MaskVector: SimdVector<Scalar = <Self::Scalar as SimdScalar>::MaskScalar>;

    /// Number of lanes
    const SCALAR_COUNT: usize;

    /// Wrap existing storage
    fn from_storage(storage: Self::Storage) -> Self;

    /// Borrow the storage
    fn storage(&self) -> &Self::Storage;

    /// Mutably borrow the storage
    fn storage_mut(&mut self) -> &mut Self::Storage;

    /// Read lane `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= SCALAR_COUNT`.
    fn lane(&self, index: usize) -> Self::Scalar;

    /// Overwrite lane `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= SCALAR_COUNT`.
    fn set_lane(&mut self, index: usize, value: Self::Scalar);

    // ------------------------------------------------------------------
    // Construction and access
    // ------------------------------------------------------------------

    /// Number of lanes
    #[inline]
    fn scalar_count(&self) -> usize {
        Self::SCALAR_COUNT
    }

    /// Valid lane indices, `0..SCALAR_COUNT`
    #[inline]
    fn indices(&self) -> Range<usize> {
        0..Self::SCALAR_COUNT
    }

    /// Every lane set to the scalar's default (zero)
    #[inline]
    fn zeroed() -> Self {
        Self::from_storage(Self::Storage::zeroed())
    }

    /// Every lane set to `value`
    #[inline]
    fn splat(value: Self::Scalar) -> Self {
        Self::from_fn(|_| value)
    }

    /// Build a vector from a function of the lane index
    #[inline]
    fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> Self::Scalar,
    {
        let mut storage = Self::Storage::zeroed();
        for index in 0..Self::SCALAR_COUNT {
            storage.set_lane(index, f(index));
        }
        Self::from_storage(storage)
    }

    /// Lane `index`, or `None` outside `0..SCALAR_COUNT`
    #[inline]
    fn get(&self, index: usize) -> Option<Self::Scalar> {
        (index < Self::SCALAR_COUNT).then(|| self.storage().lane(index))
    }

    /// Build a vector from a sequence of exactly `SCALAR_COUNT` values
    ///
    /// At most `SCALAR_COUNT + 1` values are pulled, so an unbounded
    /// sequence fails instead of being drained.
    ///
    /// # Errors
    ///
    /// Returns [`SimdError::LaneCountMismatch`] if the sequence is shorter
    /// or longer than the vector. A long sequence reports
    /// `actual: SCALAR_COUNT + 1`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(lanes = Self::SCALAR_COUNT)))]
    fn try_from_lanes<I>(lanes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self::Scalar>,
    {
        let mut lanes = lanes.into_iter();
        let mut storage = Self::Storage::zeroed();
        for index in 0..Self::SCALAR_COUNT {
            match lanes.next() {
                Some(value) => storage.set_lane(index, value),
                None => {
                    return Err(SimdError::LaneCountMismatch {
                        expected: Self::SCALAR_COUNT,
                        actual: index,
                    })
                }
            }
        }

        if lanes.next().is_some() {
            return Err(SimdError::LaneCountMismatch {
                expected: Self::SCALAR_COUNT,
                actual: Self::SCALAR_COUNT + 1,
            });
        }

        Ok(Self::from_storage(storage))
    }

    /// Build a vector from a sequence of exactly `SCALAR_COUNT` values
    ///
    /// # Panics
    ///
    /// Panics if the sequence length differs from `SCALAR_COUNT`.
    #[track_caller]
    fn from_lanes<I>(lanes: I) -> Self
    where
        I: IntoIterator<Item = Self::Scalar>,
    {
        match Self::try_from_lanes(lanes) {
            Ok(vector) => vector,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a vector from a slice of exactly `SCALAR_COUNT` values
    ///
    /// # Errors
    ///
    /// Returns [`SimdError::LaneCountMismatch`] on a length mismatch.
    #[inline]
    fn try_from_slice(slice: &[Self::Scalar]) -> Result<Self> {
        Self::try_from_lanes(slice.iter().copied())
    }

    /// Build a vector from a slice of exactly `SCALAR_COUNT` values
    ///
    /// # Panics
    ///
    /// Panics on a length mismatch.
    #[track_caller]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        Self::from_lanes(slice.iter().copied())
    }

    /// Lanes in index order
    fn to_vec(&self) -> Vec<Self::Scalar> {
        self.indices().map(|index| self.storage().lane(index)).collect()
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Apply `f` to every lane
    #[inline]
    fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        Self::from_fn(|index| f(self.storage().lane(index)))
    }

    /// Combine corresponding lanes of `self` and `rhs`
    #[inline]
    fn zip_map<F>(self, rhs: Self, mut f: F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        Self::from_fn(|index| f(self.storage().lane(index), rhs.storage().lane(index)))
    }

    /// Evaluate a lanewise predicate into a mask
    #[inline]
    fn lanewise_mask<F>(self, rhs: Self, mut f: F) -> MaskOf<Self>
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> bool,
    {
        SimdMask::from_fn(|index| f(self.storage().lane(index), rhs.storage().lane(index)))
    }

    // ------------------------------------------------------------------
    // Pointwise equality and selection
    // ------------------------------------------------------------------

    /// Lanes where `self[i] == rhs[i]`
    #[inline]
    fn simd_eq(self, rhs: impl Into<Self>) -> MaskOf<Self> {
        self.lanewise_mask(rhs.into(), |a, b| a == b)
    }

    /// Lanes where `self[i] != rhs[i]`
    #[inline]
    fn simd_ne(self, rhs: impl Into<Self>) -> MaskOf<Self> {
        self.lanewise_mask(rhs.into(), |a, b| a != b)
    }

    /// Take lanes of `other` wherever `mask` is set
    fn replace(&mut self, other: impl Into<Self>, mask: MaskOf<Self>) {
        let other = other.into();
        for index in 0..Self::SCALAR_COUNT {
            if mask.lane(index) {
                self.storage_mut().set_lane(index, other.storage().lane(index));
            }
        }
    }

    /// Copy of `self` with lanes of `other` wherever `mask` is set
    #[inline]
    #[must_use]
    fn replacing(mut self, other: impl Into<Self>, mask: MaskOf<Self>) -> Self {
        self.replace(other, mask);
        self
    }

    // ------------------------------------------------------------------
    // Ordered scalars
    // ------------------------------------------------------------------

    /// Lanes where `self[i] < rhs[i]`
    #[inline]
    fn simd_lt(self, rhs: impl Into<Self>) -> MaskOf<Self>
    where
        Self::Scalar: SimdOrdered,
    {
        self.lanewise_mask(rhs.into(), |a, b| a < b)
    }

    /// Lanes where `self[i] <= rhs[i]`
    #[inline]
    fn simd_le(self, rhs: impl Into<Self>) -> MaskOf<Self>
    where
        Self::Scalar: SimdOrdered,
    {
        self.lanewise_mask(rhs.into(), |a, b| a <= b)
    }

    /// Lanes where `self[i] > rhs[i]`
    #[inline]
    fn simd_gt(self, rhs: impl Into<Self>) -> MaskOf<Self>
    where
        Self::Scalar: SimdOrdered,
    {
        self.lanewise_mask(rhs.into(), |a, b| a > b)
    }

    /// Lanes where `self[i] >= rhs[i]`
    #[inline]
    fn simd_ge(self, rhs: impl Into<Self>) -> MaskOf<Self>
    where
        Self::Scalar: SimdOrdered,
    {
        self.lanewise_mask(rhs.into(), |a, b| a >= b)
    }

    /// Lanewise minimum; a NaN lane in `rhs` keeps the lane of `self`
    #[inline]
    #[must_use]
    fn pointwise_min(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdOrdered,
    {
        self.zip_map(rhs.into(), |a, b| if b < a { b } else { a })
    }

    /// Lanewise maximum; a NaN lane in `rhs` keeps the lane of `self`
    #[inline]
    #[must_use]
    fn pointwise_max(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdOrdered,
    {
        self.zip_map(rhs.into(), |a, b| if b > a { b } else { a })
    }

    /// Each lane limited to `[lower[i], upper[i]]`
    #[inline]
    #[must_use]
    fn clamped(self, lower: impl Into<Self>, upper: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdOrdered,
    {
        self.pointwise_max(lower).pointwise_min(upper)
    }

    /// In-place [`SimdVector::clamped`]
    #[inline]
    fn clamp(&mut self, lower: impl Into<Self>, upper: impl Into<Self>)
    where
        Self::Scalar: SimdOrdered,
    {
        *self = self.clamped(lower, upper);
    }

    /// Smallest lane
    fn reduce_min(self) -> Self::Scalar
    where
        Self::Scalar: SimdOrdered,
    {
        let mut minimum = self.storage().lane(0);
        for index in 1..Self::SCALAR_COUNT {
            let value = self.storage().lane(index);
            if value < minimum {
                minimum = value;
            }
        }
        minimum
    }

    /// Largest lane
    fn reduce_max(self) -> Self::Scalar
    where
        Self::Scalar: SimdOrdered,
    {
        let mut maximum = self.storage().lane(0);
        for index in 1..Self::SCALAR_COUNT {
            let value = self.storage().lane(index);
            if value > maximum {
                maximum = value;
            }
        }
        maximum
    }

    // ------------------------------------------------------------------
    // Numeric scalars
    // ------------------------------------------------------------------

    /// All lanes zero
    #[inline]
    fn zero() -> Self
    where
        Self::Scalar: SimdNumeric,
    {
        Self::splat(<Self::Scalar as SimdNumeric>::ZERO)
    }

    /// All lanes one
    #[inline]
    fn one() -> Self
    where
        Self::Scalar: SimdNumeric,
    {
        Self::splat(<Self::Scalar as SimdNumeric>::ONE)
    }

    /// Lanewise division that reports the lowest faulting lane
    ///
    /// # Errors
    ///
    /// For integer lanes, returns [`SimdError::DivisionByZero`] or
    /// [`SimdError::Overflow`] naming the lowest lane that failed. Float
    /// lanes never fail.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(lanes = Self::SCALAR_COUNT)))]
    fn try_div(self, rhs: impl Into<Self>) -> Result<Self>
    where
        Self::Scalar: SimdNumeric,
    {
        let rhs = rhs.into();
        let mut storage = Self::Storage::zeroed();
        for lane in 0..Self::SCALAR_COUNT {
            let quotient = self
                .storage()
                .lane(lane)
                .try_lane_div(rhs.storage().lane(lane))
                .map_err(|fault| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(lane, %fault, "lanewise division failed");
                    SimdError::in_lane(fault, lane)
                })?;
            storage.set_lane(lane, quotient);
        }
        Ok(Self::from_storage(storage))
    }

    /// Uniformly distributed lanes drawn from `range` with the thread-local generator
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    #[track_caller]
    fn random_in<R>(range: R) -> Self
    where
        Self::Scalar: SimdNumeric + SampleUniform,
        R: SampleRange<Self::Scalar> + Clone,
    {
        Self::random_in_with(range, &mut rand::rng())
    }

    /// Uniformly distributed lanes drawn from `range` with `rng`
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    #[track_caller]
    fn random_in_with<R, G>(range: R, rng: &mut G) -> Self
    where
        Self::Scalar: SimdNumeric + SampleUniform,
        R: SampleRange<Self::Scalar> + Clone,
        G: Rng + ?Sized,
    {
        assert!(!range.is_empty(), "cannot sample lanes from an empty range");
        Self::from_fn(|_| rng.random_range(range.clone()))
    }

    // ------------------------------------------------------------------
    // Fixed-width integers
    // ------------------------------------------------------------------

    /// Lanewise `&+`: addition truncated on overflow
    #[inline]
    #[must_use]
    fn wrapping_add(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.zip_map(rhs.into(), SimdInteger::wrapping_add)
    }

    /// Lanewise `&-`: subtraction truncated on overflow
    #[inline]
    #[must_use]
    fn wrapping_sub(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.zip_map(rhs.into(), SimdInteger::wrapping_sub)
    }

    /// Lanewise `&*`: multiplication truncated on overflow
    #[inline]
    #[must_use]
    fn wrapping_mul(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.zip_map(rhs.into(), SimdInteger::wrapping_mul)
    }

    /// Lanewise `&<<`: shift amount taken modulo the bit width
    #[inline]
    #[must_use]
    fn wrapping_shl(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.zip_map(rhs.into(), SimdInteger::wrapping_shl)
    }

    /// Lanewise `&>>`: shift amount taken modulo the bit width
    #[inline]
    #[must_use]
    fn wrapping_shr(self, rhs: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.zip_map(rhs.into(), SimdInteger::wrapping_shr)
    }

    /// In-place [`SimdVector::wrapping_add`]
    #[inline]
    fn wrapping_add_assign(&mut self, rhs: impl Into<Self>)
    where
        Self::Scalar: SimdInteger,
    {
        *self = self.wrapping_add(rhs);
    }

    /// In-place [`SimdVector::wrapping_sub`]
    #[inline]
    fn wrapping_sub_assign(&mut self, rhs: impl Into<Self>)
    where
        Self::Scalar: SimdInteger,
    {
        *self = self.wrapping_sub(rhs);
    }

    /// In-place [`SimdVector::wrapping_mul`]
    #[inline]
    fn wrapping_mul_assign(&mut self, rhs: impl Into<Self>)
    where
        Self::Scalar: SimdInteger,
    {
        *self = self.wrapping_mul(rhs);
    }

    /// In-place [`SimdVector::wrapping_shl`]
    #[inline]
    fn wrapping_shl_assign(&mut self, rhs: impl Into<Self>)
    where
        Self::Scalar: SimdInteger,
    {
        *self = self.wrapping_shl(rhs);
    }

    /// In-place [`SimdVector::wrapping_shr`]
    #[inline]
    fn wrapping_shr_assign(&mut self, rhs: impl Into<Self>)
    where
        Self::Scalar: SimdInteger,
    {
        *self = self.wrapping_shr(rhs);
    }

    /// Lanewise remainder that reports the lowest faulting lane
    ///
    /// # Errors
    ///
    /// Returns [`SimdError::DivisionByZero`] or [`SimdError::Overflow`]
    /// naming the lowest lane that failed.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(lanes = Self::SCALAR_COUNT)))]
    fn try_rem(self, rhs: impl Into<Self>) -> Result<Self>
    where
        Self::Scalar: SimdInteger,
    {
        let rhs = rhs.into();
        let mut storage = Self::Storage::zeroed();
        for lane in 0..Self::SCALAR_COUNT {
            let remainder = self
                .storage()
                .lane(lane)
                .try_lane_rem(rhs.storage().lane(lane))
                .map_err(|fault| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(lane, %fault, "lanewise remainder failed");
                    SimdError::in_lane(fault, lane)
                })?;
            storage.set_lane(lane, remainder);
        }
        Ok(Self::from_storage(storage))
    }

    /// Leading zero bits of each lane
    #[inline]
    #[must_use]
    fn leading_zeros(self) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.map(SimdInteger::leading_zeros)
    }

    /// Trailing zero bits of each lane
    #[inline]
    #[must_use]
    fn trailing_zeros(self) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.map(SimdInteger::trailing_zeros)
    }

    /// Set bits of each lane
    #[inline]
    #[must_use]
    fn count_ones(self) -> Self
    where
        Self::Scalar: SimdInteger,
    {
        self.map(SimdInteger::count_ones)
    }

    /// Sum of all lanes, truncated on overflow
    fn wrapping_reduce_sum(self) -> Self::Scalar
    where
        Self::Scalar: SimdInteger,
    {
        let mut total = <Self::Scalar as SimdNumeric>::ZERO;
        for index in 0..Self::SCALAR_COUNT {
            total = SimdInteger::wrapping_add(total, self.storage().lane(index));
        }
        total
    }

    // ------------------------------------------------------------------
    // Floating point
    // ------------------------------------------------------------------

    /// `self + a * b` with a single rounding per lane
    #[inline]
    #[must_use]
    fn adding_product(self, a: impl Into<Self>, b: impl Into<Self>) -> Self
    where
        Self::Scalar: SimdFloat,
    {
        let (a, b) = (a.into(), b.into());
        Self::from_fn(|index| {
            a.storage()
                .lane(index)
                .mul_add(b.storage().lane(index), self.storage().lane(index))
        })
    }

    /// In-place [`SimdVector::adding_product`]
    #[inline]
    fn add_product(&mut self, a: impl Into<Self>, b: impl Into<Self>)
    where
        Self::Scalar: SimdFloat,
    {
        *self = self.adding_product(a, b);
    }

    /// Lanewise square root; negative lanes become NaN
    #[inline]
    #[must_use]
    fn square_root(self) -> Self
    where
        Self::Scalar: SimdFloat,
    {
        self.map(SimdFloat::sqrt)
    }

    /// In-place [`SimdVector::square_root`]
    #[inline]
    fn form_square_root(&mut self)
    where
        Self::Scalar: SimdFloat,
    {
        *self = self.square_root();
    }

    /// Each lane rounded to an integral value using `rule`
    #[inline]
    #[must_use]
    fn rounded(self, rule: RoundingRule) -> Self
    where
        Self::Scalar: SimdFloat,
    {
        self.map(|lane| lane.round_with(rule))
    }

    /// In-place [`SimdVector::rounded`]
    #[inline]
    fn round(&mut self, rule: RoundingRule)
    where
        Self::Scalar: SimdFloat,
    {
        *self = self.rounded(rule);
    }

    /// Sum of all lanes, accumulated in index order
    fn reduce_sum(self) -> Self::Scalar
    where
        Self::Scalar: SimdFloat,
    {
        let mut total = <Self::Scalar as SimdNumeric>::ZERO;
        for index in 0..Self::SCALAR_COUNT {
            total = total + self.storage().lane(index);
        }
        total
    }
}
