//! Scalar capability registry
//!
//! Each scalar kind declares its mask-scalar kind and its storage for all
//! seven widths. Capabilities are layered:
//!
//! ```text
//! SimdScalar ─ SimdOrdered ─ SimdNumeric ─┬─ SimdInteger ─ SimdMaskScalar
//!                                         └─ SimdFloat
//! ```
//!
//! Vector operations that need a capability are bounded on it, so using
//! bitwise AND on `Simd4<f32>` or `%` on `Simd4<f64>` fails to compile.

use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use crate::error::ArithmeticFault;
use crate::storage::SimdStorage;

/// A lane type usable in every vector width
pub trait SimdScalar:
    Copy + Default + PartialEq + Debug + Display + Send + Sync + 'static
{
    /// Signed integer of the same bit width holding `-1` / `0` mask lanes
    type MaskScalar: SimdMaskScalar;

    /// Storage for 2 lanes
    type Storage2: SimdStorage<Scalar = Self>;
    /// Storage for 3 lanes
    type Storage3: SimdStorage<Scalar = Self>;
    /// Storage for 4 lanes
    type Storage4: SimdStorage<Scalar = Self>;
    /// Storage for 8 lanes
    type Storage8: SimdStorage<Scalar = Self>;
    /// Storage for 16 lanes
    type Storage16: SimdStorage<Scalar = Self>;
    /// Storage for 32 lanes
    type Storage32: SimdStorage<Scalar = Self>;
    /// Storage for 64 lanes
    type Storage64: SimdStorage<Scalar = Self>;

    /// Feed this lane into a hasher; lanes that compare equal must hash equally
    fn hash_lane<H: Hasher>(self, state: &mut H);
}

/// Scalars supporting `<`
pub trait SimdOrdered: SimdScalar + PartialOrd {}

/// Scalars with arithmetic identities and division
///
/// Bounded random sampling is a separate `rand` capability that not every
/// numeric kind has (`isize` has no uniform sampler).
pub trait SimdNumeric: SimdOrdered + Div<Output = Self> {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    /// Divide, reporting integer faults instead of panicking
    ///
    /// Floating-point kinds never fail; they produce IEEE results.
    fn try_lane_div(self, rhs: Self) -> Result<Self, ArithmeticFault>;
}

/// Fixed-width two's complement integers
pub trait SimdInteger:
    SimdNumeric
    + Eq
    + Ord
    + Hash
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Rem<Output = Self>
{
    /// Bit width
    const BITS: u32;

    /// Addition truncated to `BITS`
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Subtraction truncated to `BITS`
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Multiplication truncated to `BITS`
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Left shift by `rhs mod BITS`
    fn wrapping_shl(self, rhs: Self) -> Self;
    /// Right shift by `rhs mod BITS`, arithmetic for signed kinds
    fn wrapping_shr(self, rhs: Self) -> Self;
    /// Remainder, reporting faults instead of panicking
    fn try_lane_rem(self, rhs: Self) -> Result<Self, ArithmeticFault>;
    /// Number of leading zero bits
    fn leading_zeros(self) -> Self;
    /// Number of trailing zero bits
    fn trailing_zeros(self) -> Self;
    /// Number of set bits
    fn count_ones(self) -> Self;
}

/// Integer kinds that carry mask lanes
pub trait SimdMaskScalar: SimdInteger + SimdScalar<MaskScalar = Self> {
    /// All bits set
    const TRUE: Self;
    /// All bits clear
    const FALSE: Self;

    /// `TRUE` or `FALSE`
    #[inline]
    fn from_bool(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Whether the lane reads as true (sign bit set)
    #[inline]
    fn is_set(self) -> bool {
        self < Self::FALSE
    }
}

/// IEEE 754 floating-point kinds
pub trait SimdFloat:
    SimdNumeric + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// `self * a + b` with a single rounding
    fn mul_add(self, a: Self, b: Self) -> Self;
    /// Square root; negative input yields NaN
    fn sqrt(self) -> Self;
    /// Round to an integral value using `rule`
    fn round_with(self, rule: RoundingRule) -> Self;
}

/// Rounding rules for [`SimdFloat::round_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingRule {
    /// Nearest integer; halfway cases away from zero
    ToNearestOrAwayFromZero,
    /// Nearest integer; halfway cases to the even neighbour
    ToNearestOrEven,
    /// Toward positive infinity
    Up,
    /// Toward negative infinity
    Down,
    /// Truncate
    TowardZero,
    /// Away from zero
    AwayFromZero,
}

macro_rules! storage_types {
    ($scalar:ty) => {
        type Storage2 = [$scalar; 2];
        type Storage3 = [$scalar; 3];
        type Storage4 = [$scalar; 4];
        type Storage8 = [$scalar; 8];
        type Storage16 = [$scalar; 16];
        type Storage32 = [$scalar; 32];
        type Storage64 = [$scalar; 64];
    };
}

macro_rules! register_integer {
    ($($int:ty => $mask:ty),+ $(,)?) => {$(
        impl SimdScalar for $int {
            type MaskScalar = $mask;
            storage_types!($int);

            #[inline]
            fn hash_lane<H: Hasher>(self, state: &mut H) {
                Hash::hash(&self, state);
            }
        }

        impl SimdOrdered for $int {}

        impl SimdNumeric for $int {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn try_lane_div(self, rhs: Self) -> Result<Self, ArithmeticFault> {
                if rhs == 0 {
                    return Err(ArithmeticFault::DivisionByZero);
                }
                self.checked_div(rhs).ok_or(ArithmeticFault::Overflow)
            }
        }

        impl SimdInteger for $int {
            const BITS: u32 = <$int>::BITS;

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$int>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$int>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$int>::wrapping_mul(self, rhs)
            }

            // `wrapping_shl` masks the amount to BITS - 1; the `as u32`
            // keeps the low bits of negative amounts intact.
            #[inline]
            fn wrapping_shl(self, rhs: Self) -> Self {
                <$int>::wrapping_shl(self, rhs as u32)
            }

            #[inline]
            fn wrapping_shr(self, rhs: Self) -> Self {
                <$int>::wrapping_shr(self, rhs as u32)
            }

            #[inline]
            fn try_lane_rem(self, rhs: Self) -> Result<Self, ArithmeticFault> {
                if rhs == 0 {
                    return Err(ArithmeticFault::DivisionByZero);
                }
                self.checked_rem(rhs).ok_or(ArithmeticFault::Overflow)
            }

            #[inline]
            fn leading_zeros(self) -> Self {
                <$int>::leading_zeros(self) as Self
            }

            #[inline]
            fn trailing_zeros(self) -> Self {
                <$int>::trailing_zeros(self) as Self
            }

            #[inline]
            fn count_ones(self) -> Self {
                <$int>::count_ones(self) as Self
            }
        }
    )+};
}

macro_rules! register_mask {
    ($($int:ty),+ $(,)?) => {$(
        impl SimdMaskScalar for $int {
            const TRUE: Self = -1;
            const FALSE: Self = 0;
        }
    )+};
}

macro_rules! register_float {
    ($($float:ty => $mask:ty),+ $(,)?) => {$(
        impl SimdScalar for $float {
            type MaskScalar = $mask;
            storage_types!($float);

            // -0.0 == 0.0, so both hash as +0.0.
            #[inline]
            fn hash_lane<H: Hasher>(self, state: &mut H) {
                let canonical = if self == 0.0 { 0.0 } else { self };
                canonical.to_bits().hash(state);
            }
        }

        impl SimdOrdered for $float {}

        impl SimdNumeric for $float {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn try_lane_div(self, rhs: Self) -> Result<Self, ArithmeticFault> {
                Ok(self / rhs)
            }
        }

        impl SimdFloat for $float {
            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                <$float>::mul_add(self, a, b)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$float>::sqrt(self)
            }

            #[inline]
            fn round_with(self, rule: RoundingRule) -> Self {
                match rule {
                    RoundingRule::ToNearestOrAwayFromZero => self.round(),
                    RoundingRule::ToNearestOrEven => self.round_ties_even(),
                    RoundingRule::Up => self.ceil(),
                    RoundingRule::Down => self.floor(),
                    RoundingRule::TowardZero => self.trunc(),
                    RoundingRule::AwayFromZero => {
                        if self.is_sign_negative() {
                            self.floor()
                        } else {
                            self.ceil()
                        }
                    }
                }
            }
        }
    )+};
}

register_integer!(
    i8 => i8,
    i16 => i16,
    i32 => i32,
    i64 => i64,
    isize => isize,
    u8 => i8,
    u16 => i16,
    u32 => i32,
    u64 => i64,
    usize => isize,
);

register_mask!(i8, i16, i32, i64, isize);

register_float!(f32 => i32, f64 => i64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<S: SimdScalar>(value: S) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_lane(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_mask_scalar_is_its_own_mask() {
        fn mask_of_mask<S: SimdScalar>() -> bool {
            std::any::TypeId::of::<S::MaskScalar>()
                == std::any::TypeId::of::<<S::MaskScalar as SimdScalar>::MaskScalar>()
        }
        assert!(mask_of_mask::<u8>());
        assert!(mask_of_mask::<f32>());
        assert!(mask_of_mask::<f64>());
        assert!(mask_of_mask::<usize>());
    }

    #[test]
    fn test_mask_scalar_widths_match() {
        fn same_width<S: SimdScalar>() -> bool {
            std::mem::size_of::<S>() == std::mem::size_of::<S::MaskScalar>()
        }
        assert!(same_width::<u8>());
        assert!(same_width::<u16>());
        assert!(same_width::<u32>());
        assert!(same_width::<u64>());
        assert!(same_width::<f32>());
        assert!(same_width::<f64>());
        assert!(same_width::<usize>());
    }

    #[test]
    fn test_mask_values() {
        assert_eq!(i8::from_bool(true), -1);
        assert_eq!(i64::from_bool(false), 0);
        assert!(i32::TRUE.is_set());
        assert!(!i32::FALSE.is_set());
        assert_eq!(i16::TRUE, !i16::FALSE);
    }

    #[test]
    fn test_try_lane_div() {
        assert_eq!(7i32.try_lane_div(2), Ok(3));
        assert_eq!(7i32.try_lane_div(0), Err(ArithmeticFault::DivisionByZero));
        assert_eq!(i8::MIN.try_lane_div(-1), Err(ArithmeticFault::Overflow));
        assert_eq!(1.0f32.try_lane_div(0.0), Ok(f32::INFINITY));
    }

    #[test]
    fn test_pointer_width_scalars() {
        assert_eq!(<isize as SimdMaskScalar>::TRUE, -1);
        assert!(isize::from_bool(true).is_set());
        assert_eq!(isize::MIN.try_lane_div(-1), Err(ArithmeticFault::Overflow));
        assert_eq!(9usize.try_lane_rem(0), Err(ArithmeticFault::DivisionByZero));
        assert_eq!(SimdInteger::wrapping_sub(0usize, 1), usize::MAX);
        assert_eq!(<usize as SimdNumeric>::ONE, 1);
    }

    #[test]
    fn test_try_lane_rem() {
        assert_eq!(7u16.try_lane_rem(4), Ok(3));
        assert_eq!(7u16.try_lane_rem(0), Err(ArithmeticFault::DivisionByZero));
        assert_eq!(i32::MIN.try_lane_rem(-1), Err(ArithmeticFault::Overflow));
    }

    #[test]
    fn test_wrapping_arithmetic() {
        assert_eq!(SimdInteger::wrapping_add(255u8, 1), 0);
        assert_eq!(SimdInteger::wrapping_sub(0u8, 1), 255);
        assert_eq!(SimdInteger::wrapping_mul(128u8, 2), 0);
        assert_eq!(SimdInteger::wrapping_add(i8::MAX, 1), i8::MIN);
    }

    #[test]
    fn test_shift_amount_wraps() {
        // 9 mod 8 == 1
        assert_eq!(SimdInteger::wrapping_shl(1u8, 9), 2);
        // -1 mod 8 == 7
        assert_eq!(SimdInteger::wrapping_shl(1i8, -1), i8::MIN);
        assert_eq!(SimdInteger::wrapping_shr(-128i8, 7), -1);
        assert_eq!(SimdInteger::wrapping_shr(128u8, 7), 1);
    }

    #[test]
    fn test_bit_counts() {
        assert_eq!(SimdInteger::leading_zeros(1u8), 7);
        assert_eq!(SimdInteger::trailing_zeros(8i32), 3);
        assert_eq!(SimdInteger::count_ones(-1i16), 16);
        assert_eq!(SimdInteger::leading_zeros(0u64), 64);
    }

    #[test]
    fn test_rounding_rules() {
        assert_eq!(2.5f64.round_with(RoundingRule::ToNearestOrAwayFromZero), 3.0);
        assert_eq!(2.5f64.round_with(RoundingRule::ToNearestOrEven), 2.0);
        assert_eq!((-2.5f32).round_with(RoundingRule::ToNearestOrEven), -2.0);
        assert_eq!(2.1f32.round_with(RoundingRule::Up), 3.0);
        assert_eq!(2.9f32.round_with(RoundingRule::Down), 2.0);
        assert_eq!((-2.9f32).round_with(RoundingRule::TowardZero), -2.0);
        assert_eq!((-2.1f32).round_with(RoundingRule::AwayFromZero), -3.0);
        assert_eq!(2.1f32.round_with(RoundingRule::AwayFromZero), 3.0);
    }

    #[test]
    fn test_float_sqrt_and_fma() {
        assert_eq!(SimdFloat::sqrt(9.0f32), 3.0);
        assert!(SimdFloat::sqrt(-1.0f64).is_nan());
        assert_eq!(SimdFloat::mul_add(2.0f64, 3.0, 1.0), 7.0);
    }

    #[test]
    fn test_signed_zero_hashes_equal() {
        assert_eq!(hash_of(0.0f32), hash_of(-0.0f32));
        assert_eq!(hash_of(0.0f64), hash_of(-0.0f64));
        assert_ne!(hash_of(1.0f64), hash_of(-1.0f64));
    }

    #[test]
    fn test_identities() {
        assert_eq!(<u32 as SimdNumeric>::ZERO, 0);
        assert_eq!(<i64 as SimdNumeric>::ONE, 1);
        assert_eq!(<f32 as SimdNumeric>::ONE, 1.0);
        assert_eq!(<u8 as SimdInteger>::BITS, 8);
        assert_eq!(<isize as SimdInteger>::BITS, isize::BITS);
    }
}
