//! Lanewise boolean masks
//!
//! A mask is an integer vector whose lanes are either all-ones (true) or
//! all-zeros (false). Masks come out of the `simd_*` comparisons, combine with
//! `! & | ^`, and feed back into [`SimdVector::replace`]. None of the
//! operators short-circuit: every lane is evaluated.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use rand::Rng;

use crate::scalar::SimdMaskScalar;
use crate::vector::SimdVector;

/// Mask type produced by comparing two `V` vectors
pub type MaskOf<V> = SimdMask<<V as SimdVector>::MaskVector>;

/// Lanewise boolean vector backed by the integer vector `V`
///
/// # Examples
///
/// ```
/// use carril::{MaskOf, Simd4, SimdVector};
///
/// let small = Simd4::new(1.0f32, 5.0, 2.0, 8.0).simd_lt(3.0f32);
/// let even: MaskOf<Simd4<f32>> = [true, false, true, false].into();
///
/// assert_eq!((small & even).to_array(), [true, false, true, false]);
/// assert_eq!((!small).to_array(), [false, true, false, true]);
/// assert!(small.any());
/// assert!(!small.all());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SimdMask<V> {
    lanes: V,
}

impl<V> SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    /// Number of lanes
    pub const SCALAR_COUNT: usize = V::SCALAR_COUNT;

    /// Every lane set to `value`
    #[inline]
    pub fn splat(value: bool) -> Self {
        Self {
            lanes: V::splat(<V::Scalar as SimdMaskScalar>::from_bool(value)),
        }
    }

    /// Every lane true
    #[inline]
    pub fn all_true() -> Self {
        Self::splat(true)
    }

    /// Every lane false
    #[inline]
    pub fn all_false() -> Self {
        Self::splat(false)
    }

    /// Build a mask from a predicate on the lane index
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        Self {
            lanes: V::from_fn(|index| <V::Scalar as SimdMaskScalar>::from_bool(f(index))),
        }
    }

    /// Number of lanes
    #[inline]
    pub fn scalar_count(&self) -> usize {
        V::SCALAR_COUNT
    }

    /// Lane `index` as a bool
    ///
    /// # Panics
    ///
    /// Panics if `index >= SCALAR_COUNT`.
    #[inline]
    #[track_caller]
    pub fn lane(&self, index: usize) -> bool {
        self.lanes.lane(index).is_set()
    }

    /// Set lane `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= SCALAR_COUNT`.
    #[inline]
    #[track_caller]
    pub fn set_lane(&mut self, index: usize, value: bool) {
        self.lanes
            .set_lane(index, <V::Scalar as SimdMaskScalar>::from_bool(value));
    }

    /// Whether any lane is true
    pub fn any(&self) -> bool {
        self.lanes.indices().any(|index| self.lane(index))
    }

    /// Whether every lane is true
    pub fn all(&self) -> bool {
        self.lanes.indices().all(|index| self.lane(index))
    }

    /// Lanes as booleans in index order
    pub fn to_vec(&self) -> Vec<bool> {
        self.lanes.indices().map(|index| self.lane(index)).collect()
    }

    /// The backing integer vector (`-1` for true, `0` for false)
    #[inline]
    pub fn into_vector(self) -> V {
        self.lanes
    }

    /// Independent fair coin flip per lane using the thread-local generator
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Independent fair coin flip per lane using `rng`
    pub fn random_with<G>(rng: &mut G) -> Self
    where
        G: Rng + ?Sized,
    {
        Self::from_fn(|_| rng.random::<bool>())
    }
}

impl<V> Default for SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    fn default() -> Self {
        Self::all_false()
    }
}

impl<V> fmt::Debug for SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("SimdMask");
        for index in self.lanes.indices() {
            tuple.field(&self.lane(index));
        }
        tuple.finish()
    }
}

impl<V> fmt::Display for SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SimdMask(")?;
        for index in self.lanes.indices() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.lane(index))?;
        }
        f.write_str(")")
    }
}

impl<V> Not for SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            lanes: self.lanes.map(|lane| !lane),
        }
    }
}

macro_rules! mask_binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $lane_op:tt) => {
        impl<V> $op for SimdMask<V>
        where
            V: SimdVector,
            V::Scalar: SimdMaskScalar,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self {
                    lanes: self.lanes.zip_map(rhs.lanes, |a, b| a $lane_op b),
                }
            }
        }

        impl<V> $op<bool> for SimdMask<V>
        where
            V: SimdVector,
            V::Scalar: SimdMaskScalar,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: bool) -> Self {
                $op::$method(self, Self::splat(rhs))
            }
        }

        impl<V> $op<SimdMask<V>> for bool
        where
            V: SimdVector,
            V::Scalar: SimdMaskScalar,
        {
            type Output = SimdMask<V>;

            #[inline]
            fn $method(self, rhs: SimdMask<V>) -> SimdMask<V> {
                $op::$method(SimdMask::splat(self), rhs)
            }
        }

        impl<V> $op_assign for SimdMask<V>
        where
            V: SimdVector,
            V::Scalar: SimdMaskScalar,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }

        impl<V> $op_assign<bool> for SimdMask<V>
        where
            V: SimdVector,
            V::Scalar: SimdMaskScalar,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: bool) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

mask_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
mask_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
mask_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::Simd16;
    use proptest::prelude::*;

    type Mask16 = SimdMask<Simd16<i8>>;

    fn mask_from(bits: [bool; 16]) -> Mask16 {
        SimdMask::from(bits)
    }

    // Property test: double negation is identity
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_double_negation(bits in prop::array::uniform16(any::<bool>())) {
            let m = mask_from(bits);
            prop_assert_eq!(!!m, m);
        }
    }

    // Property test: identities with all-true / all-false
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_identities(bits in prop::array::uniform16(any::<bool>())) {
            let m = mask_from(bits);
            prop_assert_eq!(m & Mask16::all_true(), m);
            prop_assert_eq!(m | Mask16::all_false(), m);
            prop_assert_eq!(m ^ m, Mask16::all_false());
        }
    }

    // Property test: De Morgan's laws hold lanewise
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_de_morgan(
            a in prop::array::uniform16(any::<bool>()),
            b in prop::array::uniform16(any::<bool>())
        ) {
            let (ma, mb) = (mask_from(a), mask_from(b));
            prop_assert_eq!(!(ma & mb), !ma | !mb);
            prop_assert_eq!(!(ma | mb), !ma & !mb);
        }
    }

    // Property test: lanes match scalar boolean logic
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_lanes_match_bool_logic(
            a in prop::array::uniform16(any::<bool>()),
            b in prop::array::uniform16(any::<bool>())
        ) {
            let (and, or, xor) = {
                let (ma, mb) = (mask_from(a), mask_from(b));
                (ma & mb, ma | mb, ma ^ mb)
            };
            for i in 0..16 {
                prop_assert_eq!(and.lane(i), a[i] & b[i]);
                prop_assert_eq!(or.lane(i), a[i] | b[i]);
                prop_assert_eq!(xor.lane(i), a[i] ^ b[i]);
            }
        }
    }
}
