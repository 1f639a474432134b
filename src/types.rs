//! The seven concrete vector widths
//!
//! `Simd2`, `Simd3`, `Simd4`, `Simd8`, `Simd16`, `Simd32` and `Simd64` are
//! generated by one macro. Each is a transparent wrapper around the storage
//! its scalar registers for that width, so a `Simd4<f32>` is laid out exactly
//! like `[f32; 4]`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::literal::parse_lanes;
use crate::mask::SimdMask;
use crate::scalar::{SimdMaskScalar, SimdScalar};
use crate::storage::SimdStorage;
use crate::vector::SimdVector;
use crate::SimdError;

#[inline]
#[track_caller]
fn check_index(index: usize, lanes: usize) {
    if index >= lanes {
        panic!("{}", SimdError::IndexOutOfRange { index, lanes });
    }
}

macro_rules! simd_type {
    ($(#[$doc:meta])* $name:ident, $storage:ident, $lanes:literal, [$($arg:ident),+]) => {
        $(#[$doc])*
        #[repr(transparent)]
        pub struct $name<S: SimdScalar> {
            storage: S::$storage,
        }

        impl<S: SimdScalar> $name<S> {
            /// Number of lanes
            pub const LANES: usize = $lanes;

            /// Vector from one value per lane
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub fn new($($arg: S),+) -> Self {
                Self::from_array([$($arg),+])
            }

            /// Vector from an array of lanes
            #[inline]
            pub fn from_array(lanes: [S; $lanes]) -> Self {
                let mut storage = <S::$storage as SimdStorage>::zeroed();
                for (index, value) in lanes.into_iter().enumerate() {
                    storage.set_lane(index, value);
                }
                Self { storage }
            }

            /// Lanes as an array
            #[inline]
            pub fn to_array(&self) -> [S; $lanes] {
                std::array::from_fn(|index| self.storage.lane(index))
            }
        }

        impl<S: SimdScalar> SimdVector for $name<S> {
            type Scalar = S;
            type Storage = S::$storage;
            type MaskVector = $name<S::MaskScalar>;

            const SCALAR_COUNT: usize = $lanes;

            #[inline]
            fn from_storage(storage: Self::Storage) -> Self {
                Self { storage }
            }

            #[inline]
            fn storage(&self) -> &Self::Storage {
                &self.storage
            }

            #[inline]
            fn storage_mut(&mut self) -> &mut Self::Storage {
                &mut self.storage
            }

            #[inline]
            #[track_caller]
            fn lane(&self, index: usize) -> S {
                check_index(index, $lanes);
                self.storage.lane(index)
            }

            #[inline]
            #[track_caller]
            fn set_lane(&mut self, index: usize, value: S) {
                check_index(index, $lanes);
                self.storage.set_lane(index, value);
            }
        }

        impl<S: SimdScalar> Clone for $name<S> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<S: SimdScalar> Copy for $name<S> {}

        impl<S: SimdScalar> Default for $name<S> {
            #[inline]
            fn default() -> Self {
                <Self as SimdVector>::zeroed()
            }
        }

        impl<S: SimdScalar> PartialEq for $name<S> {
            fn eq(&self, other: &Self) -> bool {
                (0..$lanes).all(|index| self.storage.lane(index) == other.storage.lane(index))
            }
        }

        impl<S: SimdScalar + Eq> Eq for $name<S> {}

        impl<S: SimdScalar> Hash for $name<S> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                for index in 0..$lanes {
                    self.storage.lane(index).hash_lane(state);
                }
            }
        }

        impl<S: SimdScalar> fmt::Debug for $name<S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut tuple = f.debug_tuple(stringify!($name));
                for index in 0..$lanes {
                    tuple.field(self.storage.lane_ref(index));
                }
                tuple.finish()
            }
        }

        impl<S: SimdScalar> fmt::Display for $name<S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "("))?;
                for index in 0..$lanes {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", self.storage.lane(index))?;
                }
                f.write_str(")")
            }
        }

        impl<S: SimdScalar + FromStr> FromStr for $name<S> {
            type Err = SimdError;

            fn from_str(text: &str) -> Result<Self, SimdError> {
                Self::try_from_lanes(parse_lanes::<S>(text, stringify!($name))?)
            }
        }

        impl<S: SimdScalar> Index<usize> for $name<S> {
            type Output = S;

            #[inline]
            #[track_caller]
            fn index(&self, index: usize) -> &S {
                check_index(index, $lanes);
                self.storage.lane_ref(index)
            }
        }

        impl<S: SimdScalar> IndexMut<usize> for $name<S> {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut S {
                check_index(index, $lanes);
                self.storage.lane_mut(index)
            }
        }

        impl<S: SimdScalar> From<S> for $name<S> {
            #[inline]
            fn from(value: S) -> Self {
                Self::splat(value)
            }
        }

        impl<S: SimdScalar> From<[S; $lanes]> for $name<S> {
            #[inline]
            fn from(lanes: [S; $lanes]) -> Self {
                Self::from_array(lanes)
            }
        }

        impl<'a, S: SimdScalar> TryFrom<&'a [S]> for $name<S> {
            type Error = SimdError;

            #[inline]
            fn try_from(slice: &'a [S]) -> Result<Self, SimdError> {
                Self::try_from_slice(slice)
            }
        }

        impl<S: SimdScalar> FromIterator<S> for $name<S> {
            /// # Panics
            ///
            /// Panics unless the iterator yields exactly `LANES` values.
            #[track_caller]
            fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
                Self::from_lanes(iter)
            }
        }

        impl<M: SimdMaskScalar> From<[bool; $lanes]> for SimdMask<$name<M>> {
            #[inline]
            fn from(lanes: [bool; $lanes]) -> Self {
                SimdMask::from_fn(|index| lanes[index])
            }
        }

        impl<M: SimdMaskScalar> SimdMask<$name<M>> {
            /// Lanes as an array of booleans
            #[inline]
            pub fn to_array(&self) -> [bool; $lanes] {
                std::array::from_fn(|index| self.lane(index))
            }
        }
    };
}

macro_rules! component_accessors {
    ($name:ident { $($get:ident, $set:ident => $index:literal),+ }) => {
        impl<S: SimdScalar> $name<S> {
            $(
                #[doc = concat!("Lane ", stringify!($index))]
                #[inline]
                pub fn $get(&self) -> S {
                    self.storage.lane($index)
                }

                #[doc = concat!("Overwrite lane ", stringify!($index))]
                #[inline]
                pub fn $set(&mut self, value: S) {
                    self.storage.set_lane($index, value);
                }
            )+
        }
    };
}

simd_type!(
    /// Two lanes
    Simd2,
    Storage2,
    2,
    [x, y]
);

simd_type!(
    /// Three lanes
    ///
    /// Stored as exactly three values; there is no hidden fourth lane.
    Simd3,
    Storage3,
    3,
    [x, y, z]
);

simd_type!(
    /// Four lanes
    ///
    /// # Examples
    ///
    /// ```
    /// use carril::{Simd4, SimdVector};
    ///
    /// let mut v = Simd4::new(1.0f32, 2.0, 3.0, 4.0);
    /// v[3] = 8.0;
    /// assert_eq!(v.w(), 8.0);
    /// assert_eq!(v.to_string(), "Simd4(1, 2, 3, 8)");
    /// assert_eq!("Simd4(1, 2, 3, 8)".parse::<Simd4<f32>>().unwrap(), v);
    /// assert_eq!(v.reduce_max(), 8.0);
    /// ```
    Simd4,
    Storage4,
    4,
    [x, y, z, w]
);

simd_type!(
    /// Eight lanes
    Simd8,
    Storage8,
    8,
    [v0, v1, v2, v3, v4, v5, v6, v7]
);

simd_type!(
    /// Sixteen lanes
    Simd16,
    Storage16,
    16,
    [
        v0, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15
    ]
);

simd_type!(
    /// Thirty-two lanes
    Simd32,
    Storage32,
    32,
    [
        v0, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15,
        v16, v17, v18, v19, v20, v21, v22, v23, v24, v25, v26, v27, v28, v29, v30, v31
    ]
);

simd_type!(
    /// Sixty-four lanes
    Simd64,
    Storage64,
    64,
    [
        v0, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15,
        v16, v17, v18, v19, v20, v21, v22, v23, v24, v25, v26, v27, v28, v29, v30, v31,
        v32, v33, v34, v35, v36, v37, v38, v39, v40, v41, v42, v43, v44, v45, v46, v47,
        v48, v49, v50, v51, v52, v53, v54, v55, v56, v57, v58, v59, v60, v61, v62, v63
    ]
);

component_accessors!(Simd2 { x, set_x => 0, y, set_y => 1 });
component_accessors!(Simd3 { x, set_x => 0, y, set_y => 1, z, set_z => 2 });
component_accessors!(Simd4 { x, set_x => 0, y, set_y => 1, z, set_z => 2, w, set_w => 3 });

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_and_to_array() {
        assert_eq!(Simd2::new(1u8, 2).to_array(), [1, 2]);
        assert_eq!(Simd3::new(1.0f64, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
        let v = Simd8::new(0i16, 1, 2, 3, 4, 5, 6, 7);
        assert_eq!(v, Simd8::from_array([0, 1, 2, 3, 4, 5, 6, 7]));
    }

    #[test]
    fn test_component_accessors() {
        let mut v = Simd4::new(1i32, 2, 3, 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        v.set_x(10);
        v.set_w(40);
        assert_eq!(v, Simd4::new(10, 2, 3, 40));

        let mut p = Simd2::new(0.5f32, 1.5);
        p.set_y(-1.0);
        assert_eq!(p.y(), -1.0);

        let t = Simd3::new(7u64, 8, 9);
        assert_eq!(t.z(), 9);
    }

    #[test]
    fn test_index() {
        let mut v = Simd16::<u32>::from_fn(|i| i as u32);
        assert_eq!(v[15], 15);
        v[0] = 99;
        assert_eq!(v.lane(0), 99);
        v.set_lane(1, 42);
        assert_eq!(v[1], 42);
    }

    #[test]
    #[should_panic(expected = "Lane index 3 out of range for 3 lanes")]
    fn test_index_out_of_range_panics() {
        let v = Simd3::new(1i8, 2, 3);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "Lane index 64 out of range for 64 lanes")]
    fn test_set_lane_out_of_range_panics() {
        let mut v = Simd64::<f32>::zeroed();
        v.set_lane(64, 1.0);
    }

    #[test]
    fn test_conversions() {
        let v: Simd4<i64> = 5i64.into();
        assert_eq!(v, Simd4::splat(5));

        let v: Simd2<f32> = [1.0, 2.0].into();
        assert_eq!(v, Simd2::new(1.0, 2.0));

        let slice: &[u16] = &[1, 2, 3];
        assert_eq!(Simd3::<u16>::try_from(slice), Ok(Simd3::new(1, 2, 3)));
        assert_eq!(
            Simd4::<u16>::try_from(slice),
            Err(SimdError::LaneCountMismatch {
                expected: 4,
                actual: 3
            })
        );

        let collected: Simd8<u8> = (1..=8).collect();
        assert_eq!(collected.to_array(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    #[should_panic(expected = "Lane count mismatch: expected 4, got 5")]
    fn test_collect_wrong_length_panics() {
        let _: Simd4<i32> = (0..5).collect();
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Simd32::<i32>::default(), Simd32::splat(0));
        assert_eq!(Simd3::<f64>::default(), Simd3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Simd2::new(0.0f32, 1.0);
        let b = Simd2::new(-0.0f32, 1.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let nan = Simd2::new(f32::NAN, 1.0);
        let same_bits = nan;
        assert_ne!(nan, same_bits);

        let set: HashSet<Simd4<u8>> = [Simd4::splat(1), Simd4::splat(1), Simd4::splat(2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let v = Simd4::new(1i32, -2, 3, 4);
        assert_eq!(v.to_string(), "Simd4(1, -2, 3, 4)");
        assert_eq!(format!("{v:?}"), "Simd4(1, -2, 3, 4)");
        assert_eq!(Simd2::new(0.5f64, 2.0).to_string(), "Simd2(0.5, 2)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Simd3(1, 2, 3)".parse::<Simd3<u8>>(), Ok(Simd3::new(1, 2, 3)));
        assert_eq!("(1.5, -2)".parse::<Simd2<f32>>(), Ok(Simd2::new(1.5, -2.0)));
        assert_eq!(
            "Simd3(1, 2)".parse::<Simd3<u8>>(),
            Err(SimdError::LaneCountMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!("Simd2(1, x)".parse::<Simd2<i32>>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let v = Simd16::<i64>::from_fn(|i| i as i64 * -1000);
        assert_eq!(v.to_string().parse::<Simd16<i64>>(), Ok(v));
    }

    #[test]
    fn test_mask_arrays() {
        let mask = SimdMask::<Simd3<i32>>::from([true, false, true]);
        assert_eq!(mask.to_array(), [true, false, true]);
        assert_eq!(mask.into_vector(), Simd3::new(-1, 0, -1));
    }

    #[test]
    fn test_pointer_width_vectors() {
        let a = Simd4::new(-2isize, 0, 5, isize::MAX);
        let b: Simd4<isize> = "Simd4(-2, 1, 5, 0)".parse().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.simd_eq(b).to_array(), [true, false, true, false]);
        let below: SimdMask<Simd4<isize>> = a.simd_lt(b);
        assert_eq!(below.to_array(), [false, true, false, false]);
        assert_eq!(a.wrapping_add(1isize)[3], isize::MIN);

        let u = Simd4::new(10usize, 20, 30, 40);
        assert_eq!(u, Simd4::from_array([10, 20, 30, 40]));
        assert_eq!(u / 10usize, Simd4::new(1, 2, 3, 4));
        assert_eq!(u % 7usize, Simd4::new(3, 6, 2, 5));
        let over: SimdMask<Simd4<isize>> = u.simd_gt(25usize);
        assert_eq!(over.into_vector(), Simd4::new(0isize, 0, -1, -1));
        assert_eq!(hash_of(&u), hash_of(&Simd4::new(10usize, 20, 30, 40)));
    }
}
