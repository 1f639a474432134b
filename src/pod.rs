//! Plain-old-data casts, enabled with the `bytemuck` feature
//!
//! Every vector is `#[repr(transparent)]` over an array of its lanes, so a
//! vector of `Pod` lanes is itself `Pod` and slices of vectors can be viewed
//! as bytes or as flat lane slices.

use bytemuck::{Pod, Zeroable};

use crate::scalar::SimdScalar;
use crate::types::{Simd16, Simd2, Simd3, Simd32, Simd4, Simd64, Simd8};

macro_rules! impl_pod {
    ($($name:ident => $storage:ident),+ $(,)?) => {$(
        // SAFETY: transparent wrapper over storage that is itself Zeroable.
        unsafe impl<S> Zeroable for $name<S>
        where
            S: SimdScalar,
            S::$storage: Zeroable,
        {
        }

        // SAFETY: transparent wrapper over storage that is itself Pod.
        unsafe impl<S> Pod for $name<S>
        where
            S: SimdScalar,
            S::$storage: Pod,
        {
        }
    )+};
}

impl_pod!(
    Simd2 => Storage2,
    Simd3 => Storage3,
    Simd4 => Storage4,
    Simd8 => Storage8,
    Simd16 => Storage16,
    Simd32 => Storage32,
    Simd64 => Storage64,
);
