//! Serde support, enabled with the `serde` feature
//!
//! Vectors serialize as fixed-length tuples of their lanes, so JSON sees a
//! plain array. Masks serialize as tuples of booleans.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::mask::SimdMask;
use crate::scalar::{SimdMaskScalar, SimdScalar};
use crate::types::{Simd16, Simd2, Simd3, Simd32, Simd4, Simd64, Simd8};
use crate::vector::SimdVector;

fn serialize_lanes<V, Se>(vector: &V, serializer: Se) -> Result<Se::Ok, Se::Error>
where
    V: SimdVector,
    V::Scalar: Serialize,
    Se: Serializer,
{
    let mut tuple = serializer.serialize_tuple(V::SCALAR_COUNT)?;
    for index in vector.indices() {
        tuple.serialize_element(&vector.lane(index))?;
    }
    tuple.end()
}

struct LanesVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for LanesVisitor<V>
where
    V: SimdVector,
    V::Scalar: Deserialize<'de>,
{
    type Value = V;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} lanes", V::SCALAR_COUNT)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<V, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut vector = V::zeroed();
        for index in 0..V::SCALAR_COUNT {
            let lane = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
            vector.set_lane(index, lane);
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(V::SCALAR_COUNT + 1, &self));
        }
        Ok(vector)
    }
}

struct MaskVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for MaskVisitor<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    type Value = SimdMask<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} booleans", V::SCALAR_COUNT)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<SimdMask<V>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut mask = SimdMask::all_false();
        for index in 0..V::SCALAR_COUNT {
            let lane = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
            mask.set_lane(index, lane);
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(V::SCALAR_COUNT + 1, &self));
        }
        Ok(mask)
    }
}

impl<V> Serialize for SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        let mut tuple = serializer.serialize_tuple(V::SCALAR_COUNT)?;
        for index in 0..V::SCALAR_COUNT {
            tuple.serialize_element(&self.lane(index))?;
        }
        tuple.end()
    }
}

impl<'de, V> Deserialize<'de> for SimdMask<V>
where
    V: SimdVector,
    V::Scalar: SimdMaskScalar,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(V::SCALAR_COUNT, MaskVisitor(PhantomData))
    }
}

macro_rules! impl_serde {
    ($($name:ident),+) => {$(
        impl<S> Serialize for $name<S>
        where
            S: SimdScalar + Serialize,
        {
            fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
                serialize_lanes(self, serializer)
            }
        }

        impl<'de, S> Deserialize<'de> for $name<S>
        where
            S: SimdScalar + Deserialize<'de>,
        {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_tuple(
                    <Self as SimdVector>::SCALAR_COUNT,
                    LanesVisitor(PhantomData),
                )
            }
        }
    )+};
}

impl_serde!(Simd2, Simd3, Simd4, Simd8, Simd16, Simd32, Simd64);
