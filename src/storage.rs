//! Fixed-capacity lane storage
//!
//! Every (width, scalar) pair owns exactly one storage value. Storage never
//! checks indices: the concrete vector types validate `index < SCALAR_COUNT`
//! before forwarding here.

/// Backing buffer for one vector value
pub trait SimdStorage: Copy + Send + Sync + 'static {
    /// Lane type held by this storage
    type Scalar: Copy;

    /// Number of lanes
    const SCALAR_COUNT: usize;

    /// Storage with every lane set to the scalar's default (zero)
    fn zeroed() -> Self;

    /// Borrow lane `index`
    fn lane_ref(&self, index: usize) -> &Self::Scalar;

    /// Mutably borrow lane `index`
    fn lane_mut(&mut self, index: usize) -> &mut Self::Scalar;

    /// Read lane `index`
    #[inline]
    fn lane(&self, index: usize) -> Self::Scalar {
        *self.lane_ref(index)
    }

    /// Overwrite lane `index`
    #[inline]
    fn set_lane(&mut self, index: usize, value: Self::Scalar) {
        *self.lane_mut(index) = value;
    }
}

impl<S, const N: usize> SimdStorage for [S; N]
where
    S: Copy + Default + Send + Sync + 'static,
{
    type Scalar = S;

    const SCALAR_COUNT: usize = N;

    #[inline]
    fn zeroed() -> Self {
        [S::default(); N]
    }

    #[inline]
    fn lane_ref(&self, index: usize) -> &S {
        &self[index]
    }

    #[inline]
    fn lane_mut(&mut self, index: usize) -> &mut S {
        &mut self[index]
    }
}
