//! Carril: Fixed-Width SIMD Vector Value Types
//!
//! **Carril** (Spanish: "lane") provides small fixed-width vectors of 2, 3, 4,
//! 8, 16, 32 or 64 lanes over the primitive integer and floating-point types,
//! with lanewise arithmetic, comparison masks and masked selection.
//!
//! # Design Principles
//!
//! - **Capabilities in the type system**: bitwise ops exist only on integer
//!   vectors, `sqrt` only on float vectors, and misuse fails to compile
//! - **One implementation, seven widths**: every operation is written once
//!   against [`SimdVector`] and shared by `Simd2` through `Simd64`
//! - **Value semantics**: vectors are `Copy`, compare by lanes and hash
//!   consistently with equality
//! - **Explicit overflow**: integer `+ - *` are spelled `wrapping_*`; integer
//!   division faults name the lowest offending lane
//!
//! # Quick Start
//!
//! ```rust
//! use carril::{Simd4, SimdVector};
//!
//! let a = Simd4::new(1.0f32, 2.0, 3.0, 4.0);
//! let b = Simd4::new(5.0f32, 6.0, 7.0, 8.0);
//!
//! let sum = a + b;
//! assert_eq!(sum.to_array(), [6.0, 8.0, 10.0, 12.0]);
//!
//! // Keep lanes above 8, replace the rest with zero
//! let small = sum.simd_le(8.0f32);
//! assert_eq!(sum.replacing(0.0f32, small), Simd4::new(0.0, 0.0, 10.0, 12.0));
//! ```
//!
//! # Cargo Features
//!
//! - `serde`: `Serialize`/`Deserialize` for vectors and masks
//! - `bytemuck`: `Pod`/`Zeroable` for vectors of `Pod` lanes
//! - `tracing`: trace spans on fallible constructors and checked division

pub mod broadcast;
pub mod error;
pub mod halves;
mod literal;
pub mod mask;
mod ops;
#[cfg(feature = "bytemuck")]
mod pod;
pub mod scalar;
#[cfg(feature = "serde")]
mod serialize;
pub mod storage;
pub mod types;
pub mod vector;

pub use broadcast::ScalarBroadcast;
pub use error::{ArithmeticFault, Result, SimdError};
pub use halves::SimdHalves;
pub use mask::{MaskOf, SimdMask};
pub use scalar::{
    RoundingRule, SimdFloat, SimdInteger, SimdMaskScalar, SimdNumeric, SimdOrdered, SimdScalar,
};
pub use storage::SimdStorage;
pub use types::{Simd16, Simd2, Simd3, Simd32, Simd4, Simd64, Simd8};
pub use vector::SimdVector;
