//! Operator overloads
//!
//! Floating-point vectors get `+ - * / -x`. Integer vectors get `/ %` and the
//! bitwise operators `& | ^ !`; integer addition, subtraction and
//! multiplication are only available through the explicit `wrapping_*`
//! methods. Every binary operator also accepts a bare scalar on either side.
//!
//! Integer `/` and `%` panic on a zero divisor, naming the lowest faulting
//! lane. Use [`SimdVector::try_div`] and [`SimdVector::try_rem`] to handle
//! the fault instead.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use crate::scalar::{SimdFloat, SimdInteger, SimdNumeric};
use crate::types::{Simd16, Simd2, Simd3, Simd32, Simd4, Simd64, Simd8};
use crate::vector::SimdVector;

macro_rules! lanewise_op {
    ($bound:ident; $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $lane_op:tt; $($name:ident),+) => {$(
        impl<S: $bound> $op for $name<S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $lane_op b)
            }
        }

        impl<S: $bound> $op_assign for $name<S> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    )+};
}

macro_rules! checked_op {
    ($bound:ident; $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $checked:ident; $($name:ident),+) => {$(
        impl<S: $bound> $op for $name<S> {
            type Output = Self;

            /// # Panics
            ///
            /// Panics on an integer zero divisor or `MIN / -1` overflow.
            #[inline]
            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<S: $bound> $op_assign for $name<S> {
            #[inline]
            #[track_caller]
            fn $method_assign(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    )+};
}

macro_rules! unary_op {
    ($bound:ident; $op:ident, $method:ident, $lane_op:tt; $($name:ident),+) => {$(
        impl<S: $bound> $op for $name<S> {
            type Output = Self;

            #[inline]
            fn $method(self) -> Self {
                self.map(|a| $lane_op a)
            }
        }
    )+};
}

// Scalar broadcasting is spelled out per concrete scalar; a generic
// `impl<S> Add<S> for Simd4<S>` would overlap with `Add<Simd4<S>>`.
macro_rules! broadcast_op {
    (@width $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $name:ident, [$($scalar:ty),+]) => {$(
        impl $op<$scalar> for $name<$scalar> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: $scalar) -> Self {
                $op::$method(self, Self::splat(rhs))
            }
        }

        impl $op<$name<$scalar>> for $scalar {
            type Output = $name<$scalar>;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: $name<$scalar>) -> $name<$scalar> {
                $op::$method($name::splat(self), rhs)
            }
        }

        impl $op_assign<$scalar> for $name<$scalar> {
            #[inline]
            #[track_caller]
            fn $method_assign(&mut self, rhs: $scalar) {
                *self = $op::$method(*self, rhs);
            }
        }
    )+};
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident; $scalars:tt; $($name:ident),+) => {$(
        broadcast_op!(@width $op, $method, $op_assign, $method_assign, $name, $scalars);
    )+};
}

macro_rules! all_widths {
    ($mac:ident!($($head:tt)*)) => {
        $mac!($($head)*; Simd2, Simd3, Simd4, Simd8, Simd16, Simd32, Simd64);
    };
}

all_widths!(lanewise_op!(SimdFloat; Add, add, AddAssign, add_assign, +));
all_widths!(lanewise_op!(SimdFloat; Sub, sub, SubAssign, sub_assign, -));
all_widths!(lanewise_op!(SimdFloat; Mul, mul, MulAssign, mul_assign, *));
all_widths!(unary_op!(SimdFloat; Neg, neg, -));

all_widths!(checked_op!(SimdNumeric; Div, div, DivAssign, div_assign, try_div));
all_widths!(checked_op!(SimdInteger; Rem, rem, RemAssign, rem_assign, try_rem));

all_widths!(lanewise_op!(SimdInteger; BitAnd, bitand, BitAndAssign, bitand_assign, &));
all_widths!(lanewise_op!(SimdInteger; BitOr, bitor, BitOrAssign, bitor_assign, |));
all_widths!(lanewise_op!(SimdInteger; BitXor, bitxor, BitXorAssign, bitxor_assign, ^));
all_widths!(unary_op!(SimdInteger; Not, not, !));

all_widths!(broadcast_op!(Add, add, AddAssign, add_assign; [f32, f64]));
all_widths!(broadcast_op!(Sub, sub, SubAssign, sub_assign; [f32, f64]));
all_widths!(broadcast_op!(Mul, mul, MulAssign, mul_assign; [f32, f64]));
all_widths!(broadcast_op!(
    Div, div, DivAssign, div_assign;
    [f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
));
all_widths!(broadcast_op!(
    Rem, rem, RemAssign, rem_assign;
    [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
));
all_widths!(broadcast_op!(
    BitAnd, bitand, BitAndAssign, bitand_assign;
    [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
));
all_widths!(broadcast_op!(
    BitOr, bitor, BitOrAssign, bitor_assign;
    [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
));
all_widths!(broadcast_op!(
    BitXor, bitxor, BitXorAssign, bitxor_assign;
    [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
));
