//! Partial application.
//!
//! A [`Partial`] holds a callable together with one bound argument. Positions are 1-based: the
//! bound value is passed as argument `POS` of the callable and the arguments supplied at
//! invocation fill the remaining positions in order.
//!
//! ```
//! use shaping_algs::invoke::Invoke;
//! use shaping_algs::ord::max;
//! use shaping_algs::partial::partial_at;
//!
//! let at_least_zero = partial_at::<2, _, _>(max::<i32>, 0);
//! assert_eq!(at_least_zero.invoke((-2,)), 0);
//! assert_eq!(at_least_zero.invoke((2,)), 2);
//! ```
//!
//! Callables of up to four arguments can be partially applied at any of their positions. A
//! position past the end of the argument list does not implement [`Invoke`] and is rejected at
//! compile time.

use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use crate::invoke::Invoke;

/// A callable with one argument bound at position `POS`.
#[derive(Clone, Copy, Debug)]
pub struct Partial<const POS: usize, F, V> {
    f: F,
    value: V,
}

impl<const POS: usize, F, V> Partial<POS, F, V> {
    pub fn new(f: F, value: V) -> Self {
        Partial { f, value }
    }

    /// The bound argument.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Bind `value` as the first argument of `f`.
pub fn partial<F, V>(f: F, value: V) -> Partial<1, F, V> {
    Partial::new(f, value)
}

/// Bind `value` as argument `POS` (1-based) of `f`.
pub fn partial_at<const POS: usize, F, V>(f: F, value: V) -> Partial<POS, F, V> {
    Partial::new(f, value)
}

macro_rules! impl_invoke_for_partial {
    ($pos:literal; $($before:ident: $B:ident),*; $($after:ident: $A:ident),*) => {
        impl<F, V, $($B,)* $($A,)*> Invoke<($($B,)* $($A,)*)> for Partial<$pos, F, V>
        where
            F: Invoke<($($B,)* V, $($A,)*)>,
            V: Clone,
        {
            type Output = F::Output;

            fn invoke(&self, ($($before,)* $($after,)*): ($($B,)* $($A,)*)) -> Self::Output {
                self.f.invoke(($($before,)* self.value.clone(), $($after,)*))
            }
        }
    };
}

impl_invoke_for_partial!(1; ; );

impl_invoke_for_partial!(1; ; b: B);
impl_invoke_for_partial!(2; a: A; );

impl_invoke_for_partial!(1; ; b: B, c: C);
impl_invoke_for_partial!(2; a: A; c: C);
impl_invoke_for_partial!(3; a: A, b: B; );

impl_invoke_for_partial!(1; ; b: B, c: C, d: D);
impl_invoke_for_partial!(2; a: A; c: C, d: D);
impl_invoke_for_partial!(3; a: A, b: B; d: D);
impl_invoke_for_partial!(4; a: A, b: B, c: C; );

macro_rules! operator {
    ($(#[$attr:meta])* $name:ident, $op:ident, $method:ident) => {
        $(#[$attr])*
        pub fn $name<T>(lhs: T) -> Partial<1, fn(T, T) -> <T as $op>::Output, T>
        where
            T: $op + Clone,
        {
            partial(<T as $op>::$method as fn(T, T) -> <T as $op>::Output, lhs)
        }
    };
}

operator!(
    /// `add(a)` is the callable `|b| a + b`.
    add, Add, add
);
operator!(
    /// `sub(a)` is the callable `|b| a - b`.
    sub, Sub, sub
);
operator!(
    /// `mul(a)` is the callable `|b| a * b`.
    mul, Mul, mul
);
operator!(
    /// `bit_and(a)` is the callable `|b| a & b`.
    bit_and, BitAnd, bitand
);
operator!(
    /// `bit_or(a)` is the callable `|b| a | b`.
    bit_or, BitOr, bitor
);
operator!(
    /// `bit_xor(a)` is the callable `|b| a ^ b`.
    bit_xor, BitXor, bitxor
);
