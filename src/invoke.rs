//! Uniform invocation of callables.
//!
//! Arguments are passed as a tuple. Free functions, closures and method paths share one calling
//! convention: a method path such as `Type::method` takes its receiver as the first element of
//! the argument tuple.
//!
//! ```
//! use shaping_algs::invoke::invoke;
//!
//! struct Counter(u32);
//!
//! impl Counter {
//!     fn get(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let counter = Counter(4);
//! assert_eq!(invoke(Counter::get, (&counter,)), 4);
//! assert_eq!(invoke(u32::max, (3, 9)), 9);
//! ```

/// A callable that can be invoked with the argument tuple `Args`.
pub trait Invoke<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke_for_fn {
    ($($arg:ident: $ty:ident),*) => {
        impl<F, R, $($ty,)*> Invoke<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> R,
        {
            type Output = R;

            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_invoke_for_fn!();
impl_invoke_for_fn!(a: A);
impl_invoke_for_fn!(a: A, b: B);
impl_invoke_for_fn!(a: A, b: B, c: C);
impl_invoke_for_fn!(a: A, b: B, c: C, d: D);
impl_invoke_for_fn!(a: A, b: B, c: C, d: D, e: E);
impl_invoke_for_fn!(a: A, b: B, c: C, d: D, e: E, g: G);

/// Invoke `f` with `args`.
pub fn invoke<F, Args>(f: F, args: Args) -> F::Output
where
    F: Invoke<Args>,
{
    f.invoke(args)
}

/// Return the argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}
