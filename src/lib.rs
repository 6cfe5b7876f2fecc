#![warn(rust_2018_idioms)]

//! Generic algorithm utilities used throughout the shaping engine.

/// Bit manipulation on primitive integers.
pub mod bits;
pub mod error;
pub mod hash;
/// Incrementing a variable through an adapter.
pub mod inc;
pub mod invoke;
pub mod ord;
pub mod pair;
pub mod partial;
/// Integer sets.
pub mod set;

pub use crate::hash::{hash, ContentHash};
pub use crate::inc::{as_incrementable, Incrementable};
pub use crate::invoke::{identity, invoke, Invoke};
pub use crate::ord::{clamp, in_range, max, min};
pub use crate::pair::{pair, Pair};
pub use crate::partial::{add, bit_and, bit_or, bit_xor, mul, partial, partial_at, sub, Partial};
pub use crate::set::IntSet;
