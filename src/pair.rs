//! An ordered pair with value semantics.

use log::debug;

use std::hash::Hasher;

use crate::error::ConversionError;
use crate::hash::ContentHash;

/// An ordered 2-tuple.
///
/// Pairs compare lexicographically, `first` before `second`. Copying a pair copies both
/// elements, so mutating a copy never affects the original.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

/// Construct a `Pair`, deducing the element types from the arguments.
pub fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

/// Return the first element of `p`.
pub fn first<A, B>(p: Pair<A, B>) -> A {
    p.first
}

/// Return the second element of `p`.
pub fn second<A, B>(p: Pair<A, B>) -> B {
    p.second
}

impl<A, B> Pair<A, B> {
    /// Construct a `Pair` from its elements. Equivalent to [`pair`].
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    /// Convert into a pair of wider element types.
    ///
    /// ```
    /// use shaping_algs::pair::{pair, Pair};
    ///
    /// let p: Pair<u32, i64> = pair(7u8, -1i16).convert();
    /// assert_eq!(p, pair(7, -1));
    /// ```
    pub fn convert<C, D>(self) -> Pair<C, D>
    where
        A: Into<C>,
        B: Into<D>,
    {
        Pair {
            first: self.first.into(),
            second: self.second.into(),
        }
    }

    /// Convert into a pair of element types that may not be able to hold every value of the
    /// source types.
    pub fn try_convert<C, D>(self) -> Result<Pair<C, D>, ConversionError>
    where
        A: TryInto<C>,
        B: TryInto<D>,
    {
        let first = self.first.try_into().map_err(|_| {
            debug!("pair conversion: first element out of range");
            ConversionError::First
        })?;
        let second = self.second.try_into().map_err(|_| {
            debug!("pair conversion: second element out of range");
            ConversionError::Second
        })?;
        Ok(Pair { first, second })
    }

    /// Replace both elements with those of `other`, converting them to this pair's types.
    pub fn assign_from<C, D>(&mut self, other: Pair<C, D>)
    where
        C: Into<A>,
        D: Into<B>,
    {
        *self = other.convert();
    }

    /// Swap the elements.
    pub fn reverse(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    pub fn as_ref(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }
}

impl<A, B> Pair<*mut A, B> {
    /// Convert the first element from a mutable to a const pointer.
    ///
    /// Together with [`Pair::try_convert`] this narrows a `(*mut T, i64)` pair to a
    /// `(*const T, i32)` one.
    pub fn cast_const(self) -> Pair<*const A, B> {
        Pair::new(self.first.cast_const(), self.second)
    }
}

impl<A: ContentHash, B: ContentHash> ContentHash for Pair<A, B> {
    fn content_hash<H: Hasher>(&self, state: &mut H) {
        self.first.content_hash(state);
        self.second.content_hash(state);
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(p: Pair<A, B>) -> Self {
        (p.first, p.second)
    }
}
