//! An adapter that increments a variable in place.

use std::ops::AddAssign;

use num_traits::One;

/// Mutable view of a variable whose prefix increment advances it by [`Incrementable::STEP`].
///
/// ```
/// use shaping_algs::inc::as_incrementable;
///
/// let mut x = 1;
/// assert_eq!(*as_incrementable(&mut x).increment(), 3);
/// assert_eq!(x, 3);
/// ```
#[derive(Debug)]
pub struct Incrementable<'a, T> {
    value: &'a mut T,
}

/// Wrap `value` so that incrementing the wrapper increments `value`.
pub fn as_incrementable<T>(value: &mut T) -> Incrementable<'_, T>
where
    T: AddAssign + One,
{
    Incrementable { value }
}

impl<'a, T> Incrementable<'a, T>
where
    T: AddAssign + One,
{
    /// Number of units one increment adds.
    pub const STEP: usize = 2;

    /// Prefix increment: advance the wrapped variable and return it.
    pub fn increment(self) -> &'a mut T {
        for _ in 0..Self::STEP {
            *self.value += T::one();
        }
        self.value
    }

    pub fn get(&self) -> &T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment() {
        let mut x = 1;
        assert_eq!(*as_incrementable(&mut x).increment(), 3);
        assert_eq!(x, 3);
    }

    #[test]
    fn test_result_aliases_variable() {
        let mut x = 0u16;
        let r = as_incrementable(&mut x).increment();
        *r += 10;
        assert_eq!(x, 12);
    }

    #[test]
    fn test_get() {
        let mut x = 2.5f32;
        let inc = as_incrementable(&mut x);
        assert_eq!(*inc.get(), 2.5);
        assert_eq!(*inc.increment(), 4.5);
    }
}
