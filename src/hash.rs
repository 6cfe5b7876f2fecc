//! Content hashing.
//!
//! [`hash`] hashes what a value holds, not where it lives. Values are hashed through the
//! [`ContentHash`] trait: references, `Box`, `Rc` and `Arc` forward to their pointee, so a value
//! hashes the same whether it is passed directly, borrowed, or held through shared or unique
//! ownership:
//!
//! ```
//! use std::rc::Rc;
//! use shaping_algs::hash::hash;
//! use shaping_algs::set::IntSet;
//!
//! let set = IntSet::from([1]);
//! assert_eq!(hash(&set), hash(Box::new(set.clone())));
//! assert_eq!(hash(&set), hash(Rc::new(set.clone())));
//! ```
//!
//! Raw pointers have no `ContentHash` implementation, so hashing one does not compile:
//!
//! ```compile_fail
//! use shaping_algs::hash::hash;
//! use shaping_algs::set::IntSet;
//!
//! let set = IntSet::from([1]);
//! let ptr: *const IntSet = &set;
//! hash(ptr);
//! ```

use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use rustc_hash::FxHasher;

/// Types whose hash is derived from their contents.
///
/// Pointer-like implementations hash the value they point to, never the address.
pub trait ContentHash {
    fn content_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! content_hash_via_hash {
    ($($t:ty),*) => {
        $(
            impl ContentHash for $t {
                fn content_hash<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state);
                }
            }
        )*
    };
}

content_hash_via_hash!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, str, String
);

macro_rules! content_hash_via_pointee {
    ($($ptr:ty),*) => {
        $(
            impl<T: ContentHash + ?Sized> ContentHash for $ptr {
                fn content_hash<H: Hasher>(&self, state: &mut H) {
                    (**self).content_hash(state);
                }
            }
        )*
    };
}

content_hash_via_pointee!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: ContentHash> ContentHash for [T] {
    fn content_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.content_hash(state);
        }
    }
}

impl<T: ContentHash> ContentHash for Vec<T> {
    fn content_hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().content_hash(state);
    }
}

impl<T: ContentHash> ContentHash for Option<T> {
    fn content_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(value) => {
                state.write_u8(1);
                value.content_hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

/// Compute a 32-bit hash of the contents of `value`.
pub fn hash<T: ContentHash>(value: T) -> u32 {
    let mut hasher = FxHasher::default();
    value.content_hash(&mut hasher);
    fold(hasher.finish())
}

fn fold(h: u64) -> u32 {
    (h as u32) ^ ((h >> 32) as u32)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use super::*;
    use crate::pair::pair;
    use crate::set::IntSet;

    #[test]
    fn test_sets() {
        let set1 = IntSet::from([1]);
        let set2 = IntSet::from([2]);

        assert_ne!(hash(&set1), hash(&set2));
        assert_eq!(hash(&set1), hash(IntSet::from([1])));
        assert_ne!(hash(&set1), hash(IntSet::new()));
        assert_ne!(hash(&set1), hash(IntSet::from([2])));
        assert_eq!(hash(&set2), hash(IntSet::from([2])));
    }

    #[test]
    fn test_looks_through_ownership() {
        let mut set1 = IntSet::from([1, 600, 70_000]);
        let expected = hash(set1.clone());

        assert_eq!(hash(&set1), expected);
        assert_eq!(hash(&&set1), expected);
        assert_eq!(hash(&mut set1), expected);

        let shared = Rc::new(set1);
        assert_eq!(hash(Rc::clone(&shared)), expected);
        assert_eq!(hash(Arc::new((*shared).clone())), expected);

        let unique = Box::new((*shared).clone());
        assert_eq!(hash(unique), expected);
    }

    #[test]
    fn test_containers_hash_elements() {
        let a = IntSet::from([1]);
        let b = IntSet::from([1]);

        assert_eq!(hash(vec![&a]), hash(vec![b.clone()]));
        assert_eq!(hash(Some(&a)), hash(Some(Box::new(b))));
        assert_ne!(hash(Some(&a)), hash(None::<&IntSet>));
        assert_eq!(hash(&[1u16, 2][..]), hash(vec![1u16, 2]));
    }

    #[test]
    fn test_values() {
        assert_eq!(hash(String::from("liga")), hash("liga"));
        assert_eq!(hash(pair(1u16, 'a')), hash(&pair(1u16, 'a')));
        assert_ne!(hash(1u32), hash(2u32));
    }
}
