//! Order comparison helpers.
//!
//! `min` and `max` select one of their operands without copying it. Passing mutable borrows
//! returns a mutable borrow of the selected variable:
//!
//! ```
//! use shaping_algs::ord::min;
//!
//! let (mut x, mut y) = (1, 2);
//! *min(&mut x, &mut y) = 3;
//! assert_eq!((x, y), (3, 2));
//! ```
//!
//! On a tie both functions return the first argument.

/// Return the lesser of `a` and `b`, or `a` if they are equal.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a <= b {
        a
    } else {
        b
    }
}

/// Return the greater of `a` and `b`, or `a` if they are equal.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

/// Restrict `value` to the inclusive range `lo..=hi`.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Test whether `value` lies in the inclusive range `lo..=hi`.
pub fn in_range<T: PartialOrd>(value: T, lo: T, hi: T) -> bool {
    lo <= value && value <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(min(8, 1), 1);
        assert_eq!(max(8, 1), 8);
        assert_eq!(min(2.5, -1.0), -1.0);
    }

    #[test]
    fn test_mixed_operands() {
        let x = 1;
        assert_eq!(min(x, 3), 1);
        assert_eq!(min(3, x), 1);
        assert_eq!(min(x, 4 + 3), 1);
        assert_eq!(max(x, 4 + 3), 7);
    }

    #[test]
    fn test_reference_aliases_operand() {
        let mut x = 1;
        let mut y = 2;
        let z = min(&mut x, &mut y);
        *z = 3;
        assert_eq!(x, 3);

        *max(&mut x, &mut y) += 1;
        assert_eq!((x, y), (4, 2));
    }

    #[test]
    fn test_tie_returns_first() {
        let a = (1, 'a');
        assert!(std::ptr::eq(min(&a, &a), &a));

        let (mut x, mut y) = (5, 5);
        *min(&mut x, &mut y) = 0;
        assert_eq!((x, y), (0, 5));

        let (mut x, mut y) = (5, 5);
        *max(&mut x, &mut y) = 9;
        assert_eq!((x, y), (9, 5));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(13, 0, 10), 10);
        assert_eq!(clamp(7, 0, 10), 7);
        assert!(in_range(0x0300, 0x0300, 0x036F));
        assert!(!in_range(0x0370, 0x0300, 0x036F));
    }
}
