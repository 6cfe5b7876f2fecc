//! Bit manipulation over primitive integers.

use num_traits::PrimInt;

/// Number of set bits in `v`.
pub fn popcount<T: PrimInt>(v: T) -> u32 {
    v.count_ones()
}

/// Number of bits needed to store `v`: the index of its highest set bit plus one, or zero when
/// `v` is zero.
///
/// ```
/// use shaping_algs::bits::bit_storage;
///
/// assert_eq!(bit_storage(0u32), 0);
/// assert_eq!(bit_storage(1u32), 1);
/// assert_eq!(bit_storage(0x1FFu16), 9);
/// ```
pub fn bit_storage<T: PrimInt>(v: T) -> u32 {
    width::<T>() - v.leading_zeros()
}

/// Number of trailing zero bits; the width of `T` when `v` is zero.
pub fn ctz<T: PrimInt>(v: T) -> u32 {
    v.trailing_zeros()
}

/// Number of leading zero bits; the width of `T` when `v` is zero.
pub fn clz<T: PrimInt>(v: T) -> u32 {
    v.leading_zeros()
}

fn width<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}
