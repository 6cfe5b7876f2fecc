//! A set of `u32` values, such as codepoints or glyph ids, stored as a sparse bit set.
//!
//! Values are grouped into pages of 512 bits. A page is addressed by the high bits of the value
//! (its major number) through a page map that is kept sorted by major, so iteration visits
//! values in ascending order.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use itertools::Itertools;
use log::debug;
use tinyvec::TinyVec;

use crate::bits::{bit_storage, ctz, popcount};
use crate::hash::ContentHash;

const PAGE_SHIFT: u32 = 9;
const PAGE_MASK: u32 = (1 << PAGE_SHIFT) - 1;
const WORD_BITS: u32 = u64::BITS;
const PAGE_WORDS: usize = (1 << PAGE_SHIFT) / WORD_BITS as usize;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
struct Page {
    words: [u64; PAGE_WORDS],
}

#[derive(Clone, Copy, Default, Debug)]
struct PageMap {
    major: u32,
    index: u32,
}

/// Iterator over the positions of the set bits of a word, lowest first.
struct SetBits(u64);

impl Iterator for SetBits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let bit = ctz(self.0);
        self.0 &= self.0 - 1;
        Some(bit)
    }
}

impl Page {
    fn locate(bit: u32) -> (usize, u64) {
        ((bit / WORD_BITS) as usize, 1 << (bit % WORD_BITS))
    }

    fn insert(&mut self, bit: u32) -> bool {
        let (word, mask) = Page::locate(bit);
        let absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        absent
    }

    fn remove(&mut self, bit: u32) -> bool {
        let (word, mask) = Page::locate(bit);
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    fn contains(&self, bit: u32) -> bool {
        let (word, mask) = Page::locate(bit);
        self.words[word] & mask != 0
    }

    // `lo` and `hi` are inclusive bit positions within the page
    fn insert_range(&mut self, lo: u32, hi: u32) {
        for word in (lo / WORD_BITS)..=(hi / WORD_BITS) {
            let base = word * WORD_BITS;
            let from = lo.max(base) - base;
            let to = hi.min(base + WORD_BITS - 1) - base;
            let mask = if to - from == WORD_BITS - 1 {
                u64::MAX
            } else {
                ((1u64 << (to - from + 1)) - 1) << from
            };
            self.words[word as usize] |= mask;
        }
    }

    fn union_with(&mut self, other: &Page) {
        self.words
            .iter_mut()
            .zip(other.words.iter())
            .for_each(|(a, b)| *a |= b);
    }

    fn len(&self) -> usize {
        self.words.iter().map(|&w| popcount(w) as usize).sum()
    }

    fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(i, &w)| SetBits(w).map(move |bit| i as u32 * WORD_BITS + bit))
    }

    fn last(&self) -> Option<u32> {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map(|i| i as u32 * WORD_BITS + bit_storage(self.words[i]) - 1)
    }
}

/// A set of `u32` values.
///
/// Equality and hashing depend only on the values in the set, not on the order of insertion or
/// on pages left empty by removals.
#[derive(Clone, Default)]
pub struct IntSet {
    page_map: TinyVec<[PageMap; 4]>,
    pages: Vec<Page>,
}

impl IntSet {
    /// A value that is never a member of any set.
    pub const INVALID: u32 = u32::MAX;

    pub fn new() -> Self {
        IntSet::default()
    }

    /// Add `value` to the set. Returns `true` if it was not already present.
    ///
    /// `IntSet::INVALID` is ignored.
    pub fn insert(&mut self, value: u32) -> bool {
        if value == IntSet::INVALID {
            debug!("ignoring insertion of invalid set value");
            return false;
        }
        self.page_for_insert(value >> PAGE_SHIFT)
            .insert(value & PAGE_MASK)
    }

    /// Add every value in `start..=end` to the set.
    ///
    /// Returns `false` without modifying the set if `start > end` or `end` is
    /// `IntSet::INVALID`.
    pub fn insert_range(&mut self, start: u32, end: u32) -> bool {
        if start > end || end == IntSet::INVALID {
            debug!("rejecting invalid set range {}..={}", start, end);
            return false;
        }
        let (start_major, end_major) = (start >> PAGE_SHIFT, end >> PAGE_SHIFT);
        for major in start_major..=end_major {
            let lo = if major == start_major {
                start & PAGE_MASK
            } else {
                0
            };
            let hi = if major == end_major {
                end & PAGE_MASK
            } else {
                PAGE_MASK
            };
            self.page_for_insert(major).insert_range(lo, hi);
        }
        true
    }

    /// Remove `value` from the set. Returns `true` if it was present.
    pub fn remove(&mut self, value: u32) -> bool {
        match self.page_index(value >> PAGE_SHIFT) {
            Some(index) => self.pages[index].remove(value & PAGE_MASK),
            None => false,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.page_index(value >> PAGE_SHIFT)
            .map_or(false, |index| self.pages[index].contains(value & PAGE_MASK))
    }

    /// Add every member of `other` to this set.
    pub fn union_with(&mut self, other: &IntSet) {
        for (major, page) in other.non_empty_pages() {
            self.page_for_insert(major).union_with(page);
        }
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Page::is_empty)
    }

    pub fn clear(&mut self) {
        self.page_map.clear();
        self.pages.clear();
    }

    /// The smallest value in the set.
    pub fn first(&self) -> Option<u32> {
        self.iter().next()
    }

    /// The largest value in the set.
    pub fn last(&self) -> Option<u32> {
        self.page_map.iter().rev().find_map(|map| {
            self.pages[map.index as usize]
                .last()
                .map(|bit| (map.major << PAGE_SHIFT) + bit)
        })
    }

    /// Iterate over the values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.non_empty_pages().flat_map(|(major, page)| {
            let base = major << PAGE_SHIFT;
            page.iter().map(move |bit| base + bit)
        })
    }

    /// Iterate over the maximal runs of consecutive values in ascending order.
    ///
    /// ```
    /// use shaping_algs::set::IntSet;
    ///
    /// let set = IntSet::from([1, 2, 3, 7, 9, 10]);
    /// let ranges: Vec<_> = set.ranges().collect();
    /// assert_eq!(ranges, vec![1..=3, 7..=7, 9..=10]);
    /// ```
    pub fn ranges(&self) -> impl Iterator<Item = RangeInclusive<u32>> + '_ {
        self.iter()
            .map(|value| (value, value))
            .coalesce(|(lo, hi), (next_lo, next_hi)| {
                if hi + 1 == next_lo {
                    Ok((lo, next_hi))
                } else {
                    Err(((lo, hi), (next_lo, next_hi)))
                }
            })
            .map(|(lo, hi)| lo..=hi)
    }

    fn page_index(&self, major: u32) -> Option<usize> {
        self.page_map
            .binary_search_by_key(&major, |map| map.major)
            .ok()
            .map(|i| self.page_map[i].index as usize)
    }

    fn page_for_insert(&mut self, major: u32) -> &mut Page {
        let index = match self.page_map.binary_search_by_key(&major, |map| map.major) {
            Ok(i) => self.page_map[i].index as usize,
            Err(i) => {
                let index = self.pages.len();
                self.pages.push(Page::default());
                self.page_map.insert(
                    i,
                    PageMap {
                        major,
                        index: index as u32,
                    },
                );
                index
            }
        };
        &mut self.pages[index]
    }

    fn non_empty_pages(&self) -> impl Iterator<Item = (u32, &Page)> + '_ {
        self.page_map
            .iter()
            .map(move |map| (map.major, &self.pages[map.index as usize]))
            .filter(|(_, page)| !page.is_empty())
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.non_empty_pages().eq(other.non_empty_pages())
    }
}

impl Eq for IntSet {}

impl Hash for IntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (major, page) in self.non_empty_pages() {
            state.write_u32(major);
            for &word in page.words.iter() {
                state.write_u64(word);
            }
        }
    }
}

impl ContentHash for IntSet {
    fn content_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state);
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u32> for IntSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = IntSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<u32> for IntSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<const N: usize> From<[u32; N]> for IntSet {
    fn from(values: [u32; N]) -> Self {
        values.into_iter().collect()
    }
}
