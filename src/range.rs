//! Closed integer ranges whose bounds may be given in either order.

use std::{fmt::Display, iter::FusedIterator, ops::RangeInclusive};

use num_traits::PrimInt;
use quickcheck::Arbitrary;

use crate::{Error, Order, Result};

/// A closed range of integers defined by a first and a last bound.
/// The range covers all integers between the two bounds, including the bounds themselves.
///
/// The bounds may appear in either order: `first > last` is a descending range, `first <= last` an ascending one.
/// The direction never changes which integers are covered, only which bounds operations such as [reverse](Self::reverse) and [sort](Self::sort) return.
/// A range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange<T> {
    first: T,
    last: T,
}

impl<T: PrimInt> IntRange<T> {
    /// Create a new range from its two bounds, in any order.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// let up = IntRange::new(1, 4);
    /// let down = IntRange::new(4, 1);
    /// assert!(up.is_ascending());
    /// assert!(down.is_descending());
    /// assert_eq!(up.size(), down.size());
    /// ```
    pub fn new(first: T, last: T) -> Self {
        IntRange { first, last }
    }

    /// Create a range that contains a single integer.
    pub fn singleton(n: T) -> Self {
        IntRange { first: n, last: n }
    }

    /// Returns the first bound, as given.
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the last bound, as given.
    pub fn last(&self) -> T {
        self.last
    }

    /// Returns the smaller of the two bounds.
    pub fn min(&self) -> T {
        self.normalized().0
    }

    /// Returns the larger of the two bounds.
    pub fn max(&self) -> T {
        self.normalized().1
    }

    fn normalized(&self) -> (T, T) {
        if self.first > self.last {
            (self.last, self.first)
        } else {
            (self.first, self.last)
        }
    }

    /// Check if `first <= last`. Single-point ranges are ascending.
    pub fn is_ascending(&self) -> bool {
        self.first <= self.last
    }

    /// Check if `first >= last`. Single-point ranges are descending.
    pub fn is_descending(&self) -> bool {
        self.first >= self.last
    }

    /// Check if the range contains a single integer.
    pub fn is_singleton(&self) -> bool {
        self.first == self.last
    }

    /// Return the number of integers in the range.
    /// Saturates at `u128::MAX` for the full `i128` and `u128` ranges.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert_eq!(IntRange::new(1, 4).size(), 4);
    /// assert_eq!(IntRange::new(4, -4).size(), 9);
    /// assert_eq!(IntRange::singleton(7).size(), 1);
    /// assert_eq!(IntRange::new(i8::MIN, i8::MAX).size(), 256);
    /// ```
    pub fn size(&self) -> u128 {
        let (lo, hi) = self.normalized();
        let span = match (lo.to_i128(), hi.to_i128()) {
            (Some(lo), Some(hi)) => hi.wrapping_sub(lo) as u128,
            // only u128 bounds above i128::MAX get here, and those always fit a u128
            _ => hi.to_u128().unwrap_or(u128::MAX) - lo.to_u128().unwrap_or(0),
        };
        span.saturating_add(1)
    }

    /// Check if an integer is in the range, regardless of its direction.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// let range = IntRange::new(5, 1);
    /// assert!(range.contains(1));
    /// assert!(range.contains(3));
    /// assert!(range.contains(5));
    /// assert!(!range.contains(0));
    /// assert!(!range.contains(6));
    /// ```
    pub fn contains(&self, n: T) -> bool {
        let (lo, hi) = self.normalized();
        lo <= n && n <= hi
    }

    /// Checks if every integer of `other` is also in this range.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// let r1 = IntRange::new(1, 10);
    /// assert!(r1.has_subset(&IntRange::new(8, 3)));
    /// assert!(r1.has_subset(&r1));
    /// assert!(!r1.has_subset(&IntRange::new(8, 11)));
    /// ```
    pub fn has_subset(&self, other: &Self) -> bool {
        let (lo, hi) = other.normalized();
        self.contains(lo) && self.contains(hi)
    }

    /// Returns an iterator over the integers of the range, walking from the first bound to the last.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert_eq!(IntRange::new(1, 3).iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(IntRange::new(3, 1).iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter {
            next: Some(self.first),
            last: self.last,
            ascending: self.is_ascending(),
        }
    }

    /// Returns a copy of the range with its bounds placed in the given order.
    ///
    /// # Example
    /// ```
    /// use range_ext::{IntRange, Order};
    ///
    /// let range = IntRange::new(5, 1);
    /// assert_eq!(range.sort(Order::Descending), IntRange::new(5, 1));
    /// assert_eq!(range.sort(Order::default()), IntRange::new(1, 5));
    /// assert_eq!(IntRange::new(1, 5).sort(Order::Descending), IntRange::new(5, 1));
    /// ```
    pub fn sort(&self, order: Order) -> Self {
        let (lo, hi) = self.normalized();
        match order {
            Order::Ascending => IntRange::new(lo, hi),
            Order::Descending => IntRange::new(hi, lo),
        }
    }

    /// Like [sort](Self::sort), but takes the order by name.
    /// Fails with [Error::InvalidOption] if the name is not a known order.
    ///
    /// # Example
    /// ```
    /// use range_ext::{Error, IntRange};
    ///
    /// let range = IntRange::new(1, 5);
    /// assert_eq!(range.sort_by_name("descending"), Ok(IntRange::new(5, 1)));
    /// assert!(matches!(range.sort_by_name(":descending"), Err(Error::InvalidOption { .. })));
    /// ```
    pub fn sort_by_name(&self, order: &str) -> Result<Self> {
        Ok(self.sort(order.parse()?))
    }

    /// Returns the range with its bounds swapped.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert_eq!(IntRange::new(1, 4).reverse(), IntRange::new(4, 1));
    /// assert_eq!(IntRange::new(4, 1).reverse(), IntRange::new(1, 4));
    /// assert_eq!(IntRange::singleton(3).reverse(), IntRange::singleton(3));
    /// ```
    pub fn reverse(&self) -> Self {
        IntRange::new(self.last, self.first)
    }

    /// Check if both ranges have the same pair of bounds, regardless of direction.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert!(IntRange::new(1, 4).is_congruent(&IntRange::new(4, 1)));
    /// assert!(!IntRange::new(1, 4).is_congruent(&IntRange::new(1, 5)));
    /// ```
    pub fn is_congruent(&self, other: &Self) -> bool {
        (self.first == other.first && self.last == other.last)
            || (self.first == other.last && self.last == other.first)
    }

    /// Check if the ranges share at least one integer.
    ///
    /// Any overlap of two closed ranges includes a bound of one of them,
    /// so it suffices to look at both bounds of `self` and the first bound of `other`.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert!(IntRange::new(2, 4).overlaps(&IntRange::new(4, 2)));
    /// assert!(IntRange::new(1, 5).overlaps(&IntRange::new(5, 8)));
    /// assert!(IntRange::new(1, 10).overlaps(&IntRange::new(3, 4)));
    /// assert!(!IntRange::new(1, 4).overlaps(&IntRange::new(5, 8)));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        other.contains(self.first) || other.contains(self.last) || self.contains(other.first)
    }

    /// Check if the ranges are adjacent, with neither a gap nor an overlap between them.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert!(IntRange::new(1, 4).is_contiguous(&IntRange::new(5, 8)));
    /// assert!(IntRange::new(8, 5).is_contiguous(&IntRange::new(4, 1)));
    /// assert!(!IntRange::new(4, 4).is_contiguous(&IntRange::new(4, 4)));
    /// assert!(!IntRange::new(1, 4).is_contiguous(&IntRange::new(6, 8)));
    /// ```
    pub fn is_contiguous(&self, other: &Self) -> bool {
        let (a, b) = self.normalized();
        let (x, y) = other.normalized();
        let one = T::one();
        b.checked_add(&one) == Some(x) || y.checked_add(&one) == Some(a)
    }

    /// Return the ascending range of integers that are in both ranges,
    /// or `None` if the ranges do not overlap.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert_eq!(IntRange::new(1, 5).intersection(&IntRange::new(4, 8)), Some(IntRange::new(4, 5)));
    /// assert_eq!(IntRange::new(5, 1).intersection(&IntRange::new(8, 4)), Some(IntRange::new(4, 5)));
    /// assert_eq!(IntRange::new(4, 1).intersection(&IntRange::new(1, 4)), Some(IntRange::new(1, 4)));
    /// assert_eq!(IntRange::new(1, 4).intersection(&IntRange::new(6, 8)), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.is_congruent(other) {
            return Some(self.sort(Order::Ascending));
        }
        if !self.overlaps(other) {
            return None;
        }
        let (a, b) = self.normalized();
        let (x, y) = other.normalized();
        Some(IntRange::new(a.max(x), b.min(y)))
    }

    /// Return the ascending range covering both ranges if they overlap or are contiguous,
    /// or `None` if there is a gap between them.
    ///
    /// # Example
    /// ```
    /// use range_ext::IntRange;
    ///
    /// assert_eq!(IntRange::new(1, 5).union(&IntRange::new(4, 8)), Some(IntRange::new(1, 8)));
    /// assert_eq!(IntRange::singleton(1).union(&IntRange::singleton(2)), Some(IntRange::new(1, 2)));
    /// assert_eq!(IntRange::new(1, 4).union(&IntRange::new(6, 8)), None);
    /// ```
    pub fn union(&self, other: &Self) -> Option<Self> {
        if self.is_congruent(other) {
            return Some(self.sort(Order::Ascending));
        }
        if !(self.overlaps(other) || self.is_contiguous(other)) {
            return None;
        }
        let (a, b) = self.normalized();
        let (x, y) = other.normalized();
        Some(IntRange::new(a.min(x), b.max(y)))
    }
}

/// Iterator over the integers of an [IntRange], from its first bound to its last.
#[derive(Debug, Clone)]
pub struct Iter<T> {
    next: Option<T>,
    last: T,
    ascending: bool,
}

impl<T: PrimInt> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else if self.ascending {
            Some(current + T::one())
        } else {
            Some(current - T::one())
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(next) => match usize::try_from(IntRange::new(next, self.last).size()) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
        }
    }
}

impl<T: PrimInt> FusedIterator for Iter<T> {}

impl<T: PrimInt> From<(T, T)> for IntRange<T> {
    fn from((first, last): (T, T)) -> Self {
        IntRange::new(first, last)
    }
}

impl<T: PrimInt> From<RangeInclusive<T>> for IntRange<T> {
    fn from(r: RangeInclusive<T>) -> Self {
        let (first, last) = r.into_inner();
        IntRange::new(first, last)
    }
}

impl<T: PrimInt> From<IntRange<T>> for RangeInclusive<T> {
    /// Converts into an ascending `RangeInclusive`, since a descending one would be empty.
    fn from(r: IntRange<T>) -> Self {
        let (lo, hi) = r.normalized();
        lo..=hi
    }
}

impl<T: PrimInt> TryFrom<&[T]> for IntRange<T> {
    type Error = Error;

    /// Reads a range from a slice holding exactly its two bounds.
    ///
    /// # Example
    /// ```
    /// use range_ext::{Error, IntRange};
    ///
    /// assert_eq!(IntRange::try_from(&[1, 5][..]), Ok(IntRange::new(1, 5)));
    /// assert_eq!(IntRange::try_from(&[1, 2, 3, 4][..]), Err(Error::InvalidArgument { len: 4 }));
    /// ```
    fn try_from(bounds: &[T]) -> Result<Self> {
        match bounds {
            [first, last] => Ok(IntRange::new(*first, *last)),
            _ => Err(Error::InvalidArgument { len: bounds.len() }),
        }
    }
}

impl<T: PrimInt> TryFrom<Vec<T>> for IntRange<T> {
    type Error = Error;

    fn try_from(bounds: Vec<T>) -> Result<Self> {
        IntRange::try_from(bounds.as_slice())
    }
}

impl<T: Display + PartialEq> Display for IntRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.first == self.last {
            write!(f, "[{}]", self.first)
        } else {
            write!(f, "[{}..{}]", self.first, self.last)
        }
    }
}

impl<T: PrimInt + Arbitrary> Arbitrary for IntRange<T> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        IntRange::new(T::arbitrary(g), T::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            (self.first, self.last)
                .shrink()
                .map(|(first, last)| IntRange::new(first, last)),
        )
    }
}
