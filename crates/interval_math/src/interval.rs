use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, Range, RangeBounds, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::{Bounded, IntervalError};

/// A contiguous interval between `start` and `end` over a totally ordered type.
///
/// Each endpoint is independently closed (the value belongs to the interval)
/// or open (the value is excluded). `start <= end` holds for every value of
/// this type; it is checked on construction and the fields are never exposed
/// for mutation afterwards.
///
/// The bound type must implement [`Ord`]. Types without a total order (such
/// as floats holding NaN) are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawInterval<T>",
    bound(deserialize = "T: Deserialize<'de> + Ord + std::fmt::Debug")
)]
pub struct Interval<T> {
    start: T,
    end: T,
    includes_start: bool,
    includes_end: bool,
}

impl<T> Interval<T> {
    /// Lower boundary value.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Upper boundary value.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Whether the start value belongs to the interval.
    #[inline]
    pub const fn includes_start(&self) -> bool {
        self.includes_start
    }

    /// Whether the end value belongs to the interval.
    #[inline]
    pub const fn includes_end(&self) -> bool {
        self.includes_end
    }

    /// Returns a copy of this interval with the inclusion flags replaced.
    pub fn with_inclusion(self, includes_start: bool, includes_end: bool) -> Self {
        Self {
            includes_start,
            includes_end,
            ..self
        }
    }

    /// Consumes the interval, returning `(start, end)`.
    pub fn into_bounds(self) -> (T, T) {
        (self.start, self.end)
    }

    fn new_unchecked(start: T, end: T, includes_start: bool, includes_end: bool) -> Self {
        Self {
            start,
            end,
            includes_start,
            includes_end,
        }
    }
}

impl<T: Ord> Interval<T> {
    /// Create an interval whose bounds are already ordered.
    ///
    /// Fails with [`IntervalError::InvalidOrder`] if `start > end`.
    /// `start == end` is accepted whatever the inclusion flags are.
    ///
    /// ```
    /// use interval_math::{Interval, IntervalError};
    ///
    /// let interval = Interval::new(1, 3, true, false).unwrap();
    /// assert_eq!(interval.to_string(), "[1, 3)");
    ///
    /// let err = Interval::new(3, 1, true, true).unwrap_err();
    /// assert_eq!(err, IntervalError::InvalidOrder { start: 3, end: 1 });
    /// ```
    pub fn new(
        start: T,
        end: T,
        includes_start: bool,
        includes_end: bool,
    ) -> Result<Self, IntervalError<T>> {
        if start > end {
            return Err(IntervalError::InvalidOrder { start, end });
        }

        Ok(Self::new_unchecked(start, end, includes_start, includes_end))
    }

    /// Create a closed interval `[start, end]`.
    pub fn closed(start: T, end: T) -> Result<Self, IntervalError<T>> {
        Self::new(start, end, true, true)
    }

    /// Create an open interval `(start, end)`.
    pub fn open(start: T, end: T) -> Result<Self, IntervalError<T>> {
        Self::new(start, end, false, false)
    }

    /// Create an interval from bounds in any order, swapping them if needed.
    ///
    /// The inclusion flags stay attached to the resulting start and end
    /// positions, not to the values that were passed in.
    ///
    /// ```
    /// use interval_math::Interval;
    ///
    /// let interval = Interval::safe_create(10, 2, false, true);
    /// assert_eq!(interval.to_string(), "(2, 10]");
    /// ```
    pub fn safe_create(start: T, end: T, includes_start: bool, includes_end: bool) -> Self {
        let (start, end) = if start > end {
            log::debug!("safe_create: swapping misordered interval bounds");
            (end, start)
        } else {
            (start, end)
        };

        Self::new_unchecked(start, end, includes_start, includes_end)
    }

    /// Returns true if `point` lies within the interval.
    ///
    /// The start side honours `includes_start` and the end side honours
    /// `includes_end`.
    #[inline]
    pub fn contains(&self, point: &T) -> bool {
        Bounded::contains(self, point)
    }

    /// Returns true if either interval contains one of the other's endpoints.
    ///
    /// Accepts `&Interval<T>` or `Option<&Interval<T>>`; `None` never intersects.
    ///
    /// ```
    /// use interval_math::Interval;
    ///
    /// let a = Interval::closed(1, 2).unwrap();
    /// let b = Interval::closed(2, 3).unwrap();
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(None));
    /// ```
    pub fn intersects<'a>(&self, other: impl Into<Option<&'a Interval<T>>>) -> bool
    where
        T: 'a,
    {
        other.into().is_some_and(|other| self.overlaps(other))
    }

    /// Computes the interval of values shared by `self` and `other`.
    ///
    /// The later start and the earlier end win, each carrying its own
    /// inclusion flag. When both intervals share a boundary value, that
    /// boundary is closed only if both intervals include it.
    ///
    /// Returns `None` if `other` is `None` or the combined start lies after
    /// the combined end. A result with `start == end` is returned as is and
    /// may be empty, see [`Interval::is_empty`].
    ///
    /// ```
    /// use interval_math::Interval;
    ///
    /// let a = Interval::new(0, 10, true, false).unwrap();
    /// let b = Interval::closed(5, 20).unwrap();
    /// assert_eq!(a.intersection_with(&b), Some(Interval::new(5, 10, true, false).unwrap()));
    ///
    /// let c = Interval::closed(20, 30).unwrap();
    /// assert_eq!(a.intersection_with(&c), None);
    /// ```
    pub fn intersection_with<'a>(
        &self,
        other: impl Into<Option<&'a Interval<T>>>,
    ) -> Option<Interval<T>>
    where
        T: Clone + 'a,
    {
        let other = other.into()?;

        let (start, includes_start) = match self.start.cmp(&other.start) {
            Ordering::Less => (&other.start, other.includes_start),
            Ordering::Equal => (&self.start, self.includes_start && other.includes_start),
            Ordering::Greater => (&self.start, self.includes_start),
        };

        let (end, includes_end) = match self.end.cmp(&other.end) {
            Ordering::Less => (&self.end, self.includes_end),
            Ordering::Equal => (&self.end, self.includes_end && other.includes_end),
            Ordering::Greater => (&other.end, other.includes_end),
        };

        if start > end {
            log::trace!("intersection_with: intervals are disjoint");
            return None;
        }

        Some(Self::new_unchecked(
            start.clone(),
            end.clone(),
            includes_start,
            includes_end,
        ))
    }

    /// Returns true if the interval holds no value at all, i.e. `start == end`
    /// with at least one of the two endpoints excluded.
    pub fn is_empty(&self) -> bool {
        self.start == self.end && !(self.includes_start && self.includes_end)
    }

    /// Returns a new interval with the given bounds and this interval's
    /// inclusion flags. Fails if `start > end`.
    pub fn with_bounds(&self, start: T, end: T) -> Result<Self, IntervalError<T>> {
        Self::new(start, end, self.includes_start, self.includes_end)
    }
}

impl<T: Ord> Bounded<T> for Interval<T> {
    fn start(&self) -> &T {
        &self.start
    }

    fn end(&self) -> &T {
        &self.end
    }

    fn includes_start(&self) -> bool {
        self.includes_start
    }

    fn includes_end(&self) -> bool {
        self.includes_end
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        if self.includes_start {
            Bound::Included(&self.start)
        } else {
            Bound::Excluded(&self.start)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.includes_end {
            Bound::Included(&self.end)
        } else {
            Bound::Excluded(&self.end)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    /// Formats the interval in mathematical notation, e.g. `[1, 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.includes_start { '[' } else { '(' };
        let close = if self.includes_end { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.start, self.end, close)
    }
}

impl<T: Ord> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = IntervalError<T>;

    /// `start..=end` becomes the closed interval `[start, end]`.
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T: Ord> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError<T>;

    /// `start..end` becomes the half-open interval `[start, end)`.
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end, true, false)
    }
}

/// Unvalidated wire form; deserialization funnels through [`Interval::new`].
#[derive(Deserialize)]
struct RawInterval<T> {
    start: T,
    end: T,
    #[serde(default = "included")]
    includes_start: bool,
    #[serde(default = "included")]
    includes_end: bool,
}

fn included() -> bool {
    true
}

impl<T: Ord> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = IntervalError<T>;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.includes_start, raw.includes_end)
    }
}
