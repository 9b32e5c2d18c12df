use std::cmp::Ordering;

/// Read-only view of a one-dimensional interval over a totally ordered type.
///
/// Implementors only supply the boundary values and their inclusion flags;
/// containment and the endpoint overlap test are provided on top of them.
/// Implementors must uphold `start() <= end()`.
pub trait Bounded<T: Ord> {
    /// Lower boundary value.
    fn start(&self) -> &T;

    /// Upper boundary value.
    fn end(&self) -> &T;

    /// Whether `start()` itself belongs to the interval.
    fn includes_start(&self) -> bool;

    /// Whether `end()` itself belongs to the interval.
    fn includes_end(&self) -> bool;

    /// Returns true if `point` lies within the interval, honouring the
    /// inclusion flag of each endpoint independently.
    fn contains(&self, point: &T) -> bool {
        let after_start = match point.cmp(self.start()) {
            Ordering::Greater => true,
            Ordering::Equal => self.includes_start(),
            Ordering::Less => false,
        };
        let before_end = match self.end().cmp(point) {
            Ordering::Greater => true,
            Ordering::Equal => self.includes_end(),
            Ordering::Less => false,
        };

        after_start && before_end
    }

    /// Returns true if either interval contains one of the other's endpoints.
    fn overlaps(&self, other: &dyn Bounded<T>) -> bool {
        self.contains(other.start())
            || self.contains(other.end())
            || other.contains(self.start())
            || other.contains(self.end())
    }
}
