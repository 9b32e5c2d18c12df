//! Interval Math - generic one-dimensional intervals.
//!
//! This crate provides:
//!
//! - **`Interval<T>`**: an immutable interval over any `Ord` type with
//!   independently inclusive or exclusive endpoints, supporting point
//!   containment, overlap tests and intersection.
//! - **`Bounded<T>`**: the read-only interval interface, so other
//!   interval-like types can share the containment and overlap logic.
//! - **`IntervalError<T>`**: the error returned when bounds are misordered.
//!
//! # Example
//!
//! ```
//! use interval_math::Interval;
//!
//! let morning = Interval::new(8, 12, true, false)?;
//! let meeting = Interval::closed(11, 13)?;
//!
//! assert!(morning.intersects(&meeting));
//! assert_eq!(morning.intersection_with(&meeting).unwrap().to_string(), "[11, 12)");
//!
//! // Bounds of unknown order
//! let range = Interval::safe_create(20, 10, true, true);
//! assert!(range.contains(&15));
//! # Ok::<(), interval_math::IntervalError<i32>>(())
//! ```

pub mod bounded;
pub mod error;
pub mod interval;

// Re-export commonly used types
pub use bounded::Bounded;
pub use error::IntervalError;
pub use interval::Interval;
