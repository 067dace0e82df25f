//! Convenience operations on closed integer ranges.
//!
//! An [IntRange] is a pair of inclusive bounds `first..last` over any primitive integer type.
//! The bounds may be given in either order: the direction of a range never changes which integers it covers,
//! but [reverse](IntRange::reverse) and [sort](IntRange::sort) preserve or rearrange it explicitly.
//! Operations that produce a new range from two ranges ([intersection](IntRange::intersection) and [union](IntRange::union))
//! always return it in ascending order, and return `None` when there is no such range.
//!
//! # Example
//! ```
//! use range_ext::{IntRange, Order};
//!
//! let a = IntRange::new(1, 5);
//! let b = IntRange::new(8, 4);
//!
//! assert!(a.overlaps(&b));
//! assert_eq!(a.intersection(&b), Some(IntRange::new(4, 5)));
//! assert_eq!(a.union(&b), Some(IntRange::new(1, 8)));
//! assert!(a.is_contiguous(&IntRange::new(6, 9)));
//! assert!(a.is_congruent(&a.reverse()));
//! assert_eq!(b.sort(Order::Ascending), IntRange::new(4, 8));
//! ```

mod error;
mod order;
pub mod range;

pub use error::{Error, Result};
pub use order::Order;
pub use range::IntRange;
