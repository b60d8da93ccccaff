//! Numeric intervals with inclusive or exclusive boundaries.
//!
//! An [Interval] can be parsed from and written as text such as `[0, 1)` or `(-INF, 5]`,
//! and can locate a point relative to itself (below, inside or above).
//!
//! ```
//! use interval::Interval;
//!
//! let interval: Interval = "[0, 1)".parse()?;
//! assert!(interval.contains(0)?);
//! assert!(!interval.contains(1)?);
//! assert_eq!(interval.to_string(), "[0, 1)");
//! # Ok::<(), interval::IntervalError>(())
//! ```

pub mod errors;
mod interval;
pub mod number;
pub mod parser;

pub use errors::IntervalError;
pub use interval::Interval;
pub use number::Number;
pub use parser::DEFAULT_SEPARATOR;
