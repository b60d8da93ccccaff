use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::{IntervalError, Result};
use crate::number::{Number, format_endpoint, parse_endpoint};
use crate::parser::{DEFAULT_SEPARATOR, Grammar};

/// A numeric interval whose two boundaries are independently inclusive or exclusive.
///
/// Endpoints are `f64` and may be infinite. An endpoint that was never set is `None`,
/// which is distinct from zero.
///
/// Setters return the interval itself so that they can be chained.
/// Setters of the endpoints only validate their own argument: the order of the two endpoints
/// is only checked when both are set at once by [Interval::parse].
///
/// ```
/// use interval::Interval;
/// use std::cmp::Ordering;
///
/// let mut interval = Interval::new();
/// interval.set_lower(1)?.set_upper(2)?.upper_inclusive();
/// assert_eq!(interval.to_string(), "(1, 2]");
/// assert_eq!(interval.compare(1)?, Ordering::Less);
/// assert_eq!(interval.compare(2)?, Ordering::Equal);
///
/// let unbounded: Interval = "[-INF, INF]".parse()?;
/// assert_eq!(unbounded.bounds(), (Some(f64::NEG_INFINITY), Some(f64::INFINITY)));
/// # Ok::<(), interval::IntervalError>(())
/// ```
///
/// An interval is a plain value: sharing it across threads requires the usual `&`/`&mut` discipline,
/// there is no internal locking.
#[derive(Clone, PartialEq, Debug)]
pub struct Interval {
    lower: Option<f64>,
    upper: Option<f64>,
    lower_inclusive: bool,
    upper_inclusive: bool,
    separator: String,
}

impl Default for Interval {
    fn default() -> Self {
        Interval {
            lower: None,
            upper: None,
            lower_inclusive: false,
            upper_inclusive: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Interval {
    /// Creates an interval with no endpoints, exclusive boundaries and the default separator.
    pub fn new() -> Self {
        Self::default()
    }

    /* ===== Accessors ===== */

    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Returns both the lower and upper endpoints.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.lower, self.upper)
    }

    pub fn is_lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    pub fn is_lower_exclusive(&self) -> bool {
        !self.lower_inclusive
    }

    pub fn is_upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    pub fn is_upper_exclusive(&self) -> bool {
        !self.upper_inclusive
    }

    /// Separator written between the two endpoints, and expected between them when parsing.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /* ===== Setters ===== */

    /// Sets the lower endpoint.
    ///
    /// Returns an error, leaving the interval untouched, if `lower` is not a number.
    pub fn set_lower(&mut self, lower: impl Number) -> Result<&mut Self> {
        let value = lower
            .to_number()
            .ok_or_else(|| IntervalError::not_a_number("lower", &lower))?;
        self.lower = Some(value);
        Ok(self)
    }

    /// Sets the upper endpoint.
    ///
    /// Returns an error, leaving the interval untouched, if `upper` is not a number.
    pub fn set_upper(&mut self, upper: impl Number) -> Result<&mut Self> {
        let value = upper
            .to_number()
            .ok_or_else(|| IntervalError::not_a_number("upper", &upper))?;
        self.upper = Some(value);
        Ok(self)
    }

    pub fn set_lower_inclusive(&mut self, inclusive: bool) -> &mut Self {
        self.lower_inclusive = inclusive;
        self
    }

    pub fn set_upper_inclusive(&mut self, inclusive: bool) -> &mut Self {
        self.upper_inclusive = inclusive;
        self
    }

    /// Makes the lower endpoint part of the interval.
    pub fn lower_inclusive(&mut self) -> &mut Self {
        self.set_lower_inclusive(true)
    }

    /// Excludes the lower endpoint from the interval.
    pub fn lower_exclusive(&mut self) -> &mut Self {
        self.set_lower_inclusive(false)
    }

    /// Makes the upper endpoint part of the interval.
    pub fn upper_inclusive(&mut self) -> &mut Self {
        self.set_upper_inclusive(true)
    }

    /// Excludes the upper endpoint from the interval.
    pub fn upper_exclusive(&mut self) -> &mut Self {
        self.set_upper_inclusive(false)
    }

    /// Sets the separator used both for display and parsing.
    ///
    /// The separator is not validated: one that may appear inside a number
    /// (digits, `-`, `.` or `INF`) can make parsing ambiguous.
    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    /* ===== Comparison ===== */

    /// Locates `x` relative to the interval.
    ///
    /// - [Ordering::Less] if `x` is below the interval, i.e. below the lower endpoint or equal to an exclusive one.
    /// - [Ordering::Greater] if `x` is above the interval, i.e. above the upper endpoint or equal to an exclusive one.
    /// - [Ordering::Equal] if `x` is inside the interval.
    ///
    /// A missing endpoint does not bound the interval on its side.
    /// Returns an error if `x` is not a number.
    pub fn compare(&self, x: impl Number) -> Result<Ordering> {
        let x = x.to_number().ok_or_else(|| IntervalError::not_a_number("x", &x))?;

        let below = self
            .lower
            .is_some_and(|lower| x < lower || (!self.lower_inclusive && x == lower));
        if below {
            return Ok(Ordering::Less);
        }
        let above = self
            .upper
            .is_some_and(|upper| x > upper || (!self.upper_inclusive && x == upper));
        if above {
            return Ok(Ordering::Greater);
        }
        Ok(Ordering::Equal)
    }

    /// Same as [Interval::compare] but returns `-1`, `0` or `1`.
    pub fn compare_i32(&self, x: impl Number) -> Result<i32> {
        self.compare(x).map(|ord| ord as i32)
    }

    /// Returns true if `x` lies inside the interval.
    pub fn contains(&self, x: impl Number) -> Result<bool> {
        Ok(self.compare(x)? == Ordering::Equal)
    }

    /* ===== Parsing ===== */

    /// Replaces the endpoints and boundaries with those of the given text, e.g. `[0, 1)` or `(-INF, 5]`.
    ///
    /// The two endpoints must be separated by the current [separator](Interval::separator).
    /// Returns an error if the text is not a valid interval, if its upper endpoint is below its lower endpoint,
    /// or if both endpoints are equal but with different boundaries.
    /// On error, the interval is left untouched.
    pub fn parse(&mut self, text: &str) -> Result<&mut Self> {
        match self.read(text) {
            Ok((lower, upper, lower_inclusive, upper_inclusive)) => {
                tracing::trace!("Parsed interval {text:?} (separator: {:?})", self.separator);
                self.lower = Some(lower);
                self.upper = Some(upper);
                self.lower_inclusive = lower_inclusive;
                self.upper_inclusive = upper_inclusive;
                Ok(self)
            }
            Err(err) => {
                tracing::debug!("Rejected interval {text:?}: {err}");
                Err(err)
            }
        }
    }

    /// Reads and validates the text, without modifying the interval.
    fn read(&self, text: &str) -> Result<(f64, f64, bool, bool)> {
        let grammar = Grammar::for_separator(&self.separator).map_err(|_| IntervalError::malformed(text))?;
        let parts = grammar.split(text).ok_or_else(|| IntervalError::malformed(text))?;

        let lower = parse_endpoint(parts.lower).ok_or_else(|| IntervalError::malformed(text))?;
        let upper = parse_endpoint(parts.upper).ok_or_else(|| IntervalError::malformed(text))?;

        if upper < lower {
            return Err(IntervalError::OutOfOrder { lower, upper });
        }
        if lower == upper && parts.lower_inclusive != parts.upper_inclusive {
            return Err(IntervalError::MismatchedBoundaries { endpoint: lower });
        }
        Ok((lower, upper, parts.lower_inclusive, parts.upper_inclusive))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{open}")?;
        if let Some(lower) = self.lower {
            write!(f, "{}", format_endpoint(lower))?;
        }
        write!(f, "{}", self.separator)?;
        if let Some(upper) = self.upper {
            write!(f, "{}", format_endpoint(upper))?;
        }
        write!(f, "{close}")
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        let mut interval = Interval::new();
        interval.parse(s)?;
        Ok(interval)
    }
}

impl TryFrom<&str> for Interval {
    type Error = IntervalError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}
