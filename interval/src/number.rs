//! Numeric values accepted as interval endpoints and comparison points.

use std::borrow::Cow;
use std::fmt::Display;

/// Textual form of positive infinity.
pub const POSITIVE_INFINITY: &str = "INF";

/// Textual form of negative infinity.
pub const NEGATIVE_INFINITY: &str = "-INF";

/// A value that may be used as an endpoint of an interval or compared against one.
///
/// Primitive integers and floats are numbers, except for a NaN float.
/// Strings are numbers when they hold a finite decimal literal (surrounding whitespace is ignored).
/// Infinity is only accepted as a float value, never through its textual spelling.
///
/// ```
/// use interval::Number;
///
/// assert_eq!(3u8.to_number(), Some(3.0));
/// assert_eq!(f64::NEG_INFINITY.to_number(), Some(f64::NEG_INFINITY));
/// assert_eq!(" -1.5e2 ".to_number(), Some(-150.0));
/// assert_eq!("foo".to_number(), None);
/// assert_eq!("INF".to_number(), None);
/// ```
pub trait Number: Display {
    /// Returns the numeric value, or `None` if this is not a number.
    fn to_number(&self) -> Option<f64>;
}

macro_rules! impl_number_for_int {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn to_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_number_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Number for f32 {
    fn to_number(&self) -> Option<f64> {
        Some(*self as f64).filter(|v| !v.is_nan())
    }
}

impl Number for f64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self).filter(|v| !v.is_nan())
    }
}

impl Number for str {
    fn to_number(&self) -> Option<f64> {
        // `f64::from_str` also accepts "inf" and "nan", and overflows to infinity
        self.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Number for String {
    fn to_number(&self) -> Option<f64> {
        self.as_str().to_number()
    }
}

impl<T: Number + ?Sized> Number for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

/// Renders an endpoint: `-INF`, `INF` or the shortest decimal text of the value.
pub fn format_endpoint(value: f64) -> Cow<'static, str> {
    if value == f64::NEG_INFINITY {
        Cow::Borrowed(NEGATIVE_INFINITY)
    } else if value == f64::INFINITY {
        Cow::Borrowed(POSITIVE_INFINITY)
    } else {
        Cow::Owned(value.to_string())
    }
}

/// Reads an endpoint token produced by [format_endpoint].
///
/// Returns `None` if the token is neither an infinity nor a finite number.
pub fn parse_endpoint(token: &str) -> Option<f64> {
    match token {
        NEGATIVE_INFINITY => Some(f64::NEG_INFINITY),
        POSITIVE_INFINITY => Some(f64::INFINITY),
        _ => token.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}
