use thiserror::Error;

/// Error raised when an interval operation is given an invalid argument.
///
/// Every variant is a synchronous rejection of the call: the interval it was
/// called on is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    /// A bound or a compared point is not a number.
    #[error("expected parameter `{argument}` to be a number, got \"{value}\"")]
    NotANumber { argument: &'static str, value: String },
    /// The text does not follow the interval grammar, e.g. `[0, 1]`.
    #[error("\"{input}\" is not a valid interval")]
    Malformed { input: String },
    /// The parsed upper bound is below the parsed lower bound.
    #[error("invalid interval: upper bound {upper} is less than lower bound {lower}")]
    OutOfOrder { lower: f64, upper: f64 },
    /// Both endpoints are equal but one boundary is inclusive and the other is not, e.g. `(1, 1]`.
    #[error("invalid interval: endpoints are both {endpoint} but the boundaries differ")]
    MismatchedBoundaries { endpoint: f64 },
}

impl IntervalError {
    /// All interval errors are invalid-argument errors.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }

    pub(crate) fn not_a_number(argument: &'static str, value: impl ToString) -> Self {
        IntervalError::NotANumber {
            argument,
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed(input: &str) -> Self {
        IntervalError::Malformed {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;
