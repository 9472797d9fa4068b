use std::error::Error;
use std::fmt;

/// InputValueError is used if some simulation option, parameter, or method argument does not
/// fulfill the posed requirements, e.g., a negative time step or a fuel level above 100%.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// is_non_negative returns true if x is a finite or infinite value greater or equal to zero.
/// NaN is never non-negative.
pub fn is_non_negative(x: f64) -> bool {
    x >= 0.0
}

/// is_within returns true if x lies in the closed interval [lower, upper]. NaN is never within.
pub fn is_within(x: f64, lower: f64, upper: f64) -> bool {
    lower <= x && x <= upper
}
