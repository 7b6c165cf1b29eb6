/// Relaxation errors.
///
/// Details of a failure are output by `log::error!` where it is detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelaxError
{
    /// Inconsistent sizes among cost, constraint matrix and right-hand side.
    SizeMismatch,
    /// Variable bounds with lower greater than upper.
    InvalidBounds,
    /// Rounding threshold out of \[0, 1\] or NaN.
    InvalidThreshold,
    /// No optimal relaxed solution to round.
    NotOptimal,
}

impl core::fmt::Display for RelaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            RelaxError::SizeMismatch     => "SizeMismatch: inconsistent problem dimensions",
            RelaxError::InvalidBounds    => "InvalidBounds: lower bound exceeds upper bound",
            RelaxError::InvalidThreshold => "InvalidThreshold: threshold out of [0, 1]",
            RelaxError::NotOptimal       => "NotOptimal: no optimal relaxed solution",
        })
    }
}

impl std::error::Error for RelaxError {}
