use num_traits::Float;
use crate::RelaxError;

//

/// Rounded candidate evaluated against a boolean LP.
#[derive(Debug, Clone, PartialEq)]
pub struct Rounded<F: Float>
{
    /// Threshold \\(t\\) used for rounding.
    pub threshold: F,
    /// Boolean candidate \\(\hat{x}\\) whose elements are exactly zero or one.
    pub x_hat: Vec<F>,
    /// `true` if \\(\hat{x}\\) satisfies the constraints within the tolerance given.
    pub feasible: bool,
    /// Objective value \\(c^T \hat{x}\\).
    pub objective: F,
    /// \\(\max(0, \max_i (A \hat{x} - b)_i)\\).
    pub max_violation: F,
}

/// Thresholded rounding.
///
/// Returns \\(\hat{x}\\) where \\(\hat{x}_i = 1\\) if \\(x_i \ge t\\), otherwise \\(0\\),
/// or `Err` with [`RelaxError::InvalidThreshold`] if \\(t \notin [0, 1]\\).
/// * `x_rlx` is a relaxed solution.
/// * `threshold` is \\(t\\); a tie resolves to one.
pub fn round_threshold<F: Float>(x_rlx: &[F], threshold: F) -> Result<Vec<F>, RelaxError>
{
    if !(threshold >= F::zero() && threshold <= F::one()) {
        log::error!("Threshold {:?} out of [0, 1]", threshold.to_f64());
        return Err(RelaxError::InvalidThreshold);
    }

    Ok(x_rlx.iter()
       .map(|&v| if v >= threshold {F::one()} else {F::zero()})
       .collect())
}

//

#[test]
fn test_round1()
{
    assert_eq!(round_threshold(&[0.6, 0.3], 0.5), Ok(vec![1., 0.]));

    // inclusive at the threshold
    assert_eq!(round_threshold(&[0.5, 0.4999], 0.5), Ok(vec![1., 0.]));
    assert_eq!(round_threshold(&[0.0, 0.4], 0.), Ok(vec![1., 1.]));
    assert_eq!(round_threshold(&[1.0, 0.9999], 1.), Ok(vec![1., 0.]));

    assert_eq!(round_threshold::<f64>(&[], 0.5), Ok(vec![]));
}

#[test]
fn test_round_invalid()
{
    assert_eq!(round_threshold(&[0.5], -0.1), Err(RelaxError::InvalidThreshold));
    assert_eq!(round_threshold(&[0.5], 1.1), Err(RelaxError::InvalidThreshold));
    assert_eq!(round_threshold(&[0.5], f64::NAN), Err(RelaxError::InvalidThreshold));
}
