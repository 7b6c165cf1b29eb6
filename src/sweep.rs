use num_traits::{Float, ToPrimitive};
use totsu_core::LinAlgEx;
use crate::{BoolLp, RelaxError, Rounded, Sense};

//

/// Evenly spaced thresholds.
///
/// Returns `k` thresholds from \\(0\\) to \\(1\\) inclusive (`[0]` if `k == 1`).
pub fn linspace_thresholds<F: Float>(k: usize) -> Vec<F>
{
    match k {
        0 => Vec::new(),
        1 => vec![F::zero()],
        _ => {
            // k > 1 always fits in a float
            let d = F::from(k - 1).unwrap();
            (0.. k).map(|i| F::from(i).unwrap() / d).collect()
        },
    }
}

/// Evaluates rounded candidates over thresholds.
///
/// Every threshold is evaluated independently from the same relaxed solution.
/// Returns [`Rounded`] records in the order of `thresholds`,
/// or `Err` with [`RelaxError::InvalidThreshold`] at the first threshold out of \\([0, 1]\\).
/// * `lp` is the boolean LP.
/// * `x_rlx` is its relaxed solution.
/// * `thresholds` to evaluate.
/// * `tol` is a feasibility tolerance; zero means the strict check.
pub fn sweep<L: LinAlgEx>(lp: &BoolLp<L>, x_rlx: &[L::F], thresholds: &[L::F], tol: L::F) -> Result<Vec<Rounded<L::F>>, RelaxError>
{
    thresholds.iter()
    .map(|&t| -> Result<Rounded<L::F>, RelaxError> {
        let rnd = lp.evaluate(x_rlx, t, tol)?;
        log::trace!("threshold {:?}: feasible {}, objective {:?}, max_violation {:?}",
            t.to_f64(), rnd.feasible, rnd.objective.to_f64(), rnd.max_violation.to_f64());
        Ok(rnd)
    })
    .collect()
}

/// Picks the feasible candidate with the best objective value.
///
/// The policy is up to a caller; nothing else in this crate chooses a threshold.
/// Returns `None` if no candidate is feasible. A tie resolves to the earlier one.
pub fn best_feasible<F: Float>(points: &[Rounded<F>], sense: Sense) -> Option<&Rounded<F>>
{
    points.iter()
    .filter(|p| p.feasible)
    .fold(None, |best: Option<&Rounded<F>>, p| {
        match best {
            Some(b) if !sense.better(p.objective, b.objective) => Some(b),
            _ => Some(p),
        }
    })
}

//

#[test]
fn test_linspace()
{
    use float_eq::assert_float_eq;

    assert!(linspace_thresholds::<f64>(0).is_empty());
    assert_eq!(linspace_thresholds::<f64>(1), vec![0.]);

    let t = linspace_thresholds::<f64>(5);
    assert_float_eq!(t.as_slice(), [0., 0.25, 0.5, 0.75, 1.].as_ref(), abs_all <= 1e-15);
}

#[test]
fn test_best_feasible()
{
    let pt = |threshold: f64, feasible, objective| Rounded {
        threshold,
        x_hat: Vec::new(),
        feasible,
        objective,
        max_violation: 0.,
    };
    let points = vec![
        pt(0.0, false, -5.),
        pt(0.3, true, -2.),
        pt(0.5, true, -3.),
        pt(0.7, true, -3.),
        pt(1.0, true, 0.),
    ];

    let b = best_feasible(&points, Sense::Minimize).unwrap();
    assert_eq!(b.threshold, 0.5);

    let b = best_feasible(&points, Sense::Maximize).unwrap();
    assert_eq!(b.threshold, 1.0);

    assert!(best_feasible(&points[0..1], Sense::Minimize).is_none());
}
