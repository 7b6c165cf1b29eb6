use num_traits::{Float, Zero, ToPrimitive};
use totsu_core::solver::SolverError;
use totsu_core::LinAlgEx;
use crate::{BoolLp, LpSolve, RelaxError, rounding};

//

/// Status of a relaxed solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelaxStatus
{
    Optimal,
    Infeasible,
    Unbounded,
    /// Any other failure of the solver.
    Failure(SolverError),
}

impl core::fmt::Display for RelaxStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            RelaxStatus::Optimal    => write!(f, "optimal"),
            RelaxStatus::Infeasible => write!(f, "infeasible"),
            RelaxStatus::Unbounded  => write!(f, "unbounded"),
            RelaxStatus::Failure(e) => write!(f, "solver_error: {}", e),
        }
    }
}

//

/// Relaxed solution.
///
/// Produced once by [`solve_relaxed`] and immutable afterward.
#[derive(Debug, Clone)]
pub struct Relaxed<F: Float>
{
    status: RelaxStatus,
    x: Vec<F>,
    value: F,
}

impl<F: Float> Relaxed<F>
{
    pub fn status(&self) -> RelaxStatus
    {
        self.status
    }

    pub fn is_optimal(&self) -> bool
    {
        self.status == RelaxStatus::Optimal
    }

    /// Relaxed solution \\(x_{\rm rlx}\\).
    ///
    /// Returns `None` unless [`RelaxStatus::Optimal`].
    pub fn x(&self) -> Option<&[F]>
    {
        if self.is_optimal() {
            Some(&self.x)
        }
        else {
            None
        }
    }

    /// Optimal value of the relaxed problem.
    ///
    /// \\(+\infty\\) if infeasible and \\(-\infty\\) if unbounded when minimizing,
    /// the opposite when maximizing, NaN on other failures.
    pub fn value(&self) -> F
    {
        self.value
    }

    /// Rounds the relaxed solution by a threshold. See [`rounding::round_threshold`].
    ///
    /// Returns `Err` with [`RelaxError::NotOptimal`] if no solution is present.
    pub fn round(&self, threshold: F) -> Result<Vec<F>, RelaxError>
    {
        match self.x() {
            Some(x) => rounding::round_threshold(x, threshold),
            None => {
                log::error!("Cannot round: status {}", self.status);
                Err(RelaxError::NotOptimal)
            },
        }
    }
}

//

/// Relaxes a boolean LP and solves it.
///
/// Returns `Ok` with [`Relaxed`] whose status tells an outcome of the solver,
/// or `Err` if the relaxation cannot be formulated.
/// * `lp` is the boolean LP.
/// * `solver` is the [`LpSolve`] collaborator.
///
/// The solution is clamped into the variable bounds,
/// since an approximate solver may leave them by its tolerance.
pub fn solve_relaxed<L, S>(lp: &BoolLp<L>, solver: &S) -> Result<Relaxed<L::F>, RelaxError>
where L: LinAlgEx, S: LpSolve<L>
{
    let form = lp.relax()?;
    let n = form.n();
    let sense = form.objective().sense;

    log::info!("----- Solving relaxation: n {}, m {}", n, lp.dim().1);

    let status = match solver.solve_lp(&form) {
        Ok(x) if x.len() == n => {
            let (lower, upper) = form.bounds().unwrap_or((L::F::neg_infinity(), L::F::infinity()));

            let mut clamped = L::F::zero();
            let x: Vec<L::F> = x.iter().map(|&v| {
                let c = v.max(lower).min(upper);
                clamped = clamped.max((c - v).abs());
                c
            }).collect();
            log::debug!("clamped into bounds by {:.2e}", clamped.to_f64().unwrap_or(f64::NAN));

            let value = lp.objective(&x);
            log::info!("----- Optimal: {:.6e}", value.to_f64().unwrap_or(f64::NAN));

            return Ok(Relaxed {
                status: RelaxStatus::Optimal,
                x,
                value,
            });
        },
        Ok(x) => {
            log::error!("Solution length {} must be {}", x.len(), n);
            RelaxStatus::Failure(SolverError::InvalidOp)
        },
        Err(SolverError::Infeasible) => RelaxStatus::Infeasible,
        Err(SolverError::Unbounded) => RelaxStatus::Unbounded,
        Err(e) => RelaxStatus::Failure(e),
    };

    log::warn!("----- {}", status);

    let value = match status {
        RelaxStatus::Infeasible => sense.infeasible_value(),
        RelaxStatus::Unbounded => -sense.infeasible_value::<L::F>(),
        _ => L::F::nan(),
    };

    Ok(Relaxed {
        status,
        x: Vec::new(),
        value,
    })
}

//

#[test]
fn test_relaxed_status()
{
    use totsu_core::{FloatGeneric, MatType};
    use crate::{MatBuild, Formulation};

    type L = FloatGeneric<f64>;

    struct FailSolve(SolverError);

    impl LpSolve<L> for FailSolve
    {
        fn solve_lp(&self, _form: &Formulation<'_, L>) -> Result<Vec<f64>, SolverError>
        {
            Err(self.0)
        }
    }

    let lp = BoolLp::<L>::new(
        MatBuild::col(&[-1., -1.]),
        MatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[1., 1.]),
        MatBuild::col(&[1.]),
    ).unwrap();

    let rlx = solve_relaxed(&lp, &FailSolve(SolverError::Infeasible)).unwrap();
    assert_eq!(rlx.status(), RelaxStatus::Infeasible);
    assert_eq!(rlx.value(), f64::INFINITY);
    assert!(rlx.x().is_none());
    assert_eq!(rlx.round(0.5), Err(RelaxError::NotOptimal));
    assert_eq!(format!("{}", rlx.status()), "infeasible");

    let rlx = solve_relaxed(&lp, &FailSolve(SolverError::Unbounded)).unwrap();
    assert_eq!(rlx.status(), RelaxStatus::Unbounded);
    assert_eq!(rlx.value(), f64::NEG_INFINITY);

    let rlx = solve_relaxed(&lp, &FailSolve(SolverError::ExcessIter)).unwrap();
    assert_eq!(rlx.status(), RelaxStatus::Failure(SolverError::ExcessIter));
    assert!(rlx.value().is_nan());
}

#[test]
fn test_relaxed_clamp()
{
    use float_eq::assert_float_eq;
    use totsu_core::{FloatGeneric, MatType};
    use crate::{MatBuild, Formulation};

    type L = FloatGeneric<f64>;

    struct FixedSolve(Vec<f64>);

    impl LpSolve<L> for FixedSolve
    {
        fn solve_lp(&self, _form: &Formulation<'_, L>) -> Result<Vec<f64>, SolverError>
        {
            Ok(self.0.clone())
        }
    }

    let lp = BoolLp::<L>::new(
        MatBuild::col(&[-1., -2., 1.]),
        MatBuild::new(MatType::General(1, 3)).iter_rowmaj(&[1., 1., 1.]),
        MatBuild::col(&[2.]),
    ).unwrap();

    let rlx = solve_relaxed(&lp, &FixedSolve(vec![1. + 1e-7, 1. - 1e-7, -1e-8])).unwrap();
    assert!(rlx.is_optimal());
    assert_float_eq!(rlx.x().unwrap(), [1., 1. - 1e-7, 0.].as_ref(), abs_all <= 1e-15);
    assert_float_eq!(rlx.value(), -3. + 2e-7, abs <= 1e-12);

    let rlx = solve_relaxed(&lp, &FixedSolve(vec![0.5])).unwrap();
    assert_eq!(rlx.status(), RelaxStatus::Failure(SolverError::InvalidOp));
}
