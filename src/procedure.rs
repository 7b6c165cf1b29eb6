use num_traits::{Float, Zero, One};
use totsu_core::LinAlgEx;
use crate::{BoolLp, LpSolve, Relaxed, RelaxError, Rounded, solve_relaxed};

//

/// Outcome of [`relax_and_round`].
#[derive(Debug, Clone)]
pub struct Outcome<F: Float>
{
    /// Relaxed solution with its status and optimal value.
    pub relaxed: Relaxed<F>,
    /// Rounded candidate; `None` unless the relaxed solution is optimal.
    pub rounded: Option<Rounded<F>>,
}

/// Relaxation and rounding.
///
/// 1. Relaxes `lp` and solves it by `solver`.
/// 1. If optimal, rounds the relaxed solution by `threshold` and checks its feasibility.
///
/// Returns `Ok` with [`Outcome`]; an infeasible or unbounded relaxation and an infeasible candidate are
/// reported there, not as `Err`.
/// `Err` is [`RelaxError::InvalidThreshold`], checked before solving, or a formulation error.
/// * `tol` is a feasibility tolerance; zero means the strict check.
pub fn relax_and_round<L, S>(lp: &BoolLp<L>, solver: &S, threshold: L::F, tol: L::F) -> Result<Outcome<L::F>, RelaxError>
where L: LinAlgEx, S: LpSolve<L>
{
    if !(threshold >= L::F::zero() && threshold <= L::F::one()) {
        log::error!("Threshold out of [0, 1]");
        return Err(RelaxError::InvalidThreshold);
    }

    let relaxed = solve_relaxed(lp, solver)?;

    let rounded = match relaxed.x() {
        Some(x_rlx) => {
            let rnd = lp.evaluate(x_rlx, threshold, tol)?;
            log::info!("rounded candidate: feasible {}", rnd.feasible);
            Some(rnd)
        },
        None => None,
    };

    Ok(Outcome {
        relaxed,
        rounded,
    })
}
