use core::fmt::{Debug, LowerExp};
use num_traits::Zero;
use totsu_core::solver::{Solver, SolverError, SolverParam, Operator};
use totsu_core::LinAlgEx;
use crate::Formulation;

//

/// Linear program solver trait
///
/// The collaborator which takes a [`Formulation`]
/// (objective direction, objective vector, constraint matrices and bounds, variable bounds)
/// and solves it.
pub trait LpSolve<L: LinAlgEx>
{
    /// Solves a linear program.
    ///
    /// Returns `Ok` with an optimal \\(x\\) of length [`Formulation::n`],
    /// or `Err` with [`SolverError`] including infeasible and unbounded certificates.
    fn solve_lp(&self, form: &Formulation<'_, L>) -> Result<Vec<L::F>, SolverError>;
}

//

/// [`LpSolve`] implementation by [`totsu_core::solver::Solver`].
pub struct TotsuSolve<L: LinAlgEx>
{
    /// solver parameters.
    pub par: SolverParam<L::F>,
}

impl<L: LinAlgEx> TotsuSolve<L>
{
    /// Creates an instance with default [`SolverParam`].
    pub fn new() -> Self
    {
        TotsuSolve {
            par: SolverParam::default(),
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns [`TotsuSolve`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SolverParam<L::F>)
    {
        f(&mut self.par);
        self
    }
}

impl<L: LinAlgEx> Default for TotsuSolve<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<L: LinAlgEx> LpSolve<L> for TotsuSolve<L>
where L::F: Debug + LowerExp
{
    fn solve_lp(&self, form: &Formulation<'_, L>) -> Result<Vec<L::F>, SolverError>
    {
        let (op_c, op_a, op_b, cone) = form.problem();

        let mut work = vec![L::F::zero(); Solver::<L>::query_worklen(op_a.size())];

        let par = self.par.clone();
        let s = Solver::<L>::new().par(|p| *p = par);
        let (x, _y) = s.solve((op_c, op_a, op_b, cone, work.as_mut_slice()))?;

        Ok(x.to_vec())
    }
}
