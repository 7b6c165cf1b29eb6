/*!
Boolean LP relaxation and thresholded rounding, solved by [`totsu_core`].

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

A boolean LP
\\[
\begin{array}{ll}
{\rm minimize} & c^T x \\\\
{\rm subject \ to} & A x \preceq b \\\\
& x_i \in \lbrace 0, 1 \rbrace
\end{array}
\\]
is hard in general. Relaxing \\( x_i \in \lbrace 0, 1 \rbrace \\) to \\( 0 \le x_i \le 1 \\) gives an LP
whose optimal value is a lower bound of the boolean problem.
Rounding its solution by a threshold \\( t \\) gives a boolean candidate, which may or may not be feasible.

# General usage

1. Construct a [`BoolLp`] with matrices using [`MatBuild`], or generate one by [`BoolLp::random`].
1. Choose a [`totsu_core::LinAlgEx`] implementation to use, e.g. [`prelude::FloatGeneric`].
1. Create a [`TotsuSolve`] instance and optionally set its parameters.
1. Invoke [`relax_and_round`] with a threshold,
   or [`solve_relaxed`] followed by [`sweep`] to explore thresholds.

# Examples

```
use float_eq::assert_float_eq;
use totsu_boolrelax::prelude::*;
use totsu_boolrelax::*;

//env_logger::init(); // Use any logger crate as `totsu_boolrelax` uses `log` crate.

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;

// minimize -x0 - 2 x1  s.t.  x0 + x1 <= 1
let vec_c = AMatBuild::col(&[-1., -2.]);
let mat_a = AMatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[1., 1.]);
let vec_b = AMatBuild::col(&[1.]);

let lp = BoolLp::new(vec_c, mat_a, vec_b).unwrap();
let s = TotsuSolve::<La>::new().par(|p| {
    p.max_iter = Some(100_000);
});

let outcome = relax_and_round(&lp, &s, 0.5, 0.).unwrap();

assert_eq!(outcome.relaxed.status(), RelaxStatus::Optimal);
assert_float_eq!(outcome.relaxed.x().unwrap(), [0., 1.].as_ref(), abs_all <= 1e-3);

let rounded = outcome.rounded.unwrap();
assert_eq!(rounded.x_hat, vec![0., 1.]);
assert!(rounded.feasible);
```
*/

mod matbuild;

pub use matbuild::*;

//

mod error;

pub use error::*;

//

mod problem;

pub use problem::*;

//

mod instance;
mod backend;
mod relaxed;
mod procedure;

pub use instance::*;
pub use backend::*;
pub use relaxed::*;
pub use procedure::*;

//

pub mod rounding;
pub mod feasibility;
pub mod sweep;

pub use rounding::Rounded;
pub use sweep::{sweep, best_feasible, linspace_thresholds};

//

/// Prelude
pub mod prelude
{
    pub use totsu_core::solver::{SolverError, SolverParam};
    pub use totsu_core::{FloatGeneric, MatType};
}
