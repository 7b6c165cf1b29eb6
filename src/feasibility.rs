//! Feasibility check of \\(A x \preceq b\\)
//!
//! <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
//! <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
//!
//! These never fail for consistent sizes; a length mismatch panics as the other builders do.

use num_traits::{Float, Zero};
use totsu_core::LinAlgEx;
use crate::MatBuild;

fn residual<L: LinAlgEx>(mat_a: &MatBuild<L>, vec_b: &MatBuild<L>, x: &[L::F]) -> Vec<L::F>
{
    let (m, _) = mat_a.size();
    assert_eq!(vec_b.size(), (m, 1));

    let mut r = mat_a.mul_vec(x);
    for (i, e) in r.iter_mut().enumerate() {
        *e = *e - vec_b[(i, 0)];
    }
    r
}

/// Strict elementwise check.
///
/// Returns `true` if \\((A x)_i \le b_i\\) for every \\(i\\).
pub fn is_feasible<L: LinAlgEx>(mat_a: &MatBuild<L>, vec_b: &MatBuild<L>, x: &[L::F]) -> bool
{
    is_feasible_tol(mat_a, vec_b, x, L::F::zero())
}

/// Elementwise check with a tolerance.
///
/// Returns `true` if \\((A x)_i \le b_i + tol\\) for every \\(i\\).
/// * `tol` is an absolute tolerance for floating point error; zero is the same as [`is_feasible`].
pub fn is_feasible_tol<L: LinAlgEx>(mat_a: &MatBuild<L>, vec_b: &MatBuild<L>, x: &[L::F], tol: L::F) -> bool
{
    residual(mat_a, vec_b, x).iter().all(|&r| r <= tol)
}

/// Maximum constraint violation.
///
/// Returns \\(\max(0, \max_i (A x - b)_i)\\).
pub fn max_violation<L: LinAlgEx>(mat_a: &MatBuild<L>, vec_b: &MatBuild<L>, x: &[L::F]) -> L::F
{
    residual(mat_a, vec_b, x).iter().fold(L::F::zero(), |acc, &r| acc.max(r))
}

//

#[test]
fn test_feasibility1()
{
    use float_eq::assert_float_eq;
    use totsu_core::{FloatGeneric, MatType};

    type L = FloatGeneric<f64>;

    let mat_a = MatBuild::<L>::new(MatType::General(1, 2)).iter_rowmaj(&[1., 1.]);
    let vec_b = MatBuild::<L>::col(&[1.]);

    assert!(is_feasible(&mat_a, &vec_b, &[1., 0.]));
    assert!(!is_feasible(&mat_a, &vec_b, &[1., 1.]));
    assert_float_eq!(max_violation(&mat_a, &vec_b, &[1., 1.]), 1., abs <= 1e-12);
    assert_float_eq!(max_violation(&mat_a, &vec_b, &[0., 0.]), 0., abs <= 1e-12);

    // just above the bound
    assert!(!is_feasible(&mat_a, &vec_b, &[1., 1e-9]));
    assert!(is_feasible_tol(&mat_a, &vec_b, &[1., 1e-9], 1e-6));
}
