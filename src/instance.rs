use num_traits::{Zero, One};
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use totsu_core::{LinAlgEx, MatType};
use crate::{MatBuild, RelaxError, Formulation, Objective, Constraint, Sense};
use crate::{feasibility, rounding, Rounded};

//

/// Boolean linear program
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The problem is
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & c^T x \\\\
/// {\rm subject \ to} & A x \preceq b \\\\
/// & x_i \in \lbrace 0, 1 \rbrace, \quad i = 1, \ldots, n,
/// \end{array}
/// \\]
/// where
/// - variables \\( x \in \mathbb{R}^n \\)
/// - \\( c \in \mathbb{R}^n \\)
/// - \\( A \in \mathbb{R}^{m \times n},\ b \in \mathbb{R}^m \\).
///
/// Its relaxation (see [`BoolLp::relax`]) replaces \\( x_i \in \lbrace 0, 1 \rbrace \\) with \\( 0 \le x_i \le 1 \\).
pub struct BoolLp<L: LinAlgEx>
{
    sense: Sense,
    vec_c: MatBuild<L>,
    mat_a: MatBuild<L>,
    vec_b: MatBuild<L>,
}

impl<L: LinAlgEx> BoolLp<L>
{
    /// Creates a boolean LP with given data.
    ///
    /// Returns a [`BoolLp`] instance to be minimized,
    /// or `Err` with [`RelaxError::SizeMismatch`] if the sizes are inconsistent.
    /// * `vec_c` is \\(c\\).
    /// * `mat_a` is \\(A\\).
    /// * `vec_b` is \\(b\\).
    pub fn new(vec_c: MatBuild<L>, mat_a: MatBuild<L>, vec_b: MatBuild<L>) -> Result<Self, RelaxError>
    {
        let n = vec_c.size().0;
        let m = vec_b.size().0;

        if vec_c.size() != (n, 1) || vec_b.size() != (m, 1) || mat_a.size() != (m, n) {
            log::error!("Size mismatch: vec_c{:?}, mat_a{:?}, vec_b{:?}", vec_c.size(), mat_a.size(), vec_b.size());
            return Err(RelaxError::SizeMismatch);
        }

        Ok(BoolLp {
            sense: Sense::Minimize,
            vec_c,
            mat_a,
            vec_b,
        })
    }

    /// Changes the objective direction.
    pub fn sense(mut self, sense: Sense) -> Self
    {
        self.sense = sense;
        self
    }

    /// Number of variables and constraints.
    ///
    /// Returns a tuple of \\(n\\) and \\(m\\).
    pub fn dim(&self) -> (usize, usize)
    {
        (self.vec_c.size().0, self.vec_b.size().0)
    }

    pub fn objective_sense(&self) -> Sense
    {
        self.sense
    }

    pub fn vec_c(&self) -> &MatBuild<L>
    {
        &self.vec_c
    }

    pub fn mat_a(&self) -> &MatBuild<L>
    {
        &self.mat_a
    }

    pub fn vec_b(&self) -> &MatBuild<L>
    {
        &self.vec_b
    }

    /// Relaxes to a linear program.
    ///
    /// Returns the [`Formulation`] with \\(A x \preceq b\\) and \\(0 \le x_i \le 1\\),
    /// or `Err` as [`Formulation::new`] does.
    pub fn relax(&self) -> Result<Formulation<'_, L>, RelaxError>
    {
        Formulation::new(
            Objective {
                sense: self.sense,
                vec_c: &self.vec_c,
            },
            vec![
                Constraint::LessEq {
                    mat_g: &self.mat_a,
                    vec_h: &self.vec_b,
                },
                Constraint::Bounds {
                    lower: L::F::zero(),
                    upper: L::F::one(),
                },
            ],
        )
    }

    /// Objective value \\(c^T x\\).
    pub fn objective(&self, x: &[L::F]) -> L::F
    {
        self.vec_c.dot_col(x)
    }

    /// Strict feasibility of \\(A x \preceq b\\). See [`feasibility::is_feasible`].
    pub fn is_feasible(&self, x: &[L::F]) -> bool
    {
        feasibility::is_feasible(&self.mat_a, &self.vec_b, x)
    }

    /// Feasibility of \\(A x \preceq b + tol \mathbb{1}\\). See [`feasibility::is_feasible_tol`].
    pub fn is_feasible_tol(&self, x: &[L::F], tol: L::F) -> bool
    {
        feasibility::is_feasible_tol(&self.mat_a, &self.vec_b, x, tol)
    }

    /// See [`feasibility::max_violation`].
    pub fn max_violation(&self, x: &[L::F]) -> L::F
    {
        feasibility::max_violation(&self.mat_a, &self.vec_b, x)
    }

    /// Rounds a relaxed solution by a threshold and evaluates the candidate.
    ///
    /// Returns the [`Rounded`] record, or `Err` with [`RelaxError::InvalidThreshold`].
    /// * `x_rlx` is a relaxed solution.
    /// * `threshold` is \\(t \in [0, 1]\\).
    /// * `tol` is a feasibility tolerance; zero means the strict check.
    pub fn evaluate(&self, x_rlx: &[L::F], threshold: L::F, tol: L::F) -> Result<Rounded<L::F>, RelaxError>
    {
        let x_hat = rounding::round_threshold(x_rlx, threshold)?;

        Ok(Rounded {
            threshold,
            feasible: self.is_feasible_tol(&x_hat, tol),
            objective: self.objective(&x_hat),
            max_violation: self.max_violation(&x_hat),
            x_hat,
        })
    }
}

impl<L: LinAlgEx> BoolLp<L>
where Standard: Distribution<L::F>
{
    /// Generates a random instance.
    ///
    /// \\(A_{ij} \sim U[0, 1)\\), \\(b = {1 \over 2} A \mathbb{1}\\), \\(c_i \sim -U[0, 1)\\).
    /// With nonnegative \\(A\\) and \\(b\\), \\(x = 0\\) is always feasible.
    /// * `m` is a number of constraints.
    /// * `n` is a number of variables.
    /// * `rng` is a random number generator whose seed is up to the caller.
    pub fn random<R: Rng>(m: usize, n: usize, rng: &mut R) -> Self
    {
        let f1 = L::F::one();
        let half = f1 / (f1 + f1);

        let mat_a = MatBuild::new(MatType::General(m, n))
                    .by_fn(|_, _| rng.gen());
        let vec_b = MatBuild::col(&mat_a.mul_vec(&vec![half; n]));
        let vec_c = MatBuild::new(MatType::General(n, 1))
                    .by_fn(|_, _| -rng.gen::<L::F>());

        BoolLp {
            sense: Sense::Minimize,
            vec_c,
            mat_a,
            vec_b,
        }
    }
}

//

#[test]
fn test_boollp_new()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let vec_c = MatBuild::<L>::col(&[1., 2.]);
    let mat_a = MatBuild::<L>::new(MatType::General(1, 2));
    let vec_b = MatBuild::<L>::col(&[1., 1.]);

    let rslt = BoolLp::new(vec_c, mat_a, vec_b);
    assert_eq!(rslt.err(), Some(RelaxError::SizeMismatch));

    let vec_c = MatBuild::<L>::col(&[1., 2., 3.]);
    let mat_a = MatBuild::<L>::new(MatType::General(2, 2));
    let vec_b = MatBuild::<L>::col(&[1., 1.]);

    let rslt = BoolLp::new(vec_c, mat_a, vec_b);
    assert_eq!(rslt.err(), Some(RelaxError::SizeMismatch));
}

#[test]
fn test_boollp_random()
{
    use float_eq::assert_float_eq;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let lp1 = BoolLp::<L>::random(6, 4, &mut Xoshiro256StarStar::seed_from_u64(1));
    let lp2 = BoolLp::<L>::random(6, 4, &mut Xoshiro256StarStar::seed_from_u64(1));

    assert_eq!(lp1.dim(), (4, 6));
    assert_float_eq!(lp1.mat_a().as_ref(), lp2.mat_a().as_ref(), abs_all <= 0.);
    assert_float_eq!(lp1.vec_c().as_ref(), lp2.vec_c().as_ref(), abs_all <= 0.);

    assert!(lp1.mat_a().as_ref().iter().all(|&a| (0. ..1.).contains(&a)));
    assert!(lp1.vec_c().as_ref().iter().all(|&c| c <= 0.));

    // b = A*1/2
    for r in 0.. 6 {
        let row_sum: f64 = (0.. 4).map(|c| lp1.mat_a()[(r, c)]).sum();
        assert_float_eq!(lp1.vec_b()[(r, 0)], row_sum / 2., abs <= 1e-12);
    }

    // zero is feasible, all-ones is not
    assert!(lp1.is_feasible(&[0.; 4]));
    assert!(!lp1.is_feasible(&[1.; 4]));
}

#[test]
fn test_boollp_evaluate()
{
    use float_eq::assert_float_eq;
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let lp = BoolLp::<L>::new(
        MatBuild::col(&[-1., -2.]),
        MatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[1., 1.]),
        MatBuild::col(&[1.]),
    ).unwrap();

    let rnd = lp.evaluate(&[0.6, 0.8], 0.5, 0.).unwrap();
    assert_eq!(rnd.x_hat, vec![1., 1.]);
    assert!(!rnd.feasible);
    assert_float_eq!(rnd.max_violation, 1., abs <= 1e-12);
    assert_float_eq!(rnd.objective, -3., abs <= 1e-12);

    let rnd = lp.evaluate(&[0.6, 0.8], 0.5, 1.).unwrap();
    assert!(rnd.feasible);

    // a NaN row is never satisfied
    let lp = BoolLp::<L>::new(
        MatBuild::col(&[1.]),
        MatBuild::new(MatType::General(1, 1)).iter_rowmaj(&[f64::NAN]),
        MatBuild::col(&[1.]),
    ).unwrap();

    let rnd = lp.evaluate(&[1.], 0.5, 0.).unwrap();
    assert_eq!(rnd.x_hat, vec![1.]);
    assert!(!lp.is_feasible(&rnd.x_hat));
    assert_eq!(rnd.feasible, lp.is_feasible(&rnd.x_hat));
}
