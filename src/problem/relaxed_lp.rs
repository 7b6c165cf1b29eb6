use num_traits::{Float, Zero, One};
use totsu_core::solver::{SliceLike, Operator, Cone};
use totsu_core::{LinAlgEx, MatOp, ConeRPos, splitm, splitm_mut};
use crate::{MatBuild, RelaxError};

//

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense
{
    Minimize,
    Maximize,
}

impl Sense
{
    /// Compares two objective values.
    ///
    /// Returns `true` if `a` is strictly better than `b` in this direction.
    pub fn better<F: Float>(&self, a: F, b: F) -> bool
    {
        match self {
            Sense::Minimize => a < b,
            Sense::Maximize => a > b,
        }
    }

    /// Objective value reported for an infeasible problem.
    pub fn infeasible_value<F: Float>(&self) -> F
    {
        match self {
            Sense::Minimize => F::infinity(),
            Sense::Maximize => F::neg_infinity(),
        }
    }

    fn sign<F: Float>(&self) -> F
    {
        match self {
            Sense::Minimize => F::one(),
            Sense::Maximize => -F::one(),
        }
    }
}

//

/// Objective descriptor: direction and cost vector \\(c\\) (\\(n \times 1\\)).
pub struct Objective<'a, L: LinAlgEx>
{
    pub sense: Sense,
    pub vec_c: &'a MatBuild<L>,
}

/// Constraint descriptor.
pub enum Constraint<'a, L: LinAlgEx>
{
    /// \\(G x \preceq h\\) with \\(G \in \mathbb{R}^{m \times n},\ h \in \mathbb{R}^m\\).
    LessEq {
        mat_g: &'a MatBuild<L>,
        vec_h: &'a MatBuild<L>,
    },
    /// \\(l \le x_i \le u\\) for every variable.
    Bounds {
        lower: L::F,
        upper: L::F,
    },
}

impl<'a, L: LinAlgEx> Constraint<'a, L>
{
    fn rows(&self, n: usize) -> usize
    {
        match self {
            Constraint::LessEq { vec_h, .. } => vec_h.size().0,
            Constraint::Bounds { .. } => 2 * n,
        }
    }
}

//

pub struct FormulationOpC<'a, L: LinAlgEx>
{
    sign: L::F,
    vec_c: MatOp<'a, L>,
}

impl<'a, L: LinAlgEx> Operator<L> for FormulationOpC<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        self.vec_c.size()
    }

    fn op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        // y = a*sign*vec_c*x + b*y
        self.vec_c.op(self.sign * alpha, x, beta, y);
    }

    fn trans_op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        // y = a*sign*vec_c^T*x + b*y
        self.vec_c.trans_op(self.sign * alpha, x, beta, y);
    }

    fn absadd_cols(&self, tau: &mut L::Sl)
    {
        self.vec_c.absadd_cols(tau);
    }

    fn absadd_rows(&self, sigma: &mut L::Sl)
    {
        self.vec_c.absadd_rows(sigma);
    }
}

//

pub struct FormulationOpA<'a, L: LinAlgEx>
{
    n: usize,
    constraints: &'a [Constraint<'a, L>],
}

impl<'a, L: LinAlgEx> Operator<L> for FormulationOpA<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        let m = self.constraints.iter().map(|c| c.rows(self.n)).sum();

        (m, self.n)
    }

    fn op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let n = self.n;
        let mut offset = 0;

        for con in self.constraints {
            let rows = con.rows(n);
            let (_, mut y_rest) = y.split_mut(offset);
            let (mut y_c, _) = y_rest.split_mut(rows);

            match con {
                Constraint::LessEq { mat_g, .. } => {
                    // y_c = a*mat_g*x + b*y_c
                    mat_g.as_op().op(alpha, x, beta, &mut y_c);
                },
                Constraint::Bounds { .. } => {
                    splitm_mut!(y_c, (y_lo; n), (y_up; n));

                    // y_lo = a*-I*x + b*y_lo
                    L::scale(beta, &mut y_lo);
                    L::add(-alpha, x, &mut y_lo);

                    // y_up = a*I*x + b*y_up
                    L::scale(beta, &mut y_up);
                    L::add(alpha, x, &mut y_up);
                },
            }

            offset += rows;
        }
    }

    fn trans_op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let n = self.n;
        let f1 = L::F::one();
        let mut offset = 0;

        L::scale(beta, y);

        for con in self.constraints {
            let rows = con.rows(n);
            let (_, x_rest) = x.split_ref(offset);
            let (x_c, _) = x_rest.split_ref(rows);

            match con {
                Constraint::LessEq { mat_g, .. } => {
                    // y += a*mat_g^T*x_c
                    mat_g.as_op().trans_op(alpha, &x_c, f1, y);
                },
                Constraint::Bounds { .. } => {
                    splitm!(x_c, (x_lo; n), (x_up; n));

                    // y += a*-I*x_lo + a*I*x_up
                    L::add(-alpha, &x_lo, y);
                    L::add(alpha, &x_up, y);
                },
            }

            offset += rows;
        }
    }

    fn absadd_cols(&self, tau: &mut L::Sl)
    {
        let f1 = L::F::one();

        for con in self.constraints {
            match con {
                Constraint::LessEq { mat_g, .. } => {
                    mat_g.as_op().absadd_cols(tau);
                },
                Constraint::Bounds { .. } => {
                    // |-1| + |1| in every column
                    L::adds(f1 + f1, tau);
                },
            }
        }
    }

    fn absadd_rows(&self, sigma: &mut L::Sl)
    {
        let n = self.n;
        let f1 = L::F::one();
        let mut offset = 0;

        for con in self.constraints {
            let rows = con.rows(n);
            let (_, mut sigma_rest) = sigma.split_mut(offset);
            let (mut sigma_c, _) = sigma_rest.split_mut(rows);

            match con {
                Constraint::LessEq { mat_g, .. } => {
                    mat_g.as_op().absadd_rows(&mut sigma_c);
                },
                Constraint::Bounds { .. } => {
                    L::adds(f1, &mut sigma_c);
                },
            }

            offset += rows;
        }
    }
}

//

pub struct FormulationOpB<'a, L: LinAlgEx>
{
    n: usize,
    constraints: &'a [Constraint<'a, L>],
}

impl<'a, L: LinAlgEx> Operator<L> for FormulationOpB<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        let m = self.constraints.iter().map(|c| c.rows(self.n)).sum();

        (m, 1)
    }

    fn op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let n = self.n;
        let mut offset = 0;

        for con in self.constraints {
            let rows = con.rows(n);
            let (_, mut y_rest) = y.split_mut(offset);
            let (mut y_c, _) = y_rest.split_mut(rows);

            match con {
                Constraint::LessEq { vec_h, .. } => {
                    // y_c = a*vec_h*x + b*y_c
                    vec_h.as_op().op(alpha, x, beta, &mut y_c);
                },
                Constraint::Bounds { lower, upper } => {
                    let ax = alpha * x.get(0);

                    splitm_mut!(y_c, (y_lo; n), (y_up; n));

                    // y_lo = a*-lower*1*x + b*y_lo
                    L::scale(beta, &mut y_lo);
                    L::adds(-*lower * ax, &mut y_lo);

                    // y_up = a*upper*1*x + b*y_up
                    L::scale(beta, &mut y_up);
                    L::adds(*upper * ax, &mut y_up);
                },
            }

            offset += rows;
        }
    }

    fn trans_op(&self, alpha: L::F, x: &L::Sl, beta: L::F, y: &mut L::Sl)
    {
        let n = self.n;
        let f0 = L::F::zero();
        let f1 = L::F::one();
        let mut offset = 0;

        L::scale(beta, y);

        for con in self.constraints {
            let rows = con.rows(n);
            let (_, x_rest) = x.split_ref(offset);
            let (x_c, _) = x_rest.split_ref(rows);

            match con {
                Constraint::LessEq { vec_h, .. } => {
                    // y += a*vec_h^T*x_c
                    vec_h.as_op().trans_op(alpha, &x_c, f1, y);
                },
                Constraint::Bounds { lower, upper } => {
                    splitm!(x_c, (x_lo; n), (x_up; n));

                    let sum_lo = x_lo.get_ref().iter().fold(f0, |acc, &v| acc + v);
                    let sum_up = x_up.get_ref().iter().fold(f0, |acc, &v| acc + v);

                    // y += a*(-lower*1^T*x_lo + upper*1^T*x_up)
                    let val_y = y.get(0) + alpha * (*upper * sum_up - *lower * sum_lo);
                    y.set(0, val_y);
                },
            }

            offset += rows;
        }
    }

    fn absadd_cols(&self, tau: &mut L::Sl)
    {
        let n: L::F = num_traits::cast(self.n).unwrap();

        for con in self.constraints {
            match con {
                Constraint::LessEq { vec_h, .. } => {
                    vec_h.as_op().absadd_cols(tau);
                },
                Constraint::Bounds { lower, upper } => {
                    let val_tau = tau.get(0) + n * (lower.abs() + upper.abs());
                    tau.set(0, val_tau);
                },
            }
        }
    }

    fn absadd_rows(&self, sigma: &mut L::Sl)
    {
        let n = self.n;
        let mut offset = 0;

        for con in self.constraints {
            let rows = con.rows(n);
            let (_, mut sigma_rest) = sigma.split_mut(offset);
            let (mut sigma_c, _) = sigma_rest.split_mut(rows);

            match con {
                Constraint::LessEq { vec_h, .. } => {
                    vec_h.as_op().absadd_rows(&mut sigma_c);
                },
                Constraint::Bounds { lower, upper } => {
                    splitm_mut!(sigma_c, (sigma_lo; n), (sigma_up; n));

                    L::adds(lower.abs(), &mut sigma_lo);
                    L::adds(upper.abs(), &mut sigma_up);
                },
            }

            offset += rows;
        }
    }
}

//

pub struct FormulationCone<L: LinAlgEx>
{
    cone_rpos: ConeRPos<L>,
}

impl<L: LinAlgEx> Cone<L> for FormulationCone<L>
{
    fn proj(&mut self, dual_cone: bool, x: &mut L::Sl) -> Result<(), ()>
    {
        // every row is an inequality
        self.cone_rpos.proj(dual_cone, x)
    }

    fn product_group<G: Fn(&mut L::Sl) + Copy>(&self, dp_tau: &mut L::Sl, group: G)
    {
        self.cone_rpos.product_group(dp_tau, group);
    }
}

//

/// Linear program formulation
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// An objective descriptor and an immutable list of constraint descriptors:
/// \\[
/// \begin{array}{ll}
/// {\rm minimize\ or\ maximize} & c^T x \\\\
/// {\rm subject \ to} & G_k x \preceq h_k, \quad k \in {\rm LessEq} \\\\
/// & l_k \mathbb{1} \preceq x \preceq u_k \mathbb{1}, \quad k \in {\rm Bounds}.
/// \end{array}
/// \\]
///
/// The representation as a conic linear program is as follows:
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \pm c^T x \\\\
/// {\rm subject \ to} &
///   \left[ \begin{array}{c}
///   G_k \\\\ -I \\\\ I
///   \end{array} \right]
///   x + s =
///   \left[ \begin{array}{c}
///   h_k \\\\ -l_k \mathbb{1} \\\\ u_k \mathbb{1}
///   \end{array} \right] \\\\
/// & s \in \mathbb{R}\_+^{m_1 + \cdots}.
/// \end{array}
/// \\]
/// The identity blocks are applied without being stored.
pub struct Formulation<'a, L: LinAlgEx>
{
    objective: Objective<'a, L>,
    constraints: Vec<Constraint<'a, L>>,
}

impl<'a, L: LinAlgEx> Formulation<'a, L>
{
    /// Creates a formulation.
    ///
    /// Returns the [`Formulation`], or `Err` with [`RelaxError::SizeMismatch`] if
    /// `vec_c` is not a column or a constraint does not fit its size,
    /// or [`RelaxError::InvalidBounds`] if a lower bound exceeds its upper bound.
    pub fn new(objective: Objective<'a, L>, constraints: Vec<Constraint<'a, L>>) -> Result<Self, RelaxError>
    {
        let (n, one) = objective.vec_c.size();
        if one != 1 {
            log::error!("Cost must be a column: vec_c{:?}", objective.vec_c.size());
            return Err(RelaxError::SizeMismatch);
        }

        for (k, con) in constraints.iter().enumerate() {
            match con {
                Constraint::LessEq { mat_g, vec_h } => {
                    let (m, n_) = mat_g.size();
                    if n_ != n || vec_h.size() != (m, 1) {
                        log::error!("Size mismatch at constraint {}: vec_c{:?}, mat_g{:?}, vec_h{:?}",
                            k, objective.vec_c.size(), mat_g.size(), vec_h.size());
                        return Err(RelaxError::SizeMismatch);
                    }
                },
                Constraint::Bounds { lower, upper } => {
                    if !(lower <= upper) {
                        log::error!("Invalid bounds at constraint {}", k);
                        return Err(RelaxError::InvalidBounds);
                    }
                },
            }
        }

        Ok(Formulation {
            objective,
            constraints,
        })
    }

    /// Number of variables.
    pub fn n(&self) -> usize
    {
        self.objective.vec_c.size().0
    }

    pub fn objective(&self) -> &Objective<'a, L>
    {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint<'a, L>]
    {
        &self.constraints
    }

    /// Intersection of all [`Constraint::Bounds`].
    ///
    /// Returns `None` if no bounds are given.
    pub fn bounds(&self) -> Option<(L::F, L::F)>
    {
        self.constraints.iter().fold(None, |acc, con| {
            match (acc, con) {
                (None, Constraint::Bounds { lower, upper }) => Some((*lower, *upper)),
                (Some((l, u)), Constraint::Bounds { lower, upper }) => Some((l.max(*lower), u.min(*upper))),
                (acc, Constraint::LessEq { .. }) => acc,
            }
        })
    }

    /// Generates the problem data structures to be fed to [`totsu_core::solver::Solver::solve`].
    ///
    /// Returns a tuple of operators and a cone; a work slice is up to the caller.
    pub fn problem(&self) -> (FormulationOpC<'_, L>, FormulationOpA<'_, L>, FormulationOpB<'_, L>, FormulationCone<L>)
    {
        let n = self.n();

        let op_c = FormulationOpC {
            sign: self.objective.sense.sign(),
            vec_c: self.objective.vec_c.as_op(),
        };
        let op_a = FormulationOpA {
            n,
            constraints: &self.constraints,
        };
        let op_b = FormulationOpB {
            n,
            constraints: &self.constraints,
        };

        let cone = FormulationCone {
            cone_rpos: ConeRPos::new(),
        };

        (op_c, op_a, op_b, cone)
    }
}

//

#[test]
fn test_formulation_ops()
{
    use float_eq::assert_float_eq;
    use totsu_core::{FloatGeneric, MatType};

    type L = FloatGeneric<f64>;

    let vec_c = MatBuild::<L>::col(&[1., 2.]);
    let mat_g = MatBuild::<L>::new(MatType::General(1, 2)).iter_rowmaj(&[3., 4.]);
    let vec_h = MatBuild::<L>::col(&[5.]);

    let form = Formulation::new(
        Objective { sense: Sense::Minimize, vec_c: &vec_c },
        vec![
            Constraint::LessEq { mat_g: &mat_g, vec_h: &vec_h },
            Constraint::Bounds { lower: 0., upper: 1. },
        ],
    ).unwrap();

    let (_op_c, op_a, op_b, _cone) = form.problem();
    assert_eq!(op_a.size(), (5, 2));
    assert_eq!(op_b.size(), (5, 1));

    // [G; -I; I] x
    let mut y = [0.; 5];
    op_a.op(1., &[1., -1.], 0., &mut y);
    assert_float_eq!(y.as_ref(), [-1., -1., 1., 1., -1.].as_ref(), abs_all <= 1e-12);

    // [G; -I; I]^T w
    let mut z = [1.; 2];
    op_a.trans_op(2., &[1., 1., 0., 0., 1.], 1., &mut z);
    assert_float_eq!(z.as_ref(), [1. + 2. * (3. - 1.), 1. + 2. * (4. + 1.)].as_ref(), abs_all <= 1e-12);

    // [h; -l; u]
    let mut h = [0.; 5];
    op_b.op(1., &[1.], 0., &mut h);
    assert_float_eq!(h.as_ref(), [5., 0., 0., 1., 1.].as_ref(), abs_all <= 1e-12);

    let mut hw = [0.];
    op_b.trans_op(1., &[1., 1., 1., 1., 1.], 0., &mut hw);
    assert_float_eq!(hw[0], 7., abs <= 1e-12);

    // |h| + n*(|l| + |u|)
    let mut tau_b = [0.];
    op_b.absadd_cols(&mut tau_b);
    assert_float_eq!(tau_b[0], 5. + 2. * (0. + 1.), abs <= 1e-12);

    let mut tau = [0.; 2];
    op_a.absadd_cols(&mut tau);
    assert_float_eq!(tau.as_ref(), [5., 6.].as_ref(), abs_all <= 1e-12);

    let mut sigma = [0.; 5];
    op_b.absadd_rows(&mut sigma);
    assert_float_eq!(sigma.as_ref(), [5., 0., 0., 1., 1.].as_ref(), abs_all <= 1e-12);

    assert_eq!(form.bounds(), Some((0., 1.)));
}

#[test]
fn test_formulation_invalid()
{
    use totsu_core::{FloatGeneric, MatType};

    type L = FloatGeneric<f64>;

    let vec_c = MatBuild::<L>::col(&[1., 2.]);
    let mat_g = MatBuild::<L>::new(MatType::General(1, 3));
    let vec_h = MatBuild::<L>::col(&[5.]);

    let rslt = Formulation::new(
        Objective { sense: Sense::Minimize, vec_c: &vec_c },
        vec![Constraint::LessEq { mat_g: &mat_g, vec_h: &vec_h }],
    );
    assert_eq!(rslt.err(), Some(RelaxError::SizeMismatch));

    let rslt = Formulation::new(
        Objective { sense: Sense::Minimize, vec_c: &vec_c },
        vec![Constraint::Bounds { lower: 1., upper: 0. }],
    );
    assert_eq!(rslt.err(), Some(RelaxError::InvalidBounds));
}
