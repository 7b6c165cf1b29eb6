use std::ops::{Index, IndexMut, Deref};
use num_traits::{Zero, One};
use totsu_core::solver::{SliceLike, Operator};
use totsu_core::{LinAlgEx, MatType, MatOp};

//

/// Matrix builder
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Dense matrix which owns a `Vec` of column-major data and is able to be converted as [`totsu_core::MatOp`].
/// Only [`MatType::General`] is handled; vectors are \\(n \times 1\\) matrices.
#[derive(Debug, Clone)]
pub struct MatBuild<L: LinAlgEx>
{
    typ: MatType,
    array: Vec<L::F>,
}

impl<L: LinAlgEx> MatBuild<L>
{
    /// Creates an instance.
    ///
    /// Returns the [`MatBuild`] instance with zero data.
    /// * `typ` is Matrix type and size, which shall be [`MatType::General`].
    pub fn new(typ: MatType) -> Self
    {
        assert!(matches!(typ, MatType::General(_, _)), "MatBuild supports MatType::General only");

        MatBuild {
            typ,
            array: vec![L::F::zero(); typ.len()],
        }
    }

    /// Creates a column vector.
    ///
    /// Returns the \\(n \times 1\\) [`MatBuild`] holding `v`.
    pub fn col(v: &[L::F]) -> Self
    {
        MatBuild::new(MatType::General(v.len(), 1)).iter_colmaj(v)
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        self.typ.size()
    }

    /// Converted as [`totsu_core::MatOp`].
    ///
    /// Returns the [`totsu_core::MatOp`] borrowing the internal data array.
    pub fn as_op(&self) -> MatOp<'_, L>
    {
        MatOp::new(self.typ, &self.array)
    }

    /// Calculates \\(y = M x\\).
    ///
    /// Returns \\(y\\) as a newly allocated `Vec`.
    /// * `x` shall have the same length as a number of columns.
    pub fn mul_vec(&self, x: &[L::F]) -> Vec<L::F>
    {
        let (nr, nc) = self.size();
        assert_eq!(x.len(), nc);

        let mut y = vec![L::F::zero(); nr];
        self.as_op().op(L::F::one(), &L::Sl::new_ref(x), L::F::zero(), &mut L::Sl::new_mut(&mut y));
        y
    }

    /// Calculates \\(M^T x\\) of a column vector \\(M\\), that is an inner product.
    ///
    /// The matrix shall be \\(n \times 1\\) and `x` shall have length \\(n\\).
    pub fn dot_col(&self, x: &[L::F]) -> L::F
    {
        let (nr, nc) = self.size();
        assert_eq!(nc, 1);
        assert_eq!(x.len(), nr);

        let mut y = [L::F::zero()];
        self.as_op().trans_op(L::F::one(), &L::Sl::new_ref(x), L::F::zero(), &mut L::Sl::new_mut(&mut y));
        y[0]
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> L::F
    {
        let (nr, nc) = self.size();

        for c in 0.. nc {
            for r in 0.. nr {
                self[(r, c)] = func(r, c);
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> L::F
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in column-major.
    ///
    /// * `iter` iterates matrix data in column-major.
    pub fn set_iter_colmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        for (e, v) in self.array.iter_mut().zip(iter) {
            *e = *v;
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_colmaj`].
    pub fn iter_colmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// Data by an iterator in row-major.
    ///
    /// * `iter` iterates matrix data in row-major.
    pub fn set_iter_rowmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        let mut i = iter.into_iter();
        let (nr, nc) = self.size();

        for r in 0.. nr {
            for c in 0.. nc {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    return;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_rowmaj`].
    pub fn iter_rowmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    fn index(&self, (r, c): (usize, usize)) -> usize
    {
        let (nr, nc) = self.size();
        assert!(r < nr);
        assert!(c < nc);

        c * nr + r
    }
}

//

impl<L: LinAlgEx> Index<(usize, usize)> for MatBuild<L>
{
    type Output = L::F;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let i = self.index(index);

        &self.array[i]
    }
}

impl<L: LinAlgEx> IndexMut<(usize, usize)> for MatBuild<L>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.index(index);

        &mut self.array[i]
    }
}

//

impl<L: LinAlgEx> AsRef<[L::F]> for MatBuild<L>
{
    fn as_ref(&self) -> &[L::F]
    {
        &self.array
    }
}

//

#[test]
fn test_matbuild1()
{
    use float_eq::assert_float_eq;
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let m = MatBuild::<L>::new(MatType::General(2, 3))
            .iter_rowmaj(&[
                1., 2., 3.,
                4., 5., 6.,
            ]);

    // column-major storage
    assert_float_eq!(m.as_ref(), [1., 4., 2., 5., 3., 6.].as_ref(), abs_all <= 1e-12);

    let y = m.mul_vec(&[1., 0., -1.]);
    assert_float_eq!(y.as_slice(), [-2., -2.].as_ref(), abs_all <= 1e-12);

    let c = MatBuild::<L>::col(&[1., -2., 0.5]);
    assert_eq!(c.size(), (3, 1));
    assert_float_eq!(c.dot_col(&[2., 1., 4.]), 2., abs <= 1e-12);
}
