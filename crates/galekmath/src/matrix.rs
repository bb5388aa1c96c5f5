use std::{array, fmt};

use crate::{Real, Vector};

mod mat3;
mod mat4;
mod ops;

/// A 3x3 matrix.
pub type Mat3 = Matrix<3>;
/// A 4x4 matrix.
pub type Mat4 = Matrix<4>;

/// A square, column-major `N`x`N` matrix of [`Real`]s.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from row or column vectors.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with the given diagonal and zero elsewhere.
/// - The transform factories on [`Mat3`] and [`Mat4`] ([`Mat4::translate`], [`Mat4::rotate`],
///   [`Mat4::perspective`], ...) build the matrices used by a renderer.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] (also the [`Default`]) are constants.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for two kinds of indices:
///
/// - A tuple `(row, col)`, matching common mathematical notation.
/// - A single `usize` addressing the column-major storage directly: index `i` is column `i / N`,
///   row `i % N`. For a [`Mat4`], indices 12, 13 and 14 hold the translation.
///
/// ```
/// # use galekmath::*;
/// let m = Mat4::translate(vec3(1.0, 2.0, 3.0));
/// assert_eq!(m[12], 1.0);
/// assert_eq!(m[(1, 3)], 2.0);
/// assert_eq!(m[14], m[(2, 3)]);
/// ```
///
/// Indexing out of bounds panics. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s
/// instead.
///
/// # Layout
///
/// The matrix is stored as `N` columns of `N` elements without padding, which is the layout
/// OpenGL and most shading languages expect. [`bytemuck::Pod`] is implemented, and
/// [`Mat3::as_array`] / [`Mat4::as_array`] view the storage as a flat array.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize>([[Real; N]; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[0.0; N]; N]);

    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut columns = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            columns[i][i] = 1.0;
            i += 1;
        }
        Self(columns)
    };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<N>>>(rows: [U; N]) -> Self {
        Self::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mat = Matrix::<2>::from_fn(|row, col| (row * 10 + col) as Real);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> Real,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a matrix from its diagonal. Elements outside the diagonal are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let diag = Matrix::from_diagonal(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 3.0],
    /// ]));
    /// ```
    pub fn from_diagonal(diag: Vector<N>) -> Self {
        let mut this = Self::ZERO;
        for i in 0..N {
            this.0[i][i] = diag[i];
        }
        this
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(Real) -> Real,
    {
        Self(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self {
        Self::from_fn(|row, col| self.0[row][col])
    }

    /// Returns the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Real> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mut mat = Mat3::IDENTITY;
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 5.0;
    /// }
    /// assert!(mat.get_mut(3, 0).is_none());
    /// assert_eq!(mat[1], 5.0);
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Real> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= N`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector<N> {
        self.0[col].into()
    }

    /// Returns the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= N`.
    #[inline]
    pub fn row(&self, row: usize) -> Vector<N> {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    pub fn diagonal(&self) -> Vector<N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert_eq!(Mat3::IDENTITY.trace(), 3.0);
    /// assert_eq!(Mat4::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> Real {
        (0..N).map(|i| self.0[i][i]).sum()
    }

    /// Returns the columns of the matrix.
    #[inline]
    pub const fn columns(&self) -> &[[Real; N]; N] {
        &self.0
    }
}

impl<const N: usize> Default for Matrix<N> {
    /// Returns [`Matrix::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const N: usize>(&'a Matrix<N>, usize);
        impl<'a, const N: usize> fmt::Debug for FormatRow<'a, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            Mat3::from_columns([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]),
        );
        assert_eq!(
            Mat3::from_rows([vec3(1.0, 2.0, 3.0), Vec3::Y, Vec3::Z]).row(0),
            vec3(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn linear_index_is_column_major() {
        let m = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!(m[0], 0.0);
        assert_eq!(m[1], 2.0);
        assert_eq!(m[2], 1.0);
        assert_eq!(m[3], 3.0);
        assert_eq!(m.column(1), vec2(1.0, 3.0));
        assert_eq!(m.row(1), vec2(2.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Mat3::IDENTITY;
        let i = 9;
        let _ = m[i];
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal(vec2(1.0, 2.0));
        assert_eq!(mat, Matrix::from_rows([[1.0, 0.0], [0.0, 2.0]]));
        assert_eq!(mat.diagonal(), vec2(1.0, 2.0));
        assert_eq!(mat.trace(), 3.0);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");

        // `#` prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Matrix::<2>::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Matrix::<2>::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn transpose() {
        let m = Mat3::from_fn(|row, col| (row * 3 + col) as Real);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), m.column(0));
    }

    #[test]
    fn map() {
        let m = Mat3::IDENTITY.map(|e| e * 2.0 + 1.0);
        assert_eq!(m.diagonal(), vec3(3.0, 3.0, 3.0));
        assert_eq!(m[1], 1.0);
    }
}
