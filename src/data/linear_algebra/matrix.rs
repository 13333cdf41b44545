//! # Matrix
//!
//! A dense, row-major matrix. Transportation tableaus are dense by nature: every source can in
//! principle ship to every sink, so a sparse representation would buy nothing.
use std::fmt::Debug;

use crate::data::linear_algebra::Coordinate;

/// A dense row-major matrix with `nr_rows * nr_columns` elements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<T> DenseMatrix<T> {
    /// Create a matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Element rows; all rows must have the same length.
    pub fn from_rows(data: Vec<Vec<T>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self {
            data: data.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix by evaluating a function at every coordinate.
    pub fn from_fn(nr_rows: usize, nr_columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nr_rows * nr_columns);
        for row in 0..nr_rows {
            for column in 0..nr_columns {
                data.push(f(row, column));
            }
        }

        Self { data, nr_rows, nr_columns }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// A reference to the element at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> &T {
        debug_assert!(row < self.nr_rows && column < self.nr_columns);

        &self.data[row * self.nr_columns + column]
    }

    /// A reference to the element at a coordinate.
    pub fn at(&self, coordinate: Coordinate) -> &T {
        self.get(coordinate.row, coordinate.column)
    }

    /// Overwrite the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        debug_assert!(row < self.nr_rows && column < self.nr_columns);

        self.data[row * self.nr_columns + column] = value;
    }

    /// Mutable reference to the element at a coordinate.
    pub fn at_mut(&mut self, coordinate: Coordinate) -> &mut T {
        debug_assert!(coordinate.row < self.nr_rows && coordinate.column < self.nr_columns);

        &mut self.data[coordinate.row * self.nr_columns + coordinate.column]
    }

    /// Iterate over one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &T> {
        debug_assert!(row < self.nr_rows);

        self.data[row * self.nr_columns..(row + 1) * self.nr_columns].iter()
    }

    /// Iterate over one column.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &T> {
        debug_assert!(column < self.nr_columns);

        self.data.iter().skip(column).step_by(self.nr_columns.max(1))
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let nr_columns = self.nr_columns;
        (0..self.nr_rows).flat_map(move |row| {
            (0..nr_columns).map(move |column| Coordinate::new(row, column))
        })
    }

    /// Transform every element, consuming the matrix.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> DenseMatrix<U> {
        DenseMatrix {
            data: self.data.into_iter().map(f).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// A matrix with every element equal to `value`.
    pub fn constant(value: T, nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![value; nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::Coordinate;
    use crate::data::linear_algebra::matrix::DenseMatrix;

    #[test]
    fn get_set() {
        let mut matrix = DenseMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(matrix.nr_rows(), 2);
        assert_eq!(matrix.nr_columns(), 3);
        assert_eq!(*matrix.get(1, 2), 6);

        matrix.set(1, 2, 60);
        assert_eq!(*matrix.at(Coordinate::new(1, 2)), 60);
    }

    #[test]
    fn rows_and_columns() {
        let matrix = DenseMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(matrix.row(1).copied().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(matrix.column(1).copied().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn coordinates_are_row_major() {
        let matrix = DenseMatrix::from_rows(vec![vec![0; 2], vec![0; 2]]);
        let order = matrix.coordinates().collect::<Vec<_>>();
        assert_eq!(order, vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ]);
    }
}
