/// Dense row-major table used by the dynamic programming metrics.
///
/// A fresh table is allocated for every comparison, so no state survives
/// between calls.
pub(crate) struct Matrix<T> {
    rows: usize,
    cols: usize,
    matrix: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Copy,
{
    pub fn new(rows: usize, cols: usize, val: T) -> Self {
        Self {
            rows,
            cols,
            matrix: vec![val; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.matrix[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: T) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.matrix[row * self.cols + col] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_access() {
        let mut matrix = Matrix::new(2, 3, 0_usize);
        matrix.set(1, 2, 7);
        matrix.set(0, 1, 3);

        assert_eq!(7, matrix.get(1, 2));
        assert_eq!(3, matrix.get(0, 1));
        assert_eq!(0, matrix.get(1, 0));
    }
}
