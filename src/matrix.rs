use crate::error::{Result, RewriteError};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::Mul;

/// A dense matrix of unbounded non-negative integers.
///
/// Rows are owned, so cloning never shares storage with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<BigUint>>,
}

impl Matrix {
    /// Creates a matrix from explicit rows.
    ///
    /// Row lengths are not checked here; `try_mul` rejects mismatched shapes.
    pub fn from_rows(rows: Vec<Vec<BigUint>>) -> Self {
        Self { rows }
    }

    /// Creates the `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n);
        for i in 0..n {
            m.rows[i][i] = BigUint::one();
        }
        m
    }

    /// Creates the `n`×`n` zero matrix.
    pub fn zero(n: usize) -> Self {
        Self {
            rows: vec![vec![BigUint::zero(); n]; n],
        }
    }

    /// Returns `(rows, columns)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn get(&self, row: usize, col: usize) -> &BigUint {
        &self.rows[row][col]
    }

    pub(crate) fn increment(&mut self, row: usize, col: usize) {
        self.rows[row][col] += 1u32;
    }

    /// Sum of every row.
    pub fn row_sums(&self) -> Vec<BigUint> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    /// Multiplies `self` (N×K) by `other` (K×M).
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix> {
        let (n, k) = self.dims();
        let (k2, m) = other.dims();
        if k != k2 {
            return Err(RewriteError::DimensionMismatch {
                left: (n, k),
                right: (k2, m),
            });
        }

        let mut res = vec![vec![BigUint::zero(); m]; n];
        for (i, res_row) in res.iter_mut().enumerate() {
            for (kk, other_row) in other.rows.iter().enumerate() {
                let ik = &self.rows[i][kk];
                if ik.is_zero() {
                    continue;
                }
                for (cell, kj) in res_row.iter_mut().zip(other_row) {
                    *cell += ik * kj;
                }
            }
        }
        Ok(Matrix { rows: res })
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", cells.join(", "))?;
        }
        Ok(())
    }
}
