// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

use crate::error::{Error, Result};

/// Verified nonzero pattern of a sparse solve result.
///
/// `colptr` and `rowidx` describe, column by column, the row indices that
/// can be nonzero in the solution of `L'y = b` for a sparse right-hand
/// side. The pattern comes from an external symbolic backward-solve
/// predictor; [`Pattern::new`] verifies that it is well-formed (monotone
/// column pointers, per-column strictly increasing in-range row indices),
/// which is what the selective solve relies on structurally.
///
/// What cannot be verified here is completeness: the pattern must contain
/// the full symbolic nonzero set of the solution. A pattern that omits
/// required rows makes [`solve_sparse`](crate::solve_sparse) silently drop
/// terms and return a wrong answer, without raising an error.
#[derive(Debug)]
pub struct Pattern<'a> {
    pub(crate) m: usize,
    pub(crate) colptr: &'a [usize],
    pub(crate) rowidx: &'a [usize],
}

impl<'a> Pattern<'a> {
    /// Verify the pattern structure for a result with `m` rows.
    pub fn new(m: usize, colptr: &'a [usize], rowidx: &'a [usize]) -> Result<Self> {
        if colptr.is_empty() || colptr[0] != 0 || colptr[colptr.len() - 1] != rowidx.len() {
            return Err(Error::InvalidColumnPointers {
                ncols: colptr.len().saturating_sub(1),
                nnz: rowidx.len(),
            });
        }
        let n = colptr.len() - 1;
        for j in 0..n {
            if colptr[j + 1] < colptr[j] {
                return Err(Error::InvalidColumnPointers {
                    ncols: n,
                    nnz: rowidx.len(),
                });
            }
        }
        for j in 0..n {
            for pos in colptr[j]..colptr[j + 1] {
                if rowidx[pos] >= m || (pos > colptr[j] && rowidx[pos] <= rowidx[pos - 1]) {
                    return Err(Error::InvalidRowIndex {
                        column: j,
                        row: rowidx[pos],
                    });
                }
            }
        }
        Ok(Pattern { m, colptr, rowidx })
    }

    /// Number of rows of the result.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of columns of the result.
    pub fn ncols(&self) -> usize {
        self.colptr.len() - 1
    }

    /// Total number of pattern entries.
    pub fn nnz(&self) -> usize {
        self.rowidx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pattern() {
        let colptr = vec![0, 2, 2, 3];
        let rowidx = vec![0, 2, 1];
        let p = Pattern::new(4, &colptr, &rowidx).unwrap();
        assert_eq!(p.ncols(), 3);
        assert_eq!(p.nnz(), 3);
    }

    #[test]
    fn rejects_unsorted_column() {
        let colptr = vec![0, 2];
        let rowidx = vec![2, 0];
        let err = Pattern::new(4, &colptr, &rowidx).unwrap_err();
        assert_eq!(err, Error::InvalidRowIndex { column: 0, row: 0 });
    }

    #[test]
    fn rejects_row_out_of_range() {
        let colptr = vec![0, 1];
        let rowidx = vec![4];
        let err = Pattern::new(4, &colptr, &rowidx).unwrap_err();
        assert_eq!(err, Error::InvalidRowIndex { column: 0, row: 4 });
    }
}
