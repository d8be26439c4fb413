// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

use crate::chol::{snode_map, solve_selective};
use crate::error::{Error, Result};
use crate::factor::Factor;
use crate::pattern::Pattern;

/// Given a supernodal Cholesky factor, a sparse right-hand side matrix and
/// the verified nonzero pattern of the solution, solve `L'y = b` column by
/// column, computing only the pattern positions of each column.
///
/// CAUTION: unlike [`solve_dense`](crate::solve_dense), the factor's row
/// permutation is NOT used, i.e. the result is `L'\b` directly rather than
/// the permuted solution. Both conventions are part of the respective
/// contracts.
///
/// Return:
///
/// ```text
/// The solution values, aligned entry for entry with the pattern's
/// compressed-column structure.
///
/// Error::DimensionMismatch when the pattern's row count differs from
/// the factor order, when the right-hand side has a different number
/// of columns than the pattern, or when b_value does not match
/// b_rowidx. Error::InvalidColumnPointers / Error::InvalidRowIndex
/// when the right-hand side structure is malformed.
/// ```
///
/// Arguments:
///
/// ```text
/// const usize b_colptr[n+1]
/// const usize b_rowidx[b_nnz]
/// const double b_value[b_nnz]
///
///     The right-hand side matrix in compressed-column form. Row
///     indices need not be sorted but must not contain duplicates.
///
/// const Pattern pattern
///
///     The nonzero pattern of the solution, from an external symbolic
///     backward-solve predictor. It must be closed under the factor's
///     dependency structure and contain every right-hand side
///     position; a pattern missing required positions yields a wrong
///     answer without an error (see [`Pattern`]).
/// ```
pub fn solve_sparse(
    factor: &Factor,
    b_colptr: &[usize],
    b_rowidx: &[usize],
    b_value: &[f64],
    pattern: &Pattern,
) -> Result<Vec<f64>> {
    let snode = snode_map(factor.xsuper, factor.m());
    let mut work = vec![0.0; factor.m()];
    solve_sparse_with(factor, b_colptr, b_rowidx, b_value, pattern, &mut work, &snode)
}

/// Driver shared with [`BlkSolve`](crate::BlkSolve): same contract as
/// [`solve_sparse`], with the supernode map and the size-m work vector
/// supplied by the caller. `work` must be all zero on entry and is
/// restored to all zero on return by re-zeroing exactly the touched
/// positions.
pub(crate) fn solve_sparse_with(
    factor: &Factor,
    b_colptr: &[usize],
    b_rowidx: &[usize],
    b_value: &[f64],
    pattern: &Pattern,
    work: &mut [f64],
    snode: &[usize],
) -> Result<Vec<f64>> {
    let m = factor.m();
    if pattern.m() != m {
        return Err(Error::DimensionMismatch {
            expected: m,
            got: pattern.m(),
        });
    }
    let n = pattern.ncols();
    if b_colptr.len() != n + 1 {
        return Err(Error::DimensionMismatch {
            expected: n + 1,
            got: b_colptr.len(),
        });
    }
    if b_colptr[0] != 0 || b_colptr[n] != b_rowidx.len() {
        return Err(Error::InvalidColumnPointers {
            ncols: n,
            nnz: b_rowidx.len(),
        });
    }
    if b_value.len() != b_rowidx.len() {
        return Err(Error::DimensionMismatch {
            expected: b_rowidx.len(),
            got: b_value.len(),
        });
    }
    for j in 0..n {
        if b_colptr[j + 1] < b_colptr[j] {
            return Err(Error::InvalidColumnPointers {
                ncols: n,
                nnz: b_rowidx.len(),
            });
        }
    }
    for j in 0..n {
        for pos in b_colptr[j]..b_colptr[j + 1] {
            if b_rowidx[pos] >= m {
                return Err(Error::InvalidRowIndex {
                    column: j,
                    row: b_rowidx[pos],
                });
            }
        }
    }

    if cfg!(feature = "debug") {
        println!(
            "blksolve: selective backward solve, m {} nrhs {} pattern nnz {}",
            m,
            n,
            pattern.nnz()
        );
    }

    let mut lhs = vec![0.0; pattern.nnz()];
    for j in 0..n {
        // scatter the right-hand side column into the zeroed work vector
        for pos in b_colptr[j]..b_colptr[j + 1] {
            work[b_rowidx[pos]] = b_value[pos];
        }

        let rows = &pattern.rowidx[pattern.colptr[j]..pattern.colptr[j + 1]];
        solve_selective(
            factor.colptr,
            factor.rowidx,
            factor.value,
            factor.xsuper,
            snode,
            rows,
            work,
        );

        // gather the solution, then restore the zero invariant at the
        // touched positions only
        for (k, pos) in (pattern.colptr[j]..pattern.colptr[j + 1]).enumerate() {
            lhs[pos] = work[rows[k]];
        }
        for &i in rows {
            work[i] = 0.0;
        }
        for pos in b_colptr[j]..b_colptr[j + 1] {
            work[b_rowidx[pos]] = 0.0;
        }
    }

    Ok(lhs)
}
