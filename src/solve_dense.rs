// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

use crate::chol::solve_backward;
use crate::error::{Error, Result};
use crate::factor::Factor;

/// Given a supernodal Cholesky factor and a dense right-hand side matrix,
/// solve `L'y = b` column by column and apply the factor's row permutation
/// to the result: the returned matrix holds `lhs[perm[k]] = y[k]`.
///
/// Return:
///
/// ```text
/// The m-by-nrhs solution matrix in column-major order.
///
/// Error::DimensionMismatch when rhs does not hold nrhs columns of
/// length m.
/// ```
///
/// Arguments:
///
/// ```text
/// const double rhs[m*nrhs]
///
///     The right-hand side columns, stored column-major.
///
/// usize nrhs
///
///     The number of right-hand side columns.
/// ```
///
/// Note that the companion routine [`solve_sparse`](crate::solve_sparse)
/// does NOT apply the permutation; the asymmetry is part of both contracts.
pub fn solve_dense(factor: &Factor, rhs: &[f64], nrhs: usize) -> Result<Vec<f64>> {
    let mut work = vec![0.0; factor.m()];
    solve_dense_with(factor, rhs, nrhs, &mut work)
}

/// Driver shared with [`BlkSolve`](crate::BlkSolve): same contract as
/// [`solve_dense`], with the size-m work vector supplied by the caller.
/// The contents of `work` are undefined on entry and on return.
pub(crate) fn solve_dense_with(
    factor: &Factor,
    rhs: &[f64],
    nrhs: usize,
    work: &mut [f64],
) -> Result<Vec<f64>> {
    let m = factor.m();
    if rhs.len() != m * nrhs {
        return Err(Error::DimensionMismatch {
            expected: m * nrhs,
            got: rhs.len(),
        });
    }

    if cfg!(feature = "debug") {
        println!("blksolve: dense backward solve, m {} nrhs {}", m, nrhs);
    }

    let mut lhs = vec![0.0; m * nrhs];
    for j in 0..nrhs {
        let bcol = &rhs[j * m..(j + 1) * m];
        let ycol = &mut lhs[j * m..(j + 1) * m];

        work[..m].copy_from_slice(bcol);
        // The result column doubles as gather workspace until it is
        // overwritten with the permuted solution.
        solve_backward(
            factor.colptr,
            factor.rowidx,
            factor.value,
            factor.xsuper,
            &mut work[..m],
            ycol,
        );
        for k in 0..m {
            ycol[factor.perm[k]] = work[k];
        }
    }

    Ok(lhs)
}
