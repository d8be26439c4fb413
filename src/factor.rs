// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

use crate::error::{Error, Result};

/// Read-only view of a supernodal block sparse Cholesky factor.
///
/// The factor describes a unit-lower-triangular matrix `L` of order `m`
/// together with a fill-reducing permutation and a supernode partition, as
/// produced by a sparse Cholesky factorization stage:
///
/// * `perm` is a permutation of `0..m`; `perm[k]` is the original row/column
///   placed at solved-order position `k`.
///
/// * `colptr`, `rowidx`, `value` store `L` in compressed-column form. The
///   entries of column `j` are `rowidx[colptr[j]..colptr[j+1]]` with
///   matching coefficients in `value`. The first entry of every column is a
///   placeholder occupying the diagonal position (row index `j`, value
///   ignored; the true diagonal is implicitly 1). The remaining entries are
///   the sub-diagonal coefficients, strictly increasing in row index.
///
/// * `xsuper` has length `nsuper+1` with `xsuper[0] == 0` and
///   `xsuper[nsuper] == m`; supernode `s` covers columns
///   `xsuper[s]..xsuper[s+1]`. All columns of one supernode are assumed to
///   share one sub-diagonal row pattern below the supernode. This supernodal
///   property is an input contract and is not re-checked.
///
/// All arrays are borrowed from the caller and use 0-based indices.
/// [`Factor::new`] validates the structure once; the solve kernels then
/// trust it and guard only with debug assertions.
#[derive(Debug)]
pub struct Factor<'a> {
    pub(crate) m: usize,
    pub(crate) perm: &'a [usize],
    pub(crate) colptr: &'a [usize],
    pub(crate) rowidx: &'a [usize],
    pub(crate) value: &'a [f64],
    pub(crate) xsuper: &'a [usize],
}

impl<'a> Factor<'a> {
    /// Validate the factor structure and build the view.
    ///
    /// Checks, in this order: array lengths, the permutation being a
    /// bijection of `0..m`, the column pointers being a monotone map onto
    /// the stored entries, every column starting with its placeholder
    /// diagonal followed by strictly increasing in-range row indices, and
    /// `xsuper` strictly increasing from 0 to `m`.
    pub fn new(
        m: usize,
        perm: &'a [usize],
        colptr: &'a [usize],
        rowidx: &'a [usize],
        value: &'a [f64],
        xsuper: &'a [usize],
    ) -> Result<Self> {
        if perm.len() != m {
            return Err(Error::DimensionMismatch {
                expected: m,
                got: perm.len(),
            });
        }
        if colptr.len() != m + 1 {
            return Err(Error::DimensionMismatch {
                expected: m + 1,
                got: colptr.len(),
            });
        }
        if value.len() != rowidx.len() {
            return Err(Error::DimensionMismatch {
                expected: rowidx.len(),
                got: value.len(),
            });
        }

        let mut seen = vec![false; m];
        for (k, &p) in perm.iter().enumerate() {
            if p >= m || seen[p] {
                return Err(Error::InvalidPermutation {
                    position: k,
                    entry: p,
                });
            }
            seen[p] = true;
        }

        if colptr[0] != 0 || colptr[m] != rowidx.len() {
            return Err(Error::InvalidColumnPointers {
                ncols: m,
                nnz: rowidx.len(),
            });
        }
        for j in 0..m {
            if colptr[j + 1] < colptr[j] {
                return Err(Error::InvalidColumnPointers {
                    ncols: m,
                    nnz: rowidx.len(),
                });
            }
        }
        for j in 0..m {
            if colptr[j + 1] == colptr[j] || rowidx[colptr[j]] != j {
                return Err(Error::MissingDiagonal { column: j });
            }
            for pos in colptr[j] + 1..colptr[j + 1] {
                if rowidx[pos] >= m || rowidx[pos] <= rowidx[pos - 1] {
                    return Err(Error::InvalidRowIndex {
                        column: j,
                        row: rowidx[pos],
                    });
                }
            }
        }

        if xsuper.is_empty() || xsuper[0] != 0 {
            return Err(Error::InvalidSupernodes {
                position: 0,
                boundary: xsuper.first().copied().unwrap_or(0),
                m,
            });
        }
        for s in 1..xsuper.len() {
            if xsuper[s] <= xsuper[s - 1] || xsuper[s] > m {
                return Err(Error::InvalidSupernodes {
                    position: s,
                    boundary: xsuper[s],
                    m,
                });
            }
        }
        if xsuper[xsuper.len() - 1] != m && m > 0 {
            return Err(Error::InvalidSupernodes {
                position: xsuper.len() - 1,
                boundary: xsuper[xsuper.len() - 1],
                m,
            });
        }

        Ok(Factor {
            m,
            perm,
            colptr,
            rowidx,
            value,
            xsuper,
        })
    }

    /// Matrix order.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of supernodes in the partition.
    pub fn nsuper(&self) -> usize {
        self.xsuper.len() - 1
    }

    /// Number of stored entries, placeholder diagonals included.
    pub fn nnz(&self) -> usize {
        self.rowidx.len()
    }
}
