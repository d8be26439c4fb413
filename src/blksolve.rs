// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

use crate::chol::snode_map;
use crate::error::Result;
use crate::factor::Factor;
use crate::pattern::Pattern;
use crate::solve_dense::solve_dense_with;
use crate::solve_sparse::solve_sparse_with;

/// Solver object wrapping a [`Factor`] together with reusable workspace.
///
/// The free routines [`solve_dense`](crate::solve_dense) and
/// [`solve_sparse`](crate::solve_sparse) allocate their scratch per call;
/// this wrapper keeps one set of work vectors and the lazily built
/// supernode map across calls, which pays off when many right-hand sides
/// are solved against one factor.
///
/// A `BlkSolve` must not be shared between threads mid-solve; concurrent
/// solves against the same factor each need their own instance (the factor
/// view itself is read-only and freely shared).
pub struct BlkSolve<'a> {
    factor: Factor<'a>,

    /// size m workspace, kept all zero between sparse solves
    work0: Vec<f64>,
    /// size m workspace, contents undefined between calls
    work1: Vec<f64>,
    /// column to supernode map, built on first sparse solve
    snode: Vec<usize>,
}

impl<'a> BlkSolve<'a> {
    /// Wrap a validated factor and allocate the workspace.
    pub fn new(factor: Factor<'a>) -> Self {
        let m = factor.m();
        Self {
            factor,
            work0: vec![0.0; m],
            work1: vec![0.0; m],
            snode: Vec::new(),
        }
    }

    /// The wrapped factor.
    pub fn factor(&self) -> &Factor<'a> {
        &self.factor
    }

    /// Solve with a dense right-hand side; the permutation is applied.
    /// See [`solve_dense`](crate::solve_dense).
    pub fn solve_dense(&mut self, rhs: &[f64], nrhs: usize) -> Result<Vec<f64>> {
        solve_dense_with(&self.factor, rhs, nrhs, &mut self.work1)
    }

    /// Solve with a sparse right-hand side and a verified solution
    /// pattern; the permutation is NOT applied. See
    /// [`solve_sparse`](crate::solve_sparse).
    pub fn solve_sparse(
        &mut self,
        b_colptr: &[usize],
        b_rowidx: &[usize],
        b_value: &[f64],
        pattern: &Pattern,
    ) -> Result<Vec<f64>> {
        if self.snode.len() != self.factor.m() {
            self.snode = snode_map(self.factor.xsuper, self.factor.m());
        }
        solve_sparse_with(
            &self.factor,
            b_colptr,
            b_rowidx,
            b_value,
            pattern,
            &mut self.work0,
            &self.snode,
        )
    }
}
