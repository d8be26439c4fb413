// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

/// Build the column-to-supernode membership map.
///
/// `snode[j]` is the index of the supernode whose column range contains
/// `j`. Only the sparse solve path needs the map; it is built on demand.
pub(crate) fn snode_map(xsuper: &[usize], m: usize) -> Vec<usize> {
    let nsuper = xsuper.len() - 1;
    let mut snode = vec![0; m];
    let mut j = 0;
    for k in 0..nsuper {
        while j < xsuper[k + 1] {
            snode[j] = k;
            j += 1;
        }
    }
    snode
}
