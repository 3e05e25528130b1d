// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The lawnmower algorithm.
//!
//! Each of the `n / 2` passes mows the row twice: a left-to-right sweep
//! starting at the pair `(i, i + 1)`, then a right-to-left sweep starting
//! at the pair ending at `n - 1 - i` and running back to the pair `(0, 1)`.
//! Both sweeps swap whenever a light disk sits directly before a dark disk.
//! The forward sweep carries a light disk to the right end; the backward
//! sweep carries a dark disk to the left end.

use super::{swap_if_light_before_dark, SortResult};
use crate::disk::DiskRow;

/// Sort an alternating row with back-and-forth sweeps.
///
/// `before` is left untouched. Any balanced row comes out sorted, not only
/// alternating ones.
pub fn sort_lawnmower(before: &DiskRow) -> SortResult {
    let mut row = before.clone();
    let n = row.total_count();
    let mut swap_count = 0;

    for i in 0..n / 2 {
        for j in (1 + i)..n {
            if swap_if_light_before_dark(&mut row, j - 1) {
                swap_count += 1;
            }
        }
        for k in (1..n - i).rev() {
            if swap_if_light_before_dark(&mut row, k - 1) {
                swap_count += 1;
            }
        }
    }

    SortResult::new(row, swap_count)
}
