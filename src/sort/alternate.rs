// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The alternate algorithm.
//!
//! Runs `n` left-to-right sweeps over a row of `n` disks. Sweep `i` starts
//! at the pair `(i, i + 1)`: in alternating input every dark disk moves one
//! step left per sweep, so by sweep `i` the prefix `[0, i)` is already dark
//! and need not be scanned again.
//!
//! The input must be in alternating order. Other balanced rows are not
//! guaranteed to come out sorted.

use super::{swap_if_light_before_dark, SortResult};
use crate::disk::DiskRow;

/// Sort an alternating row with repeated left-to-right sweeps.
///
/// `before` is left untouched.
pub fn sort_alternate(before: &DiskRow) -> SortResult {
    let mut row = before.clone();
    let n = row.total_count();
    let mut swap_count = 0;

    for i in 0..n {
        for j in (1 + i)..n {
            if swap_if_light_before_dark(&mut row, j - 1) {
                swap_count += 1;
            }
        }
    }

    SortResult::new(row, swap_count)
}
