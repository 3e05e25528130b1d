// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Algorithms that sort an alternating row using adjacent swaps.
//!
//! Both algorithms take a row by reference, sort a private copy, and return
//! a [`SortResult`] with the sorted row and the number of swaps performed.
//!
//! - `alternate`: one left-to-right sweep per pass, `n` passes
//! - `lawnmower`: a left-to-right sweep then a right-to-left sweep per pass,
//!   `n / 2` passes
//!
//! # Example
//!
//! ```
//! use alternating_disks::disk::DiskRow;
//! use alternating_disks::sort::{sort_alternate, sort_lawnmower};
//!
//! let before = DiskRow::new(4);
//! let alternate = sort_alternate(&before);
//! let lawnmower = sort_lawnmower(&before);
//!
//! assert_eq!(alternate.after().to_string(), "D D D D L L L L");
//! assert_eq!(alternate.after(), lawnmower.after());
//! assert!(before.is_initialized());
//! ```

pub mod alternate;
pub mod lawnmower;

pub use alternate::sort_alternate;
pub use lawnmower::sort_lawnmower;

use crate::disk::{DiskColor, DiskRow};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Output of a sorting algorithm: the final row and how many adjacent
/// swaps it took to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortResult {
    after: DiskRow,
    swap_count: u64,
}

impl SortResult {
    /// Only the sorting algorithms build results, so the count always
    /// matches the swaps they made.
    pub(crate) fn new(after: DiskRow, swap_count: u64) -> Self {
        Self { after, swap_count }
    }

    /// The row after sorting.
    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    /// Number of adjacent swaps performed.
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Take ownership of the sorted row.
    pub fn into_after(self) -> DiskRow {
        self.after
    }
}

/// The available sorting algorithms, selectable by name.
///
/// Names parse case-insensitively: `"alternate"`, `"Lawnmower"`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Algorithm {
    Alternate,
    Lawnmower,
}

impl Algorithm {
    /// Run this algorithm on `before`.
    pub fn sort(self, before: &DiskRow) -> SortResult {
        match self {
            Algorithm::Alternate => sort_alternate(before),
            Algorithm::Lawnmower => sort_lawnmower(before),
        }
    }
}

/// Swap the pair starting at `left` if a light disk precedes a dark disk.
///
/// Returns true if a swap happened.
fn swap_if_light_before_dark(row: &mut DiskRow, left: usize) -> bool {
    if row.get(left) == DiskColor::Light && row.get(left + 1) == DiskColor::Dark {
        row.swap(left);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_sort_result_accessors() {
        let result = SortResult::new(DiskRow::new(2), 7);
        assert_eq!(result.swap_count(), 7);
        assert_eq!(result.after(), &DiskRow::new(2));
        assert_eq!(result.into_after(), DiskRow::new(2));
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::COUNT, 2);
        assert_eq!(Algorithm::Alternate.to_string(), "alternate");
        assert_eq!(Algorithm::Lawnmower.to_string(), "lawnmower");
        assert_eq!(Algorithm::from_str("LawnMower"), Ok(Algorithm::Lawnmower));
        assert_eq!(Algorithm::from_str("alternate"), Ok(Algorithm::Alternate));
        assert!(Algorithm::from_str("bubble").is_err());
    }

    #[test]
    fn test_algorithm_dispatch() {
        let before = DiskRow::new(3);
        assert_eq!(Algorithm::Alternate.sort(&before), sort_alternate(&before));
        assert_eq!(Algorithm::Lawnmower.sort(&before), sort_lawnmower(&before));
    }

    #[test]
    fn test_every_algorithm_sorts() {
        for algorithm in Algorithm::iter() {
            for n in 1..=8 {
                let result = algorithm.sort(&DiskRow::new(n));
                assert!(result.after().is_sorted(), "{} failed for n={}", algorithm, n);
            }
        }
    }

    #[test]
    fn test_swap_if_light_before_dark() {
        let mut row = DiskRow::new(2);
        assert!(swap_if_light_before_dark(&mut row, 0));
        assert_eq!(row.to_string(), "D L L D");
        assert!(!swap_if_light_before_dark(&mut row, 0));
        assert!(!swap_if_light_before_dark(&mut row, 1));
        assert!(swap_if_light_before_dark(&mut row, 2));
        assert_eq!(row.to_string(), "D L D L");
    }
}
