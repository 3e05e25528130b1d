// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building a disk row from untrusted input.

use std::fmt;

/// Reasons a [`DiskRow`](crate::disk::DiskRow) cannot be built.
///
/// Out-of-range indices are not reported here: those are programmer errors
/// and panic at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskRowError {
    /// A row needs at least one light and one dark disk.
    Empty,

    /// `2 * light_count` does not fit in `usize`.
    TooLarge { light_count: usize },

    /// The row does not hold as many light disks as dark disks.
    Unbalanced { light: usize, dark: usize },

    /// A token in a rendered row is neither `L` nor `D`.
    UnknownToken { token: String },
}

impl fmt::Display for DiskRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskRowError::Empty => write!(f, "A disk row needs at least one light disk"),
            DiskRowError::TooLarge { light_count } => {
                write!(f, "Disk row too large: {} light disks", light_count)
            }
            DiskRowError::Unbalanced { light, dark } => {
                write!(
                    f,
                    "Disk row has {} light and {} dark disks (counts must match)",
                    light, dark
                )
            }
            DiskRowError::UnknownToken { token } => {
                write!(f, "Unknown disk token {:?} (expected L or D)", token)
            }
        }
    }
}

impl std::error::Error for DiskRowError {}
