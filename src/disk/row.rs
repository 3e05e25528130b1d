// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A row of light and dark disks.
//!
//! A row always holds as many light disks as dark disks. The only mutation
//! is an adjacent swap, so the color balance and the length are fixed once
//! the row is built.
//!
//! # Examples
//!
//! ```
//! use alternating_disks::disk::{DiskColor, DiskRow};
//!
//! let mut row = DiskRow::new(2);
//! assert_eq!(row.to_string(), "L D L D");
//! assert!(row.is_initialized());
//!
//! row.swap(0);
//! assert_eq!(row.get(0), DiskColor::Dark);
//! assert_eq!(row.to_string(), "D L L D");
//! ```

use crate::disk::{DiskColor, DiskRowError};
use std::fmt;
use std::str::FromStr;

/// An ordered, fixed-length sequence of disk colors.
///
/// Equality compares the full color sequence; rows of different lengths
/// are never equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiskRow {
    colors: Vec<DiskColor>,
}

impl DiskRow {
    /// Create a row of `2 * light_count` disks in alternating order,
    /// starting with a light disk at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `light_count == 0` or if `2 * light_count` overflows `usize`.
    pub fn new(light_count: usize) -> Self {
        assert!(light_count > 0, "Disk row needs at least one light disk");
        let Some(total_count) = light_count.checked_mul(2) else {
            panic!("Disk row too large: {} light disks", light_count);
        };
        Self {
            colors: (0..total_count).map(DiskColor::alternating_at).collect(),
        }
    }

    /// Create an alternating row, returning an error instead of panicking
    /// when `light_count` is zero or too large.
    pub fn try_new(light_count: usize) -> Result<Self, DiskRowError> {
        if light_count == 0 {
            return Err(DiskRowError::Empty);
        }
        if light_count.checked_mul(2).is_none() {
            return Err(DiskRowError::TooLarge { light_count });
        }
        Ok(Self::new(light_count))
    }

    /// Create a row from an explicit color sequence.
    ///
    /// The sequence must be non-empty and hold as many light disks as dark
    /// disks. It need not be in alternating order.
    pub fn from_colors(colors: Vec<DiskColor>) -> Result<Self, DiskRowError> {
        if colors.is_empty() {
            return Err(DiskRowError::Empty);
        }
        let light = colors.iter().filter(|&&c| c == DiskColor::Light).count();
        let dark = colors.len() - light;
        if light != dark {
            return Err(DiskRowError::Unbalanced { light, dark });
        }
        Ok(Self { colors })
    }

    /// Total number of disks.
    pub fn total_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of light disks, always half the row.
    pub fn light_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Number of dark disks, always half the row.
    pub fn dark_count(&self) -> usize {
        self.light_count()
    }

    /// Count the disks of one color by scanning the row.
    ///
    /// Unlike [`light_count`](Self::light_count), this looks at the actual
    /// colors, so it can be used to check that sorting conserved them.
    pub fn count(&self, color: DiskColor) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }

    /// Whether `index` is a valid position in this row.
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Color of the disk at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= total_count()`.
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "Disk index out of range: {} (row has {} disks)",
            index,
            self.total_count()
        );
        self.colors[index]
    }

    /// Exchange the disk at `left_index` with its right neighbor.
    ///
    /// # Panics
    ///
    /// Panics if `left_index` or `left_index + 1` is out of range.
    pub fn swap(&mut self, left_index: usize) {
        assert!(
            self.is_index(left_index),
            "Disk index out of range: {} (row has {} disks)",
            left_index,
            self.total_count()
        );
        let right_index = left_index + 1;
        assert!(
            self.is_index(right_index),
            "Disk index out of range: {} has no right neighbor (row has {} disks)",
            left_index,
            self.total_count()
        );
        self.colors.swap(left_index, right_index);
    }

    /// The colors in row order.
    pub fn colors(&self) -> &[DiskColor] {
        &self.colors
    }

    /// Iterate over the colors from index 0 upward.
    pub fn iter(&self) -> impl Iterator<Item = DiskColor> + '_ {
        self.colors.iter().copied()
    }

    /// Render the row as space-separated `L`/`D` tokens, e.g. `"L D L D"`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Whether the row is in alternating order: light at every even index,
    /// dark at every odd index.
    pub fn is_initialized(&self) -> bool {
        self.colors
            .iter()
            .enumerate()
            .all(|(i, &c)| c == DiskColor::alternating_at(i))
    }

    /// Whether every dark disk is in the left half and every light disk is
    /// in the right half.
    ///
    /// Checked from both ends inward.
    pub fn is_sorted(&self) -> bool {
        let n = self.total_count();
        (0..n / 2).all(|i| {
            self.get(i) == DiskColor::Dark && self.get(n - 1 - i) == DiskColor::Light
        })
    }
}

impl fmt::Display for DiskRow {
    /// Format a row as "L D L D".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color.token())?;
        }
        Ok(())
    }
}

impl FromStr for DiskRow {
    type Err = DiskRowError;

    /// Parse the format produced by `Display`. Any whitespace separates tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split_whitespace()
            .map(|token| {
                DiskColor::from_str(token).map_err(|_| DiskRowError::UnknownToken {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_colors(colors)
    }
}
