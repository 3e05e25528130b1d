// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color of a single disk.
//!
//! Every disk is either dark or light. Colors render as the single-letter
//! tokens `D` and `L`, and parse back from the same tokens.

use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The color of one disk in a [`DiskRow`](crate::disk::DiskRow).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum DiskColor {
    #[strum(serialize = "D")]
    Dark,
    #[strum(serialize = "L")]
    Light,
}

impl DiskColor {
    /// The color a disk at `index` has in alternating order.
    ///
    /// Light disks sit at even indices, dark disks at odd indices.
    pub fn alternating_at(index: usize) -> Self {
        if index % 2 == 0 {
            DiskColor::Light
        } else {
            DiskColor::Dark
        }
    }

    /// The single-letter token for this color.
    pub fn token(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_two_colors() {
        assert_eq!(DiskColor::COUNT, 2);
        let colors: Vec<_> = DiskColor::iter().collect();
        assert_eq!(colors, vec![DiskColor::Dark, DiskColor::Light]);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(DiskColor::Dark.to_string(), "D");
        assert_eq!(DiskColor::Light.to_string(), "L");
        assert_eq!(DiskColor::Light.token(), "L");
    }

    #[test]
    fn test_parse() {
        assert_eq!(DiskColor::from_str("D"), Ok(DiskColor::Dark));
        assert_eq!(DiskColor::from_str("L"), Ok(DiskColor::Light));
        assert!(DiskColor::from_str("X").is_err());
        assert!(DiskColor::from_str("").is_err());
    }

    #[test]
    fn test_alternating_at() {
        assert_eq!(DiskColor::alternating_at(0), DiskColor::Light);
        assert_eq!(DiskColor::alternating_at(1), DiskColor::Dark);
        assert_eq!(DiskColor::alternating_at(6), DiskColor::Light);
        assert_eq!(DiskColor::alternating_at(7), DiskColor::Dark);
    }
}
