// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use alternating_disks::{DiskColor, DiskRow};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The sorted row with `light_count` disks of each color.
pub fn sorted_row(light_count: usize) -> DiskRow {
    let mut colors = vec![DiskColor::Dark; light_count];
    colors.extend(std::iter::repeat(DiskColor::Light).take(light_count));
    DiskRow::from_colors(colors).unwrap()
}

/// A balanced row with its colors in random order.
pub fn shuffled_row(light_count: usize, rng: &mut StdRng) -> DiskRow {
    let mut colors: Vec<DiskColor> = DiskRow::new(light_count).iter().collect();
    colors.shuffle(rng);
    DiskRow::from_colors(colors).unwrap()
}

/// Number of (light, dark) pairs where the light disk comes first.
///
/// Every adjacent swap of a light disk past a dark disk removes exactly one.
pub fn inversions(row: &DiskRow) -> u64 {
    let mut lights_seen = 0;
    let mut total = 0;
    for color in row.iter() {
        match color {
            DiskColor::Light => lights_seen += 1,
            DiskColor::Dark => total += lights_seen,
        }
    }
    total
}
