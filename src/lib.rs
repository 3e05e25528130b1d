// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of the alternating disks problem.
//!
//! A row of `2n` disks starts in alternating order, light first:
//!
//! ```text
//! L D L D L D
//! ```
//!
//! The goal is to move every dark disk to the left half and every light
//! disk to the right half using only swaps of adjacent disks:
//!
//! ```text
//! D D D L L L
//! ```
//!
//! # Architecture
//!
//! - [`disk`]: the row state ([`DiskRow`]) and its colors ([`DiskColor`])
//! - [`sort`]: the two sorting algorithms and their [`SortResult`]
//!
//! Each algorithm sorts its own copy of the row and counts the swaps it
//! makes. Starting from alternating order with `n` light disks, both make
//! exactly `n * (n + 1) / 2` swaps, one per light-before-dark inversion; the
//! lawnmower algorithm needs half as many outer passes to do so.

pub mod disk;
pub mod sort;

// Re-export commonly used types
pub use disk::{DiskColor, DiskRow, DiskRowError};
pub use sort::{sort_alternate, sort_lawnmower, Algorithm, SortResult};
