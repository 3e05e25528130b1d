// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Disk state types.
//!
//! - DiskColor: Dark or light
//! - DiskRow: Fixed-length row of disks, mutated only by adjacent swaps
//! - DiskRowError: Why a row could not be built from untrusted input

pub mod color;
pub mod errors;
pub mod row;

pub use color::DiskColor;
pub use errors::DiskRowError;
pub use row::DiskRow;
