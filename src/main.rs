// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: `disks <light_count> [alternate|lawnmower]`.
//!
//! Builds an alternating row, runs the chosen algorithm (or both), and prints
//! the row before and after sorting together with the swap count.

use alternating_disks::{Algorithm, DiskRow};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;
use strum::IntoEnumIterator;

const USAGE: &str = "usage: disks <light_count> [alternate|lawnmower]";

fn parse_args(args: &[String]) -> Result<(usize, Vec<Algorithm>), String> {
    let (count, algorithm) = match args {
        [count] => (count, None),
        [count, algorithm] => (count, Some(algorithm)),
        _ => return Err(String::from("expected one or two arguments")),
    };

    let light_count = count
        .parse::<usize>()
        .map_err(|_| format!("light count {:?} is not a non-negative integer", count))?;

    let algorithms = match algorithm {
        Some(name) => vec![Algorithm::from_str(name)
            .map_err(|_| format!("unknown algorithm {:?}", name))?],
        None => Algorithm::iter().collect(),
    };

    Ok((light_count, algorithms))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (light_count, algorithms) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("[disks] {}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let before = match DiskRow::try_new(light_count) {
        Ok(row) => row,
        Err(err) => {
            eprintln!("[disks] {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    println!("light count = {}", light_count);
    println!("before      = {}", before);

    for algorithm in algorithms {
        let start = Instant::now();
        let result = algorithm.sort(&before);
        let elapsed = start.elapsed();

        println!();
        println!("{} algorithm", algorithm);
        println!("after       = {}", result.after());
        println!("swap count  = {}", result.swap_count());
        eprintln!("[disks] {} finished in {:.3?}", algorithm, elapsed);
    }

    ExitCode::SUCCESS
}
