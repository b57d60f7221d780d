// seqrenamer: Fixed-width sequence identifier assignment with provenance mapping.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! Natural-order file enumeration.
//!
//! Paths are compared by splitting them into alternating runs of text and
//! decimal digits, with digit runs compared by numeric value. This puts
//! `f2.fa` before `f10.fa`.
//!
use std::cmp::Ordering;
use std::path::PathBuf;

use crate::RenameError;

type E = Box<dyn std::error::Error>;

/// Split `s` into alternating text and digit runs.
///
/// The first element is always text, so it may be empty when `s` starts
/// with a digit. Text runs are at even positions and digit runs at odd
/// positions.
fn split_digit_runs(
    s: &str,
) -> Vec<&str> {
    let mut runs: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut in_digits = false;
    for (pos, c) in s.char_indices() {
        if c.is_ascii_digit() != in_digits {
            runs.push(&s[start..pos]);
            start = pos;
            in_digits = !in_digits;
        }
    }
    runs.push(&s[start..]);
    runs
}

/// Compare two runs of decimal digits by value without parsing them.
fn cmp_digit_runs(
    a: &str,
    b: &str,
) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed.len().cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}

/// Natural ordering of two strings.
///
/// Strings that compare equal by natural order (eg. `f01` and `f1`) fall
/// back to plain string comparison so that the order is total.
///
/// ## Usage
///
/// ```rust
/// use seqrenamer::enumerate::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("f2.fa", "f10.fa"), Ordering::Less);
/// assert_eq!(natural_cmp("b1.fa", "a2.fa"), Ordering::Greater);
/// ```
///
pub fn natural_cmp(
    a: &str,
    b: &str,
) -> Ordering {
    let a_runs = split_digit_runs(a);
    let b_runs = split_digit_runs(b);

    for (idx, (x, y)) in a_runs.iter().zip(b_runs.iter()).enumerate() {
        let ord = if idx % 2 == 0 {
            x.cmp(y)
        } else {
            cmp_digit_runs(x, y)
        };
        if ord != Ordering::Equal {
            return ord
        }
    }

    a_runs.len().cmp(&b_runs.len()).then_with(|| a.cmp(b))
}

/// Sort paths in place by [natural_cmp] on their string representation.
pub fn natural_sort(
    paths: &mut [PathBuf],
) {
    paths.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
}

/// List the files matching `pattern` in natural order.
///
/// Relative patterns are resolved against the working directory and the
/// returned paths keep the form given by the pattern. Directories matching
/// the pattern are ignored.
///
/// ## Errors
///
/// Returns [RenameError::NoFilesFound] if nothing matches.
///
pub fn enumerate_files(
    pattern: &str,
) -> Result<Vec<PathBuf>, E> {
    let mut paths: Vec<PathBuf> = glob::glob(pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if paths.is_empty() {
        return Err(Box::new(RenameError::NoFilesFound(pattern.to_string())))
    }

    natural_sort(&mut paths);
    log::info!("Found {} files matching '{}'", paths.len(), pattern);

    Ok(paths)
}
