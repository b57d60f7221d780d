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

//! Fixed-width identifier generation.
//!
//! An identifier is the key followed by a zero-padded, 1-based record
//! index. The total length of every identifier equals the resolved width.
//!
//! ## Usage
//!
//! ```rust
//! use seqrenamer::identifier::generate;
//!
//! let ids = generate(3, "SP", 5).unwrap();
//! assert_eq!(ids, vec!["SP001".to_string(), "SP002".to_string(), "SP003".to_string()]);
//!
//! // Width 0 sizes the identifiers to fit the record count
//! let ids = generate(12, "SP", 0).unwrap();
//! assert_eq!(ids[0], "SP01");
//! assert_eq!(ids[11], "SP12");
//! ```
//!

use crate::RenameError;

type E = Box<dyn std::error::Error>;

/// Width value that requests automatic sizing.
pub const AUTO_WIDTH: usize = 0;

/// Number of decimal digits needed to write `n`.
///
/// Zero is written with one digit.
pub fn digit_count(
    n: usize,
) -> usize {
    n.checked_ilog10().map_or(1, |x| x as usize + 1)
}

/// Resolve the identifier width for `n_records` records keyed by `key`.
///
/// If `requested_width` is [AUTO_WIDTH] the width is derived as the key
/// length plus [digit_count] of `n_records`.
///
/// ## Errors
///
/// Returns [RenameError::WidthTooSmall] if the width leaves no room for
/// the index or if `n_records` does not fit in the available digits.
///
pub fn resolve_width(
    n_records: usize,
    key: &str,
    requested_width: usize,
) -> Result<usize, E> {
    let key_len = key.chars().count();
    let width = if requested_width == AUTO_WIDTH {
        let width = key_len + digit_count(n_records);
        log::info!("Using identifier width {} for key '{}' and {} records", width, key, n_records);
        width
    } else {
        requested_width
    };

    let too_small = || Box::new(RenameError::WidthTooSmall{ key: key.to_string(), width, n_records });

    if width <= key_len {
        return Err(too_small())
    }
    let digits = width - key_len;

    // Anything beyond usize::MAX always fits
    let capacity = u32::try_from(digits).ok()
        .and_then(|d| 10_usize.checked_pow(d))
        .map_or(usize::MAX, |x| x - 1);

    if n_records > capacity {
        return Err(too_small())
    }

    Ok(width)
}

/// Iterator over the identifiers for a run of records.
///
/// Construct with [Identifiers::new], which validates the width before any
/// identifier is produced.
#[derive(Clone, Debug)]
pub struct Identifiers {
    key: String,
    digits: usize,
    index: usize,
    n_records: usize,
}

impl Identifiers {
    pub fn new(
        n_records: usize,
        key: &str,
        requested_width: usize,
    ) -> Result<Self, E> {
        let width = resolve_width(n_records, key, requested_width)?;
        Ok(Identifiers{
            key: key.to_string(),
            digits: width - key.chars().count(),
            index: 0,
            n_records,
        })
    }

    /// Total length of each identifier.
    pub fn width(
        &self,
    ) -> usize {
        self.key.chars().count() + self.digits
    }
}

impl Iterator for Identifiers {
    type Item = String;

    fn next(
        &mut self,
    ) -> Option<String> {
        if self.index == self.n_records {
            return None
        }
        self.index += 1;
        Some(format!("{}{:0>digits$}", self.key, self.index, digits = self.digits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.n_records - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Identifiers {}

/// Generate `n_records` identifiers in record order.
///
/// Returns all identifiers or an error; nothing is produced if the width
/// is too small.
pub fn generate(
    n_records: usize,
    key: &str,
    requested_width: usize,
) -> Result<Vec<String>, E> {
    Ok(Identifiers::new(n_records, key, requested_width)?.collect())
}
