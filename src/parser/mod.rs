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

//! Readers for sequence files and mapping files.
//!
//! Sequence records are read with [needletail], which accepts fasta and
//! fastq input that may be gzip compressed. Mapping files are the
//! tab-separated files written by [printer::file_map](crate::printer::file_map).
//!

// Format specific implementations
pub mod fasta;
pub mod file_map;

use crate::IdentifierAssignment;
use crate::SequenceRecord;

use std::fs::File;
use std::path::Path;

type E = Box<dyn std::error::Error>;

/// Read all sequence records from the file at `path`.
pub fn read_records_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<SequenceRecord>, E> {
    let conn = File::open(path)?;
    fasta::read_records(conn)
}

/// Read all lines of the mapping file at `path`.
pub fn read_file_map_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<IdentifierAssignment>, E> {
    let conn = File::open(path)?;
    file_map::read_file_map(conn)
}
