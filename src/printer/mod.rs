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

//! Writers for renamed sequence files and mapping files.
//!
//! A run on one input writes two files next to each other:
//!
//!   - `<stem>_rnmd.fsa` (or `<stem>_renamed.fsa`) containing each record
//!     with its new identifier as the header line.
//!   - `<stem>_file_map` containing the tab-separated new identifier,
//!     original description, and taxonomic id of each record.
//!
//! Both files are always written from scratch.
//!
//! ## Usage
//!
//! ```rust
//! use seqrenamer::{IdentifierAssignment, SequenceRecord};
//! use seqrenamer::printer::{write_file_map, write_renamed};
//!
//! let records = vec![
//!     SequenceRecord{ description: "seq A".to_string(), sequence: b"ACGT".to_vec() },
//!     SequenceRecord{ description: "seq B".to_string(), sequence: b"TTGA".to_vec() },
//! ];
//! let assignments = vec![
//!     IdentifierAssignment{ new_id: "SP001".to_string(), original_description: "seq A".to_string(), taxid: "562".to_string() },
//!     IdentifierAssignment{ new_id: "SP002".to_string(), original_description: "seq B".to_string(), taxid: "562".to_string() },
//! ];
//!
//! let mut renamed: Vec<u8> = Vec::new();
//! write_renamed(&assignments, &records, &mut renamed).unwrap();
//! assert_eq!(renamed, b">SP001\nACGT\n>SP002\nTTGA\n".to_vec());
//!
//! let mut file_map: Vec<u8> = Vec::new();
//! write_file_map(&assignments, &mut file_map).unwrap();
//! assert_eq!(file_map, b"SP001\tseq A\t562\nSP002\tseq B\t562\n".to_vec());
//! ```
//!

use crate::IdentifierAssignment;
use crate::SequenceRecord;

use fasta::format_fasta_record;
use file_map::format_file_map_line;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

// Format specific implementations
pub mod fasta;
pub mod file_map;

type E = Box<dyn std::error::Error>;

/// Suffix of the renamed sequence file.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputSuffix {
    /// `_rnmd.fsa`
    #[default]
    Rnmd,
    /// `_renamed.fsa`
    Renamed,
}

impl OutputSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSuffix::Rnmd => "_rnmd.fsa",
            OutputSuffix::Renamed => "_renamed.fsa",
        }
    }
}

impl std::str::FromStr for OutputSuffix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rnmd" => Ok(OutputSuffix::Rnmd),
            "renamed" => Ok(OutputSuffix::Renamed),
            _ => Err(format!("'{}' is not a valid OutputSuffix", s)),
        }
    }
}

/// Suffix of the mapping file.
pub const FILE_MAP_SUFFIX: &str = "_file_map";

/// Paths of the two files written for one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub renamed: PathBuf,
    pub file_map: PathBuf,
}

impl OutputPaths {
    pub fn new(
        out_dir: &Path,
        stem: &str,
        suffix: OutputSuffix,
    ) -> Self {
        OutputPaths{
            renamed: out_dir.join(stem.to_string() + suffix.as_str()),
            file_map: out_dir.join(stem.to_string() + FILE_MAP_SUFFIX),
        }
    }
}

/// Write renamed records in fasta format.
///
/// Panics if `assignments` and `records` differ in length.
pub fn write_renamed<W: Write>(
    assignments: &[IdentifierAssignment],
    records: &[SequenceRecord],
    conn: &mut W,
) -> Result<(), E> {
    assert_eq!(assignments.len(), records.len());
    for (aln, record) in assignments.iter().zip(records.iter()) {
        format_fasta_record(&aln.new_id, &record.sequence, conn)?;
    }
    conn.flush()?;
    Ok(())
}

/// Write one mapping line per assignment.
pub fn write_file_map<W: Write>(
    assignments: &[IdentifierAssignment],
    conn: &mut W,
) -> Result<(), E> {
    for aln in assignments {
        format_file_map_line(aln, conn)?;
    }
    conn.flush()?;
    Ok(())
}

/// Create or truncate both output files for `stem` in `out_dir` and write them.
pub fn write_outputs(
    out_dir: &Path,
    stem: &str,
    suffix: OutputSuffix,
    assignments: &[IdentifierAssignment],
    records: &[SequenceRecord],
) -> Result<OutputPaths, E> {
    let paths = OutputPaths::new(out_dir, stem, suffix);

    let mut conn_out = BufWriter::new(File::create(&paths.renamed)?);
    write_renamed(assignments, records, &mut conn_out)?;

    let mut conn_out = BufWriter::new(File::create(&paths.file_map)?);
    write_file_map(assignments, &mut conn_out)?;

    log::info!("Wrote {} and {}", paths.renamed.display(), paths.file_map.display());
    Ok(paths)
}
