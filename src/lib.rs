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

//! seqrenamer is a library and a command-line client for:
//!
//!   - Replacing the names of sequence records with short fixed-width identifiers.
//!   - Recording the original description and taxonomic id of each record in a mapping file.
//!   - Renaming many files in one run using a manifest table.
//!   - Restoring the original names from a renamed file and its mapping file.
//!
//! An identifier is a key followed by the zero-padded 1-based index of the
//! record in its input file, eg. `SP001`, `SP002`, ... for the key `SP` and
//! width 5. If the width is not given, it is sized to fit the number of
//! records in the file.
//!
//! ## Usage
//!
//! ### Command line
//!
//! Rename a single file:
//!
//! ```text
//! seqrenamer rename genome.fasta -k SP -t 562 -l 10
//! ```
//!
//! This writes `genome_rnmd.fsa` with the renamed records and
//! `genome_file_map` with the tab-separated columns new identifier,
//! original description, and taxonomic id.
//!
//! Rename all files matching a pattern using a manifest:
//!
//! ```text
//! seqrenamer rename -m manifest.tsv -e '*.fasta' -n strain
//! ```
//!
//! The manifest is a tab-separated table with the columns `file`, `code`,
//! and `taxid`. Each file matching the pattern is renamed with the key in
//! `code` and tagged with `taxid`; files with no row in the manifest are
//! skipped. With `-n`, the output files are named after the value in the
//! given column.
//!
//! Restore the original names:
//!
//! ```text
//! seqrenamer restore genome_rnmd.fsa genome_file_map -o genome.fasta
//! ```
//!
//! ### Rust API
//!
//! The functions in this module operate on structs that implement [Read]
//! and [Write]. The individual steps are available in the modules:
//!
//!   - [identifier]: width resolution and identifier generation.
//!   - [enumerate]: natural-order file listing.
//!   - [manifest]: reading and querying manifest tables.
//!   - [config]: validated run configuration.
//!   - [rename]: single-file and batch runs on the file system.
//!   - [parser]: reading sequence records and mapping files.
//!   - [printer]: formatting renamed records and mapping lines.
//!

use std::collections::HashMap;
use std::io::Read;
use std::io::Write;

pub mod config;
pub mod enumerate;
pub mod identifier;
pub mod manifest;
pub mod parser;
pub mod printer;
pub mod rename;

type E = Box<dyn std::error::Error>;

/// A sequence record read from an input file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceRecord {
    /// Full header line without the record marker.
    pub description: String,
    /// Sequence bytes with line breaks removed.
    pub sequence: Vec<u8>,
}

/// Provenance of a renamed record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IdentifierAssignment {
    pub new_id: String,
    pub original_description: String,
    pub taxid: String,
}

/// Errors that terminate a run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// No input file or manifest was given.
    MissingInput,
    /// Single-file and batch options were given together.
    ConflictingArguments(String),
    /// Required manifest columns are absent.
    MissingColumns(Vec<String>),
    /// The file pattern matched nothing.
    NoFilesFound(String),
    /// The identifier width cannot hold all records.
    WidthTooSmall{ key: String, width: usize, n_records: usize },
    /// The output name column is not in the manifest.
    UnknownOutputColumn(String),
    /// The output name column is empty for a matched file.
    EmptyOutputName{ file: String, column: String },
    /// A mapping file line has fewer than two fields.
    MalformedFileMap{ line: usize },
    /// A renamed record has no entry in the mapping file.
    UnknownIdentifier(String),
}

impl std::fmt::Display for RenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RenameError::MissingInput => write!(f, "no input file or manifest given"),
            RenameError::ConflictingArguments(args) => write!(f, "{} cannot be used with a manifest", args),
            RenameError::MissingColumns(columns) => write!(f, "manifest is missing required columns: {}", columns.join(", ")),
            RenameError::NoFilesFound(pattern) => write!(f, "no files match '{}'", pattern),
            RenameError::WidthTooSmall{ key, width, n_records } => write!(f, "width {} with key '{}' cannot hold {} records", width, key, n_records),
            RenameError::UnknownOutputColumn(column) => write!(f, "output name column '{}' is not in the manifest", column),
            RenameError::EmptyOutputName{ file, column } => write!(f, "output name column '{}' is empty for '{}'", column, file),
            RenameError::MalformedFileMap{ line } => write!(f, "malformed mapping file on line {}", line),
            RenameError::UnknownIdentifier(id) => write!(f, "identifier '{}' is not in the mapping file", id),
        }
    }
}

impl std::error::Error for RenameError {}

/// Rename all records from [Read] and write the outputs to two [Write]s.
///
/// Reads fasta or fastq data from `conn_in`, assigns identifiers with `key`
/// and `width`, writes the renamed records in fasta format to `renamed_out`
/// and the mapping lines to `map_out`. A `width` of 0 sizes the identifiers
/// to fit the number of records.
///
/// Returns the number of records renamed.
///
/// ## Errors
///
/// Returns [RenameError::WidthTooSmall] before writing anything if the
/// width cannot hold all records.
///
/// ## Usage
///
/// ```rust
/// use seqrenamer::rename_from_read_to_write;
///
/// let mut input: Vec<u8> = b">seq A\nACGT\nACGT\n".to_vec();
/// input.append(&mut b">seq B\nTTTT\n".to_vec());
/// input.append(&mut b">seq C\nGG\n".to_vec());
///
/// let mut renamed: Vec<u8> = Vec::new();
/// let mut file_map: Vec<u8> = Vec::new();
/// let n = rename_from_read_to_write("SP", 5, "562", input.as_slice(), &mut renamed, &mut file_map).unwrap();
///
/// assert_eq!(n, 3);
/// assert_eq!(renamed, b">SP001\nACGTACGT\n>SP002\nTTTT\n>SP003\nGG\n".to_vec());
/// assert_eq!(file_map, b"SP001\tseq A\t562\nSP002\tseq B\t562\nSP003\tseq C\t562\n".to_vec());
/// ```
///
pub fn rename_from_read_to_write<R: Read + Send, W: Write, V: Write>(
    key: &str,
    width: usize,
    taxid: &str,
    conn_in: R,
    renamed_out: &mut W,
    map_out: &mut V,
) -> Result<usize, E> {
    let records = parser::fasta::read_records(conn_in)?;
    let assignments = rename::assign_identifiers(&records, key, width, taxid)?;

    printer::write_renamed(&assignments, &records, renamed_out)?;
    printer::write_file_map(&assignments, map_out)?;

    Ok(records.len())
}

/// Restore the original descriptions of renamed records.
///
/// Reads renamed records from `renamed_in` and the mapping lines from
/// `map_in`, and writes the records to `conn_out` in fasta format with
/// their original descriptions.
///
/// Returns the number of records restored.
///
/// ## Errors
///
/// Returns [RenameError::UnknownIdentifier] if a record in `renamed_in` is
/// not in the mapping file.
///
/// ## Usage
///
/// ```rust
/// use seqrenamer::{rename_from_read_to_write, restore_from_read_to_write};
///
/// let input: Vec<u8> = b">NZ_CP009072.1 Escherichia coli\nACGT\n>plasmid pO157\nTTAA\n".to_vec();
///
/// let mut renamed: Vec<u8> = Vec::new();
/// let mut file_map: Vec<u8> = Vec::new();
/// rename_from_read_to_write("EC", 0, "562", input.as_slice(), &mut renamed, &mut file_map).unwrap();
///
/// let mut restored: Vec<u8> = Vec::new();
/// restore_from_read_to_write(renamed.as_slice(), file_map.as_slice(), &mut restored).unwrap();
///
/// assert_eq!(restored, input);
/// ```
///
pub fn restore_from_read_to_write<R: Read + Send, M: Read, W: Write>(
    renamed_in: R,
    map_in: M,
    conn_out: &mut W,
) -> Result<usize, E> {
    let assignments = parser::file_map::read_file_map(map_in)?;
    let id_to_assignment: HashMap<&str, &IdentifierAssignment> = assignments.iter()
        .map(|x| (x.new_id.as_str(), x))
        .collect();

    let records = parser::fasta::read_records(renamed_in)?;
    for record in records.iter() {
        let assignment = id_to_assignment.get(record.description.as_str())
            .ok_or_else(|| RenameError::UnknownIdentifier(record.description.clone()))?;
        printer::fasta::format_fasta_record(&assignment.original_description, &record.sequence, conn_out)?;
    }

    conn_out.flush()?;
    Ok(records.len())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn rename_from_read_to_write_fastq() {
        use super::rename_from_read_to_write;

        let input: Vec<u8> = b"@ERR4035126.1\nACGT\n+\nIIII\n@ERR4035126.2\nGGCC\n+\nIIII\n".to_vec();

        let mut renamed: Vec<u8> = Vec::new();
        let mut file_map: Vec<u8> = Vec::new();
        let n = rename_from_read_to_write("R", 4, "9606", input.as_slice(), &mut renamed, &mut file_map).unwrap();

        assert_eq!(n, 2);
        assert_eq!(renamed, b">R001\nACGT\n>R002\nGGCC\n".to_vec());
        assert_eq!(file_map, b"R001\tERR4035126.1\t9606\nR002\tERR4035126.2\t9606\n".to_vec());
    }

    #[test]
    fn rename_from_read_to_write_width_too_small() {
        use super::rename_from_read_to_write;
        use crate::RenameError;

        let input: Vec<u8> = (1..=10).flat_map(|x| format!(">seq {}\nACGT\n", x).into_bytes()).collect();

        let mut renamed: Vec<u8> = Vec::new();
        let mut file_map: Vec<u8> = Vec::new();
        let got = rename_from_read_to_write("AB", 3, "562", input.as_slice(), &mut renamed, &mut file_map).unwrap_err();

        assert!(matches!(got.downcast_ref::<RenameError>(), Some(RenameError::WidthTooSmall{ .. })));
        assert!(renamed.is_empty());
        assert!(file_map.is_empty());
    }

    #[test]
    fn restore_unknown_identifier() {
        use super::restore_from_read_to_write;
        use crate::RenameError;

        let renamed: Vec<u8> = b">SP001\nACGT\n>SP009\nACGT\n".to_vec();
        let file_map: Vec<u8> = b"SP001\tseq A\t562\n".to_vec();

        let mut restored: Vec<u8> = Vec::new();
        let got = restore_from_read_to_write(renamed.as_slice(), file_map.as_slice(), &mut restored).unwrap_err();

        assert_eq!(got.downcast_ref::<RenameError>(), Some(&RenameError::UnknownIdentifier("SP009".to_string())));
    }

    #[test]
    fn rename_error_names_offending_value() {
        use crate::RenameError;

        let got = RenameError::WidthTooSmall{ key: "AB".to_string(), width: 3, n_records: 10 }.to_string();
        assert_eq!(got, "width 3 with key 'AB' cannot hold 10 records");

        let got = RenameError::MissingColumns(vec!["code".to_string(), "taxid".to_string()]).to_string();
        assert_eq!(got, "manifest is missing required columns: code, taxid");
    }
}
