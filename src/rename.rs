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

//! Single-file and batch renaming on the file system.
//!
//! Each input file is read, assigned identifiers, and written out in full
//! before the next file is opened. Any error stops the run; files with no
//! manifest row are skipped.
//!
use std::path::Path;
use std::path::PathBuf;

use crate::IdentifierAssignment;
use crate::SequenceRecord;
use crate::config::Mode;
use crate::config::RunConfig;
use crate::enumerate::enumerate_files;
use crate::identifier::AUTO_WIDTH;
use crate::identifier::Identifiers;
use crate::manifest::Manifest;
use crate::parser::read_records_from_path;
use crate::printer::OutputSuffix;
use crate::printer::write_outputs;

type E = Box<dyn std::error::Error>;

/// Outcome of renaming one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub input: PathBuf,
    pub stem: String,
    pub width: usize,
    /// Whether `width` was derived from the record count.
    pub auto_width: bool,
    pub n_records: usize,
    pub renamed: PathBuf,
    pub file_map: PathBuf,
}

impl FileSummary {
    /// One-line description of the renamed file.
    pub fn report(
        &self,
    ) -> String {
        format!("Renamed {} records from {} to {} with {} width {}",
                self.n_records, self.input.display(), self.renamed.display(),
                if self.auto_width { "derived" } else { "fixed" }, self.width)
    }
}

/// Assign identifiers to `records` in input order.
///
/// The width is validated before any identifier is created.
///
/// ## Usage
///
/// ```rust
/// use seqrenamer::SequenceRecord;
/// use seqrenamer::rename::assign_identifiers;
///
/// let records: Vec<SequenceRecord> = ["seq A", "seq B", "seq C"].iter().map(|x| {
///     SequenceRecord{ description: x.to_string(), sequence: b"ACGT".to_vec() }
/// }).collect();
///
/// let got = assign_identifiers(&records, "SP", 5, "562").unwrap();
///
/// assert_eq!(got[2].new_id, "SP003");
/// assert_eq!(got[2].original_description, "seq C");
/// assert_eq!(got[2].taxid, "562");
/// ```
///
pub fn assign_identifiers(
    records: &[SequenceRecord],
    key: &str,
    width: usize,
    taxid: &str,
) -> Result<Vec<IdentifierAssignment>, E> {
    let ids = Identifiers::new(records.len(), key, width)?;
    Ok(label_records(ids, records, taxid))
}

fn label_records(
    ids: Identifiers,
    records: &[SequenceRecord],
    taxid: &str,
) -> Vec<IdentifierAssignment> {
    ids.zip(records.iter()).map(|(new_id, record)| {
        IdentifierAssignment{
            new_id,
            original_description: record.description.clone(),
            taxid: taxid.to_string(),
        }
    }).collect()
}

/// Output stem of `path` with every extension removed.
///
/// `reads/sample.fasta.gz` becomes `sample`.
pub fn derive_stem(
    path: &Path,
) -> Result<String, E> {
    let Some(file_name) = path.file_name() else {
        return Err(Box::new(std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("'{}' is not a file", path.display()))))
    };
    let mut file_name: PathBuf = PathBuf::from(file_name);
    while let Some(stripped) = file_name.file_stem() {
        let is_same = file_name == stripped;
        file_name = PathBuf::from(stripped);
        if is_same {
            break;
        }
    };
    Ok(file_name.to_string_lossy().to_string())
}

/// Rename the records in `input` and write the outputs for `stem`.
///
/// Outputs go to `out_dir`, or next to `input` if `out_dir` is None.
/// Nothing is written if the width is too small.
pub fn rename_file(
    input: &Path,
    key: &str,
    taxid: &str,
    width: usize,
    stem: &str,
    out_dir: Option<&Path>,
    suffix: OutputSuffix,
) -> Result<FileSummary, E> {
    let records = read_records_from_path(input)?;
    let ids = Identifiers::new(records.len(), key, width)?;
    let resolved_width = ids.width();
    let assignments = label_records(ids, &records, taxid);

    let out_dir = out_dir.unwrap_or_else(|| input.parent().unwrap_or(Path::new("")));
    let paths = write_outputs(out_dir, stem, suffix, &assignments, &records)?;

    Ok(FileSummary{
        input: input.to_path_buf(),
        stem: stem.to_string(),
        width: resolved_width,
        auto_width: width == AUTO_WIDTH,
        n_records: records.len(),
        renamed: paths.renamed,
        file_map: paths.file_map,
    })
}

/// Run the renaming described by `config`.
///
/// Returns one [FileSummary] per renamed file in processing order.
///
/// In batch mode the manifest is read first, then the files matching the
/// pattern are processed in natural order. Each file gets its own key,
/// taxonomic id, and width.
///
pub fn run(
    config: &RunConfig,
) -> Result<Vec<FileSummary>, E> {
    let out_dir = config.out_dir.as_deref();
    match &config.mode {
        Mode::Single{ input, key, taxid, stem } => {
            let stem = match stem {
                Some(stem) => stem.clone(),
                None => derive_stem(input)?,
            };
            let summary = rename_file(input, key, taxid, config.width, &stem, out_dir, config.suffix)?;
            Ok(vec![summary])
        },
        Mode::Batch{ manifest, pattern, name_column } => {
            let manifest = Manifest::from_path(manifest, name_column.as_deref())?;
            if manifest.is_empty() {
                log::warn!("Manifest has no rows, no files will be renamed");
            } else {
                log::info!("Read {} manifest rows", manifest.len());
            }
            let files = enumerate_files(pattern)?;

            let mut summaries: Vec<FileSummary> = Vec::new();
            for file in files.iter() {
                let Some(row) = manifest.lookup(&file.to_string_lossy()) else {
                    log::info!("Skipping {}: not in manifest", file.display());
                    continue
                };
                let stem = match manifest.output_stem(row)? {
                    Some(stem) => stem,
                    None => derive_stem(file)?,
                };
                summaries.push(rename_file(file, &row.code, &row.taxid, config.width, &stem, out_dir, config.suffix)?);
            }
            Ok(summaries)
        },
    }
}
