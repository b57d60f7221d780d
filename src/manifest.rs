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

//! Manifest tables mapping input files to their key and taxonomic id.
//!
//! A manifest is a tab-separated table with a header row. The columns
//! `file`, `code`, and `taxid` are required; any other column may be
//! designated as the source of output file names.
//!
//! ## Usage
//!
//! ```rust
//! use seqrenamer::manifest::Manifest;
//!
//! let mut data: Vec<u8> = b"file\tcode\ttaxid\tstrain\n".to_vec();
//! data.append(&mut b"f1.fa\tECO\t562\tK-12\n".to_vec());
//! data.append(&mut b"f2.fa\tSAU\t1280\tUSA300\n".to_vec());
//!
//! let manifest = Manifest::from_read(data.as_slice(), Some("strain")).unwrap();
//!
//! let row = manifest.lookup("f2.fa").unwrap();
//! assert_eq!(row.code, "SAU");
//! assert_eq!(row.taxid, "1280");
//! assert_eq!(manifest.output_stem(row).unwrap(), Some("USA300".to_string()));
//!
//! assert!(manifest.lookup("f3.fa").is_none());
//! ```
//!
use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::RenameError;

type E = Box<dyn std::error::Error>;

/// Columns every manifest must contain.
pub const REQUIRED_COLUMNS: [&str; 3] = ["file", "code", "taxid"];

/// A single manifest row.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ManifestRow {
    /// Input file path, compared verbatim against enumerated paths.
    pub file: String,
    /// Identifier key used for the records in `file`.
    pub code: String,
    /// Taxonomic id attached to every record in `file`.
    pub taxid: String,
    /// Value of the output name column, if one was designated.
    pub output_name: Option<String>,
}

/// Validated manifest indexed by the `file` column.
///
/// If several rows name the same file, the first one in table order is
/// kept.
#[derive(Clone, Debug, Default)]
pub struct Manifest {
    rows: IndexMap<String, ManifestRow>,
    output_column: Option<String>,
}

impl Manifest {
    /// Read a manifest from tab-separated data.
    ///
    /// `output_column` names the column that holds output file stems.
    ///
    /// ## Errors
    ///
    /// Returns [RenameError::MissingColumns] if any of [REQUIRED_COLUMNS]
    /// is absent from the header, or [RenameError::UnknownOutputColumn] if
    /// `output_column` is not in the header. Malformed tables return the
    /// error from [csv].
    ///
    pub fn from_read<R: Read>(
        conn: R,
        output_column: Option<&str>,
    ) -> Result<Self, E> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(conn);

        let header = reader.headers()?.clone();
        let column_index = |name: &str| header.iter().position(|x| x == name);

        let missing: Vec<String> = REQUIRED_COLUMNS.iter()
            .filter(|&&name| column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Box::new(RenameError::MissingColumns(missing)))
        }
        let file_idx = column_index("file").unwrap_or_default();
        let code_idx = column_index("code").unwrap_or_default();
        let taxid_idx = column_index("taxid").unwrap_or_default();

        let output_idx = match output_column {
            Some(name) => Some(column_index(name).ok_or_else(|| RenameError::UnknownOutputColumn(name.to_string()))?),
            None => None,
        };

        let mut rows: IndexMap<String, ManifestRow> = IndexMap::new();
        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

            let row = ManifestRow{
                file: field(file_idx),
                code: field(code_idx),
                taxid: field(taxid_idx),
                output_name: output_idx.map(field),
            };
            match rows.entry(row.file.clone()) {
                Entry::Occupied(_) => log::warn!("Ignoring repeated manifest row for '{}'", row.file),
                Entry::Vacant(entry) => { entry.insert(row); },
            }
        }

        Ok(Manifest{ rows, output_column: output_column.map(|x| x.to_string()) })
    }

    /// Read a manifest from the file at `path`.
    ///
    /// See [from_read](Manifest::from_read).
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        output_column: Option<&str>,
    ) -> Result<Self, E> {
        let conn = File::open(path)?;
        Self::from_read(conn, output_column)
    }

    /// Find the row for an enumerated file path.
    pub fn lookup(
        &self,
        file: &str,
    ) -> Option<&ManifestRow> {
        self.rows.get(file)
    }

    /// Output stem for `row` if an output name column was designated.
    ///
    /// ## Errors
    ///
    /// Returns [RenameError::EmptyOutputName] if the designated column is
    /// empty for `row`.
    ///
    pub fn output_stem(
        &self,
        row: &ManifestRow,
    ) -> Result<Option<String>, E> {
        let Some(column) = &self.output_column else {
            return Ok(None)
        };
        match row.output_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(Some(name.to_string())),
            _ => Err(Box::new(RenameError::EmptyOutputName{ file: row.file.clone(), column: column.clone() })),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_manifest() {
        use super::Manifest;
        use super::ManifestRow;

        let mut data: Vec<u8> = b"taxid\tfile\tcode\n".to_vec();
        data.append(&mut b"562\tdata/f1.fa\tECO\n".to_vec());
        data.append(&mut b"1280\tdata/f2.fa\tSAU\n".to_vec());

        let got = Manifest::from_read(data.as_slice(), None).unwrap();

        let expected = vec![
            ManifestRow{ file: "data/f1.fa".to_string(), code: "ECO".to_string(), taxid: "562".to_string(), output_name: None },
            ManifestRow{ file: "data/f2.fa".to_string(), code: "SAU".to_string(), taxid: "1280".to_string(), output_name: None },
        ];

        assert_eq!(got.len(), 2);
        assert_eq!(got.lookup("data/f1.fa"), Some(&expected[0]));
        assert_eq!(got.lookup("data/f2.fa"), Some(&expected[1]));
        assert_eq!(got.output_stem(&expected[0]).unwrap(), None);
    }

    #[test]
    fn read_manifest_missing_columns() {
        use super::Manifest;
        use crate::RenameError;

        let data: Vec<u8> = b"file\tkey\n".to_vec();
        let got = Manifest::from_read(data.as_slice(), None).unwrap_err();
        let expected = RenameError::MissingColumns(vec!["code".to_string(), "taxid".to_string()]);

        assert_eq!(got.downcast_ref::<RenameError>(), Some(&expected));
    }

    #[test]
    fn read_manifest_unknown_output_column() {
        use super::Manifest;
        use crate::RenameError;

        let data: Vec<u8> = b"file\tcode\ttaxid\nf1.fa\tECO\t562\n".to_vec();
        let got = Manifest::from_read(data.as_slice(), Some("strain")).unwrap_err();
        let expected = RenameError::UnknownOutputColumn("strain".to_string());

        assert_eq!(got.downcast_ref::<RenameError>(), Some(&expected));
    }

    #[test]
    fn first_row_wins() {
        use super::Manifest;

        let mut data: Vec<u8> = b"file\tcode\ttaxid\n".to_vec();
        data.append(&mut b"f1.fa\tECO\t562\n".to_vec());
        data.append(&mut b"f1.fa\tSAU\t1280\n".to_vec());

        let got = Manifest::from_read(data.as_slice(), None).unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got.lookup("f1.fa").unwrap().code, "ECO");
    }

    #[test]
    fn lookup_is_exact() {
        use super::Manifest;

        let data: Vec<u8> = b"file\tcode\ttaxid\n./f1.fa\tECO\t562\n".to_vec();
        let got = Manifest::from_read(data.as_slice(), None).unwrap();

        assert!(got.lookup("f1.fa").is_none());
        assert!(got.lookup("./f1.fa").is_some());
    }

    #[test]
    fn quotes_are_kept_verbatim() {
        use super::Manifest;

        let mut data: Vec<u8> = b"file\tcode\ttaxid\tname\n".to_vec();
        data.append(&mut b"\"odd\"name.fa\tECO\t562\t\"K-12\" substr\n".to_vec());

        let manifest = Manifest::from_read(data.as_slice(), Some("name")).unwrap();

        assert!(manifest.lookup("oddname.fa").is_none());
        let row = manifest.lookup("\"odd\"name.fa").unwrap();
        assert_eq!(row.code, "ECO");
        assert_eq!(manifest.output_stem(row).unwrap(), Some("\"K-12\" substr".to_string()));
    }

    #[test]
    fn empty_output_name() {
        use super::Manifest;
        use crate::RenameError;

        let mut data: Vec<u8> = b"file\tcode\ttaxid\tname\n".to_vec();
        data.append(&mut b"f1.fa\tECO\t562\tecoli\n".to_vec());
        data.append(&mut b"f2.fa\tSAU\t1280\t\n".to_vec());
        data.append(&mut b"f3.fa\tBSU\t1423\n".to_vec());

        let manifest = Manifest::from_read(data.as_slice(), Some("name")).unwrap();

        let got = manifest.output_stem(manifest.lookup("f1.fa").unwrap()).unwrap();
        assert_eq!(got, Some("ecoli".to_string()));

        for file in ["f2.fa", "f3.fa"] {
            let got = manifest.output_stem(manifest.lookup(file).unwrap()).unwrap_err();
            let expected = RenameError::EmptyOutputName{ file: file.to_string(), column: "name".to_string() };
            assert_eq!(got.downcast_ref::<RenameError>(), Some(&expected));
        }
    }
}
