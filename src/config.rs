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

//! Run configuration.
//!
//! A run either renames one file ([Mode::Single]) or every file matched by
//! a pattern and listed in a manifest ([Mode::Batch]). The mode is chosen
//! once from the invocation arguments by [RunConfig::from_args].
//!
use std::path::PathBuf;

use crate::RenameError;
use crate::identifier::AUTO_WIDTH;
use crate::printer::OutputSuffix;

type E = Box<dyn std::error::Error>;

/// Key used in single-file mode when none is given.
pub const DEFAULT_KEY: &str = "KEY";

/// File pattern used in batch mode when none is given.
pub const DEFAULT_PATTERN: &str = "*.fasta";

/// What to rename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Single {
        input: PathBuf,
        key: String,
        taxid: String,
        /// Output stem, derived from `input` if None.
        stem: Option<String>,
    },
    Batch {
        manifest: PathBuf,
        pattern: String,
        /// Manifest column holding output stems.
        name_column: Option<String>,
    },
}

/// Validated, read-only configuration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Identifier width; [AUTO_WIDTH] sizes each file separately.
    pub width: usize,
    /// Output directory, defaults to the directory of each input.
    pub out_dir: Option<PathBuf>,
    pub suffix: OutputSuffix,
}

/// Unvalidated invocation arguments.
#[derive(Clone, Debug, Default)]
pub struct RunArgs {
    pub input: Option<PathBuf>,
    pub key: Option<String>,
    pub taxid: Option<String>,
    pub width: Option<usize>,
    pub manifest: Option<PathBuf>,
    pub pattern: Option<String>,
    pub name: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub suffix: OutputSuffix,
}

impl RunConfig {
    /// Select the run mode from `args`.
    ///
    /// ## Errors
    ///
    /// Returns [RenameError::ConflictingArguments] if a manifest is given
    /// together with an input file, key, or taxonomic id, and
    /// [RenameError::MissingInput] if neither a manifest nor an input file
    /// is given.
    ///
    /// ## Usage
    ///
    /// ```rust
    /// use seqrenamer::config::{Mode, RunArgs, RunConfig};
    /// use std::path::PathBuf;
    ///
    /// let args = RunArgs{ manifest: Some(PathBuf::from("manifest.tsv")), name: Some("strain".to_string()), ..Default::default() };
    /// let config = RunConfig::from_args(args).unwrap();
    ///
    /// assert_eq!(config.width, 0);
    /// assert_eq!(config.mode, Mode::Batch{ manifest: PathBuf::from("manifest.tsv"), pattern: "*.fasta".to_string(), name_column: Some("strain".to_string()) });
    /// ```
    ///
    pub fn from_args(
        args: RunArgs,
    ) -> Result<Self, E> {
        let mode = match (args.manifest, args.input) {
            (Some(manifest), input) => {
                let single_args: Vec<&str> = [
                    (input.is_some(), "input file"),
                    (args.key.is_some(), "key"),
                    (args.taxid.is_some(), "taxid"),
                ].iter().filter(|(set, _)| *set).map(|(_, name)| *name).collect();

                if !single_args.is_empty() {
                    return Err(Box::new(RenameError::ConflictingArguments(single_args.join(", "))))
                }

                Mode::Batch{
                    manifest,
                    pattern: args.pattern.unwrap_or(DEFAULT_PATTERN.to_string()),
                    name_column: args.name,
                }
            },
            (None, Some(input)) => {
                Mode::Single{
                    input,
                    key: args.key.unwrap_or(DEFAULT_KEY.to_string()),
                    taxid: args.taxid.unwrap_or_default(),
                    stem: args.name,
                }
            },
            (None, None) => return Err(Box::new(RenameError::MissingInput)),
        };

        Ok(RunConfig{
            mode,
            width: args.width.unwrap_or(AUTO_WIDTH),
            out_dir: args.out_dir,
            suffix: args.suffix,
        })
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn single_file_defaults() {
        use super::{Mode, RunArgs, RunConfig};
        use crate::printer::OutputSuffix;
        use std::path::PathBuf;

        let args = RunArgs{ input: Some(PathBuf::from("genome.fasta")), ..Default::default() };
        let got = RunConfig::from_args(args).unwrap();

        let expected = RunConfig{
            mode: Mode::Single{ input: PathBuf::from("genome.fasta"), key: "KEY".to_string(), taxid: String::new(), stem: None },
            width: 0,
            out_dir: None,
            suffix: OutputSuffix::Rnmd,
        };
        assert_eq!(got, expected);
    }

    #[test]
    fn missing_input() {
        use super::{RunArgs, RunConfig};
        use crate::RenameError;

        let args = RunArgs{ key: Some("SP".to_string()), width: Some(10), ..Default::default() };
        let got = RunConfig::from_args(args).unwrap_err();

        assert_eq!(got.downcast_ref::<RenameError>(), Some(&RenameError::MissingInput));
    }

    #[test]
    fn conflicting_arguments() {
        use super::{RunArgs, RunConfig};
        use crate::RenameError;
        use std::path::PathBuf;

        let args = RunArgs{
            input: Some(PathBuf::from("genome.fasta")),
            key: Some("SP".to_string()),
            manifest: Some(PathBuf::from("manifest.tsv")),
            ..Default::default()
        };
        let got = RunConfig::from_args(args).unwrap_err();

        let expected = RenameError::ConflictingArguments("input file, key".to_string());
        assert_eq!(got.downcast_ref::<RenameError>(), Some(&expected));
    }

    #[test]
    fn conflicting_taxid() {
        use super::{RunArgs, RunConfig};
        use crate::RenameError;
        use std::path::PathBuf;

        let args = RunArgs{ taxid: Some("562".to_string()), manifest: Some(PathBuf::from("manifest.tsv")), ..Default::default() };
        let got = RunConfig::from_args(args).unwrap_err();

        assert!(matches!(got.downcast_ref::<RenameError>(), Some(RenameError::ConflictingArguments(_))));
    }
}
