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
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // Assign fixed-width identifiers to sequence records
    Rename {
        // Input fasta or fastq file, renames a single file
        #[arg(group = "input", required = false, help = "Input file")]
        input_file: Option<PathBuf>,

        // Manifest table, renames all files matching `pattern`
        #[arg(short = 'm', long = "manifest", required = false)]
        manifest: Option<PathBuf>,

        // Glob pattern for batch mode input files
        #[arg(short = 'e', long = "extension", required = false, help = "Input file pattern [default: *.fasta]")]
        pattern: Option<String>,

        // Identifier prefix
        #[arg(short = 'k', long = "key", required = false, help = "Identifier key [default: KEY]")]
        key: Option<String>,

        // Taxonomic id written to the mapping file
        #[arg(short = 't', long = "taxid", required = false)]
        taxid: Option<String>,

        // Identifier width, 0 fits the number of records
        #[arg(short = 'l', long = "width", default_value_t = 0)]
        width: usize,

        // Output name, or manifest column holding output names
        #[arg(short = 'n', long = "name", required = false)]
        name: Option<String>,

        // Output directory
        #[arg(short = 'o', long = "out-dir", required = false)]
        out_dir: Option<PathBuf>,

        // Renamed file suffix: rnmd or renamed
        #[arg(long = "suffix", default_value = "rnmd")]
        suffix: String,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },

    // Restore original names from a renamed file and its mapping file
    Restore {
        // Renamed sequence file
        #[arg(group = "input", required = true, help = "Renamed file")]
        renamed_file: PathBuf,

        // Mapping file written by `rename`
        #[arg(required = true, help = "Mapping file")]
        file_map: PathBuf,

        // Output file path, defaults to stdout
        #[arg(short = 'o', long = "output", required = false)]
        out_file: Option<PathBuf>,

        // Verbosity
        #[arg(long = "verbose", default_value_t = false)]
        verbose: bool,
    },
}
