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
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use clap::Parser;

use seqrenamer::config::RunArgs;
use seqrenamer::config::RunConfig;
use seqrenamer::printer::OutputSuffix;

mod cli;

type E = Box<dyn std::error::Error>;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

fn rename(
    args: RunArgs,
) -> Result<(), E> {
    let config = RunConfig::from_args(args)?;
    let summaries = seqrenamer::rename::run(&config)?;
    summaries.iter().for_each(|summary| {
        println!("{}", summary.report());
    });
    Ok(())
}

fn restore(
    renamed_file: &std::path::Path,
    file_map: &std::path::Path,
    out_file: Option<&std::path::Path>,
) -> Result<(), E> {
    let renamed_in = File::open(renamed_file)?;
    let map_in = File::open(file_map)?;
    let n_records = if let Some(path) = out_file {
        let mut conn_out = BufWriter::new(File::create(path)?);
        seqrenamer::restore_from_read_to_write(renamed_in, map_in, &mut conn_out)?
    } else {
        let mut conn_out = BufWriter::new(std::io::stdout().lock());
        seqrenamer::restore_from_read_to_write(renamed_in, map_in, &mut conn_out)?
    };
    log::info!("Restored {} records", n_records);
    Ok(())
}

fn main() {
    let cli = cli::Cli::parse();
    let start_time = Instant::now();

    // Subcommands:
    let res = match &cli.command {
        // Rename
        Some(cli::Commands::Rename {
            input_file,
            manifest,
            pattern,
            key,
            taxid,
            width,
            name,
            out_dir,
            suffix,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            suffix.parse::<OutputSuffix>().map_err(E::from).and_then(|suffix| {
                rename(RunArgs{
                    input: input_file.clone(),
                    key: key.clone(),
                    taxid: taxid.clone(),
                    width: Some(*width),
                    manifest: manifest.clone(),
                    pattern: pattern.clone(),
                    name: name.clone(),
                    out_dir: out_dir.clone(),
                    suffix,
                })
            })
        },

        // Restore
        Some(cli::Commands::Restore {
            renamed_file,
            file_map,
            out_file,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });
            restore(renamed_file, file_map, out_file.as_deref())
        },
        None => {
            init_log(1);
            Err(E::from("no subcommand given, see --help"))
        },
    };

    if let Err(e) = res {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!("Execution successful: {:?}", start_time.elapsed());
}
