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
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use crate::IdentifierAssignment;
use crate::RenameError;

type E = Box<dyn std::error::Error>;

/// Parse a line from a mapping file
///
/// The first field is the new identifier and the last field is the
/// taxonomic id. Everything in between is the original description, which
/// may itself contain tabs. A line with two fields has an empty taxonomic
/// id.
///
/// Returns None if the line has fewer than two fields.
///
pub fn read_file_map_line(
    line: &str,
) -> Option<IdentifierAssignment> {
    let separator: char = '\t';
    let (new_id, rest) = line.split_once(separator)?;
    let (original_description, taxid) = rest.rsplit_once(separator).unwrap_or((rest, ""));

    Some(IdentifierAssignment{
        new_id: new_id.to_string(),
        original_description: original_description.to_string(),
        taxid: taxid.to_string(),
    })
}

/// Read all lines from a mapping file.
///
/// Empty lines are skipped.
///
/// Terminates with [RenameError::MalformedFileMap] on the first line that
/// cannot be parsed.
///
pub fn read_file_map<R: Read>(
    conn: R,
) -> Result<Vec<IdentifierAssignment>, E> {
    let reader = BufReader::new(conn);
    let mut res: Vec<IdentifierAssignment> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue
        }
        let record = read_file_map_line(line).ok_or(RenameError::MalformedFileMap{ line: idx + 1 })?;
        res.push(record);
    }
    Ok(res)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_file_map_line() {
        use super::read_file_map_line;
        use crate::IdentifierAssignment;

        let got = read_file_map_line("SP001\tseq A\t562").unwrap();
        let expected = IdentifierAssignment{ new_id: "SP001".to_string(), original_description: "seq A".to_string(), taxid: "562".to_string() };

        assert_eq!(got, expected);
    }

    #[test]
    fn read_file_map_line_tab_in_description() {
        use super::read_file_map_line;

        let got = read_file_map_line("SP001\tseq\tA\t562").unwrap();

        assert_eq!(got.original_description, "seq\tA");
        assert_eq!(got.taxid, "562");
    }

    #[test]
    fn read_file_map_line_no_taxid() {
        use super::read_file_map_line;

        let got = read_file_map_line("SP001\tseq A").unwrap();

        assert_eq!(got.original_description, "seq A");
        assert_eq!(got.taxid, "");
    }

    #[test]
    fn read_file_map_malformed() {
        use super::read_file_map;
        use crate::RenameError;

        let data: Vec<u8> = b"SP001\tseq A\t562\nSP002\n".to_vec();
        let got = read_file_map(data.as_slice()).unwrap_err();

        assert_eq!(got.downcast_ref::<RenameError>(), Some(&RenameError::MalformedFileMap{ line: 2 }));
    }

    #[test]
    fn read_file_map_skips_blank_lines() {
        use super::read_file_map;

        let data: Vec<u8> = b"SP001\tseq A\t562\r\n\nSP002\tseq B\t562\n".to_vec();
        let got = read_file_map(data.as_slice()).unwrap();

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].taxid, "562");
        assert_eq!(got[1].new_id, "SP002");
    }
}
