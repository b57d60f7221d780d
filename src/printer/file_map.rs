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
use std::io::Write;

use crate::IdentifierAssignment;

type E = Box<dyn std::error::Error>;

/// Format a single line of a mapping file
///
/// Writes the new identifier, the original description, and the taxonomic
/// id of `aln` separated by tabs.
///
pub fn format_file_map_line<W: Write>(
    aln: &IdentifierAssignment,
    conn: &mut W,
) -> Result<(), E> {
    let separator: char = '\t';
    let mut formatted: String = String::new();

    formatted += &aln.new_id;
    formatted.push(separator);
    formatted += &aln.original_description;
    formatted.push(separator);
    formatted += &aln.taxid;
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_file_map_line() {
        use super::format_file_map_line;
        use crate::IdentifierAssignment;

        let data = IdentifierAssignment{ new_id: "SP001".to_string(), original_description: "NZ_CP009072.1 Escherichia coli ATCC 25922".to_string(), taxid: "562".to_string() };

        let expected: Vec<u8> = b"SP001\tNZ_CP009072.1 Escherichia coli ATCC 25922\t562\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_file_map_line(&data, &mut got).unwrap();

        assert_eq!(got, expected)
    }

    #[test]
    fn format_file_map_line_empty_taxid() {
        use super::format_file_map_line;
        use crate::IdentifierAssignment;

        let data = IdentifierAssignment{ new_id: "KEY01".to_string(), original_description: "seq A".to_string(), taxid: String::new() };

        let mut got: Vec<u8> = Vec::new();
        format_file_map_line(&data, &mut got).unwrap();

        assert_eq!(got, b"KEY01\tseq A\t\n".to_vec())
    }
}
