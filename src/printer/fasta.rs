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

type E = Box<dyn std::error::Error>;

/// Format a single record in fasta format
///
/// Writes the record marker and `name` on the header line followed by
/// `seq` on a single line.
///
pub fn format_fasta_record<W: Write>(
    name: &str,
    seq: &[u8],
    conn: &mut W,
) -> Result<(), E> {
    let mut formatted: Vec<u8> = Vec::with_capacity(name.len() + seq.len() + 3);
    formatted.push(b'>');
    formatted.extend_from_slice(name.as_bytes());
    formatted.push(b'\n');
    formatted.extend_from_slice(seq);
    formatted.push(b'\n');

    conn.write_all(&formatted)?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_fasta_record() {
        use super::format_fasta_record;

        let expected: Vec<u8> = b">SP001\nACGTACGTACGT\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_fasta_record("SP001", b"ACGTACGTACGT", &mut got).unwrap();

        assert_eq!(got, expected)
    }

    #[test]
    fn format_fasta_record_empty_sequence() {
        use super::format_fasta_record;

        let mut got: Vec<u8> = Vec::new();
        format_fasta_record("SP001", b"", &mut got).unwrap();

        assert_eq!(got, b">SP001\n\n".to_vec())
    }
}
