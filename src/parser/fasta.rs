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

use bstr::ByteSlice;
use needletail::errors::ParseErrorKind;

use crate::SequenceRecord;

type E = Box<dyn std::error::Error>;

/// Consume whitespace, including blank lines, at the start of `conn`.
fn skip_leading_whitespace<R: BufRead>(
    conn: &mut R,
) -> Result<(), E> {
    loop {
        let buf = conn.fill_buf()?;
        if buf.is_empty() {
            return Ok(())
        }
        let n_blank = buf.iter().take_while(|x| x.is_ascii_whitespace()).count();
        let reached_data = n_blank < buf.len();
        conn.consume(n_blank);
        if reached_data {
            return Ok(())
        }
    }
}

/// Read all records from fasta or fastq data
///
/// Returns the records in the order they appear in `conn`. The description
/// is the full header line and the sequence has line breaks removed.
///
/// Blank lines before the first record are skipped. Empty input yields no
/// records.
///
pub fn read_records<R: Read + Send>(
    conn: R,
) -> Result<Vec<SequenceRecord>, E> {
    let mut conn = BufReader::new(conn);
    skip_leading_whitespace(&mut conn)?;

    let mut reader = match needletail::parse_fastx_reader(conn) {
        Ok(reader) => reader,
        Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => return Ok(Vec::new()),
        Err(e) => return Err(Box::new(e)),
    };

    let mut records: Vec<SequenceRecord> = Vec::new();
    while let Some(record) = reader.next() {
        let record = record?;
        records.push(SequenceRecord{
            description: record.id().to_str_lossy().into_owned(),
            sequence: record.seq().into_owned(),
        });
    }

    log::debug!("Read {} records", records.len());
    Ok(records)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_multiline_fasta() {
        use super::read_records;
        use crate::SequenceRecord;

        let data: Vec<u8> = b">seq A description\nACGT\nAC\n>seq B\nTTTT\n".to_vec();

        let got = read_records(data.as_slice()).unwrap();
        let expected = vec![
            SequenceRecord{ description: "seq A description".to_string(), sequence: b"ACGTAC".to_vec() },
            SequenceRecord{ description: "seq B".to_string(), sequence: b"TTTT".to_vec() },
        ];

        assert_eq!(got, expected);
    }

    #[test]
    fn read_empty_input() {
        use super::read_records;

        let data: Vec<u8> = Vec::new();
        let got = read_records(data.as_slice()).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn read_fasta_with_leading_blank_lines() {
        use super::read_records;
        use crate::SequenceRecord;

        let data: Vec<u8> = b"\n\r\n  \n>seq A\nACGT\n>seq B\nTT\n".to_vec();

        let got = read_records(data.as_slice()).unwrap();
        let expected = vec![
            SequenceRecord{ description: "seq A".to_string(), sequence: b"ACGT".to_vec() },
            SequenceRecord{ description: "seq B".to_string(), sequence: b"TT".to_vec() },
        ];

        assert_eq!(got, expected);
    }

    #[test]
    fn read_whitespace_only_input() {
        use super::read_records;

        let data: Vec<u8> = b"\n\n\n".to_vec();
        let got = read_records(data.as_slice()).unwrap();

        assert!(got.is_empty());
    }

    #[test]
    fn read_invalid_input() {
        use super::read_records;

        let data: Vec<u8> = b"not a sequence file\n".to_vec();
        let got = read_records(data.as_slice());

        assert!(got.is_err());
    }
}
