// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use sexpc::sourcemap::vlq::{decode_integers, encode_integer, encode_integers};
use sexpc::sourcemap::SourceMapError;

#[test]
fn known_encodings() {
    let cases: &[(i64, &str)] = &[
        (0, "A"),
        (1, "C"),
        (-1, "D"),
        (2, "E"),
        (15, "e"),
        (-15, "f"),
        (16, "gB"),
        (-16, "hB"),
        (511, "+f"),
        (512, "ggB"),
    ];
    for &(value, expected) in cases {
        let mut out = String::new();
        encode_integer(value, &mut out);
        assert_eq!(out, expected, "encoding {value}");
    }
}

#[test]
fn values_are_concatenated_without_separator() -> Result<()> {
    let values = [0, 16, -1, 1_000_000, -123_456_789];
    let text = encode_integers(&values);
    assert_eq!(text.split(|c| c == ',' || c == ';').count(), 1);
    assert_eq!(decode_integers(&text)?, values);
    Ok(())
}

#[test]
fn large_magnitudes_round_trip() -> Result<()> {
    let limit = (1i64 << 62) - 1;
    for value in [limit, -limit, i64::from(u32::MAX), -i64::from(u32::MAX)] {
        assert_eq!(decode_integers(&encode_integers(&[value]))?, [value]);
    }
    Ok(())
}

#[test]
fn decode_errors() {
    assert_eq!(decode_integers("g"), Err(SourceMapError::Truncated));
    assert_eq!(
        decode_integers("A!"),
        Err(SourceMapError::InvalidDigit {
            digit: '!',
            offset: 1
        })
    );
    assert_eq!(
        decode_integers("AA//////////////"),
        Err(SourceMapError::Overflow { offset: 2 })
    );
    assert_eq!(decode_integers(""), Ok(vec![]));
}
