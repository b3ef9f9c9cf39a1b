// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Base64 variable-length quantities.
//!
//! Each digit carries five value bits and a continuation bit (0x20). The sign
//! lives in the lowest bit of the first digit of each value.

use alloc::string::String;
use alloc::vec::Vec;

use crate::sourcemap::{Result, SourceMapError};

const BASE64_DIGITS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const VLQ_BASE_SHIFT: u32 = 5;
const VLQ_BASE: u64 = 1 << VLQ_BASE_SHIFT;
const VLQ_BASE_MASK: u64 = VLQ_BASE - 1;
const VLQ_CONTINUATION_BIT: u64 = VLQ_BASE;

fn digit_value(byte: u8) -> Option<u64> {
    let v = match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a' + 26,
        b'0'..=b'9' => byte - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => return None,
    };
    Some(u64::from(v))
}

/// Append the VLQ encoding of `value` to `out`.
///
/// Magnitudes are folded into 63 bits; values outside `±(2^62 - 1)` do not
/// round-trip.
pub fn encode_integer(value: i64, out: &mut String) {
    let mut vlq = if value < 0 {
        (value.unsigned_abs() << 1) | 1
    } else {
        (value as u64) << 1
    };

    loop {
        let mut digit = vlq & VLQ_BASE_MASK;
        vlq >>= VLQ_BASE_SHIFT;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION_BIT;
        }
        out.push(char::from(BASE64_DIGITS[digit as usize]));
        if vlq == 0 {
            break;
        }
    }
}

/// Encode each value in turn, with no separator between them.
pub fn encode_integers(values: &[i64]) -> String {
    let mut out = String::with_capacity(values.len() * 2);
    for &value in values {
        encode_integer(value, &mut out);
    }
    out
}

/// Decode a run of concatenated VLQ values.
pub fn decode_integers(text: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    let mut accumulated = 0u64;
    let mut shift = 0u32;
    let mut value_start = 0usize;

    for (offset, byte) in text.bytes().enumerate() {
        let digit = digit_value(byte).ok_or_else(|| SourceMapError::InvalidDigit {
            digit: char::from(byte),
            offset,
        })?;
        if shift == 0 {
            value_start = offset;
        }

        let bits = digit & VLQ_BASE_MASK;
        if shift >= u64::BITS || (shift > u64::BITS - VLQ_BASE_SHIFT && bits >> (u64::BITS - shift) != 0)
        {
            return Err(SourceMapError::Overflow {
                offset: value_start,
            });
        }
        accumulated |= bits << shift;

        if digit & VLQ_CONTINUATION_BIT != 0 {
            shift += VLQ_BASE_SHIFT;
            continue;
        }

        let magnitude = (accumulated >> 1) as i64;
        values.push(if accumulated & 1 == 1 {
            -magnitude
        } else {
            magnitude
        });
        accumulated = 0;
        shift = 0;
    }

    if shift != 0 {
        return Err(SourceMapError::Truncated);
    }
    Ok(values)
}
