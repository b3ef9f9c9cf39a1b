// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Errors raised while reading VLQ text or mappings strings.
///
/// Encoding never fails; these only come from decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceMapError {
    #[error("invalid base64 digit {digit:?} at offset {offset}")]
    InvalidDigit { digit: char, offset: usize },

    #[error("VLQ value truncated at end of input")]
    Truncated,

    #[error("VLQ value at offset {offset} does not fit in 64 bits")]
    Overflow { offset: usize },

    #[error("segment {segment:?} on generated line {line} has {fields} fields, expected 1, 4 or 5")]
    SegmentArity {
        segment: alloc::string::String,
        line: usize,
        fields: usize,
    },

    #[error("segment on generated line {line} resolves to a position outside the u32 range")]
    PositionOutOfRange { line: usize },

    #[error("running position on generated line {line} overflows")]
    PositionOverflow { line: usize },

    #[error("invalid source map: {0}")]
    Json(alloc::string::String),
}

pub type Result<T> = core::result::Result<T, SourceMapError>;
