// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The `mappings` field: per-line groups separated by `;`, segments
//! separated by `,`, each segment four delta-encoded VLQ values.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::sourcemap::vlq;
use crate::sourcemap::{Result, SourceMapError};

/// One generated position and the original position it came from. 0-based.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Mapping {
    pub generated_line: u32,
    pub generated_column: u32,
    pub original_line: u32,
    pub original_column: u32,
}

impl Mapping {
    pub const fn new(
        generated_line: u32,
        generated_column: u32,
        original_line: u32,
        original_column: u32,
    ) -> Self {
        Self {
            generated_line,
            generated_column,
            original_line,
            original_column,
        }
    }
}

/// Encode `mappings`, which must be sorted by generated line then column.
///
/// Unsorted input is not rejected; it produces a string that decodes to
/// different positions. A mapping identical to the one just before it on the
/// same generated line is dropped.
pub fn encode_mappings(mappings: &[Mapping]) -> String {
    let mut prev_generated_line = 0u32;
    let mut prev_generated_column = 0i64;
    let mut prev_original_line = 0i64;
    let mut prev_original_column = 0i64;
    let mut previous: Option<&Mapping> = None;
    let mut result = String::new();

    for mapping in mappings {
        if mapping.generated_line > prev_generated_line {
            for _ in prev_generated_line..mapping.generated_line {
                result.push(';');
            }
            prev_generated_line = mapping.generated_line;
            prev_generated_column = 0;
        } else if let Some(previous) = previous {
            if previous == mapping {
                trace!("skipping duplicate mapping {mapping:?}");
                continue;
            }
            result.push(',');
        }

        vlq::encode_integer(
            i64::from(mapping.generated_column) - prev_generated_column,
            &mut result,
        );
        // Source index: always the single original source.
        vlq::encode_integer(0, &mut result);
        vlq::encode_integer(
            i64::from(mapping.original_line) - prev_original_line,
            &mut result,
        );
        vlq::encode_integer(
            i64::from(mapping.original_column) - prev_original_column,
            &mut result,
        );

        prev_generated_column = i64::from(mapping.generated_column);
        prev_original_line = i64::from(mapping.original_line);
        prev_original_column = i64::from(mapping.original_column);
        previous = Some(mapping);
    }

    debug!(
        "encoded {} mappings into {} bytes",
        mappings.len(),
        result.len()
    );
    result
}

fn to_position(value: i64, line: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| SourceMapError::PositionOutOfRange { line })
}

fn advance(running: &mut i64, delta: i64, line: usize) -> Result<()> {
    *running = running
        .checked_add(delta)
        .ok_or(SourceMapError::PositionOverflow { line })?;
    Ok(())
}

/// Decode a `mappings` string back into absolute positions.
///
/// Segments with a single field (generated column only) carry no original
/// position and are skipped; a fifth name-index field is ignored.
pub fn decode_mappings(text: &str) -> Result<Vec<Mapping>> {
    let mut mappings = Vec::new();
    let mut prev_source = 0i64;
    let mut prev_original_line = 0i64;
    let mut prev_original_column = 0i64;

    for (line, group) in text.split(';').enumerate() {
        let mut prev_generated_column = 0i64;
        for segment in group.split(',').filter(|s| !s.is_empty()) {
            let fields = vlq::decode_integers(segment)?;
            match fields.as_slice() {
                [column] => advance(&mut prev_generated_column, *column, line)?,
                [column, source, original_line, original_column]
                | [column, source, original_line, original_column, _] => {
                    advance(&mut prev_generated_column, *column, line)?;
                    advance(&mut prev_source, *source, line)?;
                    advance(&mut prev_original_line, *original_line, line)?;
                    advance(&mut prev_original_column, *original_column, line)?;
                    mappings.push(Mapping {
                        generated_line: to_position(line as i64, line)?,
                        generated_column: to_position(prev_generated_column, line)?,
                        original_line: to_position(prev_original_line, line)?,
                        original_column: to_position(prev_original_column, line)?,
                    });
                }
                _ => {
                    return Err(SourceMapError::SegmentArity {
                        segment: segment.to_string(),
                        line,
                        fields: fields.len(),
                    })
                }
            }
        }
    }

    if prev_source != 0 {
        trace!("mappings reference source index {prev_source}; only one source is tracked");
    }
    Ok(mappings)
}
