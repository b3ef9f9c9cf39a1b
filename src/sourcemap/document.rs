// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The JSON source map document wrapping an encoded `mappings` string.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::source::Span;
use crate::sourcemap::{decode_mappings, encode_mappings, Mapping, Result, SourceMapError};

pub const SOURCE_MAP_VERSION: u8 = 3;

/// A version 3 source map for one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u8,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SourceMapError::Json(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let map: SourceMap =
            serde_json::from_str(json).map_err(|e| SourceMapError::Json(e.to_string()))?;
        if map.version != SOURCE_MAP_VERSION {
            return Err(SourceMapError::Json(format!(
                "unsupported version {}",
                map.version
            )));
        }
        Ok(map)
    }

    /// The document as an inline `data:` URL, suitable for a
    /// `sourceMappingURL` comment.
    #[cfg(feature = "data-url")]
    pub fn to_data_url(&self) -> Result<String> {
        let json = self.to_json()?;
        Ok(format!(
            "data:application/json;charset=utf-8;base64,{}",
            data_encoding::BASE64.encode(json.as_bytes())
        ))
    }

    pub fn decoded_mappings(&self) -> Result<Vec<Mapping>> {
        decode_mappings(&self.mappings)
    }
}

/// Collects mappings for one generated file while it is being emitted.
#[derive(Debug, Clone)]
pub struct SourceMapBuilder {
    file: String,
    source: String,
    source_root: Option<String>,
    source_content: Option<String>,
    mappings: Vec<Mapping>,
}

impl SourceMapBuilder {
    /// `file` is the generated file, `source` the original it was compiled from.
    pub fn new(file: &str, source: &str) -> Self {
        Self {
            file: file.to_string(),
            source: source.to_string(),
            source_root: None,
            source_content: None,
            mappings: Vec::new(),
        }
    }

    pub fn source_root(mut self, root: &str) -> Self {
        self.source_root = Some(root.to_string());
        self
    }

    /// Embed the original text so tools need not fetch it.
    pub fn source_content(mut self, content: &str) -> Self {
        self.source_content = Some(content.to_string());
        self
    }

    pub fn add(&mut self, mapping: Mapping) {
        self.mappings.push(mapping);
    }

    /// Record that generated position (`line`, `column`), 0-based, came from
    /// the start of `span`.
    pub fn add_span(&mut self, line: u32, column: u32, span: &Span) {
        let (original_line, original_column) = span.zero_based_position();
        self.add(Mapping::new(line, column, original_line, original_column));
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn build(mut self) -> SourceMap {
        // Stable: mappings at the same generated position keep emission order.
        self.mappings
            .sort_by_key(|m| (m.generated_line, m.generated_column));
        SourceMap {
            version: SOURCE_MAP_VERSION,
            file: self.file,
            source_root: self.source_root,
            sources: alloc::vec![self.source],
            sources_content: self.source_content.map(|c| alloc::vec![Some(c)]),
            names: Vec::new(),
            mappings: encode_mappings(&self.mappings),
        }
    }
}
