// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Version 3 source maps for generated code.
//!
//! Only positions are tracked: every map describes one generated file and one
//! original source, so segments carry four fields and no name index.

pub mod document;
pub mod encoder;
pub mod error;
pub mod vlq;

pub use document::{SourceMap, SourceMapBuilder};
pub use encoder::{decode_mappings, encode_mappings, Mapping};
pub use error::{Result, SourceMapError};
