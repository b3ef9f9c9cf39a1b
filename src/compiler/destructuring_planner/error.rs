// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(clippy::pattern_type_mismatch)]

//! Error definitions for the destructuring planner.

use alloc::format;
use alloc::string::{String, ToString};
use anyhow::{anyhow, Error};

use crate::source::Span;

/// Errors produced while lowering or expanding binding patterns.
#[derive(thiserror::Error, Debug)]
pub enum PatternError {
    /// The pattern is not a symbol, tuple, table or array of the expected shape.
    #[error("can not destructure {kind}")]
    UnsupportedPattern { kind: String, span: Option<Span> },

    /// A sequence pattern has more than one binding after its rest marker.
    #[error("unsupported binding form, only one binding can follow the `{marker}` marker")]
    MalformedRest { marker: String, span: Option<Span> },
}

/// Result alias used throughout the destructuring planner.
pub type Result<T> = core::result::Result<T, PatternError>;

impl PatternError {
    pub(crate) fn unsupported(kind: &str, span: Option<&Span>) -> Self {
        PatternError::UnsupportedPattern {
            kind: kind.to_string(),
            span: span.cloned(),
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            PatternError::UnsupportedPattern { span, .. }
            | PatternError::MalformedRest { span, .. } => span.as_ref(),
        }
    }

    /// The error message, rendered against its source line when the span is known.
    pub fn to_span_message(&self) -> String {
        let msg = format!("{self}");
        match self.span() {
            Some(span) => span.message("error", &msg),
            None => msg,
        }
    }
}

/// Convert planner errors into diagnostic-rich anyhow errors for compiler callers.
pub fn map_pattern_error(err: PatternError) -> Error {
    let msg = format!("{err}");
    match err.span() {
        Some(span) => span.error(&msg),
        None => anyhow!(msg),
    }
}
