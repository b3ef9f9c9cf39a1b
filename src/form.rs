// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::source::Span;
use crate::symbol::Symbol;
use crate::value::Value;
use alloc::vec::Vec;

/// A datum as built by the reader, before analysis.
#[derive(Debug, Clone)]
pub enum Form {
    Symbol(Symbol),

    Literal {
        span: Option<Span>,
        value: Value,
    },

    /// `[a b c]`
    Tuple {
        span: Option<Span>,
        items: Vec<Form>,
    },

    /// `{k1 v1 k2 v2}`, entries in source order.
    Table {
        span: Option<Span>,
        entries: Vec<(Form, Form)>,
    },

    /// `@[i1 v1 i2 v2]`, flat as read.
    Array {
        span: Option<Span>,
        items: Vec<Form>,
    },
}

impl Form {
    pub fn span(&self) -> Option<&Span> {
        match self {
            Form::Symbol(sym) => sym.span(),
            Form::Literal { span, .. }
            | Form::Tuple { span, .. }
            | Form::Table { span, .. }
            | Form::Array { span, .. } => span.as_ref(),
        }
    }

    /// Human readable name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Form::Symbol(_) => "symbol",
            Form::Literal { value, .. } => value.type_name(),
            Form::Tuple { .. } => "tuple",
            Form::Table { .. } => "table",
            Form::Array { .. } => "array",
        }
    }
}
