// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::source::Span;
use crate::symbol::Symbol;
use crate::value::Value;
use alloc::vec::Vec;
use core::fmt;

/// Expression nodes handed to the emitter.
///
/// `Symbol`, `Literal` and `Call` are produced by the analyzer. The accessor
/// forms are produced by binding-pattern expansion; their runtime behaviour
/// belongs to the runtime library.
#[derive(Debug, Clone)]
pub enum Expr {
    Symbol(Symbol),

    Literal {
        span: Option<Span>,
        value: Value,
    },

    Call {
        span: Option<Span>,
        callee: Symbol,
        args: Vec<Expr>,
    },

    /// First element of a sequence.
    FirstOf { span: Option<Span>, seq: Symbol },

    /// The sequence without its first element.
    RestOf { span: Option<Span>, seq: Symbol },

    KeyedAccess {
        span: Option<Span>,
        target: Symbol,
        key: Value,
    },

    IndexedAccess {
        span: Option<Span>,
        target: Symbol,
        index: usize,
    },
}

impl Expr {
    pub fn literal(value: Value) -> Self {
        Expr::Literal { span: None, value }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            Expr::Symbol(sym) => sym.span(),
            Expr::Literal { span, .. }
            | Expr::Call { span, .. }
            | Expr::FirstOf { span, .. }
            | Expr::RestOf { span, .. }
            | Expr::KeyedAccess { span, .. }
            | Expr::IndexedAccess { span, .. } => span.as_ref(),
        }
    }
}

impl From<Symbol> for Expr {
    fn from(sym: Symbol) -> Self {
        Expr::Symbol(sym)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::literal(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(sym) => write!(f, "{sym}"),
            Expr::Literal { value, .. } => write!(f, "{value}"),
            Expr::Call { callee, args, .. } => {
                write!(f, "({callee}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            Expr::FirstOf { seq, .. } => write!(f, "(first-of {seq})"),
            Expr::RestOf { seq, .. } => write!(f, "(rest-of {seq})"),
            Expr::KeyedAccess { target, key, .. } => write!(f, "(keyed-access {target} {key})"),
            Expr::IndexedAccess { target, index, .. } => {
                write!(f, "(indexed-access {target} {index})")
            }
        }
    }
}
