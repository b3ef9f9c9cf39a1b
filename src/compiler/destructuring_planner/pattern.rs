// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::pattern_type_mismatch)]

//! Binding patterns and their lowering from reader forms.

use alloc::vec::Vec;

use crate::compiler::destructuring_planner::{PatternError, PlanningContext, Result};
use crate::form::Form;
use crate::source::Span;
use crate::symbol::Symbol;
use crate::value::Value;

/// The shapes a binding position may take.
#[derive(Debug, Clone)]
pub enum BindingPattern {
    /// Bind the whole value to a name, or discard it if the name is the wildcard.
    Symbol(Symbol),

    /// Positional destructuring, optionally capturing the tail after a rest marker.
    Sequence {
        span: Option<Span>,
        elements: Vec<SequenceElement>,
    },

    /// Keyed destructuring, entries in declaration order.
    Map {
        span: Option<Span>,
        entries: Vec<(Value, BindingPattern)>,
    },

    /// Destructuring by explicit index, entries in declaration order.
    Indexed {
        span: Option<Span>,
        entries: Vec<(usize, BindingPattern)>,
    },
}

/// One position of a sequence pattern.
#[derive(Debug, Clone)]
pub enum SequenceElement {
    Pattern(BindingPattern),
    Rest(Option<Span>),
}

impl BindingPattern {
    pub fn span(&self) -> Option<&Span> {
        match self {
            BindingPattern::Symbol(sym) => sym.span(),
            BindingPattern::Sequence { span, .. }
            | BindingPattern::Map { span, .. }
            | BindingPattern::Indexed { span, .. } => span.as_ref(),
        }
    }

    pub fn has_rest(&self) -> bool {
        match self {
            BindingPattern::Sequence { elements, .. } => elements
                .iter()
                .any(|e| matches!(e, SequenceElement::Rest(_))),
            _ => false,
        }
    }

    /// Lower a reader form into a pattern.
    pub fn from_form<C: PlanningContext>(form: &Form, context: &C) -> Result<Self> {
        match form {
            Form::Symbol(sym) => Ok(BindingPattern::Symbol(sym.clone())),

            Form::Tuple { span, items } => {
                let mut elements = Vec::with_capacity(items.len());
                for item in items {
                    let element = match item {
                        Form::Symbol(sym) if context.is_rest_marker(sym) => {
                            SequenceElement::Rest(sym.span().cloned())
                        }
                        _ => SequenceElement::Pattern(Self::from_form(item, context)?),
                    };
                    elements.push(element);
                }
                Ok(BindingPattern::Sequence {
                    span: span.clone(),
                    elements,
                })
            }

            Form::Table { span, entries } => {
                let mut lowered = Vec::with_capacity(entries.len());
                for (key, binding) in entries {
                    let key = match key {
                        Form::Literal { value, .. } => value.clone(),
                        _ => {
                            return Err(PatternError::unsupported(
                                "table with non-literal key",
                                key.span().or(span.as_ref()),
                            ))
                        }
                    };
                    lowered.push((key, Self::from_form(binding, context)?));
                }
                Ok(BindingPattern::Map {
                    span: span.clone(),
                    entries: lowered,
                })
            }

            Form::Array { span, items } => {
                if items.len() % 2 != 0 {
                    return Err(PatternError::unsupported(
                        "array with unpaired index",
                        span.as_ref(),
                    ));
                }
                let mut entries = Vec::with_capacity(items.len() / 2);
                for pair in items.chunks(2) {
                    let (index_form, binding) = (&pair[0], &pair[1]);
                    let index = match index_form {
                        Form::Literal {
                            value: Value::Int(i),
                            ..
                        } => usize::try_from(*i).ok(),
                        _ => None,
                    }
                    .ok_or_else(|| {
                        PatternError::unsupported(
                            "array with non-index key",
                            index_form.span().or(span.as_ref()),
                        )
                    })?;
                    entries.push((index, Self::from_form(binding, context)?));
                }
                Ok(BindingPattern::Indexed {
                    span: span.clone(),
                    entries,
                })
            }

            Form::Literal { span, .. } => {
                Err(PatternError::unsupported(form.kind(), span.as_ref()))
            }
        }
    }

    fn collect_bound_symbols<C: PlanningContext>(&self, context: &C, symbols: &mut Vec<Symbol>) {
        match self {
            BindingPattern::Symbol(sym) => {
                if !context.is_wildcard(sym) {
                    symbols.push(sym.clone());
                }
            }
            BindingPattern::Sequence { elements, .. } => {
                for element in elements {
                    if let SequenceElement::Pattern(pattern) = element {
                        pattern.collect_bound_symbols(context, symbols);
                    }
                }
            }
            BindingPattern::Map { entries, .. } => {
                for (_, pattern) in entries {
                    pattern.collect_bound_symbols(context, symbols);
                }
            }
            BindingPattern::Indexed { entries, .. } => {
                for (_, pattern) in entries {
                    pattern.collect_bound_symbols(context, symbols);
                }
            }
        }
    }

    /// User-named symbols this pattern introduces, in declaration order.
    pub fn bound_symbols<C: PlanningContext>(&self, context: &C) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        self.collect_bound_symbols(context, &mut symbols);
        symbols
    }
}
