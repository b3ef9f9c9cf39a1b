// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::pattern_type_mismatch)]

//! Expansion of binding patterns into flat binding plans.

use alloc::string::ToString;
use log::{debug, trace};

use crate::ast::Expr;
use crate::compiler::destructuring_planner::{
    BindingPattern, BindingPlan, PatternError, PlanningContext, Result, SequenceElement,
};
use crate::form::Form;
use crate::source::Span;
use crate::symbol::Symbol;
use crate::value::Value;

/// Position of the sequence walk relative to the rest marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestState {
    /// Elements bind successive heads of the cursor.
    BeforeRest,
    /// The marker was seen; the next element binds the remaining tail.
    AtRestTarget,
    /// The tail has been bound; nothing may follow.
    Done,
}

/// Expand `(pattern, value)` pairs, in order, into one binding plan.
pub fn create_binding_plan<C: PlanningContext>(
    pairs: &[(BindingPattern, Expr)],
    context: &C,
) -> Result<BindingPlan> {
    let mut planner = Planner {
        context,
        plan: BindingPlan::new(),
    };
    for (pattern, value) in pairs {
        debug!("destructuring {pattern:?} against {value}");
        planner.destructure(pattern, value.clone())?;
    }
    Ok(planner.plan)
}

/// Lower reader forms to patterns, then expand them.
pub fn create_binding_plan_from_forms<C: PlanningContext>(
    pairs: &[(Form, Expr)],
    context: &C,
) -> Result<BindingPlan> {
    let mut planner = Planner {
        context,
        plan: BindingPlan::new(),
    };
    for (form, value) in pairs {
        let pattern = BindingPattern::from_form(form, context)?;
        debug!("destructuring {pattern:?} against {value}");
        planner.destructure(&pattern, value.clone())?;
    }
    Ok(planner.plan)
}

struct Planner<'a, C: PlanningContext> {
    context: &'a C,
    plan: BindingPlan,
}

impl<C: PlanningContext> Planner<'_, C> {
    fn bind(&mut self, target: Symbol, value: Expr) {
        trace!("  {target} = {value}");
        self.plan.push(target, value);
    }

    fn bind_fresh(&mut self, span: Option<&Span>, value: Expr) -> Symbol {
        let target = self.context.fresh_symbol(span);
        self.bind(target.clone(), value);
        target
    }

    fn destructure(&mut self, pattern: &BindingPattern, value: Expr) -> Result<()> {
        match pattern {
            BindingPattern::Symbol(sym) => {
                self.destructure_symbol(sym, value);
                Ok(())
            }
            BindingPattern::Sequence { span, elements } => {
                self.destructure_sequence(span.as_ref(), elements, value)
            }
            BindingPattern::Map { span, entries } => {
                self.destructure_map(span.as_ref(), entries, value)
            }
            BindingPattern::Indexed { span, entries } => {
                self.destructure_indexed(span.as_ref(), entries, value)
            }
        }
    }

    fn destructure_symbol(&mut self, sym: &Symbol, value: Expr) {
        if self.context.is_wildcard(sym) {
            // Still evaluated, for its side effects.
            self.bind_fresh(sym.span(), value);
        } else {
            self.bind(sym.clone(), value);
        }
    }

    fn destructure_sequence(
        &mut self,
        span: Option<&Span>,
        elements: &[SequenceElement],
        value: Expr,
    ) -> Result<()> {
        let mut cursor = self.bind_fresh(span, value);
        let mut state = RestState::BeforeRest;

        for element in elements {
            state = match (state, element) {
                (RestState::BeforeRest, SequenceElement::Rest(_)) => RestState::AtRestTarget,
                (RestState::BeforeRest, SequenceElement::Pattern(pattern)) => {
                    let at = pattern.span().or(span);
                    let first = self.bind_fresh(
                        at,
                        Expr::FirstOf {
                            span: at.cloned(),
                            seq: cursor.clone(),
                        },
                    );
                    cursor = self.bind_fresh(
                        at,
                        Expr::RestOf {
                            span: at.cloned(),
                            seq: cursor.clone(),
                        },
                    );
                    self.destructure(pattern, Expr::Symbol(first))?;
                    RestState::BeforeRest
                }
                (RestState::AtRestTarget, SequenceElement::Pattern(pattern)) => {
                    self.destructure(pattern, Expr::Symbol(cursor.clone()))?;
                    RestState::Done
                }
                (RestState::AtRestTarget, SequenceElement::Rest(_)) | (RestState::Done, _) => {
                    return Err(PatternError::MalformedRest {
                        marker: self.context.rest_marker().to_string(),
                        span: span.cloned(),
                    });
                }
            };
        }

        Ok(())
    }

    fn destructure_map(
        &mut self,
        span: Option<&Span>,
        entries: &[(Value, BindingPattern)],
        value: Expr,
    ) -> Result<()> {
        let whole = self.bind_fresh(span, value);
        for (key, pattern) in entries {
            let access = self.bind_fresh(
                span,
                Expr::KeyedAccess {
                    span: span.cloned(),
                    target: whole.clone(),
                    key: key.clone(),
                },
            );
            self.destructure(pattern, Expr::Symbol(access))?;
        }
        Ok(())
    }

    fn destructure_indexed(
        &mut self,
        span: Option<&Span>,
        entries: &[(usize, BindingPattern)],
        value: Expr,
    ) -> Result<()> {
        let whole = self.bind_fresh(span, value);
        for (index, pattern) in entries {
            let access = self.bind_fresh(
                span,
                Expr::IndexedAccess {
                    span: span.cloned(),
                    target: whole.clone(),
                    index: *index,
                },
            );
            self.destructure(pattern, Expr::Symbol(access))?;
        }
        Ok(())
    }
}
