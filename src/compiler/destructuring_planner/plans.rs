// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Core data structures produced by the destructuring planner.

use alloc::vec::Vec;
use core::fmt;

use crate::ast::Expr;
use crate::symbol::Symbol;

/// A single assignment: `target = value`.
#[derive(Debug, Clone)]
pub struct Binding {
    pub target: Symbol,
    pub value: Expr,
}

/// Ordered assignments. Later values may refer to earlier targets, so the
/// emitter must keep this order.
#[derive(Debug, Clone, Default)]
pub struct BindingPlan {
    bindings: Vec<Binding>,
}

impl BindingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, target: Symbol, value: Expr) {
        self.bindings.push(Binding { target, value });
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    pub fn as_slice(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn targets(&self) -> impl Iterator<Item = &Symbol> {
        self.bindings.iter().map(|b| &b.target)
    }
}

impl<'a> IntoIterator for &'a BindingPlan {
    type Item = &'a Binding;
    type IntoIter = core::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl fmt::Display for BindingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.bindings {
            writeln!(f, "{binding}")?;
        }
        Ok(())
    }
}
