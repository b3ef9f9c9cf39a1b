// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Context trait shared across planner submodules.

use crate::source::Span;
use crate::symbol::Symbol;

/// What the planner needs from the surrounding compilation session.
pub trait PlanningContext {
    /// Allocate a symbol that is unique within the session, located at `span`.
    fn fresh_symbol(&self, span: Option<&Span>) -> Symbol;

    /// Whether `symbol` is the wildcard that discards its value.
    fn is_wildcard(&self, symbol: &Symbol) -> bool;

    /// Whether `symbol` is the marker introducing a sequence pattern's tail.
    fn is_rest_marker(&self, symbol: &Symbol) -> bool;

    /// Spelling of the rest marker, for diagnostics.
    fn rest_marker(&self) -> &str;
}
