// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::Result;
use log::debug;

use crate::ast::Expr;
use crate::compiler::destructuring_planner::{
    create_binding_plan, create_binding_plan_from_forms, map_pattern_error, BindingPattern,
    BindingPlan, PlanningContext,
};
use crate::form::Form;
use crate::options::Options;
use crate::source::Span;
use crate::symbol::{GensymAllocator, Symbol};

/// State owned by one compilation run.
///
/// Generated names are unique within a session. Call [`Session::reset`]
/// between independent runs that must produce identical output.
#[derive(Debug)]
pub struct Session {
    options: Options,
    gensym: GensymAllocator,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_valid_options(Options::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: Options) -> Self {
        let gensym = GensymAllocator::with_prefix(&options.gensym_prefix);
        Self { options, gensym }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn gensym(&self) -> &GensymAllocator {
        &self.gensym
    }

    pub fn reset(&self) {
        debug!("resetting gensym counter after {} names", self.gensym.issued());
        self.gensym.reset();
    }

    /// Expand `(pattern, value)` pairs into one plan.
    pub fn destructure(&self, pairs: &[(BindingPattern, Expr)]) -> Result<BindingPlan> {
        create_binding_plan(pairs, self).map_err(map_pattern_error)
    }

    /// Expand binding forms as read, e.g. the binding vector of a `let`.
    pub fn destructure_forms(&self, pairs: &[(Form, Expr)]) -> Result<BindingPlan> {
        create_binding_plan_from_forms(pairs, self).map_err(map_pattern_error)
    }

    pub fn lower_pattern(&self, form: &Form) -> Result<BindingPattern> {
        BindingPattern::from_form(form, self).map_err(map_pattern_error)
    }
}

impl PlanningContext for Session {
    fn fresh_symbol(&self, span: Option<&Span>) -> Symbol {
        self.gensym.gen(None, span)
    }

    fn is_wildcard(&self, symbol: &Symbol) -> bool {
        symbol.is(&self.options.wildcard)
    }

    fn is_rest_marker(&self, symbol: &Symbol) -> bool {
        symbol.is(&self.options.rest_marker)
    }

    fn rest_marker(&self) -> &str {
        &self.options.rest_marker
    }
}
