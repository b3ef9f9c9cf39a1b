// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Destructuring and binding planner.
//!
//! Binding patterns are expanded into a flat [`BindingPlan`]: an ordered list
//! of simple assignments that the emitter writes out one per statement.

pub mod context;
pub mod destructuring;
pub mod error;
pub mod pattern;
pub mod plans;

pub use context::PlanningContext;
pub use destructuring::{create_binding_plan, create_binding_plan_from_forms};
pub use error::{map_pattern_error, PatternError, Result};
pub use pattern::{BindingPattern, SequenceElement};
pub use plans::{Binding, BindingPlan};
