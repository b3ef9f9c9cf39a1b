// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "arc")]
pub use alloc::sync::Arc as Rc;
#[cfg(not(feature = "arc"))]
pub use alloc::rc::Rc;

mod ast;
pub mod compiler;
mod form;
mod options;
mod session;
mod source;
pub mod sourcemap;
mod symbol;
mod value;

pub use ast::Expr;
pub use compiler::destructuring_planner::{
    Binding, BindingPattern, BindingPlan, PatternError, SequenceElement,
};
pub use form::Form;
pub use options::Options;
pub use session::Session;
pub use source::{Source, Span};
pub use sourcemap::{Mapping, SourceMap, SourceMapBuilder};
pub use symbol::{GensymAllocator, Symbol, DEFAULT_GENSYM_PREFIX};
pub use value::Value;
