//! # Pagekit HTML compiler
//!
//! Turns the evaluator's virtual DOM into markup: single nodes for previews
//! and fragments, or complete page documents with the client runtime.

mod compiler;

pub use compiler::{compile_node, compile_nodes, compile_page, escape_attr, escape_text, CompileError, CompileOptions};
