//! Source emitters
//!
//! Turn syntax trees back into script source text.

mod ecma;

pub use ecma::{render, render_at, EcmaVisitor};
