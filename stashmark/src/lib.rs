pub mod ast;
pub mod attrs;
pub mod compile;
pub mod emit;
pub mod error;
pub mod parse;

pub use ast::{AttrEntry, AttrValue, Node};
pub use attrs::{ACTION_KEY, BIND_KEY, EXPR_KEY, resolve_attrs};
pub use compile::{CompileOptions, Compiler, OutputFormat, compile};
pub use emit::{DirectiveForm, DirectiveInvocation, MarkedText, render_expression};
pub use error::CompileError;
pub use parse::parse_document;
