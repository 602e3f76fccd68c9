pub mod error;
pub mod types;
pub mod ast;
pub mod parser;
pub mod infer;

pub use error::{InferError, InferResult};
pub use types::{Context, Type};
pub use ast::Expr;
pub use parser::{MAX_NESTING, parse_context, parse_expr, parse_type};
pub use infer::{infer, infer_type};
