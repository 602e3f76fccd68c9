use crate::ast::Expr;
use crate::error::{InferError, InferResult};
use crate::parser::{parse_context, parse_expr};
use crate::types::{Context, Type};

/// Infer the type of a parsed expression under a context of declarations.
pub fn infer(expr: &Expr, context: &Context) -> InferResult<Type> {
    match expr {
        Expr::Single(name) => context
            .get(name)
            .cloned()
            .ok_or_else(|| InferError::UnboundVariable { name: name.clone() }),
        Expr::Multi(terms) => {
            let (first, rest) = terms.split_first().ok_or(InferError::EmptyExpression)?;
            // A one-element chain is just grouping; with more elements the
            // first term is applied to each argument left to right.
            let mut acc = infer(first, context)?;
            for term in rest {
                let arg = infer(term, context)?;
                acc = apply(acc, arg)?;
            }
            Ok(acc)
        }
    }
}

fn apply(function: Type, arg: Type) -> InferResult<Type> {
    match function {
        Type::Func(from, to) => {
            if *from == arg {
                Ok(*to)
            } else {
                Err(InferError::TypeMismatch { expected: *from, found: arg })
            }
        }
        ty => Err(InferError::NotAFunction { ty }),
    }
}

/// Infer the type of `expression` under the declarations in `context` and
/// render it canonically.
///
/// ```
/// let ty = littletyper::infer_type("f : A -> B\nx : A", "f x").unwrap();
/// assert_eq!(ty, "B");
/// ```
pub fn infer_type(context: &str, expression: &str) -> InferResult<String> {
    let expr = parse_expr(expression)?;
    let context = parse_context(context)?;
    Ok(infer(&expr, &context)?.to_string())
}
