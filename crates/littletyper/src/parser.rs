use crate::ast::Expr;
use crate::error::{InferError, InferResult};
use crate::types::{Context, Type};

/// Maximum parenthesis nesting accepted by both grammars. Deeper input fails
/// with `TooDeeplyNested` instead of exhausting the stack.
pub const MAX_NESTING: usize = 256;

/// Parse a type signature such as `A->B->C` or `(A->B)->C`.
///
/// The arrow is right-associative: `A->B->C` is `A->(B->C)`. Identifiers are
/// maximal runs of characters other than `(`, `)`, `-` and whitespace;
/// whitespace itself is skipped.
pub fn parse_type(text: &str) -> InferResult<Type> {
    let chars: Vec<char> = text.chars().collect();
    let (ty, _) = parse_type_at(&chars, 0, 0)?;
    Ok(ty)
}

fn parse_type_at(chars: &[char], start: usize, depth: usize) -> InferResult<(Type, usize)> {
    if depth > MAX_NESTING {
        return Err(InferError::TooDeeplyNested);
    }
    let mut parts: Vec<Type> = Vec::new();
    let mut current = String::new();
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            '(' => {
                let (ty, end) = parse_type_at(chars, i + 1, depth + 1)?;
                parts.push(ty);
                i = end + 1;
            }
            ')' => {
                flush_named(&mut parts, &mut current);
                return Ok((merge(parts)?, i));
            }
            '-' => {
                flush_named(&mut parts, &mut current);
                // '-' starts an arrow; the '>' after it is consumed unchecked
                i += 2;
            }
            c if c.is_whitespace() => {
                i += 1;
            }
            c => {
                current.push(c);
                i += 1;
            }
        }
    }
    flush_named(&mut parts, &mut current);
    Ok((merge(parts)?, chars.len().saturating_sub(1)))
}

fn flush_named(parts: &mut Vec<Type>, current: &mut String) {
    if !current.is_empty() {
        parts.push(Type::Named(std::mem::take(current)));
    }
}

// Right-associative fold: [A, B, C] becomes A->(B->C).
fn merge(mut parts: Vec<Type>) -> InferResult<Type> {
    let mut ty = parts.pop().ok_or(InferError::EmptyType)?;
    while let Some(from) = parts.pop() {
        ty = Type::func(from, ty);
    }
    Ok(ty)
}

/// Parse an application expression such as `append (pure x) y`.
///
/// Terms are separated by whitespace or parenthesis adjacency; the resulting
/// chain applies the first term to each following one in order.
pub fn parse_expr(text: &str) -> InferResult<Expr> {
    let chars: Vec<char> = text.chars().collect();
    let (expr, _) = parse_expr_at(&chars, 0, 0)?;
    Ok(expr)
}

fn parse_expr_at(chars: &[char], start: usize, depth: usize) -> InferResult<(Expr, usize)> {
    if depth > MAX_NESTING {
        return Err(InferError::TooDeeplyNested);
    }
    let mut terms: Vec<Expr> = Vec::new();
    let mut current = String::new();
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            '(' => {
                flush_single(&mut terms, &mut current);
                let (nested, end) = parse_expr_at(chars, i + 1, depth + 1)?;
                terms.push(nested);
                i = end + 1;
            }
            ')' => {
                flush_single(&mut terms, &mut current);
                return Ok((Expr::Multi(terms), i));
            }
            c if c.is_whitespace() => {
                flush_single(&mut terms, &mut current);
                i += 1;
            }
            c => {
                current.push(c);
                i += 1;
            }
        }
    }
    flush_single(&mut terms, &mut current);
    Ok((Expr::Multi(terms), chars.len().saturating_sub(1)))
}

fn flush_single(terms: &mut Vec<Expr>, current: &mut String) {
    if !current.is_empty() {
        terms.push(Expr::Single(std::mem::take(current)));
    }
}

/// Parse a declaration context, one `name : type` line per binding.
///
/// Blank lines are skipped and whitespace within a line is ignored. A line
/// without a `:`, with an empty name, or with an empty type is rejected as
/// malformed. Later declarations of the same name overwrite earlier ones.
pub fn parse_context(text: &str) -> InferResult<Context> {
    let mut context = Context::new();
    for raw in text.lines() {
        let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if line.is_empty() {
            continue;
        }
        let malformed = || InferError::MalformedContext { line: raw.trim().to_string() };
        let (name, ty_text) = line.split_once(':').ok_or_else(malformed)?;
        if name.is_empty() {
            return Err(malformed());
        }
        let ty = parse_type(ty_text).map_err(|e| match e {
            InferError::EmptyType => malformed(),
            other => other,
        })?;
        context.insert(name.to_string(), ty);
    }
    Ok(context)
}
