use crate::types::Type;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferError {
    #[error("malformed context line '{line}'")]
    MalformedContext { line: String },
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: String },
    #[error("'{ty}' is not a function type")]
    NotAFunction { ty: Type },
    #[error("type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch { expected: Type, found: Type },
    #[error("empty type expression")]
    EmptyType,
    #[error("empty expression")]
    EmptyExpression,
    #[error("parenthesis nesting too deep")]
    TooDeeplyNested,
}

pub type InferResult<T> = Result<T, InferError>;
