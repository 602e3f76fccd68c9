use std::collections::HashMap;
use std::fmt;

/// Declarations in scope for one inference call, name to declared type.
pub type Context = HashMap<String, Type>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    // Atomic, uninterpreted type such as `A` or `List`
    Named(String),
    // Function type: from -> to
    Func(Box<Type>, Box<Type>),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(name.into())
    }

    pub fn func(from: Type, to: Type) -> Self {
        Type::Func(Box::new(from), Box::new(to))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => f.write_str(name),
            // A function on the left needs parens: (A->B)->C vs A->B->C
            Type::Func(from, to) => match **from {
                Type::Func(_, _) => write!(f, "({from})->{to}"),
                Type::Named(_) => write!(f, "{from}->{to}"),
            },
        }
    }
}
