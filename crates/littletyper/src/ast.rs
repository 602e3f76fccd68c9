#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    // A bare identifier
    Single(String),
    // An application chain, function first then arguments left to right.
    // A one-element chain is a parenthesized sub-expression, not an application.
    Multi(Vec<Expr>),
}

impl Expr {
    pub fn single(name: impl Into<String>) -> Self {
        Expr::Single(name.into())
    }
}
