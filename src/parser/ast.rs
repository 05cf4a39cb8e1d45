use serde::{Deserialize, Serialize};

/// Leaf value of an expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Atom {
    /// The reserved symbol `nil`
    Nil,
    /// The reserved symbols `true` and `false`
    Bool(bool),
    /// String literal content, quotes removed
    String(String),
    /// Any symbol other than the reserved words
    Symbol(String),
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision float
    Float(f64),
}

impl Atom {
    /// Looks up the reserved words `nil`, `true` and `false`
    ///
    /// Returns `None` for every other symbol text.
    pub fn reserved(text: &str) -> Option<Atom> {
        match text {
            "nil" => Some(Atom::Nil),
            "true" => Some(Atom::Bool(true)),
            "false" => Some(Atom::Bool(false)),
            _ => None,
        }
    }

    /// Human-readable name of the atom's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Atom::Nil => "nil",
            Atom::Bool(_) => "bool",
            Atom::String(_) => "string",
            Atom::Symbol(_) => "symbol",
            Atom::Integer(_) => "integer",
            Atom::Float(_) => "float",
        }
    }
}

/// Parsed S-expression
///
/// The tree owns all of its children; build it with the explicit
/// constructors below or get it from the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Leaf value
    Atom(Atom),
    /// Parenthesized sequence, possibly empty
    List(Vec<Expression>),
}

impl Expression {
    /// `nil`
    pub fn nil() -> Self {
        Expression::Atom(Atom::Nil)
    }

    /// `true` or `false`
    pub fn boolean(value: bool) -> Self {
        Expression::Atom(Atom::Bool(value))
    }

    /// String atom
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Atom(Atom::String(value.into()))
    }

    /// Symbol atom
    ///
    /// The name is taken as is; `Expression::symbol("nil")` is a symbol, not
    /// [`Atom::Nil`].
    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Atom(Atom::Symbol(name.into()))
    }

    /// Integer atom
    pub fn integer(value: i64) -> Self {
        Expression::Atom(Atom::Integer(value))
    }

    /// Float atom
    pub fn float(value: f64) -> Self {
        Expression::Atom(Atom::Float(value))
    }

    /// List of expressions
    pub fn list(items: impl IntoIterator<Item = Expression>) -> Self {
        Expression::List(items.into_iter().collect())
    }

    /// Empty list `()`
    pub fn empty_list() -> Self {
        Expression::List(Vec::new())
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Expression::Atom(atom) => Some(atom),
            Expression::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Expression]> {
        match self {
            Expression::List(items) => Some(items.as_slice()),
            Expression::Atom(_) => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Expression::Atom(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Expression::List(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Expression::Atom(Atom::Nil))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Expression::Atom(Atom::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::Atom(Atom::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expression::Atom(Atom::Symbol(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Expression::Atom(Atom::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Expression::Atom(Atom::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Nesting depth: 0 for an atom, 1 for a flat list
    pub fn depth(&self) -> usize {
        match self {
            Expression::Atom(_) => 0,
            Expression::List(items) => 1 + items.iter().map(Expression::depth).max().unwrap_or(0),
        }
    }
}
