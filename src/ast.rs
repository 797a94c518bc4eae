use crate::diagnostic::{Error, Result};
use codemap::Span;
use ecow::EcoString;

/// A symbol in a node schema's symbol table.
pub struct Symbol {
    pub name: &'static str,
    pub value: i64,
}

/// An expression as written in the source, before evaluation.
#[derive(Debug, Clone)]
pub enum Expression {
    Number(i64, Span),
    Str(EcoString, Span),
    Identifier(EcoString, Span),
    Negate(Box<Expression>, Span),
    /// `bitset(a, b, …)`, the OR of `1 << arg` over all arguments.
    Bitset(Vec<Expression>, Span),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Self::Number(_, span)
            | Self::Str(_, span)
            | Self::Identifier(_, span)
            | Self::Negate(_, span)
            | Self::Bitset(_, span) => *span,
        }
    }

    /// Reduce the expression to a number or string literal. Identifiers are
    /// looked up in `symbols` by linear scan.
    pub fn evaluate(&self, symbols: &[Symbol]) -> Result<Self> {
        match self {
            Self::Number(..) | Self::Str(..) => Ok(self.clone()),
            Self::Identifier(name, span) => symbols
                .iter()
                .find(|sym| sym.name == name.as_str())
                .map(|sym| Self::Number(sym.value, *span))
                .ok_or_else(|| {
                    Box::new(Error::UnknownIdentifier {
                        span: *span,
                        name: name.clone(),
                    })
                }),
            Self::Negate(child, span) => match child.evaluate(symbols)? {
                Self::Number(value, _) => Ok(Self::Number(-value, *span)),
                _ => Err(Box::new(Error::CannotNegate { span: *span })),
            },
            Self::Bitset(args, span) => {
                let mut bits = 0;
                for arg in args {
                    match arg.evaluate(symbols)? {
                        Self::Number(value, _) if (0..64).contains(&value) => {
                            bits |= 1 << value;
                        }
                        _ => {
                            return Err(Box::new(
                                Error::BitsetElementNotNumber {
                                    span: arg.span(),
                                },
                            ))
                        }
                    }
                }
                Ok(Self::Number(bits, *span))
            }
        }
    }
}

/// An identifier together with the place it was written.
#[derive(Debug, Clone)]
pub struct IdentifierLine {
    pub name: EcoString,
    pub span: Span,
}

impl IdentifierLine {
    /// Cells that are empty or start with `_` do not bind a sub-node.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.name.starts_with('_')
    }
}

/// A rectangular grid of identifiers used to splay one value into many
/// named sub-values.
#[derive(Debug)]
pub struct NameTable {
    pub rows: Vec<Vec<IdentifierLine>>,
    pub span: Span,
}

/// The label part of a named value.
#[derive(Debug)]
pub enum Name {
    Single(IdentifierLine),
    Table(NameTable),
}

impl Name {
    pub fn span(&self) -> Span {
        match self {
            Self::Single(single) => single.span,
            Self::Table(table) => table.span,
        }
    }

    pub fn name_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Table(table) => table
                .rows
                .iter()
                .flatten()
                .filter(|cell| cell.is_valid())
                .count(),
        }
    }
}

/// A `TAG(args…){ body }` node as written in the source.
#[derive(Debug)]
pub struct NodeGroup {
    pub tag: EcoString,
    pub span: Span,
    pub exprs: Vec<Expression>,
    pub values: Vec<NamedValue>,
}

/// The value part of a named value.
#[derive(Debug)]
pub enum Group {
    Node(NodeGroup),
    Expression(Expression),
}

impl Group {
    pub fn span(&self) -> Span {
        match self {
            Self::Node(node) => node.span,
            Self::Expression(expr) => expr.span(),
        }
    }
}

/// A value with an optional name, the building block of node bodies.
#[derive(Debug)]
pub struct NamedValue {
    pub name: Option<Name>,
    pub group: Group,
}
