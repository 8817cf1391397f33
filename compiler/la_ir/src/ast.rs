//! AST node types.
//!
//! The tree mirrors the La grammar one-to-one:
//!
//! ```text
//! File
//!  └─ Block
//!      └─ Stmt*            (fun, var, while, if, assignment, return, println, expr)
//!          └─ Expr*        (call, binary, identifier, literal)
//! ```
//!
//! Every node owns its children and carries the [`Span`] of the source text
//! it was parsed from. Equality is structural and includes spans; trees built
//! by hand with the constructors below all use [`Span::DUMMY`].

use crate::{BinaryOp, Span};

/// Root of a parsed program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    pub block: Block,
    pub span: Span,
}

impl File {
    pub fn new(block: Block) -> Self {
        let span = block.span;
        File { block, span }
    }
}

/// Ordered statements executed one after another.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block {
            statements,
            span: Span::DUMMY,
        }
    }
}

/// `fun name(params) { body }`.
///
/// Kept as its own struct because a runtime function value points back at
/// its declaration for the parameter list and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    FunctionDeclaration(FunctionDeclaration),
    /// `var name` or `var name = value`.
    VariableDeclaration {
        name: String,
        value: Option<Expr>,
    },
    While {
        condition: Expr,
        body: Block,
    },
    If {
        condition: Expr,
        body: Block,
        else_body: Option<Block>,
    },
    /// `name = value`.
    VariableAssignment {
        name: String,
        value: Expr,
    },
    Return(Expr),
    Println(Vec<Expr>),
    /// An expression evaluated for its side effects; the value is dropped.
    Expr(Expr),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    FunctionCall {
        name: String,
        arguments: Vec<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    VariableIdentifier(String),
    Literal(i32),
}

// Hand-built trees (tests, embedders without a parser)

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    pub fn function(name: &str, parameters: &[&str], body: Block) -> Self {
        Self::dummy(StmtKind::FunctionDeclaration(FunctionDeclaration {
            name: name.to_string(),
            parameters: parameters.iter().map(ToString::to_string).collect(),
            body,
        }))
    }

    pub fn var(name: &str, value: Option<Expr>) -> Self {
        Self::dummy(StmtKind::VariableDeclaration {
            name: name.to_string(),
            value,
        })
    }

    pub fn while_loop(condition: Expr, body: Block) -> Self {
        Self::dummy(StmtKind::While { condition, body })
    }

    pub fn if_else(condition: Expr, body: Block, else_body: Option<Block>) -> Self {
        Self::dummy(StmtKind::If {
            condition,
            body,
            else_body,
        })
    }

    pub fn assign(name: &str, value: Expr) -> Self {
        Self::dummy(StmtKind::VariableAssignment {
            name: name.to_string(),
            value,
        })
    }

    pub fn ret(value: Expr) -> Self {
        Self::dummy(StmtKind::Return(value))
    }

    pub fn println(arguments: Vec<Expr>) -> Self {
        Self::dummy(StmtKind::Println(arguments))
    }

    pub fn expr(expr: Expr) -> Self {
        Self::dummy(StmtKind::Expr(expr))
    }

    fn dummy(kind: StmtKind) -> Self {
        Stmt {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn literal(value: i32) -> Self {
        Self::dummy(ExprKind::Literal(value))
    }

    pub fn variable(name: &str) -> Self {
        Self::dummy(ExprKind::VariableIdentifier(name.to_string()))
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::dummy(ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn call(name: &str, arguments: Vec<Expr>) -> Self {
        Self::dummy(ExprKind::FunctionCall {
            name: name.to_string(),
            arguments,
        })
    }

    fn dummy(kind: ExprKind) -> Self {
        Expr {
            kind,
            span: Span::DUMMY,
        }
    }
}
