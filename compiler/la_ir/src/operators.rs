//! Binary operators.
//!
//! La has no unary operators; every operator takes two `i32` operands.
//! The semantics live in `la_eval::operators`, this module only names them.

/// Binary operators, in the order of the source token table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Comparison (result 0 or 1)
    Gt,
    Lt,
    Eq,
    LtEq,
    GtEq,
    NotEq,

    // Logical (nonzero is true, no short-circuit)
    And,
    Or,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Every operator, in token-table order.
    pub const ALL: [BinaryOp; 13] = [
        Self::Gt,
        Self::Lt,
        Self::Eq,
        Self::LtEq,
        Self::GtEq,
        Self::NotEq,
        Self::And,
        Self::Or,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
    ];

    /// Look up the operator spelled `token`.
    ///
    /// Returns `None` for anything outside the table. The parser only feeds
    /// operator tokens here, so `None` means a frontend bug.
    pub fn from_token(token: &str) -> Option<BinaryOp> {
        let op = match token {
            ">" => Self::Gt,
            "<" => Self::Lt,
            "==" => Self::Eq,
            "<=" => Self::LtEq,
            ">=" => Self::GtEq,
            "!=" => Self::NotEq,
            "&&" => Self::And,
            "||" => Self::Or,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            _ => return None,
        };
        Some(op)
    }

    /// Source-level spelling.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq => "==",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Upper-case name used by the AST dump (`Binary expression ..., value = ADD`).
    pub const fn dump_name(self) -> &'static str {
        match self {
            Self::Gt => "GT",
            Self::Lt => "LT",
            Self::Eq => "EQ",
            Self::LtEq => "LE",
            Self::GtEq => "GE",
            Self::NotEq => "NEQ",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// - 6: `*` `/` `%`
    /// - 5: `+` `-`
    /// - 4: `<` `<=` `>` `>=`
    /// - 3: `==` `!=`
    /// - 2: `&&`
    /// - 1: `||`
    ///
    /// All levels are left associative.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 6,
            Self::Add | Self::Sub => 5,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 4,
            Self::Eq | Self::NotEq => 3,
            Self::And => 2,
            Self::Or => 1,
        }
    }
}
