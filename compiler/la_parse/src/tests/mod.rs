//! Parser tests.
//!
//! Trees here are compared against hand-built ones after erasing spans;
//! `dump.rs` checks positions through the AST printer.


use la_ir::{BinaryOp, Block, Expr, ExprKind, File, Span, Stmt, StmtKind};
use la_lexer::{LexError, TokenKind};
use pretty_assertions::assert_eq;

use crate::{parse, ParseError};

fn parse_ok(source: &str) -> File {
    match parse(source) {
        Ok(file) => file,
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

/// Parse and reset every span to `Span::DUMMY`.
fn parse_shape(source: &str) -> File {
    let mut file = parse_ok(source);
    erase_file(&mut file);
    file
}

fn erase_file(file: &mut File) {
    file.span = Span::DUMMY;
    erase_block(&mut file.block);
}

fn erase_block(block: &mut Block) {
    block.span = Span::DUMMY;
    for stmt in &mut block.statements {
        erase_stmt(stmt);
    }
}

fn erase_stmt(stmt: &mut Stmt) {
    stmt.span = Span::DUMMY;
    match &mut stmt.kind {
        StmtKind::FunctionDeclaration(decl) => erase_block(&mut decl.body),
        StmtKind::VariableDeclaration { value, .. } => {
            if let Some(value) = value {
                erase_expr(value);
            }
        }
        StmtKind::While { condition, body } => {
            erase_expr(condition);
            erase_block(body);
        }
        StmtKind::If {
            condition,
            body,
            else_body,
        } => {
            erase_expr(condition);
            erase_block(body);
            if let Some(else_body) = else_body {
                erase_block(else_body);
            }
        }
        StmtKind::VariableAssignment { value, .. } | StmtKind::Return(value) => erase_expr(value),
        StmtKind::Println(arguments) => arguments.iter_mut().for_each(erase_expr),
        StmtKind::Expr(expr) => erase_expr(expr),
    }
}

fn erase_expr(expr: &mut Expr) {
    expr.span = Span::DUMMY;
    match &mut expr.kind {
        ExprKind::FunctionCall { arguments, .. } => arguments.iter_mut().for_each(erase_expr),
        ExprKind::Binary { left, right, .. } => {
            erase_expr(left);
            erase_expr(right);
        }
        ExprKind::VariableIdentifier(_) | ExprKind::Literal(_) => {}
    }
}

fn file(statements: Vec<Stmt>) -> File {
    File::new(Block::new(statements))
}

#[test]
fn blank_source_is_empty_file() {
    assert_eq!(parse_shape(" "), file(Vec::new()));
    assert_eq!(parse_shape(""), file(Vec::new()));
}

#[test]
fn variable_declaration() {
    assert_eq!(
        parse_shape("var a = 10"),
        file(vec![Stmt::var("a", Some(Expr::literal(10)))])
    );
    assert_eq!(parse_shape("var a"), file(vec![Stmt::var("a", None)]));
}

#[test]
fn function_declaration() {
    let source = "\nfun f(x) {\n   return 4\n}\n\n";
    assert_eq!(
        parse_shape(source),
        file(vec![Stmt::function(
            "f",
            &["x"],
            Block::new(vec![Stmt::ret(Expr::literal(4))])
        )])
    );
}

#[test]
fn function_with_several_parameters() {
    assert_eq!(
        parse_shape("fun add(a, b, c) { return a + b + c }"),
        file(vec![Stmt::function(
            "add",
            &["a", "b", "c"],
            Block::new(vec![Stmt::ret(Expr::binary(
                Expr::binary(Expr::variable("a"), BinaryOp::Add, Expr::variable("b")),
                BinaryOp::Add,
                Expr::variable("c"),
            ))])
        )])
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        parse_shape("\nwhile(1) {\n   return 4\n}\n"),
        file(vec![Stmt::while_loop(
            Expr::literal(1),
            Block::new(vec![Stmt::ret(Expr::literal(4))])
        )])
    );
}

#[test]
fn if_with_and_without_else() {
    assert_eq!(
        parse_shape("if(1) {\n   return 4\n}"),
        file(vec![Stmt::if_else(
            Expr::literal(1),
            Block::new(vec![Stmt::ret(Expr::literal(4))]),
            None
        )])
    );
    assert_eq!(
        parse_shape("if(1) {\n   return 4\n} else {\n   return 5\n}"),
        file(vec![Stmt::if_else(
            Expr::literal(1),
            Block::new(vec![Stmt::ret(Expr::literal(4))]),
            Some(Block::new(vec![Stmt::ret(Expr::literal(5))]))
        )])
    );
}

#[test]
fn assignment_versus_expression_statement() {
    assert_eq!(
        parse_shape("a = 10"),
        file(vec![Stmt::assign("a", Expr::literal(10))])
    );
    assert_eq!(
        parse_shape("a == 10"),
        file(vec![Stmt::expr(Expr::binary(
            Expr::variable("a"),
            BinaryOp::Eq,
            Expr::literal(10)
        ))])
    );
}

#[test]
fn call_and_println_arguments() {
    assert_eq!(
        parse_shape("f(239, x)"),
        file(vec![Stmt::expr(Expr::call(
            "f",
            vec![Expr::literal(239), Expr::variable("x")]
        ))])
    );
    assert_eq!(
        parse_shape("println(239, x)"),
        file(vec![Stmt::println(vec![
            Expr::literal(239),
            Expr::variable("x")
        ])])
    );
    assert_eq!(parse_shape("println()"), file(vec![Stmt::println(Vec::new())]));
}

#[test]
fn every_operator_parses() {
    let source: String = BinaryOp::ALL
        .iter()
        .map(|op| format!("1 {} 0\n", op.as_symbol()))
        .collect();
    let expected = BinaryOp::ALL
        .iter()
        .map(|&op| Stmt::expr(Expr::binary(Expr::literal(1), op, Expr::literal(0))))
        .collect();
    assert_eq!(parse_shape(&source), file(expected));
}

#[test]
fn precedence_and_associativity() {
    // 1 + 2 * 3 - 4  ==  (1 + (2 * 3)) - 4
    assert_eq!(
        parse_shape("1 + 2 * 3 - 4"),
        file(vec![Stmt::expr(Expr::binary(
            Expr::binary(
                Expr::literal(1),
                BinaryOp::Add,
                Expr::binary(Expr::literal(2), BinaryOp::Mul, Expr::literal(3)),
            ),
            BinaryOp::Sub,
            Expr::literal(4),
        ))])
    );

    // a || b && c == d < e
    assert_eq!(
        parse_shape("a || b && c == d < e"),
        file(vec![Stmt::expr(Expr::binary(
            Expr::variable("a"),
            BinaryOp::Or,
            Expr::binary(
                Expr::variable("b"),
                BinaryOp::And,
                Expr::binary(
                    Expr::variable("c"),
                    BinaryOp::Eq,
                    Expr::binary(Expr::variable("d"), BinaryOp::Lt, Expr::variable("e")),
                ),
            ),
        ))])
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        parse_shape("(1 + 2) * 3"),
        file(vec![Stmt::expr(Expr::binary(
            Expr::binary(Expr::literal(1), BinaryOp::Add, Expr::literal(2)),
            BinaryOp::Mul,
            Expr::literal(3),
        ))])
    );
}

#[test]
fn comments_are_ignored() {
    let source = "\n// ignore it!\nvar a = 10 // ignore it!!\n// ignore it!!!\n";
    assert_eq!(
        parse_shape(source),
        file(vec![Stmt::var("a", Some(Expr::literal(10)))])
    );
}

#[test]
fn variable_and_function_may_share_a_name() {
    let source = "\nfun f(f) {\n   return f + 1\n}\nvar f = 239\nprintln(f(f), f)\n";
    assert_eq!(
        parse_shape(source),
        file(vec![
            Stmt::function(
                "f",
                &["f"],
                Block::new(vec![Stmt::ret(Expr::binary(
                    Expr::variable("f"),
                    BinaryOp::Add,
                    Expr::literal(1)
                ))])
            ),
            Stmt::var("f", Some(Expr::literal(239))),
            Stmt::println(vec![
                Expr::call("f", vec![Expr::variable("f")]),
                Expr::variable("f"),
            ]),
        ])
    );
}

#[test]
fn statements_need_no_separator() {
    assert_eq!(
        parse_shape("var a = 1 a = a + 1 println(a)"),
        file(vec![
            Stmt::var("a", Some(Expr::literal(1))),
            Stmt::assign(
                "a",
                Expr::binary(Expr::variable("a"), BinaryOp::Add, Expr::literal(1))
            ),
            Stmt::println(vec![Expr::variable("a")]),
        ])
    );
}

#[test]
fn statement_spans_cover_first_to_last_token() {
    let file = parse_ok("var a = 10\nprintln(a)");
    let spans: Vec<Span> = file.block.statements.iter().map(|s| s.span).collect();
    assert_eq!(spans, vec![Span::new(0, 10), Span::new(11, 21)]);
    assert_eq!(file.block.span, Span::new(0, 21));
    assert_eq!(file.span, file.block.span);
}

#[test]
fn parenthesized_left_operand_widens_binary_span() {
    let file = parse_ok("(1 + 2) * 3");
    let StmtKind::Expr(expr) = &file.block.statements[0].kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expr.span, Span::new(0, 11));
    let ExprKind::Binary { left, .. } = &expr.kind else {
        panic!("expected binary expression");
    };
    assert_eq!(left.span, Span::new(1, 6));
}

// Errors

#[test]
fn colon_after_if_condition_is_rejected() {
    let result = parse("if(1):\n   return 4\n}\n\n\n");
    assert!(matches!(
        result,
        Err(ParseError::Lex(LexError::UnexpectedCharacter { .. }))
    ));
}

#[test]
fn missing_closing_brace() {
    let err = parse("fun f() { return 1").err();
    assert_eq!(
        err,
        Some(ParseError::UnexpectedToken {
            expected: "`}`",
            found: TokenKind::Eof,
            span: Span::point(18),
        })
    );
}

#[test]
fn stray_closing_brace_at_top_level() {
    let err = parse("var a = 1 }").err();
    assert_eq!(
        err,
        Some(ParseError::UnexpectedToken {
            expected: "expression",
            found: TokenKind::RBrace,
            span: Span::new(10, 11),
        })
    );
}

#[test]
fn return_needs_a_value() {
    assert!(matches!(
        parse("fun f() { return }"),
        Err(ParseError::UnexpectedToken {
            expected: "expression",
            found: TokenKind::RBrace,
            ..
        })
    ));
}

#[test]
fn literal_must_fit_in_i32() {
    assert_eq!(
        parse_shape("println(2147483647)"),
        file(vec![Stmt::println(vec![Expr::literal(i32::MAX)])])
    );
    assert_eq!(
        parse("println(2147483648)").err(),
        Some(ParseError::LiteralOutOfRange {
            text: "2147483648".to_string(),
            span: Span::new(8, 18),
        })
    );
}

#[test]
fn trailing_comma_in_arguments_is_rejected() {
    assert!(parse("f(1, )").is_err());
    assert!(parse("fun f(a, ) { }").is_err());
}

#[test]
fn error_span_accessor() {
    let err = parse("var = 1").err();
    assert_eq!(err.and_then(|e| e.span()), Some(Span::new(4, 5)));
}

#[test]
fn deeply_nested_parentheses_do_not_overflow() {
    let depth = 5_000;
    let source = format!("println({}1{})", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse_shape(&source),
        file(vec![Stmt::println(vec![Expr::literal(1)])])
    );
}
