//! Interpreter tests.
//!
//! Hand-built trees exercise node semantics directly; `programs.rs` runs
//! whole programs through the parser.


use la_ir::{BinaryOp, Block, Expr, File, Stmt};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{buffer_handler, evaluate_binary, EvalErrorKind, Flow, Interpreter};

/// Evaluate a bare block in a fresh interpreter; returns its flow and output.
fn eval_block(block: &Block) -> (Flow, String) {
    let output = buffer_handler();
    let mut interpreter = Interpreter::new(output.clone());
    let flow = match interpreter.eval_block(block) {
        Ok(flow) => flow,
        Err(err) => panic!("block failed: {err}"),
    };
    (flow, output.get_output())
}

fn eval_file(file: &File) -> Result<String, EvalErrorKind> {
    let output = buffer_handler();
    Interpreter::new(output.clone())
        .evaluate_file(file)
        .map_err(|err| err.kind())?;
    Ok(output.get_output())
}

#[test]
fn empty_file() {
    assert_eq!(eval_file(&File::new(Block::default())), Ok(String::new()));
}

#[test]
fn declaration_produces_nothing() {
    let block = Block::new(vec![Stmt::var("a", Some(Expr::literal(10)))]);
    assert_eq!(eval_block(&block), (Flow::Absent, String::new()));
}

#[test]
fn uninitialized_variable_is_zero() {
    let block = Block::new(vec![
        Stmt::var("a", None),
        Stmt::ret(Expr::variable("a")),
    ]);
    assert_eq!(eval_block(&block), (Flow::Present(0), String::new()));
}

#[test]
fn declaring_a_function_does_not_run_it() {
    let block = Block::new(vec![Stmt::function(
        "f",
        &["x"],
        Block::new(vec![
            Stmt::println(vec![Expr::literal(4)]),
            Stmt::ret(Expr::literal(2)),
        ]),
    )]);
    assert_eq!(eval_block(&block), (Flow::Absent, String::new()));
}

#[test]
fn while_loop_counts() {
    let file = File::new(Block::new(vec![
        Stmt::var("i", None),
        Stmt::while_loop(
            Expr::binary(Expr::variable("i"), BinaryOp::Lt, Expr::literal(3)),
            Block::new(vec![
                Stmt::println(vec![Expr::variable("i")]),
                Stmt::assign(
                    "i",
                    Expr::binary(Expr::variable("i"), BinaryOp::Add, Expr::literal(1)),
                ),
            ]),
        ),
    ]));
    assert_eq!(eval_file(&file), Ok("0\n1\n2\n".to_string()));
}

#[test]
fn if_without_else_propagates_return() {
    let block = Block::new(vec![
        Stmt::if_else(
            Expr::literal(1),
            Block::new(vec![Stmt::ret(Expr::literal(4))]),
            None,
        ),
        Stmt::ret(Expr::literal(0)),
    ]);
    assert_eq!(eval_block(&block).0, Flow::Present(4));
}

#[test]
fn if_false_without_else_falls_through() {
    let block = Block::new(vec![
        Stmt::if_else(
            Expr::literal(0),
            Block::new(vec![Stmt::ret(Expr::literal(4))]),
            None,
        ),
        Stmt::ret(Expr::literal(9)),
    ]);
    assert_eq!(eval_block(&block).0, Flow::Present(9));
}

#[test]
fn if_with_else_takes_else_branch() {
    let block = Block::new(vec![Stmt::if_else(
        Expr::literal(0),
        Block::new(vec![Stmt::ret(Expr::literal(4))]),
        Some(Block::new(vec![Stmt::ret(Expr::literal(5))])),
    )]);
    assert_eq!(eval_block(&block).0, Flow::Present(5));
}

#[test]
fn assignment_updates_value() {
    let block = Block::new(vec![
        Stmt::var("a", None),
        Stmt::assign("a", Expr::literal(10)),
        Stmt::ret(Expr::variable("a")),
    ]);
    assert_eq!(eval_block(&block).0, Flow::Present(10));
}

#[test]
fn call_returns_argument() {
    let block = Block::new(vec![
        Stmt::function("f", &["a"], Block::new(vec![Stmt::ret(Expr::variable("a"))])),
        Stmt::ret(Expr::call("f", vec![Expr::literal(239)])),
    ]);
    assert_eq!(eval_block(&block).0, Flow::Present(239));
}

#[test]
fn operator_table_with_ten_and_twenty() {
    let arguments = BinaryOp::ALL
        .iter()
        .map(|&op| Expr::binary(Expr::literal(10), op, Expr::literal(20)))
        .collect();
    let block = Block::new(vec![Stmt::println(arguments)]);
    assert_eq!(
        eval_block(&block),
        (Flow::Absent, "0 1 0 1 0 1 1 1 30 -10 200 0 10\n".to_string())
    );
}

#[test]
fn variable_and_function_share_a_name() {
    let block = Block::new(vec![
        Stmt::function(
            "f",
            &["f"],
            Block::new(vec![Stmt::ret(Expr::binary(
                Expr::variable("f"),
                BinaryOp::Add,
                Expr::literal(1),
            ))]),
        ),
        Stmt::var("f", Some(Expr::literal(239))),
        Stmt::println(vec![
            Expr::call("f", vec![Expr::variable("f")]),
            Expr::variable("f"),
        ]),
    ]);
    assert_eq!(eval_block(&block), (Flow::Absent, "240 239\n".to_string()));
}

#[test]
fn empty_println_writes_newline() {
    let block = Block::new(vec![Stmt::println(Vec::new())]);
    assert_eq!(eval_block(&block), (Flow::Absent, "\n".to_string()));
}

#[test]
fn negative_values_print_with_sign() {
    let block = Block::new(vec![Stmt::println(vec![
        Expr::literal(-5),
        Expr::literal(i32::MIN),
    ])]);
    assert_eq!(eval_block(&block).1, "-5 -2147483648\n");
}

// Errors

#[test]
fn top_level_return_is_unexpected() {
    let file = File::new(Block::new(vec![Stmt::ret(Expr::literal(1))]));
    assert_eq!(eval_file(&file), Err(EvalErrorKind::UnexpectedReturn));
}

#[test]
fn redeclaration_in_same_frame() {
    let file = File::new(Block::new(vec![Stmt::var("a", None), Stmt::var("a", None)]));
    assert_eq!(eval_file(&file), Err(EvalErrorKind::Redeclaration));
}

#[test]
fn undefined_variable() {
    let file = File::new(Block::new(vec![Stmt::println(vec![Expr::variable("x")])]));
    assert_eq!(eval_file(&file), Err(EvalErrorKind::VariableIsNotDefined));
}

#[test]
fn assignment_to_undefined_variable() {
    let file = File::new(Block::new(vec![Stmt::assign("x", Expr::literal(1))]));
    assert_eq!(eval_file(&file), Err(EvalErrorKind::VariableIsNotDefined));
}

#[test]
fn undefined_function() {
    let file = File::new(Block::new(vec![Stmt::expr(Expr::call("x", Vec::new()))]));
    assert_eq!(eval_file(&file), Err(EvalErrorKind::FunctionIsNotDefined));
}

#[test]
fn output_written_before_failure_is_kept() {
    let file = File::new(Block::new(vec![
        Stmt::println(vec![Expr::literal(1)]),
        Stmt::println(vec![Expr::variable("missing")]),
        Stmt::println(vec![Expr::literal(2)]),
    ]));
    let output = buffer_handler();
    let result = Interpreter::new(output.clone()).evaluate_file(&file);

    assert_eq!(result.map_err(|e| e.kind()), Err(EvalErrorKind::VariableIsNotDefined));
    assert_eq!(output.get_output(), "1\n");
}

#[test]
fn frames_are_unwound_after_error() {
    let file = File::new(Block::new(vec![
        Stmt::function(
            "f",
            &[],
            Block::new(vec![Stmt::while_loop(
                Expr::literal(1),
                Block::new(vec![Stmt::ret(Expr::variable("nope"))]),
            )]),
        ),
        Stmt::expr(Expr::call("f", Vec::new())),
    ]));
    let mut interpreter = Interpreter::new(buffer_handler());
    let result = interpreter.evaluate_file(&file);

    assert!(result.is_err());
    assert_eq!(interpreter.depth(), 1);
    assert!(interpreter.frame().resolve_function("f").is_some());
}

proptest! {
    #[test]
    fn println_of_binary_matches_operator_table(
        op in proptest::sample::select(BinaryOp::ALL.to_vec()),
        left: i32,
        right: i32,
    ) {
        let file = File::new(Block::new(vec![Stmt::println(vec![Expr::binary(
            Expr::literal(left),
            op,
            Expr::literal(right),
        )])]));
        match evaluate_binary(op, left, right) {
            Ok(value) => prop_assert_eq!(eval_file(&file), Ok(format!("{value}\n"))),
            Err(_) => prop_assert_eq!(eval_file(&file), Err(EvalErrorKind::DivisionByZero)),
        }
    }
}
