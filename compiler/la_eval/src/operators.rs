//! Binary operator semantics.
//!
//! Every La value is an `i32`, so dispatch is a single match on the
//! operator. Comparisons and logical operators produce 0 or 1; logical
//! operators treat any nonzero operand as true. Arithmetic wraps on
//! overflow, including `i32::MIN / -1`.

use la_ir::BinaryOp;

/// Division or remainder by zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DivisionByZero;

/// Apply `op` to two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: i32, right: i32) -> Result<i32, DivisionByZero> {
    let value = match op {
        BinaryOp::Gt => i32::from(left > right),
        BinaryOp::Lt => i32::from(left < right),
        BinaryOp::Eq => i32::from(left == right),
        BinaryOp::LtEq => i32::from(left <= right),
        BinaryOp::GtEq => i32::from(left >= right),
        BinaryOp::NotEq => i32::from(left != right),

        BinaryOp::And => i32::from(truthy(left) && truthy(right)),
        BinaryOp::Or => i32::from(truthy(left) || truthy(right)),

        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                return Err(DivisionByZero);
            }
            left.wrapping_div(right)
        }
        BinaryOp::Mod => {
            if right == 0 {
                return Err(DivisionByZero);
            }
            left.wrapping_rem(right)
        }
    };
    Ok(value)
}

#[inline]
fn truthy(value: i32) -> bool {
    value != 0
}
