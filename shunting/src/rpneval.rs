use crate::parser::RPNExpr;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EvalErr {
    #[error("invalid expression")]
    InvalidExpression,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator")]
    UnknownOperator(String),
}

fn apply(op: &str, l: f64, r: f64) -> Result<f64, EvalErr> {
    match op {
        "+" => Ok(l + r),
        "-" => Ok(l - r),
        "*" => Ok(l * r),
        "/" if r == 0.0 => Err(EvalErr::DivisionByZero),
        "/" => Ok(l / r),
        _ => Err(EvalErr::UnknownOperator(op.to_string())),
    }
}

// A literal that overflows to infinity is rejected, spelled out infinities
// ("inf", "Infinity") are accepted as such.
fn parse_numeral(token: &str) -> Option<f64> {
    let num = token.parse::<f64>().ok()?;
    if num.is_infinite() && !token.to_ascii_lowercase().contains("inf") {
        return None;
    }
    Some(num)
}

/// Evaluates a postfix sequence on a value stack.
///
/// Every token that parses as an `f64` without overflowing is an operand,
/// anything else is taken for a binary operator. An operator needs two
/// operands on the stack before it is even looked at, so a malformed numeral
/// with nothing to operate on reports `InvalidExpression` rather than
/// `UnknownOperator`. The stack must hold exactly one value at the end.
pub fn eval(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    let result = run_stack(rpn);
    match &result {
        Ok(value) => debug!("{} => {}", rpn, value),
        Err(e) => debug!("{} failed: {}", rpn, e),
    }
    result
}

fn run_stack(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    let mut operands = Vec::<f64>::new();

    for token in rpn.iter() {
        if let Some(num) = parse_numeral(token) {
            operands.push(num);
            continue;
        }
        let (Some(r), Some(l)) = (operands.pop(), operands.pop()) else {
            return Err(EvalErr::InvalidExpression);
        };
        operands.push(apply(token, l, r)?);
    }
    match operands[..] {
        [result] => Ok(result),
        _ => Err(EvalErr::InvalidExpression),
    }
}
