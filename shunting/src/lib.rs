//! Arithmetic expression evaluation: infix text is converted to postfix
//! with the shunting-yard algorithm and then evaluated on a value stack.

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::rpneval::eval;
pub use self::rpneval::EvalErr;

mod rpnprint;
mod rpneval;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

/// Evaluates an infix expression. Evaluation only runs once conversion
/// succeeded and the first failure of either stage is returned unchanged.
pub fn calc(expr: &str) -> Result<f64, CalcError> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(eval(&rpn)?)
}
