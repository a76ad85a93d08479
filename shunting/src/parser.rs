use lexers::{CalcToken, CalcTokenizer};
use log::{debug, trace};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    #[error("invalid character in expression")]
    InvalidCharacter(char),
    #[error("unmatched parentheses")]
    UnmatchedParens,
}

// Binding strength of binary operators, higher binds tighter. Anything
// else ranks 0 so an open paren on the stack is never popped by an operator.
pub fn precedence(op: char) -> usize {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

/// A postfix (Reverse Polish) token sequence. Tokens are kept as the raw
/// strings the converter emitted, numerals are only interpreted at eval.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<String>);

impl RPNExpr {
    pub fn from_tokens<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        RPNExpr(tokens.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, String> { self.0.iter() }
}

impl std::ops::Index<usize> for RPNExpr {
    type Output = String;
    fn index(&self, i: usize) -> &String { &self.0[i] }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut CalcTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = CalcToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::<char>::new();

        for token in lex {
            trace!("shunting {:?} stack={:?}", token, stack);
            match token {
                CalcToken::Numeral(num) => out.push(num),
                CalcToken::OParen => stack.push('('),
                CalcToken::CParen => {
                    // flush the group, then peel its matching '('
                    loop {
                        match stack.pop() {
                            Some('(') => break,
                            Some(op) => out.push(op.to_string()),
                            None => return Err(ParseError::UnmatchedParens),
                        }
                    }
                }
                CalcToken::Op(op) => {
                    // equal precedence pops first: left associative
                    while let Some(&top) = stack.last() {
                        if precedence(top) < precedence(op) {
                            break;
                        }
                        out.push(top.to_string());
                        stack.pop();
                    }
                    stack.push(op);
                }
                CalcToken::Unknown(c) => return Err(ParseError::InvalidCharacter(c)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                '(' => return Err(ParseError::UnmatchedParens),
                op => out.push(op.to_string()),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
