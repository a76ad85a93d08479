use crate::parser::{precedence, RPNExpr};

// numerals bind tighter than any operator
const LEAF: usize = usize::MAX;

fn as_operator(token: &str) -> Option<char> {
    match token {
        "+" | "-" | "*" | "/" => token.chars().next(),
        _ => None,
    }
}

impl RPNExpr {
    /// Infix rendering with the fewest parentheses that keep the meaning,
    /// `None` if the sequence doesn't describe a single expression.
    ///
    /// Works on a stack of rendered operands paired with the precedence of
    /// their outermost operator, so it handles arbitrarily long chains.
    pub fn to_infix(&self) -> Option<String> {
        let mut operands = Vec::<(String, usize)>::new();
        for token in self.iter() {
            let op = match as_operator(token) {
                Some(op) => op,
                None => {
                    operands.push((token.clone(), LEAF));
                    continue;
                }
            };
            let (rhs, rprec) = operands.pop()?;
            let (lhs, lprec) = operands.pop()?;
            let prec = precedence(op);
            // left associative: equal precedence only needs parens on the rhs
            let mut infix = if lprec < prec { format!("({})", lhs) } else { lhs };
            infix.push(' ');
            infix.push(op);
            infix.push(' ');
            if rprec <= prec {
                infix.push('(');
                infix.push_str(&rhs);
                infix.push(')');
            } else {
                infix.push_str(&rhs);
            }
            operands.push((infix, prec));
        }
        match (operands.pop(), operands.is_empty()) {
            (Some((infix, _)), true) => Some(infix),
            _ => None,
        }
    }
}
