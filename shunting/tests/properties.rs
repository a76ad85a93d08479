use proptest::prelude::*;
use shunting::{calc, CalcError, EvalErr, RPNExpr, ShuntingParser};

#[derive(Debug, Clone)]
enum Expr {
    Num(u32),
    Bin(char, Box<Expr>, Box<Expr>),
}

impl Expr {
    // direct evaluation with the same float ops, None on division by zero
    fn value(&self) -> Option<f64> {
        match self {
            Expr::Num(n) => Some(*n as f64),
            Expr::Bin(op, l, r) => {
                let (l, r) = (l.value()?, r.value()?);
                match op {
                    '+' => Some(l + r),
                    '-' => Some(l - r),
                    '*' => Some(l * r),
                    _ if r == 0.0 => None,
                    _ => Some(l / r),
                }
            }
        }
    }

    fn parenthesized(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Bin(op, l, r) => format!("({}{}{})", l.parenthesized(), op, r.parenthesized()),
        }
    }

    fn spaced(&self, gap: &str) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Bin(op, l, r) => format!(
                "({g}{}{g}{}{g}{}{g})", l.spaced(gap), op, r.spaced(gap), g = gap),
        }
    }
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..1000).prop_map(Expr::Num);
    leaf.prop_recursive(5, 32, 2, |inner| {
        (prop::sample::select(vec!['+', '-', '*', '/']), inner.clone(), inner)
            .prop_map(|(op, l, r)| Expr::Bin(op, Box::new(l), Box::new(r)))
    })
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn agrees_with_tree_evaluation(expr in expr_strategy()) {
        let result = calc(&expr.parenthesized());
        match expr.value() {
            Some(v) => prop_assert!(same(result.clone().unwrap(), v), "{:?} vs {}", result, v),
            None => prop_assert_eq!(result, Err(CalcError::Eval(EvalErr::DivisionByZero))),
        }
    }

    #[test]
    fn whitespace_does_not_matter(expr in expr_strategy(), gap in "[ \t\n]{0,3}") {
        let tight = calc(&expr.parenthesized());
        let loose = calc(&expr.spaced(&gap));
        match (tight, loose) {
            (Ok(a), Ok(b)) => prop_assert!(same(a, b)),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn evaluation_is_idempotent(expr in expr_strategy()) {
        let text = expr.parenthesized();
        let first = calc(&text);
        let second = calc(&text);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert!(same(a, b)),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn printed_infix_reparses_to_same_postfix(expr in expr_strategy()) {
        let rpn = ShuntingParser::parse_str(&expr.parenthesized()).unwrap();
        let infix = rpn.to_infix().unwrap();
        let reparsed: RPNExpr = ShuntingParser::parse_str(&infix).unwrap();
        prop_assert_eq!(rpn, reparsed);
    }
}
