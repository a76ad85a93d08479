#![deny(warnings)]

use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Unknown(char),
    Numeral(String), // raw lexeme, may hold several '.'
    Op(char),
    OParen, CParen,
}

/// Splits an infix expression into `CalcToken`s, dropping whitespace.
/// Tokens are produced on demand so a consumer can stop at the first
/// `Unknown` without scanning the rest of the input.
pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source)}
    }

    fn is_numeral_char(c: &char) -> bool {
        c.is_ascii_digit() || *c == '.'
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        self.src.skip_ws();
        self.src.ignore();
        if self.src.accept_if(char::is_ascii_digit).is_some() {
            self.src.skip_all(Self::is_numeral_char);
            return Some(CalcToken::Numeral(self.src.extract_string()));
        }
        let next = self.src.next()?;
        self.src.ignore();
        Some(match next {
            '(' => CalcToken::OParen,
            ')' => CalcToken::CParen,
            '+' | '-' | '*' | '/' => CalcToken::Op(next),
            other => CalcToken::Unknown(other),
        })
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CalcToken, CalcTokenizer};

    fn tokenize(input: &str) -> Vec<CalcToken> {
        CalcTokenizer::new(input.chars()).collect()
    }

    #[test]
    fn basic_ops() {
        let expect = vec![
            CalcToken::Numeral(format!("3")),
            CalcToken::Op('+'),
            CalcToken::Numeral(format!("4")),
            CalcToken::Op('*'),
            CalcToken::Numeral(format!("2")),
            CalcToken::Op('/'),
            CalcToken::OParen,
            CalcToken::Numeral(format!("1")),
            CalcToken::Op('-'),
            CalcToken::Numeral(format!("5")),
            CalcToken::CParen,
        ];
        assert_eq!(tokenize("3+4*2/(1-5)"), expect);
    }

    #[test]
    fn whitespace() {
        let expect = vec![
            CalcToken::Numeral(format!("12.5")),
            CalcToken::Op('-'),
            CalcToken::Numeral(format!("7")),
        ];
        assert_eq!(tokenize(" \t12.5\n -   7 \r\n"), expect);
        assert_eq!(tokenize("   "), vec![]);
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn numerals_are_not_validated() {
        assert_eq!(tokenize("1.2.3"), vec![CalcToken::Numeral(format!("1.2.3"))]);
        assert_eq!(tokenize("7."), vec![CalcToken::Numeral(format!("7."))]);
        assert_eq!(tokenize("1 2"), vec![
            CalcToken::Numeral(format!("1")),
            CalcToken::Numeral(format!("2")),
        ]);
    }

    #[test]
    fn unknown_chars() {
        assert_eq!(tokenize(".5"), vec![
            CalcToken::Unknown('.'),
            CalcToken::Numeral(format!("5")),
        ]);
        assert_eq!(tokenize("2+a"), vec![
            CalcToken::Numeral(format!("2")),
            CalcToken::Op('+'),
            CalcToken::Unknown('a'),
        ]);
        assert_eq!(tokenize("2^3%"), vec![
            CalcToken::Numeral(format!("2")),
            CalcToken::Unknown('^'),
            CalcToken::Numeral(format!("3")),
            CalcToken::Unknown('%'),
        ]);
    }

    #[test]
    fn lazy_tokens() {
        let mut lx = CalcTokenizer::new("(1)x".chars());
        assert_eq!(lx.next(), Some(CalcToken::OParen));
        assert_eq!(lx.next(), Some(CalcToken::Numeral(format!("1"))));
        assert_eq!(lx.next(), Some(CalcToken::CParen));
        assert_eq!(lx.next(), Some(CalcToken::Unknown('x')));
        assert_eq!(lx.next(), None);
    }
}
