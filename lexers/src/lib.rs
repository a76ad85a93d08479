mod scanner;
mod tokenizer;

pub use scanner::Scanner;
pub use tokenizer::{CalcToken, CalcTokenizer};
