mod format;
mod logger;

use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calc", version, about = "Evaluate arithmetic expressions")]
struct Args {
    /// Expression to evaluate, words are joined with spaces. Without one
    /// the first word of stdin is used, or a prompt if stdin is a terminal
    expr: Vec<String>,

    /// Show the postfix and normalized infix forms before the result
    #[arg(long)]
    explain: bool,

    /// Log to stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Where the prompt keeps its history [default: ~/.calc_history]
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Don't load or save prompt history
    #[arg(long)]
    no_history: bool,
}

mod repl {
    use crate::format::format_result;
    use shunting::{ShuntingParser, calc};

    pub fn evalexpr(input: &str, explain: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if explain {
            if let Ok(rpn) = ShuntingParser::parse_str(input) {
                lines.push(format!("Postfix: {}", rpn));
                if let Some(infix) = rpn.to_infix() {
                    lines.push(format!("Infix: {}", infix));
                }
            }
        }
        match calc(input) {
            Ok(result) => lines.push(format!("Result: {}", format_result(result))),
            Err(e) => {
                log::info!("{:?} failed: {:?}", input, e);
                lines.push(format!("Error: {}", e));
            }
        }
        lines
    }

    // mirrors reading a single word: everything past the first word is dropped
    pub fn first_word(input: &str) -> &str {
        input.split_whitespace().next().unwrap_or("")
    }

}

fn interactive(args: &Args) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let histpath = match (&args.history, args.no_history) {
        (_, true) => None,
        (Some(path), false) => Some(path.clone()),
        (None, false) => dirs::home_dir().map(|h| h.join(".calc_history")),
    };
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                history_ok("record", rl.add_history_entry(&line));
                for out in repl::evalexpr(&line, args.explain) {
                    println!("{}", out);
                }
            }
        }
    }
    if let Some(path) = &histpath {
        history_ok("save", rl.save_history(path));
    }
    Ok(())
}

// history trouble never ends the session, it's only reported
fn history_ok<T>(action: &str, res: rustyline::Result<T>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("couldn't {} history: {}", action, e);
            None
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let input = if !args.expr.is_empty() {
        args.expr.join(" ")
    } else if std::io::stdin().is_terminal() {
        return interactive(&args);
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| e.to_string())?;
        repl::first_word(&buf).to_string()
    };
    for out in repl::evalexpr(&input, args.explain) {
        println!("{}", out);
    }
    Ok(())
}
