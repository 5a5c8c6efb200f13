// parser.rs

use tracing::debug;

use crate::error::CommandError;
use crate::format::Op;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    Apply { op: Op, a: f64, b: f64 },
    History(Option<usize>),
    Help,
    Exit(i32),
}

fn is_number(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

fn is_prefix(s: &str) -> bool {
    matches!(s, "add" | "multiply" | "mul" | "+" | "*")
}

/// Split a line into tokens. `+` and `*` stand alone even without spaces,
/// unless the `+` is a sign or belongs to an exponent.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if !cur.is_empty() {
                    tokens.push(std::mem::take(&mut cur));
                }
            }
            '*' => {
                if !cur.is_empty() {
                    tokens.push(std::mem::take(&mut cur));
                }
                tokens.push("*".to_string());
            }
            '+' => {
                let exponent = (cur.ends_with('e') || cur.ends_with('E'))
                    && is_number(&cur[..cur.len() - 1]);
                // After a number a bare `+` is infix, except inside a prefix command.
                let sign = cur.is_empty()
                    && matches!(chars.peek(), Some(c) if c.is_ascii_digit() || *c == '.')
                    && (tokens.first().is_some_and(|t| is_prefix(t))
                        || !tokens.last().is_some_and(|t| is_number(t)));
                if exponent || sign {
                    cur.push(ch);
                } else {
                    if !cur.is_empty() {
                        tokens.push(std::mem::take(&mut cur));
                    }
                    tokens.push("+".to_string());
                }
            }
            _ => cur.push(ch),
        }
    }
    if !cur.is_empty() {
        tokens.push(cur);
    }
    tokens
}

fn number(token: &str) -> Result<f64, CommandError> {
    token
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

fn binary(op: Op, args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [a, b] => Ok(Command::Apply { op, a: number(a)?, b: number(b)? }),
        [_, _, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
        _ => Err(CommandError::MissingOperand { command: op.name() }),
    }
}

fn infix(op: Op, lhs: &str, rest: &[&str]) -> Result<Command, CommandError> {
    let mut args = vec![lhs];
    args.extend_from_slice(rest);
    binary(op, &args)
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens = tokenize(line);
    let parsed = match tokens.iter().map(String::as_str).collect::<Vec<&str>>().as_slice() {
        [] => Err(CommandError::Empty),
        ["add" | "+", args @ ..] => binary(Op::Add, args),
        ["multiply" | "mul" | "*", args @ ..] => binary(Op::Multiply, args),
        ["history"] => Ok(Command::History(None)),
        ["history", n] => n
            .parse::<usize>()
            .map(|n| Command::History(Some(n)))
            .map_err(|_| CommandError::InvalidCount(n.to_string())),
        ["help"] => Ok(Command::Help),
        ["exit"] => Ok(Command::Exit(0)),
        ["exit", code] => code
            .parse::<i32>()
            .map(Command::Exit)
            .map_err(|_| CommandError::InvalidExitCode(code.to_string())),
        ["history" | "help" | "exit", .., extra] => {
            Err(CommandError::UnexpectedArgument(extra.to_string()))
        }
        [lhs, "+", rest @ ..] => infix(Op::Add, lhs, rest),
        [lhs, "*", rest @ ..] => infix(Op::Multiply, lhs, rest),
        [first, ..] => Err(CommandError::UnknownCommand(first.to_string())),
    };
    if let Err(ref e) = parsed {
        debug!(line, error = %e, "rejected command");
    }
    parsed
}
