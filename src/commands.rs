// commands.rs

use std::io::{self, Write};

use itertools::Itertools;

use crate::calculator::Calculator;
use crate::format::format_number;
use crate::parser::Command;
use crate::util::{emit_line, ignore_broken_pipe};

pub const COMMAND_NAMES: [&str; 6] = ["add", "multiply", "mul", "history", "help", "exit"];

const USAGE: [(&str, &str); 5] = [
    ("add A B | A + B", "add two numbers"),
    ("multiply A B | A * B", "multiply two numbers"),
    ("history [N]", "show the last N records (all by default)"),
    ("help", "show this message"),
    ("exit [CODE]", "leave the session"),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub fn run_command<W: Write>(cmd: Command, calc: &mut Calculator, mut out: W) -> io::Result<Flow> {
    match cmd {
        Command::Apply { op, a, b } => {
            let result = calc.apply(op, a, b);
            emit_line(&mut out, &format_number(result))?;
        }
        Command::History(n) => {
            let history = calc.entries();
            let n = n.unwrap_or(history.len());
            for (i, record) in history.last_n(n) {
                emit_line(&mut out, &format_args!("{:>5}  {}", i, record))?;
            }
        }
        Command::Help => {
            let width = USAGE.iter().map(|(u, _)| u.len()).max().unwrap_or(0);
            let text = USAGE
                .iter()
                .map(|(usage, what)| format!("  {:<width$}  {}", usage, what, width = width))
                .join("\n");
            emit_line(&mut out, &text)?;
        }
        Command::Exit(code) => return Ok(Flow::Exit(code)),
    }
    ignore_broken_pipe(out.flush())?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Op;

    fn run(cmd: Command, calc: &mut Calculator) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = run_command(cmd, calc, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn apply_prints_result_and_records() {
        let mut calc = Calculator::new();
        let (flow, out) = run(Command::Apply { op: Op::Add, a: 5.0, b: 3.0 }, &mut calc);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "8\n");
        assert_eq!(calc.get_history(), vec!["5 + 3 = 8"]);
    }

    #[test]
    fn history_listing() {
        let mut calc = Calculator::new();
        calc.add(5.0, 3.0);
        calc.multiply(4.0, 7.0);
        calc.add(0.5, 0.25);
        let (_, all) = run(Command::History(None), &mut calc);
        assert_eq!(all, "    1  5 + 3 = 8\n    2  4 * 7 = 28\n    3  0.5 + 0.25 = 0.75\n");
        let (_, tail) = run(Command::History(Some(1)), &mut calc);
        assert_eq!(tail, "    3  0.5 + 0.25 = 0.75\n");
        let (_, none) = run(Command::History(Some(0)), &mut calc);
        assert_eq!(none, "");
        assert_eq!(calc.len(), 3);
    }

    #[test]
    fn help_lists_every_form() {
        let mut calc = Calculator::new();
        let (_, out) = run(Command::Help, &mut calc);
        for (usage, _) in USAGE {
            assert!(out.contains(usage), "missing {}", usage);
        }
        assert!(calc.is_empty());
    }

    #[test]
    fn exit_stops_without_output() {
        let mut calc = Calculator::new();
        assert_eq!(run(Command::Exit(4), &mut calc), (Flow::Exit(4), String::new()));
    }
}
