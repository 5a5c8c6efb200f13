// repl.rs

use std::io::{self, Write};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};
use tracing::info;

use crate::calculator::Calculator;
use crate::commands::{run_command, Flow};
use crate::completion::CommandCompleter;
use crate::config::Config;
use crate::error::CommandError;
use crate::parser::parse_command;
use crate::util::emit_line;

/// One calculator plus the line handling around it.
#[derive(Default)]
pub struct Session {
    calc: Calculator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Run one line. Blank lines are skipped; rejected lines report to `err`
    /// and leave the calculator untouched.
    pub fn handle_line<W: Write, E: Write>(&mut self, line: &str, out: W, err: E) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match parse_command(line) {
            Ok(cmd) => run_command(cmd, &mut self.calc, out),
            Err(e) => {
                emit_line(err, &e)?;
                Ok(Flow::Continue)
            }
        }
    }
}

/// Execute a single command line and return the process exit status:
/// 0 on success or an empty line, 2 on a rejected command, `N` for `exit N`.
pub fn run_once<W: Write, E: Write>(line: &str, out: W, err: E) -> Result<i32> {
    let mut calc = Calculator::new();
    let cmd = match parse_command(line) {
        Ok(cmd) => cmd,
        Err(CommandError::Empty) => return Ok(0),
        Err(e) => {
            emit_line(err, &e).context("writing error")?;
            return Ok(2);
        }
    };
    match run_command(cmd, &mut calc, out).context("writing output")? {
        Flow::Continue => Ok(0),
        Flow::Exit(code) => Ok(code),
    }
}

pub fn start_repl(config: &Config) -> Result<i32> {
    let editor_config = EditorConfig::builder()
        .completion_type(CompletionType::List)
        .max_history_size(config.editor_history)
        .context("line editor history size")?
        .auto_add_history(true)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));
    let mut session = Session::new();
    info!(prompt = %config.prompt, "session started");
    let code = loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let flow = session
                    .handle_line(&line, io::stdout().lock(), io::stderr().lock())
                    .context("writing output")?;
                if let Flow::Exit(code) = flow {
                    break code;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break 0,
            Err(err) => return Err(err).context("reading input"),
        }
    };
    info!(records = session.calculator().len(), code, "session ended");
    Ok(code)
}
