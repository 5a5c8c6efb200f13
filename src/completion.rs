// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMAND_NAMES;

/// Completes command names in the first word of the line.
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let word = &prefix[start..];
        if word.chars().any(char::is_whitespace) {
            return (pos, Vec::new());
        }
        let mut names: Vec<&str> = COMMAND_NAMES
            .iter()
            .copied()
            .filter(|name| name.starts_with(word))
            .collect();
        names.sort_unstable();
        let pairs = names
            .into_iter()
            .map(|n| Pair {
                display: n.to_string(),
                replacement: format!("{} ", n),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = CommandCompleter::new().candidates(line, line.len());
        (start, pairs.into_iter().map(|p| p.display).collect())
    }

    #[test]
    fn completes_first_word() {
        assert_eq!(names("mu"), (0, vec!["mul".to_string(), "multiply".to_string()]));
        assert_eq!(names("  hi"), (2, vec!["history".to_string()]));
        assert_eq!(names("h").1, vec!["help", "history"]);
    }

    #[test]
    fn nothing_after_first_word() {
        assert_eq!(names("add 5").1, Vec::<String>::new());
        assert_eq!(names("zz").1, Vec::<String>::new());
    }
}
