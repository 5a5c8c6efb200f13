//! A calculator that keeps a chronological, human-readable log of every
//! addition and multiplication performed through it, plus a small command
//! language and REPL on top.

pub mod arith;
pub mod calculator;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod parser;
pub mod repl;
pub mod util;

pub use arith::{calculate_product, calculate_sum};
pub use calculator::{Calculator, SharedCalculator};
pub use format::{format_number, format_record, Op};
