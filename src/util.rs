// util.rs

use std::fmt::Display;
use std::io::{self, Write};

/// Map a closed reader (`BrokenPipe`) to success; other errors pass through.
pub fn ignore_broken_pipe(res: io::Result<()>) -> io::Result<()> {
    match res {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Write `line` plus a newline, tolerating a closed pipe.
pub fn emit_line<W: Write, D: Display + ?Sized>(mut w: W, line: &D) -> io::Result<()> {
    ignore_broken_pipe(writeln!(w, "{}", line))
}
