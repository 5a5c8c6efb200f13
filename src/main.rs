use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use ledger_calc::config::Config;
use ledger_calc::repl::{run_once, start_repl};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.as_slice() {
        [] => {
            let config = Config::from_env().context("loading configuration")?;
            start_repl(&config)?
        }
        words => run_once(&words.join(" "), std::io::stdout().lock(), std::io::stderr().lock())?,
    };
    std::process::exit(code)
}
