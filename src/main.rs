use calc_shell::dispatching::*;
use calc_shell::scanning::*;

use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// An interactive calculator. Statements end with `;`, `#` starts a
/// comment, and `print` or a bare expression shows a value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs these statements instead of reading standard input.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Runs the statements in this file instead of reading standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Never shows the prompt.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut session = Session::new(std::io::stdout(), std::io::stderr());

    if let Some(source) = args.eval {
        session.run(&mut CharScanner::new(source.chars()))?;
    } else if let Some(path) = args.file {
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        session.run(&mut CharScanner::new(source.chars()))?;
    } else {
        let stdin = std::io::stdin();
        let prompt = (!args.quiet && stdin.is_terminal()).then(std::io::stdout);
        let mut input = LineInput::new(stdin.lock(), prompt);
        session.run(&mut CharScanner::new(input.by_ref()))?;
        if let Some(e) = input.take_failure() {
            return Err(e).context("failed to read standard input");
        }
    }

    Ok(())
}
