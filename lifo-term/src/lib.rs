use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lifo::{Brackets, Command, Config, Session};

#[derive(Debug, Parser)]
#[clap(name = "lifo", about = "Stack based bracket matching, postfix evaluation and undoable editing")]
pub struct Opts {
    /// Append logs to this file. Filtered with `LIFO_LOG`.
    #[clap(long)]
    pub log: Option<PathBuf>,
    /// Treat `<` and `>` as brackets too.
    #[clap(long)]
    pub angle_brackets: bool,
    #[clap(subcommand)]
    pub cmd: Cmd,
}

impl Opts {
    pub fn config(&self) -> Config {
        let mut brackets = Brackets::default();
        if self.angle_brackets {
            brackets = brackets.with_angle_brackets();
        }
        Config { brackets, ..Default::default() }
    }
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Check that every bracket is closed in the right order.
    Balanced { expr: String },
    /// Print the byte offset of the bracket matching the one at `byte`.
    Match { expr: String, byte: usize },
    /// Check for parentheses that enclose no operator.
    Redundant { expr: String },
    /// Evaluate a whitespace separated postfix expression.
    Postfix { expr: String },
    Reverse { text: String },
    /// Read editing and navigation commands from stdin, one per line.
    Script,
}

pub fn run(cmd: Cmd, config: &Config, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    match cmd {
        Cmd::Balanced { expr } => writeln!(out, "{}", config.brackets.is_balanced(&expr))?,
        Cmd::Match { expr, byte } => match config.brackets.find_match(&expr, byte) {
            Some(byte) => writeln!(out, "{byte}")?,
            None => writeln!(out, "no match")?,
        },
        Cmd::Redundant { expr } => writeln!(out, "{}", lifo::has_redundant_parentheses(&expr)?)?,
        Cmd::Postfix { expr } => {
            let value = config
                .evaluator()
                .eval(&expr)
                .with_context(|| format!("failed to evaluate `{expr}`"))?;
            writeln!(out, "{value}")?
        }
        Cmd::Reverse { text } => writeln!(out, "{}", lifo::reverse(&text))?,
        Cmd::Script => run_script(input, out)?,
    }

    Ok(())
}

/// Executes each line of `input` against a fresh [`Session`] and writes one line of output per command.
/// Blank lines are skipped and lines that fail to parse are reported without stopping the script.
pub fn run_script(input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(cmd) => writeln!(out, "{}", session.execute(cmd))?,
            Err(err) => {
                tracing::warn!(%line, %err, "invalid command");
                writeln!(out, "error: {err}")?
            }
        }
    }

    out.flush()
}
