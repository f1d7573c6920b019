use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod help;
mod parse;
mod report;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "ngon-cli")]
#[command(about = "Interactive editor for regular triangles, squares and octagons")]
#[command(version)]
struct Cmd {
    /// Log verbosity (error, warn, info, debug, trace); logs go to stderr
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Interactive session (default)
    Repl {
        /// Read commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
        /// No banner, no prompt
        #[arg(long)]
        quiet: bool,
    },
    /// Print a JSON summary of a saved document
    Report { file: PathBuf },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(io::stderr)
        .init();
    match cmd.action.unwrap_or(Action::Repl {
        script: None,
        quiet: false,
    }) {
        Action::Repl { script, quiet } => repl(script, quiet),
        Action::Report { file } => report(file),
    }
}

fn repl(script: Option<PathBuf>, quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock(), io::stderr()).quiet(quiet);
    match script {
        Some(path) => {
            tracing::info!(script = %path.display(), "replaying script");
            let file = File::open(&path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }
    tracing::info!(figures = session.document().len(), "session finished");
    Ok(())
}

fn report(file: PathBuf) -> Result<()> {
    tracing::info!(file = %file.display(), "report");
    let summary = report::summarize(&file)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
