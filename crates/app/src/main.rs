use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use services::{HttpFetcher, QuizConfig, SessionController};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;
use ui::{ActionOutcome, ScreenVm, help_line, parse_action, perform, render_screen, welcome_banner};

/// True/false quiz in the terminal.
#[derive(Parser, Debug)]
#[command(name = "quiz", version)]
struct Args {
    /// URL of the subject index. Overrides `QUIZ_SUBJECTS_URL`.
    #[arg(long)]
    subjects_url: Option<String>,
    /// Log more (`-v` info, `-vv` debug). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> QuizConfig {
        let config = QuizConfig::from_env();
        match self.subjects_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => config.with_subjects_url(url),
            _ => config,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

type InputLines = Lines<BufReader<Stdin>>;

async fn prompt(lines: &mut InputLines, text: &str) -> Result<Option<String>> {
    let mut stdout = std::io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    lines.next_line().await.context("reading from stdin")
}

async fn run(args: Args) -> Result<()> {
    let config = args.config();
    tracing::info!(subjects_url = %config.subjects_url, "starting quiz");

    let mut controller = SessionController::new(Arc::new(HttpFetcher::new()), &config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", welcome_banner());
    loop {
        let screen = controller.state().screen();
        print!("{}", render_screen(&ScreenVm::from(controller.state())));
        println!("{}", help_line(screen));

        let Some(line) = prompt(&mut lines, "> ").await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(action) = parse_action(&line, screen) else {
            println!("Unrecognised input. {}", help_line(screen));
            continue;
        };

        match perform(&mut controller, action).await {
            ActionOutcome::Continue => {}
            ActionOutcome::NeedsAcknowledgement(message) => {
                if prompt(&mut lines, &format!("{message}\n")).await?.is_none() {
                    break;
                }
            }
            ActionOutcome::Rejected(message) => println!("{message}"),
            ActionOutcome::Quit => break,
        }
        println!();
    }

    tracing::debug!(controller = ?controller, "quiz closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flag_counts() {
        let args = Args::parse_from(["quiz", "-vv"]);
        assert_eq!(args.verbose, 2);
        assert!(args.subjects_url.is_none());
    }

    #[test]
    fn subjects_url_flag_overrides_config() {
        let args = Args::parse_from(["quiz", "--subjects-url", "https://data.test/s.json"]);
        assert_eq!(args.config().subjects_url, "https://data.test/s.json");
    }
}
