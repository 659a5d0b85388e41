use std::fmt;
use std::io::{self, Write};

use crossterm::event::{Event, EventStream};
use crossterm::{cursor, execute, terminal};
use futures::StreamExt;
use tracing_subscriber::EnvFilter;

use quiz_core::{Clock, Session};
use services::{DeckConfig, SessionDriver, SessionView};

mod keys;
use keys::KeyCommand;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    deck_path: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--deck <path>]");
    eprintln!();
    eprintln!("Without --deck the built-in starter deck is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DECK_PATH   deck file to load (overridden by --deck)");
    eprintln!("  QUIZ_LOG         log filter, e.g. debug or services=debug");
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut deck_path = std::env::var("QUIZ_DECK_PATH").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--deck" => {
                    deck_path =
                        Some(args.next().ok_or(ArgsError::MissingValue { flag: "--deck" })?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { deck_path })
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn render(view: &SessionView) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let (face_label, face) = if view.is_flipped {
        ("Answer", view.answer.as_str())
    } else {
        ("Question", view.question.as_str())
    };

    write!(out, "{}    {}\r\n\r\n", view.progress_label, view.score_label)?;
    write!(out, "{face_label}: {face}\r\n\r\n")?;
    if view.show_scoring {
        write!(out, "[c] correct   [w] wrong\r\n\r\n")?;
    }
    write!(
        out,
        "space flip | n/right next | p/left previous | s shuffle | r reset | q quit\r\n"
    )?;
    out.flush()
}

async fn dispatch(driver: &SessionDriver, command: KeyCommand) {
    match command {
        KeyCommand::Flip => {
            let _ = driver.flip().await;
        }
        KeyCommand::Next => driver.next().await,
        KeyCommand::Previous => driver.previous().await,
        // Rejections are logged by the driver; the key press is simply ignored.
        KeyCommand::MarkCorrect => {
            let _ = driver.mark_answer(true).await;
        }
        KeyCommand::MarkWrong => {
            let _ = driver.mark_answer(false).await;
        }
        KeyCommand::Shuffle => driver.shuffle().await,
        KeyCommand::Reset => driver.reset().await,
        KeyCommand::Quit => {}
    }
}

async fn run_terminal(driver: SessionDriver) -> Result<(), Box<dyn std::error::Error>> {
    let mut rx = driver.subscribe();
    let mut events = EventStream::new();

    let _raw = RawModeGuard::enable()?;
    render(&rx.borrow_and_update())?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                if let Event::Key(key) = event? {
                    match keys::command_for(key) {
                        Some(KeyCommand::Quit) => break,
                        Some(command) => dispatch(&driver, command).await,
                        None => {}
                    }
                }
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render(&rx.borrow_and_update())?;
            }
        }
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let config = match &args.deck_path {
        Some(path) => DeckConfig::from_path(path)?,
        None => DeckConfig::starter(),
    };
    let deck = config.into_deck()?;
    tracing::info!(cards = deck.len(), "deck loaded");

    let clock = Clock::default_clock();
    let driver = SessionDriver::new(Session::new(deck, clock.now()));

    run_terminal(driver).await
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
