//! Tenkey: a keypad-driven desk calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! tenkey                      # Interactive TUI
//! tenkey --keys "5+3="        # Headless replay, prints 8
//! RUST_LOG=debug tenkey --keys "6/0=" --log-file tenkey.log
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing_subscriber::EnvFilter;

use tenkey_tui::{replay_keys, ui, App, Cli, InputHandler, TuiResult};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> TuiResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    if let Some(keys) = cli.keys.as_deref() {
        let display = replay_keys(keys)?;
        println!("{display}");
        return Ok(());
    }

    run_tui()
}

/// Wires tracing to the `--log-file` target, or to stderr in headless mode.
/// The interactive TUI owns the screen, so without a file it stays silent.
fn init_tracing(cli: &Cli) -> TuiResult<()> {
    if cli.quiet {
        return Ok(());
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(path) = &cli.log_file {
        let file = File::options().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if cli.keys.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_tui() -> TuiResult<()> {
    tracing::info!("starting interactive session");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = event_loop(&mut stdout);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;

    result
}

fn event_loop(out: &mut impl Write) -> TuiResult<()> {
    let mut app = App::new();
    let handler = InputHandler::new();

    execute!(out, Clear(ClearType::All))?;
    loop {
        ui::paint(out, &app)?;

        match event::read()? {
            Event::Key(key) => app.handle_action(handler.handle_key(key)),
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.handle_click(mouse.column, mouse.row);
                }
            }
            Event::Resize(_, _) => execute!(out, Clear(ClearType::All))?,
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
