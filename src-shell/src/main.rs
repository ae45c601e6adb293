//! Weather Shell - terminal host
//!
//! Stands in for the mobile toolkit: reads gestures as line commands from
//! stdin and prints every frame the main screen publishes.
//!
//! Usage: `weather-shell [config.json]`

mod commands;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use commands::{ShellCommand, HELP};
use weather_core::{Config, MainScreen, ScreenContent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading config {}", path))?,
        None => Config::default(),
    };

    weather_core::init_logging(&config.log_filter);

    let placeholder = config.search_placeholder.clone();
    let screen = MainScreen::mount(config)?;

    // Draw every published frame, including intermediate animation steps
    let mut renders = screen.subscribe();
    let printer = tokio::spawn(async move {
        while renders.changed().await.is_ok() {
            let request = renders.borrow_and_update().clone();
            println!("\n{}", ScreenContent::compose(&request, &placeholder));
        }
    });

    println!("{}", screen.content());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        if command.apply(&screen) {
            continue;
        }

        match command {
            ShellCommand::Show => println!("{}", screen.content()),
            ShellCommand::Json => println!("{}", serde_json::to_string_pretty(&screen.content())?),
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
            _ => {}
        }
    }

    screen.unmount();
    printer.abort();
    tracing::info!("Weather shell exiting");

    Ok(())
}
