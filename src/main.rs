mod api;
mod app;
mod cli;
mod color;
mod event;
mod export;
mod tui;
mod types;
mod ui;

use std::sync::mpsc;

use anyhow::Result;
use clap::Parser;

use api::StoreClient;

fn main() -> Result<()> {
    init_tracing();
    let cli_opts = cli::Cli::parse();
    let client = StoreClient::new(&api_base(cli_opts.api_base));
    if let Some(command) = cli_opts.command {
        return cli::run(command, &client);
    }

    let (request_tx, request_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    api::spawn_worker(client, request_rx, event_tx);

    let mut app = app::App::new(request_tx, event_rx);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}

fn api_base(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("PALETTR_API_BASE").ok())
        .unwrap_or_else(|| api::DEFAULT_API_BASE.to_string())
}

/// Diagnostics go to stderr so they never fight the TUI for stdout.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
