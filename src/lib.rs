//! async-dialogs
//!
//! Command line front end: parses arguments, shows the requested dialog in
//! the terminal and prints the answer as JSON on stdout.

pub mod cli;

use adialog_app::{load_settings, Dialogs};
use adialog_core::prelude::*;
use adialog_host::Document;
use adialog_tui::{run_dialog, StyleSheet};

pub use cli::{Args, Command, DialogRequest};

/// Run one dialog described by `args`
pub async fn run(args: Args) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    adialog_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("adialog v{}", env!("CARGO_PKG_VERSION"));
    info!("═══════════════════════════════════════════════════════");

    let settings = load_settings(args.config.as_deref());
    let request = args
        .command
        .into_request()
        .context("Rejected dialog options")?;
    let kind = request.kind();

    let styles = StyleSheet::from_settings(&settings.style);
    let document = Document::new();
    let dialogs = Dialogs::with_settings(document.clone(), settings);

    let answer = run_dialog(&document, &styles, cli::execute(&dialogs, request))
        .await
        .with_context(|| format!("{kind} dialog failed"))?;

    println!("{answer}");
    info!("adialog exiting");
    Ok(())
}
