//! adialog - show a dialog in the terminal and print the answer as JSON
//!
//! This is the binary entry point. All logic lives in the library.

use adialog_core::Result;
use async_dialogs::Args;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    async_dialogs::run(args).await
}
