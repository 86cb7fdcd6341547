use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use canute_ui::config::Config;
use canute_ui::driver::{ButtonQueue, VirtualDriver};
use canute_ui::logging::init_tracing;
use canute_ui::runtime::Runtime;
use canute_ui::state::AppState;
use canute_ui::store::Subscriber;
use canute_ui::ui::buttons::ButtonPress;
use canute_ui::ui::render::visible_lines;

/// canute-ui - braille e-reader interface
///
/// Runs against an in-memory display. Button presses are read from stdin,
/// one per line (`>`, `3`, `< long`, ...); the display is echoed to stdout.
#[derive(Parser, Debug)]
#[command(name = "canute-ui")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the book library
    #[arg(long)]
    library_dir: Option<PathBuf>,

    /// File the state is saved to on shutdown
    #[arg(long)]
    state_file: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(dir) = &self.library_dir {
            config.files.library_dir = dir.clone();
        }
        if let Some(file) = &self.state_file {
            config.files.state_file = file.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = init_tracing();
    let config = cli.load_config().context("loading configuration")?;
    tracing::info!(library = %config.files.library_dir.display(), "starting");

    let driver = VirtualDriver::new(config.display.dimensions());
    tokio::spawn(feed_buttons(driver.button_queue()));

    let mut runtime = Runtime::new(config, driver);
    if let Some(path) = log_file {
        runtime = runtime.with_log_file(path);
    }

    let mut shown = Vec::new();
    let echo: Subscriber = Box::new(move |state: &Arc<AppState>| {
        let lines = visible_lines(state);
        if lines != shown {
            println!("{}", lines.join("\n"));
            println!();
            shown = lines;
        }
    });

    let final_state = runtime.run(vec![echo]).await?;
    tracing::info!(location = %final_state.location, "stopped");
    Ok(())
}

/// Forward stdin lines to the virtual button queue until stdin closes.
async fn feed_buttons(queue: ButtonQueue) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => {}
            Ok(Some(line)) => match line.parse::<ButtonPress>() {
                Ok(press) => queue.push(press),
                Err(e) => tracing::warn!(input = %line, error = %e, "ignoring input"),
            },
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        }
    }
}
