// Entrypoint for the CLI application.
// - Keeps `main` small: load config, set up logging, build the API client
//   and hand it to the menu loop.
// - Logs go to stderr so the menu on stdout stays clean when piped.

use anyhow::Result;
use clap::Parser;
use gutendex_cli::api::ApiClient;
use gutendex_cli::config::Config;
use gutendex_cli::ui::{LinePrompter, Session, TerminalPrompter};
use is_terminal::IsTerminal;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gutendex-cli")]
#[command(author, version, about = "Browse the Gutendex book catalog from the terminal", long_about = None)]
struct Cli {
    /// Catalog endpoint (overrides config and GUTENDEX_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Read answers line by line even on a terminal
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let filter = if cli.verbose {
        "gutendex_cli=debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    debug!(base_url = %config.base_url, "configuration loaded");

    let api = ApiClient::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.plain && io::stdin().is_terminal() {
        let mut prompter = TerminalPrompter;
        Session::new(&api, &mut prompter, &mut out)
            .with_progress(true)
            .run()
    } else {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock());
        Session::new(&api, &mut prompter, &mut out).run()
    }
}
