mod idea;
mod proxy;
mod render;
mod session;

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pfinder_core::{Presenter, PresenterConfig, SearchQuery, SyntheticRanges, TieringPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::proxy::ProxyClient;
use crate::session::OutputFormat;

const PROXY_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Parser)]
#[command(name = "pfinder-cli")]
#[command(about = "Amazon high-profit product finder")]
struct Cli {
    /// Base URL of the pfinder search proxy; overrides `PFINDER_PROXY_URL`.
    #[arg(long, global = true)]
    proxy_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search products by keyword (e.g. `kitchen`).
    Search {
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,

        /// Print the settled state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Read keywords from stdin, one search per line.
    Shell,
    /// Print the saved product idea.
    Idea,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = pfinder_core::load_presenter_config_from_env()
        .context("failed to load presenter configuration")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let proxy_url = resolve_proxy_url(&cli, &config).to_owned();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Some(Commands::Search { keyword, json }) => {
            let query = SearchQuery::parse(&keyword.join(" "))
                .context("search keyword must not be blank")?;
            let proxy = ProxyClient::new(&proxy_url, PROXY_TIMEOUT_SECS)?;
            let mut presenter = presenter(config.free_results);
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            session::run_search(&mut presenter, &proxy, query, format, &mut stdout).await?;
        }
        Some(Commands::Shell) => {
            let proxy = ProxyClient::new(&proxy_url, PROXY_TIMEOUT_SECS)?;
            let mut presenter = presenter(config.free_results);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run_shell(&mut presenter, &proxy, stdin, &mut stdout).await?;
        }
        Some(Commands::Idea) => write!(stdout, "{}", idea::render_idea())?,
        None => writeln!(
            stdout,
            "pfinder-cli: run `pfinder-cli search <keyword>` or `pfinder-cli --help`"
        )?,
    }

    Ok(())
}

/// `--proxy-url` wins over the configured `PFINDER_PROXY_URL`.
fn resolve_proxy_url<'a>(cli: &'a Cli, config: &'a PresenterConfig) -> &'a str {
    cli.proxy_url.as_deref().unwrap_or(&config.proxy_url)
}

fn presenter(free_results: usize) -> Presenter<StdRng> {
    Presenter::new(
        TieringPolicy::new(free_results),
        SyntheticRanges::default(),
        StdRng::from_os_rng(),
    )
}
