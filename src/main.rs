use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};
use ytdlp_server::{Config, MediaDownloader, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides server.api.bind_address)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Path to the yt-dlp executable (overrides tool.binary_path)
    #[arg(long = "yt-dlp", value_name = "PATH")]
    yt_dlp: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("Application error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(bind) = args.bind {
        config.server.api.bind_address = bind;
    }
    if let Some(path) = args.yt_dlp {
        config.tool.binary_path = Some(path);
    }

    let downloader = Arc::new(MediaDownloader::new(config)?);
    if !downloader.tool_available() {
        warn!("yt-dlp was not found; requests will fail until it is installed");
    }

    let config = downloader.config().clone();
    ytdlp_server::api::start_api_server(downloader, config).await
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
