use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use waypath_cli::config::Config;
use waypath_cli::{resolve_config, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = resolve_config(&args, Config::from_env())?;

    // Logs go to stderr so stdout stays pure JSON.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cfg.log_json {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).json().init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }
    tracing::info!(core_version = %waypath_core::version(), "starting waypath");

    match run(&args, &cfg) {
        Ok(res) => {
            println!("{}", serde_json::to_string_pretty(&res)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "search failed");
            Err(e)
        }
    }
}
