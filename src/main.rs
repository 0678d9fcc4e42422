use anyhow::Context;
use clap::Parser;
use estate_carousel::config::Config;
use std::path::PathBuf;

/// Terminal showcase for the estate carousels.
#[derive(Debug, Parser)]
#[command(name = "estate-carousel", version, about)]
struct Args {
    /// Config file (default: platform config dir/estate-carousel/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Start the hero slider without autoplay
    #[arg(long)]
    no_autoplay: bool,

    /// Hero autoplay interval in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    apply_overrides(&mut config, &args);
    config.validate().context("invalid command line overrides")?;

    let log_path = config.logging.log_path();
    estate_carousel::logging::init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    tracing::info!(config = %path.display(), "starting showcase");

    estate_carousel::ui::run(config)
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.no_autoplay {
        config.hero.autoplay = false;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.hero.interval_ms = interval_ms;
    }
}
