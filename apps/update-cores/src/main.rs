mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use lemuroid_cores::paths::{Layout, BUNDLED_CORES_DIR};
use lemuroid_cores::registry::{self, KNOWN_CORES};
use lemuroid_cores::{link, tools, Config, SyncError, Updater};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_cores() {
    for core in KNOWN_CORES {
        let local = registry::resolve(core);
        if local == *core {
            println!("{core}");
        } else {
            println!("{core} -> {local}");
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    cfg.apply_env();
    Ok(cli.apply(cfg))
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let cfg = match load_config(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e:#}");
            return Ok(ExitCode::from(2));
        }
    };
    let plans = match registry::plan(&cfg.cores) {
        Ok(p) => p,
        Err(
            e @ (SyncError::UnknownCore(_)
            | SyncError::NoCores
            | SyncError::CoreCollision { .. }),
        ) => {
            error!("{e}");
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };

    let layout = Layout::new(&cli.root);
    let tools = tools::select(cfg.tools).context("initialising toolset")?;
    let linker = link::select(cfg.link, &layout.root().join(BUNDLED_CORES_DIR));

    info!(
        cores = plans.len(),
        root = %layout.root().display(),
        base_url = %cfg.base_url,
        toolset = tools.name(),
        "updating cores"
    );

    let updater = Updater {
        layout,
        tools,
        linker,
        base_url: cfg.base_url,
        delivery: cfg.delivery,
    };
    let summary = updater.run(&plans);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(ExitCode::from(summary.exit_code() as u8))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if cli.list {
        list_cores();
        return Ok(ExitCode::SUCCESS);
    }

    run(&cli)
}
