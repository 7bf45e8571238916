mod config;
mod logging;
mod source;

use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use glint_engine::{StatusAggregator, StatusObserver};
use glint_protocol::StatusPresentation;
use tracing::info;

use config::{config_path, ensure_dirs, LogLevel, UserConfig};
use logging::LogMode;
use source::DeviceSource;

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the current power status once (default)
    Status {
        /// Emit the full presentation as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Poll batteries and print the status whenever it changes
    Watch {
        /// Polling interval, e.g. "2s" or "500ms"
        #[arg(short, long, value_parser = humantime::parse_duration)]
        interval: Option<Duration>,
    },

    /// Show or edit configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Battery status indicator engine with a plain-text CLI
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Visibility policy override (present, charge, never)
    #[arg(short, long, global = true)]
    visibility: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = ensure_dirs();

    let cli = Cli::parse();
    let mut config = UserConfig::load();
    config.merge_with_args(cli.visibility.as_deref(), None);
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);

    match cli.command {
        Some(Commands::Watch { interval }) => {
            let _guard = logging::init(config.log_level, LogMode::File, log_level_override);
            run_watch(config, interval)
        }
        Some(Commands::Config { path, reset }) => run_config(path, reset),
        Some(Commands::Status { json }) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            run_status(config, json)
        }
        None => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            run_status(config, false)
        }
    }
}

fn run_status(config: UserConfig, json: bool) -> Result<()> {
    let source = DeviceSource::new()?;
    let mut aggregator = StatusAggregator::new(config.visibility);
    aggregator.set_devices(source.snapshot()?);

    if json {
        let doc = serde_json::json!({
            "visible": aggregator.is_visible(),
            "presentation": aggregator.presentation(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    match aggregator.presentation() {
        Some(presentation) => {
            println!("{}", presentation.detailed_text);
            if let Some(icon) = presentation.icon.first() {
                println!("icon: {}", icon);
            }
            println!(
                "visible: {}",
                if aggregator.is_visible() { "yes" } else { "no" }
            );
        }
        None => println!("No battery found."),
    }

    Ok(())
}

/// Prints presentation and visibility changes as they happen.
///
/// The engine republishes on every poll; only actual text changes are
/// worth a line of output.
#[derive(Default)]
struct PrintObserver {
    last: Option<String>,
    none_reported: bool,
}

impl StatusObserver for PrintObserver {
    fn presentation_changed(&mut self, presentation: &StatusPresentation) {
        if self.last.as_deref() != Some(&presentation.detailed_text) {
            println!("{}", presentation.detailed_text);
            self.last = Some(presentation.detailed_text.clone());
        }
        self.none_reported = false;
    }

    fn no_primary_device(&mut self) {
        if !self.none_reported {
            println!("No battery found.");
            self.none_reported = true;
        }
        self.last = None;
    }

    fn visibility_changed(&mut self, visible: bool) {
        println!("indicator {}", if visible { "shown" } else { "hidden" });
    }
}

fn run_watch(config: UserConfig, interval: Option<Duration>) -> Result<()> {
    let interval = interval.unwrap_or(Duration::from_millis(config.refresh_ms));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_watch_loop(config, interval))
}

async fn run_watch_loop(config: UserConfig, interval: Duration) -> Result<()> {
    info!(interval_ms = interval.as_millis() as u64, "watch started");

    let source = DeviceSource::new()?;
    let mut aggregator = StatusAggregator::new(config.visibility);
    aggregator.register(Box::new(PrintObserver::default()));

    let mut tick = tokio::time::interval(interval);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                aggregator.set_devices(source.snapshot()?);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("watch stopped");
                return Ok(());
            }
        }
    }
}

fn run_config(path: bool, reset: bool) -> Result<()> {
    let config_file = config_path();

    if path {
        println!("{}", config_file.display());
        return Ok(());
    }

    if reset {
        let config = UserConfig::default();
        config.save()?;
        println!("Config reset to defaults at: {}", config_file.display());
        return Ok(());
    }

    let config = UserConfig::load();
    println!("Config file: {}", config_file.display());
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
