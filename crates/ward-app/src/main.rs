mod cli;
mod list;
mod replay;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use ward_common::WardError;
use ward_config::WardConfig;

use cli::{Args, Command};

const DEFAULT_LOG_DIRECTIVE: &str = "ward=info";

fn log_filter(directive: &str) -> EnvFilter {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log level '{directive}', using info");
        Directive::from(LevelFilter::INFO)
    });
    EnvFilter::from_default_env().add_directive(directive)
}

/// Load the config named on the command line (or the default one), falling
/// back to built-in defaults if it cannot be used.
fn load_config(args: &Args) -> WardConfig {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    ward_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WardConfig::default()
    })
}

fn check(path: &Path) -> Result<(), WardError> {
    let config = ward_config::load_config(Some(path))?;
    println!(
        "{}: ok ({} shortcuts, prefix timeout {} ms)",
        path.display(),
        config.shortcuts.len(),
        config.dispatch.prefix_timeout_ms
    );
    for duplicate in ward_config::shortcuts::find_duplicates(&config.shortcuts) {
        println!("warning: {duplicate}");
    }
    Ok(())
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

async fn run(args: Args, filter: FilterHandle) -> Result<(), WardError> {
    if let Command::Check { ref path } = args.command {
        return check(path);
    }

    let config = load_config(&args);
    if args.log_level.is_none() {
        let directive = format!("ward={}", config.logging.level.as_directive());
        if let Err(e) = filter.reload(log_filter(&directive)) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
    tracing::debug!(
        shortcuts = config.shortcuts.len(),
        prefix_timeout_ms = config.dispatch.prefix_timeout_ms,
        "Config loaded"
    );

    match args.command {
        Command::List(ref scope) => {
            let index = list::active_index(&config, scope);
            print!("{}", list::render(&index));
        }
        Command::Replay {
            ref script,
            ref scope,
        } => {
            for action in replay::replay_file(&config, scope, script).await? {
                println!("{action}");
            }
        }
        Command::Check { .. } => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Until the config is read, only --log-level or the default applies
    let directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let (filter, filter_handle) = reload::Layer::new(log_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("ward-keys v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args, filter_handle).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
