mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use dockyard_common::DockError;
use dockyard_config::DockConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Config from `--config`, or the platform default. Falls back to
/// defaults on any error.
fn load_config(path: Option<&Path>) -> DockConfig {
    let loaded = match path {
        Some(path) => dockyard_config::load_from_path(path),
        None => dockyard_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("dockyard: config load failed, using defaults: {e}");
        DockConfig::default()
    })
}

/// A bare level becomes a `dockyard=<level>` directive.
fn log_directive(arg: Option<&str>, config: &DockConfig) -> String {
    match arg {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("dockyard={level}"),
        None => config.logging.level.directive().to_string(),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args, config: &DockConfig) -> Result<(), DockError> {
    match args.command {
        Command::Inspect {
            layout,
            width,
            height,
            json,
        } => {
            let path = commands::resolve_layout(layout, config)?;
            let mut docker = commands::read_layout(&path, config)?;
            let placements = commands::inspect(&mut docker, width, height);
            if json {
                println!("{}", commands::format_json(&placements));
            } else {
                print!("{}", commands::format_table(&placements));
            }
        }
        Command::Validate { layout } => {
            let path = commands::resolve_layout(layout, config)?;
            println!("{}", commands::validate(&path, config)?);
        }
        Command::Demo { output } => {
            let path = commands::resolve_layout(output, config)?;
            let docker = commands::demo(config);
            dockyard_layout::save_layout_to_path(&docker, &path)?;
            println!("wrote sample layout to {}", path.display());
        }
        Command::Config => println!("{}", dockyard_config::config_to_json(config)),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = load_config(args.config.as_deref());
    init_logging(&log_directive(args.log_level.as_deref(), &config));
    tracing::debug!("dockyard v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("dockyard: {e}");
            ExitCode::FAILURE
        }
    }
}
