//! Entry point of the `cometmux` daemon.

use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::FmtSubscriber;

use cometmux::config::{self, Config};
use cometmux::multiplexer::Multiplexer;
use cometmux::registry::Registry;
use cometmux::server::Server;

/// The environment variable through which the tracing filter can be
/// overridden.
const COMETMUX_LOG_VAR: &str = "RUST_LOG";

/// Block-execution multiplexer: presents a set of independent chain
/// applications to a single consensus host as one application.
#[derive(Debug, Parser)]
#[command(name = "cometmux", version, about)]
struct Opts {
    /// Path to the multiplexer configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Shorthand for `--log-level debug`
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Log filtering directive, e.g. `info` or `cometmux=debug`
    #[arg(long = "log-level", value_name = "SPEC")]
    log_level: Option<String>,

    /// Address the host-facing server listens on, e.g. `unix:///tmp/cometmux.sock`
    #[arg(long = "listen", value_name = "ADDR")]
    listen: Option<String>,
}

fn main() {
    let opts = Opts::parse();

    let mut config = match &opts.config {
        Some(path) => match config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error loading configuration: {e}");
                exit(1);
            }
        },
        None => {
            eprintln!("no configuration file given, using the default configuration");
            Config::default()
        }
    };

    if opts.verbose {
        config.log_level = "debug".to_string();
    }
    if let Some(log_level) = opts.log_level {
        config.log_level = log_level;
    }
    if let Some(listen) = opts.listen {
        config.listen_addr = listen;
    }

    init_tracing(&config.log_level);

    let registry = match Registry::from_config(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("error registering chain applications: {e}");
            exit(1);
        }
    };
    info!(apps = registry.len(), "registered chain applications");

    let mux = Multiplexer::new(Arc::new(registry));
    if let Err(e) = mux.start() {
        error!("error connecting to chain applications: {e}");
        exit(1);
    }

    let server = match Server::bind(&config.listen_addr, mux) {
        Ok(server) => server,
        Err(e) => {
            error!("error binding host-facing server: {e}");
            exit(1);
        }
    };
    if let Err(e) = server.listen() {
        error!("server terminated: {e}");
        exit(1);
    }
}

/// Installs the global tracing subscriber. An explicit `RUST_LOG` wins over
/// the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_env(COMETMUX_LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    FmtSubscriber::builder()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
