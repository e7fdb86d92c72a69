//! # Turret Control Binary
//!
//! Serial pan/tilt servo controller with pluggable PWM driver
//! architecture.
//!
//! # Usage
//!
//! ```bash
//! # Run against the configured serial device
//! turret_control --config /etc/turret/controller.toml
//!
//! # Simulation driver, commands from stdin (no hardware)
//! turret_control --simulate --stdio
//!
//! # Override the serial device from the CLI
//! turret_control --device /dev/ttyUSB0
//!
//! # Verbose logging
//! turret_control -v
//! ```

#![deny(warnings)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use turret_common::config::{ConfigError, ConfigLoader};
use turret_common::consts::DEFAULT_CONFIG_PATH;
use turret_control::config::ControllerConfig;
use turret_control::controller::{TurretController, run_command_loop};
use turret_control::driver_registry::DriverRegistry;
use turret_control::drivers::register_builtin_drivers;
use turret_control::link::SerialLink;

/// Turret Control - serial pan/tilt servo controller
#[derive(Parser, Debug)]
#[command(name = "turret_control")]
#[command(version)]
#[command(about = "Serial pan/tilt servo controller with pluggable PWM drivers")]
#[command(long_about = None)]
struct Args {
    /// Path to the controller configuration file (controller.toml).
    /// Without this flag the default path is tried and built-in
    /// defaults are used if it does not exist.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Serial device path (overrides the configuration file)
    #[arg(short, long, value_name = "PATH")]
    device: Option<String>,

    /// Force the simulation driver (ignores the configured driver)
    #[arg(short = 's', long)]
    simulate: bool,

    /// Read commands from stdin and write responses to stdout
    /// instead of opening a serial device
    #[arg(long)]
    stdio: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("Controller startup failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args)?;
    setup_tracing(&args, &config);

    info!(
        "Turret controller v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    info!(service = %config.shared.service_name, "Configuration loaded");

    // Determine driver to use
    let driver_name = if args.simulate {
        info!("Simulation mode enabled (exclusive)");
        "simulation".to_string()
    } else {
        config.driver.clone()
    };

    let mut registry = DriverRegistry::new();
    register_builtin_drivers(&mut registry);
    let driver = registry.create_driver(&driver_name)?;

    let mut controller = TurretController::new(driver)?;

    // Setup signal handler.
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || {
            info!("Received shutdown signal");
            running.store(false, Ordering::SeqCst);
        })?;
    }

    if args.stdio {
        info!("stdio mode: reading commands from stdin");
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_command_loop(
            stdin.lock(),
            stdout.lock(),
            &mut controller,
            &running,
            true,
        )?;
    } else {
        let device = args
            .device
            .clone()
            .unwrap_or_else(|| config.serial.device.clone());
        let link = SerialLink::open(Path::new(&device), config.serial.baud)?;
        let reader = link.try_clone()?;
        run_command_loop(reader, link, &mut controller, &running, false)?;
    }

    controller.shutdown()?;
    info!("Turret controller shutdown complete");
    Ok(())
}

/// Load and validate the configuration.
///
/// An explicit `--config` path must exist; the default path falls back
/// to built-in defaults when the file is absent.
fn load_config(args: &Args) -> Result<ControllerConfig, ConfigError> {
    let config = match &args.config {
        Some(path) => ControllerConfig::load(path)?,
        None => match ControllerConfig::load(Path::new(DEFAULT_CONFIG_PATH)) {
            Ok(config) => config,
            Err(ConfigError::FileNotFound) => ControllerConfig::default(),
            Err(e) => return Err(e),
        },
    };
    config.validate()?;
    Ok(config)
}

fn setup_tracing(args: &Args, config: &ControllerConfig) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.shared.log_level.tracing_level()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdio mode keeps stdout clean for responses.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}
