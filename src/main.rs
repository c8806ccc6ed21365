use anyhow::{Context, Result};
use log::{error, info, warn};
use spi_machine_io::boards::{self, Boards};
use spi_machine_io::{read_register, Config};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize logging
    init_logger();

    // Parse command line arguments
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/etc/spi-machine-io/config.yaml".to_string());

    info!("SPI machine I/O bridge starting...");
    info!("Loading configuration from: {}", config_path);

    // Load configuration
    let config_content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config file: {}", config_path))?;
    let config = Config::from_yaml(&config_content)
        .context("Failed to parse configuration file")?;

    info!("Configuration loaded successfully");

    // Validate SPI devices
    for board in [
        &config.boards.adc,
        &config.boards.encoder,
        &config.boards.counter,
    ] {
        if !PathBuf::from(&board.device).exists() {
            error!("SPI device not found: {}", board.device);
            return Err(anyhow::anyhow!("SPI device not found: {}", board.device));
        }
    }

    // Bring up the boards; a single bad board is reported but does not take
    // the others down with it.
    let mut boards = Boards::from_config(&config);
    let mut usable = 0;
    for (name, result) in boards.initialize() {
        match result {
            Ok(()) => usable += 1,
            Err(e) => warn!("{} board failed to initialize: {}", name, e),
        }
    }
    if usable == 0 {
        return Err(anyhow::anyhow!("no SPI board could be initialized"));
    }

    // Startup sample: register 0 of each board that came up.
    for (name, dev) in [
        ("ADC", &mut boards.adc),
        ("encoder", &mut boards.encoder),
        ("counter", &mut boards.counter),
    ] {
        if dev.is_open() {
            let value = read_register(dev, 0)
                .context(format!("startup read of {} register 0 failed", name))?;
            info!("{} register 0: {:#010x}", name, value);
        }
    }

    // Graceful shutdown on SIGINT/SIGTERM
    let term = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&term))
        .context("Failed to setup SIGTERM handler")?;
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&term))
        .context("Failed to setup SIGINT handler")?;

    info!("Polling ADC inputs every {}ms", config.polling.interval_ms);

    let interval = Duration::from_millis(config.polling.interval_ms);
    while !term.load(Ordering::Relaxed) {
        if boards.adc.is_open() {
            let sample = boards::read_adc_inputs(&mut boards.adc)
                .context("ADC input scan failed")?;
            info!("ADC inputs: {:?}", sample.channels);
        }

        thread::sleep(interval);
    }

    info!("Received shutdown signal, closing SPI devices");
    boards.close_all();
    info!("SPI machine I/O bridge shutdown complete");
    Ok(())
}

fn init_logger() {
    // Use `env_logger` for logging. Systemd/journald will capture stdout/stderr.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
}
