use std::fs::OpenOptions;
use std::io::BufWriter;

use slogger::init::{init_diagnostics, LoggerConfig};
use slogger::{errorf, Logger};

fn main() -> std::io::Result<()> {
    init_diagnostics();

    let path = std::env::temp_dir().join("slogger-demo.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // SLOGGER_FORMAT / SLOGGER_LEVEL pick the format and threshold.
    let config = LoggerConfig::from_env().unwrap_or_default();
    let logger = Logger::from_config(&config).with_writer(BufWriter::new(file));

    logger.info("service started");
    logger
        .with_fields(&["user_id", "42", "reason", "invalid password"])
        .warn("authentication failed");
    errorf!(logger, "giving up after {} retries", 3);

    logger.flush()?;
    println!(
        "wrote {} lines ({} filtered) to {}",
        logger.stats().written(),
        logger.stats().dropped(),
        path.display()
    );
    Ok(())
}
