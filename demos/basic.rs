use slogger::init::init_diagnostics;
use slogger::{warnf, Format, Level, Logger};

fn main() {
    init_diagnostics();

    // JSON lines, info and above
    let logger = Logger::new(Format::Json, Level::Info);

    logger.info("Info message");
    warnf!(logger, "Warning: {}", 10);
    logger.error("This is an error");

    // With additional properties
    logger
        .with_fields(&["stage", "cleanup", "priority", "high"])
        .info("Cleanup");

    // Malformed fields still get logged, with a `fields_error` property
    logger.with_fields(&["oneonly"]).error("bad");
    logger.with_fields(&["oneonly", "two", "three"]).error("bad");

    // Human-friendly lines, warn and above
    let logger = Logger::new(Format::Human, Level::Warn);

    logger.info("This won't be printed");
    logger.warn("Only warning and above");
    logger.with_fields(&["stage", "cleanup"]).error("failed cleanup");
}
