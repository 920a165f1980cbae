use std::collections::HashMap;
use std::fs::{self, File};

use slogger::record::FIELDS_ERROR_KEY;
use slogger::{errorf, infof, warnf};
use slogger::{Emission, Format, Level, Logger, MemorySink};

fn logger(format: Format, min_level: Level) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::new(format, min_level).with_sink(sink.clone()), sink)
}

fn json(line: &str) -> serde_json::Value {
    serde_json::from_str(line).expect("line is a JSON document")
}

#[test]
fn json_warnf_end_to_end() {
    let (logger, sink) = logger(Format::Json, Level::Info);

    warnf!(logger, "Warning: {}", 10);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let value = json(&lines[0]);
    assert_eq!(value["level"], "warn");
    assert_eq!(value["message"], "Warning: 10");
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["level", "message", "time"]);
}

#[test]
fn human_threshold_end_to_end() {
    let (logger, sink) = logger(Format::Human, Level::Warn);

    logger.info("hidden");
    assert!(sink.is_empty());

    logger.warn("shown");
    let contents = sink.contents();
    assert_eq!(contents.matches('\n').count(), 1);
    assert!(contents.starts_with("WARN\t"));
    assert!(contents.ends_with("\tshown\t\n"));
}

#[test]
fn human_error_with_fields() {
    let (logger, sink) = logger(Format::Human, Level::Warn);

    logger.with_fields(&["x", "1"]).error("boom");

    let contents = sink.contents();
    assert!(contents.starts_with("ERROR\t"));
    let fields = contents.trim_end_matches('\n').rsplit('\t').next().unwrap();
    assert_eq!(fields, "x=1 ");
}

#[test]
fn level_round_trips_through_json() {
    let (logger, sink) = logger(Format::Json, Level::Debug);
    for level in Level::ALL {
        logger.log(level, "round trip");
    }
    let levels: Vec<String> = sink
        .lines()
        .iter()
        .map(|line| json(line)["level"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(levels, ["debug", "info", "warn", "error"]);
}

#[test]
fn with_fields_variants() {
    let (logger, sink) = logger(Format::Json, Level::Info);

    logger.with_fields(&["a", "b", "c", "d"]).info("pairs");
    logger.with_fields(&["a", "b", "a", "c"]).info("duplicate");
    logger.with_fields(&["a", "b", "c"]).info("odd");

    let lines = sink.lines();
    let props = |i: usize| -> HashMap<String, String> {
        serde_json::from_value(json(&lines[i])["properties"].clone()).unwrap()
    };

    assert_eq!(
        props(0),
        HashMap::from([("a".to_string(), "b".to_string()), ("c".to_string(), "d".to_string())])
    );
    assert_eq!(props(1), HashMap::from([("a".to_string(), "c".to_string())]));

    let odd = props(2);
    assert_eq!(odd.len(), 1);
    let diagnostic = &odd[FIELDS_ERROR_KEY];
    assert!(diagnostic.contains('3'));
    for raw in ["a", "b", "c"] {
        assert!(diagnostic.contains(raw));
    }
}

#[test]
fn entry_macros_and_outcomes() {
    let (logger, sink) = logger(Format::Json, Level::Warn);

    infof!(logger.with_fields(&["k", "v"]), "dropped {}", 1);
    errorf!(logger.with_fields(&["k", "v"]), "kept {}", 2);

    assert_eq!(
        logger.try_log(Level::Debug, format_args!("quiet")).unwrap(),
        Emission::Dropped
    );
    assert_eq!(
        logger.try_log(Level::Error, format_args!("loud")).unwrap(),
        Emission::Written
    );

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(json(&lines[0])["message"], "kept 2");
    assert_eq!(logger.stats().dropped(), 2);
    assert_eq!(logger.stats().written(), 2);
    assert_eq!(logger.stats().fallbacks(), 0);
}

#[test]
fn writes_to_a_file_sink() {
    let path = std::env::temp_dir().join(format!("slogger-{}.log", std::process::id()));
    let file = File::create(&path).unwrap();

    let logger = Logger::new(Format::Json, Level::Info).with_writer(file);
    logger.info("first");
    logger.with_fields(&["stage", "cleanup"]).error("second");
    logger.flush().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(json(lines[1])["properties"]["stage"], "cleanup");
}
