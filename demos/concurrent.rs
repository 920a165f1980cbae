use std::thread;
use std::time::Instant;

use slogger::noop_sink::NoopSink;
use slogger::{infof, Format, Level, Logger};

fn main() {
    let logger = Logger::new(Format::Json, Level::Info).with_sink(NoopSink);

    let threads: u64 = 4;
    let per_thread: u64 = 25_000;
    let start = Instant::now();

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                let worker = t.to_string();
                for i in 0..per_thread {
                    infof!(logger.with_fields(&["worker", worker.as_str()]), "iteration {}", i);
                    logger.debug("filtered before formatting");
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }

    let elapsed = start.elapsed();
    let n = logger.stats().written();
    println!(
        "rendered {} records ({} dropped) in {:?} (~{:.0} rec/s)",
        n,
        logger.stats().dropped(),
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}
