use log::{Level, LevelFilter, Log, Metadata, Record};

/// Diagnostics go to stderr so they never interleave with the table
/// rendering on stdout.
struct StderrLogger {
    max: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init(verbose: bool) {
    let (max, filter) = if verbose {
        (Level::Debug, LevelFilter::Debug)
    } else {
        (Level::Warn, LevelFilter::Warn)
    };
    if log::set_boxed_logger(Box::new(StderrLogger { max })).is_ok() {
        log::set_max_level(filter);
    }
}
