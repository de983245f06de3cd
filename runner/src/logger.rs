use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Installs the logger
///
/// * `verbosity` - 0 shows warnings, 1 adds debug, 2 and above adds trace
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
