use std::io::{self, Read, Write};

use bytes::{BufMut, BytesMut};
use clap::Parser;
use log::{debug, LevelFilter, Log, Metadata, Record};

use crate::error::CliError;
use crate::search;

/// Search standard input for lines matching a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pikegrep", version, about)]
pub struct Config {
    /// Pattern built from `.`, `^`, `$`, `*` and literal bytes.
    #[arg(short = 'E', value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Select lines that do not match.
    #[arg(short = 'v')]
    pub invert: bool,

    /// Print the number of selected lines instead of the lines.
    #[arg(short = 'c')]
    pub count: bool,

    /// Print nothing, only set the exit status.
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Level of the log messages written to stderr.
    #[arg(
        long = "log",
        env = "PIKEGREP_LOG",
        value_name = "LEVEL",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

/// Reads all of `input`, writes the selected lines (or their count) to
/// `output`, and reports whether any line was selected.
pub fn run<R: Read, W: Write>(
    config: &Config,
    mut input: R,
    mut output: W,
) -> Result<bool, CliError> {
    let mut writer = BytesMut::new().writer();
    io::copy(&mut input, &mut writer)?;
    let buffer = writer.into_inner().freeze();
    debug!("read {} bytes, pattern {:?}", buffer.len(), config.pattern);

    let mut selected = 0usize;
    for line in search::matching_lines(config.pattern.as_bytes(), &buffer, config.invert) {
        selected += 1;
        if config.quiet {
            break;
        }
        if !config.count {
            output.write_all(&line)?;
            output.write_all(b"\n")?;
        }
    }

    if config.count && !config.quiet {
        writeln!(output, "{selected}")?;
    }
    output.flush()?;

    debug!("selected {selected} line(s)");
    Ok(selected > 0)
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the stderr logger. Fails if another logger is already set.
pub fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
