use thiserror::Error;

/// grep convention: 0 and 1 mean "selected" and "not selected", 2 means trouble.
/// clap exits with the same code on usage errors.
pub const EXIT_TROUBLE: i32 = 2;

/// Failures of the command-line front end. The matcher itself cannot fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}
