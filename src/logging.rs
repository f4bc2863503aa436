use flexi_logger::{detailed_format, FileSpec, FlexiLoggerError, Logger, LoggerHandle, WriteMode};
use std::path::Path;

/// Start file logging.
///
/// The terminal is owned by the UI, so records only go to a file under
/// `directory`. `RUST_LOG` takes precedence over `level`. The returned handle
/// must stay alive for the lifetime of the program.
pub fn setup(level: &str, directory: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(directory)
                .basename(crate::config::APP_DIR)
                .suppress_timestamp(),
        )
        .append()
        .format(detailed_format)
        .write_mode(WriteMode::BufferAndFlush)
        .start()
}
