use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Timestamped line logger. Writes to stderr so the board and chat stay
/// readable on stdout.
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }

    pub fn debug(&self, file: &str, line: u32, message: &str) {
        if self.verbose {
            self.log(file, line, message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::debug(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_includes_prefix_and_file_name() {
        let logger = Logger::new(Some("Console".to_string()), false);
        let line = logger.format_line("console/src/main.rs", 12, "started");
        assert!(line.contains("[Console][main.rs:12] started"));
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("C:\\src\\game.rs", 3, "x");
        assert!(line.ends_with("[game.rs:3] x"));
    }
}
