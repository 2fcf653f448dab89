use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// File name prefix for log files written by [`FileLogger`]
pub const LOG_FILE_PREFIX: &str = "rehab";

/// A logger that writes to stdout
pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// A logger that writes to date-named files with automatic day rollover
///
/// Files are named `rehab-YYYY-MM-DD.log` inside the configured directory.
pub struct FileLogger {
    level: LevelFilter,
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

fn open_day_file(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(dir, date))
}

/// Path of the log file for a given `YYYY-MM-DD` date
pub fn log_file_path(dir: &Path, date: &str) -> PathBuf {
    dir.join(format!("{}-{}.log", LOG_FILE_PREFIX, date))
}

impl FileLogger {
    /// Create a new FileLogger that writes to the specified directory
    pub fn new(dir: impl Into<PathBuf>, level: LevelFilter) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;

        Ok(FileLogger {
            level,
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

/// Render a record as a single log line (without trailing newline)
///
/// `2026-10-16T08:15:02 [INFO] [thread:ThreadId(1)] rehab_infer::exercise - src/exercise/classifier.rs:42 - message`
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {} - {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.target(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Acquire mutex with poisoning recovery
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(new_file) => {
                    state.file = new_file;
                    state.current_date = today;
                }
                Err(e) => {
                    // keep writing into the previous day's file
                    eprintln!(
                        "Failed to open new log file {:?}: {}",
                        log_file_path(&state.dir, &today),
                        e
                    );
                }
            }
        }

        let mut line = format_record(record);
        line.push('\n');

        if let Err(e) = state.file.write_all(line.as_bytes()) {
            eprintln!("Failed to write to log file: {}", e);
            eprintln!("{}", line.trim_end());
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Format current time as YYYY-MM-DDTHH:MM:SS (UTC)
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Format current date as YYYY-MM-DD (UTC)
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Convert days since Unix epoch to civil date (year, month, day)
/// Uses Howard Hinnant's algorithm (public domain)
/// http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Default level for the current build: Debug in debug builds, Info in release.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize the global logger with a [`StdoutLogger`] at [`default_level`]
///
/// This can only be called once per process. Subsequent calls are silently ignored.
pub fn init_stdout_logger() {
    init_stdout_logger_with_level(default_level());
}

/// Initialize the global logger with a [`StdoutLogger`] at an explicit level
pub fn init_stdout_logger_with_level(level: LevelFilter) {
    let logger: &'static StdoutLogger = Box::leak(Box::new(StdoutLogger::new(level)));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Initialize the global logger with a [`FileLogger`] at [`default_level`]
///
/// Returns an error if the FileLogger cannot be created (e.g., invalid directory).
/// If a global logger is already installed the call is a no-op.
pub fn init_file_logger(dir: impl Into<PathBuf>) -> std::io::Result<()> {
    let level = default_level();
    let logger = FileLogger::new(dir, level)?;

    // set_logger needs a &'static; the leak happens at most once per process
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(level);
    }

    Ok(())
}

/// Log a fatal error and exit the process
///
/// Logs at Error level (since the log crate has no Fatal level),
/// flushes the logger and stdout, and calls std::process::exit(1).
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        $crate::log::Log::flush($crate::log::logger());
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
        std::process::exit(1);
    }};
}
