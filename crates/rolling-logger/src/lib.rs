//! Rolling Logger
//!
//! File logger for Tauri apps built on `tracing`:
//! - writes `<app>.log` in the given directory, rotating to `<app>.log.1..N`
//!   once the file grows past a size limit
//! - keeps the most recent lines in a circular buffer for in-app display
//! - echoes everything to stderr
//!
//! `log` macros from other crates are bridged through tracing-subscriber's
//! log compatibility, so both `log::info!` and `tracing::info!` end up here.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Rotation and buffer limits
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Rotate once the active file would exceed this many bytes
    pub max_file_bytes: u64,
    /// Rotated files kept next to the active one
    pub max_files: usize,
    /// Lines kept in memory
    pub buffer_lines: usize,
    pub level: tracing::Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 500,
            level: tracing::Level::INFO,
        }
    }
}

// ========================
// Circular Buffer
// ========================

/// Fixed-capacity line buffer, oldest lines dropped first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

// ========================
// Rolling File
// ========================

/// Size-bounded log file with numbered backups
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            file,
            written,
            max_bytes,
            max_files,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// Shift `.1..N-1` up by one, move the active file to `.1`, start fresh
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
        } else {
            let oldest = self.backup_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
            self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        }
        self.written = 0;
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        let incoming = bytes.len() as u64;
        if self.written > 0 && self.written + incoming > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(bytes)?;
        self.written += incoming;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

// ========================
// Shared Sink
// ========================

#[derive(Debug)]
struct Sink {
    file: RollingFile,
    recent: RingBuffer,
}

impl Sink {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.file.write_bytes(bytes)?;
        for line in String::from_utf8_lossy(bytes).lines() {
            let line = line.trim_end();
            if !line.is_empty() {
                self.recent.push(line.to_string());
            }
        }
        Ok(())
    }
}

/// `MakeWriter` handing out handles onto the shared sink
#[derive(Clone, Debug)]
pub struct RollingWriter {
    sink: Arc<Mutex<Sink>>,
}

impl RollingWriter {
    pub fn new(dir: &Path, app_name: &str, config: &LoggerConfig) -> io::Result<Self> {
        let file = RollingFile::open(dir, app_name, config.max_file_bytes, config.max_files)?;
        Ok(Self {
            sink: Arc::new(Mutex::new(Sink {
                file,
                recent: RingBuffer::new(config.buffer_lines),
            })),
        })
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.sink.lock() {
            Ok(sink) => sink.recent.lines(),
            Err(poisoned) => poisoned.into_inner().recent.lines(),
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        sink.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        sink.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

// ========================
// Global Logger
// ========================

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(
    log_dir: PathBuf,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let writer = RollingWriter::new(&log_dir, app_name, &config)?;
    let file_path = log_dir.join(format!("{}.log", app_name));

    tracing_subscriber::fmt()
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(config.level)
        .with_writer(writer.clone().and(io::stderr))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    LOGGER
        .set(writer)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(target: "rolling_logger", "logging to {}", file_path.display());
    Ok(())
}

fn installed() -> Result<&'static RollingWriter, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    installed()?;
    tracing::info!(target: "app", "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    installed()?;
    tracing::error!(target: "app", "{}", msg);
    Ok(())
}

/// Most recent lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingWriter::recent_lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut ring = RingBuffer::new(2);
        ring.push("a".to_string());
        ring.push("b".to_string());
        ring.push("c".to_string());
        assert_eq!(ring.lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity() {
        let mut ring = RingBuffer::new(0);
        ring.push("a".to_string());
        assert!(ring.lines().is_empty());
    }

    #[test]
    fn test_rolling_file_rotates() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "Test", 10, 2).unwrap();

        file.write_bytes(b"12345678\n").unwrap();
        file.write_bytes(b"abcdefgh\n").unwrap();
        file.write_bytes(b"ABCDEFGH\n").unwrap();
        file.flush().unwrap();

        let active = fs::read_to_string(dir.path().join("Test.log")).unwrap();
        let first = fs::read_to_string(dir.path().join("Test.log.1")).unwrap();
        let second = fs::read_to_string(dir.path().join("Test.log.2")).unwrap();
        assert_eq!(active, "ABCDEFGH\n");
        assert_eq!(first, "abcdefgh\n");
        assert_eq!(second, "12345678\n");
    }

    #[test]
    fn test_rolling_file_keeps_max_files() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "Test", 4, 1).unwrap();
        for line in ["one\n", "two\n", "six\n"] {
            file.write_bytes(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert!(!dir.path().join("Test.log.2").exists());
        assert_eq!(fs::read_to_string(dir.path().join("Test.log.1")).unwrap(), "two\n");
        assert_eq!(fs::read_to_string(dir.path().join("Test.log")).unwrap(), "six\n");
    }

    #[test]
    fn test_writer_fills_buffer_and_file() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig {
            buffer_lines: 2,
            ..LoggerConfig::default()
        };
        let mut writer = RollingWriter::new(dir.path(), "App", &config).unwrap();
        writer.write_all(b"first\nsecond\n").unwrap();
        writer.write_all(b"third\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.recent_lines(), vec!["second", "third"]);
        let content = fs::read_to_string(dir.path().join("App.log")).unwrap();
        assert_eq!(content, "first\nsecond\nthird\n");
    }

    #[test]
    fn test_helpers_require_init() {
        if LOGGER.get().is_none() {
            assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
            assert!(matches!(error("x"), Err(LoggerError::NotInitialized)));
            assert!(recent_lines().is_empty());
        }
    }
}
