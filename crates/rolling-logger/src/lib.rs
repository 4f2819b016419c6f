//! Rolling Logger
//!
//! Daily-rolling file logger with an in-memory circular buffer.
//!
//! `init_logger` installs a `tracing-subscriber` fmt subscriber. Records
//! emitted through the `log` facade are bridged into it, so library crates
//! only need `log::info!` and friends.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Number of daily files kept on disk
pub const MAX_LOG_FILES: usize = 7;

/// Number of lines kept in memory
pub const BUFFER_CAPACITY: usize = 500;

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Circular buffer of the most recent log lines
#[derive(Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// File sink that switches to a new file when the local date changes
struct RollingFile {
    dir: PathBuf,
    app_name: String,
    current_date: String,
    file: Option<File>,
}

impl RollingFile {
    fn new(dir: PathBuf, app_name: &str) -> Self {
        Self {
            dir,
            app_name: app_name.to_string(),
            current_date: String::new(),
            file: None,
        }
    }

    fn file_name(&self, date: &str) -> String {
        format!("{}_{}.log", self.app_name, date)
    }

    fn roll_if_needed(&mut self) -> io::Result<()> {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        if self.file.is_some() && today == self.current_date {
            return Ok(());
        }

        let path = self.dir.join(self.file_name(&today));
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        self.file = Some(file);
        self.current_date = today;

        prune_old_files(&self.dir, &self.app_name, MAX_LOG_FILES)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.roll_if_needed()?;
        match self.file.as_mut() {
            Some(file) => file.write_all(buf),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Remove the oldest `<app>_<date>.log` files, keeping `keep` of them
fn prune_old_files(dir: &Path, app_name: &str, keep: usize) -> io::Result<()> {
    let prefix = format!("{}_", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    // ISO dates sort chronologically
    logs.sort();

    if logs.len() > keep {
        let excess = logs.len() - keep;
        for path in logs.into_iter().take(excess) {
            let _ = fs::remove_file(path);
        }
    }
    Ok(())
}

/// Writer handed to the fmt subscriber; tees into the file and the buffer
#[derive(Clone)]
struct TeeWriter {
    file: Arc<Mutex<RollingFile>>,
    buffer: LogBuffer,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in String::from_utf8_lossy(buf).lines() {
            let line = line.trim_end();
            if !line.is_empty() {
                self.buffer.push(line.to_string());
            }
        }

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

/// Initialize the global logger writing into `log_dir`
///
/// Fails if the directory cannot be created or a global subscriber is
/// already installed.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    let log_dir = log_dir.as_ref().to_path_buf();
    fs::create_dir_all(&log_dir).map_err(|e| format!("Failed to create log dir: {}", e))?;

    let buffer = BUFFER.get_or_init(|| LogBuffer::new(BUFFER_CAPACITY)).clone();
    let writer = TeeWriter {
        file: Arc::new(Mutex::new(RollingFile::new(log_dir, app_name))),
        buffer,
    };

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone())
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))
}

fn ensure_initialized() -> Result<(), String> {
    if BUFFER.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_logs() -> Vec<String> {
    BUFFER.get().map(LogBuffer::snapshot).unwrap_or_default()
}
