use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "clt_demo.log";
/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Trim the log file to its last `keep_size` bytes once it grows past `max_size`.
///
/// Returns whether a rotation happened.
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> std::io::Result<bool> {
    if !log_path.exists() {
        return Ok(false);
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(false);
    }

    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep_size);

    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Drop the partial first line
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&buffer[skip..])?;

    Ok(true)
}

/// A writer factory that hands out writers to the shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

impl LogWriterFactory {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl LogWriter {
    fn lock(&self) -> std::io::Result<MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| std::io::Error::other("log file mutex poisoned"))
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Default `EnvFilter` directive for a requested level
fn default_filter(level: &str) -> String {
    format!("clt_demo={level},clt_demo_core=warn")
}

/// Initialize logging to a file in the log directory.
///
/// The terminal belongs to the TUI, so logs go to `{log_dir}/clt_demo.log`.
/// Past 5MB the file is trimmed to its last 1MB. `RUST_LOG` overrides `level`.
pub fn init_logging(log_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(LogWriterFactory::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "CLT demo logging initialized");
    Ok(())
}
