use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

// Tests that point the global logger at their own file hold this.
#[cfg(test)]
lazy_static::lazy_static! {
    pub(crate) static ref TEST_LOG_LOCK: Mutex<()> = Mutex::new(());
}

/// Opens `path` for appending. Logging stays a no-op until this succeeds,
/// since the terminal UI owns stdout and stderr.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Ok(mut logger) = LOGGER.lock() {
        *logger = Some(file);
    }
    Ok(())
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_without_init_is_noop() {
        log("nobody is listening");
    }

    #[test]
    fn test_logger_writes_lines() {
        let _guard = TEST_LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.log");
        init(&path).unwrap();
        log("Test log message");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("] Test log message"));
        assert!(content.starts_with('['));
    }

    #[test]
    fn test_init_fails_for_missing_directory() {
        let _guard = TEST_LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("quiz.log");
        assert!(init(&path).is_err());
    }
}
