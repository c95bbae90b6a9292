use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Install a `tracing` subscriber writing to the configured log file.
///
/// The terminal belongs to the TUI, so nothing is logged to stdout/stderr.
/// When no log file can be opened, logging stays off.
pub fn init_logging(settings: &LogSettings) {
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return;
    };

    let file = match open_log_file(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("segue: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };

    let filter =
        EnvFilter::try_from_env("SEGUE_LOG").unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("segue").join("segue.log");

        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segue.log");
        writeln!(open_log_file(&path).unwrap(), "one").unwrap();
        writeln!(open_log_file(&path).unwrap(), "two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
