//! Saving the output pane to a timestamped file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// File name prefix of every transcript.
pub const TRANSCRIPT_PREFIX: &str = "adb_output_";

/// File extension of every transcript.
pub const TRANSCRIPT_EXTENSION: &str = "txt";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Outcome of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The pane was blank; nothing was written.
    Empty,
    /// The transcript was written to this path.
    Saved(PathBuf),
}

/// `adb_output_YYYYMMDD_HHMMSS.txt` for the given instant.
pub fn transcript_file_name(now: &DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        TRANSCRIPT_PREFIX,
        now.format(TIMESTAMP_FORMAT),
        TRANSCRIPT_EXTENSION
    )
}

/// The user's desktop directory, falling back to `~/Desktop`.
pub fn default_transcript_dir() -> Option<PathBuf> {
    dirs::desktop_dir().or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
}

/// Resolve the directory to save into: an explicit override, else the desktop.
pub fn resolve_transcript_dir(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_transcript_dir().ok_or(Error::NoOutputDirectory),
    }
}

/// Write `text` verbatim as UTF-8 into `dir`.
///
/// Blank or whitespace-only text performs no filesystem access at all.
pub fn save_transcript(text: &str, dir: &Path, now: &DateTime<Local>) -> Result<SaveOutcome> {
    if text.trim().is_empty() {
        debug!("Transcript is blank, nothing written");
        return Ok(SaveOutcome::Empty);
    }

    let path = dir.join(transcript_file_name(now));
    let mut file = File::create(&path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    info!("Transcript saved to {:?}", path);
    Ok(SaveOutcome::Saved(path))
}
