/// Housekeeping for compressed outputs
///
/// Only the file on screen is worth keeping: a replaced result is deleted,
/// and leftovers in the default cache directory are cleared at startup.
/// Sources are never touched.
use std::fs;
use std::path::Path;

use crate::state::data::CurrentImage;

/// True when `record.output` is a file this app wrote into `output_dir`
pub fn is_generated_output(record: &CurrentImage, output_dir: &Path) -> bool {
    record.output != record.source && record.output.starts_with(output_dir)
}

/// Delete the output of a record that is no longer displayed.
/// Returns whether a file was removed.
pub fn discard_output(record: &CurrentImage, output_dir: &Path) -> bool {
    if !is_generated_output(record, output_dir) {
        return false;
    }

    match fs::remove_file(&record.output) {
        Ok(()) => {
            log::debug!("Removed replaced output {}", record.output.display());
            true
        }
        Err(e) => {
            log::warn!(
                "Failed to remove replaced output {}: {}",
                record.output.display(),
                e
            );
            false
        }
    }
}

/// Remove every `.jpg` left in `dir` by an earlier run.
/// Returns the number of files removed; a missing directory counts as empty.
pub fn clear_output_dir(dir: &Path) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };

    let mut removed = 0;
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        let is_jpeg = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("jpg"))
            .unwrap_or(false);
        if !path.is_file() || !is_jpeg {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => log::warn!("Failed to remove stale output {}: {}", path.display(), e),
        }
    }

    if removed > 0 {
        log::info!("🧹 Cleared {} stale compressed files from {}", removed, dir.display());
    }
    removed
}
