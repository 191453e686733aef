/// The single UI state object
///
/// `Session` owns everything the view renders. It only changes through the
/// methods below, which refuse to start a new operation while another one
/// (pick/compress or upload) is in flight.
use crate::error::SessionError;

use super::data::{CurrentImage, PickedImage};
use super::level::CompressionLevel;

#[derive(Debug, Clone)]
pub struct Session {
    /// Tier used for the next compression
    pub level: CompressionLevel,
    /// Image on screen, if any
    pub current: Option<CurrentImage>,
    /// Picking or compressing
    pub is_loading: bool,
    pub is_uploading: bool,
    /// 0..=100
    pub upload_progress: u8,
    /// One-line status shown under the controls
    pub status: String,
}

impl Session {
    pub fn new(level: CompressionLevel) -> Self {
        Self {
            level,
            current: None,
            is_loading: false,
            is_uploading: false,
            upload_progress: 0,
            status: "Pick a photo to get started.".to_string(),
        }
    }

    /// True while any operation is running; all controls are disabled
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_uploading
    }

    /// Enter the loading state before showing the picker
    pub fn begin_loading(&mut self) -> Result<(), SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        self.is_loading = true;
        self.status = "Processing image...".to_string();
        Ok(())
    }

    /// Leave the loading state without touching the current image
    /// (picker cancelled, or the file could not be read)
    pub fn cancel_loading(&mut self, status: impl Into<String>) {
        self.is_loading = false;
        self.status = status.into();
    }

    /// Replace the current image with a freshly compressed record.
    /// Returns the record it replaced.
    pub fn finish_compression(&mut self, record: CurrentImage) -> Option<CurrentImage> {
        self.status = record.decision.describe().to_string();
        self.is_loading = false;
        self.current.replace(record)
    }

    /// Switch tier. If an image is loaded, returns its original source so
    /// the caller can recompress it; the session is then loading.
    pub fn select_level(
        &mut self,
        level: CompressionLevel,
    ) -> Result<Option<PickedImage>, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        self.level = level;

        match &self.current {
            Some(current) => {
                let picked = current.picked();
                self.is_loading = true;
                self.status = format!("Recompressing with {} compression...", level);
                Ok(Some(picked))
            }
            None => Ok(None),
        }
    }

    /// Start the simulated upload
    pub fn begin_upload(&mut self) -> Result<(), SessionError> {
        if self.current.is_none() {
            return Err(SessionError::NoImage);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        self.is_uploading = true;
        self.upload_progress = 0;
        self.status = "Uploading...".to_string();
        Ok(())
    }

    /// Record a completed upload step
    pub fn set_upload_progress(&mut self, percent: u8) {
        if self.is_uploading {
            self.upload_progress = percent.min(100);
        }
    }

    /// Upload finished: progress resets for the next run
    pub fn finish_upload(&mut self) {
        self.is_uploading = false;
        self.upload_progress = 0;
        self.status = "Upload complete.".to_string();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CompressionLevel::default())
    }
}
