use std::path::Path;

use crate::shared::frame::Frame;

/// Domain interface for turning a file path into a decoded frame.
///
/// A failed read (missing file, permissions, corrupt or unsupported data)
/// is an `Err`: an expected per-file condition for callers, not a reason
/// to abort a batch.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
