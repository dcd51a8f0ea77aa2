use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate.
///
/// The file-picker extension filter is advisory only; the decoder sniffs
/// the actual content, so a mislabeled file fails here rather than later.
pub struct FileImageReader;

impl FileImageReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileImageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for FileImageReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::open(path)?.into_rgb8();
        let (width, height) = img.dimensions();
        Ok(Frame::new(img.into_raw(), width, height))
    }
}
