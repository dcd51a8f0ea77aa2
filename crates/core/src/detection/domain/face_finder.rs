use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Domain interface for face detection.
///
/// Implementations take the full decoded frame and are free to derive
/// whatever working representation they need (the cascade backend runs on
/// the grayscale projection). Zero hits is a normal outcome, not an error.
pub trait FaceFinder: Send {
    fn find(&self, frame: &Frame) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>>;
}
