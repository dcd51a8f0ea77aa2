use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Domain interface for marking detected faces on a frame, in place.
pub trait FrameAnnotator: Send {
    fn annotate(&self, frame: &mut Frame, boxes: &[FaceBox]);
}
