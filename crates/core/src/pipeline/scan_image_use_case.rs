use std::path::Path;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::face_finder::FaceFinder;
use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// What a single scan concluded about one file.
///
/// `Unreadable` covers everything that kept the detector from running:
/// missing file, bad permissions, corrupt or unsupported data. Callers
/// presenting a two-state UI collapse it into the no-face bucket.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanOutcome {
    Unreadable,
    NoFaces,
    Faces(Vec<FaceBox>),
}

impl ScanOutcome {
    pub fn has_face(&self) -> bool {
        matches!(self, ScanOutcome::Faces(_))
    }
}

/// Outcome plus, when an annotator is configured and the file decoded,
/// the image copy with every detected face outlined.
#[derive(Debug)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    pub annotated: Option<Frame>,
}

/// Single-image scan pipeline: decode, detect, optionally outline.
///
/// Per-file failures never abort a batch: they are logged and folded into
/// the report. The only fatal condition in this crate is model loading,
/// which happens long before a use case exists.
pub struct ScanImageUseCase {
    reader: Box<dyn ImageReader>,
    finder: Box<dyn FaceFinder>,
    annotator: Option<Box<dyn FrameAnnotator>>,
}

impl ScanImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        finder: Box<dyn FaceFinder>,
        annotator: Option<Box<dyn FrameAnnotator>>,
    ) -> Self {
        Self {
            reader,
            finder,
            annotator,
        }
    }

    pub fn execute(&self, path: &Path) -> ScanReport {
        let mut frame = match self.reader.read(path) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                return ScanReport {
                    outcome: ScanOutcome::Unreadable,
                    annotated: None,
                };
            }
        };

        let faces = match self.finder.find(&frame) {
            Ok(faces) => faces,
            Err(e) => {
                log::warn!("face search failed for {}: {e}", path.display());
                return ScanReport {
                    outcome: ScanOutcome::Unreadable,
                    annotated: None,
                };
            }
        };

        let annotated = self.annotator.as_ref().map(|annotator| {
            annotator.annotate(&mut frame, &faces);
            frame
        });

        let outcome = if faces.is_empty() {
            ScanOutcome::NoFaces
        } else {
            ScanOutcome::Faces(faces)
        };

        ScanReport { outcome, annotated }
    }
}
