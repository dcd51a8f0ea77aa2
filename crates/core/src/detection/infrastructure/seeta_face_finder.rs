use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::detection::domain::face_finder::FaceFinder;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Smallest face the sliding window will consider, in pixels.
const MIN_FACE_SIZE: u32 = 20;
/// Cascade confidence required before a candidate window counts as a face.
const SCORE_THRESH: f64 = 2.0;
/// Each pyramid level shrinks the image by 1/1.1, i.e. a 1.1x scale sweep.
const PYRAMID_SCALE_FACTOR: f32 = 1.0 / 1.1;
/// Sliding-window step in both axes, in pixels.
const SLIDE_WINDOW_STEP: u32 = 4;

#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed detection model {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Face finder backed by the `rustface` crate (SeetaFace funnel cascade).
///
/// Holds only the parsed model; a throwaway detection engine is built per
/// call, so the finder is read-only after construction and cheap to clone
/// into the GUI state.
#[derive(Clone)]
pub struct SeetaFaceFinder {
    model: rustface::Model,
}

impl SeetaFaceFinder {
    /// Parse the SeetaFace frontal model from `path`.
    ///
    /// A missing or malformed model file is the one fatal condition in
    /// this crate; callers are expected to treat it as a startup failure.
    pub fn from_file(path: &Path) -> Result<Self, ModelLoadError> {
        let bytes = fs::read(path).map_err(|e| ModelLoadError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let model =
            rustface::read_model(Cursor::new(bytes)).map_err(|e| ModelLoadError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { model })
    }
}

impl FaceFinder for SeetaFaceFinder {
    fn find(&self, frame: &Frame) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>> {
        let gray = frame.luma();

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(MIN_FACE_SIZE);
        detector.set_score_thresh(SCORE_THRESH);
        detector.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
        detector.set_slide_window_step(SLIDE_WINDOW_STEP, SLIDE_WINDOW_STEP);

        let faces = detector.detect(&rustface::ImageData::new(
            &gray,
            frame.width(),
            frame.height(),
        ));
        log::debug!(
            "found {} face(s) in a {}x{} image",
            faces.len(),
            frame.width(),
            frame.height()
        );

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox::new(bbox.x(), bbox.y(), bbox.width(), bbox.height())
            })
            .collect())
    }
}
