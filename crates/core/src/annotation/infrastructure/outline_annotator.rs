use ndarray::{s, Axis};

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Default outline stroke width, in pixels.
const DEFAULT_THICKNESS: u32 = 2;
/// Default outline color (red).
const DEFAULT_COLOR: [u8; 3] = [255, 0, 0];

/// Draws each box as a hollow rectangle straight into the pixel buffer.
///
/// Boxes are clamped to the frame first; anything degenerate or fully
/// outside is skipped. The stroke is drawn inside the box edges, so the
/// interior stays visible for all but the smallest boxes.
pub struct OutlineAnnotator {
    thickness: u32,
    color: [u8; 3],
}

impl OutlineAnnotator {
    pub fn new(thickness: u32, color: [u8; 3]) -> Self {
        Self { thickness, color }
    }
}

impl Default for OutlineAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_THICKNESS, DEFAULT_COLOR)
    }
}

impl FrameAnnotator for OutlineAnnotator {
    fn annotate(&self, frame: &mut Frame, boxes: &[FaceBox]) {
        let (fw, fh) = (frame.width(), frame.height());
        let mut pixels = frame.as_ndarray_mut();

        for b in boxes {
            let Some(b) = b.clamp_to(fw, fh) else { continue };

            let x0 = b.x as usize;
            let y0 = b.y as usize;
            let x1 = x0 + b.width as usize;
            let y1 = y0 + b.height as usize;
            let t = (self.thickness.max(1).min(b.width).min(b.height)) as usize;

            // Horizontal strokes span the full box width, vertical ones
            // fill the remaining rows between them.
            fill(pixels.slice_mut(s![y0..y0 + t, x0..x1, ..]), self.color);
            fill(pixels.slice_mut(s![y1 - t..y1, x0..x1, ..]), self.color);
            fill(pixels.slice_mut(s![y0..y1, x0..x0 + t, ..]), self.color);
            fill(pixels.slice_mut(s![y0..y1, x1 - t..x1, ..]), self.color);
        }
    }
}

fn fill(mut region: ndarray::ArrayViewMut3<'_, u8>, color: [u8; 3]) {
    for mut pixel in region.lanes_mut(Axis(2)) {
        pixel[0] = color[0];
        pixel[1] = color[1];
        pixel[2] = color[2];
    }
}
