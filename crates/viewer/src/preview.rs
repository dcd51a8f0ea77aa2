use facebox_core::shared::frame::Frame;
use iced::widget::image::Handle;

/// Display width the preview is scaled to, in pixels.
const PREVIEW_WIDTH: u32 = 700;

/// Convert an annotated frame into a widget handle, scaled to the fixed
/// preview width with smooth (triangle) interpolation.
///
/// Images narrower than the preview width are scaled up; aspect ratio is
/// always preserved.
pub fn to_handle(frame: &Frame) -> Option<Handle> {
    let (width, height) = scaled_size(frame.width(), frame.height(), PREVIEW_WIDTH);

    let rgb = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())?;
    let resized = image::imageops::resize(&rgb, width, height, image::imageops::FilterType::Triangle);

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in resized.pixels() {
        rgba.extend_from_slice(&[px.0[0], px.0[1], px.0[2], 255]);
    }
    Some(Handle::from_rgba(width, height, rgba))
}

/// Fit `width` × `height` to `target_width`, preserving aspect ratio and
/// never collapsing below one pixel.
fn scaled_size(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    let scaled_height = (height as u64 * target_width as u64) / width.max(1) as u64;
    (target_width, (scaled_height as u32).max(1))
}
