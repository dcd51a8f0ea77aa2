use ndarray::{ArrayView3, ArrayViewMut3};

/// A single decoded image: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; everything past the
/// decoder treats pixel data as opaque RGB24.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * 3,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Single-channel grayscale projection (Rec. 601 integer weights),
    /// row-major, one byte per pixel. The cascade runs on this, never on
    /// the color buffer.
    pub fn luma(&self) -> Vec<u8> {
        self.data
            .chunks_exact(3)
            .map(|px| {
                let r = px[0] as u32;
                let g = px[1] as u32;
                let b = px[2] as u32;
                ((77 * r + 150 * g + 29 * b) >> 8) as u8
            })
            .collect()
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_data_mut_allows_modification() {
        let data = vec![0u8; 6]; // 2x1x3
        let mut frame = Frame::new(data, 2, 1);
        frame.data_mut()[0] = 255;
        assert_eq!(frame.data()[0], 255);
    }

    #[test]
    fn test_clone_is_independent() {
        let data = vec![100u8; 12];
        let frame = Frame::new(data, 2, 2);
        let mut cloned = frame.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(frame.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x3
        Frame::new(data, 2, 2);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let data = vec![0u8; 24]; // 2x4x3
        let frame = Frame::new(data, 4, 2);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_pixel_access() {
        // 2x2 RGB: set pixel (row=1, col=0) to red
        let mut data = vec![0u8; 12];
        data[6] = 255; // row=1, col=0, R
        let frame = Frame::new(data, 2, 2);
        let arr = frame.as_ndarray();
        assert_eq!(arr[[1, 0, 0]], 255); // R
        assert_eq!(arr[[1, 0, 1]], 0); // G
        assert_eq!(arr[[1, 0, 2]], 0); // B
    }

    #[test]
    fn test_as_ndarray_mut_modification() {
        let data = vec![0u8; 12]; // 2x2x3
        let mut frame = Frame::new(data, 2, 2);
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[0, 1, 2]] = 128; // row=0, col=1, B channel
        }
        assert_eq!(frame.as_ndarray()[[0, 1, 2]], 128);
    }

    #[test]
    fn test_luma_length_is_one_byte_per_pixel() {
        let frame = Frame::new(vec![0u8; 4 * 3 * 3], 4, 3);
        assert_eq!(frame.luma().len(), 12);
    }

    #[test]
    fn test_luma_of_gray_is_identity() {
        // Equal channels: the weights sum to 256, so (77+150+29)*v >> 8 == v.
        let frame = Frame::new(vec![128u8; 2 * 2 * 3], 2, 2);
        assert!(frame.luma().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_luma_weights_channels_unevenly() {
        let red = Frame::new(vec![255, 0, 0], 1, 1);
        let green = Frame::new(vec![0, 255, 0], 1, 1);
        let blue = Frame::new(vec![0, 0, 255], 1, 1);
        assert_eq!(red.luma()[0], 76);
        assert_eq!(green.luma()[0], 149);
        assert_eq!(blue.luma()[0], 28);
    }
}
