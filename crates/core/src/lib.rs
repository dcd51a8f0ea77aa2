//! Face presence scanning for still images.
//!
//! Decodes an image file, runs the SeetaFace frontal cascade over it, and
//! reports whether any face was found, optionally outlining each hit on a
//! copy of the image.

pub mod annotation;
pub mod detection;
pub mod imaging;
pub mod pipeline;
pub mod shared;
