//! LED frame handling

pub mod buffer;

pub use buffer::PixelBuffer;
