//! Raw video frame reader.
//!
//! Reads fixed-size `rgb24` frames back to back, the layout produced by
//! `ffmpeg -f rawvideo -pix_fmt rgb24 -`.

use std::io::{ErrorKind, Read};

use crate::camera::{Frame, FrameFormat};

/// Errors that can occur while reading a raw frame stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Invalid frame size {width}x{height}: width and height must be greater than 0")]
    InvalidGeometry { width: u32, height: u32 },

    #[error("Stream ended mid-frame: expected {expected} bytes, got {received}")]
    Truncated { expected: usize, received: usize },

    #[error("Stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits a byte stream into frames of one fixed size.
#[derive(Debug)]
pub struct RawFrameReader<R> {
    reader: R,
    width: u32,
    height: u32,
    format: FrameFormat,
    frames_read: u64,
}

impl<R: Read> RawFrameReader<R> {
    /// Create a reader for `width x height` RGB frames.
    pub fn new(reader: R, width: u32, height: u32) -> Result<Self, StreamError> {
        Self::with_format(reader, width, height, FrameFormat::Rgb)
    }

    /// Create a reader for frames in an explicit pixel format.
    pub fn with_format(
        reader: R,
        width: u32,
        height: u32,
        format: FrameFormat,
    ) -> Result<Self, StreamError> {
        if width == 0 || height == 0 {
            return Err(StreamError::InvalidGeometry { width, height });
        }
        Ok(Self {
            reader,
            width,
            height,
            format,
            frames_read: 0,
        })
    }

    /// Bytes in one frame.
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel()
    }

    /// Frames returned so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Read the next frame, or `None` at a clean end of stream.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, StreamError> {
        let expected = self.frame_len();
        let mut data = vec![0u8; expected];
        let mut received = 0;

        while received < expected {
            match self.reader.read(&mut data[received..]) {
                Ok(0) => break,
                Ok(n) => received += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if received == 0 {
            return Ok(None);
        }
        if received < expected {
            return Err(StreamError::Truncated { expected, received });
        }

        self.frames_read += 1;
        Ok(Some(Frame {
            format: self.format,
            ..Frame::rgb(data, self.width, self.height)
        }))
    }
}

impl<R: Read> Iterator for RawFrameReader<R> {
    type Item = Result<Frame, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}
