use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

use crate::constants::{MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};

#[derive(Error, Debug)]
pub enum DotError {
    #[error(
        "Image size is {width}x{height}. Image size must be between {min}x{min} and {max}x{max}.",
        min = MIN_IMAGE_SIZE,
        max = MAX_IMAGE_SIZE
    )]
    UnsupportedImageSize { height: u32, width: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Unsupported format '{0}'.")]
    UnsupportedExtension(String),

    #[error("Can't open '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Can't save '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Can't open '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't save '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file decoded but the editor can't take it, e.g. its size.
    #[error("Can't open '{}'. {source}", .path.display())]
    Rejected {
        path: PathBuf,
        #[source]
        source: Box<DotError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("File dialog was canceled")]
    DialogCancelled,
}

impl DotError {
    /// Cancelled dialogs are reported through the error path but never shown.
    pub fn is_silent(&self) -> bool {
        matches!(self, DotError::DialogCancelled)
    }
}
