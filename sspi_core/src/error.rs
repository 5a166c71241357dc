use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::Section;

/// Errors produced while building, parsing, reading, or writing an image.
///
/// `SizeOverflow` is the only domain failure of packing; the I/O variants
/// carry the path that could not be read or written.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{section} section is {len} bytes, which exceeds the 32-bit header limit of {max} bytes", max = u32::MAX)]
    SizeOverflow { section: Section, len: u64 },

    #[error("image truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: u64, actual: u64 },

    #[error("image has trailing bytes: expected {expected} bytes, found {actual}")]
    TrailingBytes { expected: u64, actual: u64 },

    #[error("cannot read {section} file {path:?}")]
    Read {
        section: Section,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ImageError>;
