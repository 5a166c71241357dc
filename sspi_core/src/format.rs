use std::fmt;
use std::ops::Range;

use crate::error::{ImageError, Result};

/// Fixed size of the image header in bytes.
///   algo_size:u32 + data_size:u32 = 4 + 4 = 8
pub const HEADER_SIZE: usize = 8;

/// Byte range of the `algo_size` field inside the header.
pub const ALGO_SIZE_RANGE: Range<usize> = 0..4;

/// Byte range of the `data_size` field inside the header.
pub const DATA_SIZE_RANGE: Range<usize> = 4..8;

/// Largest section length the 32-bit header fields can describe.
pub const MAX_SECTION_LEN: u64 = u32::MAX as u64;

/// Output file name used when `--image_file` is not given.
pub const DEFAULT_IMAGE_FILE: &str = "ecp5_sspi_fw.img";

// ── Sections ───────────────────────────────────────────────────────────────

/// The two payloads carried by an image, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Firmware algorithm payload (usually a `.sea` file).
    Algo,
    /// Firmware data payload (usually a `.sed` file).
    Data,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Algo => "algo",
            Section::Data => "data",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Header ─────────────────────────────────────────────────────────────────

/// Decoded representation of the 8-byte image header.
///
/// Matches `struct lattice_fpga_sspi_firmware` as read by the driver: two
/// little-endian `u32` lengths followed by the algo and data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageHeader {
    pub algo_size: u32,
    pub data_size: u32,
}

impl ImageHeader {
    /// Serialize to exactly `HEADER_SIZE` bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[ALGO_SIZE_RANGE].copy_from_slice(&self.algo_size.to_le_bytes());
        buf[DATA_SIZE_RANGE].copy_from_slice(&self.data_size.to_le_bytes());
        buf
    }

    /// Deserialize from `HEADER_SIZE` bytes. Every bit pattern is a valid header.
    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Self {
        let mut algo = [0u8; 4];
        let mut data = [0u8; 4];
        algo.copy_from_slice(&buf[ALGO_SIZE_RANGE]);
        data.copy_from_slice(&buf[DATA_SIZE_RANGE]);
        Self {
            algo_size: u32::from_le_bytes(algo),
            data_size: u32::from_le_bytes(data),
        }
    }

    /// Read the header from the front of `image`.
    pub fn parse(image: &[u8]) -> Result<Self> {
        let buf: &[u8; HEADER_SIZE] = image
            .get(..HEADER_SIZE)
            .and_then(|h| h.try_into().ok())
            .ok_or(ImageError::Truncated {
                expected: HEADER_SIZE as u64,
                actual: image.len() as u64,
            })?;
        Ok(Self::from_bytes(buf))
    }

    /// Total image length this header describes, header included.
    pub fn image_len(&self) -> u64 {
        HEADER_SIZE as u64 + self.algo_size as u64 + self.data_size as u64
    }

    /// Byte range of the algo section within the image.
    pub fn algo_range(&self) -> Range<u64> {
        let start = HEADER_SIZE as u64;
        start..start + self.algo_size as u64
    }

    /// Byte range of the data section within the image.
    pub fn data_range(&self) -> Range<u64> {
        let start = self.algo_range().end;
        start..start + self.data_size as u64
    }
}
