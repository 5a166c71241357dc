use tracing::debug;

use crate::error::{ImageError, Result};
use crate::format::{ImageHeader, Section, HEADER_SIZE};

/// Convert a section length to its 32-bit header value.
///
/// Fails with [`ImageError::SizeOverflow`] instead of truncating when `len`
/// does not fit in a `u32`.
pub fn section_len(section: Section, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| ImageError::SizeOverflow {
        section,
        len: len as u64,
    })
}

/// Pack `algo` and `data` into a single firmware image.
///
/// # Format layout written
/// ```text
/// [algo_size: u32 LE][data_size: u32 LE][algo bytes][data bytes]
/// ```
///
/// No padding and no trailing bytes; the result is always
/// `8 + algo.len() + data.len()` bytes long. The algo length is checked first.
pub fn pack(algo: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let header = ImageHeader {
        algo_size: section_len(Section::Algo, algo.len())?,
        data_size: section_len(Section::Data, data.len())?,
    };

    let mut image = Vec::with_capacity(HEADER_SIZE + algo.len() + data.len());
    image.extend_from_slice(&header.to_bytes());
    image.extend_from_slice(algo);
    image.extend_from_slice(data);

    debug!(
        algo_size = header.algo_size,
        data_size = header.data_size,
        image_len = image.len(),
        "packed image"
    );
    Ok(image)
}
