use tracing::debug;

use crate::error::{ImageError, Result};
use crate::format::ImageHeader;

/// A parsed image borrowing its sections from the packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unpacked<'a> {
    pub header: ImageHeader,
    pub algo: &'a [u8],
    pub data: &'a [u8],
}

/// Split a packed image back into its algo and data sections.
///
/// Reads the header, then exactly `algo_size` and `data_size` bytes, the same
/// way the driver consumes the firmware blob. The image length must equal the
/// header-declared length: shorter is [`ImageError::Truncated`], longer is
/// [`ImageError::TrailingBytes`].
pub fn unpack(image: &[u8]) -> Result<Unpacked<'_>> {
    let header = ImageHeader::parse(image)?;
    let expected = header.image_len();
    let actual = image.len() as u64;

    if actual < expected {
        return Err(ImageError::Truncated { expected, actual });
    }
    if actual > expected {
        return Err(ImageError::TrailingBytes { expected, actual });
    }

    // Both ranges lie inside `image` now that the length matched.
    let algo_range = header.algo_range();
    let data_range = header.data_range();
    let algo = &image[algo_range.start as usize..algo_range.end as usize];
    let data = &image[data_range.start as usize..data_range.end as usize];

    debug!(
        algo_size = header.algo_size,
        data_size = header.data_size,
        "unpacked image"
    );
    Ok(Unpacked { header, algo, data })
}
