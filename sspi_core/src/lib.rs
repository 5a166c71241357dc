//! Firmware image format for the ecp5-fpga-mgr SSPI driver.
//!
//! An image carries a firmware algorithm payload (`.sea`) and its data
//! payload (`.sed`) behind an 8-byte header of two little-endian lengths:
//!
//! ```text
//! [algo_size: u32 LE][data_size: u32 LE][algo bytes][data bytes]
//! ```
//!
//! [`pack`] builds an image, [`unpack`] splits one back, and [`writer`]
//! moves sections and images between memory and disk.

pub mod error;
pub mod format;
pub mod packer;
pub mod reader;
pub mod writer;

pub use error::{ImageError, Result};
pub use format::{ImageHeader, Section, DEFAULT_IMAGE_FILE, HEADER_SIZE, MAX_SECTION_LEN};
pub use packer::{pack, section_len};
pub use reader::{unpack, Unpacked};
pub use writer::{read_section, write_image};
