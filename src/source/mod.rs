/// Image source module
///
/// This module handles:
/// - Listing the image files of the browsed directory (scan.rs)
/// - Decoding a listed file into a displayable raster (decode.rs)

pub mod decode;
pub mod scan;

pub use decode::{decode, Raster};
pub use scan::{list_images, ImageFile};
