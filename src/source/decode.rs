use iced::widget::image::Handle;

use crate::error::Error;
use crate::source::ImageFile;

/// A decoded image: pixels ready for the GPU plus the intrinsic size.
///
/// The displayed size lives in the display state; the raster always keeps
/// the native dimensions as decoded.
#[derive(Debug, Clone)]
pub struct Raster {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Decode a listed file into a [`Raster`].
///
/// Decoding is synchronous and runs on the event thread; the call blocks the
/// UI for its duration. On failure the caller keeps whatever raster it was
/// already showing.
pub fn decode(file: &ImageFile) -> Result<Raster, Error> {
    let decoded = image::open(file.path()).map_err(|source| Error::Decode {
        path: file.path().to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Raster {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::list_images;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn decodes_a_real_jpeg() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("small.jpg");
        image::RgbImage::from_pixel(3, 2, image::Rgb([120, 40, 200]))
            .save(&path)
            .expect("failed to write jpeg");

        let files = list_images(dir.path()).expect("scan failed");
        let raster = decode(&files[0]).expect("decode failed");

        assert_eq!(raster.width, 3);
        assert_eq!(raster.height, 2);
    }

    #[test]
    fn garbage_bytes_fail_without_panicking() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        File::create(&path)
            .expect("failed to create file")
            .write_all(b"not an image")
            .expect("failed to write file");

        let files = list_images(dir.path()).expect("scan failed");
        let result = decode(&files[0]);

        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
