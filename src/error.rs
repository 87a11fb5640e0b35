use std::path::PathBuf;

use thiserror::Error;

/// The two recoverable failure conditions of the browser.
///
/// Neither is fatal: an empty directory degrades to a placeholder UI and a
/// decode failure leaves the previously displayed image in place.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory scan finished without a single matching file.
    #[error("no .jpg images found in {}", path.display())]
    EmptyDirectory { path: PathBuf },

    /// A listed file could not be parsed as an image.
    #[error("could not decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
