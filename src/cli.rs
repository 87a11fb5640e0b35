use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "photo-browser", about = "Browse the JPEG images in a directory")]
pub struct Cli {
    /// Directory to browse. Defaults to the user's Pictures directory.
    pub directory: Option<PathBuf>,
}

/// The directory browsed when none is given on the command line.
///
/// Falls back to `~/Pictures` on platforms without a configured pictures
/// directory, and to the current directory as a last resort.
pub fn default_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."))
}
