use std::path::{Path, PathBuf};

use image::ImageReader;

/// Extensions offered by the file picker. Only a hint; nothing checks them.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// A file the user picked, before the state assigns it an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub dimensions: Option<(u32, u32)>,
}

/// Accept a picked path.
///
/// Returns `None` when the path does not name a regular file, which callers
/// treat as "nothing selected". Undecodable files are still accepted; they
/// just have no known dimensions.
pub fn select_path(path: impl AsRef<Path>) -> Option<PickedImage> {
    let path = path.as_ref();
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "ignoring selection, not a file");
        return None;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Some(PickedImage {
        path: path.to_path_buf(),
        file_name,
        dimensions: probe_dimensions(path),
    })
}

/// Read width and height from the image header without decoding pixels
fn probe_dimensions(path: &Path) -> Option<(u32, u32)> {
    let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => reader,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not open image");
            return None;
        }
    };

    match reader.into_dimensions() {
        Ok(dimensions) => Some(dimensions),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read image header");
            None
        }
    }
}
