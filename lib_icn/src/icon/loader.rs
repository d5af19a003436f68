use std::io;
use std::path::{Path, PathBuf};

use image::ImageError;
use log::{debug, info};
use thiserror::Error;

use super::role::IconRole;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("unsupported or undecodable image {path}: {source}")]
    ImageFormat {
        path: PathBuf,
        source: ImageError,
    },

    #[error(
        "{path}: {os_type} expects {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        path: PathBuf,
        os_type: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// One decoded source raster, immutable after load.
pub struct SourceImage {
    pub role: IconRole,
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, four bytes per pixel.
    pub rgba: Vec<u8>,
    /// Whether the source encoding actually carried an alpha channel.
    /// Decoding always expands to RGBA; mask derivation cares about the
    /// original.
    pub has_alpha: bool,
}

/// The six input paths, one per role. Requiring every field makes an
/// incomplete family unrepresentable before any file is touched.
#[derive(Debug, Clone)]
pub struct FamilyPaths {
    pub large_mono: PathBuf,
    pub large_4bit: PathBuf,
    pub large_8bit: PathBuf,
    pub small_mono: PathBuf,
    pub small_4bit: PathBuf,
    pub small_8bit: PathBuf,
}

impl FamilyPaths {
    /// Role/path pairs in emission order.
    pub fn entries(&self) -> [(IconRole, &Path); 6] {
        [
            (IconRole::LargeMono, self.large_mono.as_path()),
            (IconRole::Large4Bit, self.large_4bit.as_path()),
            (IconRole::Large8Bit, self.large_8bit.as_path()),
            (IconRole::SmallMono, self.small_mono.as_path()),
            (IconRole::Small4Bit, self.small_4bit.as_path()),
            (IconRole::Small8Bit, self.small_8bit.as_path()),
        ]
    }
}

/// Loads and validates one source image for `role`.
pub fn load_source(role: IconRole, path: &Path) -> Result<SourceImage, LoadError> {
    let decoded = image::open(path).map_err(|error| match error {
        ImageError::IoError(ref io_error) if io_error.kind() == io::ErrorKind::NotFound => {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        source => LoadError::ImageFormat {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let has_alpha = decoded.color().has_alpha();
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    let (expected_width, expected_height) = role.dimensions();
    if (width, height) != (expected_width, expected_height) {
        return Err(LoadError::DimensionMismatch {
            path: path.to_path_buf(),
            os_type: role.os_type(),
            expected_width,
            expected_height,
            actual_width: width,
            actual_height: height,
        });
    }

    debug!(
        "Loaded {} source {} ({}x{}, alpha: {})",
        role.os_type(),
        path.display(),
        width,
        height,
        has_alpha
    );

    Ok(SourceImage {
        role,
        width,
        height,
        rgba: rgba.into_raw(),
        has_alpha,
    })
}

/// Loads all six family images, or fails with the first error. No partial
/// results: the returned vector always holds one image per role, in
/// emission order.
pub fn load_family(paths: &FamilyPaths) -> Result<Vec<SourceImage>, LoadError> {
    let mut sources = Vec::with_capacity(6);
    for (role, path) in paths.entries() {
        sources.push(load_source(role, path)?);
    }

    info!("Loaded all {} family images", sources.len());
    Ok(sources)
}
