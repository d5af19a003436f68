use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lib_icn::FamilyPaths;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("cannot read manifest {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// A `[icons]` table keyed by resource type:
///
/// ```toml
/// [icons]
/// "ICN#" = "art/large-mono.png"
/// "icl4" = "art/large-4bit.png"
/// "icl8" = "art/large-8bit.png"
/// "ics#" = "art/small-mono.png"
/// "ics4" = "art/small-4bit.png"
/// "ics8" = "art/small-8bit.png"
/// ```
///
/// Relative paths resolve against the manifest's directory.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub icons: IconPaths,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconPaths {
    #[serde(rename = "ICN#")]
    pub large_mono: PathBuf,
    #[serde(rename = "icl4")]
    pub large_4bit: PathBuf,
    #[serde(rename = "icl8")]
    pub large_8bit: PathBuf,
    #[serde(rename = "ics#")]
    pub small_mono: PathBuf,
    #[serde(rename = "ics4")]
    pub small_4bit: PathBuf,
    #[serde(rename = "ics8")]
    pub small_8bit: PathBuf,
}

pub fn load_manifest(path: &Path) -> Result<FamilyPaths, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: Manifest = toml::from_str(&text).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let resolve = |relative: PathBuf| {
        if relative.is_absolute() {
            relative
        } else {
            base.join(relative)
        }
    };

    let icons = manifest.icons;
    Ok(FamilyPaths {
        large_mono: resolve(icons.large_mono),
        large_4bit: resolve(icons.large_4bit),
        large_8bit: resolve(icons.large_8bit),
        small_mono: resolve(icons.small_mono),
        small_4bit: resolve(icons.small_4bit),
        small_8bit: resolve(icons.small_8bit),
    })
}
