use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lib_icn::{
    emit_document, load_family, quantize, EmitError, FamilyPaths, LoadError, QuantizeError,
    QuantizeOptions, RezOptions,
};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("loading images: {0}")]
    Load(#[from] LoadError),

    #[error("palette matching: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("emitting resources: {0}")]
    Emit(#[from] EmitError),

    #[error("writing {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Runs the whole pipeline: load, quantize each image, emit, then write
/// the document in a single call. Nothing touches the output path until
/// every stage has succeeded.
pub fn run_build(
    paths: &FamilyPaths,
    quantize_options: &QuantizeOptions,
    rez_options: &RezOptions,
    out: &Path,
) -> Result<(), BuildError> {
    let sources = load_family(paths)?;

    let mut icons = Vec::with_capacity(sources.len());
    for source in &sources {
        icons.push(quantize(source, quantize_options)?);
    }

    let document = emit_document(&icons, rez_options)?;

    fs::write(out, document).map_err(|source| BuildError::Write {
        path: out.to_path_buf(),
        source,
    })?;

    info!("Wrote {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn family(dir: &Path) -> FamilyPaths {
        let write = |name: &str, side: u32| {
            let path = dir.join(name);
            RgbaImage::from_pixel(side, side, Rgba([0xFF, 0x64, 0x03, 0xFF]))
                .save(&path)
                .unwrap();
            path
        };
        FamilyPaths {
            large_mono: write("lm.png", 32),
            large_4bit: write("l4.png", 32),
            large_8bit: write("l8.png", 32),
            small_mono: write("sm.png", 16),
            small_4bit: write("s4.png", 16),
            small_8bit: write("s8.png", 16),
        }
    }

    #[test]
    fn test_build_writes_document() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("family.r");

        run_build(
            &family(dir.path()),
            &QuantizeOptions::default(),
            &RezOptions::default(),
            &out,
        )
        .unwrap();

        let document = fs::read_to_string(&out).unwrap();
        assert!(document.starts_with("data 'ICN#' (128) {"));
        assert_eq!(document.matches("data '").count(), 6);
    }

    #[test]
    fn test_failed_build_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("family.r");

        let mut paths = family(dir.path());
        paths.large_8bit = dir.path().join("missing.png");

        let result = run_build(
            &paths,
            &QuantizeOptions::default(),
            &RezOptions::default(),
            &out,
        );
        assert!(matches!(result, Err(BuildError::Load(_))));
        assert!(!out.exists());
    }

    #[test]
    fn test_build_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let paths = family(dir.path());

        let first = dir.path().join("first.r");
        let second = dir.path().join("second.r");
        for out in [&first, &second] {
            run_build(
                &paths,
                &QuantizeOptions::default(),
                &RezOptions::default(),
                out,
            )
            .unwrap();
        }

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}
