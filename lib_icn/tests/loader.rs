use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use lib_icn::{
    load_family, quantize, FamilyPaths, IconRole, LoadError, QuantizeError, QuantizeOptions,
};
use tempfile::TempDir;

fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([0x33, 0x66, 0x99, 0xFF]))
        .save(&path)
        .unwrap();
    path
}

fn valid_family(dir: &Path) -> FamilyPaths {
    FamilyPaths {
        large_mono: write_rgba_png(dir, "large_mono.png", 32, 32),
        large_4bit: write_rgba_png(dir, "large_4bit.png", 32, 32),
        large_8bit: write_rgba_png(dir, "large_8bit.png", 32, 32),
        small_mono: write_rgba_png(dir, "small_mono.png", 16, 16),
        small_4bit: write_rgba_png(dir, "small_4bit.png", 16, 16),
        small_8bit: write_rgba_png(dir, "small_8bit.png", 16, 16),
    }
}

#[test]
fn test_load_valid_family() {
    let dir = TempDir::new().unwrap();
    let sources = load_family(&valid_family(dir.path())).unwrap();

    assert_eq!(sources.len(), 6);
    for (source, role) in sources.iter().zip(IconRole::ALL) {
        assert_eq!(source.role, role);
        assert_eq!((source.width, source.height), role.dimensions());
        assert_eq!(source.rgba.len(), (source.width * source.height * 4) as usize);
        assert!(source.has_alpha);
    }
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut paths = valid_family(dir.path());
    paths.small_8bit = dir.path().join("nope.png");

    let result = load_family(&paths);
    assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
}

#[test]
fn test_undecodable_file() {
    let dir = TempDir::new().unwrap();
    let mut paths = valid_family(dir.path());
    paths.large_4bit = dir.path().join("garbage.png");
    fs::write(&paths.large_4bit, b"this is not a png").unwrap();

    let result = load_family(&paths);
    assert!(matches!(result, Err(LoadError::ImageFormat { .. })));
}

#[test]
fn test_dimension_mismatch() {
    let dir = TempDir::new().unwrap();
    let mut paths = valid_family(dir.path());
    paths.large_8bit = write_rgba_png(dir.path(), "wrong.png", 16, 16);

    match load_family(&paths) {
        Err(LoadError::DimensionMismatch {
            os_type,
            expected_width,
            actual_width,
            ..
        }) => {
            assert_eq!(os_type, "icl8");
            assert_eq!(expected_width, 32);
            assert_eq!(actual_width, 16);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_alpha_less_source_is_loadable_but_rejected_by_alpha_rule() {
    let dir = TempDir::new().unwrap();
    let mut paths = valid_family(dir.path());
    paths.small_4bit = dir.path().join("rgb.png");
    RgbImage::from_pixel(16, 16, Rgb([0x33, 0x66, 0x99]))
        .save(&paths.small_4bit)
        .unwrap();

    let sources = load_family(&paths).unwrap();
    let rgb_source = sources
        .iter()
        .find(|source| source.role == IconRole::Small4Bit)
        .unwrap();
    assert!(!rgb_source.has_alpha);

    let result = quantize(rgb_source, &QuantizeOptions::default());
    assert!(matches!(
        result,
        Err(QuantizeError::UnsupportedPixelFormat { os_type: "ics4" })
    ));
}
