use log::debug;
use thiserror::Error;

use super::loader::SourceImage;
use super::role::IconRole;
use crate::palette::matcher::{nearest_index, DistanceMetric};

#[derive(Error, Debug)]
pub enum QuantizeError {
    #[error(
        "{os_type} source has no alpha channel, required by the alpha-threshold transparency rule"
    )]
    UnsupportedPixelFormat { os_type: &'static str },
}

/// Decides which pixels are transparent. One rule is chosen per run and
/// applied to all six images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparencyRule {
    /// Opaque iff alpha >= threshold. Requires the source to carry an
    /// alpha channel.
    AlphaThreshold(u8),
    /// Transparent iff the RGB value exactly matches the key. Usable with
    /// alpha-less sources.
    ChromaKey([u8; 3]),
}

impl Default for TransparencyRule {
    fn default() -> Self {
        TransparencyRule::AlphaThreshold(128)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuantizeOptions {
    pub metric: DistanceMetric,
    pub transparency: TransparencyRule,
}

/// One quantized bitmap: a palette index per pixel plus the 1-bit mask
/// grid (true = opaque). The emitter consumes the mask only for roles
/// whose resource carries a mask plane.
pub struct QuantizedIcon {
    pub role: IconRole,
    pub width: u32,
    pub height: u32,
    pub indices: Vec<u8>,
    pub mask: Vec<bool>,
}

/// Maps every source pixel to its nearest entry in the role's palette and
/// derives the transparency mask.
pub fn quantize(
    source: &SourceImage,
    options: &QuantizeOptions,
) -> Result<QuantizedIcon, QuantizeError> {
    if matches!(options.transparency, TransparencyRule::AlphaThreshold(_)) && !source.has_alpha {
        return Err(QuantizeError::UnsupportedPixelFormat {
            os_type: source.role.os_type(),
        });
    }

    let palette = source.role.palette();
    let pixel_count = (source.width * source.height) as usize;

    let mut indices = Vec::with_capacity(pixel_count);
    let mut mask = Vec::with_capacity(pixel_count);

    for pixel in source.rgba.chunks_exact(4) {
        let rgb = [pixel[0], pixel[1], pixel[2]];
        indices.push(nearest_index(rgb, palette, options.metric));

        let opaque = match options.transparency {
            TransparencyRule::AlphaThreshold(threshold) => pixel[3] >= threshold,
            TransparencyRule::ChromaKey(key) => rgb != key,
        };
        mask.push(opaque);
    }

    debug!(
        "Quantized {} against {} palette entries ({} opaque of {} pixels)",
        source.role.os_type(),
        palette.len(),
        mask.iter().filter(|&&opaque| opaque).count(),
        pixel_count
    );

    Ok(QuantizedIcon {
        role: source.role,
        width: source.width,
        height: source.height,
        indices,
        mask,
    })
}
