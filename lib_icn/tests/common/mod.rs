use lib_icn::{IconRole, SourceImage};

/// A single-color source of the role's expected size.
pub fn solid_source(role: IconRole, rgba: [u8; 4]) -> SourceImage {
    let (width, height) = role.dimensions();
    SourceImage {
        role,
        width,
        height,
        rgba: rgba.repeat((width * height) as usize),
        has_alpha: true,
    }
}

/// A deterministic multi-color source: pixel values derived from the
/// coordinate, fully opaque.
pub fn patterned_source(role: IconRole) -> SourceImage {
    let (width, height) = role.dimensions();
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&[
                (x * 8) as u8,
                (y * 8) as u8,
                ((x + y) * 4) as u8,
                0xFF,
            ]);
        }
    }
    SourceImage {
        role,
        width,
        height,
        rgba,
        has_alpha: true,
    }
}

/// One patterned source per role, in emission order.
pub fn patterned_family() -> Vec<SourceImage> {
    IconRole::ALL.iter().map(|&role| patterned_source(role)).collect()
}
