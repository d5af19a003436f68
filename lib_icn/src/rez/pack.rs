use crate::icon::quantize::QuantizedIcon;

/// Serializes a quantized bitmap into the byte stream its resource type
/// stores: row-major indices at the role's bit depth, with the mask plane
/// appended for the `#` types.
pub fn icon_payload(icon: &QuantizedIcon) -> Vec<u8> {
    match icon.role.bit_depth() {
        1 => {
            // Icon plane (set bit = black) followed by the mask plane
            // (set bit = opaque).
            let mut payload = pack_plane(icon.width, icon.indices.iter().map(|&index| index != 0));
            payload.extend_from_slice(&pack_plane(
                icon.width,
                icon.mask.iter().copied(),
            ));
            payload
        }
        4 => pack_nibbles(&icon.indices),
        _ => icon.indices.clone(),
    }
}

/// Packs one bit per pixel, MSB first, rows padded to whole bytes.
fn pack_plane<I: Iterator<Item = bool>>(width: u32, bits: I) -> Vec<u8> {
    let bytes_per_row = ((width + 7) / 8) as usize;
    let mut packed = Vec::new();

    let mut row_byte = 0u8;
    let mut column = 0u32;
    for bit in bits {
        row_byte = (row_byte << 1) | bit as u8;
        column += 1;
        if column % 8 == 0 || column == width {
            // Left-align a partial final byte.
            let filled = column % 8;
            if filled != 0 {
                row_byte <<= 8 - filled;
            }
            packed.push(row_byte);
            row_byte = 0;
        }
        if column == width {
            column = 0;
            debug_assert_eq!(packed.len() % bytes_per_row, 0);
        }
    }

    packed
}

/// Packs two 4-bit indices per byte, high nibble leftmost.
fn pack_nibbles(indices: &[u8]) -> Vec<u8> {
    let mut packed = Vec::with_capacity((indices.len() + 1) / 2);
    for pair in indices.chunks(2) {
        let high = pair[0] & 0x0F;
        let low = if pair.len() > 1 { pair[1] & 0x0F } else { 0 };
        packed.push((high << 4) | low);
    }
    packed
}
