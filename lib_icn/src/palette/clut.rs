use lazy_static::lazy_static;

pub const CLUT_8BIT_LEN: usize = 256;

/// Component levels of the 6x6x6 color cube, brightest first.
const CUBE_LEVELS: [u8; 6] = [0xFF, 0xCC, 0x99, 0x66, 0x33, 0x00];

/// Steps of the red/green/blue/gray ramps, brightest first. These are the
/// multiples of 0x11 that the cube does not already contain.
const RAMP_LEVELS: [u8; 10] = [
    0xEE, 0xDD, 0xBB, 0xAA, 0x88, 0x77, 0x55, 0x44, 0x22, 0x11,
];

lazy_static! {
    /// The standard 8-bit system color table.
    ///
    /// Indices 0-214 hold the 6x6x6 color cube (red-major, white first) with
    /// the cube's black displaced to the end of the table; 215-254 hold the
    /// four 10-step ramps (red, green, blue, gray); 255 is black.
    pub static ref CLUT_8BIT: [[u8; 3]; CLUT_8BIT_LEN] = build_clut_8bit();
}

/// The standard 4-bit system palette.
pub static CLUT_4BIT: [[u8; 3]; 16] = [
    [0xFF, 0xFF, 0xFF], // white
    [0xFB, 0xF3, 0x05], // yellow
    [0xFF, 0x64, 0x03], // orange
    [0xDD, 0x09, 0x07], // red
    [0xF2, 0x08, 0x84], // magenta
    [0x47, 0x00, 0xA5], // purple
    [0x00, 0x00, 0xD3], // blue
    [0x02, 0xAB, 0xEA], // cyan
    [0x1F, 0xB7, 0x14], // green
    [0x00, 0x64, 0x12], // dark green
    [0x56, 0x2C, 0x05], // brown
    [0x90, 0x71, 0x3A], // tan
    [0xC0, 0xC0, 0xC0], // light gray
    [0x80, 0x80, 0x80], // medium gray
    [0x40, 0x40, 0x40], // dark gray
    [0x00, 0x00, 0x00], // black
];

/// Monochrome palette: a set bit in a 1-bit plane means black.
pub static CLUT_1BIT: [[u8; 3]; 2] = [[0xFF, 0xFF, 0xFF], [0x00, 0x00, 0x00]];

fn build_clut_8bit() -> [[u8; 3]; CLUT_8BIT_LEN] {
    let mut table = [[0u8; 3]; CLUT_8BIT_LEN];
    let mut index = 0;

    // Color cube. The final cube entry (black) is not written here; it lives
    // at index 255 instead, after the ramps.
    for &r in &CUBE_LEVELS {
        for &g in &CUBE_LEVELS {
            for &b in &CUBE_LEVELS {
                if index < 215 {
                    table[index] = [r, g, b];
                    index += 1;
                }
            }
        }
    }

    for &v in &RAMP_LEVELS {
        table[index] = [v, 0x00, 0x00];
        index += 1;
    }
    for &v in &RAMP_LEVELS {
        table[index] = [0x00, v, 0x00];
        index += 1;
    }
    for &v in &RAMP_LEVELS {
        table[index] = [0x00, 0x00, v];
        index += 1;
    }
    for &v in &RAMP_LEVELS {
        table[index] = [v, v, v];
        index += 1;
    }

    table[255] = [0x00, 0x00, 0x00];
    table
}
