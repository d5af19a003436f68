/// Color distance used for palette matching. A single swappable pure
/// function; the rest of the pipeline never looks at components directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Squared RGB distance.
    #[default]
    Euclidean,
    /// Squared RGB distance with 299/587/114 luma weights.
    WeightedRgb,
}

impl DistanceMetric {
    pub fn distance(self, a: [u8; 3], b: [u8; 3]) -> u32 {
        let dr = a[0] as i32 - b[0] as i32;
        let dg = a[1] as i32 - b[1] as i32;
        let db = a[2] as i32 - b[2] as i32;

        match self {
            DistanceMetric::Euclidean => (dr * dr + dg * dg + db * db) as u32,
            DistanceMetric::WeightedRgb => {
                (299 * dr * dr + 587 * dg * dg + 114 * db * db) as u32
            }
        }
    }
}

/// Returns the index of the palette entry closest to `color`.
///
/// Exact ties resolve to the lowest index: a later entry only wins with a
/// strictly smaller distance. An exact hit ends the scan early.
pub fn nearest_index(color: [u8; 3], palette: &[[u8; 3]], metric: DistanceMetric) -> u8 {
    debug_assert!(!palette.is_empty() && palette.len() <= 256);

    let mut best = 0u8;
    let mut best_distance = u32::MAX;

    for (index, entry) in palette.iter().enumerate() {
        let distance = metric.distance(color, *entry);
        if distance < best_distance {
            best_distance = distance;
            best = index as u8;
            if distance == 0 {
                break;
            }
        }
    }

    best
}
