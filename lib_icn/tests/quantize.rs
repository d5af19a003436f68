mod common;

use common::{patterned_source, solid_source};
use lib_icn::palette::clut::CLUT_8BIT;
use lib_icn::{quantize, DistanceMetric, IconRole, QuantizeOptions};

#[test]
fn test_every_index_minimizes_distance() {
    let source = patterned_source(IconRole::Large8Bit);
    let icon = quantize(&source, &QuantizeOptions::default()).unwrap();
    let metric = DistanceMetric::Euclidean;

    for (pixel, &assigned) in source.rgba.chunks_exact(4).zip(icon.indices.iter()) {
        let rgb = [pixel[0], pixel[1], pixel[2]];
        let assigned_distance = metric.distance(rgb, CLUT_8BIT[assigned as usize]);

        for (index, &entry) in CLUT_8BIT.iter().enumerate() {
            let distance = metric.distance(rgb, entry);
            assert!(
                distance > assigned_distance
                    || (distance == assigned_distance && index >= assigned as usize),
                "pixel {:?}: entry {} beats assigned {}",
                rgb,
                index,
                assigned
            );
        }
    }
}

#[test]
fn test_quantization_is_total() {
    // Every pixel of every role gets exactly one in-range index.
    for role in IconRole::ALL {
        let source = patterned_source(role);
        let icon = quantize(&source, &QuantizeOptions::default()).unwrap();
        assert_eq!(icon.indices.len(), (source.width * source.height) as usize);
        let palette_len = role.palette().len();
        assert!(icon
            .indices
            .iter()
            .all(|&index| (index as usize) < palette_len));
    }
}

#[test]
fn test_fully_transparent_source_yields_transparent_mask() {
    for role in [IconRole::LargeMono, IconRole::SmallMono] {
        let source = solid_source(role, [0x00, 0x00, 0x00, 0x00]);
        let icon = quantize(&source, &QuantizeOptions::default()).unwrap();
        assert!(icon.mask.iter().all(|&opaque| !opaque), "{:?}", role);
    }
}

#[test]
fn test_alpha_threshold_boundary() {
    let opaque = solid_source(IconRole::SmallMono, [0x00, 0x00, 0x00, 128]);
    let icon = quantize(&opaque, &QuantizeOptions::default()).unwrap();
    assert!(icon.mask.iter().all(|&bit| bit));

    let transparent = solid_source(IconRole::SmallMono, [0x00, 0x00, 0x00, 127]);
    let icon = quantize(&transparent, &QuantizeOptions::default()).unwrap();
    assert!(icon.mask.iter().all(|&bit| !bit));
}
