//! Property-based invariants for the per-pixel kernels.
//!
//! 1. `map_bitmap` depends only on the blue channel.
//! 2. Sparkle never touches alpha, for any pixel, coordinate and seed.
//! 3. Sparkle moves a channel by no more than the strongest table delta.
//! 4. Transforms are total over all byte inputs.
//! 5. Palette generation is total over any endpoints and range.

use dial_core::{
    generate_luv_palette, generate_oklab_palette, generate_transform, map_bitmap,
    prepare_luv_palette, prepare_oklab_palette, prepare_transform, sparkle, CoordinateHash,
    IndexTable, Pixel, SparkleTables, XorShiftStream,
};
use proptest::prelude::*;

fn pixel_strategy() -> impl Strategy<Value = Pixel> {
    any::<[u8; 4]>().prop_map(Pixel::from)
}

fn packed_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(any::<u32>(), 256)
}

proptest! {
    #[test]
    fn map_bitmap_ignores_red_green_alpha(
        packed in packed_strategy(),
        a in pixel_strategy(),
        b in pixel_strategy(),
    ) {
        let table = IndexTable::from_packed_slice(&packed).unwrap();
        let b = Pixel::new(b.r, b.g, a.b, b.a);
        prop_assert_eq!(map_bitmap(&table, a), map_bitmap(&table, b));
        prop_assert_eq!(map_bitmap(&table, a), Pixel::from_argb(packed[a.b as usize]));
    }

    #[test]
    fn sparkle_preserves_alpha(
        input in pixel_strategy(),
        x in any::<u32>(),
        y in any::<u32>(),
        seed in any::<u64>(),
    ) {
        let tables = SparkleTables::from_magnitudes(255, 128, 64);
        let mut hashed = CoordinateHash::new(seed);
        prop_assert_eq!(sparkle(&tables, &mut hashed, input, x, y).a, input.a);
        let mut stream = XorShiftStream::seeded(seed);
        prop_assert_eq!(sparkle(&tables, &mut stream, input, x, y).a, input.a);
    }

    #[test]
    fn sparkle_moves_each_channel_at_most_the_big_magnitude(
        input in pixel_strategy(),
        x in 0u32..4096,
        y in 0u32..4096,
        seed in any::<u64>(),
        big in 0u8..=255,
    ) {
        let tables = SparkleTables::from_magnitudes(big, big / 2, big / 4);
        let out = sparkle(&tables, &mut CoordinateHash::new(seed), input, x, y);
        for (o, i) in out.rgb().into_iter().zip(input.rgb()) {
            prop_assert!(o.abs_diff(i) <= big);
        }
    }

    #[test]
    fn sparkle_with_identity_tables_is_identity(
        input in pixel_strategy(),
        x in any::<u32>(),
        y in any::<u32>(),
        seed in any::<u64>(),
    ) {
        let tables = SparkleTables::default();
        prop_assert_eq!(sparkle(&tables, &mut CoordinateHash::new(seed), input, x, y), input);
    }

    #[test]
    fn transform_is_total(
        input in pixel_strategy(),
        a in any::<[u8; 3]>(),
        b in any::<[u8; 3]>(),
        range in 0.0f32..=100.0,
    ) {
        let luv = prepare_transform(generate_luv_palette(&prepare_luv_palette(a, b), 64, 32).unwrap());
        let oklab = prepare_transform(
            generate_oklab_palette(&prepare_oklab_palette(a, b, range), 64, 32).unwrap(),
        );
        prop_assert_eq!(generate_transform(&luv, input).a, 255);
        prop_assert_eq!(generate_transform(&oklab, input).a, 255);
    }
}
