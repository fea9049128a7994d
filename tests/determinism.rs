//! Property tests: identical seeds give identical worlds.

use hearthvale::{classify_biome, noise, WorldGenerator};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_world_is_a_function_of_seed(seed in any::<u64>(), width in 40u32..120, height in 40u32..120) {
        let generator = WorldGenerator::new();
        let a = generator.generate(width, height, Some(seed)).unwrap();
        let b = generator.generate(width, height, Some(seed)).unwrap();

        prop_assert_eq!(&a.tiles, &b.tiles);
        prop_assert_eq!(&a.biomes, &b.biomes);
        prop_assert_eq!(&a.settlements, &b.settlements);
        prop_assert_eq!(&a.npcs, &b.npcs);
        prop_assert_eq!(&a.enemies, &b.enemies);
        prop_assert_eq!(&a.chests, &b.chests);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_chunks_are_a_function_of_coordinates(seed in any::<u64>(), cx in -50i32..50, cy in -50i32..50) {
        let generator = WorldGenerator::new();
        let a = generator.generate_chunk(seed, cx, cy).unwrap();
        let b = generator.generate_chunk(seed, cx, cy).unwrap();
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_noise_is_stable_and_bounded(seed in any::<u64>(), x in -10_000i32..10_000, y in -10_000i32..10_000) {
        let value = noise(seed, x, y);
        prop_assert!((0.0..=1.0).contains(&value));
        prop_assert_eq!(value, noise(seed, x, y));
        prop_assert_eq!(classify_biome(value), classify_biome(noise(seed, x, y)));
    }
}
