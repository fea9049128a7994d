//! # Biome Classification
//!
//! Closed-form noise keyed on the seed and world coordinates, thresholded
//! into five biome bands.
//!
//! The classifier holds no state beyond the seed, so any cell of any chunk can
//! be classified independently and always agrees with a cached grid.

use crate::game::{Biome, Grid, Position};
use crate::generation::utils::splitmix64;
use crate::generation::{BiomeNoise, GenerationConfig, Generator};
use crate::{HearthvaleError, HearthvaleResult};
use ::noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use std::f64::consts::TAU;

/// Upper noise bounds of each band, in ascending order. Anything above the
/// last bound is snow.
const BIOME_BANDS: [(f64, Biome); 4] = [
    (0.32, Biome::Desert),
    (0.46, Biome::Plains),
    (0.60, Biome::Forest),
    (0.70, Biome::Swamp),
];

const LARGE_FREQ: f64 = 0.015;
const MEDIUM_FREQ: f64 = 0.06;
const SMALL_FREQ: f64 = 0.2;
const LAYER_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];
const PERLIN_FREQ: f64 = 0.02;

/// Seed-derived phase offsets of the sinusoid layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidPhases([f64; 6]);

impl SinusoidPhases {
    pub fn from_seed(seed: u64) -> Self {
        let mut phases = [0.0; 6];
        for (k, phase) in phases.iter_mut().enumerate() {
            let bits = splitmix64(seed ^ (k as u64 + 1).wrapping_mul(0xA076_1D64_78BD_642F));
            *phase = (bits >> 11) as f64 / (1u64 << 53) as f64 * TAU;
        }
        Self(phases)
    }

    /// Noise value in [0, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let p = &self.0;
        let large = 0.5 * ((x * LARGE_FREQ + p[0]).sin() + (y * LARGE_FREQ + p[1]).cos());
        let medium = (x * MEDIUM_FREQ + y * MEDIUM_FREQ * 0.4 + p[2]).sin()
            * (y * MEDIUM_FREQ * 0.9 - x * MEDIUM_FREQ * 0.3 + p[3]).cos();
        let small = 0.5 * ((x * SMALL_FREQ + y * SMALL_FREQ * 0.5 + p[4]).sin()
            + (y * SMALL_FREQ - x * SMALL_FREQ * 0.25 + p[5]).cos());

        let sum = LAYER_WEIGHTS[0] * large + LAYER_WEIGHTS[1] * medium + LAYER_WEIGHTS[2] * small;
        ((sum + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Samples the sinusoidal noise field at a world coordinate.
///
/// # Examples
///
/// ```
/// use hearthvale::generation::noise;
///
/// let value = noise(12345, 10, -4);
/// assert!((0.0..=1.0).contains(&value));
/// assert_eq!(value, noise(12345, 10, -4));
/// ```
pub fn noise(seed: u64, x: i32, y: i32) -> f64 {
    SinusoidPhases::from_seed(seed).sample(x as f64, y as f64)
}

/// Maps a noise value onto a biome band.
pub fn classify_biome(value: f64) -> Biome {
    BIOME_BANDS
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, biome)| *biome)
        .unwrap_or(Biome::Snow)
}

/// Noise source for one generation run.
pub enum NoiseSampler {
    Sinusoidal(SinusoidPhases),
    Perlin(Perlin),
}

impl NoiseSampler {
    /// Creates a sampler for the given seed and backend.
    pub fn new(seed: u64, backend: BiomeNoise) -> Self {
        match backend {
            BiomeNoise::Sinusoidal => NoiseSampler::Sinusoidal(SinusoidPhases::from_seed(seed)),
            BiomeNoise::Perlin => NoiseSampler::Perlin(Perlin::new(seed as u32)),
        }
    }

    /// Noise value in [0, 1] at a world coordinate.
    pub fn sample(&self, x: i32, y: i32) -> f64 {
        match self {
            NoiseSampler::Sinusoidal(phases) => phases.sample(x as f64, y as f64),
            NoiseSampler::Perlin(perlin) => {
                let raw = perlin.get([x as f64 * PERLIN_FREQ, y as f64 * PERLIN_FREQ]);
                ((raw + 1.0) / 2.0).clamp(0.0, 1.0)
            }
        }
    }

    /// Biome at a world coordinate.
    pub fn biome_at(&self, x: i32, y: i32) -> Biome {
        classify_biome(self.sample(x, y))
    }
}

/// Biome classification of a world or chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeMap {
    /// World coordinate of `grid`'s top-left cell
    pub origin: Position,
    /// One biome per cell, local coordinates
    pub grid: Grid<Biome>,
}

impl BiomeMap {
    /// Classifies every cell of a `width` x `height` window starting at `origin`.
    pub fn generate(seed: u64, origin: Position, width: u32, height: u32, backend: BiomeNoise) -> Self {
        let sampler = NoiseSampler::new(seed, backend);
        let grid = Grid::from_fn(width, height, |pos| {
            sampler.biome_at(origin.x.saturating_add(pos.x), origin.y.saturating_add(pos.y))
        });
        Self { origin, grid }
    }

    /// Biome at a local grid position.
    pub fn biome_at(&self, pos: Position) -> Option<Biome> {
        self.grid.get(pos).copied()
    }
}

/// Pipeline stage producing the biome map. Consumes no randomness.
#[derive(Debug, Clone, Default)]
pub struct BiomeGenerator;

impl Generator<BiomeMap> for BiomeGenerator {
    fn generate(&self, config: &GenerationConfig, _rng: &mut StdRng) -> HearthvaleResult<BiomeMap> {
        let map = BiomeMap::generate(config.noise_seed(), config.origin, config.width, config.height, config.noise);
        log::debug!(
            "classified {}x{} biome grid at {:?}",
            config.width,
            config.height,
            config.origin
        );
        Ok(map)
    }

    fn validate(&self, map: &BiomeMap, config: &GenerationConfig) -> HearthvaleResult<()> {
        if map.grid.width() != config.width || map.grid.height() != config.height {
            return Err(HearthvaleError::GenerationFailed(format!(
                "biome grid is {}x{}, expected {}x{}",
                map.grid.width(),
                map.grid.height(),
                config.width,
                config.height
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "BiomeGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;
    use std::collections::HashSet;

    #[test]
    fn test_noise_is_bounded_and_deterministic() {
        for seed in [0u64, 1, 12345, u64::MAX] {
            for (x, y) in [(0, 0), (17, -3), (-500, 900), (i32::MAX / 2, 4)] {
                let v = noise(seed, x, y);
                assert!((0.0..=1.0).contains(&v), "noise {} out of range", v);
                assert_eq!(v, noise(seed, x, y));
            }
        }
    }

    #[test]
    fn test_noise_depends_on_seed() {
        let differing = (0..50).filter(|&x| noise(1, x, x) != noise(2, x, x)).count();
        assert!(differing > 40);
    }

    #[test]
    fn test_noise_is_spatially_coherent() {
        // Neighbouring cells differ by far less than the full range.
        for x in 0..100 {
            let delta = (noise(77, x, 10) - noise(77, x + 1, 10)).abs();
            assert!(delta < 0.1, "jump of {} at x={}", delta, x);
        }
    }

    #[test]
    fn test_classify_biome_bands() {
        assert_eq!(classify_biome(0.0), Biome::Desert);
        assert_eq!(classify_biome(0.319), Biome::Desert);
        assert_eq!(classify_biome(0.32), Biome::Plains);
        assert_eq!(classify_biome(0.5), Biome::Forest);
        assert_eq!(classify_biome(0.65), Biome::Swamp);
        assert_eq!(classify_biome(0.7), Biome::Snow);
        assert_eq!(classify_biome(1.0), Biome::Snow);
    }

    #[test]
    fn test_biome_grid_matches_point_classification() {
        let origin = Position::new(64, -128);
        let map = BiomeMap::generate(99, origin, 32, 32, BiomeNoise::Sinusoidal);
        for (pos, biome) in map.grid.iter() {
            let expected = classify_biome(noise(99, origin.x + pos.x, origin.y + pos.y));
            assert_eq!(*biome, expected);
        }
    }

    #[test]
    fn test_large_map_covers_several_biomes() {
        let map = BiomeMap::generate(2024, Position::origin(), 400, 400, BiomeNoise::Sinusoidal);
        let seen: HashSet<Biome> = map.grid.values().copied().collect();
        assert!(seen.len() >= 3, "only saw {:?}", seen);
    }

    #[test]
    fn test_perlin_backend_is_deterministic() {
        let a = BiomeMap::generate(5, Position::origin(), 40, 40, BiomeNoise::Perlin);
        let b = BiomeMap::generate(5, Position::origin(), 40, 40, BiomeNoise::Perlin);
        assert_eq!(a, b);
    }

    #[test]
    fn test_biome_generator_stage() {
        let config = GenerationConfig::new(3, 30, 20);
        let mut rng = utils::create_rng(&config);
        let generator = BiomeGenerator;
        let map = generator.generate(&config, &mut rng).unwrap();
        assert!(generator.validate(&map, &config).is_ok());
        assert_eq!(map.biome_at(Position::new(29, 19)), map.grid.get(Position::new(29, 19)).copied());
        assert_eq!(map.biome_at(Position::new(30, 0)), None);
    }
}
