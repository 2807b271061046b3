//! Deterministic random coordinates (seeded draws + replay tokens).
//!
//! Purpose
//! - Provide a small, reproducible sampler for benchmarks and randomized
//!   tests. Draws are indexable: the same `(seed, index)` token always
//!   yields the same coordinates.
//!
//! Code cross-refs: `types::Coordinate`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Coordinate;

/// Uniform box sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    /// Half the side length of the sampling box centered at the origin.
    pub half_extent: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self { half_extent: 10.0 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one coordinate uniformly from the centered box.
pub fn draw_coordinate(cfg: ScatterCfg, tok: ReplayToken) -> Coordinate {
    let mut rng = tok.to_std_rng();
    sample(&mut rng, cfg.half_extent.max(1e-9))
}

/// Draw `n` coordinates from a single token (one RNG stream).
pub fn draw_coordinates(cfg: ScatterCfg, tok: ReplayToken, n: usize) -> Vec<Coordinate> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.max(1e-9);
    (0..n).map(|_| sample(&mut rng, h)).collect()
}

#[inline]
fn sample<R: Rng>(rng: &mut R, h: f64) -> Coordinate {
    Coordinate::new(rng.gen_range(-h..h), rng.gen_range(-h..h))
}
