//! Random sampling helpers.
//!
//! Nothing here owns a global generator: every sampler borrows the caller's
//! stream. `stream` hands out independent, reproducible ChaCha streams, one
//! per execution context.

use std::cell::RefCell;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::*;

thread_local! {
    /// Per-thread stream for geometry whose `hit` carries no random context.
    static THREAD_RNG: RefCell<ChaCha8Rng> = RefCell::new(ChaCha8Rng::from_entropy());
}

/// Uniform value in `[0, 1)`.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R) -> Float {
    rng.gen::<Float>()
}

/// Uniform value in `[min, max)`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Float {
    min + (max - min) * random_float(rng)
}

/// Stream reserved for laying out random scenes.
pub const SCENE_STREAM: u64 = u64::MAX;
/// Stream reserved for the per-thread generator during a render.
pub const THREAD_STREAM: u64 = u64::MAX - 1;

/// Independent generator for context `index` of a render seeded with `seed`.
pub fn stream(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}

pub fn with_thread_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    THREAD_RNG.with(|rng| f(&mut *rng.borrow_mut()))
}

/// Makes the calling thread's stream reproducible without overlapping any
/// per-row stream of the same seed.
pub fn reseed_thread_rng(seed: u64) {
    THREAD_RNG.with(|rng| *rng.borrow_mut() = stream(seed, THREAD_STREAM));
}

pub trait VectorExt: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Self;
    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn near_zero(&self) -> bool;
}

impl VectorExt for Vector {
    fn random<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Self {
        Self {
            x: random_range(rng, min, max),
            y: random_range(rng, min, max),
            z: random_range(rng, min, max),
        }
    }
    // closed form, so it terminates under any generator
    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let theta = 2.0 * PI * random_float(rng);
        let z = 2.0 * random_float(rng) - 1.0;
        let r = (1.0 - z * z).max(0.0).sqrt();
        Self::new(r * theta.cos(), r * theta.sin(), z)
    }
    fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r = random_float(rng).sqrt();
        let a = 2.0 * PI * random_float(rng);
        Self::new(r * a.cos(), r * a.sin(), 0.0)
    }
    fn near_zero(&self) -> bool {
        let t = 1e-8;
        (self.x.abs() < t) && (self.y.abs() < t) && (self.z.abs() < t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn unit_vectors_have_unit_length() {
        let mut rng = stream(7, 0);
        for _ in 0..1000 {
            let v = Vector::random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn samplers_terminate_under_constant_draws() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(random_float(&mut rng), 0.0);
        let v = Vector::random_unit_vector(&mut rng);
        assert!((v - Vector::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert_eq!(Vector::random_in_unit_disk(&mut rng), Vector::ZERO);
    }

    #[test]
    fn disk_points_stay_inside() {
        let mut rng = stream(3, 1);
        for _ in 0..1000 {
            let p = Vector::random_in_unit_disk(&mut rng);
            assert!(p.length_squared() < 1.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn ranges_are_respected() {
        let mut rng = stream(11, 0);
        for _ in 0..1000 {
            let x = random_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
            let v = Vector::random(&mut rng, 0.5, 1.0);
            assert!(v.min_element() >= 0.5 && v.max_element() < 1.0);
        }
    }

    #[test]
    fn streams_are_reproducible_and_independent() {
        let draw = |index| {
            let mut rng = stream(5, index);
            (0..4).map(|_| random_float(&mut rng)).collect::<Vec<_>>()
        };
        let (a, b, c) = (draw(0), draw(0), draw(1));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn thread_stream_does_not_replay_row_streams() {
        reseed_thread_rng(9);
        let thread_draws: Vec<Float> = with_thread_rng(|rng| (0..5).map(|_| random_float(rng)).collect());
        reseed_thread_rng(9);
        let again: Vec<Float> = with_thread_rng(|rng| (0..5).map(|_| random_float(rng)).collect());
        assert_eq!(thread_draws, again);
        for row in (0..16).chain([SCENE_STREAM]) {
            let mut rng = stream(9, row);
            let row_draws: Vec<Float> = (0..5).map(|_| random_float(&mut rng)).collect();
            assert_ne!(thread_draws, row_draws);
        }
    }

    #[test]
    fn near_zero_threshold() {
        assert!(Vector::splat(1e-9).near_zero());
        assert!(!Vector::new(0.0, 1e-7, 0.0).near_zero());
    }
}
