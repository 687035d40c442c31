//! Инфраструктура: реализации RNG для движка.

pub mod rng;

pub use rng::{DeterministicRng, SystemRng};
