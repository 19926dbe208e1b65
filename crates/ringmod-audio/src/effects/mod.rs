//! Audio effects applied in place to sample buffers.

pub mod ring_mod;

pub use ring_mod::RingModulator;
