//! CLI command implementations.

pub mod cleaners;
pub mod info;
pub mod normalize;
pub mod numbers;
