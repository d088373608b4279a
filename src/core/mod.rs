// Core module implementing the deterministic randomness provider

pub mod provider;

pub use provider::RandomnessProvider;
