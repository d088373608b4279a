// det_entropy Library Entry Point

// Module declarations - expose all modules through the library
pub mod core;
pub mod types;

// Re-export key components for easier access
pub use crate::core::provider::RandomnessProvider;
pub use crate::types::error::EntropyError;
pub use crate::types::{RandomOutput, Subject, OUTPUT_LEN, SUBJECT_LEN};

/// Returns the version of the crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
