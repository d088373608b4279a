//! Value types shared across the crate.
//!
//! Both types are fixed-width newtypes: the subject is the 8-byte
//! little-endian encoding of a counter value, and the random output is a
//! 32-byte BLAKE3 digest. Callers that persist either one do so through
//! their own storage mechanism; `from_bytes`/`from_slice` are the re-entry
//! points for bytes read back from that storage.

pub mod error;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::error::EntropyError;

/// Width of a subject in bytes (little-endian `u64`)
pub const SUBJECT_LEN: usize = 8;

/// Width of a random output in bytes (BLAKE3 produces 32-byte digests)
pub const OUTPUT_LEN: usize = 32;

/// Encoded counter value disambiguating draws within one entropy epoch
///
/// A subject carries no unpredictability of its own. It exists so that
/// repeated draws against the same entropy value do not collapse to the
/// same output. Subjects repeat once the underlying counter wraps around;
/// that is an accepted limitation, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject([u8; SUBJECT_LEN]);

impl Subject {
    /// Encode a counter value as a subject
    pub fn from_counter(counter: u64) -> Self {
        Self(counter.to_le_bytes())
    }

    /// Reconstruct a subject from persisted bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EntropyError> {
        let raw: [u8; SUBJECT_LEN] =
            bytes
                .try_into()
                .map_err(|_| EntropyError::InvalidSubjectLength {
                    expected: SUBJECT_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(raw))
    }

    /// The counter value this subject encodes
    pub fn counter_value(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }

    /// Raw encoded bytes
    pub fn as_bytes(&self) -> &[u8; SUBJECT_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Subject {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Fixed-size pseudo-random value produced by the provider
///
/// Produced fresh on every call and never persisted by this crate; callers
/// may store it and bring it back through [`RandomOutput::from_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomOutput([u8; OUTPUT_LEN]);

impl RandomOutput {
    pub(crate) fn from_digest(digest: [u8; OUTPUT_LEN]) -> Self {
        Self(digest)
    }

    /// Reconstruct an output from persisted bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EntropyError> {
        let raw: [u8; OUTPUT_LEN] =
            bytes
                .try_into()
                .map_err(|_| EntropyError::InvalidOutputLength {
                    expected: OUTPUT_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(raw))
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; OUTPUT_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for RandomOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for RandomOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
