//! Deterministic randomness provider.
//!
//! Combines a monotonically advancing counter with externally supplied
//! entropy to produce reproducible pseudo-random values. The provider is
//! designed for deterministic state-machine replication: every replica
//! executing the same transition with the same entropy must compute
//! byte-identical counter mutations and outputs. The entropy input is the
//! only source of unpredictability; its quality is entirely the supplier's
//! responsibility. This component guarantees determinism and
//! uniqueness-within-epoch, nothing stronger.

use tracing::trace;

use crate::types::{RandomOutput, Subject};

/// Produces reproducible, context-unique pseudo-random values
///
/// The counter is the only mutable state and is owned exclusively by the
/// provider. Callers needing several draws within one transition must
/// sequence them through repeated [`RandomnessProvider::next_subject`]
/// calls; the `&mut self` receiver enforces the single-writer rule, so no
/// lock is carried.
///
/// Persistence of the counter across transitions is the surrounding
/// environment's job: read it out with [`RandomnessProvider::counter`] and
/// resume with [`RandomnessProvider::with_counter`], or serialize the
/// provider itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomnessProvider {
    counter: u64,
}

impl RandomnessProvider {
    /// Create a provider with the counter at zero
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Resume a provider from a persisted counter value
    pub fn with_counter(counter: u64) -> Self {
        Self { counter }
    }

    /// Current counter value, for persisting between transitions
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Encode the current counter as a subject and advance the counter
    ///
    /// Returns the pre-increment value's encoding. The counter wraps
    /// silently on overflow, after which subjects repeat.
    pub fn next_subject(&mut self) -> Subject {
        let subject = Subject::from_counter(self.counter);
        self.counter = self.counter.wrapping_add(1);

        trace!(counter = subject.counter_value(), "issued subject");
        subject
    }

    /// Deterministically combine entropy and subject into a random output
    ///
    /// Pure function of its two inputs: identical inputs always yield an
    /// identical output, which is what cross-replica replay requires.
    /// Never fails; empty entropy is accepted and hashed as-is.
    pub fn random(entropy: &[u8], subject: &Subject) -> RandomOutput {
        let mut hasher = blake3::Hasher::new();

        // Add epoch entropy
        hasher.update(entropy);

        // Add encoded counter value
        hasher.update(subject.as_bytes());

        RandomOutput::from_digest(*hasher.finalize().as_bytes())
    }

    /// Consume the next subject and combine it with the given entropy
    pub fn draw(&mut self, entropy: &[u8]) -> RandomOutput {
        let subject = self.next_subject();
        let output = Self::random(entropy, &subject);

        trace!(subject = %subject, output = %output, "entropy draw");
        output
    }

    /// Check that an output matches a recomputation from its inputs
    ///
    /// Lets one replica verify a draw reported by another without trusting
    /// anything beyond the shared entropy and subject.
    pub fn verify_draw(entropy: &[u8], subject: &Subject, output: &RandomOutput) -> bool {
        Self::random(entropy, subject) == *output
    }
}

impl Default for RandomnessProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_is_deterministic() {
        let subject = Subject::from_counter(42);
        let first = RandomnessProvider::random(b"epoch entropy", &subject);
        let second = RandomnessProvider::random(b"epoch entropy", &subject);
        assert_eq!(first, second);
    }

    #[test]
    fn subjects_are_unique_within_epoch() {
        let mut provider = RandomnessProvider::new();
        let entropy = b"fixed epoch entropy";

        let mut subjects = HashSet::new();
        let mut outputs = HashSet::new();
        for _ in 0..1000 {
            let subject = provider.next_subject();
            assert!(subjects.insert(subject));
            assert!(outputs.insert(RandomnessProvider::random(entropy, &subject)));
        }
    }

    #[test]
    fn counter_wraps_to_zero() {
        let mut provider = RandomnessProvider::with_counter(u64::MAX);
        let subject = provider.next_subject();
        assert_eq!(subject.counter_value(), u64::MAX);
        assert_eq!(provider.counter(), 0);
    }

    #[test]
    fn output_is_sensitive_to_entropy() {
        let subject = Subject::from_counter(7);
        let a = RandomnessProvider::random(b"entropy A", &subject);
        let b = RandomnessProvider::random(b"entropy B", &subject);
        assert_ne!(a, b);
    }

    #[test]
    fn first_two_subjects_encode_zero_and_one() {
        let mut provider = RandomnessProvider::new();

        let first = provider.next_subject();
        assert_eq!(first.counter_value(), 0);
        assert_eq!(provider.counter(), 1);

        let second = provider.next_subject();
        assert_eq!(second.counter_value(), 1);
        assert_eq!(provider.counter(), 2);

        let entropy = b"entropy A";
        assert_ne!(
            RandomnessProvider::random(entropy, &first),
            RandomnessProvider::random(entropy, &second)
        );
    }

    #[test]
    fn empty_entropy_is_accepted() {
        let subject = Subject::from_counter(0);
        let output = RandomnessProvider::random(&[], &subject);
        assert_eq!(output, RandomnessProvider::random(&[], &subject));
    }

    #[test]
    fn draw_matches_explicit_sequence() {
        let entropy = b"epoch";
        let mut drawn = RandomnessProvider::new();
        let mut explicit = RandomnessProvider::new();

        let via_draw = drawn.draw(entropy);
        let subject = explicit.next_subject();
        let via_parts = RandomnessProvider::random(entropy, &subject);

        assert_eq!(via_draw, via_parts);
        assert_eq!(drawn.counter(), explicit.counter());
    }

    #[test]
    fn verify_draw_accepts_and_rejects() {
        let mut provider = RandomnessProvider::new();
        let subject = provider.next_subject();
        let output = RandomnessProvider::random(b"shared", &subject);

        assert!(RandomnessProvider::verify_draw(b"shared", &subject, &output));
        assert!(!RandomnessProvider::verify_draw(b"other", &subject, &output));
    }
}
