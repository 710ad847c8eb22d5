//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot. Streaming APIs for fast hashes often
/// require algorithm-specific buffering and are exposed as concrete types.
///
/// `hash` and `hash_with_seed` are both required: for some algorithm families
/// the unseeded form is its own function, not the seeded form applied to a
/// default seed (CityHash64 folds a seed in with an extra finalizer round that
/// the unseeded form never runs).
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (typically `u64`; `()` when the algorithm has no seeded form).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data`.
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output;

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
