//! Buffered accumulators over the one-shot CityHash functions.
//!
//! These types exist for callers that receive data in pieces but want a
//! CityHash digest of the concatenation. Bytes are buffered as written and
//! every digest request hashes the full buffered contents, so finalization
//! is idempotent and `update` may continue after a digest has been taken.

#![allow(clippy::indexing_slicing)] // Fixed-size digest packing

use alloc::{string::String, vec::Vec};

use crate::city::{Uint128, hash32, hash64, hash64_with_seed, hash64_with_seeds, hash128, hash128_with_seed};

macro_rules! define_buffered_city {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      output_size: $size:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Default)]
    $vis struct $name {
      buf: Vec<u8>,
    }

    impl $name {
      /// Digest size in bytes.
      pub const OUTPUT_SIZE: usize = $size;

      /// Create an empty accumulator.
      #[must_use]
      pub fn new() -> Self {
        Self { buf: Vec::new() }
      }

      /// Append `data` to the buffered input.
      pub fn update(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
      }

      /// The bytes buffered so far.
      #[must_use]
      pub fn buffered(&self) -> &[u8] {
        &self.buf
      }

      /// Clear the buffer so the accumulator can be reused.
      pub fn reset(&mut self) {
        self.buf.clear();
      }

      /// Lowercase hex rendering of [`Self::digest_bytes`], zero-padded to
      /// twice the digest size.
      #[must_use]
      pub fn to_hex(&self) -> String {
        use core::fmt::Write as _;
        let mut out = String::with_capacity(2 * Self::OUTPUT_SIZE);
        for b in self.digest_bytes() {
          // Writing to a String cannot fail.
          let _ = write!(out, "{b:02x}");
        }
        out
      }
    }
  };
}

define_buffered_city! {
  /// Buffering wrapper around [`hash32`].
  pub struct BufferedCity32 {
    output_size: 4,
  }
}

define_buffered_city! {
  /// Buffering wrapper around [`hash64`] and its seeded variants.
  pub struct BufferedCity64 {
    output_size: 8,
  }
}

define_buffered_city! {
  /// Buffering wrapper around [`hash128`] and its seeded variant.
  pub struct BufferedCity128 {
    output_size: 16,
  }
}

impl BufferedCity32 {
  /// Hash the buffered contents.
  #[must_use]
  pub fn finalize(&self) -> u32 {
    hash32(&self.buf)
  }

  /// Big-endian encoding of [`Self::finalize`].
  #[must_use]
  pub fn digest_bytes(&self) -> [u8; 4] {
    self.finalize().to_be_bytes()
  }
}

impl BufferedCity64 {
  /// Hash the buffered contents.
  #[must_use]
  pub fn finalize(&self) -> u64 {
    hash64(&self.buf)
  }

  /// Hash the buffered contents with `seed` folded in.
  #[must_use]
  pub fn finalize_with_seed(&self, seed: u64) -> u64 {
    hash64_with_seed(&self.buf, seed)
  }

  /// Hash the buffered contents with two seeds folded in.
  #[must_use]
  pub fn finalize_with_seeds(&self, seed0: u64, seed1: u64) -> u64 {
    hash64_with_seeds(&self.buf, seed0, seed1)
  }

  /// Big-endian encoding of [`Self::finalize`].
  #[must_use]
  pub fn digest_bytes(&self) -> [u8; 8] {
    self.finalize().to_be_bytes()
  }
}

impl BufferedCity128 {
  /// Hash the buffered contents.
  #[must_use]
  pub fn finalize(&self) -> Uint128 {
    hash128(&self.buf)
  }

  /// Hash the buffered contents with a 128-bit `seed` folded in.
  #[must_use]
  pub fn finalize_with_seed(&self, seed: Uint128) -> Uint128 {
    hash128_with_seed(&self.buf, seed)
  }

  /// Big-endian encoding of [`Self::finalize`]: high word first, then low.
  #[must_use]
  pub fn digest_bytes(&self) -> [u8; 16] {
    let digest = self.finalize();
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&digest.high64().to_be_bytes());
    out[8..].copy_from_slice(&digest.low64().to_be_bytes());
    out
  }
}
