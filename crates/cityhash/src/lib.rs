//! CityHash v1.1: fast non-cryptographic fingerprints (**NOT CRYPTO**).
//!
//! 32-, 64-, and 128-bit digests of byte slices, for hash-table keys,
//! sharding, and content fingerprinting. Output is identical on every
//! platform: input bytes are interpreted as little-endian words regardless
//! of host byte order.
//!
//! This crate is `no_std` compatible and has zero library dependencies
//! outside the workspace. Dev-only dependencies are used for vector tests
//! and benchmarking.
//!
//! # Quick Start
//!
//! ```
//! use cityhash::{hash64, hash64_with_seed};
//!
//! let h = hash64(b"hello world");
//! assert_eq!(h, 0x588F_B747_8BD6_B01B);
//! assert_ne!(hash64_with_seed(b"hello world", 1), h);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Implies `alloc` |
//! | `alloc` | Yes | Buffered accumulators with hex rendering |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
mod buffered;
mod city;

#[cfg(feature = "alloc")]
pub use buffered::{BufferedCity32, BufferedCity64, BufferedCity128};
pub use city::{
  City32, City64, City128, Uint128, hash32, hash64, hash64_with_seed, hash64_with_seeds, hash128, hash128_with_seed,
};
pub use traits::FastHash;
