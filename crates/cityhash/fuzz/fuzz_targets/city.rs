#![no_main]

use cityhash::{BufferedCity64, Uint128, hash32, hash64, hash64_with_seed, hash128, hash128_with_seed};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(8, input.len()));
  let mut seed = 0u64;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u64) << (i * 8);
  }

  // Pure functions: identical inputs must produce identical outputs.
  assert_eq!(hash32(data), hash32(data));
  assert_eq!(hash64_with_seed(data, seed), hash64_with_seed(data, seed));
  assert_eq!(hash128(data), hash128(data));

  // Buffering must be transparent at any split point.
  let split = (seed as usize) % (data.len() + 1);
  let (head, tail) = data.split_at(split);
  let mut buffered = BufferedCity64::new();
  buffered.update(head);
  buffered.update(tail);
  assert_eq!(buffered.finalize(), hash64(data));

  // Inputs of at least 16 bytes are seeded from their first two words.
  if data.len() >= 16 {
    let lo = u64::from_le_bytes(data[..8].try_into().unwrap());
    let hi = u64::from_le_bytes(data[8..16].try_into().unwrap()).wrapping_add(0xC3A5_C85C_97CB_3127);
    assert_eq!(hash128(data), hash128_with_seed(&data[16..], Uint128::new(lo, hi)));
  }
});
