// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp matcher.
//!
//! A polynomial hash of the pattern is compared against a hash of every
//! text window of the same length. The window hash is rolled forward in O(1)
//! per symbol; equal hashes are confirmed symbol by symbol, so modular
//! collisions are never reported as matches.
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m)
//! - Expected search time: O(n + m)
//! - Worst case: O(n*m) when most windows collide with the pattern hash

mod matcher;
mod rolling_hash;

pub use matcher::{rabin_karp_search, RabinKarpMatcher};
pub use rolling_hash::{RollingHash, RollingHashParams, DEFAULT_BASE, DEFAULT_MODULUS};
