// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matcher.
//!
//! The pattern is preprocessed into a prefix table (the longest proper
//! prefix that is also a suffix, for every prefix of the pattern). The scan
//! then reads every text symbol exactly once and uses the table to fall
//! back after a mismatch instead of re-reading text.
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m)
//! - Search time: O(n), independent of the alphabet
//! - Space complexity: O(m)

mod matcher;
mod prefix_table;

pub use matcher::{kmp_search, KmpMatcher};
pub use prefix_table::{build_prefix_table, PrefixTable};
