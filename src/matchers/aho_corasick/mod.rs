// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Aho-Corasick multi-pattern automaton.
//!
//! All patterns are inserted into one trie. Every node then receives a
//! failure link to the node spelling its longest proper suffix that is also
//! a trie path, and inherits the outputs of that node. One left-to-right pass
//! over the text then reports every occurrence of every pattern, overlapping
//! ones included.
//!
//! Nodes live in a flat arena owned by the [`Automaton`]; child edges and
//! failure links are plain indices into it.
//!
//! # Example
//!
//! ```
//! use mauka_match_lib::matchers::aho_corasick::{automaton_search, Automaton};
//!
//! let automaton: Automaton<u8> = Automaton::new(&["he", "she", "his", "hers"]).unwrap();
//! let found: Vec<(usize, &[u8])> = automaton_search(b"ushers", &automaton)
//!     .into_iter()
//!     .map(|m| (m.position, automaton.pattern(m.pattern_id)))
//!     .collect();
//!
//! assert_eq!(
//!     found,
//!     vec![(1, b"she".as_slice()), (2, b"he".as_slice()), (2, b"hers".as_slice())]
//! );
//! ```
//!
//! # Performance Characteristics
//!
//! - Construction: O(Σ|P|) expected, with hash map child lookups
//! - Search: O(n + number of matches)

mod automaton;
mod matcher;
mod node;

pub use automaton::{build_automaton, Automaton};
pub use matcher::{automaton_search, AutomatonMatch};
pub use node::{AutomatonNode, NodeId, ROOT};
