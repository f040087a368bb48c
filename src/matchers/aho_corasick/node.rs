// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Aho-Corasick automaton.

use fnv::FnvHashMap;

use crate::matchers::Symbol;

/// Index of a node inside the automaton arena.
pub type NodeId = usize;

/// The root node always sits at index 0.
pub const ROOT: NodeId = 0;

/// A node in the Aho-Corasick trie.
///
/// Each node stands for the symbol path from the root to it.
#[derive(Debug, Clone)]
pub struct AutomatonNode<S: Symbol> {
    /// Map of symbols to child nodes
    pub children: FnvHashMap<S, NodeId>,

    /// Node reached after a mismatch; the root fails to itself
    pub fail: NodeId,

    /// Depth of the node, i.e. the length of its path
    pub depth: usize,

    /// Patterns recognized here: the node's own first, then those inherited
    /// through the failure chain
    pub outputs: Vec<usize>,
}

impl<S: Symbol> AutomatonNode<S> {
    /// Creates a new node with no children or outputs.
    pub fn new(depth: usize) -> Self {
        Self {
            children: FnvHashMap::default(),
            fail: ROOT,
            depth,
            outputs: Vec::new(),
        }
    }

    /// Child reached through `symbol`, if any.
    #[inline]
    pub fn child(&self, symbol: S) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }
}
