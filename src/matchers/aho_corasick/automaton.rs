// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Automaton construction: trie insertion followed by breadth-first
//! failure links.

use std::collections::VecDeque;

use super::node::{AutomatonNode, NodeId, ROOT};
use crate::matchers::{Result, SearchError, Symbol};

/// Aho-Corasick automaton over a fixed, ordered set of patterns.
///
/// Pattern identifiers are the patterns' indices in the slice passed to
/// [`Automaton::new`]. The automaton is immutable once built and can be
/// shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Automaton<S: Symbol> {
    /// Node arena, the root at index 0
    nodes: Vec<AutomatonNode<S>>,

    /// Patterns by identifier
    patterns: Vec<Vec<S>>,
}

impl<S: Symbol> Automaton<S> {
    /// Builds the automaton for `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPattern`] if any pattern is empty.
    pub fn new<P: AsRef<[S]>>(patterns: &[P]) -> Result<Self> {
        if let Some(id) = patterns.iter().position(|p| p.as_ref().is_empty()) {
            return Err(SearchError::InvalidPattern(format!(
                "pattern {id} cannot be empty"
            )));
        }

        let mut automaton = Self {
            nodes: vec![AutomatonNode::new(0)],
            patterns: patterns.iter().map(|p| p.as_ref().to_vec()).collect(),
        };
        automaton.build_trie();
        automaton.build_failure_links();

        tracing::debug!(
            patterns = automaton.patterns.len(),
            nodes = automaton.nodes.len(),
            "built Aho-Corasick automaton"
        );
        Ok(automaton)
    }

    /// Inserts every pattern, creating nodes as needed, and records the
    /// pattern at its terminal node.
    fn build_trie(&mut self) {
        for id in 0..self.patterns.len() {
            let mut current = ROOT;
            for i in 0..self.patterns[id].len() {
                let symbol = self.patterns[id][i];
                current = match self.nodes[current].child(symbol) {
                    Some(next) => next,
                    None => {
                        let next = self.nodes.len();
                        self.nodes.push(AutomatonNode::new(i + 1));
                        self.nodes[current].children.insert(symbol, next);
                        next
                    }
                };
            }
            self.nodes[current].outputs.push(id);
        }
    }

    /// Computes failure links and output closures in breadth-first order,
    /// so a node's failure target is always finished before the node.
    fn build_failure_links(&mut self) {
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        self.nodes[ROOT].fail = ROOT;
        let first_level: Vec<NodeId> = self.nodes[ROOT].children.values().copied().collect();
        for child in first_level {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(S, NodeId)> = self.nodes[current]
                .children
                .iter()
                .map(|(&symbol, &child)| (symbol, child))
                .collect();

            for (symbol, child) in edges {
                let mut fallback = self.nodes[current].fail;
                while fallback != ROOT && self.nodes[fallback].child(symbol).is_none() {
                    fallback = self.nodes[fallback].fail;
                }
                let fail = self.nodes[fallback].child(symbol).unwrap_or(ROOT);
                self.nodes[child].fail = fail;

                let inherited = self.nodes[fail].outputs.clone();
                self.nodes[child].outputs.extend(inherited);

                queue.push_back(child);
            }
        }
    }

    /// Node by identifier.
    pub fn node(&self, id: NodeId) -> &AutomatonNode<S> {
        &self.nodes[id]
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Pattern by identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid pattern identifier.
    pub fn pattern(&self, id: usize) -> &[S] {
        &self.patterns[id]
    }

    /// Number of patterns the automaton was built from.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Next state after reading `symbol` in state `node`.
    #[inline]
    pub(crate) fn step(&self, mut node: NodeId, symbol: S) -> NodeId {
        while node != ROOT && self.nodes[node].child(symbol).is_none() {
            node = self.nodes[node].fail;
        }
        self.nodes[node].child(symbol).unwrap_or(node)
    }
}

/// Builds an automaton over `patterns`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPattern`] if any pattern is empty.
pub fn build_automaton<S: Symbol, P: AsRef<[S]>>(patterns: &[P]) -> Result<Automaton<S>> {
    Automaton::new(patterns)
}
