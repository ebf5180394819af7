pub mod models;

use tracing::debug;

pub use models::{OUTPUT_PATH, save, write_text};

/// Label of the node at `index`. Depends only on `index % 10`.
pub fn label(index: usize) -> char {
    match index % 10 {
        0 => 'A',
        1 => 'F',
        2 => 'B',
        3 => 'C',
        4 => 'D',
        _ => 'E',
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub index: usize,
    pub label: char,
    pub incoming: Option<usize>,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            label: label(index),
            incoming: index.checked_sub(1),
        }
    }

    pub fn num_edges(&self) -> usize {
        self.incoming.map_or(0, |_| 1)
    }
}

/// Directed path `0 -> 1 -> ... -> n-1`. Nodes are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    num_nodes: usize,
}

impl Chain {
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.num_nodes).map(Node::new)
    }
}

/// Text declaration of a chain with `n` nodes.
pub fn generate(n: usize) -> String {
    let text = Chain::new(n).to_string();
    debug!(nodes = n, bytes = text.len(), "generated graph block");
    text
}
