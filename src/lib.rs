//! This crate keeps a Binary Search Tree (BST) and lays it out in two dimensions so that it can be
//! drawn and animated.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree in [`tree`] never rebalances. Feeding it sorted values gives a tree as tall as it is
//! long, which is exactly what a visualizer wants to be able to show.
//!
//! ## Layout
//!
//! [`layout`] places each node in its own column, in in-order sequence, and on the row of its
//! depth. Because in-order is sorted order, reading the drawing left to right reads the values in
//! ascending order. [`scene`] turns a laid out tree into nodes and links for a renderer, and
//! [`visualizer`] ties it all together, laying the tree out again after every change.
//!
//! ```
//! use bst_viz::{Visualizer, VisualizerError};
//!
//! let mut visualizer = Visualizer::default();
//! visualizer.load_sample();
//! visualizer.delete(70)?;
//!
//! let scene = visualizer.scene();
//! assert_eq!(scene.nodes.len(), 6);
//! assert_eq!(scene.node(&80).unwrap().position.y, 150.0);
//! # Ok::<(), VisualizerError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod input;
pub mod layout;
pub mod scene;
pub mod tree;
pub mod visualizer;

#[cfg(test)]
mod test;

pub use layout::{compute_layout, LayoutConfig, Position, Viewport};
pub use scene::Scene;
pub use tree::{Insertion, NodeId, Search, TraversalKind, Tree};
pub use visualizer::{Visualizer, VisualizerConfig, VisualizerError};
