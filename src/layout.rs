//! The layout engine. Gives every node of a [`Tree`] a 2-D position derived only from the tree's
//! shape:
//!
//! - **Horizontal**: nodes are numbered in in-order sequence and placed one column apart, so the
//!   left-to-right order on screen is the sorted order of the values and no two nodes share a
//!   column.
//! - **Vertical**: one row per level, the root on the top row.
//!
//! The whole tree is placed again on every pass. Nothing from a previous pass (or from the order
//! values were inserted in) leaks into the result.
//!
//! # Examples
//!
//! ```
//! use bst_viz::layout::compute_layout;
//! use bst_viz::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [2, 1, 3] {
//!     tree.insert(value);
//! }
//! let viewport = compute_layout(&mut tree);
//!
//! let one = tree.find(&1).unwrap();
//! let two = tree.find(&2).unwrap();
//! assert!(tree[one].x() < tree[two].x());
//! assert!(tree[one].y() > tree[two].y());
//! assert_eq!(viewport.height, 240.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::tree::{NodeId, Tree};

/// A point in layout space. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// A position at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The area needed to show a laid out tree, anchored at the origin.
///
/// An empty tree has no levels, so its viewport is `min_width` wide and only `height_padding`
/// tall.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width of the area.
    pub width: f64,
    /// Height of the area.
    pub height: f64,
}

impl Viewport {
    /// An SVG `viewBox` attribute value covering this viewport.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Spacing and margins used when placing nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between two neighbouring columns.
    pub horizontal_spacing: f64,
    /// `x` of the first column.
    pub horizontal_margin: f64,
    /// Distance between two neighbouring levels.
    pub vertical_spacing: f64,
    /// `y` of the root's level.
    pub vertical_margin: f64,
    /// The viewport is never narrower than this.
    pub min_width: f64,
    /// Added to the right-most `x` to get the viewport width.
    pub width_padding: f64,
    /// Added below the last level to get the viewport height.
    pub height_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 70.,
            horizontal_margin: 60.,
            vertical_spacing: 90.,
            vertical_margin: 60.,
            min_width: 300.,
            width_padding: 80.,
            height_padding: 60.,
        }
    }
}

impl LayoutConfig {
    /// Create a layout with the default spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance between columns.
    pub fn horizontal_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the `x` of the first column.
    pub fn horizontal_margin(mut self, margin: f64) -> Self {
        self.horizontal_margin = margin;
        self
    }

    /// Set the distance between levels.
    pub fn vertical_spacing(mut self, spacing: f64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set the `y` of the root's level.
    pub fn vertical_margin(mut self, margin: f64) -> Self {
        self.vertical_margin = margin;
        self
    }

    /// Set the smallest viewport width.
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    /// Set the padding right of the last column.
    pub fn width_padding(mut self, padding: f64) -> Self {
        self.width_padding = padding;
        self
    }

    /// Set the padding below the last level.
    pub fn height_padding(mut self, padding: f64) -> Self {
        self.height_padding = padding;
        self
    }

    /// Where the node in in-order `column` at `depth` goes.
    pub fn position(&self, column: usize, depth: usize) -> Position {
        Position {
            x: column as f64 * self.horizontal_spacing + self.horizontal_margin,
            y: depth as f64 * self.vertical_spacing + self.vertical_margin,
        }
    }

    /// Positions every node in `tree` and returns the viewport that holds them all.
    ///
    /// The viewport is `max(min_width, right-most x + width_padding)` wide and
    /// `levels * vertical_spacing + height_padding` tall. With no nodes there are no levels, so
    /// an empty tree gets the padding alone.
    pub fn apply<K>(&self, tree: &mut Tree<K>) -> Viewport {
        // Right-most x seen on each level. Its length is the number of levels.
        let mut level_max_x: Vec<f64> = Vec::new();
        let mut column = 0;

        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut curr = tree.root().map(|root| (root, 0));
        loop {
            while let Some((id, depth)) = curr {
                stack.push((id, depth));
                curr = tree[id].left().map(|left| (left, depth + 1));
            }
            let Some((id, depth)) = stack.pop() else {
                break;
            };

            let position = self.position(column, depth);
            tree.set_position(id, position);
            column += 1;

            if level_max_x.len() <= depth {
                level_max_x.resize(depth + 1, f64::NEG_INFINITY);
            }
            level_max_x[depth] = level_max_x[depth].max(position.x);

            curr = tree[id].right().map(|right| (right, depth + 1));
        }

        let widest = level_max_x
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let viewport = Viewport {
            width: self.min_width.max(widest + self.width_padding),
            height: level_max_x.len() as f64 * self.vertical_spacing + self.height_padding,
        };
        debug!(
            "laid out {column} nodes on {} levels in {}x{}",
            level_max_x.len(),
            viewport.width,
            viewport.height
        );

        viewport
    }
}

/// Positions every node in `tree` using [`LayoutConfig::default`].
pub fn compute_layout<K>(tree: &mut Tree<K>) -> Viewport {
    LayoutConfig::default().apply(tree)
}
