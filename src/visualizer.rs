//! A visualizer session: a tree of integers that is laid out again after every change, driven by
//! values or by short text commands.
//!
//! # Examples
//!
//! ```
//! use bst_viz::visualizer::{Response, Visualizer, VisualizerError};
//!
//! let mut visualizer = Visualizer::default();
//! visualizer.load_sample();
//!
//! match visualizer.execute("search 40")? {
//!     Response::Searched(trace) => {
//!         assert_eq!(trace.path, [50, 30, 40]);
//!         assert_eq!(trace.found, Some(40));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! assert!(matches!(
//!     visualizer.execute("insert 50"),
//!     Err(VisualizerError::Duplicate(50))
//! ));
//! # Ok::<(), VisualizerError>(())
//! ```

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::input::{parse_value, InputError, ValueRange};
use crate::layout::{LayoutConfig, Position, Viewport};
use crate::scene::Scene;
use crate::tree::{TraversalKind, Tree};

/// Values loaded by [`Visualizer::load_sample`]. They make a full tree of three levels.
pub const SAMPLE: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Settings for a [`Visualizer`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// How nodes are spaced.
    pub layout: LayoutConfig,
    /// Which values users may enter.
    pub range: ValueRange,
}

/// Things a user can be told went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VisualizerError {
    /// The value text was rejected.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The command word is not one we know.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// The command needs a value and none was given.
    #[error("`{0}` needs a value")]
    MissingValue(String),
    /// The value is already in the tree, so nothing was inserted.
    #[error("duplicate value {0} ignored")]
    Duplicate(i64),
    /// The value is not in the tree.
    #[error("value {0} not found")]
    NotFound(i64),
}

/// A parsed text command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a value.
    Insert(i64),
    /// Remove a value.
    Delete(i64),
    /// Look for a value.
    Search(i64),
    /// List the values in some order.
    Traverse(TraversalKind),
}

impl Command {
    /// Parses lines like `insert 5`, `delete -3`, `search 40` or `inorder`, checking values
    /// against `range`.
    pub fn parse(line: &str, range: &ValueRange) -> Result<Self, VisualizerError> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let word = word.to_ascii_lowercase();

        let make: fn(i64) -> Self = match word.as_str() {
            "insert" | "add" => Self::Insert,
            "delete" | "remove" => Self::Delete,
            "search" | "find" => Self::Search,
            _ => {
                return TraversalKind::from_str(&word)
                    .map(Self::Traverse)
                    .map_err(|_| VisualizerError::UnknownCommand(word));
            }
        };

        if rest.trim().is_empty() {
            return Err(VisualizerError::MissingValue(word));
        }
        Ok(make(parse_value(rest, range)?))
    }
}

/// Where a freshly inserted node should be animated from and to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// The inserted value.
    pub value: i64,
    /// The parent's position, or `None` for a new root.
    pub from: Option<Position>,
    /// The node's own position.
    pub to: Position,
}

/// The walk taken by a search, as values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTrace {
    /// Values looked at, root first.
    pub path: Vec<i64>,
    /// The value if it was found.
    pub found: Option<i64>,
}

/// What [`Visualizer::execute`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// A value was inserted.
    Inserted(Placement),
    /// A value was deleted. Carries the new viewport.
    Deleted(Viewport),
    /// A search ran.
    Searched(SearchTrace),
    /// A traversal ran.
    Traversed(Vec<i64>),
}

/// A tree of integers kept laid out.
#[derive(Clone, Debug)]
pub struct Visualizer {
    tree: Tree<i64>,
    config: VisualizerConfig,
    viewport: Viewport,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl Visualizer {
    /// An empty session.
    pub fn new(config: VisualizerConfig) -> Self {
        let mut tree = Tree::new();
        let viewport = config.layout.apply(&mut tree);
        Self {
            tree,
            config,
            viewport,
        }
    }

    /// The tree, with positions from the latest layout.
    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }

    /// The session's settings.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The viewport from the latest layout.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Inserts [`SAMPLE`]. Values already present are skipped.
    pub fn load_sample(&mut self) -> Viewport {
        for value in SAMPLE {
            self.tree.insert(value);
        }
        self.relayout()
    }

    /// Inserts `value` and lays the tree out again.
    pub fn insert(&mut self, value: i64) -> Result<Placement, VisualizerError> {
        let insertion = self.tree.insert(value);
        if !insertion.inserted {
            debug!("ignoring duplicate {value}");
            return Err(VisualizerError::Duplicate(value));
        }

        self.relayout();
        Ok(Placement {
            value,
            from: insertion.parent.map(|parent| self.tree[parent].position()),
            to: self.tree[insertion.node].position(),
        })
    }

    /// Deletes `value` and lays the tree out again.
    pub fn delete(&mut self, value: i64) -> Result<Viewport, VisualizerError> {
        if !self.tree.delete(&value) {
            debug!("nothing to delete for {value}");
            return Err(VisualizerError::NotFound(value));
        }
        Ok(self.relayout())
    }

    /// Looks for `value`. The layout is left alone.
    pub fn search(&self, value: i64) -> SearchTrace {
        let search = self.tree.search(&value);
        SearchTrace {
            path: search
                .path
                .iter()
                .map(|&id| *self.tree[id].value())
                .collect(),
            found: search.found.map(|id| *self.tree[id].value()),
        }
    }

    /// The values in the given order.
    pub fn traverse(&self, kind: TraversalKind) -> Vec<i64> {
        self.tree.traverse(kind)
    }

    /// A snapshot for drawing.
    pub fn scene(&self) -> Scene<i64> {
        Scene::capture(&self.tree, self.viewport)
    }

    /// Parses and runs one text command.
    pub fn execute(&mut self, line: &str) -> Result<Response, VisualizerError> {
        let command = Command::parse(line, &self.config.range).inspect_err(|err| {
            debug!("rejected command {line:?}: {err}");
        })?;
        self.apply(command)
    }

    /// Runs one command.
    pub fn apply(&mut self, command: Command) -> Result<Response, VisualizerError> {
        Ok(match command {
            Command::Insert(value) => Response::Inserted(self.insert(value)?),
            Command::Delete(value) => Response::Deleted(self.delete(value)?),
            Command::Search(value) => Response::Searched(self.search(value)),
            Command::Traverse(kind) => Response::Traversed(self.traverse(kind)),
        })
    }

    fn relayout(&mut self) -> Viewport {
        self.viewport = self.config.layout.apply(&mut self.tree);
        self.viewport
    }
}
