//! The tree engine. A plain (unbalanced) Binary Search Tree whose nodes remember their parent so
//! that a node can be spliced out of its parent's slot without walking down from the root again.
//!
//! Nodes are stored in an arena owned by the [`Tree`] and refer to each other through
//! [`NodeId`]s. The `left` and `right` links are the owning direction: a node and its subtree are
//! only ever released by [`Tree::delete`]. The `parent` link is a back reference kept consistent
//! with them.
//!
//! # Examples
//!
//! ```
//! use bst_viz::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1).found, None);
//!
//! assert!(tree.insert(1).inserted);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is rejected and changes nothing.
//! assert!(!tree.insert(1).inserted);
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the value was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use log::{debug, trace};

use crate::layout::Position;

/// A handle to a node stored in a [`Tree`].
///
/// Handles stay valid until the node they point at is deleted. The slot of a deleted node is
/// reused by later inserts, so a handle must not be kept across the deletion of its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// One key in the tree, along with its links and the coordinates assigned by the last layout
/// pass.
#[derive(Clone, Debug)]
pub struct Node<K> {
    value: K,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
    position: Position,
}

impl<K> Node<K> {
    fn new(value: K, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
            position: Position::default(),
        }
    }

    /// The key stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node this one hangs off. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Where the last layout pass put this node. Nodes that were never laid out sit at the
    /// origin.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Horizontal coordinate from the last layout pass.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical coordinate from the last layout pass.
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// What [`Tree::insert`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insertion {
    /// `false` when the value was already present. Nothing changed in that case.
    pub inserted: bool,
    /// The new node, or the existing node holding an equal value.
    pub node: NodeId,
    /// The parent of `node`. `None` when `node` is the root.
    pub parent: Option<NodeId>,
}

/// What [`Tree::search`] saw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    /// The node holding the value, if any.
    pub found: Option<NodeId>,
    /// Every node examined on the way down, root first. Includes `found` when the search hit.
    pub path: Vec<NodeId>,
}

/// The three depth-first visiting orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InOrder => "inorder",
            Self::PreOrder => "preorder",
            Self::PostOrder => "postorder",
        })
    }
}

/// Returned when a string names none of the [`TraversalKind`]s.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal `{0}`")]
pub struct ParseTraversalError(String);

impl FromStr for TraversalKind {
    type Err = ParseTraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inorder" | "in-order" => Ok(Self::InOrder),
            "pre" | "preorder" | "pre-order" => Ok(Self::PreOrder),
            "post" | "postorder" | "post-order" => Ok(Self::PostOrder),
            _ => Err(ParseTraversalError(s.to_owned())),
        }
    }
}

/// A Binary Search Tree of unique keys. It never rebalances, so inserting keys in sorted order
/// degenerates it into a list.
#[derive(Clone)]
pub struct Tree<K> {
    /// Node storage. `None` marks a slot freed by a deletion.
    nodes: Vec<Option<Node<K>>>,
    /// Freed slots, reused before the arena grows.
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("nodes", &Nodes(self))
            .finish()
    }
}

/// Debug view listing every node in pre-order, each with the values of its children. Flat, so a
/// degenerate tree prints without nesting one level per node.
struct Nodes<'a, K>(&'a Tree<K>);

impl<K> fmt::Debug for Nodes<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        f.debug_list()
            .entries(
                tree.walk(TraversalKind::PreOrder)
                    .into_iter()
                    .map(|id| NodeEntry(tree, id)),
            )
            .finish()
    }
}

struct NodeEntry<'a, K>(&'a Tree<K>, NodeId);

impl<K> fmt::Debug for NodeEntry<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        let node = &tree[self.1];
        f.debug_struct("Node")
            .field("value", &node.value)
            .field("left", &node.left.map(|left| &tree[left].value))
            .field("right", &node.right.map(|right| &tree[right].value))
            .finish()
    }
}

impl<K> Index<NodeId> for Tree<K> {
    type Output = Node<K>;

    /// # Panics
    ///
    /// When `id` refers to a node that has been deleted.
    fn index(&self, id: NodeId) -> &Node<K> {
        self.get(id).expect("NodeId refers to a deleted node")
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The node behind `id`, or `None` if it has been deleted.
    pub fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Distance from the root to `id`, found by following parent links. The root has depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self[id].parent, |&parent| self[parent].parent).count()
    }

    /// Inserts `value` unless an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_viz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let root = tree.insert(50);
    /// assert!(root.inserted);
    /// assert_eq!(root.parent, None);
    ///
    /// let child = tree.insert(30);
    /// assert_eq!(child.parent, Some(root.node));
    ///
    /// // The duplicate reports the existing node and its parent.
    /// let again = tree.insert(30);
    /// assert!(!again.inserted);
    /// assert_eq!(again.node, child.node);
    /// assert_eq!(again.parent, Some(root.node));
    /// ```
    pub fn insert(&mut self, value: K) -> Insertion
    where
        K: Ord,
    {
        let Some(mut parent) = self.root else {
            let node = self.alloc(value, None);
            self.root = Some(node);
            debug!("inserted {node:?} as the root");
            return Insertion {
                inserted: true,
                node,
                parent: None,
            };
        };

        loop {
            let curr = &self[parent];
            let ordering = value.cmp(&curr.value);
            let next = match ordering {
                Ordering::Less => curr.left,
                Ordering::Equal => {
                    trace!("insert stopped at duplicate {parent:?}");
                    return Insertion {
                        inserted: false,
                        node: parent,
                        parent: curr.parent,
                    };
                }
                Ordering::Greater => curr.right,
            };

            match next {
                Some(child) => parent = child,
                None => {
                    let node = self.alloc(value, Some(parent));
                    let slot = self.node_mut(parent);
                    if ordering == Ordering::Less {
                        slot.left = Some(node);
                    } else {
                        slot.right = Some(node);
                    }
                    debug!("inserted {node:?} under {parent:?}");

                    if cfg!(debug_assertions) {
                        self.assert_links(parent);
                    }
                    return Insertion {
                        inserted: true,
                        node,
                        parent: Some(parent),
                    };
                }
            }
        }
    }

    /// Walks down from the root looking for `value`, recording every node it looks at.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_viz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [50, 30, 70, 40] {
    ///     tree.insert(value);
    /// }
    ///
    /// let search = tree.search(&40);
    /// let path: Vec<_> = search.path.iter().map(|&id| *tree[id].value()).collect();
    /// assert_eq!(path, [50, 30, 40]);
    /// assert_eq!(search.found, search.path.last().copied());
    ///
    /// // A miss still reports the walk.
    /// let miss = tree.search(&60);
    /// assert_eq!(miss.found, None);
    /// assert_eq!(miss.path.len(), 2);
    /// ```
    pub fn search(&self, value: &K) -> Search
    where
        K: Ord,
    {
        let mut path = Vec::new();
        let mut curr = self.root;

        while let Some(id) = curr {
            path.push(id);
            let node = &self[id];
            curr = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => {
                    return Search {
                        found: Some(id),
                        path,
                    }
                }
                Ordering::Greater => node.right,
            };
        }

        trace!("search missed after {} nodes", path.len());
        Search { found: None, path }
    }

    /// The node holding `value`, if any.
    pub fn find(&self, value: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self[id];
            curr = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &K) -> bool
    where
        K: Ord,
    {
        self.find(value).is_some()
    }

    /// Deletes `value` from the tree, returning whether it was present.
    ///
    /// A node with two children is not unlinked itself. Its in-order successor (the left-most node
    /// of its right subtree) is unlinked instead and the successor's value is moved into it. A
    /// [`NodeId`] held for that node therefore stays valid but now carries the successor's value,
    /// while the successor's old `NodeId` is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_viz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [50, 30, 70, 60, 80] {
    ///     tree.insert(value);
    /// }
    /// let seventy = tree.find(&70).unwrap();
    ///
    /// assert!(tree.delete(&70));
    /// assert_eq!(tree[seventy].value(), &80);
    /// assert_eq!(tree.inorder(), [30, 50, 60, 80]);
    ///
    /// assert!(!tree.delete(&999));
    /// ```
    pub fn delete(&mut self, value: &K) -> bool
    where
        K: Ord,
    {
        let Some(id) = self.find(value) else {
            trace!("delete found nothing to remove");
            return false;
        };

        let (left, right) = (self[id].left, self[id].right);
        match (left, right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                // The successor has no left child so it comes out like any other one-child node.
                let successor_right = self[successor].right;
                self.replace(successor, successor_right);
                let successor = self.release(successor);
                self.node_mut(id).value = successor.value;
                debug!("deleted {id:?} by promoting its successor");
            }
            (left, right) => {
                self.replace(id, left.or(right));
                self.release(id);
                debug!("deleted {id:?}");
            }
        }

        true
    }

    /// Values in in-order (ascending) order.
    pub fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(TraversalKind::InOrder)
    }

    /// Values in pre-order: each node before its subtrees.
    pub fn preorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(TraversalKind::PreOrder)
    }

    /// Values in post-order: each node after its subtrees.
    pub fn postorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(TraversalKind::PostOrder)
    }

    /// Values in the given visiting order.
    pub fn traverse(&self, kind: TraversalKind) -> Vec<K>
    where
        K: Clone,
    {
        self.walk(kind)
            .into_iter()
            .map(|id| self[id].value.clone())
            .collect()
    }

    /// Nodes in the given visiting order.
    ///
    /// The walks use an explicit stack, so a degenerate tree costs heap rather than call stack.
    pub fn walk(&self, kind: TraversalKind) -> Vec<NodeId> {
        let mut visited = Vec::with_capacity(self.len);
        match kind {
            TraversalKind::InOrder => {
                let mut stack = Vec::new();
                let mut curr = self.root;
                loop {
                    while let Some(id) = curr {
                        stack.push(id);
                        curr = self[id].left;
                    }
                    let Some(id) = stack.pop() else {
                        break;
                    };
                    visited.push(id);
                    curr = self[id].right;
                }
            }
            TraversalKind::PreOrder => {
                let mut stack: Vec<_> = self.root.into_iter().collect();
                while let Some(id) = stack.pop() {
                    visited.push(id);
                    let node = &self[id];
                    stack.extend(node.right);
                    stack.extend(node.left);
                }
            }
            TraversalKind::PostOrder => {
                // Node, right, left is exactly post-order backwards.
                let mut stack: Vec<_> = self.root.into_iter().collect();
                while let Some(id) = stack.pop() {
                    visited.push(id);
                    let node = &self[id];
                    stack.extend(node.left);
                    stack.extend(node.right);
                }
                visited.reverse();
            }
        }
        visited
    }

    pub(crate) fn set_position(&mut self, id: NodeId, position: Position) {
        self.node_mut(id).position = position;
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("NodeId refers to a deleted node")
    }

    fn alloc(&mut self, value: K, parent: Option<NodeId>) -> NodeId {
        let node = Some(Node::new(value, parent));
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Frees the slot of a node that is no longer linked into the tree.
    fn release(&mut self, id: NodeId) -> Node<K> {
        let node = self.nodes[id.0]
            .take()
            .expect("Releasing a node implies it is live");
        self.free.push(id);
        self.len -= 1;
        node
    }

    /// Follows left links from `id` until there are none.
    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Puts `replacement` wherever `node` hangs (its parent's matching slot, or the root) and
    /// points `replacement` back at that parent.
    fn replace(&mut self, node: NodeId, replacement: Option<NodeId>) {
        let parent = self[node].parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(node) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }

        if cfg!(debug_assertions) {
            if let Some(parent) = parent {
                self.assert_links(parent);
            }
        }
    }

    /// Checks that the children of `id` point back at it.
    fn assert_links(&self, id: NodeId) {
        let node = &self[id];
        for child in node.left.into_iter().chain(node.right) {
            assert_eq!(self[child].parent, Some(id));
        }
    }
}
