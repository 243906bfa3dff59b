//! A snapshot of a laid out tree in the shape a renderer consumes: positioned nodes, the links
//! between them and the viewport. Nodes and links carry identifiers derived from the values
//! (values are unique), so a renderer can match them up with what it drew last time.

use std::fmt;

use serde::Serialize;

use crate::layout::{Position, Viewport};
use crate::tree::{TraversalKind, Tree};

/// Everything needed to draw a tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene<K> {
    /// The area covering every node.
    pub viewport: Viewport,
    /// Nodes in post-order, so children come before their parents.
    pub nodes: Vec<SceneNode<K>>,
    /// One link per non-root node, in the same order as `nodes`.
    pub links: Vec<SceneLink>,
}

/// A positioned node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneNode<K> {
    /// `node-<value>`.
    pub id: String,
    /// The node's value.
    pub value: K,
    /// Where the node is drawn.
    pub position: Position,
}

/// An edge from a parent to one of its children.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneLink {
    /// `link-<parent value>-<child value>`.
    pub id: String,
    /// The parent's position.
    pub from: Position,
    /// The child's position.
    pub to: Position,
}

/// Identifier of the node holding `value`.
pub fn node_id<K: fmt::Display>(value: &K) -> String {
    format!("node-{value}")
}

/// Identifier of the link from `parent` down to `child`.
pub fn link_id<K: fmt::Display>(parent: &K, child: &K) -> String {
    format!("link-{parent}-{child}")
}

impl<K> Scene<K> {
    /// Snapshots the positions `tree` got from its last layout pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_viz::layout::compute_layout;
    /// use bst_viz::scene::Scene;
    /// use bst_viz::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// let viewport = compute_layout(&mut tree);
    ///
    /// let scene = Scene::capture(&tree, viewport);
    /// assert_eq!(scene.nodes[0].id, "node-1");
    /// assert_eq!(scene.links[0].id, "link-2-1");
    /// ```
    pub fn capture(tree: &Tree<K>, viewport: Viewport) -> Self
    where
        K: Clone + fmt::Display,
    {
        let mut nodes = Vec::with_capacity(tree.len());
        let mut links = Vec::with_capacity(tree.len().saturating_sub(1));

        for id in tree.walk(TraversalKind::PostOrder) {
            let node = &tree[id];
            if let Some(parent) = node.parent() {
                let parent = &tree[parent];
                links.push(SceneLink {
                    id: link_id(parent.value(), node.value()),
                    from: parent.position(),
                    to: node.position(),
                });
            }
            nodes.push(SceneNode {
                id: node_id(node.value()),
                value: node.value().clone(),
                position: node.position(),
            });
        }

        Self {
            viewport,
            nodes,
            links,
        }
    }

    /// The node holding `value`, if any.
    pub fn node(&self, value: &K) -> Option<&SceneNode<K>>
    where
        K: PartialEq,
    {
        self.nodes.iter().find(|node| &node.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn sample_scene() -> Scene<i32> {
        let mut tree = Tree::new();
        for value in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(value);
        }
        let viewport = compute_layout(&mut tree);
        Scene::capture(&tree, viewport)
    }

    #[test]
    fn nodes_come_in_post_order() {
        let scene = sample_scene();

        let ids: Vec<_> = scene.nodes.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(
            ids,
            ["node-20", "node-40", "node-30", "node-60", "node-80", "node-70", "node-50"]
        );
    }

    #[test]
    fn links_join_parent_to_child() {
        let scene = sample_scene();

        assert_eq!(scene.links.len(), 6);
        let link = scene
            .links
            .iter()
            .find(|link| link.id == "link-30-40")
            .unwrap();
        assert_eq!(link.from, scene.node(&30).unwrap().position);
        assert_eq!(link.to, scene.node(&40).unwrap().position);
        assert!(!scene.links.iter().any(|link| link.id.ends_with("-50")));
    }

    #[test]
    fn empty_tree_has_empty_scene() {
        let mut tree = Tree::<i32>::new();
        let viewport = compute_layout(&mut tree);

        let scene = Scene::capture(&tree, viewport);
        assert!(scene.nodes.is_empty());
        assert!(scene.links.is_empty());
        assert_eq!(scene.viewport.width, 300.);
    }

    #[test]
    fn serializes_to_json() {
        let scene = sample_scene();

        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["viewport"]["width"], 560.0);
        assert_eq!(json["nodes"][6]["id"], "node-50");
        assert_eq!(json["nodes"][6]["value"], 50);
        assert_eq!(json["nodes"][6]["position"]["x"], 270.0);
        assert_eq!(json["links"][0]["id"], "link-30-20");
    }
}
