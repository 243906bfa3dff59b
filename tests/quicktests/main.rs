//! Property tests driving the public API with random operation sequences.

mod layout;
mod tree;

use bst_viz::tree::{TraversalKind, Tree};
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(k) => Box::new(k.shrink().map(Op::Insert)),
            Op::Remove(k) => Box::new(k.shrink().map(Op::Remove)),
        }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn build<K: Ord + Clone>(ops: &[Op<K>]) -> Tree<K> {
    let mut tree = Tree::new();
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
            }
            Op::Remove(k) => {
                tree.delete(k);
            }
        }
    }
    tree
}

/// Checks ordering and parent links using only the public API.
pub fn invariants_hold<K: Ord>(tree: &Tree<K>) -> bool {
    if let Some(root) = tree.root() {
        if tree[root].parent().is_some() {
            return false;
        }
    }

    let ids = tree.walk(TraversalKind::InOrder);
    let sorted = ids
        .windows(2)
        .all(|pair| tree[pair[0]].value() < tree[pair[1]].value());
    let linked = ids.iter().all(|&id| {
        let node = &tree[id];
        let children_point_back = node
            .left()
            .into_iter()
            .chain(node.right())
            .all(|child| tree[child].parent() == Some(id));
        let parent_points_down = node.parent().map_or(true, |parent| {
            tree[parent].left() == Some(id) || tree[parent].right() == Some(id)
        });
        children_point_back && parent_points_down
    });

    sorted && linked && ids.len() == tree.len()
}
