use std::collections::HashSet;

use bst_viz::layout::{compute_layout, LayoutConfig};
use bst_viz::tree::{TraversalKind, Tree};

use crate::{build, init_logging, Op};

/// Rebuilds a tree with the same shape by inserting in pre-order, which reproduces every
/// parent before its children.
fn same_shape<K: Ord + Clone>(tree: &Tree<K>) -> Tree<K> {
    let mut copy = Tree::new();
    for value in tree.preorder() {
        copy.insert(value);
    }
    copy
}

quickcheck::quickcheck! {
    fn x_follows_inorder(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = build(&ops);
        compute_layout(&mut tree);

        tree.walk(TraversalKind::InOrder)
            .windows(2)
            .all(|pair| tree[pair[0]].x() < tree[pair[1]].x())
    }
}

quickcheck::quickcheck! {
    fn y_follows_depth(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = build(&ops);
        compute_layout(&mut tree);

        tree.walk(TraversalKind::PreOrder).into_iter().all(|id| {
            let node = &tree[id];
            match node.parent() {
                Some(parent) => node.y() == tree[parent].y() + 90.,
                None => node.y() == 60.,
            }
        })
    }
}

quickcheck::quickcheck! {
    fn no_two_nodes_share_a_column(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = build(&ops);
        compute_layout(&mut tree);

        let columns: HashSet<_> = tree
            .walk(TraversalKind::InOrder)
            .into_iter()
            .map(|id| tree[id].x().to_bits())
            .collect();
        columns.len() == tree.len()
    }
}

quickcheck::quickcheck! {
    fn layout_depends_only_on_shape(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = build(&ops);
        let mut copy = same_shape(&tree);
        let config = LayoutConfig::default();

        let viewport = config.apply(&mut tree);
        // Laying out twice must not drift either.
        config.apply(&mut copy);
        let copy_viewport = config.apply(&mut copy);

        viewport == copy_viewport
            && tree.walk(TraversalKind::InOrder).into_iter().all(|id| {
                let node = &tree[id];
                let twin = copy.find(node.value()).map(|twin| copy[twin].position());
                twin == Some(node.position())
            })
    }
}

quickcheck::quickcheck! {
    fn viewport_holds_every_node(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = build(&ops);
        let viewport = compute_layout(&mut tree);

        viewport.width >= 300.
            && tree
                .walk(TraversalKind::InOrder)
                .into_iter()
                .all(|id| tree[id].x() < viewport.width && tree[id].y() < viewport.height)
    }
}
