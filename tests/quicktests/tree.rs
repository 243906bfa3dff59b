use std::collections::BTreeSet;

use bst_viz::tree::Tree;

use crate::{build, init_logging, invariants_hold, Op};

quickcheck::quickcheck! {
    fn invariants_survive_any_ops(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        invariants_hold(&build(&ops))
    }
}

quickcheck::quickcheck! {
    fn matches_a_set(ops: Vec<Op<i16>>) -> bool {
        init_logging();
        let tree = build(&ops);
        let mut set = BTreeSet::new();
        for op in &ops {
            match op {
                Op::Insert(k) => {
                    set.insert(*k);
                }
                Op::Remove(k) => {
                    set.remove(k);
                }
            }
        }

        tree.inorder().into_iter().eq(set)
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(ops: Vec<Op<i8>>, k: i8) -> bool {
        init_logging();
        let mut tree = build(&ops);
        tree.insert(k);
        let preorder = tree.preorder();
        let len = tree.len();

        let again = tree.insert(k);
        !again.inserted && tree.preorder() == preorder && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn deleted_values_are_gone(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_logging();
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        deletes.iter().all(|x| tree.search(x).found.is_none())
            && xs
                .iter()
                .filter(|&x| !deletes.contains(x))
                .all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted_for_any_insertion_order(xs: Vec<i32>) -> bool {
        init_logging();
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();
        tree.inorder() == expected
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_value_once(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let tree = build(&ops);
        let inorder: BTreeSet<_> = tree.inorder().into_iter().collect();
        let preorder: BTreeSet<_> = tree.preorder().into_iter().collect();
        let postorder: BTreeSet<_> = tree.postorder().into_iter().collect();

        inorder.len() == tree.len() && preorder == inorder && postorder == inorder
    }
}
