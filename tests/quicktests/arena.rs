use bst_set::arena::Tree;
use bst_set::NodeId;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both, and that both
/// agreed on whether each operation changed anything.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
        Op::Delete(k) => tree.delete(k) == set.remove(k),
    })
}

/// Collects the keys of the tree in order, returning `None` if any node breaks the BST
/// ordering.
fn sorted_keys<K: Ord + Clone>(tree: &Tree<K>) -> Option<Vec<K>> {
    fn walk<K: Ord + Clone>(tree: &Tree<K>, id: Option<NodeId>, keys: &mut Vec<K>) -> bool {
        let Some(id) = id else {
            return true;
        };
        if !walk(tree, tree.left(id), keys) {
            return false;
        }
        let Some(key) = tree.key(id).cloned() else {
            return false;
        };
        if keys.last().is_some_and(|last| *last >= key) {
            return false;
        }
        keys.push(key);
        walk(tree, tree.right(id), keys)
    }

    let mut keys = Vec::new();
    walk(tree, tree.root(), &mut keys).then_some(keys)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && sorted_keys(&tree) == Some(set.iter().copied().collect())
        && tree.max() == set.last()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut once: Tree<i8> = xs.iter().copied().collect();
    once.insert(k);
    let mut twice = once.clone();
    twice.insert(k);

    sorted_keys(&once) == sorted_keys(&twice)
}

#[quickcheck]
fn insert_then_delete_restores_members(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().filter(|x| *x != k).collect();
    let before = sorted_keys(&tree);

    tree.insert(k);
    tree.delete(&k);

    before.is_some() && sorted_keys(&tree) == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let deleted: BTreeSet<_> = deletes.iter().copied().collect();
    let still_present: BTreeSet<_> = xs
        .iter()
        .copied()
        .filter(|x| !deleted.contains(x))
        .collect();

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && sorted_keys(&tree) == Some(still_present.into_iter().collect())
}
