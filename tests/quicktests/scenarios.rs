use bst_avl::node::BinaryNode;
use bst_avl::{avl, unbalanced};

fn preorder_avl(keys: &[i32]) -> Vec<i32> {
    let mut tree = avl::Tree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree.preorder().copied().collect()
}

#[test]
fn avl_balanced_insertion_order() {
    assert_eq!(
        preorder_avl(&[30, 20, 40, 10, 25, 35, 50]),
        vec![30, 20, 10, 25, 40, 35, 50]
    );
}

#[test]
fn avl_order_independent_for_full_trees() {
    let expected = vec![4, 2, 1, 3, 6, 5, 7];
    assert_eq!(preorder_avl(&[1, 2, 3, 4, 5, 6, 7]), expected);
    assert_eq!(preorder_avl(&[7, 6, 5, 4, 3, 2, 1]), expected);
    assert_eq!(preorder_avl(&[4, 2, 6, 1, 3, 5, 7]), expected);
}

#[test]
fn bst_keeps_every_duplicate() {
    let mut tree = unbalanced::Tree::new();
    for key in [5, 5, 5].iter() {
        tree.insert(*key);
    }

    assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![5, 5, 5]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn avl_delete_with_two_children() {
    let mut tree = avl::Tree::new();
    for key in [7, 3, 10, 9, 15].iter() {
        tree.insert(*key);
    }

    assert!(tree.delete(&7));

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 9);
    assert!(root.balance_factor().abs() <= 1);
    assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![9, 3, 10, 15]);
}

#[test]
fn missing_key_operations_are_quiet() {
    let mut bst = unbalanced::Tree::new();
    let mut avl = avl::Tree::new();

    assert!(!bst.delete(&1));
    assert!(!avl.delete(&1));
    assert_eq!(avl.locate(&1), Err(bst_avl::Error::KeyNotFound));
    assert_eq!(bst.minimum(), None);
}
