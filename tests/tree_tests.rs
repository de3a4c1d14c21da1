//! Tree construction, query and export tests

use audit_merkle::{
    core::hash::{sha256, tagged_hash},
    Direction, HashStrategy, MerkleError, MerkleTree, OddNodePolicy, Strategy, DEFAULT_TAG,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn four_leaf_tree() -> MerkleTree {
    MerkleTree::new(["aaa", "bbb", "ccc", "ddd"], Strategy::default()).unwrap()
}

#[test]
fn test_two_leaf_golden_root() {
    let tree = MerkleTree::new(["aaa", "bbb"], Strategy::default()).unwrap();
    assert_eq!(
        tree.root_hex(),
        "a3047514dd4deb62e5ee5810671a2af4183244c646819fc2bfc8b0b669daaf0b"
    );

    let tree = MerkleTree::new(["aaa", "bbb"], Strategy::sha256()).unwrap();
    assert_eq!(
        tree.root_hex(),
        "6a0b1d67884e58786e97bc51544cbba4cc3e1279d8ff46da2fa32bcdb44a053e"
    );
}

#[test]
fn test_three_leaf_golden_roots_per_policy() {
    let carry = MerkleTree::new(["aaa", "bbb", "ccc"], Strategy::default()).unwrap();
    assert_eq!(
        carry.root_hex(),
        "a9c88c1601be8c49fecb8fff5c3463968f7135d3cf9439871b3fc8dc62495910"
    );

    let duplicate = MerkleTree::with_policy(
        ["aaa", "bbb", "ccc"],
        Strategy::default(),
        Strategy::default(),
        OddNodePolicy::DuplicateLast,
    )
    .unwrap();
    assert_eq!(
        duplicate.root_hex(),
        "abff5ee4fd9f320a89f759e745b682230a2e07e68da332138c9ea351537c17f9"
    );
}

#[test]
fn test_construction_is_deterministic() {
    let first = four_leaf_tree();
    let second = four_leaf_tree();
    assert_eq!(first.root(), second.root());
    assert_eq!(first.export_tree(), second.export_tree());
}

#[test]
fn test_single_leaf_identity() {
    let tree = MerkleTree::new(["lonely"], Strategy::default()).unwrap();
    assert_eq!(tree.root(), tagged_hash(DEFAULT_TAG, b"lonely"));

    let plain = MerkleTree::new(["lonely"], Strategy::sha256()).unwrap();
    assert_eq!(plain.root(), sha256(b"lonely"));
}

#[test]
fn test_empty_input() {
    let err = MerkleTree::new(Vec::<Vec<u8>>::new(), Strategy::default()).unwrap_err();
    assert!(matches!(err, MerkleError::EmptyInput));
}

#[test]
fn test_leaf_queries() {
    let tree = four_leaf_tree();
    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.leaf(2).unwrap(), b"ccc");
    assert_eq!(tree.leaf_hash(2).unwrap(), Strategy::default().hash(b"ccc"));
    assert_eq!(tree.find_leaf("ddd"), Some(3));
    assert_eq!(tree.find_leaf("not_found"), None);
    assert_eq!(
        tree.leaves().collect::<Vec<_>>(),
        vec![&b"aaa"[..], &b"bbb"[..], &b"ccc"[..], &b"ddd"[..]]
    );
}

#[test]
fn test_binary_leaves() {
    let leaves: Vec<Vec<u8>> = vec![vec![0, 1, 2], vec![], vec![0xff; 64]];
    let tree = MerkleTree::new(&leaves, Strategy::sha256()).unwrap();
    assert_eq!(tree.leaf(1).unwrap(), b"");
    assert_eq!(tree.find_leaf([0xffu8; 64]), Some(2));
}

#[test]
fn test_four_leaf_proof_directions() {
    let tree = four_leaf_tree();

    let directions = |index| {
        tree.generate_proof(index)
            .unwrap()
            .path()
            .iter()
            .map(|e| e.direction)
            .collect::<Vec<_>>()
    };

    assert_eq!(directions(0), vec![Direction::Right, Direction::Right]);
    assert_eq!(directions(3), vec![Direction::Left, Direction::Left]);
    assert_eq!(directions(1), vec![Direction::Left, Direction::Right]);
    assert_eq!(directions(2), vec![Direction::Right, Direction::Left]);
}

#[test]
fn test_four_leaf_proof_siblings() {
    let tree = four_leaf_tree();
    let proof = tree.generate_proof(0).unwrap();
    assert_eq!(proof.path()[0].hash, tree.leaf_hash(1).unwrap());
    assert_eq!(proof.path()[1].hash, tree.levels()[1][1]);
    assert_eq!(proof.leaf_data(), b"aaa");
    assert_eq!(proof.leaf_index(), 0);
    assert_eq!(*proof.root(), tree.root());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(7)]
#[case(8)]
#[case(13)]
#[case(100)]
fn test_export_shape(#[case] leaf_count: usize) {
    let leaves: Vec<String> = (0..leaf_count).map(|i| format!("record-{i}")).collect();
    let tree = MerkleTree::new(&leaves, Strategy::default()).unwrap();
    let export = tree.export_tree();

    assert_eq!(export.levels[0].len(), leaf_count);
    assert_eq!(export.levels.last().unwrap().len(), 1);
    assert_eq!(export.levels.last().unwrap()[0], tree.root_hex());
    for pair in export.levels.windows(2) {
        let n = pair[0].len();
        assert_eq!(pair[1].len(), n / 2 + n % 2);
    }
    for level in &export.levels {
        for digest in level {
            assert_eq!(digest.len(), 64);
            assert_eq!(digest, &digest.to_lowercase());
        }
    }
}

#[test]
fn test_export_json() {
    let tree = MerkleTree::new(["aaa", "bbb"], Strategy::default()).unwrap();
    let json = tree.export_tree().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["levels"].as_array().unwrap().len(), 2);
    assert_eq!(value["levels"][1][0], tree.root_hex());
}

#[rstest]
#[case::equal_to_count(4)]
#[case::past_count(5)]
#[case::max(usize::MAX)]
fn test_out_of_range_indices(#[case] index: usize) {
    let mut tree = four_leaf_tree();

    let is_out_of_range = |err: MerkleError| {
        matches!(err, MerkleError::IndexOutOfRange { index: i, leaf_count: 4 } if i == index)
    };

    assert!(is_out_of_range(tree.leaf(index).unwrap_err()));
    assert!(is_out_of_range(tree.leaf_hash(index).unwrap_err()));
    assert!(is_out_of_range(tree.generate_proof(index).unwrap_err()));
    assert!(is_out_of_range(tree.update_leaf(index, "x").unwrap_err()));

    // A rejected update leaves the tree untouched
    assert_eq!(tree.root(), four_leaf_tree().root());
}

#[test]
fn test_leaf_order_matters() {
    let forward = MerkleTree::new(["a", "b", "c"], Strategy::default()).unwrap();
    let reversed = MerkleTree::new(["c", "b", "a"], Strategy::default()).unwrap();
    assert_ne!(forward.root(), reversed.root());
}

#[test]
fn test_trees_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MerkleTree>();
    assert_send_sync::<audit_merkle::MerkleProofVerifier>();
    assert_send_sync::<audit_merkle::MerkleProof>();
}

#[test]
fn test_concurrent_reads() {
    let tree = std::sync::Arc::new(
        MerkleTree::new((0..64).map(|i| format!("entry-{i}")), Strategy::default()).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let tree = tree.clone();
            std::thread::spawn(move || {
                let verifier = tree.verifier();
                (t * 16..(t + 1) * 16).all(|i| verifier.verify(&tree.generate_proof(i).unwrap()))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
