//! Tree operations driven by hand on tiny graphs (no search loop involved).

use super::*;

fn r(id: NodeId) -> Representative {
    Representative::new(id)
}

struct Fixture {
    matching: Matching,
    partition: Partition,
    buf: TreeBuffers,
}

impl Fixture {
    fn new(n: usize, matched: &[(NodeId, NodeId)]) -> Self {
        let mut matching = Matching::new(n);
        for &(a, b) in matched {
            matching.add_edge(a, b);
        }
        Self {
            matching,
            partition: Partition::new(n),
            buf: TreeBuffers::new(n),
        }
    }

    fn tree(&mut self, root: NodeId) -> AlternatingTree<'_> {
        AlternatingTree::new(root, &mut self.matching, &mut self.partition, &mut self.buf)
    }
}

#[test]
fn extend_adds_odd_child_and_even_grandchild() {
    let mut fx = Fixture::new(3, &[(1, 2)]);
    let mut tree = fx.tree(0);
    assert!(tree.is_even(r(0)));
    assert!(!tree.is_tree_node(r(1)));
    tree.extend(r(0), 0, r(1));
    assert!(tree.is_tree_node(r(1)));
    assert!(!tree.is_even(r(1)));
    assert!(tree.is_even(r(2)));
    assert_eq!(tree.tree_vertices(), &[0, 1, 2]);
    tree.unshrink();
    assert_eq!(fx.buf.tree_vertices(), &[0, 1, 2]);
}

#[test]
fn triangle_blossom_then_augment() {
    // Triangle 0-1-2 with 1-2 matched, plus exposed 3 hanging off 1.
    let mut fx = Fixture::new(4, &[(1, 2)]);
    let mut tree = fx.tree(0);
    tree.extend(r(0), 0, r(1));
    let newly_even = tree.shrink_fundamental_circuit(r(2), r(0), 2, 0).to_vec();
    assert_eq!(newly_even, vec![1]);
    let blossom = tree.representative_of(1);
    for v in 0..3 {
        assert_eq!(tree.representative_of(v), blossom);
    }
    assert!(tree.is_even(blossom));
    assert!(!tree.matching().is_matched(blossom));

    tree.augment_and_unshrink(blossom, 1, r(3));
    assert!(!fx.partition.is_shrunk());
    assert_eq!(fx.matching.matching_edges(), vec![(0, 2), (1, 3)]);
    assert!(fx.matching.validate(Some(&fx.partition)));
}

#[test]
fn two_stems_meet_at_the_root() {
    // 0-1=2, 0-3=4, closing edge 2-4: a pentagon with 0 on top.
    let mut fx = Fixture::new(5, &[(1, 2), (3, 4)]);
    let mut tree = fx.tree(0);
    tree.extend(r(0), 0, r(1));
    tree.extend(r(0), 0, r(3));
    let mut newly_even = tree.shrink_fundamental_circuit(r(2), r(4), 2, 4).to_vec();
    newly_even.sort_unstable();
    assert_eq!(newly_even, vec![1, 3]);
    let blossom = tree.representative_of(0);
    for v in 0..5 {
        assert_eq!(tree.representative_of(v), blossom);
    }
    assert!(tree.is_even(blossom));

    // Frustrated: undo and expect the original pairing back.
    tree.unshrink();
    assert_eq!(fx.matching.matching_edges(), vec![(1, 2), (3, 4)]);
    assert!(!fx.matching.is_matched(r(0)));
    let mut seen = fx.buf.tree_vertices().to_vec();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn nested_blossoms_expand_through_augmentation() {
    // Pentagon 0-1=2-4=3-0 around the root, then 3-5=6 closing back to 0, then exposed 7
    // adjacent to 6.
    let mut fx = Fixture::new(8, &[(1, 2), (3, 4), (5, 6)]);
    let mut tree = fx.tree(0);
    tree.extend(r(0), 0, r(1));
    tree.extend(r(0), 0, r(3));
    tree.shrink_fundamental_circuit(r(2), r(4), 2, 4);
    let inner = tree.representative_of(3);

    tree.extend(inner, 3, r(5));
    assert!(!tree.is_even(r(5)));
    let newly_even = tree.shrink_fundamental_circuit(r(6), inner, 6, 0).to_vec();
    assert_eq!(newly_even, vec![5]);
    let outer = tree.representative_of(6);
    assert_eq!(tree.representative_of(0), outer);
    assert!(tree.is_even(outer));

    tree.augment_and_unshrink(outer, 6, r(7));
    assert!(!fx.partition.is_shrunk());
    assert!(!fx.matching.is_shrunk());
    assert_eq!(fx.matching.len(), 4);
    assert_eq!(
        fx.matching.matching_edges(),
        vec![(0, 1), (2, 4), (3, 5), (6, 7)]
    );
    assert!(fx.matching.validate(Some(&fx.partition)));
}

#[test]
fn buffers_are_reused_across_roots() {
    let mut fx = Fixture::new(4, &[(1, 2)]);
    {
        let mut tree = fx.tree(0);
        tree.extend(r(0), 0, r(1));
        tree.unshrink();
    }
    let tree = fx.tree(3);
    assert!(!tree.is_tree_node(r(1)));
    assert!(!tree.is_tree_node(r(0)));
    assert!(tree.is_even(r(3)));
    assert_eq!(tree.tree_vertices(), &[3]);
    tree.unshrink();
}
