use super::dimacs::{read_dimacs, write_dimacs, write_edges};
use super::gen::{self, GnpParams, ReplayToken};
use super::*;

#[test]
fn add_edge_rejects_loops_and_out_of_range() {
    let mut g = Graph::new(3);
    assert!(matches!(g.add_edge(1, 1), Err(GraphError::Loop(1))));
    assert!(matches!(
        g.add_edge(0, 3),
        Err(GraphError::NodeOutOfRange {
            node: 3,
            num_nodes: 3
        })
    ));
    g.add_edge(0, 2).unwrap();
    assert_eq!(g.num_edges(), 1);
    assert_eq!(g.neighbors(2), &[0]);
    assert!(g.has_edge(2, 0));
    assert!(!g.has_edge(0, 1));
    assert!(!g.has_edge(0, 7));
}

#[test]
fn edges_lists_each_edge_once() {
    let g = gen::triangle_with_pendant();
    let mut edges: Vec<_> = g.edges().collect();
    edges.sort_unstable();
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
}

#[test]
fn delete_nodes_renumbers_in_order() {
    let mut g = gen::cycle(5);
    let map = g.delete_nodes(&[false, true, false, false, true]);
    assert_eq!(map, vec![0, 2, 3]);
    assert_eq!(g.num_nodes(), 3);
    // Only the old edge 2-3 survives.
    assert_eq!(g.num_edges(), 1);
    assert!(g.has_edge(1, 2));
    assert_eq!(g.degree(0), 0);
}

#[test]
fn shuffled_is_a_seeded_relabelling() {
    let g = gen::petersen();
    let (h, old_of_new) = g.shuffled(811);
    let (h2, map2) = g.shuffled(811);
    assert_eq!(h, h2);
    assert_eq!(old_of_new, map2);
    assert_eq!(h.num_edges(), g.num_edges());
    let mut sorted = old_of_new.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    for (a, b) in h.edges() {
        assert!(g.has_edge(old_of_new[a], old_of_new[b]));
    }
    for v in 0..h.num_nodes() {
        assert!(h.neighbors(v).windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn universal_vertices_touch_everything() {
    let g = gen::path(3).with_universal_vertices(2);
    assert_eq!(g.num_nodes(), 5);
    assert_eq!(g.num_edges(), 2 + 6);
    for extra in 3..5 {
        assert_eq!(g.degree(extra), 3);
        for v in 0..3 {
            assert!(g.has_edge(v, extra));
        }
    }
    assert!(!g.has_edge(3, 4));
}

#[test]
fn families_have_expected_sizes() {
    assert_eq!(gen::complete(5).num_edges(), 10);
    assert_eq!(gen::star(6).degree(0), 6);
    assert_eq!(gen::cycle(2).num_edges(), 1);
    let p = gen::petersen();
    assert_eq!(p.num_edges(), 15);
    assert!((0..10).all(|v| p.degree(v) == 3));
    let q = gen::queen(4);
    assert_eq!(q.num_nodes(), 16);
    assert_eq!(q.num_edges(), 76);
    // Corner attacks its row, column and main diagonal.
    assert_eq!(q.degree(0), 9);
}

#[test]
fn gnp_is_reproducible_and_validated() {
    let params = GnpParams {
        nodes: 30,
        edge_probability: 0.2,
    };
    let tok = ReplayToken { seed: 7, index: 3 };
    let a = gen::gnp(params, tok).unwrap();
    let b = gen::gnp(params, tok).unwrap();
    assert_eq!(a, b);
    let full = gen::gnp(
        GnpParams {
            nodes: 6,
            edge_probability: 1.0,
        },
        tok,
    )
    .unwrap();
    assert_eq!(full.num_edges(), 15);
    for bad in [-0.1, 1.5, f64::NAN] {
        let params = GnpParams {
            nodes: 4,
            edge_probability: bad,
        };
        assert!(matches!(
            gen::gnp(params, tok),
            Err(GraphError::InvalidParams(_))
        ));
    }
}

#[test]
fn dimacs_reads_comments_and_one_based_ids() {
    let text = "c a triangle\n\np edge 3 3\ne 1 2\nc between edges\ne 2 3\ne 3 1\ne 9 9 trailing lines are ignored\n";
    let g = read_dimacs(text.as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_edges(), 3);
    assert!(g.has_edge(0, 2));
}

#[test]
fn dimacs_errors_carry_line_numbers() {
    let cases = [
        ("", 1),
        ("c only\nx nonsense\n", 2),
        ("p edge 3 1\ne 0 1\n", 2),
        ("p edge 3 1\ne 1 4\n", 2),
        ("p edge 3 2\ne 1 2\ne 2 2\n", 3),
        ("p edge 3 2\nc\ne 1 2\n", 4),
        ("p edge 3 1\ne 1\n", 2),
        ("c huge\np edge 18446744073709551615 0\n", 2),
    ];
    for (text, expected) in cases {
        match read_dimacs(text.as_bytes()) {
            Err(GraphError::Dimacs { line, .. }) => assert_eq!(line, expected, "input {text:?}"),
            other => panic!("expected a DIMACS error for {text:?}, got {other:?}"),
        }
    }
}

#[test]
fn dimacs_write_then_read() {
    let g = gen::petersen();
    let mut buf = Vec::new();
    write_dimacs(&g, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("p edge 10 15\n"));
    let h = read_dimacs(text.as_bytes()).unwrap();
    let mut a: Vec<_> = g.edges().collect();
    let mut b: Vec<_> = h.edges().collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);

    let mut out = Vec::new();
    write_edges(4, &[(0, 1), (2, 3)], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "p edge 4 2\ne 1 2\ne 3 4\n");
}
