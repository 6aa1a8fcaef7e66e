use ordered_collections::{Color, RedBlackMap, RedBlackSet, Side};
use proptest::prelude::*;

mod common;
use common::*;

fn check_edges(v: U16Pairs) {
    init_logger();
    let m: RedBlackMap<_, _> = v.into_iter().collect();
    let black_height = m.validate().unwrap();

    // a tree of black height b holds at least 2^b - 1 nodes
    assert!(m.size() + 1 >= 1usize << black_height);

    let edges = m.edges();
    assert_eq!(edges.len(), m.size().saturating_sub(1));

    for e in edges.iter() {
        match e.side {
            Side::Left => assert!(e.child < e.parent),
            Side::Right => {
                assert!(e.child > e.parent);
                assert_eq!(e.color, Color::Black);
            }
        }
    }

    let mut out = Vec::new();
    m.write_dot(&mut out, "map").unwrap();
    let dot = String::from_utf8(out).unwrap();
    assert_eq!(dot.matches(" -> ").count(), edges.len());
    assert_eq!(
        dot.matches("color=red").count(),
        edges.iter().filter(|e| e.color == Color::Red).count()
    );
}

#[test]
fn two_keys_one_red_link() {
    let mut s = RedBlackSet::new();
    s.put("b");
    s.put("a");

    let edges = s.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].parent, &"b");
    assert_eq!(edges[0].child, &"a");
    assert_eq!(edges[0].side, Side::Left);
    assert_eq!(edges[0].color, Color::Red);
    assert_eq!(s.validate(), Ok(1));

    let mut out = Vec::new();
    s.write_dot(&mut out, "pair").unwrap();
    let dot = String::from_utf8(out).unwrap();
    assert!(dot.starts_with("digraph \"pair\" {\n"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn empty_tree_dot() {
    let m: RedBlackMap<u8, u8> = RedBlackMap::new();
    let mut out = Vec::new();
    m.write_dot(&mut out, "empty").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "digraph \"empty\" {\n}\n");
}

proptest! {
    #[test]
    fn test_edges(v in small_int_pairs()) {
        check_edges(v);
    }
}
