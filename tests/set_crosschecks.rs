use ordered_collections::RedBlackSet;
use proptest::prelude::*;
use std::collections::BTreeSet as StdSet;

mod common;
use common::*;

fn chk(s: &RedBlackSet<u16>, t: &StdSet<u16>) {
    assert_eq!(s.len(), t.len());
    assert_eq_iters(s.iter(), t.iter());
    s.validate().unwrap();
}

fn check_put_delete(ops: Vec<(bool, u16, u16)>) {
    init_logger();
    let mut s = RedBlackSet::new();
    let mut t = StdSet::new();

    for (is_put, k, _) in ops {
        if is_put {
            assert_eq!(s.put(k), !t.insert(k));
        } else {
            assert_eq!(s.delete(&k), t.remove(&k));
        }

        chk(&s, &t);
    }
}

fn check_order_queries(v: Vec<u16>, probes: Vec<u16>) {
    let s: RedBlackSet<_> = v.iter().copied().collect();
    let t: StdSet<_> = v.into_iter().collect();

    assert_eq!(s.min(), t.first());
    assert_eq!(s.max(), t.last());

    for p in probes {
        assert_eq!(s.contains(&p), t.contains(&p));
        assert_eq!(s.floor(&p), t.range(..=p).next_back());
        assert_eq!(s.ceiling(&p), t.range(p..).next());
        assert_eq!(s.rank(&p), t.range(..p).count());
    }

    for (i, k) in t.iter().enumerate() {
        assert_eq!(s.select(i), Some(k));
    }
}

fn check_drain(v: Vec<u16>) {
    let mut s: RedBlackSet<_> = v.iter().copied().collect();
    let mut t: StdSet<_> = v.into_iter().collect();

    while !t.is_empty() {
        assert_eq!(s.delete_min(), t.pop_first());
        chk(&s, &t);
        assert_eq!(s.delete_max(), t.pop_last());
        chk(&s, &t);
    }

    assert!(s.is_empty());
    assert_eq!(s.delete_min(), None);
}

fn check_ranged_keys(v: Vec<u16>, (lo, hi): (u16, u16)) {
    let s: RedBlackSet<_> = v.iter().copied().collect();
    let t: StdSet<_> = v.into_iter().collect();

    let mut got = vec![];
    s.ranged_keys(&lo, &hi, |k| {
        got.push(*k);
        true
    });

    if lo <= hi {
        assert_eq_iters(got.iter(), t.range(lo..=hi));
    } else {
        assert!(got.is_empty());
    }
}

#[test]
fn clear_then_reuse() {
    let mut s: RedBlackSet<_> = (0..100).collect();
    s.clear();
    assert!(s.is_empty());
    assert!(!s.put(1));
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![&1]);
}

proptest! {
    #[test]
    fn test_put_delete(ops in put_delete_ops()) {
        check_put_delete(ops);
    }

    #[test]
    fn test_order_queries(
        v in prop::collection::vec(0u16..1024, 0..512),
        w in prop::collection::vec(0u16..1024, 32))
    {
        check_order_queries(v, w);
    }

    #[test]
    fn test_drain(v in prop::collection::vec(0u16..1024, 0..256)) {
        check_drain(v);
    }

    #[test]
    fn test_ranged_keys(
        v in prop::collection::vec(0u16..1024, 0..512),
        r in key_bounds_1k())
    {
        check_ranged_keys(v, r);
    }
}
