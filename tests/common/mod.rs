use proptest::prelude::*;
use std::sync::Once;

static INIT: Once = Once::new();

/// Routes the crate's `log` output to the test harness's captured stdout.
#[allow(dead_code)]
pub(super) fn init_logger() {
    INIT.call_once(|| {
        // another test binary may have set a logger already
        let _ = simplelog::TestLogger::init(
            simplelog::LevelFilter::Trace,
            simplelog::Config::default(),
        );
    });
}

#[allow(dead_code)]
pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(
    mut i: I,
    mut j: J,
) where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

#[allow(dead_code)]
pub(super) type U16Pairs = Vec<(u16, u16)>;

#[allow(dead_code)]
pub(super) fn small_int_pairs() -> impl Strategy<Value = U16Pairs> {
    prop::collection::vec((0u16..1024u16, 0u16..1024u16), 0..512)
}

// Few distinct keys, so inserts collide and removes hit.
#[allow(dead_code)]
pub(super) fn tiny_int_pairs() -> impl Strategy<Value = U16Pairs> {
    prop::collection::vec((0u16..64, 0u16..1024), 0..48)
}

#[allow(dead_code)]
pub(super) fn string_u16_pairs() -> impl Strategy<Value = Vec<(String, u16)>> {
    prop::collection::vec(("[a-z]{0,2}", 0u16..1024u16), 0..512)
}

/// A script of map operations: `(true, k, v)` puts `(k, v)` and
/// `(false, k, _)` deletes `k`.
#[allow(dead_code)]
pub(super) fn put_delete_ops(
) -> impl Strategy<Value = Vec<(bool, u16, u16)>> {
    prop::collection::vec((any::<bool>(), 0u16..128, 0u16..1024), 0..256)
}

/// A lo/hi pair for closed range queries, in either order.
#[allow(dead_code)]
pub(super) fn key_bounds_1k() -> impl Strategy<Value = (u16, u16)> {
    (0u16..1024, 0u16..1024)
}
