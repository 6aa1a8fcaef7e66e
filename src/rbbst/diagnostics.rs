use super::{is_red, size, OptNode, RedBlackMap};
use crate::compare::Compare;
use crate::error::InvariantError;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Write as _};
use std::io;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left (lesser) child.
    Left,
    /// The right (greater) child.
    Right,
}

/// The color of the link from a parent to a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red link glues the child into its parent's 3-node.
    Red,
    /// An ordinary 2-3 tree link.
    Black,
}

impl Color {
    fn of(red: bool) -> Self {
        if red {
            Color::Red
        } else {
            Color::Black
        }
    }
}

/// One parent-to-child link of a [`RedBlackMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<'a, K> {
    /// The key of the parent node.
    pub parent: &'a K,
    /// The key of the child node.
    pub child: &'a K,
    /// Which child the link leads to.
    pub side: Side,
    /// The color of the link.
    pub color: Color,
}

// Checks the subtree at opt_node, whose keys must lie strictly between lo and
// hi when those bounds are given.  Returns (black height, subtree size).
fn chk<'a, K, V, C>(
    opt_node: &'a OptNode<K, V>,
    lo: Option<&'a K>,
    hi: Option<&'a K>,
    cmp: &C,
) -> Result<(usize, usize), InvariantError<&'a K>>
where
    C: Compare<K>,
{
    let Some(n) = opt_node else {
        return Ok((0, 0));
    };

    if let Some(lo) = lo {
        if cmp.compare(lo, &n.key) != Less {
            return Err(InvariantError::SortError {
                parent: lo,
                child: &n.key,
            });
        }
    }

    if let Some(hi) = hi {
        if cmp.compare(&n.key, hi) != Less {
            return Err(InvariantError::SortError {
                parent: hi,
                child: &n.key,
            });
        }
    }

    if is_red(&n.right) {
        return Err(InvariantError::RedRightLink { parent: &n.key });
    }

    if n.red && is_red(&n.left) {
        return Err(InvariantError::ConsecutiveReds { key: &n.key });
    }

    let (lf_blacks, lf_size) = chk(&n.left, lo, Some(&n.key), cmp)?;
    let (rt_blacks, rt_size) = chk(&n.right, Some(&n.key), hi, cmp)?;

    if lf_blacks != rt_blacks {
        return Err(InvariantError::UnbalancedBlacks {
            key: &n.key,
            left: lf_blacks,
            right: rt_blacks,
        });
    }

    let actual = lf_size + rt_size + 1;
    if n.size != actual {
        return Err(InvariantError::SizeMismatch {
            key: &n.key,
            stored: n.size,
            actual,
        });
    }

    Ok((lf_blacks + usize::from(!n.red), actual))
}

fn collect_edges<'a, K, V>(opt_node: &'a OptNode<K, V>, acc: &mut Vec<Edge<'a, K>>) {
    let Some(n) = opt_node else {
        return;
    };

    for (child, side) in [(&n.left, Side::Left), (&n.right, Side::Right)] {
        if let Some(c) = child {
            acc.push(Edge {
                parent: &n.key,
                child: &c.key,
                side,
                color: Color::of(c.red),
            });
        }
    }

    collect_edges(&n.left, acc);
    collect_edges(&n.right, acc);
}

// Emits the DOT statements for the subtree at opt_node.  Node ids are the
// in-order positions of the keys, so `base` is the number of keys that sort
// before this subtree.
fn dot_nodes<K: Debug, V>(
    opt_node: &OptNode<K, V>,
    base: usize,
    nodes: &mut String,
    links: &mut String,
) -> std::fmt::Result {
    let Some(n) = opt_node else {
        return Ok(());
    };

    let id = base + size(&n.left);
    writeln!(nodes, "  n{id} [label={:?}];", format!("{:?}", n.key))?;

    if let Some(lf) = n.left.as_ref() {
        let lf_id = base + size(&lf.left);
        let color = if lf.red { "red" } else { "black" };
        writeln!(links, "  n{id} -> n{lf_id} [color={color}, label=\"L\"];")?;
    }

    if let Some(rt) = n.right.as_ref() {
        let rt_id = id + 1 + size(&rt.left);
        let color = if rt.red { "red" } else { "black" };
        writeln!(links, "  n{id} -> n{rt_id} [color={color}, label=\"R\"];")?;
    }

    dot_nodes(&n.left, base, nodes, links)?;
    dot_nodes(&n.right, id + 1, nodes, links)
}

impl<K, V, C> RedBlackMap<K, V, C> {
    /// Lists every parent-to-child link in pre-order.
    pub fn edges(&self) -> Vec<Edge<'_, K>> {
        let mut acc = Vec::with_capacity(self.size().saturating_sub(1));
        collect_edges(&self.root, &mut acc);
        acc
    }
}

impl<K, V, C: Compare<K>> RedBlackMap<K, V, C> {
    /// Walks the whole tree checking the left-leaning red-black invariants:
    /// keys in order, no red right links, no two reds in a row, the same
    /// number of black links on every root-to-leaf path, correct subtree
    /// sizes and a black root.
    ///
    /// Returns the black height of the tree.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m: RedBlackMap<_, _> = (0..7).map(|k| (k, ())).collect();
    /// assert_eq!(m.validate(), Ok(3));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantError<&K>> {
        if self.root.as_ref().map_or(false, |n| n.red) {
            log::debug!("validate: root link is red");
            return Err(InvariantError::RedRoot);
        }

        let res = chk(&self.root, None, None, &self.cmp).map(|(blacks, _)| blacks);
        if let Err(e) = &res {
            log::debug!("validate: {} in tree of size {}", e.kind(), self.size());
        }
        res
    }

    /// Writes the tree to `out` as a Graphviz digraph named `name`.
    ///
    /// Red links are drawn red.  The layout of the output is meant for
    /// people and may change.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m = RedBlackMap::from([("b", 1), ("a", 2)]);
    /// let mut out = Vec::new();
    /// m.write_dot(&mut out, "t").unwrap();
    ///
    /// let dot = String::from_utf8(out).unwrap();
    /// assert!(dot.starts_with("digraph \"t\" {"));
    /// assert!(dot.contains("n1 -> n0 [color=red"));
    /// ```
    pub fn write_dot<W: io::Write>(&self, mut out: W, name: &str) -> io::Result<()>
    where
        K: Debug,
    {
        let mut nodes = String::new();
        let mut links = String::new();
        dot_nodes(&self.root, 0, &mut nodes, &mut links)
            .map_err(|_| io::Error::other("formatting DOT output"))?;

        writeln!(out, "digraph {name:?} {{")?;
        out.write_all(nodes.as_bytes())?;
        out.write_all(links.as_bytes())?;
        writeln!(out, "}}")
    }
}
