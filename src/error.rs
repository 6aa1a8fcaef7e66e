use std::fmt::{self, Debug, Display, Formatter};

/// A broken red-black tree invariant, as reported by
/// [`RedBlackMap::validate`](crate::RedBlackMap::validate).
///
/// These can only arise from a comparator that is not a total order (or
/// that changed its answers between calls); a tree driven through its public
/// operations with a lawful comparator never produces one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantError<K> {
    /// `child` sits on the wrong side of `parent` for the comparator.
    SortError { parent: K, child: K },
    /// The link from `parent` to its right child is red.
    RedRightLink { parent: K },
    /// `key` is red and so is its left child.
    ConsecutiveReds { key: K },
    /// The subtrees below `key` have different black heights.
    UnbalancedBlacks { key: K, left: usize, right: usize },
    /// The stored subtree size of `key` disagrees with its real size.
    SizeMismatch { key: K, stored: usize, actual: usize },
    /// The root's color bit was left red after an operation.
    RedRoot,
}

impl<K> InvariantError<K> {
    /// A short name for the broken invariant that does not mention keys.
    pub fn kind(&self) -> &'static str {
        use InvariantError::*;
        match self {
            SortError { .. } => "keys out of order",
            RedRightLink { .. } => "red right link",
            ConsecutiveReds { .. } => "consecutive red links",
            UnbalancedBlacks { .. } => "unbalanced black height",
            SizeMismatch { .. } => "wrong subtree size",
            RedRoot => "red root",
        }
    }
}

impl<K: Debug> Display for InvariantError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use InvariantError::*;
        match self {
            SortError { parent, child } => {
                write!(f, "key {child:?} is out of order under {parent:?}")
            }
            RedRightLink { parent } => {
                write!(f, "{parent:?}: right link is red")
            }
            ConsecutiveReds { key } => {
                write!(f, "{key:?} is red, its left child also is red")
            }
            UnbalancedBlacks { key, left, right } => write!(
                f,
                "{key:?}: unbalanced blacks left: {left} and right: {right}"
            ),
            SizeMismatch { key, stored, actual } => write!(
                f,
                "{key:?}: stored size {stored} but subtree holds {actual}"
            ),
            RedRoot => f.write_str("root link is red"),
        }
    }
}

impl<K: Debug> std::error::Error for InvariantError<K> {}
