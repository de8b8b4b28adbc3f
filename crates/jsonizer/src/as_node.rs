//! [`AsNode`] — classification of source values into [`Node`] shapes.
//!
//! Classification is a fixed precedence chain (null before leaf before
//! mapping before sequence before composite), realized as impl selection
//! over a closed set of types: a mapping type always classifies as
//! [`Node::Map`] and can never fall through to record treatment, and
//! records exist only for types that opted into [`Encodable`].

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::encodable::Encodable;
use crate::node::Node;

/// Classifies a value as a [`Node`] borrowing from it.
pub trait AsNode {
    /// The classified shape of this value.
    fn as_node(&self) -> Node<'_>;
}

// ── Leaves ────────────────────────────────────────────────────────────────

macro_rules! int_leaf {
    ($($ty:ty),*) => {$(
        impl AsNode for $ty {
            fn as_node(&self) -> Node<'_> {
                Node::Int(i64::from(*self))
            }
        }
    )*};
}

int_leaf!(i8, i16, i32, i64, u8, u16, u32);

impl AsNode for isize {
    fn as_node(&self) -> Node<'_> {
        Node::Int(*self as i64)
    }
}

impl AsNode for u64 {
    fn as_node(&self) -> Node<'_> {
        // Small unsigned values stay signed, matching how JSON numbers
        // read back; only the upper half needs the unsigned variant.
        match i64::try_from(*self) {
            Ok(i) => Node::Int(i),
            Err(_) => Node::UInt(*self),
        }
    }
}

impl AsNode for usize {
    fn as_node(&self) -> Node<'_> {
        let value = *self as u64;
        match i64::try_from(value) {
            Ok(i) => Node::Int(i),
            Err(_) => Node::UInt(value),
        }
    }
}

impl AsNode for f32 {
    fn as_node(&self) -> Node<'_> {
        Node::Float(f64::from(*self))
    }
}

impl AsNode for f64 {
    fn as_node(&self) -> Node<'_> {
        Node::Float(*self)
    }
}

impl AsNode for bool {
    fn as_node(&self) -> Node<'_> {
        Node::Bool(*self)
    }
}

impl AsNode for char {
    fn as_node(&self) -> Node<'_> {
        Node::Str(Cow::Owned(self.to_string()))
    }
}

impl AsNode for str {
    fn as_node(&self) -> Node<'_> {
        Node::Str(Cow::Borrowed(self))
    }
}

impl AsNode for String {
    fn as_node(&self) -> Node<'_> {
        Node::Str(Cow::Borrowed(self.as_str()))
    }
}

impl AsNode for Cow<'_, str> {
    fn as_node(&self) -> Node<'_> {
        Node::Str(Cow::Borrowed(self.as_ref()))
    }
}

// ── Null ──────────────────────────────────────────────────────────────────

impl<T: AsNode> AsNode for Option<T> {
    fn as_node(&self) -> Node<'_> {
        match self {
            Some(value) => value.as_node(),
            None => Node::Null,
        }
    }
}

// ── Sequences ─────────────────────────────────────────────────────────────

impl<T: AsNode> AsNode for [T] {
    fn as_node(&self) -> Node<'_> {
        Node::Seq(self.iter().map(AsNode::as_node).collect())
    }
}

impl<T: AsNode> AsNode for Vec<T> {
    fn as_node(&self) -> Node<'_> {
        self.as_slice().as_node()
    }
}

impl<T: AsNode, const N: usize> AsNode for [T; N] {
    fn as_node(&self) -> Node<'_> {
        self.as_slice().as_node()
    }
}

impl<T: AsNode, S> AsNode for HashSet<T, S> {
    fn as_node(&self) -> Node<'_> {
        Node::Seq(self.iter().map(AsNode::as_node).collect())
    }
}

impl<T: AsNode> AsNode for BTreeSet<T> {
    fn as_node(&self) -> Node<'_> {
        Node::Seq(self.iter().map(AsNode::as_node).collect())
    }
}

// ── Mappings ──────────────────────────────────────────────────────────────

impl<K: AsNode, V: AsNode, S> AsNode for HashMap<K, V, S> {
    fn as_node(&self) -> Node<'_> {
        Node::Map(
            self.iter()
                .map(|(k, v)| (k.as_node(), v.as_node()))
                .collect(),
        )
    }
}

impl<K: AsNode, V: AsNode> AsNode for BTreeMap<K, V> {
    fn as_node(&self) -> Node<'_> {
        Node::Map(
            self.iter()
                .map(|(k, v)| (k.as_node(), v.as_node()))
                .collect(),
        )
    }
}

impl<K: AsNode, V: AsNode, S> AsNode for IndexMap<K, V, S> {
    fn as_node(&self) -> Node<'_> {
        Node::Map(
            self.iter()
                .map(|(k, v)| (k.as_node(), v.as_node()))
                .collect(),
        )
    }
}

// ── Indirection ───────────────────────────────────────────────────────────

impl<T: AsNode + ?Sized> AsNode for &T {
    fn as_node(&self) -> Node<'_> {
        (**self).as_node()
    }
}

impl<T: AsNode + ?Sized> AsNode for Box<T> {
    fn as_node(&self) -> Node<'_> {
        (**self).as_node()
    }
}

impl<T: AsNode + ?Sized> AsNode for Rc<T> {
    fn as_node(&self) -> Node<'_> {
        (**self).as_node()
    }
}

impl<T: AsNode + ?Sized> AsNode for Arc<T> {
    fn as_node(&self) -> Node<'_> {
        (**self).as_node()
    }
}

impl<'a> AsNode for dyn Encodable + 'a {
    fn as_node(&self) -> Node<'_> {
        Node::Record(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_classify_as_int_leaves() {
        assert!(matches!(7_i32.as_node(), Node::Int(7)));
        assert!(matches!((-3_i64).as_node(), Node::Int(-3)));
        assert!(matches!(255_u8.as_node(), Node::Int(255)));
    }

    #[test]
    fn u64_splits_on_i64_range() {
        assert!(matches!(5_u64.as_node(), Node::Int(5)));
        assert!(matches!(u64::MAX.as_node(), Node::UInt(u64::MAX)));
    }

    #[test]
    fn text_classifies_as_str_leaf() {
        assert!(matches!("hi".as_node(), Node::Str(_)));
        assert!(matches!(String::from("hi").as_node(), Node::Str(_)));
        let c = 'q'.as_node();
        assert!(matches!(&c, Node::Str(s) if s == "q"));
    }

    #[test]
    fn option_classifies_as_null_or_inner() {
        assert!(matches!(None::<i64>.as_node(), Node::Null));
        assert!(matches!(Some(4_i64).as_node(), Node::Int(4)));
    }

    #[test]
    fn containers_classify_by_kind() {
        let seq = vec![1_i64, 2];
        assert!(matches!(seq.as_node(), Node::Seq(items) if items.len() == 2));

        let map: BTreeMap<i64, &str> = [(1, "a")].into();
        assert!(matches!(map.as_node(), Node::Map(entries) if entries.len() == 1));

        let set: BTreeSet<i64> = [3, 1, 2].into();
        // BTreeSet iterates sorted; order must be preserved as yielded.
        match set.as_node() {
            Node::Seq(items) => {
                assert!(matches!(items[0], Node::Int(1)));
                assert!(matches!(items[2], Node::Int(3)));
            }
            other => panic!("expected Seq, got {other:?}"),
        }
    }

    #[test]
    fn indirection_is_transparent() {
        let boxed: Box<i64> = Box::new(9);
        assert!(matches!(boxed.as_node(), Node::Int(9)));
        let rc = Rc::new(vec![true]);
        assert!(matches!(rc.as_node(), Node::Seq(_)));
    }
}
