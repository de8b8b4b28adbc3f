//! [`Node`] — the classified shape of a source value.
//!
//! Every value handed to the encoder is first expressed as one of these
//! variants. The set is closed on purpose: the encoder pattern-matches on
//! it, and composite values enter only through the [`Encodable`] capability
//! instead of a structural fallback.

use std::borrow::Cow;
use std::fmt;

use crate::encodable::Encodable;

/// Classified source value, borrowing from the object graph it came from.
///
/// Leaves carry their scalar directly. Containers carry their children as
/// already-classified nodes in iteration order. A [`Node::Record`] stays
/// unexpanded until the encoder visits it, so field discovery happens at
/// most once per record per encode call.
#[derive(Clone)]
pub enum Node<'a> {
    /// Absent value. `Option::None` classifies here.
    Null,
    /// Boolean leaf.
    Bool(bool),
    /// Signed integer leaf.
    Int(i64),
    /// Unsigned integer leaf that does not fit in `i64`.
    UInt(u64),
    /// Floating-point leaf.
    Float(f64),
    /// Textual leaf.
    Str(Cow<'a, str>),
    /// Symbolic enumerated constant, encoded as its name.
    Symbol(&'static str),
    /// Ordered sequence of child nodes.
    Seq(Vec<Node<'a>>),
    /// Keyed entries in the mapping's iteration order. Keys are nodes,
    /// not strings, so non-textual keys survive encoding losslessly.
    Map(Vec<(Node<'a>, Node<'a>)>),
    /// Composite record, expanded through its [`Encodable`] impl.
    Record(&'a dyn Encodable),
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("Null"),
            Node::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Node::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Node::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            Node::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Node::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Node::Symbol(s) => f.debug_tuple("Symbol").field(s).finish(),
            Node::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Node::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Node::Record(rec) => f
                .debug_tuple("Record")
                .field(&rec.lineage().first().copied().unwrap_or("<anonymous>"))
                .finish(),
        }
    }
}

impl Node<'_> {
    /// Returns `true` for shapes with no children to traverse.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Null
                | Node::Bool(_)
                | Node::Int(_)
                | Node::UInt(_)
                | Node::Float(_)
                | Node::Str(_)
                | Node::Symbol(_)
        )
    }
}
