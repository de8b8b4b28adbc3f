//! jsonizer — self-describing JSON encoding of arbitrary object graphs.
//!
//! # Overview
//!
//! This crate turns a runtime object graph into a JSON document without a
//! per-type hand-written encoder. A value is first classified into a closed
//! set of shapes ([`Node`]): null, a scalar leaf, a symbolic enum constant,
//! an ordered sequence, a keyed mapping, or a composite record. The encoder
//! then walks that shape recursively and materializes a
//! [`serde_json::Value`] with insertion-ordered objects.
//!
//! Composite types opt in through the [`Encodable`] capability, which hands
//! the encoder their ordered field descriptors and their type lineage. The
//! lineage is attached to every record object under the reserved
//! `javaClasses` field, most specific type first, so the produced document
//! describes its own provenance. `#[derive(Encodable)]` from the companion
//! `jsonizer-derive` crate generates both impls at type-definition time.
//!
//! # Example
//!
//! ```
//! use jsonizer::encode;
//! use serde_json::json;
//! use std::collections::BTreeMap;
//!
//! let doc = encode(&vec![1_i64, 2, 3]).unwrap();
//! assert_eq!(doc, json!([1, 2, 3]));
//!
//! // Mappings keep arbitrary key types by encoding into parallel arrays.
//! let hist: BTreeMap<i32, u32> = [(2, 341), (3, 129)].into();
//! let doc = encode(&hist).unwrap();
//! assert_eq!(doc, json!({"keys": [2, 3], "values": [341, 129]}));
//! ```

pub mod as_node;
pub mod encodable;
pub mod encode;
pub mod error;
pub mod node;

// Re-export the core public API
pub use as_node::AsNode;
pub use encodable::{Encodable, Field, Symbolic};
pub use encode::{encode, encode_node, KEYS_FIELD, LINEAGE_FIELD, VALUES_FIELD};
pub use error::EncodeError;
pub use node::Node;
