//! The recursive encoder — [`Node`] in, [`serde_json::Value`] out.
//!
//! One call fully materializes one document. The walk is a pure function
//! of the input graph; the only side effect is `tracing` diagnostics, one
//! per visited record. Recursion depth equals the source graph's depth.

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::as_node::AsNode;
use crate::encodable::Encodable;
use crate::error::EncodeError;
use crate::node::Node;

/// Reserved record field carrying the type lineage, most specific first.
pub const LINEAGE_FIELD: &str = "javaClasses";

/// Field name of the parallel key array in an encoded mapping.
pub const KEYS_FIELD: &str = "keys";

/// Field name of the parallel value array in an encoded mapping.
pub const VALUES_FIELD: &str = "values";

/// Encodes one root value into a JSON document.
///
/// # Errors
///
/// Fails on a duplicate or reserved record field name and on non-finite
/// floats; any failure aborts the whole document.
pub fn encode<T: AsNode + ?Sized>(value: &T) -> Result<Value, EncodeError> {
    encode_node(&value.as_node())
}

/// Encodes an already-classified node.
pub fn encode_node(node: &Node<'_>) -> Result<Value, EncodeError> {
    match node {
        Node::Null => Ok(Value::Null),
        Node::Bool(b) => Ok(Value::Bool(*b)),
        Node::Int(i) => Ok(Value::from(*i)),
        Node::UInt(u) => Ok(Value::from(*u)),
        Node::Float(x) => Number::from_f64(*x)
            .map(Value::Number)
            .ok_or(EncodeError::NonFiniteNumber(*x)),
        Node::Str(s) => Ok(Value::String(s.as_ref().to_owned())),
        Node::Symbol(name) => Ok(Value::String((*name).to_owned())),
        Node::Seq(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                array.push(encode_node(item)?);
            }
            Ok(Value::Array(array))
        }
        // Mapping keys are arbitrary nodes, so the entries go into two
        // index-aligned arrays instead of a JSON object keyed by a lossy
        // string coercion.
        Node::Map(entries) => {
            let mut keys = Vec::with_capacity(entries.len());
            let mut values = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                keys.push(encode_node(key)?);
                values.push(encode_node(value)?);
            }
            let mut object = Map::with_capacity(2);
            object.insert(KEYS_FIELD.to_owned(), Value::Array(keys));
            object.insert(VALUES_FIELD.to_owned(), Value::Array(values));
            Ok(Value::Object(object))
        }
        Node::Record(record) => encode_record(*record),
    }
}

fn encode_record(record: &dyn Encodable) -> Result<Value, EncodeError> {
    let lineage = record.lineage();
    let type_name = lineage.first().copied().unwrap_or("<anonymous>");
    let fields = record.fields();
    trace!(record = type_name, fields = fields.len(), "encoding record");

    let mut object = Map::with_capacity(fields.len() + 1);
    for field in &fields {
        if field.name == LINEAGE_FIELD {
            return Err(EncodeError::ReservedField {
                type_name,
                field: field.name,
            });
        }
        let encoded = encode_node(&field.value)?;
        if object.insert(field.name.to_owned(), encoded).is_some() {
            return Err(EncodeError::DuplicateField {
                type_name,
                field: field.name,
            });
        }
    }
    object.insert(
        LINEAGE_FIELD.to_owned(),
        Value::Array(
            lineage
                .into_iter()
                .map(|name| Value::String(name.to_owned()))
                .collect(),
        ),
    );
    Ok(Value::Object(object))
}
