use thiserror::Error;

/// Failures of one encode call.
///
/// Any failure anywhere in the recursive walk aborts the whole document
/// for that root value; partial documents are never returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// The same field name was discovered at two embedding levels of a
    /// record. Rejected rather than letting the later level silently
    /// overwrite the earlier one.
    #[error("duplicate field `{field}` on `{type_name}`")]
    DuplicateField {
        type_name: &'static str,
        field: &'static str,
    },

    /// A record declared a field that would collide with the synthesized
    /// lineage field.
    #[error("field `{field}` on `{type_name}` collides with the reserved lineage field")]
    ReservedField {
        type_name: &'static str,
        field: &'static str,
    },

    /// NaN or infinity reached the encoder; JSON has no representation
    /// for either.
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}
