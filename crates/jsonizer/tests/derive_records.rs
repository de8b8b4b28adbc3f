use jsonizer::{encode, EncodeError, Symbolic as _, LINEAGE_FIELD};
use jsonizer_derive::Encodable;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Debug, Encodable)]
struct Base {
    x: i64,
}

#[derive(Debug, Encodable)]
enum Mode {
    Fast,
    Thorough,
}

#[derive(Debug, Encodable)]
struct Derived {
    #[encodable(base)]
    base: Base,
    y: String,
    mode: Mode,
}

#[test]
fn two_level_hierarchy_encodes_fields_and_lineage() {
    let value = Derived {
        base: Base { x: 3 },
        y: "hi".to_owned(),
        mode: Mode::Fast,
    };
    let doc = encode(&value).unwrap();

    assert_eq!(
        doc,
        json!({
            "x": 3,
            "y": "hi",
            "mode": "Fast",
            "javaClasses": ["derive_records::Derived", "derive_records::Base"],
        })
    );

    // Object equality ignores member order, so discovery order gets its
    // own assertion: base fields at the base's declaration position, the
    // lineage field always last.
    let keys: Vec<&str> = doc
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["x", "y", "mode", LINEAGE_FIELD]);
}

#[derive(Debug, Encodable)]
struct Mid {
    #[encodable(base)]
    base: Base,
    m: bool,
}

#[derive(Debug, Encodable)]
struct Top {
    #[encodable(base)]
    base: Mid,
    t: i8,
}

#[test]
fn three_level_lineage_is_most_specific_first() {
    let value = Top {
        base: Mid {
            base: Base { x: 9 },
            m: true,
        },
        t: -1,
    };
    let doc = encode(&value).unwrap();

    assert_eq!(
        doc[LINEAGE_FIELD],
        json!(["derive_records::Top", "derive_records::Mid", "derive_records::Base"])
    );
    let keys: Vec<&str> = doc
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["x", "m", "t", LINEAGE_FIELD]);
}

#[derive(Debug, Encodable)]
struct WithExtras {
    note: Option<String>,
    #[encodable(skip)]
    cached_digest: u64,
}

#[test]
fn none_field_encodes_as_explicit_null() {
    let doc = encode(&WithExtras {
        note: None,
        cached_digest: 123,
    })
    .unwrap();
    assert_eq!(
        doc,
        json!({"note": null, "javaClasses": ["derive_records::WithExtras"]})
    );
    // Present, not omitted.
    assert!(doc.as_object().unwrap().contains_key("note"));
}

#[test]
fn skipped_fields_never_reach_the_document() {
    let doc = encode(&WithExtras {
        note: Some("kept".to_owned()),
        cached_digest: 123,
    })
    .unwrap();
    assert!(!doc.as_object().unwrap().contains_key("cached_digest"));
}

#[derive(Debug, Encodable)]
struct Marker;

#[test]
fn fieldless_record_is_lineage_only() {
    assert_eq!(
        encode(&Marker).unwrap(),
        json!({"javaClasses": ["derive_records::Marker"]})
    );
}

#[test]
fn records_nest_inside_records_and_containers() {
    #[derive(Debug, Encodable)]
    struct Holder {
        inner: Base,
        all: Vec<Base>,
    }

    let doc = encode(&Holder {
        inner: Base { x: 1 },
        all: vec![Base { x: 2 }, Base { x: 3 }],
    })
    .unwrap();

    assert_eq!(
        doc,
        json!({
            "inner": {"x": 1, "javaClasses": ["derive_records::Base"]},
            "all": [
                {"x": 2, "javaClasses": ["derive_records::Base"]},
                {"x": 3, "javaClasses": ["derive_records::Base"]},
            ],
            "javaClasses": ["derive_records::Holder"],
        })
    );
}

#[test]
fn heterogeneous_record_sequences_encode_via_the_trait_object() {
    let items: Vec<Box<dyn jsonizer::Encodable>> = vec![Box::new(Base { x: 4 }), Box::new(Marker)];
    assert_eq!(
        encode(&items).unwrap(),
        json!([
            {"x": 4, "javaClasses": ["derive_records::Base"]},
            {"javaClasses": ["derive_records::Marker"]},
        ])
    );
}

#[test]
fn symbol_names_come_from_the_variant() {
    assert_eq!(Mode::Fast.symbol(), "Fast");
    assert_eq!(Mode::Thorough.symbol(), "Thorough");
    assert_eq!(encode(&Mode::Thorough).unwrap(), json!("Thorough"));
}

#[derive(Debug, Encodable)]
struct ShadowingDerived {
    #[encodable(base)]
    base: Base,
    x: i64,
}

#[test]
fn field_redeclared_at_another_level_is_rejected() {
    let result = encode(&ShadowingDerived {
        base: Base { x: 1 },
        x: 2,
    });
    assert_eq!(
        result,
        Err(EncodeError::DuplicateField {
            type_name: "derive_records::ShadowingDerived",
            field: "x",
        })
    );
}

#[test]
fn re_encoding_an_unmutated_value_is_identical() {
    let value = Top {
        base: Mid {
            base: Base { x: 9 },
            m: false,
        },
        t: 7,
    };
    let first = serde_json::to_string(&encode(&value).unwrap()).unwrap();
    let second = serde_json::to_string(&encode(&value).unwrap()).unwrap();
    assert_eq!(first, second);
}
