//! Integration tests for the accessor layer.
//!
//! These exercise the public surface end to end: construction from decoded
//! JSON, both container accessor layers, and the error taxonomy callers
//! rely on to tell "absent" apart from "wrong type".

use pretty_assertions::assert_eq;
use satchel_value::{json, SMap, Slice, Value};

fn heterogeneous_slice() -> Slice {
    // Slice{0, "x", true, Slice{1, 2}}
    Slice::from_vec(vec![
        Value::integer(0),
        Value::text("x"),
        Value::boolean(true),
        Value::from(Slice::from_vec(vec![Value::integer(1), Value::integer(2)])),
    ])
}

fn keyed_map() -> SMap {
    // SMap{"a": 0, "b": SMap{"c": 1}}
    let nested: SMap = [("c".to_string(), Value::integer(1))].into_iter().collect();
    [
        ("a".to_string(), Value::integer(0)),
        ("b".to_string(), Value::from(nested)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn slice_scenario() {
    let s = heterogeneous_slice();

    assert_eq!(s.bool(0).unwrap(), false);
    assert_eq!(s.bool(1).unwrap(), true);
    assert!(s.is_bool(2));
    assert!(s.is_slice(3));

    let nested = s.slice(3).unwrap();
    assert_eq!(nested.len(), 2);
    assert_eq!(nested.int(0).unwrap(), 1);
    assert_eq!(nested.int(1).unwrap(), 2);

    let err = s.bool(10).unwrap_err();
    assert!(err.is_absent());
}

#[test]
fn smap_scenario() {
    let m = keyed_map();

    assert!(m.is_smap("b"));
    assert_eq!(m.bool("a").unwrap(), false);

    let err = m.slice("a").unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(!err.is_absent());

    let err = m.bool("z").unwrap_err();
    assert!(err.is_absent());
    assert!(!err.is_type_mismatch());
}

#[test]
fn same_scenarios_through_json_construction() {
    // the constructor path: already-decoded JSON converts totally
    let s = Value::from(json!([0, "x", true, [1, 2]]))
        .to_slice()
        .unwrap();
    assert_eq!(s.bool(0).unwrap(), false);
    assert_eq!(s.bool(1).unwrap(), true);
    assert!(s.is_bool(2));
    assert!(s.is_slice(3));
    assert_eq!(s.slice(3).unwrap().len(), 2);

    let m = Value::from(json!({"a": 0, "b": {"c": 1}}))
        .to_smap()
        .unwrap();
    assert!(m.is_smap("b"));
    assert_eq!(m.smap("b").unwrap().int("c").unwrap(), 1);
}

#[test]
fn absence_and_mismatch_stay_distinguishable() {
    let s = heterogeneous_slice();

    // same accessor, two different failure kinds
    let absent = s.smap(99).unwrap_err();
    let mismatch = s.smap(0).unwrap_err();

    assert!(absent.is_absent());
    assert!(mismatch.is_type_mismatch());
    assert_ne!(absent.code(), mismatch.code());
}

#[test]
fn strict_bool_implies_literal_bool() {
    let s = heterogeneous_slice();

    // is_bool(2) == true: bool(2) must return the stored literal
    assert!(s.is_bool(2));
    assert_eq!(s.bool(2).unwrap(), true);

    // is_bool(0) == false does not preclude bool(0) succeeding
    assert!(!s.is_bool(0));
    assert!(s.bool(0).is_ok());
}

#[test]
fn empty_collections_are_falsy() {
    let s = Slice::from_vec(vec![
        Value::slice_empty(),
        Value::smap_empty(),
        Value::from(Slice::from_vec(vec![Value::integer(1)])),
    ]);

    assert_eq!(s.bool(0).unwrap(), false);
    assert_eq!(s.bool(1).unwrap(), false);
    assert_eq!(s.bool(2).unwrap(), true);
}

#[test]
fn accessors_are_idempotent() {
    let s = heterogeneous_slice();
    let m = keyed_map();

    for _ in 0..3 {
        assert_eq!(s.bool(0).unwrap(), false);
        assert_eq!(s.text(1).unwrap(), "x");
        assert_eq!(s.slice(3).unwrap().len(), 2);
        assert_eq!(m.bool("a").unwrap(), false);
        assert_eq!(m.smap("b").unwrap().len(), 1);
        assert!(m.bool("z").is_err());
    }
}

#[test]
fn readers_survive_owner_mutation() {
    let original = heterogeneous_slice();
    let reader = original.clone();

    let _mutated = original.push(Value::text("extra"));
    let _mutated = original.set(0, Value::text("swapped")).unwrap();

    // persistent store: the reader's copy is untouched
    assert_eq!(reader.int(0).unwrap(), 0);
    assert_eq!(reader.len(), 4);
}
