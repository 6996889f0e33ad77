/// Path navigation and typed getter tests.
///
/// Covers the fail-fast walk of `get`, the absent-vs-null distinction, error
/// precedence in the typed getters and the all-or-nothing typed array getters.
use jason_core::{Document, JasonError, Kind};

fn person() -> Document {
    r#"{"name":"anton","age":29,"nothing":null,"list":["first","second"],"address":{"street":"Street 42","city":"Stockholm"}}"#
        .parse()
        .unwrap()
}

fn assert_key_not_found(err: JasonError, key: &str, found: Kind) {
    match err {
        JasonError::KeyNotFound { key: k, found: f } => {
            assert_eq!(k, key, "wrong missing key");
            assert_eq!(f, found, "wrong parent kind");
        }
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn get_name_as_string() {
    let d = person();
    assert_eq!(d.root().get(["name"]).unwrap().as_string().unwrap(), "anton");
}

#[test]
fn get_age_as_number() {
    let d = person();
    assert_eq!(d.root().get(["age"]).unwrap().as_number().unwrap(), 29.0);
}

#[test]
fn present_null_is_null() {
    let d = person();
    let nothing = d.root().get(["nothing"]).unwrap();
    assert!(nothing.is_null());
    assert!(d.root().contains(["nothing"]));
}

#[test]
fn absent_key_does_not_exist() {
    let d = person();
    assert!(!d.root().contains(["missing"]));
    assert_key_not_found(
        d.root().get(["missing"]).unwrap_err(),
        "missing",
        Kind::Object,
    );
}

#[test]
fn absent_key_is_not_null() {
    let d = person();
    let err = d.root().get_null(["missing"]).unwrap_err();
    assert!(err.is_key_not_found());
    assert!(d.root().get_null(["nothing"]).is_ok());
}

#[test]
fn nested_street() {
    let d = person();
    let street = d.root().get(["address", "street"]).unwrap();
    assert_eq!(street.as_string().unwrap(), "Street 42");
}

#[test]
fn nested_missing_key() {
    let d = person();
    assert_key_not_found(
        d.root().get(["address", "missing"]).unwrap_err(),
        "missing",
        Kind::Object,
    );
}

#[test]
fn list_as_array() {
    let d = person();
    let list = d.root().get(["list"]).unwrap().as_array().unwrap();
    let items: Vec<&str> = list.iter().map(|v| v.as_string().unwrap()).collect();
    assert_eq!(items, ["first", "second"]);
}

// ============================================================================
// Walk semantics
// ============================================================================

#[test]
fn empty_path_returns_receiver() {
    let d = person();
    let root = d.root();
    let no_keys: [&str; 0] = [];
    let same = root.get(no_keys).unwrap();
    assert_eq!(same, root);
    assert!(std::ptr::eq(same.as_json(), root.as_json()));
}

#[test]
fn path_decomposes() {
    let d = person();
    let whole = d.root().get(["address", "city"]).unwrap();
    let stepwise = d.root().get(["address"]).unwrap().get(["city"]).unwrap();
    assert_eq!(whole, stepwise);
    assert!(std::ptr::eq(whole.as_json(), stepwise.as_json()));
}

#[test]
fn equal_content_at_different_keys_are_different_nodes() {
    let d: Document = r#"{"a":1,"b":1}"#.parse().unwrap();
    let a = d.root().get(["a"]).unwrap();
    let b = d.root().get(["b"]).unwrap();
    assert_eq!(a, b, "views compare by content");
    assert!(!std::ptr::eq(a.as_json(), b.as_json()));
    assert!(std::ptr::eq(
        a.as_json(),
        d.root().get(["a"]).unwrap().as_json()
    ));
}

#[test]
fn get_accepts_owned_keys() {
    let d = person();
    let path: Vec<String> = vec!["address".into(), "city".into()];
    assert_eq!(d.root().get_string(&path).unwrap(), "Stockholm");
}

#[test]
fn walking_into_a_string_fails() {
    let d = person();
    assert_key_not_found(
        d.root().get(["name", "first"]).unwrap_err(),
        "first",
        Kind::String,
    );
}

#[test]
fn walking_into_null_fails() {
    let d = person();
    assert_key_not_found(
        d.root().get(["nothing", "x"]).unwrap_err(),
        "x",
        Kind::Null,
    );
}

#[test]
fn arrays_are_not_indexable_by_path() {
    let d = person();
    assert_key_not_found(d.root().get(["list", "0"]).unwrap_err(), "0", Kind::Array);
}

#[test]
fn walk_stops_at_first_missing_segment() {
    let d = person();
    // "c" would also be missing; the reported key must be the first miss.
    assert_key_not_found(
        d.root().get(["address", "zip", "c"]).unwrap_err(),
        "zip",
        Kind::Object,
    );
}

#[test]
fn key_not_found_message() {
    let d = person();
    let err = d.root().get(["address", "zip"]).unwrap_err();
    assert_eq!(err.to_string(), r#"key "zip" not found in object"#);
}

#[test]
fn empty_string_key_is_a_real_key() {
    let d: Document = r#"{"":{"":1}}"#.parse().unwrap();
    assert_eq!(d.root().get_number(["", ""]).unwrap(), 1.0);
}

// ============================================================================
// Typed getters
// ============================================================================

#[test]
fn typed_getters_on_matching_kinds() {
    let d: Document = r#"{"s":"x","n":1.5,"b":true,"z":null,"a":[1],"o":{"k":1}}"#
        .parse()
        .unwrap();
    let root = d.root();
    assert_eq!(root.get_string(["s"]).unwrap(), "x");
    assert_eq!(root.get_number(["n"]).unwrap(), 1.5);
    assert!(root.get_boolean(["b"]).unwrap());
    assert!(root.get_null(["z"]).is_ok());
    assert_eq!(root.get_array(["a"]).unwrap().len(), 1);
    assert!(root.get_object(["o"]).unwrap().contains_key("k"));
}

#[test]
fn path_error_takes_precedence_over_type_error() {
    let d = person();
    let err = d.root().get_number(["address", "missing"]).unwrap_err();
    assert!(err.is_key_not_found(), "got {err:?}");
}

#[test]
fn typed_getter_reports_type_mismatch_on_resolved_path() {
    let d = person();
    match d.root().get_number(["name"]).unwrap_err() {
        JasonError::TypeMismatch { expected, found } => {
            assert_eq!(expected, Kind::Number);
            assert_eq!(found, Kind::String);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn get_object_on_array_fails() {
    let d = person();
    assert!(d.root().get_object(["list"]).unwrap_err().is_type_mismatch());
}

// ============================================================================
// Typed array getters
// ============================================================================

#[test]
fn string_array() {
    let d = person();
    assert_eq!(
        d.root().get_string_array(["list"]).unwrap(),
        ["first", "second"]
    );
}

#[test]
fn number_array() {
    let d: Document = r#"{"xs":[1,2.5,-3]}"#.parse().unwrap();
    assert_eq!(d.root().get_number_array(["xs"]).unwrap(), [1.0, 2.5, -3.0]);
}

#[test]
fn boolean_array() {
    let d: Document = r#"{"flags":[true,false]}"#.parse().unwrap();
    assert_eq!(d.root().get_boolean_array(["flags"]).unwrap(), [true, false]);
}

#[test]
fn object_array() {
    let d: Document = r#"{"people":[{"name":"a"},{"name":"b"}]}"#.parse().unwrap();
    let people = d.root().get_object_array(["people"]).unwrap();
    let names: Vec<&str> = people
        .iter()
        .map(|p| p.get_string(["name"]).unwrap())
        .collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn empty_typed_array() {
    let d: Document = r#"{"xs":[]}"#.parse().unwrap();
    assert!(d.root().get_number_array(["xs"]).unwrap().is_empty());
}

#[test]
fn typed_array_fails_whole_on_bad_element() {
    let d: Document = r#"{"xs":[1,2,"three",4,"five"]}"#.parse().unwrap();
    match d.root().get_number_array(["xs"]).unwrap_err() {
        JasonError::ElementMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 2, "first offending element is reported");
            assert_eq!(expected, Kind::Number);
            assert_eq!(found, Kind::String);
        }
        other => panic!("expected ElementMismatch, got {other:?}"),
    }
}

#[test]
fn typed_array_on_non_array() {
    let d = person();
    let err = d.root().get_string_array(["name"]).unwrap_err();
    assert!(matches!(
        err,
        JasonError::TypeMismatch {
            expected: Kind::Array,
            found: Kind::String
        }
    ));
}

#[test]
fn typed_array_on_missing_path() {
    let d = person();
    let err = d.root().get_boolean_array(["flags"]).unwrap_err();
    assert!(err.is_key_not_found());
}

#[test]
fn element_mismatch_message() {
    let d: Document = r#"{"xs":[true,null]}"#.parse().unwrap();
    let err = d.root().get_boolean_array(["xs"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch at index 1: expected boolean, found null"
    );
    assert!(err.is_type_mismatch());
}
