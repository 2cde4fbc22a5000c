use super::*;
use oinf_value::ObjectValue;
use pretty_assertions::assert_eq;

fn strings(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}

#[test]
fn test_primitive_names_go_to_types() {
    let buckets = classify(&ExpectedSet::from(["string", "number", "symbol", "bigint"]));
    assert_eq!(strings(&buckets.types), ["string", "number", "symbol", "bigint"]);
    assert!(buckets.instances.is_empty());
    assert!(buckets.other.is_empty());
}

#[test]
fn test_capitalized_alternates_are_lowercased() {
    let buckets = classify(&ExpectedSet::from(["Function", "Object"]));
    assert_eq!(strings(&buckets.types), ["function", "object"]);
    assert!(buckets.instances.is_empty());
}

#[test]
fn test_class_names_go_to_instances() {
    let buckets = classify(&ExpectedSet::from(["Buffer", "FooBar", "URL2"]));
    assert_eq!(strings(&buckets.instances), ["Buffer", "FooBar", "URL2"]);
    assert!(buckets.types.is_empty());
}

#[test]
fn test_everything_else_goes_to_other() {
    let buckets = classify(&ExpectedSet::from(["null", "a valid URL", "foo_bar", "Foo-Bar", ""]));
    assert_eq!(
        strings(&buckets.other),
        ["null", "a valid URL", "foo_bar", "Foo-Bar", ""]
    );
}

#[test]
fn test_non_ascii_class_names_are_other() {
    let buckets = classify(&ExpectedSet::from(["Ärger"]));
    assert!(buckets.instances.is_empty());
    assert_eq!(strings(&buckets.other), ["Ärger"]);
}

#[test]
fn test_object_merges_into_instances() {
    let buckets = classify(&ExpectedSet::from(["object", "Foo", "string"]));
    assert_eq!(strings(&buckets.types), ["string"]);
    assert_eq!(strings(&buckets.instances), ["Foo", "Object"]);
}

#[test]
fn test_object_alone_stays_a_type() {
    let buckets = classify(&ExpectedSet::from(["object", "null"]));
    assert_eq!(strings(&buckets.types), ["object"]);
    assert!(buckets.instances.is_empty());
}

#[test]
fn test_single_token_normalizes_to_one_entry() {
    let set = ExpectedSet::from("string");
    assert_eq!(set.len(), 1);
    assert_eq!(set.entries(), ["string".to_string()]);
}

#[test]
fn test_from_value_accepts_string_arrays() {
    let value = Value::array(vec![Value::string("string"), Value::string("Foo")]);
    let set = ExpectedSet::from_value(&value);
    assert_eq!(set, Ok(ExpectedSet::from(["string", "Foo"])));
}

#[test]
fn test_from_value_rejects_non_string_entries() {
    let value = Value::array(vec![Value::string("string"), Value::from(42)]);
    assert_eq!(
        ExpectedSet::from_value(&value),
        Err(InvariantViolation::NonStringDescriptor {
            index: 1,
            type_of: "number"
        })
    );
}

#[test]
fn test_from_value_coerces_scalars() {
    assert_eq!(
        ExpectedSet::from_value(&Value::string("number")),
        Ok(ExpectedSet::from("number"))
    );
    assert_eq!(
        ExpectedSet::from_value(&Value::Null),
        Ok(ExpectedSet::from("null"))
    );
    assert_eq!(
        ExpectedSet::from_value(&Value::plain_object()),
        Ok(ExpectedSet::from("[object Object]"))
    );
    assert_eq!(
        ExpectedSet::from_value(&Value::object(ObjectValue::instance_of("Foo"))),
        Ok(ExpectedSet::from("[object Object]"))
    );
}

#[test]
fn test_empty_set_classifies_to_empty_buckets() {
    assert!(classify(&ExpectedSet::default()).is_empty());
}
