use tandem_engine::iteration::{IterationCursor, Member, Step};
use tandem_engine::{
    BridgeError, BridgeResult, BridgedValue, HostClass, HostObject, MemberKind, Value,
};
use tandem_sdk::SymbolTable;

fn record() -> BridgedValue {
    HostClass::builder("Record")
        .field("a", Value::Int(1))
        .field("b", Value::Int(2))
        .method("m", |_, _| Ok(Value::Null))
        .build()
        .instantiate()
        .into_bridged()
}

/// Object that lists its own properties directly
struct Listed;

impl HostObject for Listed {
    fn class_name(&self) -> &str {
        "Listed"
    }

    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        matches!(name, "z" | "y").then_some(MemberKind::Data)
    }

    fn get(&self, name: &str) -> BridgeResult<Value> {
        Ok(Value::String(name.to_uppercase()))
    }

    fn set(&self, _name: &str, _value: Value) -> BridgeResult<()> {
        Ok(())
    }

    fn call_method(&self, name: &str, _args: &[Value]) -> BridgeResult<Value> {
        Err(BridgeError::member_not_found("Listed", name))
    }

    fn own_properties(&self) -> Option<Vec<String>> {
        Some(vec!["z".to_string(), "y".to_string()])
    }

    fn keys(&self) -> Option<Vec<String>> {
        Some(vec!["ignored".to_string()])
    }
}

/// Object with no listing capability at all
struct Opaque;

impl HostObject for Opaque {
    fn class_name(&self) -> &str {
        "Opaque"
    }

    fn member_kind(&self, _name: &str) -> Option<MemberKind> {
        None
    }

    fn get(&self, _name: &str) -> BridgeResult<Value> {
        Ok(Value::Undefined)
    }

    fn set(&self, _name: &str, _value: Value) -> BridgeResult<()> {
        Ok(())
    }

    fn call_method(&self, name: &str, _args: &[Value]) -> BridgeResult<Value> {
        Err(BridgeError::member_not_found("Opaque", name))
    }
}

fn names(cursor: IterationCursor) -> Vec<String> {
    cursor
        .map(|member| member.unwrap().name().to_string())
        .collect()
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_keys_then_methods() {
    let cursor = IterationCursor::begin(&Value::Object(record()), false);
    assert_eq!(cursor.len(), 3);
    assert_eq!(names(cursor), vec!["a", "b", "m"]);
}

#[test]
fn test_own_properties_take_priority() {
    let cursor = IterationCursor::begin(&Value::Object(BridgedValue::new(Listed)), false);
    assert_eq!(names(cursor), vec!["z", "y"]);
}

#[test]
fn test_missing_capabilities_are_empty() {
    let cursor = IterationCursor::begin(&Value::Object(BridgedValue::new(Opaque)), false);
    assert!(cursor.is_empty());
    assert!(!cursor.has_next());
}

// ============================================================================
// Pair Tests
// ============================================================================

#[test]
fn test_pairs_carry_values() {
    let mut cursor = IterationCursor::begin(&Value::Object(BridgedValue::new(Listed)), false);

    match cursor.advance().unwrap() {
        Step::More(Member::Pair(name, value)) => {
            assert_eq!(name.as_str(), "z");
            assert_eq!(value, Value::String("Z".into()));
        }
        other => panic!("unexpected step: {:?}", other),
    }
}

#[test]
fn test_names_only_mode() {
    let mut cursor = IterationCursor::begin(&Value::Object(record()), true);
    assert!(matches!(cursor.advance().unwrap(), Step::More(Member::Name(_))));
}

#[test]
fn test_values_are_read_live() {
    let value = record();
    let mut cursor = IterationCursor::begin(&Value::Object(value.clone()), false);

    value.set("a", Value::Int(100)).unwrap();
    match cursor.advance().unwrap() {
        Step::More(Member::Pair(_, current)) => assert_eq!(current, Value::Int(100)),
        other => panic!("unexpected step: {:?}", other),
    }
}

#[test]
fn test_names_are_snapshotted() {
    let value = record();
    let cursor = IterationCursor::begin(&Value::Object(value.clone()), true);

    value.set("late", Value::Int(1)).unwrap();
    assert_eq!(names(cursor), vec!["a", "b", "m"]);
}

#[test]
fn test_names_are_interned() {
    let table = SymbolTable::new();
    let first = IterationCursor::begin_in(&table, &Value::Object(record()), true);
    let second = IterationCursor::begin_in(&table, &Value::Object(record()), true);

    let a1 = first.into_iter().next().unwrap().unwrap();
    let a2 = second.into_iter().next().unwrap().unwrap();
    assert!(a1.name().ptr_eq(a2.name()));
    assert_eq!(table.len(), 3);
}

// ============================================================================
// Termination Tests
// ============================================================================

#[test]
fn test_yields_exactly_member_count() {
    let mut cursor = IterationCursor::begin(&Value::Object(record()), false);
    let mut count = 0;
    while let Step::More(_) = cursor.advance().unwrap() {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_has_next_is_idempotent() {
    let cursor = IterationCursor::begin(&Value::Object(record()), false);
    for _ in 0..5 {
        assert!(cursor.has_next());
    }
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_done_repeats_after_exhaustion() {
    let mut cursor = IterationCursor::begin(&Value::Object(record()), true);
    for _ in 0..3 {
        cursor.advance().unwrap();
    }
    assert!(!cursor.has_next());
    for _ in 0..3 {
        assert_eq!(cursor.advance().unwrap(), Step::Done);
    }
    assert_eq!(cursor.position(), 3);
}
