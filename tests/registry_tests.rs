//! Registration semantics: order independence, the constructor argument
//! contract, the error taxonomy, and adapter purity.

use glambind::codec;
use glambind::types::{self, VEC3};
use glambind::{load_types, BindError, Operator, Record, Registry, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn reversed_registry() -> Registry {
    let mut descriptors = types::standard_types();
    descriptors.reverse();
    let mut registry = Registry::new();
    registry.register_all(descriptors);
    registry
}

#[test]
fn test_registration_is_order_independent() {
    let forward = load_types();
    let reverse = reversed_registry();

    assert_eq!(forward.type_names(), reverse.type_names());

    for name in forward.type_names() {
        let a = forward.instance(name).unwrap();
        let b = reverse.instance(name).unwrap();
        assert_eq!(a.operator_symbols(), b.operator_symbols(), "type {}", name);
        assert_eq!(a.method_names(), b.method_names(), "type {}", name);

        assert_eq!(
            forward.statics(name).unwrap().function_names(),
            reverse.statics(name).unwrap().function_names(),
            "type {}",
            name
        );
    }

    // behaviorally identical, not just structurally
    for registry in [&forward, &reverse] {
        let v1 = registry
            .construct("vec3", &[num(1.0), num(2.0), num(3.0)])
            .unwrap();
        let v2 = registry
            .construct("vec3", &[num(4.0), num(5.0), num(6.0)])
            .unwrap();
        let sum = registry.call_operator(Operator::Add, &v1, &v2).unwrap();
        assert_eq!(codec::decode(VEC3, &sum).unwrap(), vec![5.0, 7.0, 9.0]);
    }
}

#[test]
fn test_omitted_constructor_arguments_default() {
    let registry = load_types();

    let v = registry.construct("vec3", &[num(1.0)]).unwrap();
    assert_eq!(codec::decode(VEC3, &v).unwrap(), vec![1.0, 0.0, 0.0]);

    let zero = registry.construct("vec3", &[]).unwrap();
    assert_eq!(codec::decode(VEC3, &zero).unwrap(), vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_nil_constructor_argument_keeps_the_default() {
    let registry = load_types();

    let v = registry
        .construct("vec3", &[Value::Nil, num(2.0)])
        .unwrap();
    assert_eq!(codec::decode(VEC3, &v).unwrap(), vec![0.0, 2.0, 0.0]);

    let q = registry
        .construct("quat", &[num(0.5), Value::Nil, Value::Nil, Value::Nil])
        .unwrap();
    let record = q.as_record().unwrap();
    assert_eq!(record.get("w").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_quat_identity_default_with_three_components() {
    let registry = load_types();
    let q = registry
        .construct("quat", &[num(0.1), num(0.2), num(0.3)])
        .unwrap();

    assert_eq!(q.as_record().unwrap().get("w").unwrap().as_number(), Some(1.0));
}

#[test]
fn test_non_numeric_constructor_argument_is_rejected() {
    let registry = load_types();
    let stray = registry.construct("vec2", &[]).unwrap();

    let err = registry.construct("vec3", &[num(1.0), stray]).unwrap_err();
    assert!(matches!(err, BindError::TypeMismatch { .. }));
}

#[test]
fn test_excess_constructor_arguments_are_rejected() {
    let registry = load_types();

    let err = registry
        .construct("vec2", &[num(1.0), num(2.0), num(3.0)])
        .unwrap_err();
    assert_eq!(
        err,
        BindError::ArityMismatch {
            what: "vec2 constructor".to_string(),
            expected: 2,
            actual: 3,
        }
    );

    // the matrix constructor takes no arguments at all
    let err = registry.construct("mat4", &[num(1.0)]).unwrap_err();
    assert!(matches!(err, BindError::ArityMismatch { .. }));
}

#[test]
fn test_decode_never_defaults_missing_fields() {
    let registry = load_types();
    let v3 = registry
        .construct("vec3", &[num(1.0), num(2.0), num(3.0)])
        .unwrap();

    let mut two_fields = Record::new();
    two_fields.insert("x", num(4.0));
    two_fields.insert("y", num(5.0));

    let err = registry
        .call_operator(Operator::Add, &v3, &Value::Record(two_fields))
        .unwrap_err();
    assert!(matches!(err, BindError::TypeMismatch { .. }));
}

#[test]
fn test_decode_accepts_untagged_records_structurally() {
    let registry = load_types();
    let v3 = registry
        .construct("vec3", &[num(1.0), num(2.0), num(3.0)])
        .unwrap();

    let mut plain = Record::new();
    plain.insert("x", num(4.0));
    plain.insert("y", num(5.0));
    plain.insert("z", num(6.0));

    let sum = registry
        .call_operator(Operator::Add, &v3, &Value::Record(plain))
        .unwrap();
    assert_eq!(codec::decode(VEC3, &sum).unwrap(), vec![5.0, 7.0, 9.0]);
}

#[test]
fn test_unknown_dispatch_targets_error() {
    let registry = load_types();
    let v = registry.construct("vec2", &[]).unwrap();

    assert_eq!(
        registry.construct("vec7", &[]).unwrap_err(),
        BindError::UnknownType("vec7".to_string())
    );
    assert_eq!(
        registry.call_method(&v, "slerp_to", &[]).unwrap_err(),
        BindError::UnknownMethod {
            type_name: "vec2".to_string(),
            method: "slerp_to".to_string(),
        }
    );
    assert_eq!(
        registry.call_static("vec2", "from_matrix", &[]).unwrap_err(),
        BindError::UnknownStatic {
            type_name: "vec2".to_string(),
            name: "from_matrix".to_string(),
        }
    );

    let m = registry.construct("mat4", &[]).unwrap();
    assert_eq!(
        registry.call_operator(Operator::Add, &m, &m).unwrap_err(),
        BindError::UnknownOperator {
            type_name: "mat4".to_string(),
            operator: "+",
        }
    );
}

#[test]
fn test_method_arity_mismatch() {
    let registry = load_types();
    let v = registry.construct("vec2", &[num(1.0), num(2.0)]).unwrap();

    let err = registry.call_method(&v, "dot", &[]).unwrap_err();
    assert!(matches!(err, BindError::ArityMismatch { .. }));
}

#[test]
fn test_adapters_never_mutate_their_operands() {
    let registry = load_types();
    let v1 = registry
        .construct("vec3", &[num(1.0), num(2.0), num(3.0)])
        .unwrap();
    let v2 = registry
        .construct("vec3", &[num(4.0), num(5.0), num(6.0)])
        .unwrap();
    let before = (v1.clone(), v2.clone());

    registry.call_operator(Operator::Add, &v1, &v2).unwrap();
    registry.call_method(&v1, "cross", &[v2.clone()]).unwrap();
    registry.call_method(&v1, "normalize", &[]).unwrap();

    assert_eq!(v1, before.0);
    assert_eq!(v2, before.1);
}

#[test]
fn test_failed_calls_do_not_poison_the_registry() {
    let registry = load_types();
    let v = registry.construct("vec3", &[num(1.0), num(2.0), num(3.0)]).unwrap();

    assert!(registry.call_method(&v, "dot", &[num(1.0)]).is_err());
    assert!(registry.construct("vec3", &[v.clone()]).is_err());

    let sum = registry.call_operator(Operator::Add, &v, &v).unwrap();
    assert_eq!(codec::decode(VEC3, &sum).unwrap(), vec![2.0, 4.0, 6.0]);
}
