//! Type registry and dispatch.
//!
//! Each algebraic type is described by a declarative [`TypeDescriptor`];
//! registration materializes it into an [`InstanceNamespace`] (operators +
//! methods, shared by every value of the type via its tag) and a
//! [`StaticNamespace`] (constructor + type-level functions, published under
//! the type name). No type inherits another's namespace: operator and
//! method resolution is a single map lookup, never a chain walk.
//!
//! The registry is an explicit owned object. Embedding applications build
//! one (usually through [`crate::types::load_types`]), keep it alongside
//! their host environment, and drive every constructor, operator, method,
//! and static call through it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::adapter::Adapter;
use crate::error::{BindError, BindResult};
use crate::value::{Record, Value};

/// Infix operator tokens a type may bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Declarative description of one algebraic type. Descriptors are data:
/// built once, handed to [`Registry::register`], never mutated.
pub struct TypeDescriptor {
    pub name: &'static str,
    pub constructor: Adapter,
    pub operators: Vec<(Operator, Adapter)>,
    pub methods: Vec<(&'static str, Adapter)>,
    pub statics: Vec<(&'static str, Adapter)>,
}

/// Per-type operator and method tables, attached to every value of the
/// type as its dispatch tag.
pub struct InstanceNamespace {
    name: String,
    operators: HashMap<Operator, Adapter>,
    methods: HashMap<String, Adapter>,
}

impl InstanceNamespace {
    pub fn type_name(&self) -> &str {
        &self.name
    }

    pub fn operator(&self, op: Operator) -> Option<&Adapter> {
        self.operators.get(&op)
    }

    pub fn method(&self, name: &str) -> Option<&Adapter> {
        self.methods.get(name)
    }

    /// Bound operator symbols in deterministic sorted order.
    pub fn operator_symbols(&self) -> Vec<&'static str> {
        let mut symbols: Vec<&'static str> = self.operators.keys().map(Operator::symbol).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Method names in deterministic sorted order.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for InstanceNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceNamespace")
            .field("name", &self.name)
            .field("operators", &self.operator_symbols())
            .field("methods", &self.method_names())
            .finish()
    }
}

/// Per-type constructor and type-level function table.
pub struct StaticNamespace {
    name: String,
    constructor: Adapter,
    functions: HashMap<String, Adapter>,
}

impl StaticNamespace {
    pub fn constructor(&self) -> &Adapter {
        &self.constructor
    }

    pub fn function(&self, name: &str) -> Option<&Adapter> {
        self.functions.get(name)
    }

    /// Static function names in deterministic sorted order.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for StaticNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticNamespace")
            .field("name", &self.name)
            .field("functions", &self.function_names())
            .finish()
    }
}

struct RegisteredType {
    instance: Arc<InstanceNamespace>,
    statics: StaticNamespace,
}

/// The set of published types and the host-facing dispatch surface.
#[derive(Default)]
pub struct Registry {
    types: HashMap<String, RegisteredType>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Materializes the descriptor's namespaces and publishes them under
    /// its type name. Registration of one type never depends on another
    /// already being published; descriptors may be registered in any order.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        let TypeDescriptor {
            name,
            constructor,
            operators,
            methods,
            statics,
        } = descriptor;

        let instance = InstanceNamespace {
            name: name.to_string(),
            operators: operators.into_iter().collect(),
            methods: methods
                .into_iter()
                .map(|(method, adapter)| (method.to_string(), adapter))
                .collect(),
        };
        let statics = StaticNamespace {
            name: name.to_string(),
            constructor,
            functions: statics
                .into_iter()
                .map(|(func, adapter)| (func.to_string(), adapter))
                .collect(),
        };

        debug!(
            "registered type {} ({} operators, {} methods, {} statics)",
            name,
            instance.operators.len(),
            instance.methods.len(),
            statics.functions.len()
        );

        self.types.insert(
            name.to_string(),
            RegisteredType {
                instance: Arc::new(instance),
                statics,
            },
        );
    }

    pub fn register_all(&mut self, descriptors: impl IntoIterator<Item = TypeDescriptor>) {
        for descriptor in descriptors {
            self.register(descriptor);
        }
    }

    /// Registered type names in deterministic sorted order.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The instance namespace published under `name`, used by the codec to
    /// tag freshly encoded values.
    pub fn instance(&self, name: &str) -> Option<&Arc<InstanceNamespace>> {
        self.types.get(name).map(|entry| &entry.instance)
    }

    /// The static namespace published under `name`.
    pub fn statics(&self, name: &str) -> Option<&StaticNamespace> {
        self.types.get(name).map(|entry| &entry.statics)
    }

    fn lookup(&self, name: &str) -> BindResult<&RegisteredType> {
        self.types
            .get(name)
            .ok_or_else(|| BindError::UnknownType(name.to_string()))
    }

    /// Calling a published type name: invokes its constructor.
    pub fn construct(&self, type_name: &str, args: &[Value]) -> BindResult<Value> {
        let entry = self.lookup(type_name)?;
        (entry.statics.constructor)(self, args)
    }

    /// Indexing a published type name: invokes a type-level function.
    pub fn call_static(&self, type_name: &str, name: &str, args: &[Value]) -> BindResult<Value> {
        let entry = self.lookup(type_name)?;
        let adapter = entry
            .statics
            .function(name)
            .ok_or_else(|| BindError::UnknownStatic {
                type_name: type_name.to_string(),
                name: name.to_string(),
            })?;
        adapter(self, args)
    }

    /// Method invocation on a value: resolved through the receiver's tag,
    /// with the receiver passed to the adapter as its first argument.
    pub fn call_method(&self, receiver: &Value, method: &str, args: &[Value]) -> BindResult<Value> {
        let tag = value_tag(receiver).ok_or_else(|| BindError::TypeMismatch {
            expected: "registered algebra value".to_string(),
            actual: receiver.kind_name(),
        })?;
        let adapter = tag.method(method).ok_or_else(|| BindError::UnknownMethod {
            type_name: tag.type_name().to_string(),
            method: method.to_string(),
        })?;

        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.push(receiver.clone());
        call_args.extend_from_slice(args);
        adapter(self, &call_args)
    }

    /// Infix operator dispatch: resolved through the first tagged operand,
    /// left then right, so scalar-left expressions like `2 * v` reach the
    /// vector's adapter.
    pub fn call_operator(&self, op: Operator, lhs: &Value, rhs: &Value) -> BindResult<Value> {
        let tag = value_tag(lhs)
            .or_else(|| value_tag(rhs))
            .ok_or_else(|| BindError::TypeMismatch {
                expected: "registered algebra value operand".to_string(),
                actual: format!("{} {} {}", lhs.kind_name(), op, rhs.kind_name()),
            })?;
        let adapter = tag
            .operator(op)
            .ok_or_else(|| BindError::UnknownOperator {
                type_name: tag.type_name().to_string(),
                operator: op.symbol(),
            })?;
        adapter(self, &[lhs.clone(), rhs.clone()])
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.type_names())
            .finish()
    }
}

fn value_tag(value: &Value) -> Option<&Arc<InstanceNamespace>> {
    value.as_record().and_then(Record::tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter;
    use crate::codec::{self, Kind, SCALAR};
    use crate::native;

    const VEC2: Kind = Kind::vector(2, "vec2");

    fn vec2_descriptor() -> TypeDescriptor {
        TypeDescriptor {
            name: "vec2",
            constructor: adapter::constructor(VEC2, &[0.0, 0.0]),
            operators: vec![
                (Operator::Add, adapter::binary(VEC2, VEC2, VEC2, native::vec2_add)),
                (Operator::Mul, adapter::binary_scalar(VEC2, VEC2, native::vec2_scale)),
            ],
            methods: vec![("dot", adapter::binary(VEC2, VEC2, SCALAR, native::vec2_dot))],
            statics: vec![("min", adapter::binary(VEC2, VEC2, VEC2, native::vec2_min))],
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(vec2_descriptor());
        registry
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_constructed_values_carry_the_instance_tag() {
        let registry = registry();
        let v = registry.construct("vec2", &[num(1.0), num(2.0)]).unwrap();

        let record = v.as_record().unwrap();
        assert_eq!(record.type_name(), Some("vec2"));
        assert!(Arc::ptr_eq(
            record.tag().unwrap(),
            registry.instance("vec2").unwrap()
        ));
    }

    #[test]
    fn test_method_receives_receiver_first() {
        let registry = registry();
        let a = registry.construct("vec2", &[num(1.0), num(2.0)]).unwrap();
        let b = registry.construct("vec2", &[num(3.0), num(4.0)]).unwrap();

        assert_eq!(registry.call_method(&a, "dot", &[b]).unwrap(), num(11.0));
    }

    #[test]
    fn test_operator_resolves_through_right_operand() {
        let registry = registry();
        let v = registry.construct("vec2", &[num(1.0), num(2.0)]).unwrap();

        let scaled = registry.call_operator(Operator::Mul, &num(3.0), &v).unwrap();
        assert_eq!(codec::decode(VEC2, &scaled).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_unknown_lookups_error() {
        let registry = registry();
        let v = registry.construct("vec2", &[]).unwrap();

        assert_eq!(
            registry.construct("vec9", &[]).unwrap_err(),
            BindError::UnknownType("vec9".to_string())
        );
        assert!(matches!(
            registry.call_method(&v, "determinant", &[]).unwrap_err(),
            BindError::UnknownMethod { .. }
        ));
        assert!(matches!(
            registry.call_static("vec2", "midpoint", &[]).unwrap_err(),
            BindError::UnknownStatic { .. }
        ));
        assert!(matches!(
            registry.call_operator(Operator::Sub, &v, &v).unwrap_err(),
            BindError::UnknownOperator { .. }
        ));
    }

    #[test]
    fn test_operator_on_untagged_operands_errors() {
        let registry = registry();
        let err = registry
            .call_operator(Operator::Add, &num(1.0), &num(2.0))
            .unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }

    #[test]
    fn test_failed_call_leaves_registry_usable() {
        let registry = registry();
        let v = registry.construct("vec2", &[num(1.0), num(2.0)]).unwrap();

        assert!(registry.call_method(&v, "dot", &[num(1.0)]).is_err());
        assert_eq!(
            registry.call_method(&v, "dot", &[v.clone()]).unwrap(),
            num(5.0)
        );
    }
}
