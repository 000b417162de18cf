//! Host-boundary value model.
//!
//! The embedding host is dynamically typed; the only shapes that cross the
//! boundary into this layer are bare numbers, structured records with named
//! numeric fields, and nil. A [`Record`] optionally carries its type's
//! instance namespace as a tag; the tag is the sole dispatch mechanism for
//! operators and methods.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::codec::{COLUMN_NAMES, FIELD_NAMES};
use crate::registry::InstanceNamespace;

/// A host value at the binding boundary.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Number(f64),
    Record(Record),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Name of the value's kind, as used in error messages: `nil`, `number`,
    /// the registered type name for tagged records, or `record` otherwise.
    pub fn kind_name(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::Record(record) => record
                .type_name()
                .map(str::to_string)
                .unwrap_or_else(|| "record".to_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Record(record) => record.fmt(f),
        }
    }
}

/// A structured host record: named fields plus an optional type tag.
///
/// Values produced by registered constructors and adapters are always
/// tagged; the host is free to build untagged records by hand and pass them
/// to explicit function calls, exactly as the embedding environment allows.
#[derive(Debug, Clone, Default)]
pub struct Record {
    tag: Option<Arc<InstanceNamespace>>,
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn tagged(tag: Arc<InstanceNamespace>) -> Self {
        Record {
            tag: Some(tag),
            fields: HashMap::new(),
        }
    }

    /// The attached instance namespace, if any.
    pub fn tag(&self) -> Option<&Arc<InstanceNamespace>> {
        self.tag.as_ref()
    }

    /// The registered type name, if this record is tagged.
    pub fn type_name(&self) -> Option<&str> {
        self.tag.as_deref().map(InstanceNamespace::type_name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in deterministic sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Fields in the wire order of the codec schemes (`x,y,z,w`, `c0..c3`),
    /// or `None` when the record does not match either scheme.
    fn wire_ordered(&self) -> Option<Vec<(&str, &Value)>> {
        for scheme in [&FIELD_NAMES, &COLUMN_NAMES] {
            let present: Vec<(&str, &Value)> = scheme
                .iter()
                .map_while(|name| self.fields.get(*name).map(|v| (*name, v)))
                .collect();
            if !present.is_empty() && present.len() == self.fields.len() {
                return Some(present);
            }
        }
        None
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.type_name() == other.type_name() && self.fields == other.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.type_name().unwrap_or("record");
        match self.wire_ordered() {
            Some(fields) => {
                write!(f, "{}(", name)?;
                for (i, (_, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
            None => {
                write!(f, "{}{{", name)?;
                for (i, field) in self.field_names().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field, self.fields[*field])?;
                }
                write!(f, "}}")
            }
        }
    }
}
