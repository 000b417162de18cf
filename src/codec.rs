//! Value codec: fixed-size `f32` arrays ↔ host values.
//!
//! One codec parametrized by [`Kind`] serves every vector-like type: fields
//! are named `x,y,z,w` truncated to the dimension, matrices are records of
//! four `c0..c3` column vectors, and the degenerate dimension-1 scalar kind
//! is a bare number rather than a record. Values cross the boundary as host
//! doubles but are rounded through `f32` in both directions.

use crate::error::{BindError, BindResult};
use crate::registry::Registry;
use crate::value::{Record, Value};

pub const FIELD_NAMES: [&str; 4] = ["x", "y", "z", "w"];
pub const COLUMN_NAMES: [&str; 4] = ["c0", "c1", "c2", "c3"];

/// Matrix columns are encoded and decoded through the vec4 codec, so a
/// column of a registered matrix carries the vec4 instance namespace.
const COLUMN_KIND: Kind = Kind::vector(4, "vec4");

/// Geometric layout of a marshalled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One float, marshalled as a bare number. Result type of reductions
    /// (dot, length) and pass-through for scalar operands (angles,
    /// interpolation factors).
    Scalar,
    /// `dim` floats (2..=4), marshalled as a record.
    Vector(usize),
    /// 16 floats, column-major, marshalled as a record of four columns.
    Matrix,
}

/// A marshallable kind: layout plus the registered type name used to
/// resolve the instance-namespace tag at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kind {
    shape: Shape,
    type_name: Option<&'static str>,
}

/// The anonymous scalar kind.
pub const SCALAR: Kind = Kind {
    shape: Shape::Scalar,
    type_name: None,
};

impl Kind {
    pub const fn vector(dim: usize, type_name: &'static str) -> Self {
        Kind {
            shape: Shape::Vector(dim),
            type_name: Some(type_name),
        }
    }

    pub const fn matrix(type_name: &'static str) -> Self {
        Kind {
            shape: Shape::Matrix,
            type_name: Some(type_name),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// Number of floats in the native array for this kind.
    pub fn len(&self) -> usize {
        match self.shape {
            Shape::Scalar => 1,
            Shape::Vector(dim) => dim,
            Shape::Matrix => 16,
        }
    }
}

/// Builds the host value for `data`, tagged with the registry's instance
/// namespace for `kind` when its type is registered.
///
/// Encoding is total: an unregistered type name simply yields an untagged
/// record, mirroring a host whose metatable global has not been published.
pub fn encode(registry: &Registry, kind: Kind, data: &[f32]) -> Value {
    debug_assert_eq!(data.len(), kind.len(), "native array length for {:?}", kind);

    match kind.shape {
        Shape::Scalar => Value::Number(data[0] as f64),
        Shape::Vector(dim) => {
            let mut record = tagged_record(registry, kind);
            for (name, component) in FIELD_NAMES.iter().take(dim).zip(data) {
                record.insert(*name, Value::Number(*component as f64));
            }
            Value::Record(record)
        }
        Shape::Matrix => {
            let mut record = tagged_record(registry, kind);
            for (i, name) in COLUMN_NAMES.iter().enumerate() {
                let column = encode(registry, COLUMN_KIND, &data[i * 4..(i + 1) * 4]);
                record.insert(*name, column);
            }
            Value::Record(record)
        }
    }
}

/// Reads the native array for `kind` back out of a host value.
///
/// Decoding is structural and tag-blind: any record carrying exactly the
/// required numeric fields is accepted, whatever constructed it. Fewer or
/// more fields than the kind requires is a [`BindError::TypeMismatch`],
/// never a silent truncation.
pub fn decode(kind: Kind, value: &Value) -> BindResult<Vec<f32>> {
    match kind.shape {
        Shape::Scalar => match value {
            Value::Number(n) => Ok(vec![*n as f32]),
            other => Err(BindError::TypeMismatch {
                expected: "number".to_string(),
                actual: other.kind_name(),
            }),
        },
        Shape::Vector(dim) => {
            let record = require_record(value, &FIELD_NAMES[..dim])?;
            let mut data = Vec::with_capacity(dim);
            for name in &FIELD_NAMES[..dim] {
                data.push(field_number(record, name)?);
            }
            require_exact_fields(record, &FIELD_NAMES[..dim])?;
            Ok(data)
        }
        Shape::Matrix => {
            let record = require_record(value, &COLUMN_NAMES)?;
            let mut data = Vec::with_capacity(16);
            for name in &COLUMN_NAMES {
                let column = record.get(name).ok_or_else(|| BindError::TypeMismatch {
                    expected: expected_fields(&COLUMN_NAMES),
                    actual: format!("record missing field '{}'", name),
                })?;
                data.extend(decode(COLUMN_KIND, column)?);
            }
            require_exact_fields(record, &COLUMN_NAMES)?;
            Ok(data)
        }
    }
}

fn tagged_record(registry: &Registry, kind: Kind) -> Record {
    match kind.type_name.and_then(|name| registry.instance(name)) {
        Some(tag) => Record::tagged(tag.clone()),
        None => Record::new(),
    }
}

fn require_record<'a>(value: &'a Value, fields: &[&str]) -> BindResult<&'a Record> {
    value.as_record().ok_or_else(|| BindError::TypeMismatch {
        expected: expected_fields(fields),
        actual: value.kind_name(),
    })
}

fn field_number(record: &Record, name: &str) -> BindResult<f32> {
    match record.get(name) {
        Some(Value::Number(n)) => Ok(*n as f32),
        Some(other) => Err(BindError::TypeMismatch {
            expected: format!("number in field '{}'", name),
            actual: other.kind_name(),
        }),
        None => Err(BindError::TypeMismatch {
            expected: format!("record with field '{}'", name),
            actual: format!("record with fields {}", record.field_names().join(", ")),
        }),
    }
}

fn require_exact_fields(record: &Record, fields: &[&str]) -> BindResult<()> {
    if record.len() != fields.len() {
        return Err(BindError::TypeMismatch {
            expected: expected_fields(fields),
            actual: format!("record with {} fields", record.len()),
        });
    }
    Ok(())
}

fn expected_fields(fields: &[&str]) -> String {
    format!("record with fields {}", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_registry() -> Registry {
        Registry::new()
    }

    #[test]
    fn test_scalar_is_a_bare_number() {
        let registry = empty_registry();
        let encoded = encode(&registry, SCALAR, &[2.5]);
        assert_eq!(encoded, Value::Number(2.5));
        assert_eq!(decode(SCALAR, &encoded).unwrap(), vec![2.5]);
    }

    #[test]
    fn test_vector_round_trip() {
        let registry = empty_registry();
        let kind = Kind::vector(3, "vec3");
        let data = [1.0, -2.5, 3.25];

        let encoded = encode(&registry, kind, &data);
        assert_eq!(decode(kind, &encoded).unwrap(), data.to_vec());
    }

    #[test]
    fn test_matrix_round_trip_is_column_major() {
        let registry = empty_registry();
        let kind = Kind::matrix("mat4");
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();

        let encoded = encode(&registry, kind, &data);
        let record = encoded.as_record().unwrap();
        // second column starts at element 4
        let c1 = record.get("c1").unwrap().as_record().unwrap();
        assert_eq!(c1.get("x"), Some(&Value::Number(4.0)));

        assert_eq!(decode(kind, &encoded).unwrap(), data);
    }

    #[test]
    fn test_single_precision_rounding() {
        let registry = empty_registry();
        let encoded = encode(&registry, SCALAR, &[0.1]);
        // 0.1f32 widened to f64, not 0.1f64
        assert_eq!(encoded, Value::Number(0.1f32 as f64));
    }

    #[test]
    fn test_decode_rejects_non_record() {
        let err = decode(Kind::vector(2, "vec2"), &Value::Number(1.0)).unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let mut record = Record::new();
        record.insert("x", Value::Number(1.0));
        record.insert("y", Value::Number(2.0));

        let err = decode(Kind::vector(3, "vec3"), &Value::Record(record)).unwrap_err();
        match err {
            BindError::TypeMismatch { actual, .. } => {
                assert!(actual.contains("x, y"), "actual was: {}", actual)
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_extra_field() {
        let mut record = Record::new();
        record.insert("x", Value::Number(1.0));
        record.insert("y", Value::Number(2.0));
        record.insert("z", Value::Number(3.0));

        let err = decode(Kind::vector(2, "vec2"), &Value::Record(record)).unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }

    #[test]
    fn test_decode_rejects_non_numeric_field() {
        let mut record = Record::new();
        record.insert("x", Value::Number(1.0));
        record.insert("y", Value::Nil);

        let err = decode(Kind::vector(2, "vec2"), &Value::Record(record)).unwrap_err();
        match err {
            BindError::TypeMismatch { expected, actual } => {
                assert_eq!(expected, "number in field 'y'");
                assert_eq!(actual, "nil");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_matrix_decode_recurses_into_columns() {
        let registry = empty_registry();
        let mut bad = Record::new();
        for name in &COLUMN_NAMES {
            bad.insert(*name, encode(&registry, COLUMN_KIND, &[0.0; 4]));
        }
        bad.insert("c2", Value::Number(7.0));

        let err = decode(Kind::matrix("mat4"), &Value::Record(bad)).unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { .. }));
    }
}
