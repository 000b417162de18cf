//! Operation adapter generator.
//!
//! Each generator takes the operand/result [`Kind`]s plus a native routine
//! and returns a host-callable adapter performing decode → native call →
//! encode. Adapters are pure with respect to host state: they read their
//! operands, never mutate them, and produce one fresh value per call.

use std::sync::Arc;

use crate::codec::{self, Kind, Shape};
use crate::error::{BindError, BindResult};
use crate::native;
use crate::registry::Registry;
use crate::value::Value;

/// A host-callable function bridging one native routine.
pub type Adapter = Arc<dyn Fn(&Registry, &[Value]) -> BindResult<Value> + Send + Sync>;

fn check_arity(what: &str, expected: usize, args: &[Value]) -> BindResult<()> {
    if args.len() != expected {
        return Err(BindError::ArityMismatch {
            what: what.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn scalar_operand(value: &Value) -> BindResult<f32> {
    match value {
        Value::Number(n) => Ok(*n as f32),
        other => Err(BindError::TypeMismatch {
            expected: "number".to_string(),
            actual: other.kind_name(),
        }),
    }
}

/// One operand of kind `a`, result of kind `r`.
pub fn unary(a: Kind, r: Kind, op: native::UnaryFn) -> Adapter {
    Arc::new(move |registry, args| {
        check_arity("unary operation", 1, args)?;
        let av = codec::decode(a, &args[0])?;
        Ok(codec::encode(registry, r, &op(&av)))
    })
}

/// Two operands of kinds `a` and `b`, decoded in call order.
pub fn binary(a: Kind, b: Kind, r: Kind, op: native::BinaryFn) -> Adapter {
    Arc::new(move |registry, args| {
        check_arity("binary operation", 2, args)?;
        let av = codec::decode(a, &args[0])?;
        let bv = codec::decode(b, &args[1])?;
        Ok(codec::encode(registry, r, &op(&av, &bv)))
    })
}

/// One structured operand of kind `a` and one scalar, in either order.
///
/// If the first argument is numeric it is the scalar and the second must
/// decode as `a`; otherwise the first decodes as `a` and the second must be
/// numeric. This makes scalar multiplication commute at the call site:
/// `v * 2` and `2 * v` resolve to the same native call.
pub fn binary_scalar(a: Kind, r: Kind, op: native::BinaryScalarFn) -> Adapter {
    Arc::new(move |registry, args| {
        check_arity("binary operation", 2, args)?;
        let (operand, scalar) = match &args[0] {
            Value::Number(n) => (&args[1], *n as f32),
            _ => (&args[0], scalar_operand(&args[1])?),
        };
        let av = codec::decode(a, operand)?;
        Ok(codec::encode(registry, r, &op(&av, scalar)))
    })
}

/// Three operands of kinds `a`, `b`, `c`, decoded in call order. The third
/// kind is typically [`codec::SCALAR`] (an interpolation factor).
pub fn ternary(a: Kind, b: Kind, c: Kind, r: Kind, op: native::TernaryFn) -> Adapter {
    Arc::new(move |registry, args| {
        check_arity("ternary operation", 3, args)?;
        let av = codec::decode(a, &args[0])?;
        let bv = codec::decode(b, &args[1])?;
        let cv = codec::decode(c, &args[2])?;
        Ok(codec::encode(registry, r, &op(&av, &bv, &cv)))
    })
}

/// Constructor adapter for `kind`, seeded from the per-field `identity`
/// template (zeros for ordinary vector fields, 1 for the quaternion `w`,
/// the identity block for matrices).
///
/// Positional numeric arguments overwrite template fields left-to-right.
/// Omitted trailing arguments and explicit nil keep their template value;
/// any other non-numeric argument is a [`BindError::TypeMismatch`] and
/// excess arguments are a [`BindError::ArityMismatch`]. Matrix constructors
/// take no arguments at all.
pub fn constructor(kind: Kind, identity: &'static [f32]) -> Adapter {
    debug_assert_eq!(identity.len(), kind.len());
    let what = format!("{} constructor", kind.type_name().unwrap_or("anonymous"));

    Arc::new(move |registry, args| {
        let arity = match kind.shape() {
            Shape::Matrix => 0,
            Shape::Vector(dim) => dim,
            Shape::Scalar => 1,
        };
        if args.len() > arity {
            return Err(BindError::ArityMismatch {
                what: what.clone(),
                expected: arity,
                actual: args.len(),
            });
        }

        let mut data = identity.to_vec();
        for (slot, arg) in data.iter_mut().zip(args) {
            match arg {
                Value::Number(n) => *slot = *n as f32,
                Value::Nil => {}
                other => {
                    return Err(BindError::TypeMismatch {
                        expected: "number".to_string(),
                        actual: other.kind_name(),
                    })
                }
            }
        }
        Ok(codec::encode(registry, kind, &data))
    })
}
