//! glambind: a marshalling and dispatch layer exposing fixed-dimension
//! vector, quaternion, and matrix algebra to a dynamically-typed embedding
//! host.
//!
//! The mathematics is delegated to `glam`; this crate owns the boundary:
//! converting between host records and native `f32` arrays ([`codec`]),
//! wrapping N-ary native routines into host-callable adapters ([`adapter`]),
//! and assembling per-type operator/method/static namespaces from
//! declarative descriptors ([`registry`], [`types`]).
//!
//! ```
//! use glambind::{load_types, Operator, Value};
//!
//! let registry = load_types();
//! let n = |x: f64| Value::Number(x);
//!
//! let v1 = registry.construct("vec3", &[n(1.0), n(2.0), n(3.0)]).unwrap();
//! let v2 = registry.construct("vec3", &[n(4.0), n(5.0), n(6.0)]).unwrap();
//!
//! let sum = registry.call_operator(Operator::Add, &v1, &v2).unwrap();
//! assert_eq!(sum.to_string(), "vec3(5, 7, 9)");
//!
//! let dot = registry.call_method(&v1, "dot", &[v2]).unwrap();
//! assert_eq!(dot, n(32.0));
//! ```

pub mod adapter;
pub mod codec;
pub mod error;
pub mod native;
pub mod registry;
pub mod types;
pub mod value;

pub use adapter::Adapter;
pub use codec::{Kind, Shape};
pub use error::{BindError, BindResult};
pub use registry::{InstanceNamespace, Operator, Registry, StaticNamespace, TypeDescriptor};
pub use types::load_types;
pub use value::{Record, Value};
