//! The standard type catalogue and registration entry point.
//!
//! One descriptor per algebraic type, assembled as data the way the
//! registry expects it:
//!
//! - `vec2`, `vec3`, `vec4` — `+` `-` `*`(scalar); dot/cross/normalize/
//!   length/sqr_length; min/max statics
//! - `quat` — `+` `-` `*`(Hamilton product); rotation methods; from_matrix
//!   and from_axis_angle statics
//! - `mat4` — `*`; inverse/transpose; from_quat static

pub mod matrix;
pub mod quaternion;
pub mod vector;

use crate::registry::{Registry, TypeDescriptor};

pub use matrix::MAT4;
pub use quaternion::QUAT;
pub use vector::{VEC2, VEC3, VEC4};

/// Descriptors for the standard catalogue, in publication order.
pub fn standard_types() -> Vec<TypeDescriptor> {
    vec![
        vector::vec2(),
        vector::vec3(),
        vector::vec4(),
        quaternion::quat(),
        matrix::mat4(),
    ]
}

/// Builds a registry with the whole standard catalogue published.
pub fn load_types() -> Registry {
    let mut registry = Registry::new();
    registry.register_all(standard_types());
    registry
}
