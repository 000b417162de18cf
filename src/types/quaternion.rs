//! Quaternion type descriptor.

use crate::adapter;
use crate::codec::{Kind, SCALAR};
use crate::native;
use crate::registry::{Operator, TypeDescriptor};
use crate::types::matrix::MAT4;
use crate::types::vector::VEC3;

pub const QUAT: Kind = Kind::vector(4, "quat");

/// "No rotation": the constructor defaults `w` to the multiplicative
/// identity, not 0.
const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub fn quat() -> TypeDescriptor {
    TypeDescriptor {
        name: "quat",
        constructor: adapter::constructor(QUAT, &IDENTITY),
        operators: vec![
            (Operator::Add, adapter::binary(QUAT, QUAT, QUAT, native::quat_add)),
            (Operator::Sub, adapter::binary(QUAT, QUAT, QUAT, native::quat_sub)),
            (Operator::Mul, adapter::binary(QUAT, QUAT, QUAT, native::quat_mul)),
        ],
        methods: vec![
            ("dot", adapter::binary(QUAT, QUAT, SCALAR, native::quat_dot)),
            ("inverse", adapter::unary(QUAT, QUAT, native::quat_inverse)),
            ("conjugate", adapter::unary(QUAT, QUAT, native::quat_conjugate)),
            ("normalize", adapter::unary(QUAT, QUAT, native::quat_normalize)),
            ("sqr_length", adapter::unary(QUAT, SCALAR, native::quat_sqr_length)),
            ("mul_vec3", adapter::binary(QUAT, VEC3, VEC3, native::quat_rotate_vec3)),
            (
                "slerp_to",
                adapter::ternary(QUAT, QUAT, SCALAR, QUAT, native::quat_slerp),
            ),
        ],
        statics: vec![
            ("from_matrix", adapter::unary(MAT4, QUAT, native::quat_from_mat4)),
            (
                "from_axis_angle",
                adapter::binary_scalar(VEC3, QUAT, native::quat_from_axis_angle),
            ),
        ],
    }
}
