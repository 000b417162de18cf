//! 4×4 matrix type descriptor.

use crate::adapter;
use crate::codec::Kind;
use crate::native;
use crate::registry::{Operator, TypeDescriptor};
use crate::types::quaternion::QUAT;

pub const MAT4: Kind = Kind::matrix("mat4");

#[rustfmt::skip]
const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

pub fn mat4() -> TypeDescriptor {
    TypeDescriptor {
        name: "mat4",
        constructor: adapter::constructor(MAT4, &IDENTITY),
        operators: vec![(
            Operator::Mul,
            adapter::binary(MAT4, MAT4, MAT4, native::mat4_mul),
        )],
        methods: vec![
            ("inverse", adapter::unary(MAT4, MAT4, native::mat4_inverse)),
            ("transpose", adapter::unary(MAT4, MAT4, native::mat4_transpose)),
        ],
        statics: vec![(
            "from_quat",
            adapter::unary(QUAT, MAT4, native::mat4_from_quat),
        )],
    }
}
