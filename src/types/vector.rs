//! Vector type descriptors.

use crate::adapter;
use crate::codec::{Kind, SCALAR};
use crate::native;
use crate::registry::{Operator, TypeDescriptor};

pub const VEC2: Kind = Kind::vector(2, "vec2");
pub const VEC3: Kind = Kind::vector(3, "vec3");
pub const VEC4: Kind = Kind::vector(4, "vec4");

pub fn vec2() -> TypeDescriptor {
    TypeDescriptor {
        name: "vec2",
        constructor: adapter::constructor(VEC2, &[0.0, 0.0]),
        operators: vec![
            (Operator::Add, adapter::binary(VEC2, VEC2, VEC2, native::vec2_add)),
            (Operator::Sub, adapter::binary(VEC2, VEC2, VEC2, native::vec2_sub)),
            (Operator::Mul, adapter::binary_scalar(VEC2, VEC2, native::vec2_scale)),
        ],
        methods: vec![
            ("dot", adapter::binary(VEC2, VEC2, SCALAR, native::vec2_dot)),
            ("cross", adapter::binary(VEC2, VEC2, SCALAR, native::vec2_cross)),
            ("normalize", adapter::unary(VEC2, VEC2, native::vec2_normalize)),
            ("length", adapter::unary(VEC2, SCALAR, native::vec2_length)),
            ("sqr_length", adapter::unary(VEC2, SCALAR, native::vec2_sqr_length)),
        ],
        statics: vec![
            ("min", adapter::binary(VEC2, VEC2, VEC2, native::vec2_min)),
            ("max", adapter::binary(VEC2, VEC2, VEC2, native::vec2_max)),
        ],
    }
}

pub fn vec3() -> TypeDescriptor {
    TypeDescriptor {
        name: "vec3",
        constructor: adapter::constructor(VEC3, &[0.0, 0.0, 0.0]),
        operators: vec![
            (Operator::Add, adapter::binary(VEC3, VEC3, VEC3, native::vec3_add)),
            (Operator::Sub, adapter::binary(VEC3, VEC3, VEC3, native::vec3_sub)),
            (Operator::Mul, adapter::binary_scalar(VEC3, VEC3, native::vec3_scale)),
        ],
        methods: vec![
            ("dot", adapter::binary(VEC3, VEC3, SCALAR, native::vec3_dot)),
            ("cross", adapter::binary(VEC3, VEC3, VEC3, native::vec3_cross)),
            ("normalize", adapter::unary(VEC3, VEC3, native::vec3_normalize)),
            ("length", adapter::unary(VEC3, SCALAR, native::vec3_length)),
            ("sqr_length", adapter::unary(VEC3, SCALAR, native::vec3_sqr_length)),
        ],
        statics: vec![
            ("min", adapter::binary(VEC3, VEC3, VEC3, native::vec3_min)),
            ("max", adapter::binary(VEC3, VEC3, VEC3, native::vec3_max)),
        ],
    }
}

pub fn vec4() -> TypeDescriptor {
    TypeDescriptor {
        name: "vec4",
        constructor: adapter::constructor(VEC4, &[0.0, 0.0, 0.0, 0.0]),
        operators: vec![
            (Operator::Add, adapter::binary(VEC4, VEC4, VEC4, native::vec4_add)),
            (Operator::Sub, adapter::binary(VEC4, VEC4, VEC4, native::vec4_sub)),
            (Operator::Mul, adapter::binary_scalar(VEC4, VEC4, native::vec4_scale)),
        ],
        methods: vec![
            ("dot", adapter::binary(VEC4, VEC4, SCALAR, native::vec4_dot)),
            ("normalize", adapter::unary(VEC4, VEC4, native::vec4_normalize)),
            ("length", adapter::unary(VEC4, SCALAR, native::vec4_length)),
            ("sqr_length", adapter::unary(VEC4, SCALAR, native::vec4_sqr_length)),
        ],
        statics: vec![
            ("min", adapter::binary(VEC4, VEC4, VEC4, native::vec4_min)),
            ("max", adapter::binary(VEC4, VEC4, VEC4, native::vec4_max)),
        ],
    }
}
