//! Native routine contract.
//!
//! The mathematics lives in `glam`; this module is the only one that touches
//! it. Every routine is normalized to one internal convention — operand
//! slices in, result array out — whatever shape the underlying call has
//! (method, operator, by-value constructor). Routines are total: degenerate
//! inputs (normalizing a zero-length vector, inverting a singular matrix)
//! produce whatever non-finite values `glam` produces, unintercepted.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

pub type UnaryFn = fn(&[f32]) -> Vec<f32>;
pub type BinaryFn = fn(&[f32], &[f32]) -> Vec<f32>;
pub type BinaryScalarFn = fn(&[f32], f32) -> Vec<f32>;
pub type TernaryFn = fn(&[f32], &[f32], &[f32]) -> Vec<f32>;

fn vec2(v: &[f32]) -> Vec2 {
    Vec2::from_slice(v)
}

fn vec3(v: &[f32]) -> Vec3 {
    Vec3::from_slice(v)
}

fn vec4(v: &[f32]) -> Vec4 {
    Vec4::from_slice(v)
}

fn quat(v: &[f32]) -> Quat {
    Quat::from_slice(v)
}

fn mat4(v: &[f32]) -> Mat4 {
    Mat4::from_cols_slice(v)
}

// vec2

pub fn vec2_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    (vec2(a) + vec2(b)).to_array().to_vec()
}

pub fn vec2_sub(a: &[f32], b: &[f32]) -> Vec<f32> {
    (vec2(a) - vec2(b)).to_array().to_vec()
}

pub fn vec2_scale(a: &[f32], s: f32) -> Vec<f32> {
    (vec2(a) * s).to_array().to_vec()
}

pub fn vec2_dot(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec![vec2(a).dot(vec2(b))]
}

/// The 2D cross product is the z component of the 3D one.
pub fn vec2_cross(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec![vec2(a).perp_dot(vec2(b))]
}

pub fn vec2_normalize(a: &[f32]) -> Vec<f32> {
    vec2(a).normalize().to_array().to_vec()
}

pub fn vec2_length(a: &[f32]) -> Vec<f32> {
    vec![vec2(a).length()]
}

pub fn vec2_sqr_length(a: &[f32]) -> Vec<f32> {
    vec![vec2(a).length_squared()]
}

pub fn vec2_min(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec2(a).min(vec2(b)).to_array().to_vec()
}

pub fn vec2_max(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec2(a).max(vec2(b)).to_array().to_vec()
}

// vec3

pub fn vec3_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    (vec3(a) + vec3(b)).to_array().to_vec()
}

pub fn vec3_sub(a: &[f32], b: &[f32]) -> Vec<f32> {
    (vec3(a) - vec3(b)).to_array().to_vec()
}

pub fn vec3_scale(a: &[f32], s: f32) -> Vec<f32> {
    (vec3(a) * s).to_array().to_vec()
}

pub fn vec3_dot(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec![vec3(a).dot(vec3(b))]
}

pub fn vec3_cross(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec3(a).cross(vec3(b)).to_array().to_vec()
}

pub fn vec3_normalize(a: &[f32]) -> Vec<f32> {
    vec3(a).normalize().to_array().to_vec()
}

pub fn vec3_length(a: &[f32]) -> Vec<f32> {
    vec![vec3(a).length()]
}

pub fn vec3_sqr_length(a: &[f32]) -> Vec<f32> {
    vec![vec3(a).length_squared()]
}

pub fn vec3_min(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec3(a).min(vec3(b)).to_array().to_vec()
}

pub fn vec3_max(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec3(a).max(vec3(b)).to_array().to_vec()
}

// vec4

pub fn vec4_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    (vec4(a) + vec4(b)).to_array().to_vec()
}

pub fn vec4_sub(a: &[f32], b: &[f32]) -> Vec<f32> {
    (vec4(a) - vec4(b)).to_array().to_vec()
}

pub fn vec4_scale(a: &[f32], s: f32) -> Vec<f32> {
    (vec4(a) * s).to_array().to_vec()
}

pub fn vec4_dot(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec![vec4(a).dot(vec4(b))]
}

pub fn vec4_normalize(a: &[f32]) -> Vec<f32> {
    vec4(a).normalize().to_array().to_vec()
}

pub fn vec4_length(a: &[f32]) -> Vec<f32> {
    vec![vec4(a).length()]
}

pub fn vec4_sqr_length(a: &[f32]) -> Vec<f32> {
    vec![vec4(a).length_squared()]
}

pub fn vec4_min(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec4(a).min(vec4(b)).to_array().to_vec()
}

pub fn vec4_max(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec4(a).max(vec4(b)).to_array().to_vec()
}

// quat

pub fn quat_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    (quat(a) + quat(b)).to_array().to_vec()
}

pub fn quat_sub(a: &[f32], b: &[f32]) -> Vec<f32> {
    (quat(a) - quat(b)).to_array().to_vec()
}

pub fn quat_mul(a: &[f32], b: &[f32]) -> Vec<f32> {
    (quat(a) * quat(b)).to_array().to_vec()
}

pub fn quat_dot(a: &[f32], b: &[f32]) -> Vec<f32> {
    vec![quat(a).dot(quat(b))]
}

pub fn quat_inverse(a: &[f32]) -> Vec<f32> {
    quat(a).inverse().to_array().to_vec()
}

pub fn quat_conjugate(a: &[f32]) -> Vec<f32> {
    quat(a).conjugate().to_array().to_vec()
}

pub fn quat_normalize(a: &[f32]) -> Vec<f32> {
    quat(a).normalize().to_array().to_vec()
}

pub fn quat_sqr_length(a: &[f32]) -> Vec<f32> {
    vec![quat(a).length_squared()]
}

pub fn quat_rotate_vec3(a: &[f32], b: &[f32]) -> Vec<f32> {
    (quat(a) * vec3(b)).to_array().to_vec()
}

pub fn quat_slerp(a: &[f32], b: &[f32], t: &[f32]) -> Vec<f32> {
    quat(a).slerp(quat(b), t[0]).to_array().to_vec()
}

pub fn quat_from_mat4(m: &[f32]) -> Vec<f32> {
    Quat::from_mat4(&mat4(m)).to_array().to_vec()
}

/// `axis` must be a unit vector, per the native library's contract.
pub fn quat_from_axis_angle(axis: &[f32], angle: f32) -> Vec<f32> {
    Quat::from_axis_angle(vec3(axis), angle).to_array().to_vec()
}

// mat4

pub fn mat4_mul(a: &[f32], b: &[f32]) -> Vec<f32> {
    (mat4(a) * mat4(b)).to_cols_array().to_vec()
}

pub fn mat4_inverse(a: &[f32]) -> Vec<f32> {
    mat4(a).inverse().to_cols_array().to_vec()
}

pub fn mat4_transpose(a: &[f32]) -> Vec<f32> {
    mat4(a).transpose().to_cols_array().to_vec()
}

pub fn mat4_from_quat(q: &[f32]) -> Vec<f32> {
    Mat4::from_quat(quat(q)).to_cols_array().to_vec()
}
