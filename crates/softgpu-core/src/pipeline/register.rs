// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Attribute and uniform registers.
//!
//! A register is one slot of shader-visible storage. Vertex and fragment
//! records carry [`MAX_ATTRIBUTES`](super::MAX_ATTRIBUTES) attribute slots, a
//! program carries [`MAX_UNIFORMS`](super::MAX_UNIFORMS) uniform slots. Each
//! slot holds one of a few shapes and the accessors widen or narrow between
//! them, so reading a slot as the "wrong" shape is always defined.

use crate::math::{Mat4, Vec2, Vec3, Vec4};

/// The shape of an attribute slot or vertex buffer lane.
///
/// Variants are ordered by component count, so `max` picks the wider shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AttributeType {
    /// The slot is unused and must not be read or interpolated.
    #[default]
    Empty,
    /// One 32-bit float.
    Float,
    /// Two packed 32-bit floats.
    Vec2,
    /// Three packed 32-bit floats.
    Vec3,
    /// Four packed 32-bit floats.
    Vec4,
}

impl AttributeType {
    /// Returns the number of `f32` components of this shape.
    pub const fn components(self) -> usize {
        match self {
            AttributeType::Empty => 0,
            AttributeType::Float => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }

    /// Returns the size in bytes of one packed element of this shape.
    pub const fn byte_size(self) -> usize {
        self.components() * std::mem::size_of::<f32>()
    }

    /// Returns `true` for every shape except [`AttributeType::Empty`].
    #[inline]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, AttributeType::Empty)
    }
}

/// One vertex or fragment attribute slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Attribute {
    /// Nothing was written to this slot.
    #[default]
    Empty,
    /// A single float.
    Float(f32),
    /// A two component vector.
    Vec2(Vec2),
    /// A three component vector.
    Vec3(Vec3),
    /// A four component vector.
    Vec4(Vec4),
}

impl Attribute {
    /// Returns the shape currently stored in the slot.
    pub fn ty(&self) -> AttributeType {
        match self {
            Attribute::Empty => AttributeType::Empty,
            Attribute::Float(_) => AttributeType::Float,
            Attribute::Vec2(_) => AttributeType::Vec2,
            Attribute::Vec3(_) => AttributeType::Vec3,
            Attribute::Vec4(_) => AttributeType::Vec4,
        }
    }

    /// Builds an attribute of shape `ty` from the leading components of `c`.
    pub fn from_components(ty: AttributeType, c: [f32; 4]) -> Self {
        match ty {
            AttributeType::Empty => Attribute::Empty,
            AttributeType::Float => Attribute::Float(c[0]),
            AttributeType::Vec2 => Attribute::Vec2(Vec2::new(c[0], c[1])),
            AttributeType::Vec3 => Attribute::Vec3(Vec3::new(c[0], c[1], c[2])),
            AttributeType::Vec4 => Attribute::Vec4(Vec4::from_array(c)),
        }
    }

    /// Returns the raw components, zero padded to four.
    pub fn components(&self) -> [f32; 4] {
        match *self {
            Attribute::Empty => [0.0; 4],
            Attribute::Float(v) => [v, 0.0, 0.0, 0.0],
            Attribute::Vec2(v) => [v.x, v.y, 0.0, 0.0],
            Attribute::Vec3(v) => [v.x, v.y, v.z, 0.0],
            Attribute::Vec4(v) => *v.as_array(),
        }
    }

    /// Reads the slot as a float (the first component).
    #[inline]
    pub fn as_float(&self) -> f32 {
        self.components()[0]
    }

    /// Reads the slot as a `Vec2`; missing components read as zero.
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        let [x, y, ..] = self.components();
        Vec2::new(x, y)
    }

    /// Reads the slot as a `Vec3`; missing components read as zero.
    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        let [x, y, z, _] = self.components();
        Vec3::new(x, y, z)
    }

    /// Reads the slot as a `Vec4`.
    ///
    /// Missing `x`/`y`/`z` read as zero and a missing `w` reads as one, so a
    /// `Vec3` position widens to a homogeneous point. An empty slot is zero.
    pub fn as_vec4(&self) -> Vec4 {
        match *self {
            Attribute::Empty => Vec4::ZERO,
            Attribute::Vec4(v) => v,
            _ => {
                let [x, y, z, _] = self.components();
                Vec4::new(x, y, z, 1.0)
            }
        }
    }

    /// Linearly interpolates two slots component-wise.
    ///
    /// The result takes the wider of the two shapes; components missing from
    /// the narrower operand count as zero.
    pub fn lerp(a: &Attribute, b: &Attribute, t: f32) -> Attribute {
        let ty = a.ty().max(b.ty());
        let (ca, cb) = (a.components(), b.components());
        let mut out = [0.0; 4];
        for (i, o) in out.iter_mut().enumerate().take(ty.components()) {
            *o = ca[i] + t * (cb[i] - ca[i]);
        }
        Attribute::from_components(ty, out)
    }

    /// Blends three slots with the given weights into a value of shape `ty`.
    ///
    /// This is the interpolation primitive of the rasterizer: `weights` are
    /// barycentric coordinates (already perspective-corrected by the caller).
    pub fn weighted(ty: AttributeType, slots: [&Attribute; 3], weights: [f32; 3]) -> Attribute {
        let mut out = [0.0; 4];
        for (slot, w) in slots.iter().zip(weights) {
            let c = slot.components();
            for (i, o) in out.iter_mut().enumerate().take(ty.components()) {
                *o += c[i] * w;
            }
        }
        Attribute::from_components(ty, out)
    }
}

impl From<f32> for Attribute {
    fn from(v: f32) -> Self {
        Attribute::Float(v)
    }
}

impl From<Vec2> for Attribute {
    fn from(v: Vec2) -> Self {
        Attribute::Vec2(v)
    }
}

impl From<Vec3> for Attribute {
    fn from(v: Vec3) -> Self {
        Attribute::Vec3(v)
    }
}

impl From<Vec4> for Attribute {
    fn from(v: Vec4) -> Self {
        Attribute::Vec4(v)
    }
}

/// One uniform slot of a [`Program`](super::Program).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Uniform {
    /// Nothing was bound to this slot.
    #[default]
    Empty,
    /// A single float.
    Float(f32),
    /// A two component vector.
    Vec2(Vec2),
    /// A three component vector.
    Vec3(Vec3),
    /// A four component vector.
    Vec4(Vec4),
    /// A 4x4 matrix.
    Mat4(Mat4),
}

impl Uniform {
    fn components(&self) -> [f32; 4] {
        match *self {
            Uniform::Empty => [0.0; 4],
            Uniform::Float(v) => [v, 0.0, 0.0, 0.0],
            Uniform::Vec2(v) => [v.x, v.y, 0.0, 0.0],
            Uniform::Vec3(v) => [v.x, v.y, v.z, 0.0],
            Uniform::Vec4(v) => *v.as_array(),
            // A matrix read as a vector yields its first column.
            Uniform::Mat4(m) => *m.cols[0].as_array(),
        }
    }

    /// Reads the slot as a float.
    #[inline]
    pub fn as_float(&self) -> f32 {
        self.components()[0]
    }

    /// Reads the slot as a `Vec2`.
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        let [x, y, ..] = self.components();
        Vec2::new(x, y)
    }

    /// Reads the slot as a `Vec3`.
    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        let [x, y, z, _] = self.components();
        Vec3::new(x, y, z)
    }

    /// Reads the slot as a `Vec4`.
    #[inline]
    pub fn as_vec4(&self) -> Vec4 {
        Vec4::from_array(self.components())
    }

    /// Reads the slot as a matrix; anything but a bound matrix reads as identity.
    #[inline]
    pub fn as_mat4(&self) -> Mat4 {
        match self {
            Uniform::Mat4(m) => *m,
            _ => Mat4::IDENTITY,
        }
    }
}

impl From<f32> for Uniform {
    fn from(v: f32) -> Self {
        Uniform::Float(v)
    }
}

impl From<Vec2> for Uniform {
    fn from(v: Vec2) -> Self {
        Uniform::Vec2(v)
    }
}

impl From<Vec3> for Uniform {
    fn from(v: Vec3) -> Self {
        Uniform::Vec3(v)
    }
}

impl From<Vec4> for Uniform {
    fn from(v: Vec4) -> Self {
        Uniform::Vec4(v)
    }
}

impl From<Mat4> for Uniform {
    fn from(m: Mat4) -> Self {
        Uniform::Mat4(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_attribute_type_sizes() {
        assert_eq!(AttributeType::Empty.byte_size(), 0);
        assert_eq!(AttributeType::Float.byte_size(), 4);
        assert_eq!(AttributeType::Vec3.components(), 3);
        assert_eq!(AttributeType::Vec4.byte_size(), 16);
        assert!(AttributeType::Vec2 > AttributeType::Float);
        assert!(!AttributeType::Empty.is_enabled());
    }

    #[test]
    fn test_attribute_widening() {
        let a = Attribute::Vec3(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(a.as_vec4(), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(a.as_vec2(), Vec2::new(1.0, 2.0));
        assert_eq!(a.as_float(), 1.0);
        assert_eq!(Attribute::Float(5.0).as_vec3(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(Attribute::Empty.as_vec4(), Vec4::ZERO);
    }

    #[test]
    fn test_attribute_lerp_takes_wider_shape() {
        let a = Attribute::Vec2(Vec2::new(0.0, 2.0));
        let b = Attribute::Vec3(Vec3::new(4.0, 4.0, 8.0));
        let mid = Attribute::lerp(&a, &b, 0.25);
        assert_eq!(mid.ty(), AttributeType::Vec3);
        let v = mid.as_vec3();
        assert_relative_eq!(v.x, 1.0);
        assert_relative_eq!(v.y, 2.5);
        assert_relative_eq!(v.z, 2.0);
        assert_eq!(Attribute::lerp(&Attribute::Empty, &Attribute::Empty, 0.5), Attribute::Empty);
    }

    #[test]
    fn test_attribute_weighted_uses_requested_shape() {
        let a = Attribute::Vec4(Vec4::new(1.0, 0.0, 0.0, 1.0));
        let b = Attribute::Vec4(Vec4::new(0.0, 1.0, 0.0, 1.0));
        let c = Attribute::Vec4(Vec4::new(0.0, 0.0, 1.0, 1.0));
        let out = Attribute::weighted(AttributeType::Vec3, [&a, &b, &c], [0.5, 0.25, 0.25]);
        assert_eq!(out, Attribute::Vec3(Vec3::new(0.5, 0.25, 0.25)));
    }

    #[test]
    fn test_uniform_accessors() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Uniform::from(m).as_mat4(), m);
        assert_eq!(Uniform::Empty.as_mat4(), Mat4::IDENTITY);
        assert_eq!(Uniform::from(Vec3::ONE).as_vec3(), Vec3::ONE);
        assert_eq!(Uniform::from(1.0).as_float(), 1.0);
        assert_eq!(Uniform::Float(0.0).as_float(), 0.0);
    }
}
