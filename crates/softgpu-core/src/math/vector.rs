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

//! Provides 2D, 3D, and 4D vector types and their associated operations.

use super::EPSILON;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub};

/// Implements the component-wise arithmetic shared by every vector type.
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }, $len:literal) => {
        impl Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul for $ty {
            type Output = Self;
            /// Multiplies two vectors component-wise.
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f32) -> Self {
                let inv = 1.0 / rhs;
                Self { $($field: self.$field * inv),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Index<usize> for $ty {
            type Output = f32;
            /// # Panics
            /// Panics if `index` is out of range for this vector.
            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut bytemuck::cast_mut::<$ty, [f32; $len]>(self)[index]
            }
        }

        impl $ty {
            /// Number of `f32` components.
            pub const LEN: usize = $len;

            /// Views the vector as a fixed-size array of components.
            #[inline]
            pub fn as_array(&self) -> &[f32; $len] {
                bytemuck::cast_ref(self)
            }

            /// Builds the vector from a component array.
            #[inline]
            pub fn from_array(a: [f32; $len]) -> Self {
                bytemuck::cast(a)
            }

            /// Calculates the dot product of this vector and another.
            #[inline]
            pub fn dot(&self, rhs: Self) -> f32 {
                0.0 $(+ self.$field * rhs.$field)+
            }

            /// Calculates the squared length (magnitude) of the vector.
            #[inline]
            pub fn length_squared(&self) -> f32 {
                self.dot(*self)
            }

            /// Calculates the length (magnitude) of the vector.
            #[inline]
            pub fn length(&self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns a unit-length copy, or zero if the vector is degenerate.
            #[inline]
            pub fn normalize(&self) -> Self {
                let len_sq = self.length_squared();
                if len_sq > EPSILON * EPSILON {
                    *self * (1.0 / len_sq.sqrt())
                } else {
                    Self::ZERO
                }
            }

            /// Linear interpolation `start + (end - start) * t`; `t` is not clamped.
            #[inline]
            pub fn lerp(start: Self, end: Self, t: f32) -> Self {
                Self { $($field: start.$field + (end.$field - start.$field) * t),+ }
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
        }
    };
}

/// A 2-dimensional vector with `f32` components.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

/// A 3-dimensional vector with `f32` components.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

/// A 4-dimensional vector with `f32` components, used for homogeneous
/// coordinates (clip-space positions) and RGBA colors.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec4 {
    /// The x (or red) component.
    pub x: f32,
    /// The y (or green) component.
    pub y: f32,
    /// The z (or blue) component.
    pub z: f32,
    /// The w (or alpha) component.
    pub w: f32,
}

impl_vector_ops!(Vec2 { x, y }, 2);
impl_vector_ops!(Vec3 { x, y, z }, 3);
impl_vector_ops!(Vec4 { x, y, z, w }, 4);

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with every component equal to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// 2D cross product (the z component of the 3D cross product).
    #[inline]
    pub fn perp_dot(&self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with every component equal to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Extends the vector with a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);
    /// The unit vector along X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The unit vector along Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit vector along Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The unit vector along W.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new `Vec4` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with every component equal to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v, w: v }
    }

    /// Returns the `[x, y, z]` components as a `Vec3`, discarding `w`.
    #[inline]
    pub const fn truncate(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the `[x, y]` components.
    #[inline]
    pub const fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_component_wise_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_relative_eq!((b / 2.0).z, 3.0);
    }

    #[test]
    fn test_dot_cross_length() {
        assert_relative_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_relative_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_relative_eq!(Vec4::new(1.0, 1.0, 1.0, 1.0).length_squared(), 4.0);
    }

    #[test]
    fn test_normalize_degenerate_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_relative_eq!(Vec3::new(0.0, 1000.0, 0.0).normalize().y, 1.0);
    }

    #[test]
    fn test_lerp_is_unclamped() {
        let v = Vec4::lerp(Vec4::ZERO, Vec4::ONE, 1.5);
        assert_relative_eq!(v.w, 1.5);
        assert_eq!(Vec2::lerp(Vec2::ZERO, Vec2::new(2.0, 4.0), 0.5), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_indexing() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
        assert_eq!(Vec3::from_array([1.0, 2.0, 3.0]), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = Vec2::ZERO;
        let _ = v[2];
    }

    #[test]
    fn test_perp_dot_sign_follows_orientation() {
        assert!(Vec2::new(1.0, 0.0).perp_dot(Vec2::new(0.0, 1.0)) > 0.0);
        assert!(Vec2::new(0.0, 1.0).perp_dot(Vec2::new(1.0, 0.0)) < 0.0);
    }
}
